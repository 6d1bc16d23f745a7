//! Branch Breakdowns

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::prices::BranchPriceRow;

/// One priced cart line at a particular branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    /// The requested product.
    pub product_id: Uuid,

    /// Display name of the product.
    pub product_name: String,

    /// Product image URL, when one exists.
    pub product_image: Option<String>,

    /// Vendor's own page for the listing, when provided.
    pub external_url: Option<String>,

    /// The branch's listed unit price, unaffected by quantity.
    pub unit_price: Decimal,

    /// Units requested by the shopper.
    pub quantity: u32,
}

/// How much of the requested cart one branch can supply, and at what cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchBreakdown {
    /// The branch.
    pub branch_id: Uuid,

    /// Display name of the branch.
    pub branch_name: String,

    /// The vendor that owns the branch.
    pub vendor_id: Uuid,

    /// Display name of the vendor.
    pub vendor_name: String,

    /// Town the branch is located in.
    pub town: String,

    /// Cost of the covered lines, `unit_price * quantity` summed and rounded
    /// to whole cents.
    pub total: Decimal,

    /// Number of distinct requested products this branch stocks. Never
    /// exceeds [`total_items`](Self::total_items).
    pub item_count: usize,

    /// Number of distinct products in the request.
    pub total_items: usize,

    /// Whether this branch stocks the entire request.
    pub has_all_items: bool,

    /// The covered lines.
    pub items: Vec<LineItem>,
}

impl BranchBreakdown {
    pub(crate) fn for_branch(row: &BranchPriceRow, total_items: usize) -> Self {
        Self {
            branch_id: row.branch_id,
            branch_name: row.branch_name.clone(),
            vendor_id: row.vendor_id,
            vendor_name: row.vendor_name.clone(),
            town: row.town.clone(),
            total: Decimal::ZERO,
            item_count: 0,
            total_items,
            has_all_items: false,
            items: Vec::new(),
        }
    }

    pub(crate) fn push_line(&mut self, row: BranchPriceRow, quantity: u32) {
        self.total += row.price * Decimal::from(quantity);
        self.item_count += 1;
        self.items.push(LineItem {
            product_id: row.product_id,
            product_name: row.product_name,
            product_image: row.product_image,
            external_url: row.external_url,
            unit_price: row.price,
            quantity,
        });
    }
}
