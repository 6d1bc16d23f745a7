//! Branch Prices

use rust_decimal::Decimal;
use uuid::Uuid;

/// One in-stock (branch, product) price listing.
///
/// Rows are supplied by the data layer pre-filtered to approved, active
/// vendors and branches; the engine treats them as read-only input and
/// assumes at most one row per (branch, product) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchPriceRow {
    /// The branch carrying the product.
    pub branch_id: Uuid,

    /// Display name of the branch.
    pub branch_name: String,

    /// The vendor that owns the branch.
    pub vendor_id: Uuid,

    /// Display name of the vendor.
    pub vendor_name: String,

    /// Town the branch is located in.
    pub town: String,

    /// Unit price at this branch.
    pub price: Decimal,

    /// The listed product.
    pub product_id: Uuid,

    /// Display name of the product.
    pub product_name: String,

    /// Product image URL, when one has been uploaded.
    pub product_image: Option<String>,

    /// Vendor's own page for the listing, when provided.
    pub external_url: Option<String>,
}
