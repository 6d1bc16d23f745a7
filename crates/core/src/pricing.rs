//! Cart Pricing

use rust_decimal::{Decimal, RoundingStrategy};
use rustc_hash::FxHashMap;
use uuid::Uuid;

use crate::{breakdown::BranchBreakdown, items::CartRequest, prices::BranchPriceRow};

/// The ranked result of comparing a cart across branches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartCalculation {
    /// Branch breakdowns in display order: full-coverage branches first,
    /// cheapest first; then partial branches, most items covered first.
    pub branches: Vec<BranchBreakdown>,

    /// The branch a shopper should buy from: the cheapest full-coverage
    /// branch, or the best partial branch when none covers everything.
    /// `None` when no branch stocks any requested product.
    pub cheapest_branch_id: Option<Uuid>,

    /// Total at the cheapest branch, zero when there are no branches.
    pub cheapest_total: Decimal,

    /// Difference between the most and least expensive full-coverage
    /// branches. Zero whenever fewer than two branches cover the whole cart.
    pub max_savings: Decimal,
}

impl CartCalculation {
    /// The result when no branch stocks any requested product.
    pub fn empty() -> Self {
        Self {
            branches: Vec::new(),
            cheapest_branch_id: None,
            cheapest_total: Decimal::ZERO,
            max_savings: Decimal::ZERO,
        }
    }
}

/// Rounds a monetary value to whole cents, half-up.
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Compares the requested cart across every branch present in `rows`.
///
/// Groups rows by branch, marks coverage, ranks full-coverage branches ahead
/// of partial ones, and computes the savings spread between full-coverage
/// branches. Rows for products that are not in the request are ignored.
pub fn calculate(request: &CartRequest, rows: Vec<BranchPriceRow>) -> CartCalculation {
    let total_items = request.distinct_items();

    let mut groups: FxHashMap<Uuid, BranchBreakdown> = FxHashMap::default();

    for row in rows {
        let Some(quantity) = request.quantity(row.product_id) else {
            continue;
        };

        let breakdown = groups
            .entry(row.branch_id)
            .or_insert_with(|| BranchBreakdown::for_branch(&row, total_items));

        breakdown.push_line(row, quantity);
    }

    let mut full = Vec::new();
    let mut partial = Vec::new();

    for mut breakdown in groups.into_values() {
        breakdown.total = round_money(breakdown.total);
        breakdown.has_all_items = breakdown.item_count == total_items;

        if breakdown.has_all_items {
            full.push(breakdown);
        } else {
            partial.push(breakdown);
        }
    }

    // Branch id as the final key keeps tied branches in a stable order.
    full.sort_by(|a, b| a.total.cmp(&b.total).then(a.branch_id.cmp(&b.branch_id)));
    partial.sort_by(|a, b| {
        b.item_count
            .cmp(&a.item_count)
            .then(a.total.cmp(&b.total))
            .then(a.branch_id.cmp(&b.branch_id))
    });

    let max_savings = match (full.first(), full.last()) {
        (Some(cheapest), Some(priciest)) if full.len() > 1 => {
            round_money(priciest.total - cheapest.total)
        }
        _ => Decimal::ZERO,
    };

    // Savings are only meaningful between branches that stock the whole
    // cart; with no such branch, the best partial branch is still reported
    // as the place to shop.
    let cheapest = full.first().or_else(|| partial.first());
    let cheapest_branch_id = cheapest.map(|breakdown| breakdown.branch_id);
    let cheapest_total = cheapest.map_or(Decimal::ZERO, |breakdown| breakdown.total);

    let mut branches = full;
    branches.append(&mut partial);

    CartCalculation {
        branches,
        cheapest_branch_id,
        cheapest_total,
        max_savings,
    }
}
