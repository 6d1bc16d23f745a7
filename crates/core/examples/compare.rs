//! Compares a two-item cart across three hardcoded branches and prints the
//! ranked result.

use rust_decimal::Decimal;
use uuid::Uuid;

use made_market::{
    items::{CartRequest, RequestedItem},
    prices::BranchPriceRow,
    pricing::calculate,
};

fn listing(branch: Uuid, branch_name: &str, product: Uuid, name: &str, cents: i64) -> BranchPriceRow {
    BranchPriceRow {
        branch_id: branch,
        branch_name: branch_name.to_string(),
        vendor_id: Uuid::new_v4(),
        vendor_name: branch_name.to_string(),
        town: "Mosta".to_string(),
        price: Decimal::new(cents, 2),
        product_id: product,
        product_name: name.to_string(),
        product_image: None,
        external_url: None,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let milk = Uuid::new_v4();
    let bread = Uuid::new_v4();

    let (greens, valley, corner) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());

    let request = CartRequest::new(&[
        RequestedItem::new(milk, 2),
        RequestedItem::new(bread, 1),
    ])?;

    let rows = vec![
        listing(greens, "Greens", milk, "Milk 1L", 119),
        listing(greens, "Greens", bread, "Maltese Loaf", 105),
        listing(valley, "Valley Mart", milk, "Milk 1L", 99),
        listing(valley, "Valley Mart", bread, "Maltese Loaf", 120),
        listing(corner, "Corner Shop", bread, "Maltese Loaf", 89),
    ];

    let calculation = calculate(&request, rows);

    for breakdown in &calculation.branches {
        println!(
            "{:<12} total {:>6}  covers {}/{}{}",
            breakdown.branch_name,
            breakdown.total,
            breakdown.item_count,
            breakdown.total_items,
            if breakdown.has_all_items { "  (full cart)" } else { "" },
        );
    }

    println!("max savings: {}", calculation.max_savings);

    Ok(())
}
