//! Branch Price Records

use rust_decimal::Decimal;
use sqlx::{FromRow, Row, postgres::PgRow};
use uuid::Uuid;

use made_market::prices::BranchPriceRow;

/// One in-stock (branch, product) listing as read from storage.
#[derive(Debug, Clone)]
pub struct BranchPriceRecord {
    pub branch_uuid: Uuid,
    pub branch_name: String,
    pub vendor_uuid: Uuid,
    pub vendor_name: String,
    pub town: String,
    pub price: Decimal,
    pub product_uuid: Uuid,
    pub product_name: String,
    pub product_image: Option<String>,
    pub external_url: Option<String>,
}

impl<'r> FromRow<'r, PgRow> for BranchPriceRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            branch_uuid: row.try_get("branch_uuid")?,
            branch_name: row.try_get("branch_name")?,
            vendor_uuid: row.try_get("vendor_uuid")?,
            vendor_name: row.try_get("vendor_name")?,
            town: row.try_get("town")?,
            price: row.try_get("price")?,
            product_uuid: row.try_get("product_uuid")?,
            product_name: row.try_get("product_name")?,
            product_image: row.try_get("product_image")?,
            external_url: row.try_get("external_url")?,
        })
    }
}

impl From<BranchPriceRecord> for BranchPriceRow {
    fn from(record: BranchPriceRecord) -> Self {
        Self {
            branch_id: record.branch_uuid,
            branch_name: record.branch_name,
            vendor_id: record.vendor_uuid,
            vendor_name: record.vendor_name,
            town: record.town,
            price: record.price,
            product_id: record.product_uuid,
            product_name: record.product_name,
            product_image: record.product_image,
            external_url: record.external_url,
        }
    }
}
