//! Branch Prices Repository

use async_trait::async_trait;
use mockall::automock;
use sqlx::{PgPool, Postgres, query_as};
use thiserror::Error;
use uuid::Uuid;

use crate::domain::pricing::records::BranchPriceRecord;

const GET_BRANCH_PRICES_SQL: &str = include_str!("sql/get_branch_prices.sql");

/// Errors raised by the branch prices read path.
#[derive(Debug, Error)]
pub enum BranchPricesRepositoryError {
    /// The query itself failed.
    #[error("storage error")]
    Sql(#[from] sqlx::Error),
}

/// The single visibility policy for shopper-facing prices: in-stock listings
/// at approved, active branches of approved, active vendors.
#[automock]
#[async_trait]
pub trait BranchPricesRepository: Send + Sync {
    /// Fetch every visible (branch, product) listing for the given products.
    async fn get_branch_prices(
        &self,
        product_uuids: Vec<Uuid>,
    ) -> Result<Vec<BranchPriceRecord>, BranchPricesRepositoryError>;
}

/// `PostgreSQL`-backed branch prices repository.
#[derive(Debug, Clone)]
pub struct PgBranchPricesRepository {
    pool: PgPool,
}

impl PgBranchPricesRepository {
    /// Creates a repository reading from the given pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BranchPricesRepository for PgBranchPricesRepository {
    async fn get_branch_prices(
        &self,
        product_uuids: Vec<Uuid>,
    ) -> Result<Vec<BranchPriceRecord>, BranchPricesRepositoryError> {
        query_as::<Postgres, BranchPriceRecord>(GET_BRANCH_PRICES_SQL)
            .bind(product_uuids)
            .fetch_all(&self.pool)
            .await
            .map_err(Into::into)
    }
}
