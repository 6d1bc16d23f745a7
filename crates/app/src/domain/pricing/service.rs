//! Pricing service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;
use tracing::debug;

use made_market::{
    items::{CartRequest, RequestedItem},
    pricing::{self, CartCalculation},
};

use crate::domain::pricing::{
    errors::PricingServiceError,
    repository::{BranchPricesRepository, PgBranchPricesRepository},
};

/// Prices a requested cart against every visible branch.
#[derive(Clone)]
pub struct PgPricingService {
    repository: Arc<dyn BranchPricesRepository>,
}

impl PgPricingService {
    /// Creates a service reading branch prices from `PostgreSQL`.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: Arc::new(PgBranchPricesRepository::new(pool)),
        }
    }

    /// Creates a service over an arbitrary repository implementation.
    #[must_use]
    pub fn with_repository(repository: Arc<dyn BranchPricesRepository>) -> Self {
        Self { repository }
    }
}

impl std::fmt::Debug for PgPricingService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PgPricingService").finish_non_exhaustive()
    }
}

#[async_trait]
impl PricingService for PgPricingService {
    async fn calculate_cart(
        &self,
        items: Vec<RequestedItem>,
    ) -> Result<CartCalculation, PricingServiceError> {
        let request = CartRequest::new(&items)?;

        let records = self
            .repository
            .get_branch_prices(request.product_ids())
            .await?;

        debug!(rows = records.len(), "fetched branch prices");

        let rows = records.into_iter().map(Into::into).collect();

        Ok(pricing::calculate(&request, rows))
    }
}

/// Cart pricing seam consumed by the HTTP layer.
#[automock]
#[async_trait]
pub trait PricingService: Send + Sync {
    /// Compare the requested cart across branches and rank the results.
    async fn calculate_cart(
        &self,
        items: Vec<RequestedItem>,
    ) -> Result<CartCalculation, PricingServiceError>;
}
