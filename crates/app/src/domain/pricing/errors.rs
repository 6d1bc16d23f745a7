//! Pricing Errors

use thiserror::Error;

use made_market::items::CartRequestError;

use crate::domain::pricing::repository::BranchPricesRepositoryError;

/// Errors surfaced by the pricing service.
#[derive(Debug, Error)]
pub enum PricingServiceError {
    /// The requested item list was malformed.
    #[error(transparent)]
    InvalidRequest(#[from] CartRequestError),

    /// The branch price read failed.
    #[error("storage error")]
    Sql(#[source] sqlx::Error),
}

impl From<BranchPricesRepositoryError> for PricingServiceError {
    fn from(error: BranchPricesRepositoryError) -> Self {
        match error {
            BranchPricesRepositoryError::Sql(source) => Self::Sql(source),
        }
    }
}
