//! Cart Pricing

pub mod errors;
pub mod records;
pub mod repository;
pub mod service;

pub use errors::PricingServiceError;
pub use repository::{
    BranchPricesRepository, BranchPricesRepositoryError, MockBranchPricesRepository,
    PgBranchPricesRepository,
};
pub use service::*;
