//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    database,
    domain::pricing::{PgPricingService, PricingService},
};

/// Errors raised while building the application context.
#[derive(Debug, Error)]
pub enum AppInitError {
    /// The database connection could not be established.
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

/// The application's service handles, shared across request handlers.
#[derive(Clone)]
pub struct AppContext {
    /// Cart pricing and comparison.
    pub pricing: Arc<dyn PricingService>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(url: &str) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        Ok(Self {
            pricing: Arc::new(PgPricingService::new(pool)),
        })
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext").finish_non_exhaustive()
    }
}
