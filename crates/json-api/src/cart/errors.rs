//! Cart Errors

use salvo::{
    async_trait,
    http::StatusCode,
    oapi::{self, EndpointOutRegister, ToSchema},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

use made_market_app::domain::pricing::PricingServiceError;

/// Error body shape for every cart API failure.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ErrorResponse {
    /// Human-readable description of the failure.
    pub error: String,
}

#[derive(Debug, Error)]
pub(crate) enum CartError {
    #[error("{0}")]
    Validation(String),

    #[error("Failed to calculate cart")]
    Internal,
}

impl CartError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[async_trait]
impl Writer for CartError {
    async fn write(mut self, _req: &mut Request, _depot: &mut Depot, res: &mut Response) {
        res.status_code(self.status_code());
        res.render(Json(ErrorResponse {
            error: self.to_string(),
        }));
    }
}

impl EndpointOutRegister for CartError {
    fn register(components: &mut oapi::Components, operation: &mut oapi::Operation) {
        operation.responses.insert(
            StatusCode::BAD_REQUEST.as_str(),
            oapi::Response::new("Validation failed")
                .add_content("application/json", ErrorResponse::to_schema(components)),
        );
        operation.responses.insert(
            StatusCode::INTERNAL_SERVER_ERROR.as_str(),
            oapi::Response::new("Internal server error")
                .add_content("application/json", ErrorResponse::to_schema(components)),
        );
    }
}

pub(crate) fn into_cart_error(error: PricingServiceError) -> CartError {
    match error {
        PricingServiceError::InvalidRequest(source) => CartError::Validation(source.to_string()),
        PricingServiceError::Sql(source) => {
            error!("failed to calculate cart: {source}");

            CartError::Internal
        }
    }
}
