//! Calculate Cart Handler

use std::sync::Arc;

use rust_decimal::prelude::ToPrimitive;
use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use made_market::{
    breakdown::{BranchBreakdown, LineItem},
    items::RequestedItem,
    pricing::CartCalculation,
};

use crate::{
    cart::errors::{CartError, into_cart_error},
    state::State,
};

/// One requested cart line.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CartItemRequest {
    /// The product to price, as a UUID string.
    pub product_id: String,

    /// Units wanted. Defaults to 1 when omitted; must be at least 1.
    ///
    /// Deserialized as a signed integer so that negative values reach the
    /// validation path and return the standard error body.
    pub quantity: Option<i64>,
}

/// Calculate Cart Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CalculateCartRequest {
    /// The cart to price. At least one item is required.
    pub items: Vec<CartItemRequest>,
}

/// One priced line within a branch breakdown.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LineItemResponse {
    /// The requested product.
    pub product_id: Uuid,

    /// Display name of the product.
    pub product_name: String,

    /// Product image URL, when one exists.
    pub product_image: Option<String>,

    /// Vendor's own page for the listing, when provided.
    pub external_url: Option<String>,

    /// The branch's listed unit price.
    pub unit_price: f64,

    /// Units requested.
    pub quantity: u32,
}

/// One branch's coverage and cost for the requested cart.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BranchBreakdownResponse {
    /// The branch.
    pub branch_id: Uuid,

    /// Display name of the branch.
    pub branch_name: String,

    /// The vendor that owns the branch.
    pub vendor_id: Uuid,

    /// Display name of the vendor.
    pub vendor_name: String,

    /// Town the branch is located in.
    pub town: String,

    /// Cost of the covered lines, rounded to whole cents.
    pub total: f64,

    /// Number of distinct requested products this branch stocks.
    pub item_count: usize,

    /// Number of distinct products in the request.
    pub total_items: usize,

    /// Whether this branch stocks the entire request.
    pub has_all_items: bool,

    /// The covered lines.
    pub items: Vec<LineItemResponse>,
}

/// Calculate Cart Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CartCalculationResponse {
    /// Ranked branch breakdowns, full-coverage branches first.
    pub branches: Vec<BranchBreakdownResponse>,

    /// The recommended branch, `null` when nothing matched.
    pub cheapest_branch_id: Option<Uuid>,

    /// Total at the recommended branch.
    pub cheapest_total: f64,

    /// Spread between the most and least expensive full-coverage branches.
    pub max_savings: f64,
}

impl From<LineItem> for LineItemResponse {
    fn from(line: LineItem) -> Self {
        Self {
            product_id: line.product_id,
            product_name: line.product_name,
            product_image: line.product_image,
            external_url: line.external_url,
            unit_price: line.unit_price.to_f64().unwrap_or_default(),
            quantity: line.quantity,
        }
    }
}

impl From<BranchBreakdown> for BranchBreakdownResponse {
    fn from(breakdown: BranchBreakdown) -> Self {
        Self {
            branch_id: breakdown.branch_id,
            branch_name: breakdown.branch_name,
            vendor_id: breakdown.vendor_id,
            vendor_name: breakdown.vendor_name,
            town: breakdown.town,
            total: breakdown.total.to_f64().unwrap_or_default(),
            item_count: breakdown.item_count,
            total_items: breakdown.total_items,
            has_all_items: breakdown.has_all_items,
            items: breakdown.items.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<CartCalculation> for CartCalculationResponse {
    fn from(calculation: CartCalculation) -> Self {
        Self {
            branches: calculation.branches.into_iter().map(Into::into).collect(),
            cheapest_branch_id: calculation.cheapest_branch_id,
            cheapest_total: calculation.cheapest_total.to_f64().unwrap_or_default(),
            max_savings: calculation.max_savings.to_f64().unwrap_or_default(),
        }
    }
}

fn parse_items(request: CalculateCartRequest) -> Result<Vec<RequestedItem>, CartError> {
    if request.items.is_empty() {
        return Err(CartError::Validation(
            "Cart must contain at least one item".to_string(),
        ));
    }

    let mut items = Vec::with_capacity(request.items.len());

    for item in request.items {
        let product_id = Uuid::parse_str(&item.product_id).map_err(|_ignored| {
            CartError::Validation(format!("Invalid product id: {}", item.product_id))
        })?;

        let quantity = item.quantity.unwrap_or(1);

        if quantity < 1 {
            return Err(CartError::Validation(format!(
                "Quantity must be at least 1 for product {}",
                item.product_id
            )));
        }

        let quantity = u32::try_from(quantity).map_err(|_ignored| {
            CartError::Validation(format!(
                "Quantity too large for product {}",
                item.product_id
            ))
        })?;

        items.push(RequestedItem::new(product_id, quantity));
    }

    Ok(items)
}

/// Calculate Cart Handler
///
/// Prices the requested cart at every visible branch and ranks the results.
#[endpoint(
    tags("cart"),
    summary = "Calculate Cart",
    responses(
        (status_code = StatusCode::OK, description = "Ranked branch breakdowns"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CalculateCartRequest>,
    depot: &mut Depot,
) -> Result<Json<CartCalculationResponse>, CartError> {
    let state = depot
        .obtain::<Arc<State>>()
        .map_err(|_ignored| CartError::Internal)?;

    let items = parse_items(json.into_inner())?;

    let calculation = state
        .app
        .pricing
        .calculate_cart(items)
        .await
        .map_err(into_cart_error)?;

    Ok(Json(calculation.into()))
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use made_market_app::domain::pricing::{
        BranchPricesRepositoryError, MockPricingService, PricingServiceError,
    };

    use crate::{cart::errors::ErrorResponse, test_helpers::cart_service};

    use super::*;

    fn make_service(pricing: MockPricingService) -> Service {
        cart_service(
            pricing,
            Router::with_path("api").push(
                Router::with_path("cart").push(Router::with_path("calculate").post(handler)),
            ),
        )
    }

    fn breakdown(branch: Uuid, cents: i64, item_count: usize, total_items: usize) -> BranchBreakdown {
        BranchBreakdown {
            branch_id: branch,
            branch_name: "branch".to_string(),
            vendor_id: Uuid::new_v4(),
            vendor_name: "vendor".to_string(),
            town: "town".to_string(),
            total: Decimal::new(cents, 2),
            item_count,
            total_items,
            has_all_items: item_count == total_items,
            items: Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_calculate_returns_ranked_branches() -> TestResult {
        let (b1, b2) = (Uuid::new_v4(), Uuid::new_v4());
        let product = Uuid::new_v4();

        let mut pricing = MockPricingService::new();

        pricing
            .expect_calculate_cart()
            .once()
            .withf(move |items| items.as_slice() == [RequestedItem::new(product, 2)])
            .return_once(move |_| {
                Ok(CartCalculation {
                    branches: vec![breakdown(b2, 2_000, 2, 2), breakdown(b1, 3_000, 2, 2)],
                    cheapest_branch_id: Some(b2),
                    cheapest_total: Decimal::new(2_000, 2),
                    max_savings: Decimal::new(1_000, 2),
                })
            });

        let response: CartCalculationResponse =
            TestClient::post("http://example.com/api/cart/calculate")
                .json(&json!({ "items": [{ "productId": product, "quantity": 2 }] }))
                .send(&make_service(pricing))
                .await
                .take_json()
                .await?;

        let order: Vec<Uuid> = response.branches.iter().map(|b| b.branch_id).collect();

        assert_eq!(order, vec![b2, b1]);
        assert_eq!(response.cheapest_branch_id, Some(b2));
        assert!((response.cheapest_total - 20.0).abs() < f64::EPSILON);
        assert!((response.max_savings - 10.0).abs() < f64::EPSILON);

        Ok(())
    }

    #[tokio::test]
    async fn test_quantity_defaults_to_one() -> TestResult {
        let product = Uuid::new_v4();

        let mut pricing = MockPricingService::new();

        pricing
            .expect_calculate_cart()
            .once()
            .withf(move |items| items.as_slice() == [RequestedItem::new(product, 1)])
            .return_once(|_| Ok(CartCalculation::empty()));

        let res = TestClient::post("http://example.com/api/cart/calculate")
            .json(&json!({ "items": [{ "productId": product }] }))
            .send(&make_service(pricing))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_empty_result_has_null_cheapest_branch() -> TestResult {
        let product = Uuid::new_v4();

        let mut pricing = MockPricingService::new();

        pricing
            .expect_calculate_cart()
            .once()
            .return_once(|_| Ok(CartCalculation::empty()));

        let response: CartCalculationResponse =
            TestClient::post("http://example.com/api/cart/calculate")
                .json(&json!({ "items": [{ "productId": product, "quantity": 1 }] }))
                .send(&make_service(pricing))
                .await
                .take_json()
                .await?;

        assert!(response.branches.is_empty());
        assert_eq!(response.cheapest_branch_id, None);
        assert!(response.cheapest_total.abs() < f64::EPSILON);
        assert!(response.max_savings.abs() < f64::EPSILON);

        Ok(())
    }

    #[tokio::test]
    async fn test_empty_items_returns_400() -> TestResult {
        let mut pricing = MockPricingService::new();

        pricing.expect_calculate_cart().never();

        let mut res = TestClient::post("http://example.com/api/cart/calculate")
            .json(&json!({ "items": [] }))
            .send(&make_service(pricing))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(body.error, "Cart must contain at least one item");

        Ok(())
    }

    #[tokio::test]
    async fn test_malformed_product_id_returns_400() -> TestResult {
        let mut pricing = MockPricingService::new();

        pricing.expect_calculate_cart().never();

        let mut res = TestClient::post("http://example.com/api/cart/calculate")
            .json(&json!({ "items": [{ "productId": "not-a-uuid", "quantity": 1 }] }))
            .send(&make_service(pricing))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(body.error, "Invalid product id: not-a-uuid");

        Ok(())
    }

    #[tokio::test]
    async fn test_zero_quantity_returns_400() -> TestResult {
        let product = Uuid::new_v4();
        let mut pricing = MockPricingService::new();

        pricing.expect_calculate_cart().never();

        let mut res = TestClient::post("http://example.com/api/cart/calculate")
            .json(&json!({ "items": [{ "productId": product, "quantity": 0 }] }))
            .send(&make_service(pricing))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(
            body.error,
            format!("Quantity must be at least 1 for product {product}")
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_negative_quantity_returns_400() -> TestResult {
        let product = Uuid::new_v4();
        let mut pricing = MockPricingService::new();

        pricing.expect_calculate_cart().never();

        let mut res = TestClient::post("http://example.com/api/cart/calculate")
            .json(&json!({ "items": [{ "productId": product, "quantity": -1 }] }))
            .send(&make_service(pricing))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(
            body.error,
            format!("Quantity must be at least 1 for product {product}")
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_storage_failure_returns_500() -> TestResult {
        let product = Uuid::new_v4();
        let mut pricing = MockPricingService::new();

        pricing.expect_calculate_cart().once().return_once(|_| {
            Err(PricingServiceError::from(BranchPricesRepositoryError::Sql(
                sqlx::Error::RowNotFound,
            )))
        });

        let mut res = TestClient::post("http://example.com/api/cart/calculate")
            .json(&json!({ "items": [{ "productId": product, "quantity": 1 }] }))
            .send(&make_service(pricing))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(body.error, "Failed to calculate cart");

        Ok(())
    }

    #[tokio::test]
    async fn test_first_invalid_item_wins() -> TestResult {
        let product = Uuid::new_v4();
        let mut pricing = MockPricingService::new();

        pricing.expect_calculate_cart().never();

        // Both lines are invalid; the earlier one decides the message.
        let mut res = TestClient::post("http://example.com/api/cart/calculate")
            .json(&json!({
                "items": [
                    { "productId": "bogus", "quantity": 1 },
                    { "productId": product, "quantity": 0 },
                ]
            }))
            .send(&make_service(pricing))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(body.error, "Invalid product id: bogus");

        Ok(())
    }
}
