//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use made_market_app::{context::AppContext, domain::pricing::MockPricingService};

use crate::state::State;

pub(crate) fn state_with_pricing(pricing: MockPricingService) -> Arc<State> {
    Arc::new(State::new(AppContext {
        pricing: Arc::new(pricing),
    }))
}

pub(crate) fn cart_service(pricing: MockPricingService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_pricing(pricing)))
            .push(route),
    )
}
