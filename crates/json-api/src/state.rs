//! State

use std::sync::Arc;

use checkout_app::{context::AppContext, show_checkout::ShowCheckoutService};

/// Shared handler state, injected into the depot.
#[derive(Clone)]
pub(crate) struct State {
    pub(crate) show_checkout: Arc<dyn ShowCheckoutService>,
}

impl State {
    #[must_use]
    pub(crate) fn new(show_checkout: Arc<dyn ShowCheckoutService>) -> Self {
        Self { show_checkout }
    }

    #[must_use]
    pub(crate) fn from_app_context(app: AppContext) -> Arc<Self> {
        Arc::new(Self::new(app.show_checkout))
    }
}
