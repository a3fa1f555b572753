//! Depot helper extensions.

use std::sync::Arc;

use salvo::prelude::{Depot, StatusError};
use tracing::error;

use crate::state::State;

/// Typed access to values injected by middleware.
pub(crate) trait DepotExt {
    /// The shared handler state, or a 500 when the state hoop is missing.
    fn state_or_500(&self) -> Result<Arc<State>, StatusError>;
}

impl DepotExt for Depot {
    fn state_or_500(&self) -> Result<Arc<State>, StatusError> {
        self.obtain::<Arc<State>>().cloned().map_err(|_missing| {
            error!("handler state was not injected");

            StatusError::internal_server_error()
        })
    }
}
