//! Checkout page errors.

use thiserror::Error;

use crate::{domain::errors::RepositoryError, show_checkout::validation::ValidationErrors};

/// Public message for every rejected-but-expected visit.
pub const NO_ACTION_REQUIRED_MESSAGE: &str = "Não se preocupe, nenhuma ação é necessária!";

#[derive(Debug, Error)]
pub enum ShowCheckoutError {
    /// The offer cannot be shown. `reason` is for logs only; callers always
    /// see [`NO_ACTION_REQUIRED_MESSAGE`].
    #[error("no action required: {reason}")]
    NoActionRequired { reason: &'static str },

    #[error("validation failed")]
    Validation(ValidationErrors),

    #[error("internal error")]
    Internal(#[source] RepositoryError),
}

impl ShowCheckoutError {
    /// Metric label for this outcome.
    #[must_use]
    pub fn outcome(&self) -> &'static str {
        match self {
            Self::NoActionRequired { .. } => "no_action_required",
            Self::Validation(_) => "invalid",
            Self::Internal(_) => "internal",
        }
    }
}

impl From<RepositoryError> for ShowCheckoutError {
    fn from(error: RepositoryError) -> Self {
        Self::Internal(error)
    }
}

pub(crate) const fn no_action(reason: &'static str) -> ShowCheckoutError {
    ShowCheckoutError::NoActionRequired { reason }
}
