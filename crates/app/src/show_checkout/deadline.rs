//! Per-request deadline for repository calls.

use std::time::Duration;

use tokio::time::{Instant, timeout_at};

use crate::domain::errors::RepositoryError;

/// A fixed point in time shared by every repository call of one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Deadline(Instant);

impl Deadline {
    pub(crate) fn after(timeout: Duration) -> Self {
        Self(Instant::now() + timeout)
    }

    /// Await `call`, failing with [`RepositoryError::DeadlineExceeded`] once
    /// the deadline has passed.
    pub(crate) async fn run<F, T>(self, call: F) -> Result<T, RepositoryError>
    where
        F: Future<Output = Result<T, RepositoryError>>,
    {
        timeout_at(self.0, call)
            .await
            .unwrap_or(Err(RepositoryError::DeadlineExceeded))
    }
}
