//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    database::{self, Db},
    settings::CheckoutSettings,
    show_checkout::{ShowCheckout, ShowCheckoutService},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

#[derive(Clone)]
pub struct AppContext {
    pub show_checkout: Arc<dyn ShowCheckoutService>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(
        url: &str,
        settings: CheckoutSettings,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        Ok(Self::from_db(&Db::new(pool), settings))
    }

    #[must_use]
    pub fn from_db(db: &Db, settings: CheckoutSettings) -> Self {
        Self {
            show_checkout: Arc::new(ShowCheckout::postgres(db, settings)),
        }
    }
}
