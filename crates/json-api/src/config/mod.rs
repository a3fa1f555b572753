//! Server configuration module

use clap::Parser;

use crate::config::{
    checkout::CheckoutConfig,
    db::DatabaseConfig,
    observability::{LoggingConfig, ObservabilityConfig},
    server::ServerRuntimeConfig,
};

pub(crate) mod checkout;
pub(crate) mod db;
pub(crate) mod observability;
pub(crate) mod server;

/// Checkout JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "checkout-json", about = "Checkout JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Observability (traces/metrics) settings.
    #[command(flatten)]
    pub observability: ObservabilityConfig,

    /// Application database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// Checkout page settings.
    #[command(flatten)]
    pub checkout: CheckoutConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // A missing .env file is fine
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn flags_override_defaults() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "checkout-json",
            "--port",
            "9000",
            "--database-url",
            "postgres://localhost/checkout",
            "--app-env",
            "production",
            "--aws-s3-bucket",
            "media",
            "--request-timeout-ms",
            "750",
        ])?;

        assert_eq!(config.socket_addr(), "0.0.0.0:9000");
        assert_eq!(config.database.database_url, "postgres://localhost/checkout");

        let settings = config.checkout.settings()?;

        assert!(settings.is_production());
        assert_eq!(settings.media_base_url, "https://s3.amazonaws.com/media/");
        assert_eq!(settings.request_timeout.as_millis(), 750);

        Ok(())
    }
}
