//! Checkout Config

use std::time::Duration;

use clap::Args;

use checkout_app::settings::{
    CheckoutSettings, DEFAULT_REQUEST_TIMEOUT, Environment, SettingsError,
};

/// Checkout page settings.
#[derive(Debug, Args)]
pub struct CheckoutConfig {
    /// Deployment environment (`production`/`prod` enable production rules)
    #[arg(long, env = "APP_ENV")]
    pub app_env: Option<String>,

    /// Legacy name for `APP_ENV`, used only when `APP_ENV` is unset
    #[arg(long, env = "ENVIRONMENT", hide = true)]
    pub environment: Option<String>,

    /// S3 bucket holding checkout media
    #[arg(long, env = "AWS_S3_BUCKET")]
    pub aws_s3_bucket: Option<String>,

    /// Explicit base URL for checkout media, overrides the bucket URL
    #[arg(long, env = "S3_BASE_PATH")]
    pub s3_base_path: Option<String>,

    /// Deadline for repository calls of one request, in milliseconds
    #[arg(long, env = "REQUEST_TIMEOUT_MS")]
    pub request_timeout_ms: Option<u64>,
}

impl CheckoutConfig {
    /// Build validated pipeline settings.
    ///
    /// # Errors
    ///
    /// Returns an error when no media location is configured or the timeout is zero.
    pub fn settings(&self) -> Result<CheckoutSettings, SettingsError> {
        let environment = self
            .app_env
            .as_deref()
            .or(self.environment.as_deref())
            .filter(|name| !name.is_empty())
            .map_or_else(Environment::default, Environment::new);

        let request_timeout = self
            .request_timeout_ms
            .map_or(DEFAULT_REQUEST_TIMEOUT, Duration::from_millis);

        CheckoutSettings::new(
            environment,
            self.aws_s3_bucket.as_deref(),
            self.s3_base_path.as_deref(),
            request_timeout,
        )
    }
}
