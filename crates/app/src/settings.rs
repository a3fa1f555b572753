//! Checkout Settings
//!
//! Immutable configuration handed to the checkout pipeline at construction
//! time. Nothing in the pipeline reads the process environment directly.

use std::time::Duration;

use thiserror::Error;

/// Default deadline applied to each checkout request.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("either an S3 bucket or an explicit media base path is required")]
    MissingMediaLocation,

    #[error("request timeout must be greater than zero")]
    ZeroRequestTimeout,
}

/// Deployment environment name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment(String);

impl Environment {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }

    /// `production` or `prod`, in any case.
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self.0.to_ascii_lowercase().as_str(), "production" | "prod")
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self.0.to_ascii_lowercase().as_str(), "development" | "dev")
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new("development")
    }
}

/// Settings consumed by the checkout pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSettings {
    pub environment: Environment,

    /// Absolute URL that relative media paths are appended to. Always ends in `/`.
    pub media_base_url: String,

    /// Upper bound on the time a single request may spend in repository calls.
    pub request_timeout: Duration,
}

impl CheckoutSettings {
    /// Build settings, deriving the media base URL from the bucket when no
    /// explicit base path is configured.
    ///
    /// # Errors
    ///
    /// Returns an error when neither a bucket nor a base path is given, or the
    /// timeout is zero.
    pub fn new(
        environment: Environment,
        s3_bucket: Option<&str>,
        s3_base_path: Option<&str>,
        request_timeout: Duration,
    ) -> Result<Self, SettingsError> {
        if request_timeout.is_zero() {
            return Err(SettingsError::ZeroRequestTimeout);
        }

        let s3_bucket = s3_bucket.filter(|bucket| !bucket.is_empty());
        let s3_base_path = s3_base_path.filter(|path| !path.is_empty());

        let mut media_base_url = match (s3_base_path, s3_bucket) {
            (Some(path), _) => path.to_owned(),
            (None, Some(bucket)) => format!("https://s3.amazonaws.com/{bucket}/"),
            (None, None) => return Err(SettingsError::MissingMediaLocation),
        };

        if !media_base_url.ends_with('/') {
            media_base_url.push('/');
        }

        Ok(Self {
            environment,
            media_base_url,
            request_timeout,
        })
    }

    #[must_use]
    pub fn is_production(&self) -> bool {
        self.environment.is_production()
    }
}
