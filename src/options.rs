use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::origin::AllowedOrigins;
use crate::util::is_http_token;
use thiserror::Error;

/// Gate configuration. Every field defaults to an empty list, which denies all
/// cross-origin requests until origins are configured.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct CorsOptions {
    pub origins: AllowedOrigins,
    pub methods: AllowedMethods,
    pub headers: AllowedHeaders,
}

/// Configuration problems reported by [`CorsOptions::validate`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("origin entries must not be empty")]
    EmptyOrigin,
    #[error("method '{0}' is not a valid HTTP token")]
    InvalidMethod(String),
    #[error("header name '{0}' is not a valid HTTP token")]
    InvalidHeaderName(String),
}

impl CorsOptions {
    /// Checks that every entry can be matched or emitted.
    ///
    /// The gate itself never calls this; an entry that fails here simply never
    /// matches.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.origins.iter().any(str::is_empty) {
            return Err(ValidationError::EmptyOrigin);
        }

        if let Some(method) = self.methods.iter().find(|value| !is_http_token(value)) {
            return Err(ValidationError::InvalidMethod(method.to_string()));
        }

        if let Some(name) = self.headers.iter().find(|value| !is_http_token(value)) {
            return Err(ValidationError::InvalidHeaderName(name.to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
