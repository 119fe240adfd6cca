//! Unified error handling for `inference-service`.
//!
//! This module exposes a single top-level error type [`InferenceError`] for
//! the whole crate and groups configuration problems in [`ConfigError`].
//! Small helpers for reading/validating environment-driven values return the
//! unified [`Result<T>`] alias.
//!
//! All messages include the tag `[Inference Service]` to simplify
//! attribution in logs.

use reqwest::StatusCode;
use thiserror::Error;

/* ------------------------------------------------------------------------- */
/* Public result alias                                                       */
/* ------------------------------------------------------------------------- */

/// Unified result alias for the entire crate.
pub type Result<T> = std::result::Result<T, InferenceError>;

/* ------------------------------------------------------------------------- */
/* Top-level error                                                           */
/* ------------------------------------------------------------------------- */

/// Top-level error for the `inference-service` crate.
///
/// The two rewritten variants ([`InferenceError::ServiceUnreachable`] and
/// [`InferenceError::ModelNotFound`]) replace raw transport/upstream
/// messages that operators repeatedly misread; every other failure surfaces
/// the underlying message untouched.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum InferenceError {
    /// Configuration/validation errors raised before any request is sent.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Underlying HTTP transport error (e.g. `reqwest::Error`).
    #[error("[Inference Service] transport error: {0}")]
    HttpTransport(#[from] reqwest::Error),

    /// The regional runtime host could not be reached at all.
    #[error(
        "[Inference Service] the model runtime is not reachable in region {region}; double-check the service availability for that region"
    )]
    ServiceUnreachable {
        /// Region the client was configured for.
        region: String,
    },

    /// The runtime rejected the model identifier.
    #[error(
        "[Inference Service] could not resolve the foundation model from identifier {model}; verify that the model exists and is accessible in region {region}"
    )]
    ModelNotFound {
        /// Identifier the client was configured with.
        model: String,
        /// Region the client was configured for.
        region: String,
    },

    /// Non-successful HTTP status from the runtime.
    #[error("[Inference Service] HTTP {status} from {url}: {snippet}")]
    HttpStatus {
        /// Numeric HTTP status code.
        status: StatusCode,
        /// Request URL.
        url: String,
        /// Short snippet of the response body (trimmed).
        snippet: String,
    },

    /// Response payload could not be decoded as expected.
    #[error("[Inference Service] failed to decode completion response: {0}")]
    Decode(String),
}

/* ------------------------------------------------------------------------- */
/* Config errors                                                             */
/* ------------------------------------------------------------------------- */

/// Error enum for config construction and validation.
///
/// Keep this focused: only errors that realistically happen at config
/// load/validation time.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A number failed to parse (limits, timeouts).
    #[error("[Inference Service] invalid number in {var}: {reason}")]
    InvalidNumber {
        /// Variable name (e.g. `FM_MAX_TOKENS`).
        var: &'static str,
        /// Human-readable reason (e.g. `expected u32`).
        reason: &'static str,
    },

    /// Value had the wrong format (e.g. invalid URL).
    #[error("[Inference Service] invalid format in {var}: {reason}")]
    InvalidFormat {
        /// Variable name (e.g. `FM_ENDPOINT`).
        var: &'static str,
        /// Explanation (e.g. `must start with http:// or https://`).
        reason: &'static str,
    },

    /// A numeric field was outside of the allowed range.
    #[error("[Inference Service] {field} is out of range: {detail}")]
    OutOfRange {
        /// Field name (e.g. `temperature`).
        field: &'static str,
        /// Description of the expected range.
        detail: &'static str,
    },

    /// Model name was empty or invalid.
    #[error("[Inference Service] model name must not be empty")]
    EmptyModel,

    /// Stop sequences contained one or more empty strings.
    #[error("[Inference Service] stop sequences must not contain empty strings")]
    InvalidStopSequence,
}

/* ------------------------------------------------------------------------- */
/* Env helpers (return unified `Result<T>`)                                  */
/* ------------------------------------------------------------------------- */

/// Parses an optional `u32` from env (`Ok(None)` if unset/empty).
///
/// # Errors
/// Returns [`ConfigError::InvalidNumber`] if the variable is set but not a
/// valid `u32`.
pub fn env_opt_u32(name: &'static str) -> Result<Option<u32>> {
    match std::env::var(name) {
        Ok(v) if !v.trim().is_empty() => v.trim().parse::<u32>().map(Some).map_err(|_| {
            InferenceError::from(ConfigError::InvalidNumber {
                var: name,
                reason: "expected u32",
            })
        }),
        _ => Ok(None),
    }
}

/* ------------------------------------------------------------------------- */
/* Validation helpers (return unified `Result<T>`)                           */
/* ------------------------------------------------------------------------- */

/// Validates that an HTTP endpoint starts with `http://` or `https://`.
///
/// # Errors
/// Returns [`ConfigError::InvalidFormat`] when the string does not start
/// with a valid HTTP scheme.
pub fn validate_http_endpoint(var: &'static str, value: &str) -> Result<()> {
    let value = value.trim();
    if !value.is_empty() && (value.starts_with("http://") || value.starts_with("https://")) {
        Ok(())
    } else {
        Err(ConfigError::InvalidFormat {
            var,
            reason: "must start with http:// or https://",
        }
        .into())
    }
}

/// Validates that a floating-point value lies within an inclusive range.
///
/// # Errors
/// Returns [`ConfigError::OutOfRange`] if `value` is not finite or outside
/// `[min, max]`.
pub fn validate_range_f32(field: &'static str, value: f32, min: f32, max: f32) -> Result<()> {
    if value.is_finite() && value >= min && value <= max {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            detail: "expected value in inclusive range",
        }
        .into())
    }
}

/// Ensures that a list of stop sequences contains no empty strings.
///
/// # Errors
/// Returns [`ConfigError::InvalidStopSequence`] if any element is empty.
pub fn validate_stop_sequences<S>(stops: &[S]) -> Result<()>
where
    S: AsRef<str>,
{
    if stops.iter().any(|s| s.as_ref().is_empty()) {
        Err(ConfigError::InvalidStopSequence.into())
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_requires_http_scheme() {
        assert!(validate_http_endpoint("FM_ENDPOINT", "https://runtime.example.com").is_ok());
        assert!(validate_http_endpoint("FM_ENDPOINT", "http://localhost:9000").is_ok());
        assert!(validate_http_endpoint("FM_ENDPOINT", "runtime.example.com").is_err());
        assert!(validate_http_endpoint("FM_ENDPOINT", "").is_err());
    }

    #[test]
    fn range_check_rejects_out_of_bounds_and_non_finite() {
        assert!(validate_range_f32("temperature", 0.5, 0.0, 1.0).is_ok());
        assert!(validate_range_f32("temperature", 1.5, 0.0, 1.0).is_err());
        assert!(validate_range_f32("temperature", f32::NAN, 0.0, 1.0).is_err());
    }

    #[test]
    fn stop_sequences_must_be_non_empty_strings() {
        assert!(validate_stop_sequences(&["\n\nHuman:"]).is_ok());
        assert!(validate_stop_sequences(&["\n\nHuman:", ""]).is_err());
        // An empty list is fine; there is just nothing to validate.
        assert!(validate_stop_sequences::<&str>(&[]).is_ok());
    }
}
