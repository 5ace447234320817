//! Library error type.

use thiserror::Error;

/// Error raised when caller-supplied input fails validation.
///
/// Validation runs before any network resource is acquired, so a failure
/// here always means the caller (not the environment) supplied a bad value.
/// It is never retried internally and never swallowed: the message carries
/// the parameter name, the literal offending value, and — for enum-valued
/// parameters — every accepted canonical value, so the caller can
/// self-correct without external documentation.
#[derive(Debug, Error)]
pub enum Error {
    #[error("the `{param}` parameter was invalid: {reason}")]
    InvalidParameter { param: String, reason: String },
}

impl Error {
    /// Shorthand used throughout the validation layer.
    pub(crate) fn invalid_parameter(param: &str, reason: impl Into<String>) -> Self {
        Error::InvalidParameter {
            param: param.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
