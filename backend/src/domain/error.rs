//! Wire-level error types.
//!
//! These types are transport agnostic. The HTTP adapter serializes an
//! [`Errors`] sequence as the body of every non-2xx response so clients can
//! always parse failures the same way.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCode {
    /// A mandatory field was absent or empty.
    Required,
    /// Everything else: bad media type, malformed body, not-found, server fault.
    Other,
}

/// A single client-consumable error.
///
/// # Examples
/// ```
/// use backend::domain::{Error, ErrorCode};
///
/// let err = Error::required("name");
/// assert_eq!(err.code, ErrorCode::Required);
/// assert_eq!(err.message, "name");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Error {
    /// Stable machine-readable error code.
    #[schema(example = "required")]
    pub code: ErrorCode,
    /// Human-readable error message.
    #[schema(example = "name")]
    pub message: String,
}

/// Ordered sequence of errors, serialized as a JSON array.
pub type Errors = Vec<Error>;

impl Error {
    /// Construct an error from a code and a message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Convenience constructor for [`ErrorCode::Required`].
    ///
    /// The message is the violated field's wire name, exactly as the client
    /// supplied it as a JSON key.
    pub fn required(field: impl Into<String>) -> Self {
        Self::new(ErrorCode::Required, field)
    }

    /// Convenience constructor for [`ErrorCode::Other`].
    pub fn other(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Other, message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}
