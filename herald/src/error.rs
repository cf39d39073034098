//! Application-wide error types.

use thiserror::Error;

/// Application-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Caller-facing error for a dispatch attempt.
///
/// The two variants are the only failure kinds a dispatch can surface:
/// the payload was rejected by its category schema, or the messaging
/// provider could not deliver the composed notification. Callers that map
/// outcomes to protocol responses can branch on [`Error::kind`].
#[derive(Debug, Error)]
pub enum Error {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("delivery failed: {0}")]
    Downstream(#[from] SendError),
}

impl Error {
    /// Stable machine-readable discriminator for transport mapping.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::Downstream(_) => "downstream",
        }
    }
}

/// Why an inbound payload was rejected.
///
/// Carries the offending field and the violated constraint kind, nothing
/// else: no partial event data, no schema internals.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("payload must be a JSON object")]
    NotAnObject,

    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("field `{field}` must be of type {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },

    #[error("field `{0}` must not be empty")]
    EmptyField(&'static str),

    #[error("field `{field}` is not a valid URL: {reason}")]
    MalformedUrl {
        field: &'static str,
        reason: url::ParseError,
    },
}

impl ValidationError {
    /// The field the constraint was violated on, when one applies.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::NotAnObject => None,
            Self::MissingField(field) | Self::EmptyField(field) => Some(field),
            Self::WrongType { field, .. } | Self::MalformedUrl { field, .. } => Some(field),
        }
    }
}

/// Why the messaging provider could not deliver a notification.
#[derive(Debug, Error)]
pub enum SendError {
    /// The request never completed (connect failure, timeout, ...).
    #[error("request to messaging provider failed: {0}")]
    Request(String),

    /// The provider answered with a non-success status.
    #[error("messaging provider returned {status}: {body}")]
    Status { status: u16, body: String },
}
