use thiserror::Error;

/// Errors raised by classification and its extension points.
///
/// `Unknown` is never an error: it is the successful answer "no rule matched".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScitypeError {
    /// A type or table constructor received something that is not a valid
    /// scientific type. Raised before any data is inspected.
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// The caller asked for something the value cannot provide.
    #[error("usage error: {message}")]
    Usage { message: String },

    /// An extension point was invoked without an implementation.
    #[error("`{operation}` is not implemented for convention `{convention}`")]
    Unimplemented {
        operation: &'static str,
        convention: String,
    },

    /// `scitype_union` over an empty iterable has no answer.
    #[error("cannot take the scitype union of an empty collection")]
    EmptyUnion,

    /// Array shape does not match its element count.
    #[error("shape mismatch: shape holds {expected} elements, got {actual}")]
    Shape { expected: usize, actual: usize },
}

impl ScitypeError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
        }
    }

    pub fn unimplemented(operation: &'static str, convention: impl Into<String>) -> Self {
        Self::Unimplemented {
            operation,
            convention: convention.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ScitypeError>;
