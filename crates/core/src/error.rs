//! Calculation error model.

use thiserror::Error;

/// Result type used across the calculation layer.
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculation-level error.
///
/// Every precondition failure is reported as `InvalidArgument`. The `Display`
/// output is the bare message: callers match on the exact text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// An argument failed validation.
    #[error("{0}")]
    InvalidArgument(String),
}

impl CalcError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// The literal message carried by the error.
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidArgument(msg) => msg,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_the_bare_message() {
        let err = CalcError::invalid_argument("inventory must be an array");
        assert_eq!(err.to_string(), "inventory must be an array");
        assert_eq!(err.message(), "inventory must be an array");
    }

    #[test]
    fn errors_compare_by_message() {
        assert_eq!(
            CalcError::invalid_argument("a"),
            CalcError::InvalidArgument("a".to_string())
        );
        assert_ne!(CalcError::invalid_argument("a"), CalcError::invalid_argument("b"));
    }
}
