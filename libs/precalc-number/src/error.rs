//! Error types for precalc-number

use thiserror::Error;

/// Numeric failures raised by [`crate::Number`] operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumberError {
    #[error("Division by zero")]
    DivisionByZero,

    #[error("Domain error in {operation}: {reason}")]
    Domain {
        operation: &'static str,
        reason: String,
    },

    #[error("{operation} requires an integer operand, got {value}")]
    NotAnInteger {
        operation: &'static str,
        value: String,
    },

    #[error("Invalid number literal: {0}")]
    Parse(String),

    #[error("{operation} operand exceeds the supported limit of {limit}")]
    TooLarge {
        operation: &'static str,
        limit: String,
    },

    #[error("Arbitrary precision backend error: {0}")]
    Backend(String),
}

impl NumberError {
    pub fn domain(operation: &'static str, reason: impl Into<String>) -> Self {
        Self::Domain {
            operation,
            reason: reason.into(),
        }
    }

    pub fn not_an_integer(operation: &'static str, value: impl ToString) -> Self {
        Self::NotAnInteger {
            operation,
            value: value.to_string(),
        }
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    pub fn too_large(operation: &'static str, limit: impl ToString) -> Self {
        Self::TooLarge {
            operation,
            limit: limit.to_string(),
        }
    }

    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, NumberError>;
