//! Error types for precalc-engine

use precalc_number::NumberError;
use thiserror::Error;

/// Failures of the tokenize → parse → evaluate pipeline
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    // ======================================
    // Tokenizer
    // ======================================
    #[error("Unexpected character '{ch}' at position {position}")]
    UnexpectedCharacter { ch: char, position: usize },

    #[error("Unterminated string literal starting at position {0}")]
    UnterminatedLiteral(usize),

    #[error("Malformed number literal: {0}")]
    MalformedNumber(String),

    // ======================================
    // Parser
    // ======================================
    #[error("Mismatched parentheses at '{0}'")]
    MismatchedParentheses(String),

    #[error("Argument separator '{0}' outside of a parenthesised group")]
    MisplacedSeparator(String),

    // ======================================
    // Registry / evaluator
    // ======================================
    #[error("Unknown operator: {0}")]
    UnknownOperator(String),

    #[error("Unexpected token: {0}")]
    UnexpectedToken(String),

    #[error("Invalid expression: {0} value(s) on the operand stack")]
    InvalidExpression(usize),

    #[error("Variable not found: {0}")]
    UnboundVariable(String),

    #[error(transparent)]
    Numeric(#[from] NumberError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl CalcError {
    pub fn mismatched_parentheses(token: impl Into<String>) -> Self {
        Self::MismatchedParentheses(token.into())
    }

    pub fn misplaced_separator(token: impl Into<String>) -> Self {
        Self::MisplacedSeparator(token.into())
    }

    pub fn unknown_operator(symbol: impl Into<String>) -> Self {
        Self::UnknownOperator(symbol.into())
    }

    pub fn unexpected_token(description: impl Into<String>) -> Self {
        Self::UnexpectedToken(description.into())
    }

    pub fn unbound_variable(name: impl Into<String>) -> Self {
        Self::UnboundVariable(name.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
