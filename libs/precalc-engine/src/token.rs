//! Lexical token model shared by the tokenizer, parser and evaluator

use std::fmt;

/// Lexical class of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Number,
    Operator,
    Function,
    LeftParen,
    RightParen,
    ArgumentSeparator,
    Variable,
    Constant,
    String,
}

impl TokenKind {
    /// Kinds that stand for a value rather than an action
    pub fn is_operand(self) -> bool {
        matches!(
            self,
            TokenKind::Number | TokenKind::Variable | TokenKind::Constant | TokenKind::String
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Number => "NUMBER",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Function => "FUNCTION",
            TokenKind::LeftParen => "LEFT_PAREN",
            TokenKind::RightParen => "RIGHT_PAREN",
            TokenKind::ArgumentSeparator => "ARGUMENT_SEPARATOR",
            TokenKind::Variable => "VARIABLE",
            TokenKind::Constant => "CONSTANT",
            TokenKind::String => "STRING",
        };
        f.write_str(name)
    }
}

/// Immutable `{ kind, text }` pair
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    kind: TokenKind,
    text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn number(text: impl Into<String>) -> Self {
        Self::new(TokenKind::Number, text)
    }

    pub fn operator(symbol: impl Into<String>) -> Self {
        Self::new(TokenKind::Operator, symbol)
    }

    pub fn function(symbol: impl Into<String>) -> Self {
        Self::new(TokenKind::Function, symbol)
    }

    pub fn left_paren() -> Self {
        Self::new(TokenKind::LeftParen, "(")
    }

    pub fn right_paren() -> Self {
        Self::new(TokenKind::RightParen, ")")
    }

    pub fn separator(text: impl Into<String>) -> Self {
        Self::new(TokenKind::ArgumentSeparator, text)
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Self::new(TokenKind::Variable, name)
    }

    pub fn constant(name: impl Into<String>) -> Self {
        Self::new(TokenKind::Constant, name)
    }

    pub fn string(text: impl Into<String>) -> Self {
        Self::new(TokenKind::String, text)
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// `KIND 'text'`, used in error messages
    pub fn describe(&self) -> String {
        format!("{} '{}'", self.kind, self.text)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Space-separated token texts, e.g. `3 4 2 * +`
pub fn render(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(Token::text)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operand_kinds() {
        assert!(TokenKind::Number.is_operand());
        assert!(TokenKind::Variable.is_operand());
        assert!(!TokenKind::Operator.is_operand());
        assert!(!TokenKind::LeftParen.is_operand());
    }

    #[test]
    fn test_describe_and_render() {
        assert_eq!(Token::variable("x").describe(), "VARIABLE 'x'");
        let tokens = vec![Token::number("3"), Token::number("4"), Token::operator("+")];
        assert_eq!(render(&tokens), "3 4 +");
    }
}
