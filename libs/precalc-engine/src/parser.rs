//! Shunting-yard conversion of infix tokens to postfix (RPN)
//!
//! Purely structural: nothing is evaluated here. Operator symbols are
//! resolved against the registry for precedence, associativity and fixity;
//! function symbols are pushed as they are and resolved by the evaluator.

use crate::error::{CalcError, Result};
use crate::registry::{Fixity, Registry, RegistryEntry};
use crate::token::{render, Token, TokenKind};
use tracing::debug;

pub struct Parser<'r> {
    registry: &'r Registry,
}

impl<'r> Parser<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Self { registry }
    }

    /// Reorder `tokens` into RPN
    ///
    /// # Errors
    /// - `MismatchedParentheses` for an unmatched `(` or `)`
    /// - `MisplacedSeparator` for a separator outside any parenthesised group
    /// - `UnknownOperator` for an operator symbol missing from the registry
    pub fn parse_to_postfix(&self, tokens: &[Token]) -> Result<Vec<Token>> {
        let mut output: Vec<Token> = Vec::with_capacity(tokens.len());
        let mut stack: Vec<Token> = Vec::new();

        for token in tokens {
            match token.kind() {
                TokenKind::Number
                | TokenKind::Variable
                | TokenKind::Constant
                | TokenKind::String => output.push(token.clone()),
                TokenKind::Function | TokenKind::LeftParen => stack.push(token.clone()),
                TokenKind::Operator => {
                    let entry = self.registry.lookup(token.text())?;
                    match entry.fixity {
                        Fixity::PostfixOperator => output.push(token.clone()),
                        Fixity::PrefixOperator => stack.push(token.clone()),
                        Fixity::InfixOperator | Fixity::PrefixFunction => {
                            while let Some(top) = stack.last() {
                                if !self.pops_before(top, entry)? {
                                    break;
                                }
                                output.extend(stack.pop());
                            }
                            stack.push(token.clone());
                        },
                    }
                },
                TokenKind::RightParen => {
                    loop {
                        match stack.pop() {
                            Some(top) if top.kind() == TokenKind::LeftParen => break,
                            Some(top) => output.push(top),
                            None => return Err(CalcError::mismatched_parentheses(token.text())),
                        }
                    }
                    if stack.last().is_some_and(|top| top.kind() == TokenKind::Function) {
                        output.extend(stack.pop());
                    }
                },
                TokenKind::ArgumentSeparator => loop {
                    match stack.last() {
                        Some(top) if top.kind() == TokenKind::LeftParen => break,
                        Some(_) => output.extend(stack.pop()),
                        None => return Err(CalcError::misplaced_separator(token.text())),
                    }
                },
            }
        }

        while let Some(top) = stack.pop() {
            if matches!(top.kind(), TokenKind::LeftParen | TokenKind::RightParen) {
                return Err(CalcError::mismatched_parentheses(top.text()));
            }
            output.push(top);
        }

        debug!(rpn = %render(&output), "Parsed to postfix");
        Ok(output)
    }

    /// Whether stack top `top` is flushed before pushing `incoming`
    fn pops_before(&self, top: &Token, incoming: &RegistryEntry) -> Result<bool> {
        match top.kind() {
            TokenKind::Function => Ok(true),
            TokenKind::Operator => {
                let top = self.registry.lookup(top.text())?;
                Ok(top.precedence > incoming.precedence
                    || (top.precedence == incoming.precedence && !incoming.is_right_associative()))
            },
            _ => Ok(false),
        }
    }
}

/// [`Parser::parse_to_postfix`] against the built-in registry
pub fn parse_to_postfix(tokens: &[Token]) -> Result<Vec<Token>> {
    Parser::new(Registry::builtin()).parse_to_postfix(tokens)
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;
    use crate::tokenizer::Tokenizer;
    use precalc_number::Locale;

    fn rpn(input: &str) -> String {
        let tokens = Tokenizer::new(Registry::builtin(), Locale::POSIX)
            .tokenize(input)
            .unwrap();
        render(&parse_to_postfix(&tokens).unwrap())
    }

    fn parse_err(input: &str) -> CalcError {
        let tokens = Tokenizer::new(Registry::builtin(), Locale::POSIX)
            .tokenize(input)
            .unwrap();
        parse_to_postfix(&tokens).unwrap_err()
    }

    #[test]
    fn test_precedence() {
        assert_eq!(rpn("3+4*2"), "3 4 2 * +");
        assert_eq!(rpn("(3+4)*2"), "3 4 + 2 *");
    }

    #[test]
    fn test_associativity() {
        assert_eq!(rpn("2^3^2"), "2 3 2 ^ ^");
        assert_eq!(rpn("10-3-2"), "10 3 - 2 -");
        assert_eq!(rpn("8/4/2"), "8 4 / 2 /");
    }

    #[test]
    fn test_postfix_goes_straight_to_output() {
        assert_eq!(rpn("5!"), "5 !");
        assert_eq!(rpn("2+3!"), "2 3 ! +");
    }

    #[test]
    fn test_prefix_negation() {
        assert_eq!(rpn("-2^2"), "2 2 ^ neg");
        assert_eq!(rpn("2*-3"), "2 3 neg *");
        assert_eq!(rpn("2^-3"), "2 3 neg ^");
        assert_eq!(rpn("-2+3"), "2 neg 3 +");
    }

    #[test]
    fn test_functions_and_separators() {
        assert_eq!(rpn("nPr(5;2)"), "5 2 nPr");
        assert_eq!(rpn("sqrt(16)+1"), "16 sqrt 1 +");
        assert_eq!(rpn("atan2(1+1;2*3)"), "1 1 + 2 3 * atan2");
        assert_eq!(rpn("gcd(sqrt(16);lcm(2;3))"), "16 sqrt 2 3 lcm gcd");
    }

    #[test]
    fn test_operands_pass_through() {
        assert_eq!(rpn("x*pi"), "x pi *");
    }

    #[test]
    fn test_structural_errors() {
        assert_eq!(parse_err("(1+2"), CalcError::MismatchedParentheses("(".to_string()));
        assert_eq!(parse_err("1+2)"), CalcError::MismatchedParentheses(")".to_string()));
        assert_eq!(parse_err("1;2"), CalcError::MisplacedSeparator(";".to_string()));
    }

    #[test]
    fn test_unknown_operator() {
        let registry = Registry::new();
        let tokens = vec![Token::number("1"), Token::operator("+"), Token::number("2")];
        assert_eq!(
            Parser::new(&registry).parse_to_postfix(&tokens).unwrap_err(),
            CalcError::UnknownOperator("+".to_string())
        );
    }
}
