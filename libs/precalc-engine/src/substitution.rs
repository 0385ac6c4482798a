//! Resolve CONSTANT and VARIABLE tokens to NUMBER tokens before evaluation

use crate::builtin_functions::constant;
use crate::context::EvalContext;
use crate::error::{CalcError, Result};
use crate::token::{Token, TokenKind};
use precalc_number::Number;
use std::collections::HashMap;

/// Replace constants with their value at the context precision and variables
/// with their binding
///
/// Works on infix and postfix sequences alike; other tokens are copied as they are.
///
/// # Errors
/// `UnboundVariable` for a variable without a binding
pub fn substitute(
    tokens: &[Token],
    bindings: &HashMap<String, Number>,
    ctx: &EvalContext,
) -> Result<Vec<Token>> {
    tokens
        .iter()
        .map(|token| match token.kind() {
            TokenKind::Constant => match constant(token.text(), ctx) {
                Some(value) => Ok(Token::number(value?.to_string())),
                None => Err(CalcError::unexpected_token(token.describe())),
            },
            TokenKind::Variable => bindings
                .get(token.text())
                .map(|value| Token::number(value.to_string()))
                .ok_or_else(|| CalcError::unbound_variable(token.text())),
            _ => Ok(token.clone()),
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;
    use crate::token::render;

    #[test]
    fn test_variables_and_constants_resolved() {
        let tokens = vec![
            Token::variable("x"),
            Token::operator("*"),
            Token::constant("pi"),
        ];
        let mut bindings = HashMap::new();
        bindings.insert("x".to_string(), Number::parse("-2.5").unwrap());

        let ctx = EvalContext::default().with_precision(6);
        let resolved = substitute(&tokens, &bindings, &ctx).unwrap();
        assert_eq!(render(&resolved), "-2.5 * 3.14159");
        assert!(resolved.iter().all(|t| t.kind() != TokenKind::Variable));
    }

    #[test]
    fn test_unbound_variable() {
        let tokens = vec![Token::variable("y")];
        assert_eq!(
            substitute(&tokens, &HashMap::new(), &EvalContext::default()).unwrap_err(),
            CalcError::UnboundVariable("y".to_string())
        );
    }

    #[test]
    fn test_other_tokens_untouched() {
        let tokens = vec![Token::string("label"), Token::number("1")];
        let resolved = substitute(&tokens, &HashMap::new(), &EvalContext::default()).unwrap();
        assert_eq!(resolved, tokens);
    }
}
