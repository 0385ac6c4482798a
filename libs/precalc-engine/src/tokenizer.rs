//! Tokenizer - turns formula text into the token stream the parser consumes
//!
//! Lexical rules:
//! - whitespace is skipped
//! - numbers are `digits[sep digits][e[+-]digits]` with the locale decimal
//!   separator, emitted in canonical `.` form
//! - identifiers are taken whole and classified FUNCTION, CONSTANT or VARIABLE
//! - `;` always separates arguments, `,` does too unless it is the decimal separator
//! - `-` in prefix position becomes `neg`, a prefix `+` is dropped

use crate::builtin_functions::is_constant;
use crate::error::{CalcError, Result};
use crate::registry::{Fixity, Registry, NEGATION_SYMBOL};
use crate::token::{Token, TokenKind};
use precalc_number::{Locale, Number};
use tracing::trace;

/// Largest accepted decimal exponent in a literal
pub const MAX_LITERAL_EXPONENT: i64 = 10_000;

const OPERATOR_CHARS: &[char] = &['+', '-', '*', '/', '%', '^', '!'];

pub struct Tokenizer<'r> {
    registry: &'r Registry,
    locale: Locale,
}

impl<'r> Tokenizer<'r> {
    pub fn new(registry: &'r Registry, locale: Locale) -> Self {
        Self { registry, locale }
    }

    pub fn tokenize(&self, input: &str) -> Result<Vec<Token>> {
        let chars: Vec<char> = input.chars().collect();
        let mut tokens: Vec<Token> = Vec::new();
        let mut pos = 0;

        while pos < chars.len() {
            let ch = chars[pos];

            if ch.is_whitespace() {
                pos += 1;
                continue;
            }

            if ch.is_ascii_digit() || (ch == self.locale.decimal_separator && next_is_digit(&chars, pos)) {
                let (token, end) = self.number(&chars, pos)?;
                tokens.push(token);
                pos = end;
                continue;
            }

            if ch.is_alphabetic() {
                let end = scan_while(&chars, pos, |c| c.is_alphanumeric() || c == '_');
                let ident: String = chars[pos..end].iter().collect();
                tokens.push(self.identifier(ident));
                pos = end;
                continue;
            }

            match ch {
                '"' => {
                    let close = chars[pos + 1..]
                        .iter()
                        .position(|&c| c == '"')
                        .ok_or(CalcError::UnterminatedLiteral(pos))?;
                    let text: String = chars[pos + 1..pos + 1 + close].iter().collect();
                    tokens.push(Token::string(text));
                    pos += close + 2;
                },
                '(' => {
                    tokens.push(Token::left_paren());
                    pos += 1;
                },
                ')' => {
                    tokens.push(Token::right_paren());
                    pos += 1;
                },
                ';' => {
                    tokens.push(Token::separator(";"));
                    pos += 1;
                },
                ',' if self.locale.decimal_separator != ',' => {
                    tokens.push(Token::separator(","));
                    pos += 1;
                },
                c if OPERATOR_CHARS.contains(&c) => {
                    if self.in_prefix_position(tokens.last()) {
                        match c {
                            '-' => tokens.push(Token::operator(NEGATION_SYMBOL)),
                            '+' => {},
                            _ => tokens.push(Token::operator(c.to_string())),
                        }
                    } else {
                        tokens.push(Token::operator(c.to_string()));
                    }
                    pos += 1;
                },
                other => {
                    return Err(CalcError::UnexpectedCharacter {
                        ch: other,
                        position: pos,
                    })
                },
            }
        }

        trace!(input, count = tokens.len(), "Tokenized");
        Ok(tokens)
    }

    fn number(&self, chars: &[char], start: usize) -> Result<(Token, usize)> {
        let separator = self.locale.decimal_separator;
        let mut end = scan_while(chars, start, |c| c.is_ascii_digit());
        let mut literal: String = chars[start..end].iter().collect();

        if chars.get(end) == Some(&separator) {
            let frac_end = scan_while(chars, end + 1, |c| c.is_ascii_digit());
            literal.push('.');
            literal.extend(&chars[end + 1..frac_end]);
            end = frac_end;

            if chars.get(end) == Some(&separator) && next_is_digit(chars, end) {
                let rest_end = scan_while(chars, end + 1, |c| c.is_ascii_digit() || c == separator);
                let text: String = chars[start..rest_end].iter().collect();
                return Err(CalcError::MalformedNumber(text));
            }
        }

        if let Some('e' | 'E') = chars.get(end) {
            let sign_len = usize::from(matches!(chars.get(end + 1), Some('+' | '-')));
            if next_is_digit(chars, end + sign_len) {
                let exp_end = scan_while(chars, end + 1 + sign_len, |c| c.is_ascii_digit());
                let exponent: String = chars[end + 1..exp_end].iter().collect();
                let within_range = exponent
                    .parse::<i64>()
                    .map(|e| e.abs() <= MAX_LITERAL_EXPONENT)
                    .unwrap_or(false);
                if !within_range {
                    let text: String = chars[start..exp_end].iter().collect();
                    return Err(CalcError::MalformedNumber(text));
                }
                literal.push('e');
                literal.push_str(&exponent);
                end = exp_end;
            }
        }

        let number = Number::parse(&literal).map_err(|_| {
            CalcError::MalformedNumber(chars[start..end].iter().collect())
        })?;
        Ok((Token::number(number.to_string()), end))
    }

    fn identifier(&self, ident: String) -> Token {
        match self.registry.get(&ident) {
            Some(entry) if entry.is_function() => Token::function(ident),
            Some(_) => Token::operator(ident),
            None if is_constant(&ident) => Token::constant(ident),
            None => Token::variable(ident),
        }
    }

    /// Start of input, after `(`, after a separator, or after a non-postfix operator
    fn in_prefix_position(&self, previous: Option<&Token>) -> bool {
        match previous {
            None => true,
            Some(token) => match token.kind() {
                TokenKind::LeftParen | TokenKind::ArgumentSeparator | TokenKind::Function => true,
                TokenKind::Operator => !matches!(
                    self.registry.get(token.text()),
                    Some(entry) if entry.fixity == Fixity::PostfixOperator
                ),
                _ => false,
            },
        }
    }
}

fn scan_while(chars: &[char], start: usize, predicate: impl Fn(char) -> bool) -> usize {
    chars[start..]
        .iter()
        .position(|&c| !predicate(c))
        .map_or(chars.len(), |offset| start + offset)
}

fn next_is_digit(chars: &[char], pos: usize) -> bool {
    chars.get(pos + 1).is_some_and(|c| c.is_ascii_digit())
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;

    fn texts(input: &str) -> Vec<String> {
        Tokenizer::new(Registry::builtin(), Locale::POSIX)
            .tokenize(input)
            .unwrap()
            .iter()
            .map(|t| t.text().to_string())
            .collect()
    }

    fn kinds(input: &str) -> Vec<TokenKind> {
        Tokenizer::new(Registry::builtin(), Locale::POSIX)
            .tokenize(input)
            .unwrap()
            .iter()
            .map(Token::kind)
            .collect()
    }

    #[test]
    fn test_basic_expression() {
        assert_eq!(texts("3 + 4*2"), vec!["3", "+", "4", "*", "2"]);
        assert_eq!(
            kinds("sin(x)"),
            vec![
                TokenKind::Function,
                TokenKind::LeftParen,
                TokenKind::Variable,
                TokenKind::RightParen
            ]
        );
    }

    #[test]
    fn test_numbers_are_canonical() {
        assert_eq!(texts("007.500"), vec!["7.5"]);
        assert_eq!(texts("1.5e3"), vec!["1500"]);
        assert_eq!(texts(".25"), vec!["0.25"]);
        assert_eq!(texts("2E-2"), vec!["0.02"]);
    }

    #[test]
    fn test_locale_decimal_separator() {
        let tokens = Tokenizer::new(Registry::builtin(), Locale::EUROPEAN)
            .tokenize("nCr(5;2)+1,5")
            .unwrap();
        let texts: Vec<&str> = tokens.iter().map(Token::text).collect();
        assert_eq!(texts, vec!["nCr", "(", "5", ";", "2", ")", "+", "1.5"]);
    }

    #[test]
    fn test_comma_separates_arguments_in_posix_locale() {
        assert_eq!(
            kinds("gcd(4,6)")[3],
            TokenKind::ArgumentSeparator
        );
    }

    #[test]
    fn test_maximal_munch_identifiers() {
        assert_eq!(kinds("sinh(1)")[0], TokenKind::Function);
        assert_eq!(texts("sinh(1)")[0], "sinh");
        assert_eq!(kinds("sinner"), vec![TokenKind::Variable]);
        assert_eq!(kinds("pi"), vec![TokenKind::Constant]);
        assert_eq!(kinds("π"), vec![TokenKind::Constant]);
        assert_eq!(kinds("log10(2)")[0], TokenKind::Function);
    }

    #[test]
    fn test_unary_minus_and_plus() {
        assert_eq!(texts("-2^2"), vec!["neg", "2", "^", "2"]);
        assert_eq!(texts("2*-3"), vec!["2", "*", "neg", "3"]);
        assert_eq!(texts("5!-1"), vec!["5", "!", "-", "1"]);
        assert_eq!(texts("+4"), vec!["4"]);
        assert_eq!(texts("atan2(-1;-1)"), vec!["atan2", "(", "neg", "1", ";", "neg", "1", ")"]);
    }

    #[test]
    fn test_string_literals() {
        assert_eq!(kinds("\"abc\""), vec![TokenKind::String]);
        assert_eq!(texts("\"a b\""), vec!["a b"]);
        let err = Tokenizer::new(Registry::builtin(), Locale::POSIX)
            .tokenize("1 + \"abc")
            .unwrap_err();
        assert_eq!(err, CalcError::UnterminatedLiteral(4));
    }

    #[test]
    fn test_lexical_errors() {
        let tokenizer = Tokenizer::new(Registry::builtin(), Locale::POSIX);
        assert_eq!(
            tokenizer.tokenize("1 # 2").unwrap_err(),
            CalcError::UnexpectedCharacter { ch: '#', position: 2 }
        );
        assert_eq!(
            tokenizer.tokenize("1.2.3").unwrap_err(),
            CalcError::MalformedNumber("1.2.3".to_string())
        );
        assert!(matches!(
            tokenizer.tokenize("1e99999").unwrap_err(),
            CalcError::MalformedNumber(_)
        ));
    }
}
