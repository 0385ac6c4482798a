//! Calculator - formula text in, [`Value`] out
//!
//! Wires the tokenizer, substitution, parser and evaluator together around
//! one registry and one [`EvalContext`].

use crate::context::EvalContext;
use crate::error::Result;
use crate::evaluator::Evaluator;
use crate::parser::Parser;
use crate::registry::Registry;
use crate::substitution::substitute;
use crate::token::Token;
use crate::tokenizer::Tokenizer;
use crate::value::Value;
use precalc_number::Number;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Formula evaluation front end
///
/// # Example
/// ```rust
/// use precalc_engine::{Calculator, EvalContext};
/// use std::collections::HashMap;
///
/// let calc = Calculator::new(EvalContext::default());
/// assert_eq!(calc.calculate("3+4*2").unwrap().to_string(), "11");
///
/// let mut vars = HashMap::new();
/// vars.insert("r".to_string(), "2".parse().unwrap());
/// assert_eq!(calc.calculate_with("r^2*3", &vars).unwrap().to_string(), "12");
/// ```
#[derive(Debug, Clone)]
pub struct Calculator<'r> {
    registry: &'r Registry,
    context: EvalContext,
}

impl Calculator<'static> {
    /// Calculator over the built-in registry
    pub fn new(context: EvalContext) -> Self {
        Self::with_registry(Registry::builtin(), context)
    }
}

impl Default for Calculator<'static> {
    fn default() -> Self {
        Self::new(EvalContext::default())
    }
}

impl<'r> Calculator<'r> {
    pub fn with_registry(registry: &'r Registry, context: EvalContext) -> Self {
        Self { registry, context }
    }

    pub fn context(&self) -> &EvalContext {
        &self.context
    }

    pub fn registry(&self) -> &'r Registry {
        self.registry
    }

    pub fn tokenize(&self, formula: &str) -> Result<Vec<Token>> {
        Tokenizer::new(self.registry, self.context.locale).tokenize(formula)
    }

    /// Tokenize and convert to postfix without resolving anything
    pub fn compile(&self, formula: &str) -> Result<Vec<Token>> {
        let tokens = self.tokenize(formula)?;
        Parser::new(self.registry).parse_to_postfix(&tokens)
    }

    /// Structural check only: lexing and parenthesis/separator placement
    pub fn validate(&self, formula: &str) -> Result<()> {
        self.compile(formula).map(|_| ())
    }

    pub fn calculate(&self, formula: &str) -> Result<Value> {
        self.calculate_with(formula, &HashMap::new())
    }

    pub fn calculate_with(
        &self,
        formula: &str,
        variables: &HashMap<String, Number>,
    ) -> Result<Value> {
        let rpn = self.compile(formula)?;
        let result = self.evaluate_bound(&rpn, variables);
        match &result {
            Ok(value) => debug!(formula, result = %self.format(value), "Calculated"),
            Err(e) => debug!(formula, error = %e, "Calculation failed"),
        }
        result
    }

    /// Locale-formatted display text
    pub fn format(&self, value: &Value) -> String {
        value.display(&self.context)
    }

    /// Evaluate `formula` at each value of `variable`
    ///
    /// Each point is independent: a failure yields `None` for that point only.
    /// A formula that does not compile yields `None` everywhere.
    pub fn sample(&self, formula: &str, variable: &str, points: &[Number]) -> Vec<Option<Value>> {
        let rpn = match self.compile(formula) {
            Ok(rpn) => rpn,
            Err(e) => {
                warn!(formula, error = %e, "Formula rejected, no samples");
                return vec![None; points.len()];
            },
        };

        let mut bindings = HashMap::with_capacity(1);
        points
            .iter()
            .map(|point| {
                bindings.insert(variable.to_string(), point.clone());
                match self.evaluate_bound(&rpn, &bindings) {
                    Ok(value) => Some(value),
                    Err(e) => {
                        debug!(formula, point = %point, error = %e, "Sample skipped");
                        None
                    },
                }
            })
            .collect()
    }

    fn evaluate_bound(&self, rpn: &[Token], variables: &HashMap<String, Number>) -> Result<Value> {
        let resolved = substitute(rpn, variables, &self.context)?;
        Evaluator::new(self.registry, self.context).evaluate(&resolved)
    }
}
