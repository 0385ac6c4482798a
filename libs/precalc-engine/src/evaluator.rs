//! RPN stack machine
//!
//! Executes a postfix token sequence against a registry and an [`EvalContext`].
//! Operands are handed to each operation in source order, so for `10 3 -`
//! the subtraction receives `[10, 3]`.

use crate::context::EvalContext;
use crate::error::{CalcError, Result};
use crate::registry::{OperandKind, Registry};
use crate::token::{Token, TokenKind};
use crate::value::Value;
use precalc_number::Number;
use tracing::{trace, warn};

pub struct Evaluator<'r> {
    registry: &'r Registry,
    context: EvalContext,
}

impl<'r> Evaluator<'r> {
    pub fn new(registry: &'r Registry, context: EvalContext) -> Self {
        Self { registry, context }
    }

    pub fn context(&self) -> &EvalContext {
        &self.context
    }

    /// Reduce `rpn` to a single value
    ///
    /// A coordinate left on top of the stack comes back as [`Value::Coordinate`]
    /// with both components intact; [`Value::display`] renders its text form.
    ///
    /// # Errors
    /// - `UnknownOperator` for a symbol missing from the registry
    /// - `UnexpectedToken` for anything other than numbers, operators and functions
    /// - `InvalidExpression(n)` when an operation lacks operands or `n != 1`
    ///   values remain at the end
    /// - `Numeric` for failures raised by the operations themselves
    pub fn evaluate(&self, rpn: &[Token]) -> Result<Value> {
        let mut stack: Vec<Value> = Vec::new();

        for token in rpn {
            match token.kind() {
                TokenKind::Number => {
                    stack.push(Value::Scalar(Number::parse(token.text())?));
                },
                TokenKind::Operator | TokenKind::Function => {
                    let entry = self.registry.lookup(token.text())?;
                    let arity = usize::from(entry.arity);
                    if stack.len() < arity {
                        return Err(CalcError::InvalidExpression(stack.len()));
                    }

                    let mut operands = stack.split_off(stack.len() - arity);
                    if entry.operand == OperandKind::Scalar {
                        for operand in operands.iter_mut().filter(|v| v.is_coordinate()) {
                            warn!(symbol = %entry.symbol, "Coordinate operand reduced to its first component");
                            *operand = Value::Scalar(operand.as_scalar().clone());
                        }
                    }

                    let result = (entry.operation)(&operands, &self.context)?;
                    trace!(symbol = %entry.symbol, result = %result, "Applied");
                    stack.push(result);
                },
                _ => return Err(CalcError::unexpected_token(token.describe())),
            }
        }

        let size = stack.len();
        match stack.pop() {
            Some(value) if size == 1 => Ok(value),
            _ => Err(CalcError::InvalidExpression(size)),
        }
    }
}

/// [`Evaluator::evaluate`] against the built-in registry
///
/// `Rec` and `Pol` results are returned as [`Value::Coordinate`], not as a formatted scalar.
pub fn evaluate(rpn: &[Token], context: &EvalContext) -> Result<Value> {
    Evaluator::new(Registry::builtin(), *context).evaluate(rpn)
}
