//! Values moved through the evaluator's operand stack

use crate::context::EvalContext;
use precalc_number::Number;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateKind {
    /// `(x, y)`
    Cartesian,
    /// `(r, θ)`
    Polar,
}

/// A scalar, or the pair produced by a coordinate conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Scalar(Number),
    Coordinate {
        first: Number,
        second: Number,
        kind: CoordinateKind,
    },
}

impl Value {
    pub fn coordinate(first: Number, second: Number, kind: CoordinateKind) -> Self {
        Self::Coordinate {
            first,
            second,
            kind,
        }
    }

    pub fn is_coordinate(&self) -> bool {
        matches!(self, Value::Coordinate { .. })
    }

    /// The scalar, or the first component of a coordinate
    pub fn as_scalar(&self) -> &Number {
        match self {
            Value::Scalar(number) => number,
            Value::Coordinate { first, .. } => first,
        }
    }

    pub fn into_scalar(self) -> Number {
        match self {
            Value::Scalar(number) => number,
            Value::Coordinate { first, .. } => first,
        }
    }

    /// Locale-formatted text: `1.234,5`, `x=3; y=4` or `r=5; θ=53.13`
    pub fn display(&self, ctx: &EvalContext) -> String {
        match self {
            Value::Scalar(number) => number.format_with(&ctx.locale),
            Value::Coordinate {
                first,
                second,
                kind,
            } => {
                let (a, b) = match kind {
                    CoordinateKind::Cartesian => ("x", "y"),
                    CoordinateKind::Polar => ("r", "θ"),
                };
                format!(
                    "{}={}; {}={}",
                    a,
                    first.format_with(&ctx.locale),
                    b,
                    second.format_with(&ctx.locale)
                )
            },
        }
    }
}

impl From<Number> for Value {
    fn from(number: Number) -> Self {
        Value::Scalar(number)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display(&EvalContext::default()))
    }
}
