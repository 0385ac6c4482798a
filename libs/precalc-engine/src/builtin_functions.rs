//! Built-in operator and function catalog
//!
//! Arithmetic: `+ - * / % ^`, unary `neg`, postfix `!`
//! One-argument functions: roots, logarithms, `exp`, `abs`, `sgn` and the
//! trigonometric, inverse and hyperbolic families (honouring the angle mode)
//! Two-argument functions: `nPr nCr rootn logbase atan2 gcd lcm Rec Pol RandInt`

use crate::context::EvalContext;
use crate::error::{CalcError, Result};
use crate::registry::{
    Associativity, Operation, Registry, RegistryEntry, ADDITIVE_PRECEDENCE,
    MULTIPLICATIVE_PRECEDENCE, NEGATION_PRECEDENCE, NEGATION_SYMBOL, POSTFIX_PRECEDENCE,
    POWER_PRECEDENCE,
};
use crate::value::{CoordinateKind, Value};
use precalc_number::Number;

/// One-argument functions, in catalog order
pub const UNARY_FUNCTIONS: &[(&str, Operation)] = &[
    ("sqrt", sqrt),
    ("cbrt", cbrt),
    ("sin", sin),
    ("cos", cos),
    ("tan", tan),
    ("cot", cot),
    ("asin", asin),
    ("acos", acos),
    ("atan", atan),
    ("acot", acot),
    ("sinh", sinh),
    ("cosh", cosh),
    ("tanh", tanh),
    ("coth", coth),
    ("asinh", asinh),
    ("acosh", acosh),
    ("atanh", atanh),
    ("acoth", acoth),
    ("log2", log2),
    ("log10", log10),
    ("ln", ln),
    ("exp", exp),
    ("abs", abs),
    ("sgn", sgn),
];

/// Two-argument functions, in catalog order
pub const BINARY_FUNCTIONS: &[(&str, Operation)] = &[
    ("nPr", permutation),
    ("nCr", combination),
    ("rootn", rootn),
    ("logbase", logbase),
    ("atan2", atan2),
    ("gcd", gcd),
    ("lcm", lcm),
    ("Rec", rec),
    ("Pol", pol),
    ("RandInt", rand_int),
];

/// Populate `registry` with every built-in symbol
pub fn register_all(registry: &mut Registry) {
    let infix: [(&str, u8, Associativity, Operation); 6] = [
        ("+", ADDITIVE_PRECEDENCE, Associativity::Left, add),
        ("-", ADDITIVE_PRECEDENCE, Associativity::Left, subtract),
        ("*", MULTIPLICATIVE_PRECEDENCE, Associativity::Left, multiply),
        ("/", MULTIPLICATIVE_PRECEDENCE, Associativity::Left, divide),
        ("%", MULTIPLICATIVE_PRECEDENCE, Associativity::Left, modulo),
        ("^", POWER_PRECEDENCE, Associativity::Right, power),
    ];
    for (symbol, precedence, associativity, operation) in infix {
        registry.register(RegistryEntry::infix(symbol, precedence, associativity, operation));
    }

    registry.register(RegistryEntry::prefix(NEGATION_SYMBOL, NEGATION_PRECEDENCE, negate));
    registry.register(RegistryEntry::postfix("!", POSTFIX_PRECEDENCE, factorial));

    for &(symbol, operation) in UNARY_FUNCTIONS {
        registry.register(RegistryEntry::function(symbol, 1, operation));
    }
    for &(symbol, operation) in BINARY_FUNCTIONS {
        registry.register(RegistryEntry::function(symbol, 2, operation));
    }
}

/// Constant value for a CONSTANT token (`pi`, `π`, `e`)
pub fn constant(name: &str, ctx: &EvalContext) -> Option<Result<Number>> {
    match name {
        "pi" | "π" => Some(Number::pi(&ctx.math).map_err(CalcError::from)),
        "e" => Some(Number::e(&ctx.math).map_err(CalcError::from)),
        _ => None,
    }
}

pub fn is_constant(name: &str) -> bool {
    matches!(name, "pi" | "π" | "e")
}

// ============================================================================
// Operand extraction
// ============================================================================

fn one(operands: &[Value]) -> Result<&Number> {
    match operands {
        [x] => Ok(x.as_scalar()),
        _ => Err(CalcError::InvalidExpression(operands.len())),
    }
}

fn two(operands: &[Value]) -> Result<(&Number, &Number)> {
    match operands {
        [a, b] => Ok((a.as_scalar(), b.as_scalar())),
        _ => Err(CalcError::InvalidExpression(operands.len())),
    }
}

// ============================================================================
// Operators
// ============================================================================

pub fn add(operands: &[Value], ctx: &EvalContext) -> Result<Value> {
    let (a, b) = two(operands)?;
    Ok(a.add(b, &ctx.math)?.into())
}

pub fn subtract(operands: &[Value], ctx: &EvalContext) -> Result<Value> {
    let (a, b) = two(operands)?;
    Ok(a.sub(b, &ctx.math)?.into())
}

pub fn multiply(operands: &[Value], ctx: &EvalContext) -> Result<Value> {
    let (a, b) = two(operands)?;
    Ok(a.mul(b, &ctx.math)?.into())
}

pub fn divide(operands: &[Value], ctx: &EvalContext) -> Result<Value> {
    let (a, b) = two(operands)?;
    Ok(a.div(b, &ctx.math)?.into())
}

pub fn modulo(operands: &[Value], _ctx: &EvalContext) -> Result<Value> {
    let (a, b) = two(operands)?;
    Ok(a.rem(b)?.into())
}

pub fn power(operands: &[Value], ctx: &EvalContext) -> Result<Value> {
    let (base, exponent) = two(operands)?;
    Ok(base.pow(exponent, &ctx.math)?.into())
}

pub fn negate(operands: &[Value], _ctx: &EvalContext) -> Result<Value> {
    Ok((-one(operands)?).into())
}

pub fn factorial(operands: &[Value], ctx: &EvalContext) -> Result<Value> {
    Ok(one(operands)?.factorial(&ctx.math)?.into())
}

// ============================================================================
// One-argument functions
// ============================================================================

macro_rules! unary_functions {
    ($($name:ident => |$x:ident, $ctx:ident| $body:expr;)*) => {
        $(
            pub fn $name(operands: &[Value], $ctx: &EvalContext) -> Result<Value> {
                let $x = one(operands)?;
                Ok(Value::Scalar($body?))
            }
        )*
    };
}

unary_functions! {
    sqrt => |x, ctx| x.sqrt(&ctx.math);
    cbrt => |x, ctx| x.cbrt(&ctx.math);
    sin => |x, ctx| x.sin(ctx.angle_mode, &ctx.math);
    cos => |x, ctx| x.cos(ctx.angle_mode, &ctx.math);
    tan => |x, ctx| x.tan(ctx.angle_mode, &ctx.math);
    cot => |x, ctx| x.cot(ctx.angle_mode, &ctx.math);
    asin => |x, ctx| x.asin(ctx.angle_mode, &ctx.math);
    acos => |x, ctx| x.acos(ctx.angle_mode, &ctx.math);
    atan => |x, ctx| x.atan(ctx.angle_mode, &ctx.math);
    acot => |x, ctx| x.acot(ctx.angle_mode, &ctx.math);
    sinh => |x, ctx| x.sinh(&ctx.math);
    cosh => |x, ctx| x.cosh(&ctx.math);
    tanh => |x, ctx| x.tanh(&ctx.math);
    coth => |x, ctx| x.coth(&ctx.math);
    asinh => |x, ctx| x.asinh(&ctx.math);
    acosh => |x, ctx| x.acosh(&ctx.math);
    atanh => |x, ctx| x.atanh(&ctx.math);
    acoth => |x, ctx| x.acoth(&ctx.math);
    log2 => |x, ctx| x.log2(&ctx.math);
    log10 => |x, ctx| x.log10(&ctx.math);
    ln => |x, ctx| x.ln(&ctx.math);
    exp => |x, ctx| x.exp(&ctx.math);
}

pub fn abs(operands: &[Value], _ctx: &EvalContext) -> Result<Value> {
    Ok(one(operands)?.abs().into())
}

pub fn sgn(operands: &[Value], _ctx: &EvalContext) -> Result<Value> {
    Ok(one(operands)?.signum().into())
}

// ============================================================================
// Two-argument functions
// ============================================================================

/// `nPr(n;r)`
pub fn permutation(operands: &[Value], ctx: &EvalContext) -> Result<Value> {
    let (n, r) = two(operands)?;
    Ok(n.permutation(r, &ctx.math)?.into())
}

/// `nCr(n;r)`
pub fn combination(operands: &[Value], ctx: &EvalContext) -> Result<Value> {
    let (n, r) = two(operands)?;
    Ok(n.combination(r, &ctx.math)?.into())
}

/// `rootn(x;n)`, the n-th root of x
pub fn rootn(operands: &[Value], ctx: &EvalContext) -> Result<Value> {
    let (x, degree) = two(operands)?;
    Ok(x.nth_root(degree, &ctx.math)?.into())
}

/// `logbase(x;base)`
pub fn logbase(operands: &[Value], ctx: &EvalContext) -> Result<Value> {
    let (x, base) = two(operands)?;
    Ok(x.log_base(base, &ctx.math)?.into())
}

/// `atan2(y;x)`
pub fn atan2(operands: &[Value], ctx: &EvalContext) -> Result<Value> {
    let (y, x) = two(operands)?;
    Ok(y.atan2(x, ctx.angle_mode, &ctx.math)?.into())
}

pub fn gcd(operands: &[Value], _ctx: &EvalContext) -> Result<Value> {
    let (a, b) = two(operands)?;
    Ok(a.gcd(b)?.into())
}

pub fn lcm(operands: &[Value], _ctx: &EvalContext) -> Result<Value> {
    let (a, b) = two(operands)?;
    Ok(a.lcm(b)?.into())
}

/// `Rec(r;θ)`, polar to cartesian
pub fn rec(operands: &[Value], ctx: &EvalContext) -> Result<Value> {
    let (r, theta) = two(operands)?;
    let (x, y) = Number::to_cartesian(r, theta, ctx.angle_mode, &ctx.math)?;
    Ok(Value::coordinate(x, y, CoordinateKind::Cartesian))
}

/// `Pol(x;y)`, cartesian to polar
pub fn pol(operands: &[Value], ctx: &EvalContext) -> Result<Value> {
    let (x, y) = two(operands)?;
    let (r, theta) = Number::to_polar(x, y, ctx.angle_mode, &ctx.math)?;
    Ok(Value::coordinate(r, theta, CoordinateKind::Polar))
}

/// `RandInt(lo;hi)`, uniform over the inclusive range
pub fn rand_int(operands: &[Value], _ctx: &EvalContext) -> Result<Value> {
    let (low, high) = two(operands)?;
    Ok(Number::random_int(low, high)?.into())
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;
    use precalc_number::{AngleMode, NumberError};

    fn n(s: &str) -> Value {
        Value::from(Number::parse(s).unwrap())
    }

    fn call(operation: Operation, args: &[&str], ctx: &EvalContext) -> Result<Value> {
        let operands: Vec<Value> = args.iter().map(|s| n(s)).collect();
        operation(&operands, ctx)
    }

    fn scalar(value: Value) -> String {
        value.into_scalar().to_string()
    }

    #[test]
    fn test_arithmetic_operand_order() {
        let ctx = EvalContext::default();
        assert_eq!(scalar(call(subtract, &["10", "3"], &ctx).unwrap()), "7");
        assert_eq!(scalar(call(divide, &["1", "4"], &ctx).unwrap()), "0.25");
        assert_eq!(scalar(call(power, &["2", "10"], &ctx).unwrap()), "1024");
        assert_eq!(scalar(call(modulo, &["10", "3"], &ctx).unwrap()), "1");
        assert_eq!(scalar(call(negate, &["4"], &ctx).unwrap()), "-4");
    }

    #[test]
    fn test_two_argument_function_order() {
        let ctx = EvalContext::default();
        assert_eq!(scalar(call(permutation, &["5", "2"], &ctx).unwrap()), "20");
        assert_eq!(scalar(call(combination, &["5", "2"], &ctx).unwrap()), "10");
        assert_eq!(scalar(call(rootn, &["27", "3"], &ctx).unwrap()), "3");
        assert_eq!(scalar(call(logbase, &["8", "2"], &ctx).unwrap()), "3");
        assert_eq!(scalar(call(gcd, &["12", "18"], &ctx).unwrap()), "6");
        assert_eq!(scalar(call(lcm, &["4", "6"], &ctx).unwrap()), "12");

        let degrees = EvalContext::degrees();
        assert_eq!(scalar(call(atan2, &["1", "0"], &degrees).unwrap()), "90");
    }

    #[test]
    fn test_coordinate_conversions() {
        let ctx = EvalContext::degrees().with_precision(20);
        let polar = call(pol, &["3", "4"], &ctx).unwrap();
        match polar {
            Value::Coordinate { first, kind, .. } => {
                assert_eq!(kind, CoordinateKind::Polar);
                assert_eq!(first.to_string(), "5");
            },
            other => panic!("expected coordinate, got {other:?}"),
        }

        let cartesian = call(rec, &["2", "90"], &ctx).unwrap();
        match cartesian {
            Value::Coordinate { first, second, kind } => {
                assert_eq!(kind, CoordinateKind::Cartesian);
                assert!(first.is_zero());
                assert_eq!(second.to_string(), "2");
            },
            other => panic!("expected coordinate, got {other:?}"),
        }
    }

    #[test]
    fn test_domain_errors_propagate() {
        let ctx = EvalContext::default();
        assert_eq!(
            call(divide, &["1", "0"], &ctx).unwrap_err(),
            CalcError::Numeric(NumberError::DivisionByZero)
        );
        assert!(matches!(
            call(asin, &["2"], &ctx).unwrap_err(),
            CalcError::Numeric(NumberError::Domain { .. })
        ));
        assert!(matches!(
            call(factorial, &["2.5"], &ctx).unwrap_err(),
            CalcError::Numeric(NumberError::NotAnInteger { .. })
        ));
    }

    #[test]
    fn test_wrong_operand_count() {
        let ctx = EvalContext::default();
        assert_eq!(
            call(add, &["1"], &ctx).unwrap_err(),
            CalcError::InvalidExpression(1)
        );
        assert_eq!(
            call(sqrt, &[], &ctx).unwrap_err(),
            CalcError::InvalidExpression(0)
        );
    }

    #[test]
    fn test_rand_int_within_bounds() {
        let ctx = EvalContext::default();
        for _ in 0..20 {
            let value = call(rand_int, &["1", "6"], &ctx).unwrap().into_scalar();
            assert!(value >= Number::from(1) && value <= Number::from(6));
        }
    }

    #[test]
    fn test_trig_honours_angle_mode() {
        let degrees = EvalContext::default()
            .with_angle_mode(AngleMode::Degrees)
            .with_precision(20);
        assert_eq!(scalar(call(sin, &["30"], &degrees).unwrap()), "0.5");
        assert!(call(sin, &["180"], &degrees).unwrap().into_scalar().is_zero());
    }

    #[test]
    fn test_constants() {
        let ctx = EvalContext::default().with_precision(10);
        assert_eq!(constant("pi", &ctx).unwrap().unwrap().to_string(), "3.141592654");
        assert_eq!(constant("e", &ctx).unwrap().unwrap().to_string(), "2.718281828");
        assert!(constant("x", &ctx).is_none());
        assert!(is_constant("π"));
    }
}
