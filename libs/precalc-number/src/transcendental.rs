//! Roots, logarithms, general powers and trigonometry
//!
//! Values cross into `astro_float::BigFloat` at a working precision with guard
//! digits and come back exactly: a binary fraction `m × 2^-k` equals the
//! decimal `m × 5^k × 10^-k`, so the only rounding is the final decimal one.

use crate::context::{AngleMode, MathContext};
use crate::decimal::{check_magnitude, Number};
use crate::error::{NumberError, Result};
use astro_float::{BigFloat, Consts, Radix, RoundingMode as FloatRounding};
use num_bigint::{BigInt, BigUint};
use num_traits::{Signed, Zero};
use tracing::trace;

/// Extra decimal digits carried through the binary computation
const GUARD_DIGITS: u32 = 8;

/// Convert decimal digit precision to a word-aligned bit precision.
/// Minimum 128 bits (2 words).
fn nominal_bits(precision: u32) -> usize {
    let base_bits = (f64::from(precision) * std::f64::consts::LOG2_10).ceil() as usize;
    let bits = ((base_bits + 63) & !63) + 64;
    bits.max(128)
}

/// Working state for one operation: bit precision and the constants cache
struct Bridge {
    bits: usize,
    rm: FloatRounding,
    consts: Consts,
    /// Decimal context used for intermediate results before the final rounding
    working: MathContext,
}

impl Bridge {
    fn new(mc: &MathContext) -> Result<Self> {
        let working = mc.widened(GUARD_DIGITS);
        let consts = Consts::new().map_err(|e| NumberError::backend(e.to_string()))?;
        let bits = nominal_bits(working.precision);
        trace!(digits = working.precision, bits, "BigFloat working precision");
        Ok(Self {
            bits,
            rm: FloatRounding::ToEven,
            consts,
            working,
        })
    }

    fn float(&mut self, value: &Number) -> BigFloat {
        let literal = format!("{}e{}", value.coefficient(), -value.scale());
        BigFloat::parse(&literal, Radix::Dec, self.bits, self.rm, &mut self.consts)
    }

    fn int(&self, value: i32) -> BigFloat {
        BigFloat::from_i32(value, self.bits)
    }

    fn pi(&mut self) -> BigFloat {
        self.consts.pi(self.bits, self.rm)
    }

    /// Exact decimal value of `value` rounded to the working precision
    fn number(&self, operation: &'static str, value: &BigFloat) -> Result<Number> {
        let (words, _sig_bits, sign, exponent, _inexact) = value
            .as_raw_parts()
            .ok_or_else(|| NumberError::domain(operation, "result is not a finite number"))?;
        // |value| lies in [2^(exponent-1), 2^exponent)
        check_magnitude(operation, f64::from(exponent) * std::f64::consts::LOG10_2)?;

        let bytes: Vec<u8> = words.iter().flat_map(|w| w.to_le_bytes()).collect();
        let mut mantissa = BigUint::from_bytes_le(&bytes);
        if mantissa.is_zero() {
            return Ok(Number::zero());
        }

        // value = mantissa × 2^shift
        let mut shift = i64::from(exponent) - (bytes.len() * 8) as i64;
        if let Some(zeros) = mantissa.trailing_zeros() {
            mantissa >>= zeros;
            shift += zeros as i64;
        }

        let (magnitude, scale) = if shift >= 0 {
            (mantissa << (shift as u64), 0)
        } else {
            let k = shift.unsigned_abs();
            (mantissa * BigUint::from(5u32).pow(k as u32), k as i64)
        };

        let coefficient = BigInt::from(magnitude);
        let coefficient = if sign.is_negative() {
            -coefficient
        } else {
            coefficient
        };
        Number::new(coefficient, scale).round(&self.working)
    }

    fn to_radians(&mut self, angle: BigFloat, mode: AngleMode) -> BigFloat {
        match mode {
            AngleMode::Radians => angle,
            AngleMode::Degrees => {
                let pi = self.pi();
                let half_turn = self.int(180);
                angle
                    .mul(&pi, self.bits, self.rm)
                    .div(&half_turn, self.bits, self.rm)
            },
        }
    }

    fn from_radians(&mut self, angle: BigFloat, mode: AngleMode) -> BigFloat {
        match mode {
            AngleMode::Radians => angle,
            AngleMode::Degrees => {
                let pi = self.pi();
                let half_turn = self.int(180);
                angle
                    .mul(&half_turn, self.bits, self.rm)
                    .div(&pi, self.bits, self.rm)
            },
        }
    }
}

/// Apply a single-argument BigFloat function and round to `mc`
fn unary<F>(operation: &'static str, x: &Number, mc: &MathContext, f: F) -> Result<Number>
where
    F: FnOnce(&mut Bridge, BigFloat) -> BigFloat,
{
    let mut bridge = Bridge::new(mc)?;
    let input = bridge.float(x);
    let output = f(&mut bridge, input);
    bridge.number(operation, &output)?.round(mc)
}

/// Exact `(sin, cos)` when the reduced degree angle `turn` is a multiple of 90
fn quarter_turn(turn: &Number) -> Result<Option<(Number, Number)>> {
    if !turn.rem(&Number::from(90))?.is_zero() {
        return Ok(None);
    }
    let Some(degrees) = turn.to_i64() else {
        return Ok(None);
    };
    let (zero, one) = (Number::zero(), Number::one());
    Ok(Some(match (degrees / 90).rem_euclid(4) {
        0 => (zero, one),
        1 => (one, zero),
        2 => (zero, -one),
        _ => (-one, zero),
    }))
}

/// `(sin x, cos x)` at working precision
///
/// Degree angles are reduced modulo 360 on the decimal side, so multiples of a
/// quarter turn are exact. A radian result smaller than the angle's own rounding
/// unit at `mc` precision is indistinguishable from zero and becomes zero.
fn sin_cos(x: &Number, mode: AngleMode, mc: &MathContext) -> Result<(Number, Number)> {
    let angle = match mode {
        AngleMode::Radians => x.clone(),
        AngleMode::Degrees => {
            let turn = x.rem(&Number::from(360))?;
            if let Some(exact) = quarter_turn(&turn)? {
                return Ok(exact);
            }
            turn
        },
    };
    if angle.is_zero() {
        return Ok((Number::zero(), Number::one()));
    }

    let mut bridge = Bridge::new(mc)?;
    let input = bridge.float(&angle);
    let radians = bridge.to_radians(input, mode);
    let (bits, rm) = (bridge.bits, bridge.rm);
    let sin = radians.sin(bits, rm, &mut bridge.consts);
    let cos = radians.cos(bits, rm, &mut bridge.consts);
    let (sin, cos) = (bridge.number("sin", &sin)?, bridge.number("cos", &cos)?);
    if mode == AngleMode::Degrees {
        return Ok((sin, cos));
    }

    let noise = Number::new(
        angle.coefficient().abs(),
        angle.scale().saturating_add(i64::from(mc.precision)),
    );
    let snap = |value: Number| {
        if value.abs() < noise {
            Number::zero()
        } else {
            value
        }
    };
    Ok((snap(sin), snap(cos)))
}

/// `exp`-like functions overflow the magnitude bound beyond `MAX_EXPONENT × ln 10`
fn require_exp_range(operation: &'static str, x: &Number) -> Result<()> {
    check_magnitude(operation, x.to_f64() / std::f64::consts::LN_10)
}

fn require(operation: &'static str, condition: bool, reason: impl FnOnce() -> String) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(NumberError::domain(operation, reason()))
    }
}

/// `base ^ exponent` for a positive base, through `exp(y ln x)`
pub(crate) fn pow(base: &Number, exponent: &Number, mc: &MathContext) -> Result<Number> {
    let mut bridge = Bridge::new(mc)?;
    let x = bridge.float(base);
    let y = bridge.float(exponent);
    let (bits, rm) = (bridge.bits, bridge.rm);
    let result = x.pow(&y, bits, rm, &mut bridge.consts);
    bridge.number("pow", &result)?.round(mc)
}

impl Number {
    pub fn pi(mc: &MathContext) -> Result<Number> {
        let mut bridge = Bridge::new(mc)?;
        let pi = bridge.pi();
        bridge.number("pi", &pi)?.round(mc)
    }

    pub fn e(mc: &MathContext) -> Result<Number> {
        let mut bridge = Bridge::new(mc)?;
        let (bits, rm) = (bridge.bits, bridge.rm);
        let e = bridge.consts.e(bits, rm);
        bridge.number("e", &e)?.round(mc)
    }

    pub fn sqrt(&self, mc: &MathContext) -> Result<Number> {
        require("sqrt", !self.is_negative(), || {
            format!("{} is negative", self)
        })?;
        if self.is_zero() {
            return Ok(Number::zero());
        }
        unary("sqrt", self, mc, |b, x| x.sqrt(b.bits, b.rm))
    }

    pub fn cbrt(&self, mc: &MathContext) -> Result<Number> {
        if self.is_zero() {
            return Ok(Number::zero());
        }
        unary("cbrt", self, mc, |b, x| x.cbrt(b.bits, b.rm))
    }

    /// `degree`-th root of `self`
    pub fn nth_root(&self, degree: &Number, mc: &MathContext) -> Result<Number> {
        require("rootn", !degree.is_zero(), || "root degree must not be zero".into())?;
        if self.is_zero() {
            return if degree.is_negative() {
                Err(NumberError::DivisionByZero)
            } else {
                Ok(Number::zero())
            };
        }

        if self.is_negative() {
            let odd = degree
                .to_integer()
                .map(|d| !(d % 2u32).is_zero())
                .unwrap_or(false);
            require("rootn", odd, || {
                format!("even or fractional root of negative {}", self)
            })?;
            return Ok(-self.abs().nth_root(degree, mc)?);
        }
        if *self == Number::one() {
            return Ok(Number::one());
        }
        check_magnitude("rootn", self.log10_abs() / degree.to_f64())?;

        let mut bridge = Bridge::new(mc)?;
        let x = bridge.float(self);
        let n = bridge.float(degree);
        let (bits, rm) = (bridge.bits, bridge.rm);
        let inverse = bridge.int(1).div(&n, bits, rm);
        let root = x.pow(&inverse, bits, rm, &mut bridge.consts);
        bridge.number("rootn", &root)?.round(mc)
    }

    pub fn exp(&self, mc: &MathContext) -> Result<Number> {
        require_exp_range("exp", self)?;
        unary("exp", self, mc, |b, x| x.exp(b.bits, b.rm, &mut b.consts))
    }

    pub fn ln(&self, mc: &MathContext) -> Result<Number> {
        require("ln", self.is_positive(), || format!("{} is not positive", self))?;
        unary("ln", self, mc, |b, x| x.ln(b.bits, b.rm, &mut b.consts))
    }

    pub fn log2(&self, mc: &MathContext) -> Result<Number> {
        require("log2", self.is_positive(), || format!("{} is not positive", self))?;
        unary("log2", self, mc, |b, x| x.log2(b.bits, b.rm, &mut b.consts))
    }

    pub fn log10(&self, mc: &MathContext) -> Result<Number> {
        require("log10", self.is_positive(), || {
            format!("{} is not positive", self)
        })?;
        unary("log10", self, mc, |b, x| x.log10(b.bits, b.rm, &mut b.consts))
    }

    /// Logarithm of `self` in `base`
    pub fn log_base(&self, base: &Number, mc: &MathContext) -> Result<Number> {
        require("logbase", self.is_positive(), || {
            format!("{} is not positive", self)
        })?;
        require(
            "logbase",
            base.is_positive() && *base != Number::one(),
            || format!("invalid base {}", base),
        )?;
        let mut bridge = Bridge::new(mc)?;
        let x = bridge.float(self);
        let b = bridge.float(base);
        let (bits, rm) = (bridge.bits, bridge.rm);
        let result = x.log(&b, bits, rm, &mut bridge.consts);
        bridge.number("logbase", &result)?.round(mc)
    }

    pub fn sin(&self, mode: AngleMode, mc: &MathContext) -> Result<Number> {
        sin_cos(self, mode, mc)?.0.round(mc)
    }

    pub fn cos(&self, mode: AngleMode, mc: &MathContext) -> Result<Number> {
        sin_cos(self, mode, mc)?.1.round(mc)
    }

    pub fn tan(&self, mode: AngleMode, mc: &MathContext) -> Result<Number> {
        let (sin, cos) = sin_cos(self, mode, mc)?;
        require("tan", !cos.is_zero(), || format!("undefined at {}", self))?;
        sin.div(&cos, mc)
    }

    pub fn cot(&self, mode: AngleMode, mc: &MathContext) -> Result<Number> {
        let (sin, cos) = sin_cos(self, mode, mc)?;
        require("cot", !sin.is_zero(), || format!("undefined at {}", self))?;
        cos.div(&sin, mc)
    }

    pub fn asin(&self, mode: AngleMode, mc: &MathContext) -> Result<Number> {
        require("asin", self.abs() <= Number::one(), || {
            format!("{} is outside [-1, 1]", self)
        })?;
        unary("asin", self, mc, |b, x| {
            let radians = x.asin(b.bits, b.rm, &mut b.consts);
            b.from_radians(radians, mode)
        })
    }

    pub fn acos(&self, mode: AngleMode, mc: &MathContext) -> Result<Number> {
        require("acos", self.abs() <= Number::one(), || {
            format!("{} is outside [-1, 1]", self)
        })?;
        unary("acos", self, mc, |b, x| {
            let radians = x.acos(b.bits, b.rm, &mut b.consts);
            b.from_radians(radians, mode)
        })
    }

    pub fn atan(&self, mode: AngleMode, mc: &MathContext) -> Result<Number> {
        unary("atan", self, mc, |b, x| {
            let radians = x.atan(b.bits, b.rm, &mut b.consts);
            b.from_radians(radians, mode)
        })
    }

    /// Principal value in `(-π/2, π/2]`; `acot(0) = π/2`
    pub fn acot(&self, mode: AngleMode, mc: &MathContext) -> Result<Number> {
        unary("acot", self, mc, |b, x| {
            let radians = if x.is_zero() {
                let pi = b.pi();
                pi.div(&b.int(2), b.bits, b.rm)
            } else {
                let inverse = b.int(1).div(&x, b.bits, b.rm);
                inverse.atan(b.bits, b.rm, &mut b.consts)
            };
            b.from_radians(radians, mode)
        })
    }

    pub fn sinh(&self, mc: &MathContext) -> Result<Number> {
        require_exp_range("sinh", self)?;
        unary("sinh", self, mc, |b, x| x.sinh(b.bits, b.rm, &mut b.consts))
    }

    pub fn cosh(&self, mc: &MathContext) -> Result<Number> {
        require_exp_range("cosh", self)?;
        unary("cosh", self, mc, |b, x| x.cosh(b.bits, b.rm, &mut b.consts))
    }

    pub fn tanh(&self, mc: &MathContext) -> Result<Number> {
        unary("tanh", self, mc, |b, x| x.tanh(b.bits, b.rm, &mut b.consts))
    }

    pub fn coth(&self, mc: &MathContext) -> Result<Number> {
        require("coth", !self.is_zero(), || "undefined at 0".into())?;
        unary("coth", self, mc, |b, x| {
            let tanh = x.tanh(b.bits, b.rm, &mut b.consts);
            b.int(1).div(&tanh, b.bits, b.rm)
        })
    }

    pub fn asinh(&self, mc: &MathContext) -> Result<Number> {
        unary("asinh", self, mc, |b, x| x.asinh(b.bits, b.rm, &mut b.consts))
    }

    pub fn acosh(&self, mc: &MathContext) -> Result<Number> {
        require("acosh", *self >= Number::one(), || {
            format!("{} is less than 1", self)
        })?;
        unary("acosh", self, mc, |b, x| x.acosh(b.bits, b.rm, &mut b.consts))
    }

    pub fn atanh(&self, mc: &MathContext) -> Result<Number> {
        require("atanh", self.abs() < Number::one(), || {
            format!("{} is outside (-1, 1)", self)
        })?;
        unary("atanh", self, mc, |b, x| x.atanh(b.bits, b.rm, &mut b.consts))
    }

    pub fn acoth(&self, mc: &MathContext) -> Result<Number> {
        require("acoth", self.abs() > Number::one(), || {
            format!("{} is inside [-1, 1]", self)
        })?;
        unary("acoth", self, mc, |b, x| {
            let inverse = b.int(1).div(&x, b.bits, b.rm);
            inverse.atanh(b.bits, b.rm, &mut b.consts)
        })
    }

    /// Quadrant-aware angle of the point `(x, y)`; `self` is `y`
    pub fn atan2(&self, x: &Number, mode: AngleMode, mc: &MathContext) -> Result<Number> {
        let y = self;
        require("atan2", !(y.is_zero() && x.is_zero()), || {
            "undefined for (0, 0)".into()
        })?;

        let mut bridge = Bridge::new(mc)?;
        let (bits, rm) = (bridge.bits, bridge.rm);
        let radians = if x.is_zero() {
            let half_pi = bridge.pi().div(&bridge.int(2), bits, rm);
            if y.is_negative() {
                half_pi.neg()
            } else {
                half_pi
            }
        } else {
            let ratio = bridge.float(y).div(&bridge.float(x), bits, rm);
            let angle = ratio.atan(bits, rm, &mut bridge.consts);
            if x.is_negative() {
                let pi = bridge.pi();
                if y.is_negative() {
                    angle.sub(&pi, bits, rm)
                } else {
                    angle.add(&pi, bits, rm)
                }
            } else {
                angle
            }
        };
        let angle = bridge.from_radians(radians, mode);
        bridge.number("atan2", &angle)?.round(mc)
    }

    /// Cartesian `(x, y)` to polar `(r, θ)`; the origin maps to `(0, 0)`
    pub fn to_polar(x: &Number, y: &Number, mode: AngleMode, mc: &MathContext) -> Result<(Number, Number)> {
        let working = mc.widened(GUARD_DIGITS);
        let squares = x.mul(x, &working)?.add(&y.mul(y, &working)?, &working)?;
        let r = squares.sqrt(mc)?;
        if x.is_zero() && y.is_zero() {
            return Ok((r, Number::zero()));
        }
        let theta = y.atan2(x, mode, mc)?;
        Ok((r, theta))
    }

    /// Polar `(r, θ)` to cartesian `(x, y)`
    pub fn to_cartesian(r: &Number, theta: &Number, mode: AngleMode, mc: &MathContext) -> Result<(Number, Number)> {
        let (sin, cos) = sin_cos(theta, mode, mc)?;
        Ok((r.mul(&cos, mc)?, r.mul(&sin, mc)?))
    }
}
