//! Exact decimal representation and the rational operations on it
//!
//! A [`Number`] is `coefficient × 10^-scale` with an unbounded coefficient.
//! Addition, subtraction, multiplication and remainder are exact before the
//! context rounding step; division is correctly rounded to the context precision.
//!
//! Results are confined to decimal exponents within `±`[`MAX_EXPONENT`]. Powers
//! estimate their magnitude up front and fail with [`NumberError::TooLarge`]
//! instead of materialising an unbounded coefficient.

use crate::context::{is_negative, Locale, MathContext};
use crate::error::{NumberError, Result};
use num_bigint::{BigInt, Sign};
use num_traits::{Signed, ToPrimitive, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Neg;
use std::str::FromStr;

/// Largest decimal exponent a result may carry, in either direction
pub const MAX_EXPONENT: i64 = 100_000;

/// Widest power of ten materialised while aligning or rescaling coefficients
const MAX_SHIFT: u64 = 4 * MAX_EXPONENT as u64;

/// Above this many result digits an integer power goes through the float bridge
const EXACT_POW_DIGIT_LIMIT: u64 = 100_000;

/// Arbitrary-precision decimal number
#[derive(Clone, Debug)]
pub struct Number {
    coefficient: BigInt,
    scale: i64,
}

pub(crate) fn pow10(exponent: u64) -> Result<BigInt> {
    if exponent > MAX_SHIFT {
        return Err(NumberError::too_large("scale", format!("10^{}", MAX_SHIFT)));
    }
    Ok(BigInt::from(10u32).pow(exponent as u32))
}

pub(crate) fn digit_count(value: &BigInt) -> u64 {
    if value.is_zero() {
        return 1;
    }
    value.magnitude().to_str_radix(10).len() as u64
}

fn magnitude_limit() -> String {
    format!("1e±{}", MAX_EXPONENT)
}

/// Reject a base-10 exponent estimate that falls outside `±MAX_EXPONENT`
pub(crate) fn check_magnitude(operation: &'static str, estimate: f64) -> Result<()> {
    if estimate.is_finite() && estimate.abs() <= MAX_EXPONENT as f64 {
        Ok(())
    } else {
        Err(NumberError::too_large(operation, magnitude_limit()))
    }
}

impl Number {
    /// Build `coefficient × 10^-scale`
    pub fn new(coefficient: impl Into<BigInt>, scale: i64) -> Self {
        Self {
            coefficient: coefficient.into(),
            scale,
        }
    }

    pub fn zero() -> Self {
        Self::new(0, 0)
    }

    pub fn one() -> Self {
        Self::new(1, 0)
    }

    /// Parse a locale-free literal: `[-|+]digits[.digits][e[+-]digits]`
    pub fn parse(text: &str) -> Result<Self> {
        let literal = text.trim();
        let (negative, body) = match literal.as_bytes().first() {
            Some(b'-') => (true, &literal[1..]),
            Some(b'+') => (false, &literal[1..]),
            _ => (false, literal),
        };

        let (mantissa, exponent) = match body.find(|c: char| c == 'e' || c == 'E') {
            Some(pos) => {
                let exponent = body[pos + 1..]
                    .parse::<i64>()
                    .map_err(|e| NumberError::parse(format!("{}: {}", text, e)))?;
                (&body[..pos], exponent)
            },
            None => (body, 0),
        };

        let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(NumberError::parse(text));
        }
        if !int_part
            .chars()
            .chain(frac_part.chars())
            .all(|c| c.is_ascii_digit())
        {
            return Err(NumberError::parse(text));
        }

        let digits = format!("{}{}", int_part, frac_part);
        let magnitude = BigInt::parse_bytes(digits.as_bytes(), 10)
            .ok_or_else(|| NumberError::parse(text))?;
        let coefficient = if negative { -magnitude } else { magnitude };
        let scale = (frac_part.len() as i64)
            .checked_sub(exponent)
            .ok_or_else(|| NumberError::parse(format!("{}: exponent out of range", text)))?;

        Self::new(coefficient, scale).normalized().bounded("literal")
    }

    pub fn coefficient(&self) -> &BigInt {
        &self.coefficient
    }

    pub fn scale(&self) -> i64 {
        self.scale
    }

    /// Decimal exponent of the leading digit, so `1234.5` gives 3 and `0.01` gives -2
    pub fn exponent(&self) -> i64 {
        (digit_count(&self.coefficient) as i64 - 1).saturating_sub(self.scale)
    }

    pub fn is_zero(&self) -> bool {
        self.coefficient.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        is_negative(&self.coefficient)
    }

    pub fn is_positive(&self) -> bool {
        !self.is_zero() && !self.is_negative()
    }

    /// Significant digits in the coefficient
    pub fn precision(&self) -> u64 {
        digit_count(&self.coefficient)
    }

    /// Strip trailing zeros from the coefficient
    pub fn normalized(mut self) -> Self {
        if self.coefficient.is_zero() {
            self.scale = 0;
            return self;
        }
        let ten = BigInt::from(10u32);
        loop {
            let remainder = &self.coefficient % &ten;
            if !remainder.is_zero() {
                break;
            }
            self.coefficient /= &ten;
            self.scale -= 1;
        }
        self
    }

    /// Fail when the value lies outside `1e±MAX_EXPONENT`
    fn bounded(self, operation: &'static str) -> Result<Self> {
        if !self.is_zero() && self.exponent().unsigned_abs() > MAX_EXPONENT as u64 {
            return Err(NumberError::too_large(operation, magnitude_limit()));
        }
        Ok(self)
    }

    pub fn is_integer(&self) -> bool {
        self.clone().normalized().scale <= 0
    }

    /// Exact integer value, `None` when there is a fractional part
    pub fn to_integer(&self) -> Option<BigInt> {
        let normalized = self.clone().normalized();
        if normalized.scale > 0 {
            return None;
        }
        let shift = normalized.scale.unsigned_abs();
        Some(normalized.coefficient * pow10(shift).ok()?)
    }

    pub fn to_i64(&self) -> Option<i64> {
        self.to_integer().and_then(|value| value.to_i64())
    }

    /// Leading digits as a float in `[1, 10)` together with [`Number::exponent`]
    fn leading(&self) -> (f64, i64) {
        let digits = self.coefficient.magnitude().to_str_radix(10);
        let take = digits.len().min(17);
        let mantissa = format!("{}.{}", &digits[..1], &digits[1..take])
            .parse()
            .unwrap_or(f64::NAN);
        (mantissa, self.exponent())
    }

    /// Lossy conversion for callers that plot or compare against floats
    pub fn to_f64(&self) -> f64 {
        if self.is_zero() {
            return 0.0;
        }
        let (mantissa, exponent) = self.leading();
        let magnitude: f64 = format!("{}e{}", mantissa, exponent.clamp(-400, 400))
            .parse()
            .unwrap_or(f64::NAN);
        if self.is_negative() {
            -magnitude
        } else {
            magnitude
        }
    }

    /// `log10(|self|)` estimate, negative infinity for zero
    pub(crate) fn log10_abs(&self) -> f64 {
        if self.is_zero() {
            return f64::NEG_INFINITY;
        }
        let (mantissa, exponent) = self.leading();
        mantissa.log10() + exponent as f64
    }

    /// Round to the context precision (significant digits) with its rounding mode
    pub fn round(&self, mc: &MathContext) -> Result<Self> {
        let digits = digit_count(&self.coefficient);
        let precision = u64::from(mc.precision.max(1));
        if digits <= precision {
            return Ok(self.clone().normalized());
        }
        self.discard_digits(digits - precision, mc)
    }

    /// Round to a fixed number of fractional digits
    pub fn round_to_places(&self, places: i64, mc: &MathContext) -> Result<Self> {
        if self.scale <= places {
            return Ok(self.clone().normalized());
        }
        self.discard_digits(self.scale.abs_diff(places), mc)?
            .bounded("round")
    }

    /// Drop the `count` least significant coefficient digits, rounding per `mc`
    fn discard_digits(&self, count: u64, mc: &MathContext) -> Result<Self> {
        // past the leading digit the quotient stays zero and the tail stays below half
        let divisor = pow10(count.min(digit_count(&self.coefficient) + 1))?;
        let mut coefficient = &self.coefficient / &divisor;
        let remainder = &self.coefficient % &divisor;
        let negative = self.is_negative();

        if mc
            .rounding
            .increments(&coefficient, &remainder, &divisor, negative)
        {
            if negative {
                coefficient -= 1;
            } else {
                coefficient += 1;
            }
        }
        let scale = self
            .scale
            .checked_sub_unsigned(count)
            .ok_or_else(|| NumberError::too_large("round", magnitude_limit()))?;
        Ok(Self::new(coefficient, scale).normalized())
    }

    /// Coefficient expressed at a scale no smaller than its own
    fn rescaled(&self, scale: i64) -> Result<BigInt> {
        match scale.abs_diff(self.scale) {
            0 => Ok(self.coefficient.clone()),
            shift => Ok(&self.coefficient * pow10(shift)?),
        }
    }

    /// Coefficients of both operands at the common (larger) scale
    fn aligned(&self, other: &Self) -> Result<(BigInt, BigInt, i64)> {
        let scale = self.scale.max(other.scale);
        Ok((self.rescaled(scale)?, other.rescaled(scale)?, scale))
    }

    pub fn add(&self, other: &Self, mc: &MathContext) -> Result<Self> {
        let (a, b, scale) = self.aligned(other)?;
        Self::new(a + b, scale).round(mc)?.bounded("add")
    }

    pub fn sub(&self, other: &Self, mc: &MathContext) -> Result<Self> {
        let (a, b, scale) = self.aligned(other)?;
        Self::new(a - b, scale).round(mc)?.bounded("subtract")
    }

    pub fn mul(&self, other: &Self, mc: &MathContext) -> Result<Self> {
        let scale = self
            .scale
            .checked_add(other.scale)
            .ok_or_else(|| NumberError::too_large("multiply", magnitude_limit()))?;
        Self::new(&self.coefficient * &other.coefficient, scale)
            .round(mc)?
            .bounded("multiply")
    }

    pub fn div(&self, divisor: &Self, mc: &MathContext) -> Result<Self> {
        if divisor.is_zero() {
            return Err(NumberError::DivisionByZero);
        }
        if self.is_zero() {
            return Ok(Self::zero());
        }

        // Enough quotient digits that the rounding step always discards some
        let precision = i64::from(mc.precision.max(1));
        let shift = (precision + 2 + digit_count(&divisor.coefficient) as i64
            - digit_count(&self.coefficient) as i64)
            .max(0);
        let numerator = &self.coefficient * pow10(shift as u64)?;
        let mut quotient = &numerator / &divisor.coefficient;
        let remainder = &numerator % &divisor.coefficient;
        let mut scale = self
            .scale
            .checked_sub(divisor.scale)
            .and_then(|scale| scale.checked_add(shift))
            .ok_or_else(|| NumberError::too_large("divide", magnitude_limit()))?;

        if !remainder.is_zero() {
            // sticky digit: marks the discarded tail as inexact
            let negative = self.is_negative() != divisor.is_negative();
            quotient = quotient * 10 + if negative { -1 } else { 1 };
            scale += 1;
        }

        Self::new(quotient, scale).round(mc)?.bounded("divide")
    }

    /// Truncated remainder; the sign follows the dividend
    pub fn rem(&self, divisor: &Self) -> Result<Self> {
        if divisor.is_zero() {
            return Err(NumberError::DivisionByZero);
        }
        let (a, b, scale) = self.aligned(divisor)?;
        Ok(Self::new(a % b, scale).normalized())
    }

    pub fn abs(&self) -> Self {
        Self::new(self.coefficient.abs(), self.scale)
    }

    /// -1, 0 or 1
    pub fn signum(&self) -> Self {
        Self::new(self.coefficient.signum(), 0)
    }

    /// `self ^ exponent`
    ///
    /// The result magnitude `exponent × log10|self|` is estimated before any
    /// digit is produced.
    pub fn pow(&self, exponent: &Self, mc: &MathContext) -> Result<Self> {
        if self.is_zero() {
            return match exponent.coefficient.sign() {
                Sign::Minus => Err(NumberError::DivisionByZero),
                Sign::NoSign => Ok(Self::one()),
                Sign::Plus => Ok(Self::zero()),
            };
        }

        let integer = exponent.to_integer();
        if self.is_negative() && integer.is_none() {
            return Err(NumberError::domain(
                "pow",
                format!("negative base {} requires an integer exponent", self),
            ));
        }
        let flip = self.is_negative() && integer.as_ref().is_some_and(|n| !(n % 2u32).is_zero());
        let magnitude = self.abs();
        if magnitude == Self::one() {
            return Ok(if flip { -Self::one() } else { Self::one() });
        }

        check_magnitude("pow", exponent.to_f64() * magnitude.log10_abs())?;
        if let Some(n) = integer.as_ref().and_then(ToPrimitive::to_i64) {
            let digits = digit_count(&self.coefficient).saturating_mul(n.unsigned_abs());
            if digits <= EXACT_POW_DIGIT_LIMIT {
                return self.powi(n, mc);
            }
        }

        let result = crate::transcendental::pow(&magnitude, exponent, mc)?;
        Ok(if flip { -result } else { result })
    }

    /// Integer power by exact binary exponentiation, one rounding at the end
    pub fn powi(&self, exponent: i64, mc: &MathContext) -> Result<Self> {
        if exponent == 0 {
            return Ok(Self::one());
        }
        if self.is_zero() {
            return if exponent < 0 {
                Err(NumberError::DivisionByZero)
            } else {
                Ok(Self::zero())
            };
        }
        check_magnitude("pow", exponent as f64 * self.log10_abs())?;
        if exponent < 0 {
            let positive = self.exact_powi(exponent.unsigned_abs())?;
            return Self::one().div(&positive, mc);
        }
        self.exact_powi(exponent as u64)?.round(mc)
    }

    fn exact_powi(&self, exponent: u64) -> Result<Self> {
        let exponent_u32 =
            u32::try_from(exponent).map_err(|_| NumberError::too_large("pow", u32::MAX))?;
        let scale = i64::try_from(exponent)
            .ok()
            .and_then(|n| self.scale.checked_mul(n))
            .ok_or_else(|| NumberError::too_large("pow", magnitude_limit()))?;
        Ok(Self::new(self.coefficient.pow(exponent_u32), scale))
    }

    /// Render with the locale's decimal and grouping separators
    pub fn format_with(&self, locale: &Locale) -> String {
        let plain = self.to_string();
        let (sign, unsigned) = match plain.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", plain.as_str()),
        };
        let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));

        let mut out = String::with_capacity(plain.len() + int_part.len() / 3 + 1);
        out.push_str(sign);
        match locale.grouping_separator {
            Some(group) => {
                let len = int_part.len();
                for (i, ch) in int_part.chars().enumerate() {
                    if i > 0 && (len - i) % 3 == 0 {
                        out.push(group);
                    }
                    out.push(ch);
                }
            },
            None => out.push_str(int_part),
        }
        if !frac_part.is_empty() {
            out.push(locale.decimal_separator);
            out.push_str(frac_part);
        }
        out
    }
}

impl Default for Number {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::new(value, 0)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Self::new(value, 0)
    }
}

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        Self::new(value, 0)
    }
}

impl From<BigInt> for Number {
    fn from(value: BigInt) -> Self {
        Self::new(value, 0)
    }
}

impl FromStr for Number {
    type Err = NumberError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Neg for Number {
    type Output = Number;

    fn neg(self) -> Number {
        Number::new(-self.coefficient, self.scale)
    }
}

impl Neg for &Number {
    type Output = Number;

    fn neg(self) -> Number {
        Number::new(-&self.coefficient, self.scale)
    }
}

impl Ord for Number {
    fn cmp(&self, other: &Self) -> Ordering {
        let sign = self.coefficient.sign().cmp(&other.coefficient.sign());
        if sign != Ordering::Equal || self.is_zero() {
            return sign;
        }
        let magnitude = self.exponent().cmp(&other.exponent()).then_with(|| {
            let a = self.coefficient.magnitude().to_str_radix(10);
            let b = other.coefficient.magnitude().to_str_radix(10);
            a.trim_end_matches('0').cmp(b.trim_end_matches('0'))
        });
        if self.is_negative() {
            magnitude.reverse()
        } else {
            magnitude
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Number {}

impl fmt::Display for Number {
    /// Plain notation, trailing zeros stripped
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.clone().normalized();
        let digits = n.coefficient.magnitude().to_str_radix(10);
        if n.is_negative() {
            write!(f, "-")?;
        }

        if n.scale <= 0 {
            write!(f, "{}", digits)?;
            if !n.coefficient.is_zero() {
                write!(f, "{}", "0".repeat(n.scale.unsigned_abs() as usize))?;
            }
            return Ok(());
        }

        let scale = n.scale as usize;
        if digits.len() > scale {
            let (int_part, frac_part) = digits.split_at(digits.len() - scale);
            write!(f, "{}.{}", int_part, frac_part)
        } else {
            write!(f, "0.{}{}", "0".repeat(scale - digits.len()), digits)
        }
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;
    use crate::context::RoundingMode;

    fn n(s: &str) -> Number {
        Number::parse(s).unwrap()
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!(n("3.14").to_string(), "3.14");
        assert_eq!(n("-0.0050").to_string(), "-0.005");
        assert_eq!(n("1.5e3").to_string(), "1500");
        assert_eq!(n("25E-3").to_string(), "0.025");
        assert_eq!(n(".5").to_string(), "0.5");
        assert_eq!(n("7.").to_string(), "7");
        assert_eq!(n("+000").to_string(), "0");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Number::parse("").is_err());
        assert!(Number::parse(".").is_err());
        assert!(Number::parse("1.2.3").is_err());
        assert!(Number::parse("12a").is_err());
        assert!(Number::parse("1e").is_err());
    }

    #[test]
    fn test_numeric_equality_ignores_scale() {
        assert_eq!(n("1.0"), n("1"));
        assert_eq!(n("100"), n("1e2"));
        assert!(n("-2") < n("1.5"));
        assert!(n("0.1") > n("0.09999"));
        assert!(n("-0.5") > n("-0.51"));
        assert!(n("1e-50") < n("2e-50"));
        assert!(n("1e-50") > Number::zero());
        assert!(n("-1e5") < n("-99999"));
        assert_eq!(n("-120"), Number::new(-12, -1));
    }

    #[test]
    fn test_exponent_and_float_conversion() {
        assert_eq!(n("1234.5").exponent(), 3);
        assert_eq!(n("0.01").exponent(), -2);
        assert_eq!(n("-2.5").to_f64(), -2.5);
        assert_eq!(n("1e-500").to_f64(), 0.0);
        assert!(n("1e500").to_f64().is_infinite());
    }

    #[test]
    fn test_magnitude_bound() {
        let mc = MathContext::default();
        let big = n("1e60000");
        assert!(matches!(
            big.mul(&big, &mc),
            Err(NumberError::TooLarge { .. })
        ));
        assert!(matches!(
            Number::parse("1e9999999999"),
            Err(NumberError::TooLarge { .. })
        ));
        assert!(matches!(
            n("10").pow(&n("1000000000"), &mc),
            Err(NumberError::TooLarge { .. })
        ));
        assert!(matches!(
            n("0.1").powi(200_000, &mc),
            Err(NumberError::TooLarge { .. })
        ));
        assert_eq!(big.add(&Number::one(), &mc).unwrap(), big);
    }

    #[test]
    fn test_unit_bases_skip_the_bound() {
        let mc = MathContext::default();
        assert_eq!(n("1").pow(&n("1e50"), &mc).unwrap(), Number::one());
        assert_eq!(n("-1").pow(&n("1000000001"), &mc).unwrap(), n("-1"));
        assert_eq!(n("-1").pow(&n("1000000000"), &mc).unwrap(), Number::one());
    }

    #[test]
    fn test_exact_sum() {
        let mc = MathContext::default();
        assert_eq!(n("0.1").add(&n("0.2"), &mc).unwrap(), n("0.3"));
        assert_eq!(n("10").sub(&n("3.25"), &mc).unwrap(), n("6.75"));
        assert_eq!(n("1.5").mul(&n("-4"), &mc).unwrap(), n("-6"));
    }

    #[test]
    fn test_division_rounding() {
        let mc = MathContext::new(5, RoundingMode::HalfEven);
        assert_eq!(n("1").div(&n("3"), &mc).unwrap(), n("0.33333"));
        assert_eq!(n("2").div(&n("3"), &mc).unwrap(), n("0.66667"));
        assert_eq!(n("-2").div(&n("3"), &mc).unwrap(), n("-0.66667"));
        assert_eq!(n("10").div(&n("4"), &mc).unwrap(), n("2.5"));

        let down = MathContext::new(5, RoundingMode::Down);
        assert_eq!(n("2").div(&n("3"), &down).unwrap(), n("0.66666"));
    }

    #[test]
    fn test_division_by_zero() {
        let mc = MathContext::default();
        assert_eq!(
            n("1").div(&Number::zero(), &mc),
            Err(NumberError::DivisionByZero)
        );
        assert_eq!(n("1").rem(&n("0.0")), Err(NumberError::DivisionByZero));
    }

    #[test]
    fn test_remainder_follows_dividend() {
        assert_eq!(n("7").rem(&n("3")).unwrap(), n("1"));
        assert_eq!(n("-7").rem(&n("3")).unwrap(), n("-1"));
        assert_eq!(n("7.5").rem(&n("2")).unwrap(), n("1.5"));
    }

    #[test]
    fn test_round_significant_digits() {
        let mc = MathContext::new(3, RoundingMode::HalfUp);
        assert_eq!(n("12345").round(&mc).unwrap(), n("12300"));
        assert_eq!(n("0.0012345").round(&mc).unwrap(), n("0.00123"));
        assert_eq!(n("9.995").round(&mc).unwrap(), n("10"));
    }

    #[test]
    fn test_round_to_places() {
        let mc = MathContext::new(34, RoundingMode::HalfUp);
        assert_eq!(n("3.14159").round_to_places(2, &mc).unwrap(), n("3.14"));
        assert_eq!(n("2.675").round_to_places(2, &mc).unwrap(), n("2.68"));
        assert_eq!(n("4321").round_to_places(-10, &mc).unwrap(), Number::zero());

        let up = MathContext::new(34, RoundingMode::Up);
        assert_eq!(n("4321").round_to_places(-10, &up).unwrap(), n("1e10"));
    }

    #[test]
    fn test_integer_powers() {
        let mc = MathContext::default();
        assert_eq!(n("2").pow(&n("9"), &mc).unwrap(), n("512"));
        assert_eq!(n("-3").pow(&n("3"), &mc).unwrap(), n("-27"));
        assert_eq!(n("2").pow(&n("-2"), &mc).unwrap(), n("0.25"));
        assert_eq!(n("1.1").pow(&n("2"), &mc).unwrap(), n("1.21"));
        assert_eq!(n("0").pow(&n("0"), &mc).unwrap(), n("1"));
        assert_eq!(
            n("0").pow(&n("-1"), &mc),
            Err(NumberError::DivisionByZero)
        );
    }

    #[test]
    fn test_negative_base_fractional_exponent() {
        let mc = MathContext::default();
        assert!(matches!(
            n("-8").pow(&n("0.5"), &mc),
            Err(NumberError::Domain { .. })
        ));
    }

    #[test]
    fn test_integer_conversion() {
        assert_eq!(n("1.2e3").to_i64(), Some(1200));
        assert_eq!(n("12.5").to_i64(), None);
        assert!(n("4.000").is_integer());
    }

    #[test]
    fn test_locale_formatting() {
        assert_eq!(n("1234567.25").format_with(&Locale::EUROPEAN), "1.234.567,25");
        assert_eq!(n("-1234").format_with(&Locale::EUROPEAN), "-1.234");
        assert_eq!(n("123").format_with(&Locale::EUROPEAN), "123");
        assert_eq!(n("1234.5").format_with(&Locale::POSIX), "1234.5");
    }

    #[test]
    fn test_abs_signum_neg() {
        assert_eq!(n("-2.5").abs(), n("2.5"));
        assert_eq!(n("-2.5").signum(), n("-1"));
        assert_eq!(Number::zero().signum(), Number::zero());
        assert_eq!(-n("4"), n("-4"));
    }
}
