//! Integer-only operations: factorial, permutations, combinations, gcd, lcm, random integers

use crate::context::MathContext;
use crate::decimal::Number;
use crate::error::{NumberError, Result};
use num_bigint::{BigInt, RandBigInt};
use num_traits::{One, Signed, Zero};

/// Largest accepted factorial / permutation operand
pub const MAX_FACTORIAL: u64 = 10_000;

fn integer_operand(operation: &'static str, value: &Number) -> Result<BigInt> {
    value
        .to_integer()
        .ok_or_else(|| NumberError::not_an_integer(operation, value))
}

fn bounded_count(operation: &'static str, value: &Number) -> Result<u64> {
    let integer = integer_operand(operation, value)?;
    if integer.is_negative() {
        return Err(NumberError::domain(
            operation,
            format!("operand {} must not be negative", value),
        ));
    }
    u64::try_from(&integer)
        .ok()
        .filter(|n| *n <= MAX_FACTORIAL)
        .ok_or_else(|| NumberError::too_large(operation, MAX_FACTORIAL))
}

/// Product of `low..=high`, 1 for an empty range
fn range_product(low: u64, high: u64) -> BigInt {
    (low..=high).fold(BigInt::one(), |acc, k| acc * k)
}

impl Number {
    /// `n!` for integral `0 <= n <= MAX_FACTORIAL`
    pub fn factorial(&self, mc: &MathContext) -> Result<Number> {
        let n = bounded_count("factorial", self)?;
        Number::from(range_product(2, n)).round(mc)
    }

    /// `nPr = n! / (n - r)!`
    pub fn permutation(&self, r: &Number, mc: &MathContext) -> Result<Number> {
        let (n, r) = Self::choose_operands("permutation", self, r)?;
        Number::from(range_product(n - r + 1, n)).round(mc)
    }

    /// `nCr = n! / (r! (n - r)!)`
    pub fn combination(&self, r: &Number, mc: &MathContext) -> Result<Number> {
        let (n, r) = Self::choose_operands("combination", self, r)?;
        let r = r.min(n - r);
        let numerator = range_product(n - r + 1, n);
        let denominator = range_product(2, r);
        Number::from(numerator / denominator).round(mc)
    }

    fn choose_operands(operation: &'static str, n: &Number, r: &Number) -> Result<(u64, u64)> {
        let n = bounded_count(operation, n)?;
        let r = bounded_count(operation, r)?;
        if r > n {
            return Err(NumberError::domain(
                operation,
                format!("r ({}) must not exceed n ({})", r, n),
            ));
        }
        Ok((n, r))
    }

    /// Greatest common divisor, always non-negative
    pub fn gcd(&self, other: &Number) -> Result<Number> {
        let a = integer_operand("gcd", self)?;
        let b = integer_operand("gcd", other)?;
        Ok(Number::from(euclid(a, b)))
    }

    /// Least common multiple, always non-negative; zero when either operand is zero
    pub fn lcm(&self, other: &Number) -> Result<Number> {
        let a = integer_operand("lcm", self)?.abs();
        let b = integer_operand("lcm", other)?.abs();
        if a.is_zero() || b.is_zero() {
            return Ok(Number::zero());
        }
        let gcd = euclid(a.clone(), b.clone());
        Ok(Number::from(a / gcd * b))
    }

    /// Uniformly distributed integer in `[low, high]`
    pub fn random_int(low: &Number, high: &Number) -> Result<Number> {
        let low = integer_operand("RandInt", low)?;
        let high = integer_operand("RandInt", high)?;
        if low > high {
            return Err(NumberError::domain(
                "RandInt",
                format!("lower bound {} exceeds upper bound {}", low, high),
            ));
        }
        let mut rng = rand::thread_rng();
        let value = rng.gen_bigint_range(&low, &(high + 1));
        Ok(Number::from(value))
    }
}

fn euclid(a: BigInt, b: BigInt) -> BigInt {
    let mut a = a.abs();
    let mut b = b.abs();
    while !b.is_zero() {
        let r = &a % &b;
        a = b;
        b = r;
    }
    a
}
