//! Precision, rounding, angle unit and locale settings consumed by numeric operations

use num_bigint::{BigInt, Sign};
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Default number of significant digits (decimal128)
pub const DEFAULT_PRECISION: u32 = 34;

/// How a result is rounded once it exceeds the context precision
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Round to nearest, ties to the even neighbour (banker's rounding)
    #[default]
    HalfEven,
    /// Round to nearest, ties away from zero
    HalfUp,
    /// Round to nearest, ties toward zero
    HalfDown,
    /// Away from zero
    Up,
    /// Toward zero (truncate)
    Down,
    /// Toward positive infinity
    Ceiling,
    /// Toward negative infinity
    Floor,
}

impl RoundingMode {
    /// Decide whether a truncated quotient must be bumped one unit away from zero.
    ///
    /// `remainder` is the discarded tail and `divisor` the unit it was taken from,
    /// so `remainder / divisor` lies in `(-1, 1)`.
    pub(crate) fn increments(
        self,
        quotient: &BigInt,
        remainder: &BigInt,
        divisor: &BigInt,
        negative: bool,
    ) -> bool {
        if remainder.is_zero() {
            return false;
        }

        let half = (remainder.magnitude() * 2u32).cmp(divisor.magnitude());
        match self {
            RoundingMode::Up => true,
            RoundingMode::Down => false,
            RoundingMode::Ceiling => !negative,
            RoundingMode::Floor => negative,
            RoundingMode::HalfUp => half != Ordering::Less,
            RoundingMode::HalfDown => half == Ordering::Greater,
            RoundingMode::HalfEven => {
                let odd = !(quotient.magnitude() % 2u32).is_zero();
                half == Ordering::Greater || (half == Ordering::Equal && odd)
            },
        }
    }
}

/// Precision and rounding policy applied to every inexact result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MathContext {
    /// Significant decimal digits kept in results (at least 1)
    pub precision: u32,
    #[serde(default)]
    pub rounding: RoundingMode,
}

impl MathContext {
    pub fn new(precision: u32, rounding: RoundingMode) -> Self {
        Self {
            precision: precision.max(1),
            rounding,
        }
    }

    /// Same rounding, `extra` more digits; used for intermediate steps
    pub fn widened(&self, extra: u32) -> Self {
        Self::new(self.precision.saturating_add(extra), self.rounding)
    }
}

impl Default for MathContext {
    fn default() -> Self {
        Self::new(DEFAULT_PRECISION, RoundingMode::default())
    }
}

/// Unit for trigonometric inputs and inverse-trigonometric outputs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AngleMode {
    #[default]
    Radians,
    Degrees,
}

/// Separators used when rendering numbers for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locale {
    pub decimal_separator: char,
    #[serde(default)]
    pub grouping_separator: Option<char>,
}

impl Locale {
    /// `1234.5`
    pub const POSIX: Locale = Locale {
        decimal_separator: '.',
        grouping_separator: None,
    };

    /// `1.234,5`
    pub const EUROPEAN: Locale = Locale {
        decimal_separator: ',',
        grouping_separator: Some('.'),
    };

    pub fn new(decimal_separator: char, grouping_separator: Option<char>) -> Self {
        Self {
            decimal_separator,
            grouping_separator,
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::POSIX
    }
}

pub(crate) fn is_negative(value: &BigInt) -> bool {
    value.sign() == Sign::Minus
}
