//! precalc-number - Exact arbitrary-precision decimals for the precalc engine
//!
//! Provides the scalar value type every operator and function of the
//! expression engine works on.
//!
//! # Features
//!
//! - **Exact decimal arithmetic**: `0.1 + 0.2 == 0.3`, results rounded to a
//!   configurable number of significant digits
//! - **Rounding policy**: half-even (default), half-up, half-down, up, down, ceiling, floor
//! - **Integer functions**: factorial, permutations, combinations, gcd, lcm, random integers
//! - **Transcendental functions**: roots, logarithms, powers, trigonometric and
//!   hyperbolic families, honouring degrees or radians
//! - **Locale formatting**: decimal and grouping separators
//! - **Bounded magnitude**: results stay within `1e±`[`MAX_EXPONENT`]; powers and
//!   exponentials that would leave that range fail fast with [`NumberError::TooLarge`]
//!
//! # Example
//!
//! ```rust
//! use precalc_number::{AngleMode, MathContext, Number};
//!
//! let mc = MathContext::default();
//! let a: Number = "0.1".parse().unwrap();
//! let b: Number = "0.2".parse().unwrap();
//! assert_eq!(a.add(&b, &mc).unwrap().to_string(), "0.3");
//!
//! let third = Number::one().div(&Number::from(3), &MathContext::new(5, Default::default())).unwrap();
//! assert_eq!(third.to_string(), "0.33333");
//!
//! let half = Number::from(30).sin(AngleMode::Degrees, &mc).unwrap();
//! assert_eq!(half.round(&MathContext::new(20, Default::default())).unwrap().to_string(), "0.5");
//! ```

pub mod context;
pub mod decimal;
pub mod error;
pub mod integer;
pub mod transcendental;

// Re-exports for convenience
pub use context::{AngleMode, Locale, MathContext, RoundingMode, DEFAULT_PRECISION};
pub use decimal::{Number, MAX_EXPONENT};
pub use error::{NumberError, Result};
pub use integer::MAX_FACTORIAL;
