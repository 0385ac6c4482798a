//! precalc-engine - Expression pipeline for the precalc calculator
//!
//! Turns formula text into a value in four stages:
//!
//! 1. **Tokenizer**: text → tokens, honouring the locale decimal separator
//! 2. **Parser**: infix tokens → postfix (shunting-yard)
//! 3. **Substitution**: constants and bound variables in the postfix sequence → numbers
//! 4. **Evaluator**: postfix tokens → [`Value`] (RPN stack machine)
//!
//! Every operator and function lives in a [`Registry`]; the built-in catalog
//! is shared read-only across threads through [`Registry::builtin`].
//!
//! # Example
//!
//! ```rust
//! use precalc_engine::{Calculator, EvalContext};
//! use precalc_number::AngleMode;
//!
//! let calc = Calculator::new(EvalContext::default().with_angle_mode(AngleMode::Degrees));
//!
//! assert_eq!(calc.calculate("2^3^2").unwrap().to_string(), "512");
//! assert_eq!(calc.calculate("nCr(5;2) + 3!").unwrap().to_string(), "16");
//! assert!(calc.calculate("radius * 2").is_err()); // unbound variable
//! ```
//!
//! # Operators
//!
//! | Symbol | Meaning | Precedence | Associativity |
//! |--------|---------|-----------|---------------|
//! | `+` `-` | add, subtract | 1 | left |
//! | `*` `/` `%` | multiply, divide, remainder | 2 | left |
//! | `-x` | negate | 3 | right |
//! | `^` | power | 4 | right |
//! | `x!` | factorial | 5 | - |
//!
//! # Functions
//!
//! | Function | Signature | Description |
//! |----------|-----------|-------------|
//! | `sqrt` `cbrt` | `sqrt(x)` | Square and cube root |
//! | `rootn` | `rootn(x;n)` | n-th root |
//! | `ln` `log2` `log10` | `ln(x)` | Logarithms |
//! | `logbase` | `logbase(x;base)` | Logarithm in any base |
//! | `exp` | `exp(x)` | e^x |
//! | `sin` `cos` `tan` `cot` | `sin(x)` | Trigonometry, in the context angle unit |
//! | `asin` `acos` `atan` `acot` | `asin(x)` | Inverse trigonometry |
//! | `sinh` ... `acoth` | `sinh(x)` | Hyperbolic and inverse hyperbolic |
//! | `atan2` | `atan2(y;x)` | Quadrant-aware angle |
//! | `abs` `sgn` | `abs(x)` | Absolute value, sign |
//! | `nPr` `nCr` | `nPr(n;r)` | Permutations, combinations |
//! | `gcd` `lcm` | `gcd(a;b)` | Greatest common divisor, least common multiple |
//! | `Rec` | `Rec(r;θ)` | Polar → cartesian coordinate |
//! | `Pol` | `Pol(x;y)` | Cartesian → polar coordinate |
//! | `RandInt` | `RandInt(lo;hi)` | Uniform random integer in `[lo, hi]` |
//!
//! Constants: `pi` (or `π`) and `e`.

pub mod builtin_functions;
pub mod calculator;
pub mod config;
pub mod context;
pub mod error;
pub mod evaluator;
pub mod parser;
pub mod registry;
pub mod substitution;
pub mod token;
pub mod tokenizer;
pub mod value;

// Re-exports for convenience
pub use calculator::Calculator;
pub use config::CalcConfig;
pub use context::EvalContext;
pub use error::{CalcError, Result};
pub use evaluator::{evaluate, Evaluator};
pub use parser::{parse_to_postfix, Parser};
pub use registry::{
    Associativity, Fixity, OperandKind, Operation, Registry, RegistryEntry,
};
pub use substitution::substitute;
pub use token::{Token, TokenKind};
pub use tokenizer::Tokenizer;
pub use value::{CoordinateKind, Value};
