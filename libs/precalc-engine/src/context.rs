//! Per-evaluation settings threaded unchanged through every operation

use precalc_number::{AngleMode, Locale, MathContext, RoundingMode};
use serde::{Deserialize, Serialize};

/// Precision/rounding policy, angle unit and display locale for one evaluation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvalContext {
    pub math: MathContext,
    pub angle_mode: AngleMode,
    pub locale: Locale,
}

impl EvalContext {
    pub fn new(math: MathContext, angle_mode: AngleMode, locale: Locale) -> Self {
        Self {
            math,
            angle_mode,
            locale,
        }
    }

    pub fn with_precision(mut self, precision: u32) -> Self {
        self.math = MathContext::new(precision, self.math.rounding);
        self
    }

    pub fn with_rounding(mut self, rounding: RoundingMode) -> Self {
        self.math = MathContext::new(self.math.precision, rounding);
        self
    }

    pub fn with_angle_mode(mut self, angle_mode: AngleMode) -> Self {
        self.angle_mode = angle_mode;
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Degrees, default precision
    pub fn degrees() -> Self {
        Self::default().with_angle_mode(AngleMode::Degrees)
    }
}
