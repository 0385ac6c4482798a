//! Calculator configuration
//!
//! Layered with figment, later layers win:
//! 1. built-in defaults
//! 2. a YAML, TOML or JSON file (chosen by extension)
//! 3. `PRECALC_*` environment variables, e.g. `PRECALC_PRECISION=50`

use crate::context::EvalContext;
use crate::error::{CalcError, Result};
use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use precalc_number::{AngleMode, Locale, MathContext, RoundingMode, DEFAULT_PRECISION};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

pub const ENV_PREFIX: &str = "PRECALC_";

/// Upper bound on significant digits
pub const MAX_PRECISION: u32 = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalcConfig {
    /// Significant digits in results
    #[serde(default = "default_precision")]
    pub precision: u32,

    #[serde(default)]
    pub rounding: RoundingMode,

    #[serde(default)]
    pub angle_mode: AngleMode,

    #[serde(default = "default_decimal_separator")]
    pub decimal_separator: char,

    /// Thousands separator for display, none by default
    #[serde(default)]
    pub grouping_separator: Option<char>,
}

fn default_precision() -> u32 {
    DEFAULT_PRECISION
}

fn default_decimal_separator() -> char {
    '.'
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            precision: default_precision(),
            rounding: RoundingMode::default(),
            angle_mode: AngleMode::default(),
            decimal_separator: default_decimal_separator(),
            grouping_separator: None,
        }
    }
}

impl CalcConfig {
    /// Defaults overridden by the environment
    pub fn load() -> Result<Self> {
        Self::extract(Self::base())
    }

    /// Defaults, then `path`, then the environment
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let file_layer = match extension.as_deref() {
            Some("yaml" | "yml") => Figment::from(Yaml::file(path)),
            Some("toml") => Figment::from(Toml::file(path)),
            Some("json") => Figment::from(Json::file(path)),
            _ => {
                return Err(CalcError::config(format!(
                    "Unsupported config format: {}",
                    path.display()
                )))
            },
        };
        if !path.exists() {
            return Err(CalcError::config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }

        info!("Loading calculator config from {}", path.display());
        let figment = Figment::from(Serialized::defaults(CalcConfig::default()))
            .merge(file_layer)
            .merge(Env::prefixed(ENV_PREFIX));
        Self::extract(figment)
    }

    fn base() -> Figment {
        Figment::from(Serialized::defaults(CalcConfig::default())).merge(Env::prefixed(ENV_PREFIX))
    }

    fn extract(figment: Figment) -> Result<Self> {
        let config: CalcConfig = figment
            .extract()
            .map_err(|e| CalcError::config(e.to_string()))?;
        config.validate()?;
        debug!(?config, "Calculator config loaded");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_PRECISION).contains(&self.precision) {
            return Err(CalcError::config(format!(
                "precision must be between 1 and {}, got {}",
                MAX_PRECISION, self.precision
            )));
        }

        let reserved = |c: char| c.is_ascii_digit() || c.is_alphabetic() || "+-*/%^!()\";".contains(c);
        if reserved(self.decimal_separator) || self.decimal_separator.is_whitespace() {
            return Err(CalcError::config(format!(
                "'{}' cannot be used as decimal separator",
                self.decimal_separator
            )));
        }
        if let Some(group) = self.grouping_separator {
            if group == self.decimal_separator {
                return Err(CalcError::config(
                    "grouping and decimal separators must differ",
                ));
            }
            if group.is_ascii_digit() {
                return Err(CalcError::config(format!(
                    "'{}' cannot be used as grouping separator",
                    group
                )));
            }
        }
        Ok(())
    }

    pub fn locale(&self) -> Locale {
        Locale::new(self.decimal_separator, self.grouping_separator)
    }

    pub fn into_context(self) -> EvalContext {
        EvalContext::new(
            MathContext::new(self.precision, self.rounding),
            self.angle_mode,
            self.locale(),
        )
    }
}
