//! Layered configuration loading
//!
//! Every case runs inside `figment::Jail` so environment changes stay isolated.

#![allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable

use figment::Jail;
use precalc_engine::config::MAX_PRECISION;
use precalc_engine::{CalcConfig, CalcError, Calculator};
use precalc_number::{AngleMode, Locale, RoundingMode};
use std::io::Write;

#[test]
fn test_defaults_without_file_or_env() {
    Jail::expect_with(|_jail| {
        let config = CalcConfig::load().map_err(|e| e.to_string())?;
        assert_eq!(config, CalcConfig::default());
        Ok(())
    });
}

#[test]
fn test_yaml_file_then_env_override() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "calc.yaml",
            r#"
                precision: 20
                rounding: half_up
                angle_mode: degrees
                decimal_separator: ","
                grouping_separator: "."
            "#,
        )?;
        let config = CalcConfig::load_from_file("calc.yaml").map_err(|e| e.to_string())?;
        assert_eq!(config.precision, 20);
        assert_eq!(config.rounding, RoundingMode::HalfUp);
        assert_eq!(config.angle_mode, AngleMode::Degrees);
        assert_eq!(config.locale(), Locale::EUROPEAN);

        jail.set_env("PRECALC_PRECISION", 50);
        jail.set_env("PRECALC_ANGLE_MODE", "radians");
        let config = CalcConfig::load_from_file("calc.yaml").map_err(|e| e.to_string())?;
        assert_eq!(config.precision, 50);
        assert_eq!(config.angle_mode, AngleMode::Radians);
        assert_eq!(config.rounding, RoundingMode::HalfUp);
        Ok(())
    });
}

#[test]
fn test_toml_and_json_files() {
    Jail::expect_with(|jail| {
        jail.create_file("calc.toml", "precision = 12\nrounding = \"floor\"")?;
        let config = CalcConfig::load_from_file("calc.toml").map_err(|e| e.to_string())?;
        assert_eq!(config.precision, 12);
        assert_eq!(config.rounding, RoundingMode::Floor);

        jail.create_file("calc.json", r#"{ "angle_mode": "degrees" }"#)?;
        let config = CalcConfig::load_from_file("calc.json").map_err(|e| e.to_string())?;
        assert_eq!(config.angle_mode, AngleMode::Degrees);
        assert_eq!(config.precision, CalcConfig::default().precision);
        Ok(())
    });
}

#[test]
fn test_temp_file_drives_calculator() {
    Jail::expect_with(|_jail| {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .map_err(|e| e.to_string())?;
        writeln!(file, "precision = 5").map_err(|e| e.to_string())?;
        writeln!(file, "angle_mode = \"degrees\"").map_err(|e| e.to_string())?;

        let config = CalcConfig::load_from_file(file.path()).map_err(|e| e.to_string())?;
        let calc = Calculator::new(config.into_context());
        let value = calc.calculate("1/3").map_err(|e| e.to_string())?;
        assert_eq!(value.to_string(), "0.33333");
        let value = calc.calculate("sin(30)").map_err(|e| e.to_string())?;
        assert_eq!(value.to_string(), "0.5");
        Ok(())
    });
}

#[test]
fn test_invalid_values_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("PRECALC_PRECISION", MAX_PRECISION + 1);
        assert!(matches!(CalcConfig::load(), Err(CalcError::Config(_))));

        jail.set_env("PRECALC_PRECISION", "many");
        assert!(matches!(CalcConfig::load(), Err(CalcError::Config(_))));

        jail.set_env("PRECALC_PRECISION", 10);
        jail.set_env("PRECALC_DECIMAL_SEPARATOR", "x");
        assert!(matches!(CalcConfig::load(), Err(CalcError::Config(_))));
        Ok(())
    });
}

#[test]
fn test_missing_file_is_an_error() {
    Jail::expect_with(|_jail| {
        let err = CalcConfig::load_from_file("absent.yaml").unwrap_err();
        assert!(err.to_string().contains("not found"));
        Ok(())
    });
}
