//! Scale configuration for a batch run.
//!
//! The two user-supplied settings — the resolution the pages were scanned at
//! and the factor to divide pixel dimensions by — are validated once at the
//! calling boundary and frozen into a [`ScaleConfig`]. The pipeline never
//! re-reads input mid-run; every directory and every image in a batch shares
//! the same read-only config.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{name} must be a positive number, got {value}")]
    NotPositive { name: &'static str, value: f64 },
}

/// Immutable per-run scale settings.
///
/// `output_dpi` is kept as the exact ratio `source_dpi / divisor` — no
/// rounding — so downstream point-size math stays precise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleConfig {
    /// Resolution the source images were scanned at, in DPI.
    pub source_dpi: f64,
    /// Factor pixel dimensions are divided by.
    pub divisor: f64,
    /// Effective resolution of the output pages, in DPI.
    pub output_dpi: f64,
}

impl ScaleConfig {
    /// Build a config from validated user input.
    ///
    /// Both values must be positive and finite; zero, negative, NaN, and
    /// infinite inputs are rejected.
    pub fn new(source_dpi: f64, divisor: f64) -> Result<Self, ConfigError> {
        check_positive("source resolution", source_dpi)?;
        check_positive("divisor", divisor)?;
        Ok(Self {
            source_dpi,
            divisor,
            output_dpi: source_dpi / divisor,
        })
    }
}

fn check_positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_dpi_is_exact_ratio() {
        let config = ScaleConfig::new(300.0, 2.0).unwrap();
        assert_eq!(config.output_dpi, 150.0);
    }

    #[test]
    fn non_integer_divisor_keeps_precision() {
        let config = ScaleConfig::new(300.0, 1.5).unwrap();
        assert_eq!(config.output_dpi, 200.0);
    }

    #[test]
    fn zero_dpi_rejected() {
        assert!(ScaleConfig::new(0.0, 2.0).is_err());
    }

    #[test]
    fn negative_divisor_rejected() {
        assert!(ScaleConfig::new(300.0, -1.0).is_err());
    }

    #[test]
    fn nan_and_infinity_rejected() {
        assert!(ScaleConfig::new(f64::NAN, 2.0).is_err());
        assert!(ScaleConfig::new(300.0, f64::INFINITY).is_err());
    }
}
