//! Parameters for edge trimming and smoothing.

use crate::error::{EdgeError, EdgeResult};

const FRACTION_RANGE: &str = "0 <= value < 0.5";

fn check_fraction(name: &'static str, value: f64) -> EdgeResult<()> {
    if value.is_finite() && (0.0..0.5).contains(&value) {
        Ok(())
    } else {
        Err(EdgeError::InvalidParameter {
            name,
            value,
            expected: FRACTION_RANGE,
        })
    }
}

/// Parameters for [`trim_edges`](crate::trim_edges).
#[derive(Debug, Clone)]
pub struct TrimParams {
    /// Fraction of the X/Y extent cut from each side of the bounds.
    /// Default: `0.02`
    pub trim_fraction: f64,
}

impl Default for TrimParams {
    fn default() -> Self {
        Self {
            trim_fraction: 0.02,
        }
    }
}

impl TrimParams {
    /// Create params trimming the given fraction from each side.
    #[must_use]
    pub fn with_fraction(trim_fraction: f64) -> Self {
        Self { trim_fraction }
    }

    /// Check that the parameters are usable.
    ///
    /// # Errors
    ///
    /// Returns [`EdgeError::InvalidParameter`] if `trim_fraction` is not in
    /// `[0, 0.5)`.
    pub fn validate(&self) -> EdgeResult<()> {
        check_fraction("trim_fraction", self.trim_fraction)
    }
}

/// Parameters for [`smooth_edges`](crate::smooth_edges).
#[derive(Debug, Clone)]
pub struct SmoothParams {
    /// Width of the edge zone as a fraction of the X/Y extent.
    /// Default: `0.05`
    pub edge_distance_fraction: f64,

    /// How far edge elevations move toward the interior average
    /// (0 = unchanged, 1 = full blend at the outer boundary).
    /// Default: `0.5`
    pub smooth_strength: f64,

    /// Edge elevations below `outlier_low × min interior` are replaced.
    /// Default: `0.8`
    pub outlier_low: f64,

    /// Edge elevations above `outlier_high × max interior` are replaced.
    /// Default: `1.2`
    pub outlier_high: f64,
}

impl Default for SmoothParams {
    fn default() -> Self {
        Self {
            edge_distance_fraction: 0.05,
            smooth_strength: 0.5,
            outlier_low: 0.8,
            outlier_high: 1.2,
        }
    }
}

impl SmoothParams {
    /// Set the edge zone width.
    #[must_use]
    pub const fn with_edge_distance(mut self, fraction: f64) -> Self {
        self.edge_distance_fraction = fraction;
        self
    }

    /// Set the blend strength.
    #[must_use]
    pub const fn with_strength(mut self, strength: f64) -> Self {
        self.smooth_strength = strength;
        self
    }

    /// Set the outlier factors relative to the interior min and max.
    #[must_use]
    pub const fn with_outlier_factors(mut self, low: f64, high: f64) -> Self {
        self.outlier_low = low;
        self.outlier_high = high;
        self
    }

    /// Check that the parameters are usable.
    ///
    /// # Errors
    ///
    /// Returns [`EdgeError::InvalidParameter`] naming the first field out
    /// of range.
    pub fn validate(&self) -> EdgeResult<()> {
        check_fraction("edge_distance_fraction", self.edge_distance_fraction)?;

        if !(self.smooth_strength.is_finite() && (0.0..=1.0).contains(&self.smooth_strength)) {
            return Err(EdgeError::InvalidParameter {
                name: "smooth_strength",
                value: self.smooth_strength,
                expected: "0 <= value <= 1",
            });
        }
        if !(self.outlier_low.is_finite() && self.outlier_low >= 0.0) {
            return Err(EdgeError::InvalidParameter {
                name: "outlier_low",
                value: self.outlier_low,
                expected: "finite and non-negative",
            });
        }
        if !(self.outlier_high.is_finite() && self.outlier_high >= self.outlier_low) {
            return Err(EdgeError::InvalidParameter {
                name: "outlier_high",
                value: self.outlier_high,
                expected: "finite and at least outlier_low",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let trim = TrimParams::default();
        assert!((trim.trim_fraction - 0.02).abs() < 1e-12);
        assert!(trim.validate().is_ok());

        let smooth = SmoothParams::default();
        assert!((smooth.edge_distance_fraction - 0.05).abs() < 1e-12);
        assert!((smooth.smooth_strength - 0.5).abs() < 1e-12);
        assert!((smooth.outlier_low - 0.8).abs() < 1e-12);
        assert!((smooth.outlier_high - 1.2).abs() < 1e-12);
        assert!(smooth.validate().is_ok());
    }

    #[test]
    fn test_fraction_domain() {
        assert!(TrimParams::with_fraction(0.0).validate().is_ok());
        assert!(TrimParams::with_fraction(0.49).validate().is_ok());
        assert!(TrimParams::with_fraction(0.5).validate().is_err());
        assert!(TrimParams::with_fraction(-0.01).validate().is_err());
        assert!(TrimParams::with_fraction(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_strength_domain() {
        let params = SmoothParams::default().with_strength(1.0);
        assert!(params.validate().is_ok());

        let err = SmoothParams::default()
            .with_strength(1.5)
            .validate()
            .unwrap_err();
        assert!(matches!(
            err,
            EdgeError::InvalidParameter {
                name: "smooth_strength",
                ..
            }
        ));
    }

    #[test]
    fn test_edge_distance_domain() {
        let err = SmoothParams::default()
            .with_edge_distance(0.5)
            .validate()
            .unwrap_err();
        assert!(matches!(
            err,
            EdgeError::InvalidParameter {
                name: "edge_distance_fraction",
                ..
            }
        ));
    }

    #[test]
    fn test_outlier_factors() {
        assert!(
            SmoothParams::default()
                .with_outlier_factors(0.5, 2.0)
                .validate()
                .is_ok()
        );
        assert!(
            SmoothParams::default()
                .with_outlier_factors(1.2, 0.8)
                .validate()
                .is_err()
        );
    }
}
