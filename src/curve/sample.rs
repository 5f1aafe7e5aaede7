use crate::error::{RenderError, Result};
use crate::math::Complex;

use super::Curve;

/// A parametric curve evaluated over a uniform parameter grid.
///
/// Holds the strictly increasing parameter values and the matching
/// complex positions. Created fresh per plot call, never persisted.
#[derive(Debug, Clone)]
pub struct SampledCurve {
    t: Vec<f64>,
    z: Vec<Complex>,
}

impl SampledCurve {
    /// Returns the parameter grid.
    #[must_use]
    pub fn t(&self) -> &[f64] {
        &self.t
    }

    /// Returns the evaluated positions.
    #[must_use]
    pub fn z(&self) -> &[Complex] {
        &self.z
    }

    /// Returns the number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.t.len()
    }

    /// Always false: a sampled curve holds at least two samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    /// Returns the smallest sampled parameter.
    #[must_use]
    pub fn t_min(&self) -> f64 {
        self.t[0]
    }

    /// Returns the largest sampled parameter.
    #[must_use]
    pub fn t_max(&self) -> f64 {
        self.t[self.t.len() - 1]
    }

    /// Returns the mean of the parameter grid (the midpoint of the
    /// sampled range, for a uniform grid).
    #[must_use]
    pub fn mean_t(&self) -> f64 {
        self.t.iter().sum::<f64>() / self.t.len() as f64
    }
}

/// Samples `curve` at `num_samples` evenly spaced parameters over the
/// closed interval `[a, b]`, both endpoints included (the last sample
/// is exactly `b`).
///
/// # Errors
///
/// Returns an error if `num_samples < 2`, if the range is empty or
/// inverted, or if the curve fails to evaluate at any sampled
/// parameter (no clamping, the failure propagates).
pub fn sample<C>(curve: &C, a: f64, b: f64, num_samples: usize) -> Result<SampledCurve>
where
    C: Curve + ?Sized,
{
    if num_samples < 2 {
        return Err(RenderError::InvalidInput(format!(
            "num_samples must be at least 2, got {num_samples}"
        ))
        .into());
    }
    if !(a < b) {
        return Err(
            RenderError::InvalidInput(format!("sampling range [{a}, {b}] is empty")).into(),
        );
    }

    let span = b - a;
    let denom = (num_samples - 1) as f64;
    let t: Vec<f64> = (0..num_samples)
        .map(|i| if i == num_samples - 1 { b } else { a + span * i as f64 / denom })
        .collect();
    let z = t
        .iter()
        .map(|&ti| curve.evaluate(ti))
        .collect::<Result<Vec<_>>>()?;

    Ok(SampledCurve { t, z })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::EvaluationError;
    use approx::assert_relative_eq;

    fn line(t: f64) -> Result<Complex> {
        Ok(Complex::new(t, 2.0 * t))
    }

    #[test]
    fn grid_includes_both_endpoints() {
        let s = sample(&line, 0.0, 1.0, 5).unwrap();
        assert_eq!(s.len(), 5);
        assert_relative_eq!(s.t_min(), 0.0);
        assert_relative_eq!(s.t_max(), 1.0);
        assert_relative_eq!(s.t()[2], 0.5);
    }

    #[test]
    fn last_sample_is_exactly_b() {
        // 0.1 * 3 accumulates rounding error; the endpoint must not.
        let s = sample(&line, 0.0, 0.3, 4).unwrap();
        assert!((s.t_max() - 0.3).abs() == 0.0);
    }

    #[test]
    fn positions_match_curve() {
        let s = sample(&line, -1.0, 1.0, 3).unwrap();
        assert_relative_eq!(s.z()[0].re, -1.0);
        assert_relative_eq!(s.z()[0].im, -2.0);
        assert_relative_eq!(s.z()[2].re, 1.0);
    }

    #[test]
    fn grid_is_strictly_increasing() {
        let s = sample(&line, -3.0, 7.0, 50).unwrap();
        assert!(s.t().windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn mean_is_range_midpoint() {
        let s = sample(&line, 0.0, 2.0, 101).unwrap();
        assert_relative_eq!(s.mean_t(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn too_few_samples_rejected() {
        assert!(sample(&line, 0.0, 1.0, 0).is_err());
        assert!(sample(&line, 0.0, 1.0, 1).is_err());
    }

    #[test]
    fn empty_or_inverted_range_rejected() {
        assert!(sample(&line, 1.0, 1.0, 10).is_err());
        assert!(sample(&line, 2.0, 1.0, 10).is_err());
        assert!(sample(&line, f64::NAN, 1.0, 10).is_err());
    }

    #[test]
    fn evaluation_failure_propagates() {
        let faulty = |t: f64| -> Result<Complex> {
            if t > 0.5 {
                return Err(EvaluationError::NonFinite { at: t }.into());
            }
            Ok(Complex::new(t, 0.0))
        };
        assert!(sample(&faulty, 0.0, 1.0, 10).is_err());
        assert!(sample(&faulty, 0.0, 0.5, 10).is_ok());
    }
}
