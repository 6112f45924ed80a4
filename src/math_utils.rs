// src/math_utils.rs
//! Standard normal distribution helpers shared by every pricing formula.

use statrs::function::erf;
use std::f64::consts::{PI, SQRT_2};

/// Standard normal cumulative distribution function
///
/// # Formula
/// ```text
/// Φ(x) = ½ * (1 + erf(x/√2))
/// ```
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * (1.0 + erf::erf(x / SQRT_2))
}

/// Standard normal probability density function
///
/// # Formula
/// ```text
/// φ(x) = (1/√(2π)) * exp(-x²/2)
/// ```
pub fn norm_pdf(x: f64) -> f64 {
    (1.0 / (2.0 * PI).sqrt()) * (-0.5 * x * x).exp()
}

pub struct Timer {
    start_time: std::time::Instant,
}

impl Timer {
    pub fn new() -> Timer {
        Timer {
            start_time: std::time::Instant::now(),
        }
    }

    pub fn start(&mut self) {
        self.start_time = std::time::Instant::now();
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64() * 1000.0
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_norm_cdf_reference_points() {
        assert!((norm_cdf(0.0) - 0.5).abs() < 1e-15);
        // statrs 0.15 erf is accurate to roughly 1e-11
        assert!((norm_cdf(1.0) - 0.841_344_746_068_543).abs() < 1e-10);
        assert!((norm_cdf(-1.959_963_984_540_054) - 0.025).abs() < 1e-10);
    }

    #[test]
    fn test_norm_cdf_symmetry_and_monotonicity() {
        let mut previous = 0.0;
        for i in -60..=60 {
            let x = i as f64 * 0.1;
            let c = norm_cdf(x);
            assert!((c + norm_cdf(-x) - 1.0).abs() < 1e-14, "symmetry broken at {}", x);
            assert!(c >= previous, "cdf decreased at {}", x);
            previous = c;
        }
    }

    #[test]
    fn test_norm_pdf_shape() {
        let peak = norm_pdf(0.0);
        assert!((peak - 0.398_942_280_401_432_7).abs() < 1e-15);
        for &x in &[0.3, 1.0, 2.5, 7.0] {
            assert_eq!(norm_pdf(x), norm_pdf(-x));
            assert!(norm_pdf(x) < peak);
        }
    }
}
