// src/analytics/greeks.rs
use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct GreeksConfig: u32 {
        const NONE  = 0;
        const DELTA = 1 << 0;
        const VEGA  = 1 << 1;
        const RHO   = 1 << 2;
        const GAMMA = 1 << 3;
        const THETA = 1 << 4;
        const ALL   = Self::DELTA.bits()
            | Self::VEGA.bits()
            | Self::RHO.bits()
            | Self::GAMMA.bits()
            | Self::THETA.bits();
    }
}

/// Price and sensitivities of one option under one market snapshot.
///
/// Greeks that were not requested are `None`. Theta is per year, vega and
/// rho are per unit change of σ and r.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Greeks {
    pub price: f64,
    pub delta: Option<f64>,
    pub gamma: Option<f64>,
    pub vega: Option<f64>,
    pub theta: Option<f64>,
    pub rho: Option<f64>,
}

impl Greeks {
    /// Theta per calendar day (365-day year)
    pub fn theta_per_day(&self) -> Option<f64> {
        self.theta.map(|theta| theta / 365.0)
    }

    /// Vega per one volatility point (σ + 0.01)
    pub fn vega_per_point(&self) -> Option<f64> {
        self.vega.map(|vega| vega / 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_contains_every_flag() {
        for flag in [
            GreeksConfig::DELTA,
            GreeksConfig::GAMMA,
            GreeksConfig::VEGA,
            GreeksConfig::THETA,
            GreeksConfig::RHO,
        ] {
            assert!(GreeksConfig::ALL.contains(flag));
            assert!(!GreeksConfig::NONE.contains(flag));
        }
    }

    #[test]
    fn test_scaled_views() {
        let greeks = Greeks {
            price: 10.0,
            delta: None,
            gamma: None,
            vega: Some(37.5),
            theta: Some(-7.3),
            rho: None,
        };
        assert!((greeks.theta_per_day().unwrap() + 0.02).abs() < 1e-12);
        assert!((greeks.vega_per_point().unwrap() - 0.375).abs() < 1e-12);

        let empty = Greeks { vega: None, theta: None, ..greeks };
        assert!(empty.theta_per_day().is_none());
        assert!(empty.vega_per_point().is_none());
    }
}
