// src/models/market.rs
use crate::error::{validation::*, PricingResult};
use serde::{Deserialize, Serialize};

/// Flat market snapshot for the Black-Scholes-Merton model.
///
/// Cheap to build and `Copy`: the implied volatility solver creates a fresh
/// one for every trial volatility.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarketState {
    spot: f64,           // S
    rate: f64,           // r, continuously compounded
    volatility: f64,     // σ
    dividend_yield: f64, // q, continuous
}

impl MarketState {
    pub fn new(spot: f64, rate: f64, volatility: f64, dividend_yield: f64) -> Self {
        MarketState {
            spot,
            rate,
            volatility,
            dividend_yield,
        }
    }

    /// Market without dividends (q = 0)
    pub fn without_dividends(spot: f64, rate: f64, volatility: f64) -> Self {
        Self::new(spot, rate, volatility, 0.0)
    }

    pub fn try_new(
        spot: f64,
        rate: f64,
        volatility: f64,
        dividend_yield: f64,
    ) -> PricingResult<Self> {
        let state = Self::new(spot, rate, volatility, dividend_yield);
        state.validate()?;
        Ok(state)
    }

    /// Validate market parameters
    ///
    /// σ = 0 is rejected: every formula divides by σ√T.
    pub fn validate(&self) -> PricingResult<()> {
        validate_positive("spot", self.spot)?;
        validate_finite("spot", self.spot)?;
        validate_finite("rate", self.rate)?;
        validate_positive("volatility", self.volatility)?;
        validate_finite("volatility", self.volatility)?;
        validate_non_negative("dividend_yield", self.dividend_yield)?;
        validate_finite("dividend_yield", self.dividend_yield)?;
        Ok(())
    }

    pub fn spot(&self) -> f64 {
        self.spot
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    pub fn dividend_yield(&self) -> f64 {
        self.dividend_yield
    }

    pub fn with_spot(self, spot: f64) -> Self {
        MarketState { spot, ..self }
    }

    pub fn with_rate(self, rate: f64) -> Self {
        MarketState { rate, ..self }
    }

    pub fn with_volatility(self, volatility: f64) -> Self {
        MarketState { volatility, ..self }
    }

    pub fn with_dividend_yield(self, dividend_yield: f64) -> Self {
        MarketState {
            dividend_yield,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_and_bumps() {
        let state = MarketState::new(100.0, 0.05, 0.2, 0.01);
        assert_eq!(state.spot(), 100.0);
        assert_eq!(state.rate(), 0.05);
        assert_eq!(state.volatility(), 0.2);
        assert_eq!(state.dividend_yield(), 0.01);

        let bumped = state.with_volatility(0.3).with_spot(101.0);
        assert_eq!(bumped.volatility(), 0.3);
        assert_eq!(bumped.spot(), 101.0);
        // Receiver unchanged
        assert_eq!(state.volatility(), 0.2);
        assert_eq!(MarketState::without_dividends(100.0, 0.05, 0.2).dividend_yield(), 0.0);
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(MarketState::try_new(100.0, 0.05, 0.2, 0.0).is_ok());
        assert!(MarketState::try_new(100.0, -0.01, 0.2, 0.0).is_ok());
        assert!(MarketState::try_new(-100.0, 0.05, 0.2, 0.0).is_err());
        assert!(MarketState::try_new(100.0, 0.05, 0.0, 0.0).is_err());
        assert!(MarketState::try_new(100.0, 0.05, 0.2, -0.02).is_err());
        assert!(MarketState::try_new(100.0, f64::NAN, 0.2, 0.0).is_err());
    }
}
