// src/models/option.rs
//! European option contract terms.
//!
//! The contract is a plain value: strike, time to maturity in years and the
//! exercise kind. It carries no pricing behaviour; everything that depends on
//! market data lives in [`crate::analytics::bs_analytic`].

use crate::error::{validation::*, PricingError, PricingResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Day-count basis for ACT/365 Fixed.
const DAYS_PER_YEAR: f64 = 365.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionKind {
    /// Right to buy the underlying at the strike
    Call,
    /// Right to sell the underlying at the strike
    Put,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EuropeanOption {
    pub strike: f64,   // K
    pub maturity: f64, // T in years
    pub kind: OptionKind,
}

impl EuropeanOption {
    /// Build an option without checking its terms.
    ///
    /// Non-positive strike or maturity are accepted here and show up as
    /// NaN/∞ in the pricing formulas. Use [`EuropeanOption::try_new`] to
    /// reject them up front.
    pub fn new(strike: f64, maturity: f64, kind: OptionKind) -> Self {
        EuropeanOption {
            strike,
            maturity,
            kind,
        }
    }

    pub fn call(strike: f64, maturity: f64) -> Self {
        Self::new(strike, maturity, OptionKind::Call)
    }

    pub fn put(strike: f64, maturity: f64) -> Self {
        Self::new(strike, maturity, OptionKind::Put)
    }

    pub fn try_new(strike: f64, maturity: f64, kind: OptionKind) -> PricingResult<Self> {
        let option = Self::new(strike, maturity, kind);
        option.validate()?;
        Ok(option)
    }

    /// Build an option whose maturity is the ACT/365 Fixed year fraction
    /// between `valuation` and `expiry`.
    pub fn from_dates(
        strike: f64,
        valuation: NaiveDate,
        expiry: NaiveDate,
        kind: OptionKind,
    ) -> PricingResult<Self> {
        let days = (expiry - valuation).num_days();
        if days <= 0 {
            return Err(PricingError::InvalidDates { valuation, expiry });
        }
        Self::try_new(strike, days as f64 / DAYS_PER_YEAR, kind)
    }

    /// Validate contract terms
    pub fn validate(&self) -> PricingResult<()> {
        validate_positive("strike", self.strike)?;
        validate_finite("strike", self.strike)?;
        validate_positive("maturity", self.maturity)?;
        validate_finite("maturity", self.maturity)?;
        Ok(())
    }

    pub fn is_call(&self) -> bool {
        self.kind == OptionKind::Call
    }

    /// Payoff if exercised immediately at `spot`
    pub fn intrinsic_value(&self, spot: f64) -> f64 {
        match self.kind {
            OptionKind::Call => (spot - self.strike).max(0.0),
            OptionKind::Put => (self.strike - spot).max(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_kind() {
        assert!(EuropeanOption::call(100.0, 1.0).is_call());
        assert!(!EuropeanOption::put(100.0, 1.0).is_call());
        assert_eq!(
            EuropeanOption::new(90.0, 0.5, OptionKind::Put),
            EuropeanOption::put(90.0, 0.5)
        );
    }

    #[test]
    fn test_invalid_terms_rejected() {
        assert!(EuropeanOption::try_new(0.0, 1.0, OptionKind::Call).is_err());
        assert!(EuropeanOption::try_new(-5.0, 1.0, OptionKind::Call).is_err());
        assert!(EuropeanOption::try_new(100.0, 0.0, OptionKind::Put).is_err());
        assert!(EuropeanOption::try_new(100.0, f64::INFINITY, OptionKind::Put).is_err());
        assert!(EuropeanOption::try_new(100.0, 0.25, OptionKind::Put).is_ok());
    }

    #[test]
    fn test_unchecked_constructor_keeps_bad_terms() {
        let option = EuropeanOption::call(100.0, -1.0);
        assert_eq!(option.maturity, -1.0);
        assert!(option.validate().is_err());
    }

    #[test]
    fn test_from_dates_act_365() {
        let valuation = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let expiry = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
        let option = EuropeanOption::from_dates(100.0, valuation, expiry, OptionKind::Call)
            .expect("expiry after valuation");
        // 2024 is a leap year: 182 days
        assert!((option.maturity - 182.0 / 365.0).abs() < 1e-15);

        let err = EuropeanOption::from_dates(100.0, expiry, valuation, OptionKind::Call);
        assert!(matches!(err, Err(PricingError::InvalidDates { .. })));
        let same_day = EuropeanOption::from_dates(100.0, valuation, valuation, OptionKind::Put);
        assert!(same_day.is_err());
    }

    #[test]
    fn test_intrinsic_value() {
        let call = EuropeanOption::call(100.0, 1.0);
        let put = EuropeanOption::put(100.0, 1.0);
        assert_eq!(call.intrinsic_value(110.0), 10.0);
        assert_eq!(call.intrinsic_value(90.0), 0.0);
        assert_eq!(put.intrinsic_value(90.0), 10.0);
        assert_eq!(put.intrinsic_value(110.0), 0.0);
    }
}
