// src/analytics/bs_analytic.rs
//! Analytical Black-Scholes-Merton formulas for European options and Greeks
//!
//! # Mathematical Foundation
//!
//! Under the Black-Scholes-Merton model with continuous dividend yield q, the
//! underlying follows:
//! ```text
//! dS_t = (r - q) S_t dt + σ S_t dW_t
//! ```
//!
//! The risk-neutral pricing formula gives:
//! ```text
//! V(S,t) = e^(-r(T-t)) * E^Q[payoff(S_T) | S_t = S]
//! ```
//!
//! For European options, this has closed-form solutions involving
//! the cumulative normal distribution function Φ(x):
//! ```text
//! d₁ = [ln(S/K) + (r - q + σ²/2)T] / (σ√T)
//! d₂ = d₁ - σ√T
//! ```
//!
//! No input is checked here. T ≤ 0, σ ≤ 0 or K ≤ 0 produce NaN or infinite
//! results; see [`MarketState::validate`] and [`EuropeanOption::validate`].

use crate::analytics::greeks::{Greeks, GreeksConfig};
use crate::error::PricingResult;
use crate::math_utils::{norm_cdf, norm_pdf};
use crate::models::{EuropeanOption, MarketState, OptionKind};

/// Returns `(d₁, d₂)`
pub fn d1_d2(s: f64, k: f64, r: f64, q: f64, sigma: f64, t: f64) -> (f64, f64) {
    let sigma_sqrt_t = sigma * t.sqrt();
    let d1 = ((s / k).ln() + (r - q + 0.5 * sigma * sigma) * t) / sigma_sqrt_t;
    (d1, d1 - sigma_sqrt_t)
}

/// Black-Scholes-Merton European option price
///
/// # Formula
/// ```text
/// C = S*e^(-qT)*Φ(d₁) - K*e^(-rT)*Φ(d₂)
/// P = K*e^(-rT)*Φ(-d₂) - S*e^(-qT)*Φ(-d₁)
/// ```
///
/// Setting q = 0 recovers the dividend-free formula.
pub fn bs_price(kind: OptionKind, s: f64, k: f64, r: f64, q: f64, sigma: f64, t: f64) -> f64 {
    let (d1, d2) = d1_d2(s, k, r, q, sigma, t);
    let fwd_spot = s * (-q * t).exp();
    let pv_strike = k * (-r * t).exp();
    match kind {
        OptionKind::Call => fwd_spot * norm_cdf(d1) - pv_strike * norm_cdf(d2),
        OptionKind::Put => pv_strike * norm_cdf(-d2) - fwd_spot * norm_cdf(-d1),
    }
}

/// Black-Scholes-Merton Delta (∂V/∂S)
///
/// # Formula
/// ```text
/// Δ_call = e^(-qT) * Φ(d₁)
/// Δ_put  = e^(-qT) * (Φ(d₁) - 1)
/// ```
///
/// # Interpretation
/// - Hedge ratio: number of shares to hold per option sold
/// - Range: [0, e^(-qT)] for calls, [-e^(-qT), 0] for puts
pub fn bs_delta(kind: OptionKind, s: f64, k: f64, r: f64, q: f64, sigma: f64, t: f64) -> f64 {
    let (d1, _) = d1_d2(s, k, r, q, sigma, t);
    let div_discount = (-q * t).exp();
    match kind {
        OptionKind::Call => div_discount * norm_cdf(d1),
        OptionKind::Put => div_discount * (norm_cdf(d1) - 1.0),
    }
}

/// Black-Scholes-Merton Gamma (∂²V/∂S²)
///
/// # Formula
/// ```text
/// Γ = e^(-qT) * φ(d₁) / (S * σ * √T)
/// ```
///
/// # Interpretation
/// - Rate of change of Delta w.r.t. underlying price
/// - Maximum near the money, decays as the option goes in/out of the money
/// - Same for calls and puts
pub fn bs_gamma(s: f64, k: f64, r: f64, q: f64, sigma: f64, t: f64) -> f64 {
    let (d1, _) = d1_d2(s, k, r, q, sigma, t);
    (-q * t).exp() * norm_pdf(d1) / (s * sigma * t.sqrt())
}

/// Black-Scholes-Merton Vega (∂V/∂σ)
///
/// # Formula
/// ```text
/// ν = S * e^(-qT) * φ(d₁) * √T
/// ```
///
/// # Interpretation
/// - Sensitivity to volatility changes, per unit of σ (not per 1%)
/// - Never negative, same for calls and puts
pub fn bs_vega(s: f64, k: f64, r: f64, q: f64, sigma: f64, t: f64) -> f64 {
    let (d1, _) = d1_d2(s, k, r, q, sigma, t);
    s * (-q * t).exp() * norm_pdf(d1) * t.sqrt()
}

/// Black-Scholes-Merton Theta (∂V/∂t), per year
///
/// # Formula
/// ```text
/// Θ_call = -S*e^(-qT)*φ(d₁)*σ/(2√T) - r*K*e^(-rT)*Φ(d₂)  + q*S*e^(-qT)*Φ(d₁)
/// Θ_put  = -S*e^(-qT)*φ(d₁)*σ/(2√T) + r*K*e^(-rT)*Φ(-d₂) - q*S*e^(-qT)*Φ(-d₁)
/// ```
///
/// # Interpretation
/// - Time decay of option value, equal to -∂V/∂T
/// - Usually negative for long options
/// - Divide by 365 for a daily figure
pub fn bs_theta(kind: OptionKind, s: f64, k: f64, r: f64, q: f64, sigma: f64, t: f64) -> f64 {
    let (d1, d2) = d1_d2(s, k, r, q, sigma, t);
    let fwd_spot = s * (-q * t).exp();
    let pv_strike = k * (-r * t).exp();
    let decay = -fwd_spot * norm_pdf(d1) * sigma / (2.0 * t.sqrt());
    match kind {
        OptionKind::Call => decay - r * pv_strike * norm_cdf(d2) + q * fwd_spot * norm_cdf(d1),
        OptionKind::Put => decay + r * pv_strike * norm_cdf(-d2) - q * fwd_spot * norm_cdf(-d1),
    }
}

/// Black-Scholes-Merton Rho (∂V/∂r)
///
/// # Formula
/// ```text
/// ρ_call =  K * T * e^(-rT) * Φ(d₂)
/// ρ_put  = -K * T * e^(-rT) * Φ(-d₂)
/// ```
///
/// # Interpretation
/// - Positive for calls, negative for puts
/// - Units: price change per unit of rate (not per 1%)
pub fn bs_rho(kind: OptionKind, s: f64, k: f64, r: f64, q: f64, sigma: f64, t: f64) -> f64 {
    let (_, d2) = d1_d2(s, k, r, q, sigma, t);
    let pv_strike_t = k * t * (-r * t).exp();
    match kind {
        OptionKind::Call => pv_strike_t * norm_cdf(d2),
        OptionKind::Put => -pv_strike_t * norm_cdf(-d2),
    }
}

/// Closed-form pricing engine over a single [`MarketState`].
///
/// Every method is a pure function of the market snapshot and the option.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlackScholesPricer {
    state: MarketState,
}

impl BlackScholesPricer {
    pub fn new(spot: f64, rate: f64, volatility: f64, dividend_yield: f64) -> Self {
        Self::from_state(MarketState::new(spot, rate, volatility, dividend_yield))
    }

    /// Pricer with validated market parameters
    pub fn try_new(
        spot: f64,
        rate: f64,
        volatility: f64,
        dividend_yield: f64,
    ) -> PricingResult<Self> {
        MarketState::try_new(spot, rate, volatility, dividend_yield).map(Self::from_state)
    }

    pub fn from_state(state: MarketState) -> Self {
        BlackScholesPricer { state }
    }

    pub fn state(&self) -> &MarketState {
        &self.state
    }

    pub fn price(&self, option: &EuropeanOption) -> f64 {
        let m = &self.state;
        bs_price(
            option.kind,
            m.spot(),
            option.strike,
            m.rate(),
            m.dividend_yield(),
            m.volatility(),
            option.maturity,
        )
    }

    pub fn delta(&self, option: &EuropeanOption) -> f64 {
        let m = &self.state;
        bs_delta(
            option.kind,
            m.spot(),
            option.strike,
            m.rate(),
            m.dividend_yield(),
            m.volatility(),
            option.maturity,
        )
    }

    pub fn gamma(&self, option: &EuropeanOption) -> f64 {
        let m = &self.state;
        bs_gamma(
            m.spot(),
            option.strike,
            m.rate(),
            m.dividend_yield(),
            m.volatility(),
            option.maturity,
        )
    }

    pub fn vega(&self, option: &EuropeanOption) -> f64 {
        let m = &self.state;
        bs_vega(
            m.spot(),
            option.strike,
            m.rate(),
            m.dividend_yield(),
            m.volatility(),
            option.maturity,
        )
    }

    /// Theta per year
    pub fn theta(&self, option: &EuropeanOption) -> f64 {
        let m = &self.state;
        bs_theta(
            option.kind,
            m.spot(),
            option.strike,
            m.rate(),
            m.dividend_yield(),
            m.volatility(),
            option.maturity,
        )
    }

    pub fn rho(&self, option: &EuropeanOption) -> f64 {
        let m = &self.state;
        bs_rho(
            option.kind,
            m.spot(),
            option.strike,
            m.rate(),
            m.dividend_yield(),
            m.volatility(),
            option.maturity,
        )
    }

    /// Price plus every Greek
    pub fn greeks(&self, option: &EuropeanOption) -> Greeks {
        self.greeks_with(option, GreeksConfig::ALL)
    }

    /// Price plus the Greeks selected in `which`; the rest are `None`.
    pub fn greeks_with(&self, option: &EuropeanOption, which: GreeksConfig) -> Greeks {
        let pick = |flag: GreeksConfig, f: fn(&Self, &EuropeanOption) -> f64| {
            which.contains(flag).then(|| f(self, option))
        };
        Greeks {
            price: self.price(option),
            delta: pick(GreeksConfig::DELTA, Self::delta),
            gamma: pick(GreeksConfig::GAMMA, Self::gamma),
            vega: pick(GreeksConfig::VEGA, Self::vega),
            theta: pick(GreeksConfig::THETA, Self::theta),
            rho: pick(GreeksConfig::RHO, Self::rho),
        }
    }
}

impl From<MarketState> for BlackScholesPricer {
    fn from(state: MarketState) -> Self {
        Self::from_state(state)
    }
}
