// src/solvers/implied_vol.rs
//! Implied volatility by bracketed Newton-Raphson with bisection fallback
//!
//! # Algorithm
//!
//! Solves `f(σ) = BSM(σ) - market_price = 0` for σ. Because vega ≥ 0 the
//! price is monotone in σ, so a bracket `[low, high]` with
//! `f(low) ≤ 0 ≤ f(high)` always contains the root:
//!
//! 1. Start from `[1e-8, 5.0]`. If `f(1e-8) > 0` the quote is below every
//!    model price and the floor is returned.
//! 2. If `f(5.0) < 0`, double `high` (capped at 100) until it brackets.
//! 3. Iterate from the clamped initial guess. A Newton step
//!    `σ - f(σ)/vega` is taken when vega is large enough and the step lands
//!    strictly inside the bracket; otherwise the bracket midpoint is used.
//!    The trial point replaces `high` if `f > 0`, else `low`.
//!
//! The bracket shrinks every iteration, so the search cannot diverge.

use crate::analytics::BlackScholesPricer;
use crate::error::{validation::*, PricingError, PricingResult};
use crate::models::EuropeanOption;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace, warn};

/// Lower end of the search bracket
pub const VOL_FLOOR: f64 = 1e-8;
/// Upper end of the initial search bracket
pub const VOL_INITIAL_CAP: f64 = 5.0;
/// The upper end is never expanded beyond this
pub const VOL_MAX_CAP: f64 = 100.0;
pub const MAX_BRACKET_EXPANSIONS: usize = 50;
/// Below this vega a Newton step is not trusted
pub const MIN_VEGA: f64 = 1e-8;

/// Solver settings and the dividend yield used while searching.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpliedVolConfig {
    pub dividend_yield: f64,
    pub initial_vol_guess: f64,
    /// Absolute price tolerance: converged when `|BSM(σ) - market| < tolerance`
    pub tolerance: f64,
    pub max_iterations: usize,
}

impl Default for ImpliedVolConfig {
    fn default() -> Self {
        ImpliedVolConfig {
            dividend_yield: 0.0,
            initial_vol_guess: 0.2,
            tolerance: 1e-6,
            max_iterations: 100,
        }
    }
}

impl ImpliedVolConfig {
    pub fn with_dividend_yield(mut self, dividend_yield: f64) -> Self {
        self.dividend_yield = dividend_yield;
        self
    }

    pub fn with_initial_vol_guess(mut self, initial_vol_guess: f64) -> Self {
        self.initial_vol_guess = initial_vol_guess;
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Validate the solver configuration
    pub fn validate(&self) -> PricingResult<()> {
        validate_non_negative("dividend_yield", self.dividend_yield)?;
        validate_finite("dividend_yield", self.dividend_yield)?;
        validate_finite("initial_vol_guess", self.initial_vol_guess)?;
        validate_positive("tolerance", self.tolerance)?;

        if self.max_iterations == 0 {
            return Err(PricingError::InvalidConfiguration {
                field: "max_iterations".to_string(),
                reason: "must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}

/// Why the search stopped without meeting the tolerance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NonConvergence {
    /// The model price at σ = `VOL_FLOOR` already exceeds the quote
    BelowVolatilityFloor,
    /// The model price at σ = `VOL_MAX_CAP` is still below the quote
    AboveVolatilityCap,
    /// `max_iterations` ran out
    IterationLimit,
}

impl NonConvergence {
    /// True when no volatility in the search range brackets the quote
    pub fn is_unbracketable(&self) -> bool {
        matches!(
            self,
            NonConvergence::BelowVolatilityFloor | NonConvergence::AboveVolatilityCap
        )
    }
}

impl fmt::Display for NonConvergence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NonConvergence::BelowVolatilityFloor => {
                write!(f, "market price below model price at σ = {}", VOL_FLOOR)
            }
            NonConvergence::AboveVolatilityCap => {
                write!(f, "market price above model price at σ = {}", VOL_MAX_CAP)
            }
            NonConvergence::IterationLimit => write!(f, "iteration limit reached"),
        }
    }
}

/// Outcome of an implied volatility search.
///
/// `residual` is always `BSM(σ) - market_price` at the reported volatility.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ImpliedVolatility {
    Converged {
        volatility: f64,
        iterations: usize,
        residual: f64,
    },
    NotConverged {
        best_volatility: f64,
        iterations: usize,
        residual: f64,
        reason: NonConvergence,
    },
}

impl ImpliedVolatility {
    /// Converged volatility, or the best iterate when the search gave up
    pub fn volatility(&self) -> f64 {
        match *self {
            ImpliedVolatility::Converged { volatility, .. } => volatility,
            ImpliedVolatility::NotConverged {
                best_volatility, ..
            } => best_volatility,
        }
    }

    pub fn is_converged(&self) -> bool {
        matches!(self, ImpliedVolatility::Converged { .. })
    }

    pub fn iterations(&self) -> usize {
        match *self {
            ImpliedVolatility::Converged { iterations, .. }
            | ImpliedVolatility::NotConverged { iterations, .. } => iterations,
        }
    }

    pub fn residual(&self) -> f64 {
        match *self {
            ImpliedVolatility::Converged { residual, .. }
            | ImpliedVolatility::NotConverged { residual, .. } => residual,
        }
    }

    pub fn failure_reason(&self) -> Option<NonConvergence> {
        match *self {
            ImpliedVolatility::Converged { .. } => None,
            ImpliedVolatility::NotConverged { reason, .. } => Some(reason),
        }
    }

    /// Converged volatility, or `PricingError::NonConvergence`
    pub fn into_result(self) -> PricingResult<f64> {
        match self {
            ImpliedVolatility::Converged { volatility, .. } => Ok(volatility),
            ImpliedVolatility::NotConverged {
                best_volatility,
                residual,
                reason,
                ..
            } => Err(PricingError::NonConvergence {
                reason,
                best_volatility,
                residual,
            }),
        }
    }
}

/// Find σ such that the BSM price of `option` matches `market_price`.
///
/// # Errors
///
/// Returns `PricingError` for invalid option terms, market observables or
/// solver configuration. A search that runs but fails to converge is *not*
/// an error: it yields [`ImpliedVolatility::NotConverged`] carrying the best
/// iterate.
pub fn implied_volatility(
    option: &EuropeanOption,
    spot: f64,
    rate: f64,
    market_price: f64,
    config: &ImpliedVolConfig,
) -> PricingResult<ImpliedVolatility> {
    option.validate()?;
    validate_positive("spot", spot)?;
    validate_finite("spot", spot)?;
    validate_finite("rate", rate)?;
    validate_finite("market_price", market_price)?;
    config.validate()?;

    let q = config.dividend_yield;
    let objective =
        |vol: f64| BlackScholesPricer::new(spot, rate, vol, q).price(option) - market_price;

    let mut low = VOL_FLOOR;
    let mut high = VOL_INITIAL_CAP;

    let f_low = objective(low);
    if f_low > 0.0 {
        warn!(
            market_price,
            floor_price = f_low + market_price,
            "market price below model price at volatility floor"
        );
        return Ok(ImpliedVolatility::NotConverged {
            best_volatility: low,
            iterations: 0,
            residual: f_low,
            reason: NonConvergence::BelowVolatilityFloor,
        });
    }

    let mut f_high = objective(high);
    let mut expansions = 0;
    while f_high < 0.0 && expansions < MAX_BRACKET_EXPANSIONS && high < VOL_MAX_CAP {
        high = (high * 2.0).min(VOL_MAX_CAP);
        f_high = objective(high);
        expansions += 1;
        debug!(high, f_high, "expanded volatility bracket");
    }
    if f_high < 0.0 {
        warn!(
            market_price,
            high, f_high, "market price above model price at volatility cap"
        );
        return Ok(ImpliedVolatility::NotConverged {
            best_volatility: high,
            iterations: 0,
            residual: f_high,
            reason: NonConvergence::AboveVolatilityCap,
        });
    }

    let mut vol = config.initial_vol_guess.clamp(low, high);
    // f(vol); after each step the trial point becomes the next iterate
    let mut residual = objective(vol);

    for iteration in 0..config.max_iterations {
        if residual.abs() < config.tolerance {
            debug!(
                vol,
                iterations = iteration + 1,
                residual,
                "implied volatility converged"
            );
            return Ok(ImpliedVolatility::Converged {
                volatility: vol,
                iterations: iteration + 1,
                residual,
            });
        }

        let vega = BlackScholesPricer::new(spot, rate, vol, q).vega(option);
        let midpoint = 0.5 * (low + high);
        let (candidate, step) = if vega > MIN_VEGA {
            let newton = vol - residual / vega;
            if newton.is_nan() || newton <= low || newton >= high {
                (midpoint, "bisection")
            } else {
                (newton, "newton")
            }
        } else {
            (midpoint, "bisection")
        };

        let f_candidate = objective(candidate);
        if f_candidate > 0.0 {
            high = candidate;
        } else {
            low = candidate;
        }
        trace!(
            iteration,
            vol,
            residual,
            vega,
            candidate,
            step,
            low,
            high,
            "implied volatility step"
        );

        vol = candidate.clamp(low, high);
        residual = f_candidate;
    }

    warn!(
        vol,
        residual,
        max_iterations = config.max_iterations,
        "implied volatility did not converge"
    );
    Ok(ImpliedVolatility::NotConverged {
        best_volatility: vol,
        iterations: config.max_iterations,
        residual,
        reason: NonConvergence::IterationLimit,
    })
}
