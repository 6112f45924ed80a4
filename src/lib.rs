//! # bsm-pricer: Closed-Form Black-Scholes-Merton Pricing
//!
//! A Rust library for pricing vanilla European options under the
//! Black-Scholes-Merton model with continuous dividend yield, computing
//! their Greeks, and backing out implied volatility from market quotes.
//!
//! ## Key Features
//!
//! - **Closed-form pricing**: calls and puts with dividend yield q
//! - **Complete Greeks**: Delta, Gamma, Vega, Theta (per year), Rho, all consistent with q > 0
//! - **Robust implied volatility**: bracketed Newton-Raphson with bisection fallback
//! - **Explicit outcomes**: non-convergence is reported, never hidden behind a sentinel
//!
//! ## Quick Start
//!
//! ```rust
//! use bsm_pricer::analytics::BlackScholesPricer;
//! use bsm_pricer::models::EuropeanOption;
//! use bsm_pricer::solvers::{implied_volatility, ImpliedVolConfig};
//!
//! let call = EuropeanOption::call(100.0, 1.0); // K = 100, T = 1 year
//! let pricer = BlackScholesPricer::new(100.0, 0.05, 0.2, 0.0);
//!
//! let price = pricer.price(&call);
//! assert!((price - 10.4506).abs() < 1e-4);
//!
//! let iv = implied_volatility(&call, 100.0, 0.05, price, &ImpliedVolConfig::default())
//!     .expect("valid inputs");
//! assert!(iv.is_converged());
//! assert!((iv.volatility() - 0.2).abs() < 1e-6);
//! ```
//!
//! ## Mathematical Foundation
//!
//! Prices follow from the risk-neutral expectation of the discounted payoff
//! under geometric Brownian motion with drift r - q. Greeks are the analytic
//! partial derivatives of those prices.

// Module declarations
pub mod analytics;
pub mod error;
pub mod math_utils;
pub mod models;
pub mod output;
pub mod solvers;

// Re-export commonly used types for convenience
pub use analytics::{BlackScholesPricer, Greeks, GreeksConfig};
pub use error::{PricingError, PricingResult};
pub use models::{EuropeanOption, MarketState, OptionKind};
pub use solvers::{implied_volatility, ImpliedVolConfig, ImpliedVolatility, NonConvergence};
