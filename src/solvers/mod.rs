pub mod implied_vol;

pub use implied_vol::{implied_volatility, ImpliedVolConfig, ImpliedVolatility, NonConvergence};
