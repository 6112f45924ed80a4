pub mod bs_analytic;
pub mod greeks;

pub use bs_analytic::BlackScholesPricer;
pub use greeks::{Greeks, GreeksConfig};
