pub mod market;
pub mod option;

pub use market::MarketState;
pub use option::{EuropeanOption, OptionKind};
