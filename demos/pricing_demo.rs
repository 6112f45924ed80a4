// demos/pricing_demo.rs
use bsm_pricer::analytics::BlackScholesPricer;
use bsm_pricer::models::{EuropeanOption, OptionKind};
use bsm_pricer::solvers::{implied_volatility, ImpliedVolConfig};
use tracing_subscriber::EnvFilter;

fn print_option(label: &str, pricer: &BlackScholesPricer, option: &EuropeanOption) {
    let greeks = pricer.greeks(option);
    println!("=== {} ===", label);
    println!("Price: {:.4}", greeks.price);
    println!("Delta: {:.4}", greeks.delta.unwrap_or(f64::NAN));
    println!("Gamma: {:.4}", greeks.gamma.unwrap_or(f64::NAN));
    println!("Vega : {:.4}", greeks.vega.unwrap_or(f64::NAN));
    println!(
        "Theta: {:.4} per year ({:.4} per day)",
        greeks.theta.unwrap_or(f64::NAN),
        greeks.theta_per_day().unwrap_or(f64::NAN)
    );
    println!("Rho  : {:.4}\n", greeks.rho.unwrap_or(f64::NAN));
}

fn main() {
    // RUST_LOG=bsm_pricer=trace shows every solver step
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let strike = 100.0;
    let maturity = 1.0; // years
    let spot = 100.0;
    let rate = 0.05;
    let vol = 0.2;

    let call = EuropeanOption::new(strike, maturity, OptionKind::Call);
    let put = EuropeanOption::new(strike, maturity, OptionKind::Put);
    let pricer = BlackScholesPricer::new(spot, rate, vol, 0.0);

    print_option("Call Option", &pricer, &call);
    print_option("Put Option", &pricer, &put);

    let with_dividend = BlackScholesPricer::new(spot, rate, vol, 0.03);
    print_option("Call Option (q = 3%)", &with_dividend, &call);

    println!("=== Implied Volatility ===");
    let market_price = pricer.price(&call);
    let config = ImpliedVolConfig::default()
        .with_initial_vol_guess(1.5)
        .with_tolerance(1e-10);
    match implied_volatility(&call, spot, rate, market_price, &config) {
        Ok(iv) if iv.is_converged() => println!(
            "Recovered σ = {:.8} in {} iterations (residual {:.2e})",
            iv.volatility(),
            iv.iterations(),
            iv.residual()
        ),
        Ok(iv) => println!(
            "No convergence ({:?}); best σ = {:.8}",
            iv.failure_reason(),
            iv.volatility()
        ),
        Err(e) => println!("Error: {}", e),
    }
}
