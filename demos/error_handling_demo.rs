// demos/error_handling_demo.rs
use bsm_pricer::error::PricingError;
use bsm_pricer::models::{EuropeanOption, MarketState, OptionKind};
use bsm_pricer::solvers::{implied_volatility, ImpliedVolConfig};
use bsm_pricer::BlackScholesPricer;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("Error Handling Demo for bsm-pricer");
    println!("==================================\n");

    // Test 1: Invalid option terms
    println!("1. Testing invalid option terms...");
    match EuropeanOption::try_new(100.0, -0.5, OptionKind::Call) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 2: Zero volatility
    println!("\n2. Testing zero volatility...");
    match MarketState::try_new(100.0, 0.05, 0.0, 0.0) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 3: Unchecked construction lets NaN through
    println!("\n3. Pricing with unchecked zero volatility...");
    let unchecked = BlackScholesPricer::new(100.0, 0.05, 0.0, 0.0);
    let gamma = unchecked.gamma(&EuropeanOption::call(100.0, 1.0));
    println!("   Gamma = {} (not finite: {})", gamma, !gamma.is_finite());

    // Test 4: Invalid solver configuration
    println!("\n4. Testing invalid solver configuration...");
    let option = EuropeanOption::call(100.0, 1.0);
    let bad_config = ImpliedVolConfig::default().with_tolerance(-1e-6);
    match implied_volatility(&option, 100.0, 0.05, 10.0, &bad_config) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 5: Quote below every model price
    println!("\n5. Testing a quote below the σ-floor price...");
    let config = ImpliedVolConfig::default();
    match implied_volatility(&option, 100.0, 0.05, 1.0, &config).map(|iv| iv.into_result()) {
        Ok(Err(e)) => println!("   ✓ Not converged: {}", e),
        Ok(Ok(vol)) => println!("   Unexpected convergence: {}", vol),
        Err(e) => println!("   Unexpected error: {}", e),
    }

    // Test 6: Quote above every model price
    println!("\n6. Testing a quote above the σ-cap price...");
    match implied_volatility(&option, 100.0, 0.05, 150.0, &config) {
        Ok(iv) => println!(
            "   ✓ Best effort σ = {} ({:?})",
            iv.volatility(),
            iv.failure_reason()
        ),
        Err(e) => println!("   Unexpected error: {}", e),
    }

    // Test 7: Error type matching
    println!("\n7. Testing error type matching...");
    match implied_volatility(&EuropeanOption::put(-1.0, 1.0), 100.0, 0.05, 5.0, &config) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(PricingError::InvalidParameters {
            parameter,
            value,
            constraint,
        }) => {
            println!(
                "   ✓ Caught InvalidParameters: {} = {} ({})",
                parameter, value, constraint
            );
        }
        Err(other) => println!("   Unexpected error type: {}", other),
    }

    println!("\n✓ Error handling demo complete!");
}
