// tests/integration_test.rs
use approx::assert_abs_diff_eq;
use bsm_pricer::{
    implied_volatility, BlackScholesPricer, EuropeanOption, ImpliedVolConfig, MarketState,
    OptionKind,
};

#[test]
fn test_reference_scenario() {
    let pricer = BlackScholesPricer::new(100.0, 0.05, 0.2, 0.0);
    let call = pricer.price(&EuropeanOption::call(100.0, 1.0));
    let put = pricer.price(&EuropeanOption::put(100.0, 1.0));

    println!("\nCall price: {}", call);
    println!("Put price: {}", put);

    assert_abs_diff_eq!(call, 10.4506, epsilon = 1e-4);
    assert_abs_diff_eq!(put, 5.5735, epsilon = 1e-4);
    assert_abs_diff_eq!(call - put, 100.0 - 100.0 * (-0.05f64).exp(), epsilon = 1e-4);
}

#[test]
fn test_put_call_parity() {
    let cases = [
        (100.0, 100.0, 0.05, 0.0, 1.0, 0.2),
        (100.0, 100.0, 0.05, 0.03, 1.0, 0.2),
        (80.0, 100.0, 0.01, 0.02, 0.25, 0.6),
        (150.0, 100.0, -0.005, 0.0, 3.0, 0.1),
        (100.0, 130.0, 0.07, 0.04, 0.1, 1.2),
    ];

    for &(s, k, r, q, t, sigma) in &cases {
        let pricer = BlackScholesPricer::new(s, r, sigma, q);
        let call = pricer.price(&EuropeanOption::call(k, t));
        let put = pricer.price(&EuropeanOption::put(k, t));
        let expected = s * (-q * t).exp() - k * (-r * t).exp();
        assert_abs_diff_eq!(call - put, expected, epsilon = 1e-4);
    }
}

#[test]
fn test_dividend_monotonicity() {
    let call = EuropeanOption::call(100.0, 1.0);
    let put = EuropeanOption::put(100.0, 1.0);

    let mut previous: Option<(f64, f64)> = None;
    for i in 0..=10 {
        let q = i as f64 * 0.01;
        let pricer = BlackScholesPricer::new(100.0, 0.05, 0.2, q);
        let (c, p) = (pricer.price(&call), pricer.price(&put));
        if let Some((prev_c, prev_p)) = previous {
            assert!(c < prev_c, "call price must fall as q rises (q = {})", q);
            assert!(p > prev_p, "put price must rise as q rises (q = {})", q);
        }
        previous = Some((c, p));
    }
}

#[test]
fn test_zero_dividend_matches_dividend_free_formula() {
    let option = EuropeanOption::call(105.0, 0.75);
    let with_q = BlackScholesPricer::from_state(MarketState::new(100.0, 0.03, 0.25, 0.0));
    let without_q =
        BlackScholesPricer::from_state(MarketState::without_dividends(100.0, 0.03, 0.25));
    assert_eq!(with_q.price(&option), without_q.price(&option));
    assert_eq!(with_q.greeks(&option), without_q.greeks(&option));
}

#[test]
fn test_price_then_solve_from_dated_option() {
    let valuation = chrono::NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
    let expiry = chrono::NaiveDate::from_ymd_opt(2025, 9, 19).unwrap();
    let option = EuropeanOption::from_dates(95.0, valuation, expiry, OptionKind::Put)
        .expect("valid dates");

    let market_price = BlackScholesPricer::new(100.0, 0.04, 0.32, 0.015).price(&option);
    let config = ImpliedVolConfig::default()
        .with_dividend_yield(0.015)
        .with_tolerance(1e-9);
    let iv = implied_volatility(&option, 100.0, 0.04, market_price, &config)
        .expect("valid inputs")
        .into_result()
        .expect("converges");

    assert_abs_diff_eq!(iv, 0.32, epsilon = 1e-6);
}

#[test]
fn test_quote_serialization_round_trip() {
    let option = EuropeanOption::put(95.0, 0.5);
    let json = serde_json::to_string(&option).unwrap();
    assert!(json.contains("\"Put\""));
    let back: EuropeanOption = serde_json::from_str(&json).unwrap();
    assert_eq!(back, option);

    let config = ImpliedVolConfig::default().with_dividend_yield(0.02);
    let json = serde_json::to_string(&config).unwrap();
    let back: ImpliedVolConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);

    let greeks = BlackScholesPricer::new(100.0, 0.05, 0.2, 0.0).greeks(&option);
    let json = serde_json::to_string(&greeks).unwrap();
    let back: bsm_pricer::Greeks = serde_json::from_str(&json).unwrap();
    assert_abs_diff_eq!(back.price, greeks.price, epsilon = 1e-12);
    assert_abs_diff_eq!(back.delta.unwrap(), greeks.delta.unwrap(), epsilon = 1e-12);
}
