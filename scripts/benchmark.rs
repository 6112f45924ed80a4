// scripts/benchmark.rs
use bsm_pricer::analytics::BlackScholesPricer;
use bsm_pricer::math_utils::Timer;
use bsm_pricer::models::{EuropeanOption, OptionKind};
use bsm_pricer::output::{write_greeks_to_csv, write_summary_to_csv};
use bsm_pricer::solvers::{implied_volatility, ImpliedVolConfig};
use std::env;
use std::hint::black_box;
use std::process::Command;

#[derive(Debug)]
struct SystemInfo {
    os: String,
    rust_version: String,
    rustc_flags: String,
}

impl SystemInfo {
    fn gather() -> Self {
        SystemInfo {
            os: env::consts::OS.to_string(),
            rust_version: Self::get_rust_version(),
            rustc_flags: env::var("RUSTFLAGS").unwrap_or_else(|_| "default".to_string()),
        }
    }

    fn get_rust_version() -> String {
        Command::new("rustc")
            .arg("--version")
            .output()
            .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
            .unwrap_or_else(|_| "Unknown Rust version".to_string())
    }
}

#[derive(Debug)]
struct BenchmarkResult {
    name: String,
    calls: usize,
    time_ms: f64,
    throughput_per_sec: f64,
    checksum: f64,
}

impl BenchmarkResult {
    fn new(name: &str, calls: usize, time_ms: f64, checksum: f64) -> Self {
        BenchmarkResult {
            name: name.to_string(),
            calls,
            time_ms,
            throughput_per_sec: calls as f64 / (time_ms / 1000.0),
            checksum,
        }
    }
}

/// Strikes spread around the money so every branch of the formulas is hit
fn option_grid(n: usize) -> Vec<EuropeanOption> {
    (0..n)
        .map(|i| {
            let strike = 60.0 + 80.0 * (i % 101) as f64 / 100.0;
            let maturity = 0.1 + (i % 7) as f64 * 0.4;
            let kind = if i % 2 == 0 { OptionKind::Call } else { OptionKind::Put };
            EuropeanOption::new(strike, maturity, kind)
        })
        .collect()
}

fn run_benchmarks() -> Vec<BenchmarkResult> {
    let mut results = Vec::new();
    let pricer = BlackScholesPricer::new(100.0, 0.05, 0.25, 0.02);

    for &n in &[10_000usize, 100_000, 1_000_000] {
        println!("Running benchmarks with {} options...", n);
        let options = option_grid(n);
        let mut timer = Timer::new();

        timer.start();
        let total: f64 = options.iter().map(|o| black_box(pricer.price(o))).sum();
        results.push(BenchmarkResult::new(
            &format!("Price ({}k)", n / 1000),
            n,
            timer.elapsed_ms(),
            total,
        ));

        timer.start();
        let total: f64 = options
            .iter()
            .map(|o| {
                let g = black_box(pricer.greeks(o));
                g.delta.unwrap_or(0.0) + g.vega.unwrap_or(0.0)
            })
            .sum();
        results.push(BenchmarkResult::new(
            &format!("Price + Greeks ({}k)", n / 1000),
            n,
            timer.elapsed_ms(),
            total,
        ));
    }

    // Implied vol solves are ~10-20 pricings each, use fewer
    let n = 10_000;
    let options = option_grid(n);
    let quotes: Vec<f64> = options.iter().map(|o| pricer.price(o)).collect();
    let config = ImpliedVolConfig::default().with_dividend_yield(0.02);
    let mut timer = Timer::new();
    timer.start();
    let mut converged = 0usize;
    let mut total = 0.0;
    for (option, &quote) in options.iter().zip(&quotes) {
        if let Ok(iv) = implied_volatility(option, 100.0, 0.05, quote, &config) {
            converged += iv.is_converged() as usize;
            total += iv.volatility();
        }
    }
    results.push(BenchmarkResult::new(
        "Implied volatility (10k)",
        n,
        timer.elapsed_ms(),
        total,
    ));
    println!("Implied volatility converged for {}/{} quotes", converged, n);

    results
}

fn main() {
    println!("bsm-pricer Benchmark Suite");
    println!("==========================\n");

    let system_info = SystemInfo::gather();
    println!("System Information:");
    println!("  OS: {}", system_info.os);
    println!("  Rust Version: {}", system_info.rust_version);
    println!("  RUSTFLAGS: {}", system_info.rustc_flags);
    println!();

    let results = run_benchmarks();

    println!("\n{:=<80}", "");
    println!("BENCHMARK RESULTS");
    println!("{:=<80}", "");
    println!(
        "{:<30} {:>10} {:>12} {:>15} {:>12}",
        "Benchmark", "Calls", "Time (ms)", "Calls/sec", "Checksum"
    );
    println!("{:-<80}", "");
    for result in &results {
        println!(
            "{:<30} {:>10} {:>12.2} {:>15.0} {:>12.4}",
            result.name, result.calls, result.time_ms, result.throughput_per_sec, result.checksum
        );
    }
    println!("{:=<80}", "");

    let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
    let summary_file = format!("benchmark_results_{}.csv", timestamp);
    let rows: Vec<(String, String)> = results
        .iter()
        .map(|r| (r.name.clone(), format!("{:.3}", r.time_ms)))
        .collect();
    let mut summary: Vec<(&str, &str)> = vec![
        ("os", system_info.os.as_str()),
        ("rust_version", system_info.rust_version.as_str()),
        ("rustflags", system_info.rustc_flags.as_str()),
    ];
    summary.extend(rows.iter().map(|(k, v)| (k.as_str(), v.as_str())));

    match write_summary_to_csv(&summary_file, &summary) {
        Ok(()) => println!("\nResults saved to: {}", summary_file),
        Err(e) => eprintln!("\nFailed to write {}: {}", summary_file, e),
    }

    let atm = [
        ("atm_call".to_string(), pricer_greeks(OptionKind::Call)),
        ("atm_put".to_string(), pricer_greeks(OptionKind::Put)),
    ];
    let greeks_file = format!("benchmark_greeks_{}.csv", timestamp);
    if let Err(e) = write_greeks_to_csv(&greeks_file, &atm) {
        eprintln!("Failed to write {}: {}", greeks_file, e);
    }

    println!("\nTo reproduce these results:");
    println!("1. Use Rust version: {}", system_info.rust_version);
    println!("2. Set RUSTFLAGS: {}", system_info.rustc_flags);
    println!("3. Run: cargo run --bin benchmark --release");
}

fn pricer_greeks(kind: OptionKind) -> bsm_pricer::Greeks {
    let pricer = BlackScholesPricer::new(100.0, 0.05, 0.25, 0.02);
    pricer.greeks(&EuropeanOption::new(100.0, 1.0, kind))
}
