// src/output.rs
use crate::analytics::Greeks;
use std::fs::File;
use std::io::{self, Write};

fn fmt_opt(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// One row per `(label, greeks)`; unrequested Greeks are left empty
pub fn write_greeks_to_csv(filename: &str, rows: &[(String, Greeks)]) -> io::Result<()> {
    let mut file = File::create(filename)?;
    writeln!(file, "label,price,delta,gamma,vega,theta,rho")?;
    for (label, g) in rows {
        writeln!(
            file,
            "{},{},{},{},{},{},{}",
            label,
            g.price,
            fmt_opt(g.delta),
            fmt_opt(g.gamma),
            fmt_opt(g.vega),
            fmt_opt(g.theta),
            fmt_opt(g.rho)
        )?;
    }
    Ok(())
}

pub fn write_summary_to_csv(filename: &str, summary_data: &[(&str, &str)]) -> io::Result<()> {
    let mut file = File::create(filename)?;
    for (key, value) in summary_data {
        writeln!(file, "{},{}", key, value)?;
    }
    Ok(())
}
