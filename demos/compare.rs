//! # Sequential vs. Parallel OLS
//!
//! Evaluates several datasets, timing both reducers over repeated runs and
//! printing the averaged coefficients. Datasets are CSV files with
//! `Assessed Value` and `Sale Amount` columns; pass their paths as arguments.
//! Without arguments a synthetic dataset is used, plus one deliberately
//! missing file to show that a failed dataset does not stop the others.
//!
//! Run with: `cargo run --release --example compare -- real_estate.csv`
//!
//! Set `RUST_LOG=ols_reduce=debug` to see the per-point preview.

use ols_reduce::bench::{Dataset, Harness};
use ols_reduce::core::{HarnessOptions, ReducerOptions};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "ols_reduce=info".into()))
        .init();

    let datasets = datasets_from_args();

    let harness = Harness::new(
        HarnessOptions::builder()
            .runs(1000)
            .display_runs(10)
            .preview_points(100)
            .build()
            .expect("valid harness options"),
        ReducerOptions::with_workers(4),
    )
    .expect("valid reducer options");

    println!("=== Sequential vs. Parallel Linear Regression ===\n");
    for outcome in harness.evaluate_all(&datasets) {
        println!("{outcome}\n");
    }
}

fn datasets_from_args() -> Vec<Dataset> {
    let paths: Vec<String> = std::env::args().skip(1).collect();
    if paths.is_empty() {
        let text = synthetic_csv(20_000);
        return vec![
            Dataset::from_text("all data", text.clone()),
            Dataset::from_text("first 1000 rows", text).with_limit(1000),
            Dataset::from_path("missing file", "does_not_exist.csv"),
        ];
    }

    paths
        .iter()
        .flat_map(|path| {
            [
                Dataset::from_path(format!("{path} (all rows)"), path),
                Dataset::from_path(format!("{path} (first 1000 rows)"), path).with_limit(1000),
            ]
        })
        .collect()
}

/// Assessed values with sale amounts around 1.4x the assessment.
fn synthetic_csv(n: usize) -> String {
    let mut out = String::from("Serial Number,Assessed Value,Sale Amount\n");
    for i in 0..n {
        let assessed = 40_000.0 + (i % 997) as f64 * 850.0;
        let noise = ((i as f64) * 0.61).sin() * 15_000.0;
        let sale = 12_000.0 + 1.4 * assessed + noise;
        out.push_str(&format!("{i},{assessed:.2},{sale:.2}\n"));
    }
    out
}
