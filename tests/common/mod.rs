//! Common test utilities and data generators.

#![allow(dead_code)]

use ols_reduce::Point;

/// Deterministic pseudo-random value in [-1, 1].
fn next_rand(state: &mut u64) -> f64 {
    *state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
    ((*state >> 32) as f64) / (u32::MAX as f64) * 2.0 - 1.0
}

/// Generate noisy linear data: y = intercept + slope * x + noise.
///
/// x values mimic assessed property values (tens of thousands to ~1M).
pub fn generate_linear_points(
    n: usize,
    slope: f64,
    intercept: f64,
    noise_std: f64,
    seed: u64,
) -> Vec<Point> {
    let mut rng_state = seed;
    (0..n)
        .map(|_| {
            let x = 500_000.0 + 450_000.0 * next_rand(&mut rng_state);
            let y = intercept + slope * x + noise_std * next_rand(&mut rng_state);
            Point::new(x, y)
        })
        .collect()
}

/// Points lying exactly on y = slope * x + intercept for x = 0..n.
pub fn exact_line(n: usize, slope: f64, intercept: f64) -> Vec<Point> {
    (0..n)
        .map(|i| Point::new(i as f64, intercept + slope * i as f64))
        .collect()
}

/// Relative closeness check.
pub fn rel_close(a: f64, b: f64, rel: f64) -> bool {
    (a - b).abs() <= rel * a.abs().max(b.abs()).max(f64::MIN_POSITIVE)
}

/// CSV text with the default headers and one extra column.
pub fn csv_text(points: &[Point]) -> String {
    let mut out = String::from("List Year,Assessed Value,Sale Amount\n");
    for p in points {
        out.push_str(&format!("2020,{},{}\n", p.x, p.y));
    }
    out
}
