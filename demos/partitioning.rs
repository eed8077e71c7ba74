//! # Partitioning and Partial Sums
//!
//! Shows how the parallel reducer splits a point set into contiguous
//! segments, what each worker contributes, and that the folded partials equal
//! a single sequential scan.
//!
//! Run with: `cargo run --example partitioning`

use ols_reduce::prelude::*;
use ols_reduce::utils::partition_bounds;

fn main() {
    println!("=== Partitioning and Partial Sums ===\n");

    let points: Vec<Point> = (1..=10)
        .map(|i| Point::new(i as f64, 2.0 * i as f64 + 1.0))
        .collect();

    for workers in [1, 4, 12] {
        let reducer = ParallelReducer::builder()
            .workers(workers)
            .build()
            .expect("workers >= 1");

        println!("--- {workers} worker(s), {} points ---", points.len());
        let bounds = partition_bounds(points.len(), workers);
        for (range, partial) in bounds.iter().zip(reducer.partials(&points)) {
            println!(
                "  segment {:>2}..{:<2} ({} pts): sum_x = {:>5.1}, sum_y = {:>6.1}",
                range.start,
                range.end,
                range.len(),
                partial.sum_x,
                partial.sum_y
            );
        }

        let combined = reducer.reduce(&points);
        let sequential = SequentialReducer::new().reduce(&points);
        println!("  combined == sequential: {}", combined == sequential);
        println!("  fit: {}\n", reducer.fit(&points));
    }

    println!("--- Degenerate input ---");
    let flat = vec![Point::new(5.0, 10.0); 10];
    let fitted = ParallelReducer::default().fit(&flat);
    println!("  {fitted}");
    println!("  sums kept: {:?}", fitted.stats);
}
