/// Split Time Sweep Example
///
/// Evaluates a batch of candidates in parallel, varying only the split time,
/// and summarizes how the landing spread moves. This is the engine-side half
/// of a search loop: a fitness function would score each impact set against
/// the caller's target geometry.

use cluster_ballistics::{
    simulate_impacts_batch, split_time_sweep, summarize_spread, LaunchInputs,
};

fn main() {
    println!("=== Split Time Sweep Example ===\n");

    let base = LaunchInputs::default();
    let candidates = split_time_sweep(&base, 0.5, 2.5, 21);

    println!(
        "Sweeping split time from 0.5 s to 2.5 s over {} candidates",
        candidates.len()
    );
    println!();

    let results = simulate_impacts_batch(&candidates);

    println!("  Split t (s) | Main x   | Spread width");
    println!("  ------------|----------|-------------");
    for (candidate, result) in candidates.iter().zip(results.iter()) {
        match result {
            Ok(impacts) => {
                let width = (impacts.positions[1].x - impacts.positions[2].x).abs();
                println!(
                    "  {:>11.2} | {:>8.3} | {:>8.3}",
                    candidate.time_to_split, impacts.positions[0].x, width
                );
            }
            Err(err) => {
                println!("  {:>11.2} | invalid: {err}", candidate.time_to_split);
            }
        }
    }
    println!();

    let summary = summarize_spread(&results).expect("sweep contains valid candidates");
    println!("Summary over {} valid candidates:", summary.num_valid);
    println!("  Main x mean: {:.3}", summary.mean_main_x);
    println!("  Main x std:  {:.3}", summary.std_main_x);
    println!(
        "  Main x range: [{:.3}, {:.3}]",
        summary.min_main_x, summary.max_main_x
    );
    println!("  Mean spread width: {:.3}", summary.mean_spread_width);
}
