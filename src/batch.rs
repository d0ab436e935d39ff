// Deterministic batch evaluation for callers sweeping many candidate
// parameter sets, one simulator call per candidate. Every call is a pure
// function of its inputs, so candidates fan out across the rayon pool with
// no coordination beyond collecting results.

use rayon::prelude::*;

use crate::sim_api::{simulate_impacts, ImpactSet, LaunchInputs, SimulationError};

/// Evaluate a batch of candidates in parallel.
///
/// Results keep the input order. Failed candidates stay as errors so the
/// caller's scoring policy decides what an invalid candidate is worth.
pub fn simulate_impacts_batch(
    candidates: &[LaunchInputs],
) -> Vec<Result<ImpactSet, SimulationError>> {
    candidates.par_iter().map(simulate_impacts).collect()
}

/// Enumerate candidates varying the split time over an inclusive linear
/// range.
pub fn split_time_sweep(
    base: &LaunchInputs,
    from: f64,
    to: f64,
    steps: usize,
) -> Vec<LaunchInputs> {
    if steps == 0 {
        return Vec::new();
    }

    (0..steps)
        .map(|i| {
            let fraction = if steps == 1 {
                0.0
            } else {
                i as f64 / (steps - 1) as f64
            };
            let mut candidate = base.clone();
            candidate.time_to_split = from + (to - from) * fraction;
            candidate
        })
        .collect()
}

/// Landing statistics over the valid results of a batch.
#[derive(Debug, Clone)]
pub struct SpreadSummary {
    pub num_candidates: usize,
    pub num_valid: usize,
    pub mean_main_x: f64,
    pub std_main_x: f64,
    pub min_main_x: f64,
    pub max_main_x: f64,
    /// Mean distance between the two deviated landing points.
    pub mean_spread_width: f64,
}

/// Summarize the main landing x and the deviated spread over a batch.
///
/// Returns `None` when no candidate in the batch produced a valid impact set.
pub fn summarize_spread(results: &[Result<ImpactSet, SimulationError>]) -> Option<SpreadSummary> {
    let valid: Vec<&ImpactSet> = results.iter().filter_map(|r| r.as_ref().ok()).collect();
    if valid.is_empty() {
        return None;
    }

    let n = valid.len() as f64;
    let main_xs: Vec<f64> = valid.iter().map(|set| set.positions[0].x).collect();

    let mean_main_x = main_xs.iter().sum::<f64>() / n;
    let std_main_x = (main_xs
        .iter()
        .map(|x| (x - mean_main_x).powi(2))
        .sum::<f64>()
        / n)
        .sqrt();
    let min_main_x = main_xs.iter().fold(f64::INFINITY, |a, &b| a.min(b));
    let max_main_x = main_xs.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b));

    let mean_spread_width = valid
        .iter()
        .map(|set| (set.positions[1].x - set.positions[2].x).abs())
        .sum::<f64>()
        / n;

    Some(SpreadSummary {
        num_candidates: results.len(),
        num_valid: valid.len(),
        mean_main_x,
        std_main_x,
        min_main_x,
        max_main_x,
        mean_spread_width,
    })
}
