//! # Cluster Ballistics
//!
//! Deterministic 2D split-projectile trajectory engine. A single projectile
//! launched under constant gravity splits mid-flight into three
//! sub-projectiles diverging at a configurable angle, each following its own
//! ballistic arc to a target elevation. Closed-form kinematics only: no air
//! resistance, no integration, no randomness.

// Re-export the main types and functions
pub use batch::{simulate_impacts_batch, split_time_sweep, summarize_spread, SpreadSummary};
pub use sim_api::{
    simulate_full_arcs, simulate_impacts, ImpactSet, LaunchInputs, SampledArcs, SimulationError,
};
pub use trajectory::{Impact, SplitState};

// Module declarations
pub mod batch;
pub mod constants;
pub mod kinematics;
pub mod sim_api;
pub mod split;
pub mod trajectory;
