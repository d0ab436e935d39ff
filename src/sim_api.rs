// Public simulation API: inputs, outputs, errors and the two orchestration
// entry points.

use std::error::Error;
use std::fmt;

use nalgebra::Vector2;

use crate::kinematics::launch_velocity;
use crate::split::{boost_along_track, diverge};
use crate::trajectory::{impact_for, sample_arc, state_at_split};

/// Simulation failure taxonomy.
///
/// Every failure is a deterministic consequence of the inputs; there are no
/// transient modes and nothing is retried. Callers driving a search loop are
/// expected to treat any of these as "this candidate is invalid" rather than
/// abort the batch.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// The elevation solve's discriminant is negative: the trajectory never
    /// reaches the target elevation under the given gravity and velocity.
    UnreachableTarget,
    /// Velocity at the split instant is the zero vector, so the impulse
    /// direction is undefined.
    DegenerateSplit,
    /// Nonphysical input rejected at the boundary before computation.
    InvalidParameter(String),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SimulationError::UnreachableTarget => {
                write!(f, "trajectory never reaches the target elevation")
            }
            SimulationError::DegenerateSplit => {
                write!(f, "velocity at the split instant is zero")
            }
            SimulationError::InvalidParameter(msg) => {
                write!(f, "invalid parameter: {msg}")
            }
        }
    }
}

impl Error for SimulationError {}

/// Launch parameters for one candidate shot.
///
/// All angles are in degrees. Distances, speeds and times share whatever
/// consistent unit system the caller works in (pixels and seconds in the
/// visualization use case). Gravity carries its own sign: negative pulls
/// down in a y-up frame, and all formulas use it uniformly.
#[derive(Debug, Clone)]
pub struct LaunchInputs {
    pub initial_speed: f64,
    pub launch_angle_deg: f64,
    pub start_position: Vector2<f64>,
    pub gravity: f64,
    pub time_to_split: f64,    // seconds of flight before the split event
    pub split_force: f64,      // impulse magnitude along the velocity direction
    pub split_angle_deg: f64,  // half-angle between the main line and each deviation
    pub target_elevation: f64, // y of the impact plane
}

impl Default for LaunchInputs {
    fn default() -> Self {
        Self {
            initial_speed: 10.0,
            launch_angle_deg: 0.0,
            start_position: Vector2::new(0.0, 50.0),
            gravity: crate::constants::DEFAULT_GRAVITY,
            time_to_split: 1.5,
            split_force: 1.5,
            split_angle_deg: 10.0,
            target_elevation: 0.0,
        }
    }
}

/// Final impacts of the three sub-projectiles, in (main, +angle, −angle)
/// order. Every landing position's y equals the target elevation.
#[derive(Debug, Clone, PartialEq)]
pub struct ImpactSet {
    pub times: [f64; 3],
    pub positions: [Vector2<f64>; 3],
}

/// Densely sampled arcs for rendering: the shared pre-split arc and one arc
/// per sub-projectile, each inclusive of both exact endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct SampledArcs {
    pub pre_split: Vec<Vector2<f64>>,
    pub post_split: [Vec<Vector2<f64>>; 3],
}

/// Reject nonphysical inputs before any computation proceeds.
///
/// A split time past the natural impact is deliberately not detected here:
/// the engine does not clip, and validating it is the caller's job.
fn validate(inputs: &LaunchInputs) -> Result<(), SimulationError> {
    if inputs.initial_speed < 0.0 {
        return Err(SimulationError::InvalidParameter(format!(
            "initial speed must be non-negative, got {}",
            inputs.initial_speed
        )));
    }
    if inputs.time_to_split < 0.0 {
        return Err(SimulationError::InvalidParameter(format!(
            "time to split must be non-negative, got {}",
            inputs.time_to_split
        )));
    }
    if inputs.split_force < 0.0 {
        return Err(SimulationError::InvalidParameter(format!(
            "split force must be non-negative, got {}",
            inputs.split_force
        )));
    }
    if inputs.gravity == 0.0 {
        return Err(SimulationError::InvalidParameter(
            "gravity must be nonzero to solve for the impact time".to_string(),
        ));
    }
    Ok(())
}

/// Final impacts of all three sub-projectiles at the target elevation.
///
/// Fast path for scoring: the full physical derivation without arc sampling.
pub fn simulate_impacts(inputs: &LaunchInputs) -> Result<ImpactSet, SimulationError> {
    validate(inputs)?;

    let split = state_at_split(inputs);
    let main = boost_along_track(split.velocity, inputs.split_force)?;
    let velocities = diverge(main, inputs.split_angle_deg);

    let mut times = [0.0; 3];
    let mut positions = [Vector2::zeros(); 3];
    for (i, velocity) in velocities.iter().enumerate() {
        let impact = impact_for(
            split.position,
            *velocity,
            inputs.gravity,
            inputs.target_elevation,
        )?;
        times[i] = impact.time;
        positions[i] = impact.position;
    }

    Ok(ImpactSet { times, positions })
}

/// Densely sampled arcs for all four flight segments.
///
/// Identical physical derivation to [`simulate_impacts`], plus sampling of
/// the pre-split arc and the three post-split arcs at `sample_step` second
/// intervals. The last point of each post-split arc is the corresponding
/// impact position.
pub fn simulate_full_arcs(
    inputs: &LaunchInputs,
    sample_step: f64,
) -> Result<SampledArcs, SimulationError> {
    validate(inputs)?;
    if sample_step <= 0.0 {
        return Err(SimulationError::InvalidParameter(format!(
            "sample step must be positive, got {sample_step}"
        )));
    }

    let v0 = launch_velocity(inputs.initial_speed, inputs.launch_angle_deg);
    let split = state_at_split(inputs);
    let main = boost_along_track(split.velocity, inputs.split_force)?;
    let velocities = diverge(main, inputs.split_angle_deg);

    let pre_split = sample_arc(
        inputs.start_position,
        split.position,
        v0,
        inputs.gravity,
        inputs.time_to_split,
        sample_step,
    );

    let mut post_split: [Vec<Vector2<f64>>; 3] = [Vec::new(), Vec::new(), Vec::new()];
    for (i, velocity) in velocities.iter().enumerate() {
        let impact = impact_for(
            split.position,
            *velocity,
            inputs.gravity,
            inputs.target_elevation,
        )?;
        post_split[i] = sample_arc(
            split.position,
            impact.position,
            *velocity,
            inputs.gravity,
            impact.time,
            sample_step,
        );
    }

    Ok(SampledArcs {
        pre_split,
        post_split,
    })
}
