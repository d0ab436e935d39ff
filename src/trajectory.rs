// Trajectory assembler: drives the kinematics primitives across the split
// event to produce impacts and sampled arcs.

use nalgebra::Vector2;

use crate::kinematics::{
    displacement, launch_velocity, position_after, time_to_elevation, velocity_after,
};
use crate::sim_api::{LaunchInputs, SimulationError};

/// Projectile state at the split instant.
#[derive(Debug, Clone)]
pub struct SplitState {
    pub position: Vector2<f64>,
    pub velocity: Vector2<f64>,
}

/// Time of flight and landing position of a single sub-projectile.
#[derive(Debug, Clone)]
pub struct Impact {
    pub time: f64,
    pub position: Vector2<f64>,
}

/// State at the split instant, derived from the launch inputs.
///
/// The time to split is taken as supplied, never solved for; callers working
/// in fractions of total flight time pre-convert via `time_to_elevation`.
pub fn state_at_split(inputs: &LaunchInputs) -> SplitState {
    let v0 = launch_velocity(inputs.initial_speed, inputs.launch_angle_deg);
    SplitState {
        position: position_after(inputs.start_position, v0, inputs.gravity, inputs.time_to_split),
        velocity: velocity_after(v0, inputs.gravity, inputs.time_to_split),
    }
}

/// Land a single sub-projectile on the target elevation.
pub fn impact_for(
    origin: Vector2<f64>,
    velocity: Vector2<f64>,
    gravity: f64,
    target_elevation: f64,
) -> Result<Impact, SimulationError> {
    let time = time_to_elevation(velocity.y, gravity, origin.y, target_elevation)?;
    let landing_x = displacement(origin.x, velocity.x, 0.0, time);

    Ok(Impact {
        time,
        position: Vector2::new(landing_x, target_elevation),
    })
}

/// Sample one ballistic arc at a fixed time step.
///
/// Sample count is `floor(floor(flight_time)/step) + 2`. Both endpoints are
/// inserted exactly rather than recomputed from the loop index, so the first
/// and last samples match the analytic endpoints for any step size; interior
/// sample `i` is the analytic position at `i * step`.
pub fn sample_arc(
    start: Vector2<f64>,
    end: Vector2<f64>,
    velocity: Vector2<f64>,
    gravity: f64,
    flight_time: f64,
    step: f64,
) -> Vec<Vector2<f64>> {
    let count = (flight_time.floor() / step).floor() as usize + 2;

    let mut points = vec![Vector2::zeros(); count];
    points[0] = start;
    points[count - 1] = end;
    for (i, point) in points.iter_mut().enumerate().take(count - 1).skip(1) {
        *point = position_after(start, velocity, gravity, i as f64 * step);
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> LaunchInputs {
        LaunchInputs::default()
    }

    #[test]
    fn test_state_at_split_horizontal_launch() {
        // Horizontal launch at 10 unit/s: after 1.5 s the projectile has
        // travelled 15 horizontally and dropped 0.5*9.81*1.5².
        let state = state_at_split(&scenario());
        assert!((state.position.x - 15.0).abs() < 1e-9);
        assert!((state.position.y - (50.0 - 0.5 * 9.81 * 2.25)).abs() < 1e-9);
        assert!((state.velocity.x - 10.0).abs() < 1e-9);
        assert!((state.velocity.y - (-9.81 * 1.5)).abs() < 1e-9);
    }

    #[test]
    fn test_impact_lands_on_target_elevation() {
        let impact = impact_for(Vector2::new(0.0, 50.0), Vector2::new(10.0, 0.0), -9.81, 0.0)
            .unwrap();
        assert!(impact.time > 0.0);
        assert_eq!(impact.position.y, 0.0);
        assert!((impact.position.x - 10.0 * impact.time).abs() < 1e-9);
    }

    #[test]
    fn test_sample_arc_exact_endpoints() {
        let start = Vector2::new(0.0, 50.0);
        let velocity = Vector2::new(10.0, 0.0);
        let impact = impact_for(start, velocity, -9.81, 0.0).unwrap();

        for step in [0.01, 0.25, 1.0, 10.0] {
            let points = sample_arc(start, impact.position, velocity, -9.81, impact.time, step);
            assert!(points.len() >= 2);
            assert_eq!(points[0], start);
            assert_eq!(*points.last().unwrap(), impact.position);
        }
    }

    #[test]
    fn test_sample_arc_count() {
        let start = Vector2::new(0.0, 0.0);
        let end = Vector2::new(10.0, 0.0);
        let velocity = Vector2::new(4.0, 0.0);

        // floor(floor(2.5)/0.5) + 2 = 6
        let points = sample_arc(start, end, velocity, -9.81, 2.5, 0.5);
        assert_eq!(points.len(), 6);

        // Step larger than the flight time leaves only the endpoints
        let points = sample_arc(start, end, velocity, -9.81, 2.5, 10.0);
        assert_eq!(points.len(), 2);
    }

    #[test]
    fn test_sample_arc_interior_points_analytic() {
        let start = Vector2::new(0.0, 50.0);
        let velocity = Vector2::new(10.0, 0.0);
        let points = sample_arc(start, Vector2::new(30.0, 5.855), velocity, -9.81, 3.0, 1.0);

        // Interior sample i sits at the analytic position for t = i*step
        assert!((points[1] - position_after(start, velocity, -9.81, 1.0)).norm() < 1e-12);
        assert!((points[2] - position_after(start, velocity, -9.81, 2.0)).norm() < 1e-12);
    }
}
