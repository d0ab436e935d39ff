// Closed-form constant-acceleration primitives. All 2D motion decomposes per
// axis: horizontal acceleration is always zero, vertical acceleration is the
// signed gravity supplied by the caller.

use nalgebra::Vector2;

use crate::sim_api::SimulationError;

/// Scalar displacement under constant acceleration.
pub fn displacement(p0: f64, v0: f64, a: f64, t: f64) -> f64 {
    p0 + v0 * t + 0.5 * a * t * t
}

/// Scalar velocity under constant acceleration.
pub fn speed_after(v0: f64, a: f64, t: f64) -> f64 {
    v0 + a * t
}

/// Decompose a launch speed and a degree angle into velocity components.
pub fn launch_velocity(speed: f64, angle_deg: f64) -> Vector2<f64> {
    let angle_rad = angle_deg.to_radians();
    Vector2::new(speed * angle_rad.cos(), speed * angle_rad.sin())
}

/// Position after `t` seconds of unpowered flight from `start`.
pub fn position_after(
    start: Vector2<f64>,
    velocity: Vector2<f64>,
    gravity: f64,
    t: f64,
) -> Vector2<f64> {
    Vector2::new(
        displacement(start.x, velocity.x, 0.0, t),
        displacement(start.y, velocity.y, gravity, t),
    )
}

/// Velocity after `t` seconds of unpowered flight.
pub fn velocity_after(velocity: Vector2<f64>, gravity: f64, t: f64) -> Vector2<f64> {
    Vector2::new(
        speed_after(velocity.x, 0.0, t),
        speed_after(velocity.y, gravity, t),
    )
}

/// Full-circle signed angle of a vector.
pub fn vector_angle(x: f64, y: f64) -> f64 {
    y.atan2(x)
}

/// Forward-in-time instant at which a vertical trajectory starting at `y0`
/// with vertical speed `v0y` under acceleration `a` reaches `y_target`.
///
/// Solves `0 = y0 + v0y*t + 0.5*a*t² - y_target` for the physically relevant
/// root. A negative discriminant means the trajectory never reaches the
/// target elevation.
pub fn time_to_elevation(
    v0y: f64,
    a: f64,
    y0: f64,
    y_target: f64,
) -> Result<f64, SimulationError> {
    if a == 0.0 {
        return Err(SimulationError::InvalidParameter(
            "acceleration must be nonzero to solve for time at elevation".to_string(),
        ));
    }

    let discriminant = v0y * v0y + 2.0 * a * (y_target - y0);
    if discriminant < 0.0 {
        return Err(SimulationError::UnreachableTarget);
    }

    Ok((-v0y - discriminant.sqrt()) / a)
}
