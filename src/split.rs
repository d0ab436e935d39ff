// Split-event resolver: the instant a single trajectory is replaced by three
// independent sub-projectiles with related but distinct velocities.

use nalgebra::Vector2;

use crate::constants::MIN_VELOCITY_THRESHOLD;
use crate::kinematics::vector_angle;
use crate::sim_api::SimulationError;

/// Apply the split impulse along the current direction of travel.
///
/// The impulse acts along the existing velocity direction, not a new one: the
/// unit vector of `velocity` is scaled by the impulse magnitude and added
/// back, so the post-split speed is the original speed plus the impulse.
pub fn boost_along_track(
    velocity: Vector2<f64>,
    impulse: f64,
) -> Result<Vector2<f64>, SimulationError> {
    let speed = velocity.norm();
    if speed < MIN_VELOCITY_THRESHOLD {
        return Err(SimulationError::DegenerateSplit);
    }

    Ok(velocity + velocity / speed * impulse)
}

/// Redistribute the main post-split velocity into the ordered triple
/// (main, +angle, −angle).
///
/// Direction-only redistribution: the two deviated vectors are the main
/// vector's magnitude re-expressed at `θ ± half_angle`, where `θ` is the main
/// vector's own angle, so all three magnitudes are equal.
pub fn diverge(main: Vector2<f64>, half_angle_deg: f64) -> [Vector2<f64>; 3] {
    let speed = main.norm();
    let origin_angle = vector_angle(main.x, main.y);
    let half_angle = half_angle_deg.to_radians();

    let plus = origin_angle + half_angle;
    let minus = origin_angle - half_angle;

    [
        main,
        Vector2::new(speed * plus.cos(), speed * plus.sin()),
        Vector2::new(speed * minus.cos(), speed * minus.sin()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::NUMERICAL_TOLERANCE;

    #[test]
    fn test_boost_adds_impulse_to_speed() {
        let velocity = Vector2::new(10.0, -14.715);
        let boosted = boost_along_track(velocity, 1.5).unwrap();
        assert!((boosted.norm() - (velocity.norm() + 1.5)).abs() < NUMERICAL_TOLERANCE);

        // Direction is preserved
        let cross = velocity.x * boosted.y - velocity.y * boosted.x;
        assert!(cross.abs() < 1e-9);
    }

    #[test]
    fn test_boost_zero_velocity_is_degenerate() {
        let result = boost_along_track(Vector2::new(0.0, 0.0), 1.5);
        assert_eq!(result, Err(SimulationError::DegenerateSplit));
    }

    #[test]
    fn test_diverge_magnitudes_equal() {
        let main = Vector2::new(10.843, -15.956);
        let [v0, v1, v2] = diverge(main, 10.0);
        assert!((v0.norm() - main.norm()).abs() < NUMERICAL_TOLERANCE);
        assert!((v1.norm() - main.norm()).abs() < NUMERICAL_TOLERANCE);
        assert!((v2.norm() - main.norm()).abs() < NUMERICAL_TOLERANCE);
    }

    #[test]
    fn test_diverge_zero_angle_identical() {
        let main = Vector2::new(3.0, 4.0);
        let [v0, v1, v2] = diverge(main, 0.0);
        assert!((v1 - v0).norm() < NUMERICAL_TOLERANCE);
        assert!((v2 - v0).norm() < NUMERICAL_TOLERANCE);
    }

    #[test]
    fn test_diverge_symmetric_about_main() {
        let main = Vector2::new(5.0, 0.0);
        let [_, plus, minus] = diverge(main, 30.0);
        // Deviations mirror across the main line
        assert!((plus.x - minus.x).abs() < NUMERICAL_TOLERANCE);
        assert!((plus.y + minus.y).abs() < NUMERICAL_TOLERANCE);
        assert!(plus.y > 0.0);
    }

    #[test]
    fn test_diverge_straight_back_at_180() {
        let main = Vector2::new(5.0, 0.0);
        let [_, plus, minus] = diverge(main, 180.0);
        assert!((plus.x + 5.0).abs() < 1e-9);
        assert!((minus.x + 5.0).abs() < 1e-9);
    }
}
