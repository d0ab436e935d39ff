/// Physical and numerical constants used across the engine

/// Reference gravitational acceleration in unit/s² (y-up frame, pulls down)
pub const DEFAULT_GRAVITY: f64 = -9.81;

/// General numerical tolerance for floating point comparisons
pub const NUMERICAL_TOLERANCE: f64 = 1e-9;

/// Minimum velocity magnitude considered non-degenerate at the split instant
pub const MIN_VELOCITY_THRESHOLD: f64 = 1e-6;
