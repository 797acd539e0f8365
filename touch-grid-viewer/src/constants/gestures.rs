/// Rays with a smaller vertical direction component count as parallel to the ground
pub const RAY_PARALLEL_EPSILON: f64 = 1e-9;

/// Default world height of the invisible reference plane used for touch projection
pub const REFERENCE_PLANE_HEIGHT: f64 = 0.0;

/// Touch identifier reserved for the left mouse button when it emulates a finger
pub const MOUSE_TOUCH_ID: u64 = u64::MAX;

/// Seconds a gesture error banner stays on screen
pub const NOTIFICATION_SECONDS: f32 = 4.0;

/// Previous inter-finger distances at or below this skip the pinch frame instead of dividing by ~0
pub const MIN_PINCH_DISTANCE: f64 = 1e-9;
