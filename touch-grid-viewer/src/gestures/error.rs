use thiserror::Error;

/// Failures raised while turning touch input into a world transform change.
///
/// Plane misses and unknown touch identifiers are not errors; they surface as
/// `None` and simply skip the frame.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GestureError {
    #[error("invalid scale factor {0}: must be finite and greater than zero")]
    InvalidScale(f64),

    #[error("pinch produced a non-finite {what}")]
    NonFinite { what: &'static str },
}
