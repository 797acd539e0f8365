//! Viewport camera for the tile grid scene.
//!
//! Spawns the configured orthographic or perspective camera and exposes it to
//! the gesture code as a source of world rays.

/// Camera spawning and the bevy-backed `RaySource`.
pub mod viewport_camera;

pub use viewport_camera::{CameraRays, ViewportCamera};
