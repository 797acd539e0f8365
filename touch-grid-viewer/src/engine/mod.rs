//! Bevy side of the viewer: app wiring, camera, scene, and input systems.
//!
//! The gesture maths lives in `crate::gestures` and knows nothing about bevy
//! beyond its math types. This module feeds it window input and camera rays,
//! then mirrors the resulting `WorldTransform` onto the scene.

/// Viewport camera spawning and camera-backed ray casting.
pub mod camera;

/// App construction, state machine, runtime config, and window setup.
pub mod core;

/// Tile grid content group.
pub mod scene;

/// Per-frame input, gesture, and notification systems.
pub mod systems;
