//! Runtime systems driving the viewport from user input.
//!
//! Provides touch gesture processing, desktop mouse emulation of a single
//! touch, and on-screen gesture error notifications.

/// Left mouse button as a synthetic touch for desktop testing.
pub mod mouse_emulation;

/// Non-blocking on-screen banner for gesture failures.
pub mod notifications;

/// Touch input to world transform pipeline, redraw requests, and resize logging.
///
/// Assembles bevy touch events, runs the gesture controller against the live
/// viewport and camera, and applies validated deltas.
pub mod touch_gestures;
