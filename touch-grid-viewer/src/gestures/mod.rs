//! Touch gesture interpretation for the tile grid viewport.
//!
//! Turns raw multi-touch input into pan and pinch-zoom changes of the content
//! group transform, using camera rays cast against an invisible ground plane to
//! move between screen space and world space.
//!
//! ## Frame Flow
//!
//! ```text
//! TouchInput (bevy)
//!   └─> TouchFrameAssembler        start / move batch / end / cancel
//!       └─> GestureController
//!           ├─> to_ndc             pixels -> [-1, 1]², live viewport size
//!           ├─> intersect          NDC -> camera ray -> ground point
//!           ├─> pan | pinch        delta from previous vs current ground points
//!           └─> TouchTracker       record changed touches
//!       └─> WorldTransform::apply  validated, all-or-nothing
//! ```
//!
//! ## Gestures
//!
//! - **One touch**: pan. The content follows the ground point under the finger
//!   horizontally.
//! - **Two touches**: pinch-zoom. Scale follows the change in finger spread on the
//!   ground; the world point under the previous finger midpoint stays fixed.
//! - **Anything else**: no gesture, tracker bookkeeping only.
//!
//! A ray that misses the ground or a touch without a previous sample skips the
//! frame without touching the transform.

/// Groups per-touch bevy input into browser-style touch events.
pub mod assembler;

/// Gesture classification and per-frame delta computation.
pub mod controller;

pub mod error;

/// Ray casting against the horizontal reference plane.
pub mod intersect;

/// Last known NDC sample for every touch in contact.
pub mod tracker;

/// Pixel to NDC mapping and the camera ray abstraction.
pub mod viewport;

/// Content group position and scale, the state gestures mutate.
pub mod world_transform;

pub use assembler::TouchFrameAssembler;
pub use controller::{GestureController, InputEvent};
pub use error::GestureError;
pub use intersect::ReferencePlane;
pub use viewport::{RaySource, ViewportContext, WorldRay};
pub use world_transform::WorldTransform;
