//! Scene content for the viewport.
//!
//! The tile grid lives under a single content group whose transform is the
//! only thing touch gestures change.

/// Checkerboard tile grid, the content group, and transform syncing.
pub mod grid;

pub use grid::{spawn_tile_grid, sync_content_transform};
