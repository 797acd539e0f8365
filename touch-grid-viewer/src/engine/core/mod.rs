//! Core application setup and state management.
//!
//! Handles application lifecycle, window configuration, runtime configuration
//! loading, and plugin initialisation for both native and WASM targets.

/// Application setup and plugin configuration for the Bevy engine.
///
/// Creates the main app with state-gated loading and runtime systems.
pub mod app_setup;

/// Application state machine: loading the viewer config, then running.
pub mod app_state;

/// `viewer.json` runtime configuration asset and its loader.
pub mod config;

/// Platform-specific window configuration for native and WASM builds.
///
/// Configures canvas integration for web targets and vsync settings.
pub mod window_config;
