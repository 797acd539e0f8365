/// Shared tuning values for the viewer scene and gesture handling
pub mod gestures;
pub mod render_settings;
