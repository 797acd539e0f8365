//! JSON-RPC 2.0 communication layer for an embedding web page.
//!
//! When the viewer runs in an iframe, it reports gesture results to the parent
//! window over `postMessage` and answers state queries. Native builds keep the
//! same systems but drop outgoing messages.
//!
//! ## Message Flow
//!
//! ```text
//! Parent page  <──postMessage──>  Bevy (iframe)
//!      │                                │
//!      ├─ Request (with ID) ──────────> │
//!      │                                ├─ Process request
//!      │ <───────── Response (with ID) ─┤
//!      │                                │
//!      │ <──── Notification (no ID) ────┤
//! ```
//!
//! ## Methods
//!
//! - `get_world_transform`: current content group position and scale
//!
//! Any other method answers `-32601` (method not found).
//!
//! ## Notifications
//!
//! - `world_transform_changed`: `{ position: [x, y, z], scale }` after a gesture
//!   moved the content group
//! - `gesture_error`: `{ message }` when a gesture produced non-finite results
//!
//! ## Error Handling
//!
//! Standard JSON-RPC 2.0 error codes:
//! - `-32601`: Method not found
//! - `-32603`: Internal error

/// JSON-RPC 2.0 bidirectional communication with the parent page.
///
/// Handles request-response patterns, notifications, and WASM message listeners.
pub mod web_rpc;
