//! Logging facilities for dropkit.
//!
//! dropkit instruments its state transitions with the `tracing` crate.
//! The library never installs a subscriber; to see logs, install one in
//! your application:
//!
//! ```ignore
//! use tracing_subscriber;
//!
//! fn main() {
//!     tracing_subscriber::fmt::init();
//!
//!     // Your application code...
//! }
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem, e.g.
/// `RUST_LOG=dropkit::selection=debug`.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "dropkit_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "dropkit_core::signal";
    /// Selection state machine target.
    pub const SELECTION: &str = "dropkit::selection";
    /// Keyboard navigation target.
    pub const KEYBOARD: &str = "dropkit::keyboard";
    /// Async items binder target.
    pub const BINDER: &str = "dropkit::binder";
    /// Accessibility derivation target.
    pub const ACCESSIBILITY: &str = "dropkit::accessibility";
}
