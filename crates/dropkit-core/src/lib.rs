//! Core systems for dropkit.
//!
//! This crate provides the infrastructure shared by dropkit's headless
//! controllers:
//!
//! - [`Signal`] - type-safe signal/slot change notification
//! - [`logging`] - `tracing` target constants for log filtering
//!
//! Higher-level behavior (the selection state machine, keyboard
//! navigation, accessibility derivation, async item binding) lives in
//! the `dropkit` crate.

pub mod logging;
pub mod signal;

pub use signal::{ConnectionId, Signal};
