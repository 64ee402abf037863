//! nbgo - terminal notebook of Markdown notes and bookmarks.
//!
//! Modules:
//! - kernel: notebook store, state machine, services (processes, clock, settings)
//! - core: terminal input events
//! - app: application shell (input routing, effects, rendering)
//! - tui: terminal setup/restore, editor handoff, event loop
//! - cli: argument parsing

pub mod cli;
pub mod kernel;

#[cfg(feature = "tui")]
pub mod app;
#[cfg(feature = "tui")]
pub mod core;
#[cfg(feature = "tui")]
pub mod tui;
