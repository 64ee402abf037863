//! TUI integration layer (crossterm + ratatui).
//!
//! Kept apart from `kernel` so the state machine never touches the terminal.

pub mod handoff;
pub mod run;
pub mod terminal_guard;

pub use handoff::SuspendingRunner;
pub use run::run_event_loop;
pub use terminal_guard::{TerminalGuard, TerminationSignal};
