//! Terminal input events shared by the application shell and the event loop.

pub mod event;

pub use event::{InputEvent, Key};
