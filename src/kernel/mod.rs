//! Terminal-independent core: state, actions, reducer and the notebook store.

pub mod action;
pub mod effect;
pub mod entry;
pub mod error;
pub mod input_field;
pub mod list;
pub mod notebook;
pub mod services;
pub mod state;
pub mod store;

pub use action::{Action, InputAction, ListAction};
pub use effect::Effect;
pub use entry::EntryKind;
pub use error::{AppError, Result};
pub use notebook::{list_notes, NoteItem, NotebookPaths};
pub use state::{AppState, ErrorNotice, Mode};
pub use store::{DispatchResult, Store};
