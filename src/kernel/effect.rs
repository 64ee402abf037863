use crate::kernel::entry::EntryKind;
use std::path::PathBuf;

/// Side effects requested by the store; executed by the application shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Write a new entry, open it in the editor, then rescan the notebook.
    CreateEntry {
        dir: PathBuf,
        kind: EntryKind,
        value: String,
    },
    /// Edit an existing entry, then rescan the notebook.
    OpenInEditor(PathBuf),
    OpenInViewer(PathBuf),
    ReloadNotes,
}
