use crate::kernel::entry::EntryKind;
use crate::kernel::input_field::InputFieldState;
use crate::kernel::list::NoteListState;
use crate::kernel::notebook::NoteItem;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Browsing,
    EnteringNoteTitle,
    EnteringBookmarkUrl,
}

impl Mode {
    pub fn entering(kind: EntryKind) -> Self {
        match kind {
            EntryKind::Note => Mode::EnteringNoteTitle,
            EntryKind::Bookmark => Mode::EnteringBookmarkUrl,
        }
    }

    pub fn entry_kind(self) -> Option<EntryKind> {
        match self {
            Mode::Browsing => None,
            Mode::EnteringNoteTitle => Some(EntryKind::Note),
            Mode::EnteringBookmarkUrl => Some(EntryKind::Bookmark),
        }
    }
}

/// A failure shown in place of the main view until the user dismisses it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorNotice {
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub notebook_dir: PathBuf,
    pub mode: Mode,
    pub list: NoteListState,
    pub input: InputFieldState,
    pub error: Option<ErrorNotice>,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(notebook_dir: PathBuf, notes: Vec<NoteItem>) -> Self {
        Self {
            notebook_dir,
            mode: Mode::Browsing,
            list: NoteListState::new(notes),
            input: InputFieldState::default(),
            error: None,
            should_quit: false,
        }
    }
}
