use crate::kernel::entry::EntryKind;
use crate::kernel::notebook::NoteItem;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    BeginEntry(EntryKind),
    EditSelected,
    ViewSelected,
    /// Size of the area the note list is drawn into.
    Resize {
        width: u16,
        height: u16,
    },
    List(ListAction),
    Input(InputAction),
    CancelEntry,
    CommitEntry,
    NotesLoaded(Vec<NoteItem>),
    EffectFailed(String),
    DismissError,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListAction {
    Up,
    Down,
    PageUp,
    PageDown,
    Home,
    End,
    StartFilter,
    FilterInput(char),
    FilterBackspace,
    AcceptFilter,
    ClearFilter,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    Insert(char),
    Paste(String),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
    ClearToStart,
}
