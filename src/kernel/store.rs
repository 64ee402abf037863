use crate::kernel::{Action, AppState, Effect, ErrorNotice, Mode};

#[derive(Debug, Default)]
pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn unchanged() -> Self {
        Self::default()
    }

    fn changed(state_changed: bool) -> Self {
        Self {
            effects: Vec::new(),
            state_changed,
        }
    }

    fn effect(effect: Effect, state_changed: bool) -> Self {
        Self {
            effects: vec![effect],
            state_changed,
        }
    }
}

/// Owns the application state. All transitions go through [`Store::dispatch`];
/// anything touching the filesystem or a child process comes back as an [`Effect`].
pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::Quit => {
                self.state.should_quit = true;
                DispatchResult::changed(true)
            }
            Action::NotesLoaded(notes) => {
                tracing::debug!(count = notes.len(), "notes loaded");
                self.state.list.set_items(notes);
                DispatchResult::changed(true)
            }
            Action::Resize { width, height } => {
                self.state.list.set_size(width, height);
                DispatchResult::changed(true)
            }
            Action::EffectFailed(message) => {
                self.leave_entry();
                self.state.error = Some(ErrorNotice { message });
                DispatchResult::changed(true)
            }
            Action::DismissError => {
                if self.state.error.take().is_none() {
                    return DispatchResult::unchanged();
                }
                DispatchResult::effect(Effect::ReloadNotes, true)
            }
            action if self.state.error.is_some() => {
                tracing::trace!(?action, "ignored while an error is shown");
                DispatchResult::unchanged()
            }
            Action::BeginEntry(kind) => {
                if self.state.mode != Mode::Browsing {
                    return DispatchResult::unchanged();
                }
                self.state.mode = Mode::entering(kind);
                self.state.input.reset();
                self.state.input.focus(kind.placeholder());
                tracing::debug!(mode = ?self.state.mode, "entry started");
                DispatchResult::changed(true)
            }
            Action::EditSelected => match self.browsing_selection() {
                Some(path) => DispatchResult::effect(Effect::OpenInEditor(path), false),
                None => DispatchResult::unchanged(),
            },
            Action::ViewSelected => match self.browsing_selection() {
                Some(path) => DispatchResult::effect(Effect::OpenInViewer(path), false),
                None => DispatchResult::unchanged(),
            },
            Action::List(list_action) => {
                if self.state.mode != Mode::Browsing {
                    return DispatchResult::unchanged();
                }
                DispatchResult::changed(self.state.list.apply(list_action))
            }
            Action::Input(input_action) => {
                if self.state.mode == Mode::Browsing {
                    return DispatchResult::unchanged();
                }
                DispatchResult::changed(self.state.input.apply(input_action))
            }
            Action::CancelEntry => {
                if self.state.mode == Mode::Browsing {
                    return DispatchResult::unchanged();
                }
                self.leave_entry();
                DispatchResult::changed(true)
            }
            Action::CommitEntry => {
                let Some(kind) = self.state.mode.entry_kind() else {
                    return DispatchResult::unchanged();
                };
                let value = self.state.input.value().to_string();
                self.leave_entry();
                if value.is_empty() {
                    return DispatchResult::changed(true);
                }
                DispatchResult::effect(
                    Effect::CreateEntry {
                        dir: self.state.notebook_dir.clone(),
                        kind,
                        value,
                    },
                    true,
                )
            }
        }
    }

    fn browsing_selection(&self) -> Option<std::path::PathBuf> {
        if self.state.mode != Mode::Browsing {
            return None;
        }
        self.state.list.selected_item().map(|item| item.path.clone())
    }

    fn leave_entry(&mut self) {
        if self.state.mode != Mode::Browsing {
            tracing::debug!(mode = ?self.state.mode, "entry finished");
        }
        self.state.mode = Mode::Browsing;
        self.state.input.reset();
        self.state.input.blur();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
