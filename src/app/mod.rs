//! Application shell: routes input into the store and carries out the effects it
//! returns (file writes, notebook rescans, editor and viewer handoffs).

use crate::core::InputEvent;
use crate::kernel::entry::write_entry;
use crate::kernel::services::{Clock, ProcessRunner, ProgramSpec, Programs};
use crate::kernel::{list_notes, Action, AppError, AppState, Effect, Result, Store};
use ratatui::Frame;
use std::collections::VecDeque;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

mod input;
pub(crate) mod render;
pub mod theme;

pub use theme::UiTheme;

pub struct App {
    store: Store,
    theme: UiTheme,
    programs: Programs,
    runner: Box<dyn ProcessRunner>,
    clock: Box<dyn Clock>,
    redraw_requested: bool,
}

impl App {
    pub fn new(
        notebook_dir: PathBuf,
        theme: UiTheme,
        programs: Programs,
        runner: Box<dyn ProcessRunner>,
        clock: Box<dyn Clock>,
    ) -> Self {
        let notes = list_notes(&notebook_dir);
        tracing::info!(
            notebook = %notebook_dir.display(),
            notes = notes.len(),
            editor = %programs.editor.program,
            viewer = %programs.viewer.program,
            "session started"
        );
        Self {
            store: Store::new(AppState::new(notebook_dir, notes)),
            theme,
            programs,
            runner,
            clock,
            redraw_requested: false,
        }
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn should_quit(&self) -> bool {
        self.store.state().should_quit
    }

    /// True once after a child process has owned the terminal.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    /// Returns whether anything visible changed.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        if !event.is_actionable() {
            return false;
        }
        match input::action_for(self.store.state(), event) {
            Some(action) => self.dispatch(action),
            None => false,
        }
    }

    pub fn dispatch(&mut self, action: Action) -> bool {
        let mut pending = VecDeque::from([action]);
        let mut changed = false;

        while let Some(action) = pending.pop_front() {
            let result = self.store.dispatch(action);
            changed |= result.state_changed;
            for effect in result.effects {
                match self.run_effect(effect) {
                    Ok(Some(next)) => pending.push_back(next),
                    Ok(None) => {}
                    Err(err) => {
                        tracing::warn!(error = %err, "effect failed");
                        pending.push_back(Action::EffectFailed(err.to_string()));
                    }
                }
            }
        }

        changed
    }

    pub fn render(&self, frame: &mut Frame) {
        render::render(self.store.state(), &self.theme, frame);
    }

    fn run_effect(&mut self, effect: Effect) -> Result<Option<Action>> {
        match effect {
            Effect::CreateEntry { dir, kind, value } => {
                let path = write_entry(&dir, kind, &value, self.clock.now())?;
                let editor = self.programs.editor.clone();
                self.launch(&editor, &path)?;
                Ok(Some(self.reload()))
            }
            Effect::OpenInEditor(path) => {
                let editor = self.programs.editor.clone();
                self.launch(&editor, &path)?;
                Ok(Some(self.reload()))
            }
            Effect::OpenInViewer(path) => {
                let viewer = self.programs.viewer.clone();
                self.launch(&viewer, &path)?;
                Ok(None)
            }
            Effect::ReloadNotes => Ok(Some(self.reload())),
        }
    }

    fn reload(&self) -> Action {
        Action::NotesLoaded(list_notes(&self.store.state().notebook_dir))
    }

    fn launch(&mut self, spec: &ProgramSpec, path: &Path) -> Result<()> {
        let mut args: Vec<OsString> = spec.args.iter().map(OsString::from).collect();
        args.push(path.as_os_str().to_os_string());

        tracing::info!(program = %spec.program, path = %path.display(), "handing terminal to child");
        let status = self.runner.run(&spec.program, &args);
        self.redraw_requested = true;

        let status = status.map_err(|source| AppError::Launch {
            program: spec.program.clone(),
            source,
        })?;
        if !status.success() {
            return Err(AppError::ExitStatus {
                program: spec.program.clone(),
                status,
            });
        }
        Ok(())
    }
}

#[cfg(all(test, unix))]
#[path = "../../tests/unit/app/app.rs"]
mod tests;
