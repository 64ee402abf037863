//! Notebook store: where notebooks live, which one is current, and what notes it holds.
//!
//! Layout under the home directory:
//! - `~/.nbgo/.current` holds the absolute path of the active notebook;
//! - `~/.nbgo/<name>/` is a notebook directory;
//! - notebook entries are flat `*.md` / `*.bookmark.md` files.

use crate::kernel::error::{AppError, Result};
use std::borrow::Cow;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

const NOTEBOOKS_DIR: &str = ".nbgo";
const POINTER_FILE: &str = ".current";
const SETTINGS_FILE: &str = "settings.json";
pub const DEFAULT_NOTEBOOK: &str = "default";

pub const NOTE_SUFFIX: &str = ".md";
pub const BOOKMARK_SUFFIX: &str = ".bookmark";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteItem {
    pub path: PathBuf,
    pub title: String,
}

/// Home directory from the environment. A missing home degrades to an empty
/// path, which makes every notebook path relative to the working directory.
pub fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
        .unwrap_or_default()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotebookPaths {
    root: PathBuf,
}

impl NotebookPaths {
    pub fn from_env() -> Self {
        Self::with_home(&home_dir())
    }

    pub fn with_home(home: &Path) -> Self {
        Self {
            root: home.join(NOTEBOOKS_DIR),
        }
    }

    pub fn pointer_path(&self) -> PathBuf {
        self.root.join(POINTER_FILE)
    }

    pub fn settings_path(&self) -> PathBuf {
        self.root.join(SETTINGS_FILE)
    }

    pub fn default_notebook(&self) -> PathBuf {
        self.root.join(DEFAULT_NOTEBOOK)
    }

    pub fn notebook(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Never fails: an absent, unreadable or blank pointer yields the default notebook.
    pub fn resolve_current(&self) -> PathBuf {
        let pointer = self.pointer_path();
        match std::fs::read(&pointer) {
            Ok(contents) => {
                let current = trim_ascii_whitespace(&contents);
                if current.is_empty() {
                    tracing::debug!(pointer = %pointer.display(), "empty notebook pointer");
                    self.default_notebook()
                } else {
                    path_from_bytes(current)
                }
            }
            Err(err) => {
                tracing::debug!(pointer = %pointer.display(), error = %err, "no notebook pointer");
                self.default_notebook()
            }
        }
    }

    /// Creates `<root>/<name>` if needed and records it as the current notebook.
    pub fn switch_notebook(&self, name: &str) -> Result<PathBuf> {
        validate_notebook_name(name)?;

        let dir = self.notebook(name);
        std::fs::create_dir_all(&dir).map_err(|source| AppError::CreateDir {
            path: dir.clone(),
            source,
        })?;

        let pointer = self.pointer_path();
        std::fs::write(&pointer, path_bytes(&dir)).map_err(|source| {
            AppError::WritePointer {
                path: pointer.clone(),
                source,
            }
        })?;

        tracing::info!(notebook = %dir.display(), "switched notebook");
        Ok(dir)
    }
}

fn validate_notebook_name(name: &str) -> Result<()> {
    let name_ok = !name.trim().is_empty()
        && name != "."
        && name != ".."
        && !name.contains('/')
        && !name.contains('\\');
    if name_ok {
        Ok(())
    } else {
        Err(AppError::InvalidNotebookName(name.to_string()))
    }
}

fn trim_ascii_whitespace(bytes: &[u8]) -> &[u8] {
    let start = bytes
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(bytes.len());
    let end = bytes
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map_or(start, |idx| idx + 1);
    &bytes[start..end]
}

/// Pointer contents are raw path bytes so non-UTF-8 paths survive a round trip.
#[cfg(unix)]
fn path_bytes(path: &Path) -> Cow<'_, [u8]> {
    use std::os::unix::ffi::OsStrExt;
    Cow::Borrowed(path.as_os_str().as_bytes())
}

#[cfg(not(unix))]
fn path_bytes(path: &Path) -> Cow<'_, [u8]> {
    Cow::Owned(path.to_string_lossy().into_owned().into_bytes())
}

#[cfg(unix)]
fn path_from_bytes(bytes: &[u8]) -> PathBuf {
    use std::os::unix::ffi::OsStrExt;
    PathBuf::from(OsStr::from_bytes(bytes))
}

#[cfg(not(unix))]
fn path_from_bytes(bytes: &[u8]) -> PathBuf {
    PathBuf::from(String::from_utf8_lossy(bytes).into_owned())
}

/// Display title for a notebook file name, or `None` if it is not a note.
/// The suffix check runs on raw bytes; the title is lossily decoded.
pub fn note_title(file_name: &OsStr) -> Option<String> {
    let stem = file_name
        .as_encoded_bytes()
        .strip_suffix(NOTE_SUFFIX.as_bytes())?;
    let stem = stem
        .strip_suffix(BOOKMARK_SUFFIX.as_bytes())
        .unwrap_or(stem);
    Some(String::from_utf8_lossy(stem).into_owned())
}

/// Non-recursive scan in directory enumeration order. An unreadable directory is an
/// empty notebook, not an error.
pub fn list_notes(dir: &Path) -> Vec<NoteItem> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::debug!(dir = %dir.display(), error = %err, "notebook not readable");
            return Vec::new();
        }
    };

    let mut items = Vec::new();
    for entry in entries.flatten() {
        if let Some(title) = note_title(&entry.file_name()) {
            items.push(NoteItem {
                path: entry.path(),
                title,
            });
        }
    }
    items
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/notebook.rs"]
mod tests;
