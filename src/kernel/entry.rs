//! New notebook entries: timestamped file names and initial contents.
//!
//! Two entries created within the same clock second share a file name; the later
//! write replaces the earlier one.

use crate::kernel::error::{AppError, Result};
use crate::kernel::notebook::{BOOKMARK_SUFFIX, NOTE_SUFFIX};
use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};

pub const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Note,
    Bookmark,
}

impl EntryKind {
    pub fn heading(self) -> &'static str {
        match self {
            EntryKind::Note => "Add Note",
            EntryKind::Bookmark => "Add Bookmark",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            EntryKind::Note => "Enter note title...",
            EntryKind::Bookmark => "Enter bookmark URL...",
        }
    }

    pub fn file_name(self, at: NaiveDateTime) -> String {
        let stamp = at.format(TIMESTAMP_FORMAT);
        match self {
            EntryKind::Note => format!("{stamp}{NOTE_SUFFIX}"),
            EntryKind::Bookmark => format!("{stamp}{BOOKMARK_SUFFIX}{NOTE_SUFFIX}"),
        }
    }

    pub fn contents(self, value: &str) -> String {
        match self {
            EntryKind::Note => format!("# {value}\n"),
            EntryKind::Bookmark => format!("{value}\n"),
        }
    }
}

/// Writes a new entry into `dir`, creating the notebook directory first.
pub fn write_entry(dir: &Path, kind: EntryKind, value: &str, at: NaiveDateTime) -> Result<PathBuf> {
    std::fs::create_dir_all(dir).map_err(|source| AppError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = dir.join(kind.file_name(at));
    std::fs::write(&path, kind.contents(value)).map_err(|source| AppError::WriteEntry {
        path: path.clone(),
        source,
    })?;

    tracing::info!(path = %path.display(), kind = ?kind, "entry written");
    Ok(path)
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/entry.rs"]
mod tests;
