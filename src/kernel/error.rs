//! Error type shared by the notebook store, entry creation and process handoff.

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Error creating directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error setting current notebook {}: {source}", path.display())]
    WritePointer {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error writing {}: {source}", path.display())]
    WriteEntry {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Notebook names must stay a single path component under the notebooks root.
    #[error("Invalid notebook name: {0:?}")]
    InvalidNotebookName(String),

    #[error("Failed to launch {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with {status}")]
    ExitStatus { program: String, status: ExitStatus },
}

pub type Result<T> = std::result::Result<T, AppError>;
