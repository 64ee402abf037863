//! `~/.nbgo/settings.json`: which programs edit and display notes.

use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_EDITOR: &str = "vi";
pub const DEFAULT_VIEWER: &str = "glow";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub editor: Option<String>,
    pub viewer: Option<String>,
}

pub fn ensure_settings_file(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    if !path.exists() {
        let content =
            serde_json::to_string_pretty(&Settings::default()).unwrap_or_else(|_| "{}".to_string());
        std::fs::write(path, content)?;
    }
    Ok(())
}

/// `None` when the file is missing or malformed.
pub fn load_settings(path: &Path) -> Option<Settings> {
    let data = std::fs::read_to_string(path).ok()?;
    match serde_json::from_str(&data) {
        Ok(settings) => Some(settings),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "ignoring malformed settings");
            None
        }
    }
}

/// A program name plus leading arguments, e.g. `code -w`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl ProgramSpec {
    pub fn parse(value: &str) -> Option<Self> {
        let mut parts = value.split_whitespace();
        let program = parts.next()?.to_string();
        Some(Self {
            program,
            args: parts.map(str::to_string).collect(),
        })
    }

    fn bare(program: &str) -> Self {
        Self {
            program: program.to_string(),
            args: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Programs {
    pub editor: ProgramSpec,
    pub viewer: ProgramSpec,
}

impl Programs {
    /// Editor: settings, then `$VISUAL`, then `$EDITOR`, then `vi`.
    /// Viewer: settings, then `glow`.
    pub fn resolve(settings: &Settings, env: impl Fn(&str) -> Option<String>) -> Self {
        let editor = settings
            .editor
            .as_deref()
            .and_then(ProgramSpec::parse)
            .or_else(|| env("VISUAL").as_deref().and_then(ProgramSpec::parse))
            .or_else(|| env("EDITOR").as_deref().and_then(ProgramSpec::parse))
            .unwrap_or_else(|| ProgramSpec::bare(DEFAULT_EDITOR));
        let viewer = settings
            .viewer
            .as_deref()
            .and_then(ProgramSpec::parse)
            .unwrap_or_else(|| ProgramSpec::bare(DEFAULT_VIEWER));
        Self { editor, viewer }
    }

    pub fn from_env(settings: &Settings) -> Self {
        Self::resolve(settings, |key| std::env::var(key).ok())
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/services/settings.rs"]
mod tests;
