use crate::kernel::NotebookPaths;
use std::io::Write;

/// What the binary was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// `nbgo use <name>`: select (and create) a notebook, then exit.
    UseNotebook(String),
    /// Anything else, including no arguments, opens the interactive list.
    Interactive,
}

pub fn parse_args<I, S>(args: I) -> CliCommand
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let args: Vec<S> = args.into_iter().collect();
    match args.as_slice() {
        [command, name] if command.as_ref() == "use" => {
            CliCommand::UseNotebook(name.as_ref().to_string())
        }
        _ => CliCommand::Interactive,
    }
}

/// Runs `nbgo use <name>`, reporting the outcome on `out`. Returns the exit code.
pub fn use_notebook(paths: &NotebookPaths, name: &str, out: &mut impl Write) -> u8 {
    let (code, message) = match paths.switch_notebook(name) {
        Ok(_) => (0, format!("Switched to notebook: {name}")),
        Err(err) => {
            tracing::warn!(name, error = %err, "notebook switch failed");
            (1, err.to_string())
        }
    };
    if let Err(err) = writeln!(out, "{message}") {
        tracing::debug!(error = %err, "could not report notebook switch");
    }
    code
}

#[cfg(test)]
#[path = "../tests/unit/cli.rs"]
mod tests;
