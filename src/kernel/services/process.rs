//! Foreground child processes that take over the controlling terminal.

use std::ffi::OsString;
use std::io;
use std::process::{Command, ExitStatus, Stdio};

pub trait ProcessRunner {
    /// Runs `program` to completion. Blocks the caller for the child's lifetime;
    /// no timeout is applied.
    fn run(&mut self, program: &str, args: &[OsString]) -> io::Result<ExitStatus>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ForegroundRunner;

impl ProcessRunner for ForegroundRunner {
    fn run(&mut self, program: &str, args: &[OsString]) -> io::Result<ExitStatus> {
        tracing::debug!(program, ?args, "spawning foreground process");
        Command::new(program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/services/process.rs"]
mod tests;
