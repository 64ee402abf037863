//! Full-terminal handoff: suspend the UI, run a child to completion, resume.

use super::terminal_guard::{Suspension, TerminalOps};
use crate::kernel::services::ProcessRunner;
use std::ffi::OsString;
use std::io;
use std::process::ExitStatus;
use std::sync::Arc;

pub struct SuspendingRunner<R> {
    inner: R,
    ops: Arc<dyn TerminalOps>,
}

impl<R> SuspendingRunner<R> {
    pub fn new(inner: R, ops: Arc<dyn TerminalOps>) -> Self {
        Self { inner, ops }
    }
}

impl<R: ProcessRunner> ProcessRunner for SuspendingRunner<R> {
    fn run(&mut self, program: &str, args: &[OsString]) -> io::Result<ExitStatus> {
        let suspension = Suspension::begin(self.ops.clone())?;
        let status = self.inner.run(program, args);
        suspension.resume()?;
        tracing::debug!(program, ok = status.is_ok(), "terminal resumed");
        status
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tui/handoff.rs"]
mod tests;
