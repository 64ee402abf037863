use super::*;
use std::sync::Mutex;

#[derive(Default)]
struct Log {
    calls: Mutex<Vec<String>>,
}

impl Log {
    fn push(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

struct MockOps(Arc<Log>);

impl TerminalOps for MockOps {
    fn setup(&self) -> io::Result<()> {
        self.0.push("setup");
        Ok(())
    }

    fn restore(&self) -> io::Result<()> {
        self.0.push("restore");
        Ok(())
    }
}

struct FailingRunner(Arc<Log>);

impl ProcessRunner for FailingRunner {
    fn run(&mut self, program: &str, _args: &[OsString]) -> io::Result<ExitStatus> {
        self.0.push(format!("run {program}"));
        Err(io::Error::new(io::ErrorKind::NotFound, "no such program"))
    }
}

#[test]
fn terminal_is_resumed_even_when_child_fails() {
    let log = Arc::new(Log::default());
    let mut runner = SuspendingRunner::new(
        FailingRunner(log.clone()),
        Arc::new(MockOps(log.clone())),
    );

    let err = runner.run("vi", &[OsString::from("/tmp/a.md")]).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::NotFound);
    assert_eq!(log.calls(), ["restore", "run vi", "setup"]);
}

#[cfg(unix)]
#[test]
fn terminal_is_suspended_around_child() {
    use crate::kernel::services::ForegroundRunner;

    let log = Arc::new(Log::default());
    let mut runner = SuspendingRunner::new(ForegroundRunner, Arc::new(MockOps(log.clone())));

    assert!(runner.run("true", &[]).unwrap().success());
    assert_eq!(log.calls(), ["restore", "setup"]);
}
