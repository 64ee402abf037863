use super::*;

#[cfg(unix)]
#[test]
fn foreground_runner_reports_exit_status() {
    let mut runner = ForegroundRunner;
    assert!(runner.run("true", &[]).unwrap().success());
    assert!(!runner.run("false", &[]).unwrap().success());
}

#[cfg(unix)]
#[test]
fn foreground_runner_passes_arguments() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("touched.md");

    let mut runner = ForegroundRunner;
    let status = runner.run("touch", &[target.clone().into_os_string()]).unwrap();
    assert!(status.success());
    assert!(target.exists());
}

#[test]
fn foreground_runner_missing_program_is_error() {
    let mut runner = ForegroundRunner;
    let err = runner
        .run("nbgo-definitely-not-a-program", &[])
        .unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
}
