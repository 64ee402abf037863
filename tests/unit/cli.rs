use super::*;

#[test]
fn use_with_name_selects_notebook() {
    assert_eq!(
        parse_args(["use", "work"]),
        CliCommand::UseNotebook("work".to_string())
    );
}

#[test]
fn other_shapes_fall_through_to_interactive() {
    assert_eq!(parse_args(Vec::<String>::new()), CliCommand::Interactive);
    assert_eq!(parse_args(["use"]), CliCommand::Interactive);
    assert_eq!(parse_args(["use", "a", "b"]), CliCommand::Interactive);
    assert_eq!(parse_args(["open", "work"]), CliCommand::Interactive);
    assert_eq!(parse_args(["--help"]), CliCommand::Interactive);
}

fn run_use(paths: &NotebookPaths, name: &str) -> (u8, String) {
    let mut out = Vec::new();
    let code = use_notebook(paths, name, &mut out);
    (code, String::from_utf8(out).unwrap())
}

#[test]
fn use_notebook_reports_switch_and_exits_zero() {
    let home = tempfile::tempdir().unwrap();
    let paths = NotebookPaths::with_home(home.path());

    let (code, out) = run_use(&paths, "work");
    assert_eq!(code, 0);
    assert_eq!(out, "Switched to notebook: work\n");
    assert_eq!(paths.resolve_current(), paths.notebook("work"));
}

#[test]
fn use_notebook_prints_error_and_exits_one() {
    let home = tempfile::tempdir().unwrap();
    let paths = NotebookPaths::with_home(home.path());

    let (code, out) = run_use(&paths, "a/b");
    assert_eq!(code, 1);
    assert_eq!(out, "Invalid notebook name: \"a/b\"\n");

    // A plain file where the notebooks root should be.
    std::fs::write(home.path().join(".nbgo"), "").unwrap();
    let (code, out) = run_use(&paths, "work");
    assert_eq!(code, 1);
    assert!(out.starts_with("Error creating directory"), "{out}");
    assert!(!paths.pointer_path().is_file());
}
