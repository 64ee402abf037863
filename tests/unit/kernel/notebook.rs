use super::*;
use std::ffi::OsStr;
use tempfile::tempdir;

#[test]
fn note_title_strips_md_then_bookmark() {
    let title = |name: &str| note_title(OsStr::new(name));
    assert_eq!(title("meeting-notes.md").as_deref(), Some("meeting-notes"));
    assert_eq!(title("20240101.bookmark.md").as_deref(), Some("20240101"));
    assert_eq!(title("todo.txt"), None);
    assert_eq!(title("readme.markdown"), None);
}

// Linux only: some unix filesystems refuse non-UTF-8 names.
#[cfg(target_os = "linux")]
#[test]
fn list_notes_keeps_non_utf8_names() {
    use std::os::unix::ffi::OsStrExt;

    let dir = tempdir().unwrap();
    let raw = OsStr::from_bytes(b"caf\xe9.md");
    std::fs::write(dir.path().join(raw), "x\n").unwrap();
    std::fs::write(dir.path().join("ok.md"), "x\n").unwrap();

    let items = list_notes(dir.path());
    assert_eq!(items.len(), 2, "listed: {items:?}");

    let odd = items.iter().find(|item| item.title != "ok").unwrap();
    assert_eq!(odd.title, "caf\u{FFFD}");
    assert_eq!(odd.path, dir.path().join(raw));
    assert!(odd.path.is_file());
}

#[test]
fn list_notes_selects_only_md_files() {
    let dir = tempdir().unwrap();
    for name in ["a.md", "b.bookmark.md", "c.md"] {
        std::fs::write(dir.path().join(name), "x\n").unwrap();
    }
    for name in ["d.txt", "e.md.bak", "notes"] {
        std::fs::write(dir.path().join(name), "x\n").unwrap();
    }

    let items = list_notes(dir.path());
    assert_eq!(items.len(), 3);

    let mut titles: Vec<&str> = items.iter().map(|i| i.title.as_str()).collect();
    titles.sort_unstable();
    assert_eq!(titles, ["a", "b", "c"]);

    for item in &items {
        assert!(item.path.starts_with(dir.path()));
    }
}

#[test]
fn list_notes_missing_dir_is_empty() {
    let dir = tempdir().unwrap();
    assert!(list_notes(&dir.path().join("nope")).is_empty());
}

#[test]
fn resolve_current_defaults_without_pointer() {
    let home = tempdir().unwrap();
    let paths = NotebookPaths::with_home(home.path());
    assert_eq!(
        paths.resolve_current(),
        home.path().join(".nbgo").join("default")
    );
}

#[test]
fn resolve_current_trims_pointer_and_ignores_blank() {
    let home = tempdir().unwrap();
    let paths = NotebookPaths::with_home(home.path());
    std::fs::create_dir_all(home.path().join(".nbgo")).unwrap();

    std::fs::write(paths.pointer_path(), "/tmp/work\n").unwrap();
    assert_eq!(paths.resolve_current(), PathBuf::from("/tmp/work"));

    std::fs::write(paths.pointer_path(), "  \n").unwrap();
    assert_eq!(paths.resolve_current(), paths.default_notebook());
}

#[test]
fn switch_notebook_creates_dir_and_persists_pointer() {
    let home = tempdir().unwrap();
    let paths = NotebookPaths::with_home(home.path());

    let dir = paths.switch_notebook("foo").unwrap();
    assert_eq!(dir, home.path().join(".nbgo").join("foo"));
    assert!(dir.is_dir());

    let pointer = std::fs::read_to_string(paths.pointer_path()).unwrap();
    assert_eq!(pointer, dir.to_string_lossy());
    assert_eq!(NotebookPaths::with_home(home.path()).resolve_current(), dir);
}

#[cfg(target_os = "linux")]
#[test]
fn switch_notebook_pointer_keeps_non_utf8_home() {
    use std::os::unix::ffi::OsStrExt;

    let base = tempdir().unwrap();
    let home = base.path().join(OsStr::from_bytes(b"h\xffme"));
    std::fs::create_dir_all(&home).unwrap();
    let paths = NotebookPaths::with_home(&home);

    let dir = paths.switch_notebook("work").unwrap();
    let pointer = std::fs::read(paths.pointer_path()).unwrap();
    assert_eq!(pointer, dir.as_os_str().as_bytes());
    assert_eq!(paths.resolve_current(), dir);
}

#[test]
fn switch_notebook_rejects_path_like_names() {
    let home = tempdir().unwrap();
    let paths = NotebookPaths::with_home(home.path());

    for name in ["", "..", ".", "a/b", "a\\b"] {
        let err = paths.switch_notebook(name).unwrap_err();
        assert!(matches!(err, AppError::InvalidNotebookName(_)), "{name:?}");
    }
    assert!(!paths.pointer_path().exists());
}

#[test]
fn switch_notebook_reports_dir_creation_failure() {
    let home = tempdir().unwrap();
    // A plain file where the notebooks root should be.
    std::fs::write(home.path().join(".nbgo"), "").unwrap();
    let paths = NotebookPaths::with_home(home.path());

    let err = paths.switch_notebook("foo").unwrap_err();
    assert!(matches!(err, AppError::CreateDir { .. }));
    assert!(err.to_string().starts_with("Error creating directory"));
}
