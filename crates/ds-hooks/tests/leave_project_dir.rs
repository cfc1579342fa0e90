//! Kept in its own test binary: changing the working directory is process-wide.

use ds_hooks::leave_project_dir;

#[test]
fn moves_process_to_exit_dir() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let project = tmp.path().join("demo");
    std::fs::create_dir(&project).expect("create project");
    std::env::set_current_dir(&project).expect("enter project");

    leave_project_dir(tmp.path()).expect("left project");

    let cwd = std::env::current_dir().expect("cwd");
    assert_eq!(
        cwd.canonicalize().expect("canonical cwd"),
        tmp.path().canonicalize().expect("canonical tmp")
    );
}
