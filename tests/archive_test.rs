use std::fs;
use std::path::Path;
use tempfile::TempDir;
use vsx_tools::core::archive;
use vsx_tools::{ArchiveOutcome, ToolError};

fn setup_task(workspace: &Path, content: &[u8]) -> std::path::PathBuf {
    let tasks_dir = workspace.join(".vscode").join("tasks");
    fs::create_dir_all(&tasks_dir).unwrap();
    let task = tasks_dir.join("plan.md");
    fs::write(&task, content).unwrap();
    task
}

#[test]
fn test_archive_moves_task_under_vscode() {
    let temp = TempDir::new().unwrap();
    let workspace = temp.path();
    let content = b"# plan\n- step one\n";
    let task = setup_task(workspace, content);

    let outcome = archive::run(&task, workspace).unwrap();

    let archived = workspace.join(".vscode/tasks/archive/plan.md");
    assert!(archived.exists());
    assert!(!task.exists());
    assert_eq!(fs::read(&archived).unwrap(), content);

    match outcome {
        ArchiveOutcome::Archived { from, to } => {
            assert!(from.ends_with(".vscode/tasks/plan.md"));
            assert!(to.ends_with(".vscode/tasks/archive/plan.md"));
        }
        other => panic!("expected Archived, got {:?}", other),
    }
}

#[test]
fn test_relative_task_resolves_against_workspace() {
    let temp = TempDir::new().unwrap();
    let workspace = temp.path();
    setup_task(workspace, b"relative");

    let outcome = archive::run(Path::new(".vscode/tasks/plan.md"), workspace).unwrap();

    assert!(matches!(outcome, ArchiveOutcome::Archived { .. }));
    assert!(workspace.join(".vscode/tasks/archive/plan.md").exists());
}

#[test]
fn test_second_archive_gets_disambiguating_suffix() {
    let temp = TempDir::new().unwrap();
    let workspace = temp.path();

    let task = setup_task(workspace, b"first");
    archive::run(&task, workspace).unwrap();

    let task = setup_task(workspace, b"second");
    let outcome = archive::run(&task, workspace).unwrap();

    let archive_dir = workspace.join(".vscode/tasks/archive");
    assert_eq!(
        fs::read(archive_dir.join("plan.md")).unwrap(),
        b"first",
        "first archived copy must not be overwritten"
    );
    assert_eq!(fs::read(archive_dir.join("plan (1).md")).unwrap(), b"second");

    match outcome {
        ArchiveOutcome::Archived { to, .. } => {
            assert!(to.ends_with(".vscode/tasks/archive/plan (1).md"));
        }
        other => panic!("expected Archived, got {:?}", other),
    }
}

#[test]
fn test_task_outside_vscode_is_skipped_unchanged() {
    let temp = TempDir::new().unwrap();
    let workspace = temp.path();
    fs::create_dir_all(workspace.join(".vscode")).unwrap();
    let task = workspace.join("README.md");
    fs::write(&task, b"readme").unwrap();

    let outcome = archive::run(&task, workspace).unwrap();

    assert!(matches!(outcome, ArchiveOutcome::Skipped { .. }));
    assert!(task.exists());
    assert_eq!(fs::read(&task).unwrap(), b"readme");
    assert!(!workspace.join(".vscode/tasks/archive").exists());
}

#[test]
fn test_vscode_dir_itself_is_skipped() {
    let temp = TempDir::new().unwrap();
    let workspace = temp.path();
    fs::create_dir_all(workspace.join(".vscode")).unwrap();

    let outcome = archive::run(&workspace.join(".vscode"), workspace).unwrap();

    assert!(matches!(outcome, ArchiveOutcome::Skipped { .. }));
}

#[test]
fn test_missing_task_reports_not_found_without_mutation() {
    let temp = TempDir::new().unwrap();
    let workspace = temp.path();
    fs::create_dir_all(workspace.join(".vscode")).unwrap();

    let err = archive::run(Path::new(".vscode/tasks/plan.md"), workspace).unwrap_err();

    assert!(matches!(err, ToolError::TaskNotFound { .. }));
    assert!(!workspace.join(".vscode/tasks").exists());
}

#[test]
fn test_workspace_without_vscode_dir_skips() {
    let temp = TempDir::new().unwrap();
    let workspace = temp.path();
    let task = workspace.join("plan.md");
    fs::write(&task, b"plan").unwrap();

    let outcome = archive::run(&task, workspace).unwrap();

    assert!(matches!(outcome, ArchiveOutcome::Skipped { .. }));
    assert!(task.exists());
}
