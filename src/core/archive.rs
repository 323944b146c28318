use crate::domain::model::ArchiveOutcome;
use crate::utils::error::{Result, ToolError};
use crate::utils::fs::move_file;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const CONFIG_DIR_NAME: &str = ".vscode";
const ARCHIVE_SUBDIRS: [&str; 2] = ["tasks", "archive"];
const MAX_NAME_ATTEMPTS: u32 = 1000;

/// Moves the task file to `.vscode/tasks/archive/<filename>` only if the
/// file is located under `<workspace>/.vscode/`. A task outside `.vscode/`
/// is an intentional skip, not an error.
pub fn run(task: &Path, workspace: &Path) -> Result<ArchiveOutcome> {
    let task_abs = resolve_task(task, workspace)?;
    tracing::debug!("Resolved task path: {}", task_abs.display());

    let config_dir = match fs::canonicalize(workspace.join(CONFIG_DIR_NAME)) {
        Ok(dir) => dir,
        // No config directory means the task cannot be contained in it.
        Err(_) => return Ok(ArchiveOutcome::Skipped { path: task_abs }),
    };

    if !is_strictly_inside(&task_abs, &config_dir) {
        return Ok(ArchiveOutcome::Skipped { path: task_abs });
    }

    let mut archive_dir = config_dir;
    for part in ARCHIVE_SUBDIRS {
        archive_dir.push(part);
    }
    fs::create_dir_all(&archive_dir)?;

    let file_name = task_abs.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("Task path has no file name: {}", task_abs.display()),
        )
    })?;
    let dest = unique_dest(&archive_dir.join(file_name))?;

    move_file(&task_abs, &dest)?;
    tracing::info!("Archived {} -> {}", task_abs.display(), dest.display());

    Ok(ArchiveOutcome::Archived {
        from: task_abs,
        to: dest,
    })
}

/// Relative paths are interpreted relative to the workspace root; the
/// result is canonical (symlinks resolved).
fn resolve_task(task: &Path, workspace: &Path) -> Result<PathBuf> {
    let joined = if task.is_absolute() {
        task.to_path_buf()
    } else {
        workspace.join(task)
    };

    fs::canonicalize(&joined).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            ToolError::TaskNotFound { path: joined }
        } else {
            e.into()
        }
    })
}

/// True if `child` is inside `parent` and not equal to it. Both paths must
/// already be canonical.
fn is_strictly_inside(child: &Path, parent: &Path) -> bool {
    child != parent && child.starts_with(parent)
}

/// Picks a destination name that does not collide with an existing file by
/// appending " (n)" before the extension, n starting at 1.
fn unique_dest(dest: &Path) -> Result<PathBuf> {
    if !dest.exists() {
        return Ok(dest.to_path_buf());
    }

    let stem = dest
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let suffix = dest
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();

    for n in 1..MAX_NAME_ATTEMPTS {
        let candidate = dest.with_file_name(format!("{} ({}){}", stem, n, suffix));
        if !candidate.exists() {
            return Ok(candidate);
        }
    }

    Err(ToolError::ArchiveNameExhausted {
        path: dest.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_unique_dest_without_collision() {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("plan.md");

        assert_eq!(unique_dest(&dest).unwrap(), dest);
    }

    #[test]
    fn test_unique_dest_appends_counter() {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("plan.md");
        fs::write(&dest, b"first").unwrap();

        assert_eq!(unique_dest(&dest).unwrap(), temp.path().join("plan (1).md"));

        fs::write(temp.path().join("plan (1).md"), b"second").unwrap();
        assert_eq!(unique_dest(&dest).unwrap(), temp.path().join("plan (2).md"));
    }

    #[test]
    fn test_unique_dest_without_extension() {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("notes");
        fs::write(&dest, b"first").unwrap();

        assert_eq!(unique_dest(&dest).unwrap(), temp.path().join("notes (1)"));
    }

    #[test]
    fn test_is_strictly_inside() {
        let parent = Path::new("/workspace/.vscode");
        assert!(is_strictly_inside(
            Path::new("/workspace/.vscode/tasks/plan.md"),
            parent
        ));
        assert!(!is_strictly_inside(Path::new("/workspace/.vscode"), parent));
        assert!(!is_strictly_inside(Path::new("/workspace/plan.md"), parent));
        // Prefix match must respect path components.
        assert!(!is_strictly_inside(
            Path::new("/workspace/.vscode-extra/plan.md"),
            parent
        ));
    }
}
