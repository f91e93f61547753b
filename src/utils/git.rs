use {
    crate::error::Error,
    log::debug,
    std::{path::Path, process::Command},
};

/// Version bumps are never made directly on this branch.
pub const PROTECTED_BRANCH: &str = "main";

fn git_error(command: &str, reason: impl ToString) -> Error {
    Error::GitQuery {
        command: command.to_string(),
        reason: reason.to_string(),
    }
}

pub fn get_current_branch(repo: &Path) -> Result<String, Error> {
    let command = "rev-parse --abbrev-ref HEAD";
    let output = Command::new("git")
        .args(["rev-parse", "--abbrev-ref", "HEAD"])
        .current_dir(repo)
        .output()
        .map_err(|e| git_error(command, e))?;
    if !output.status.success() {
        return Err(git_error(
            command,
            String::from_utf8_lossy(&output.stderr).trim(),
        ));
    }
    let branch = String::from_utf8_lossy(&output.stdout).trim().to_string();
    debug!("current branch: {branch}");
    Ok(branch)
}

/// Returns true when tracked files differ from `HEAD`. Untracked files are not
/// considered.
pub fn has_uncommitted_changes(repo: &Path) -> Result<bool, Error> {
    let command = "diff-index --quiet HEAD";
    let output = Command::new("git")
        .args(["diff-index", "--quiet", "HEAD"])
        .current_dir(repo)
        .output()
        .map_err(|e| git_error(command, e))?;
    match output.status.code() {
        Some(0) => Ok(false),
        Some(1) => Ok(true),
        _ => Err(git_error(
            command,
            String::from_utf8_lossy(&output.stderr).trim(),
        )),
    }
}

/// Refuses to continue on the protected branch or with a dirty working tree.
pub fn check_git_status(repo: &Path) -> Result<(), Error> {
    let branch = get_current_branch(repo)?;
    if branch == PROTECTED_BRANCH {
        return Err(Error::ProtectedBranch(branch));
    }

    if has_uncommitted_changes(repo)? {
        return Err(Error::DirtyWorkingTree);
    }
    debug!("working tree is clean");

    Ok(())
}
