use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{bail, Context, Result};
use tracing::info;

pub fn commit_message(title: &str) -> String {
    format!("Added/Updated story: {}", title)
}

/// Stage the given paths, commit, and optionally push.
///
/// Relative paths are taken from the process working directory, not `repo`.
pub fn commit_and_push(repo: &Path, paths: &[&Path], title: &str, push: bool) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to read working directory")?;
    commit_from(repo, &cwd, paths, title, push)
}

fn commit_from(repo: &Path, cwd: &Path, paths: &[&Path], title: &str, push: bool) -> Result<()> {
    let mut add = vec!["add".to_string(), "--".to_string()];
    add.extend(
        paths
            .iter()
            .map(|p| anchor(cwd, p).to_string_lossy().into_owned()),
    );
    git(repo, &add)?;
    git(repo, &["commit".to_string(), "-m".to_string(), commit_message(title)])?;
    info!("Committed '{}'", title);

    if push {
        git(repo, &["push".to_string()])?;
        info!("Pushed to remote");
    }
    Ok(())
}

fn anchor(cwd: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

fn git(repo: &Path, args: &[String]) -> Result<()> {
    let output = Command::new("git")
        .arg("-C")
        .arg(repo)
        .args(args)
        .output()
        .with_context(|| format!("git {} execution failed", args[0]))?;
    if !output.status.success() {
        bail!(
            "git {} failed: {}",
            args[0],
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }
    Ok(())
}
