pub mod repository;

pub use repository::{GitRepository, RepositoryInfo};

use crate::errors::{Result, StackedError};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

const HEADS_PREFIX: &str = "refs/heads/";

/// Lists the local branches a stack is chosen from
pub trait BranchSource {
    fn local_branches(&self) -> Result<Vec<String>>;
}

/// Enumerates branches with `git for-each-ref`
#[derive(Debug, Clone)]
pub struct GitCli {
    executable: String,
    workdir: Option<PathBuf>,
}

impl GitCli {
    pub fn new<S: Into<String>>(executable: S) -> Self {
        Self {
            executable: executable.into(),
            workdir: None,
        }
    }

    /// Run git in `path` instead of the current directory
    pub fn in_dir(mut self, path: &Path) -> Self {
        self.workdir = Some(path.to_path_buf());
        self
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new("git")
    }
}

impl BranchSource for GitCli {
    fn local_branches(&self) -> Result<Vec<String>> {
        let mut command = Command::new(&self.executable);
        command.args(["for-each-ref", "refs/heads", "--format=%(refname)"]);
        if let Some(dir) = &self.workdir {
            command.current_dir(dir);
        }

        let output = command.output().map_err(|e| {
            StackedError::branch(format!("Failed to run {}: {e}", self.executable))
        })?;

        if !output.status.success() {
            return Err(StackedError::branch(format!(
                "git for-each-ref failed: {}",
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        let branches = parse_branch_refs(&String::from_utf8_lossy(&output.stdout));
        debug!("Found {} local branches", branches.len());
        Ok(branches)
    }
}

/// Turn `for-each-ref` output into short branch names
pub fn parse_branch_refs(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| line.strip_prefix(HEADS_PREFIX).unwrap_or(line).to_string())
        .collect()
}

/// The command that checks out `branch`, run through the same runner as the user's command
pub fn checkout_command(git: &str, branch: &str) -> String {
    format!("{git} checkout {branch}")
}

/// Get the current working directory as a Git repository
pub fn get_current_repository() -> Result<GitRepository> {
    let current_dir = std::env::current_dir()
        .map_err(|e| StackedError::config(format!("Could not get current directory: {e}")))?;

    GitRepository::open(&current_dir)
}
