use crate::errors::{Result, StackedError};
use git2::{Repository, StatusOptions};
use std::path::{Path, PathBuf};

/// Snapshot of the repository taken before walking a stack
#[derive(Debug, Clone)]
pub struct RepositoryInfo {
    pub path: PathBuf,
    pub head_branch: Option<String>,
    pub is_dirty: bool,
}

/// Read-only view of the repository the stack lives in
pub struct GitRepository {
    repo: Repository,
    path: PathBuf,
}

impl GitRepository {
    /// Open a Git repository at or above the given path
    pub fn open(path: &Path) -> Result<Self> {
        let repo = Repository::discover(path)
            .map_err(|e| StackedError::config(format!("Not a git repository: {e}")))?;

        let workdir = repo
            .workdir()
            .ok_or_else(|| StackedError::config("Repository has no working directory"))?
            .to_path_buf();

        Ok(Self {
            repo,
            path: workdir,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get repository information
    pub fn get_info(&self) -> Result<RepositoryInfo> {
        Ok(RepositoryInfo {
            path: self.path.clone(),
            head_branch: self.get_current_branch().ok(),
            is_dirty: self.is_dirty()?,
        })
    }

    /// Get the current branch name
    pub fn get_current_branch(&self) -> Result<String> {
        let head = self
            .repo
            .head()
            .map_err(|e| StackedError::branch(format!("Could not get HEAD: {e}")))?;

        if head.is_branch() {
            if let Some(name) = head.shorthand() {
                return Ok(name.to_string());
            }
        }

        // Detached HEAD
        let commit = head
            .peel_to_commit()
            .map_err(|e| StackedError::branch(format!("Could not get HEAD commit: {e}")))?;
        Ok(format!("HEAD@{}", commit.id()))
    }

    /// Whether tracked files have uncommitted changes
    pub fn is_dirty(&self) -> Result<bool> {
        let mut options = StatusOptions::new();
        options.include_untracked(false).include_ignored(false);

        let statuses = self.repo.statuses(Some(&mut options))?;
        Ok(!statuses.is_empty())
    }
}
