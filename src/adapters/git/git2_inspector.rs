use crate::domain::AppError;
use crate::ports::{GitInspector, GitRepository};
use git2::Repository;
use std::path::Path;

/// `GitInspector` backed by libgit2.
#[derive(Debug, Clone, Copy, Default)]
pub struct Git2Inspector;

impl Git2Inspector {
    pub fn new() -> Self {
        Self
    }
}

pub struct Git2Repository {
    repo: Repository,
}

impl GitInspector for Git2Inspector {
    type Repository = Git2Repository;

    fn open_repository(&self, dir: &Path) -> Result<Git2Repository, AppError> {
        let repo = Repository::open(dir)
            .map_err(|e| AppError::git("git2::Repository::open", e))?;
        Ok(Git2Repository { repo })
    }
}

impl GitRepository for Git2Repository {
    fn remote_urls(&self, name: &str) -> Result<Vec<String>, AppError> {
        let remote = self
            .repo
            .find_remote(name)
            .map_err(|e| AppError::git("git2::Repository::find_remote", e))?;
        Ok(remote.url().map(str::to_string).into_iter().collect())
    }

    fn head_revision(&self) -> Result<String, AppError> {
        let head =
            self.repo.head().map_err(|e| AppError::git("git2::Repository::head", e))?;
        let target = head.target().ok_or_else(|| AppError::Git {
            command: "git2::Reference::target".to_string(),
            details: "HEAD is not a direct reference".to_string(),
        })?;
        Ok(target.to_string())
    }
}
