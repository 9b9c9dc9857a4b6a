use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::{GitInspector, GitRepository};

/// In-memory `GitInspector` whose repository state is set per test.
#[derive(Default)]
pub struct FakeGit {
    pub is_repository: bool,
    pub origin_urls: Option<Vec<String>>,
    pub head_sha: Option<String>,
    pub opened_dirs: Mutex<Vec<PathBuf>>,
}

impl FakeGit {
    /// A directory that is not a repository.
    pub fn absent() -> Self {
        Self::default()
    }

    /// A repository with an `origin` remote and a HEAD commit.
    pub fn with_origin(url: &str, sha: &str) -> Self {
        Self {
            is_repository: true,
            origin_urls: Some(vec![url.to_string()]),
            head_sha: Some(sha.to_string()),
            opened_dirs: Mutex::new(Vec::new()),
        }
    }

    pub fn opened_dirs(&self) -> Vec<PathBuf> {
        self.opened_dirs.lock().unwrap().clone()
    }
}

pub struct FakeRepository {
    origin_urls: Option<Vec<String>>,
    head_sha: Option<String>,
}

impl GitInspector for FakeGit {
    type Repository = FakeRepository;

    fn open_repository(&self, dir: &Path) -> Result<FakeRepository, AppError> {
        self.opened_dirs.lock().unwrap().push(dir.to_path_buf());
        if !self.is_repository {
            return Err(AppError::Git {
                command: "open".into(),
                details: format!("could not find repository at '{}'", dir.display()),
            });
        }
        Ok(FakeRepository { origin_urls: self.origin_urls.clone(), head_sha: self.head_sha.clone() })
    }
}

impl GitRepository for FakeRepository {
    fn remote_urls(&self, name: &str) -> Result<Vec<String>, AppError> {
        match (&self.origin_urls, name) {
            (Some(urls), "origin") => Ok(urls.clone()),
            _ => Err(AppError::Git {
                command: format!("find_remote {name}"),
                details: format!("remote '{name}' does not exist"),
            }),
        }
    }

    fn head_revision(&self) -> Result<String, AppError> {
        self.head_sha.clone().ok_or_else(|| AppError::Git {
            command: "head".into(),
            details: "reference 'refs/heads/main' not found".into(),
        })
    }
}
