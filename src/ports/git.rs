use crate::domain::AppError;
use std::path::Path;

/// Read-only access to version-control metadata for a working directory.
pub trait GitInspector {
    type Repository: GitRepository;

    /// Open `dir` as a repository. Parent directories are not searched.
    fn open_repository(&self, dir: &Path) -> Result<Self::Repository, AppError>;
}

/// An opened repository.
pub trait GitRepository {
    /// Configured URLs of the named remote, in configuration order.
    fn remote_urls(&self, name: &str) -> Result<Vec<String>, AppError>;

    /// Hash of the commit HEAD points at.
    fn head_revision(&self) -> Result<String, AppError>;
}
