//! Config file discovery.

use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::domain::config::paths::CONVENTIONAL_CONFIG_FILES;

/// Decide which config file to read.
///
/// - An explicit path must exist; relative paths are taken from `root`.
/// - Without one, `.fossa.yml` then `.fossa.yaml` are probed in `root`.
/// - `Ok(None)` means no file: defaults only.
pub fn resolve_config_path(
    root: &Path,
    explicit: Option<&Path>,
) -> Result<Option<PathBuf>, AppError> {
    if let Some(explicit) = explicit.filter(|path| !path.as_os_str().is_empty()) {
        let candidate = root.join(explicit);
        if !candidate.exists() {
            return Err(AppError::InvalidConfigPath(explicit.to_path_buf()));
        }
        return Ok(Some(candidate));
    }

    Ok(CONVENTIONAL_CONFIG_FILES.iter().map(|name| root.join(name)).find(|path| path.exists()))
}
