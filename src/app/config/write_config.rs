//! Config persistence.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::domain::AppError;
use crate::domain::config::paths::{CONFIG_FILE_MODE, CONFIG_HEADER, PRIMARY_CONFIG_FILE};
use crate::domain::config::{ResolvedConfig, render_document};

/// Write `config` to its `config_file_path`, prefixed with the provenance header.
///
/// When the config has no path yet, `.fossa.yml` is recorded on `config`.
/// Relative paths are written under `root`; the returned path is the joined
/// one. The locator is not written.
pub fn write_config(root: &Path, config: &mut ResolvedConfig) -> Result<PathBuf, AppError> {
    let recorded =
        config.config_file_path.get_or_insert_with(|| PathBuf::from(PRIMARY_CONFIG_FILE));
    let path = root.join(recorded);

    let yaml = render_document(&config.to_document()).map_err(AppError::Serialization)?;
    let mut content = String::with_capacity(CONFIG_HEADER.len() + yaml.len());
    content.push_str(CONFIG_HEADER);
    content.push_str(&yaml);

    std::fs::write(&path, content)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = std::fs::metadata(&path)?.permissions();
        perms.set_mode(CONFIG_FILE_MODE);
        std::fs::set_permissions(&path, perms)?;
    }

    info!(path = %path.display(), "wrote config file");
    Ok(path)
}
