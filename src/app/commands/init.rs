use std::path::{Path, PathBuf};

use crate::app::config::{load_config, write_config};
use crate::domain::config::{ConfigDocument, ResolvedConfig, apply_defaults};
use crate::domain::AppError;
use crate::ports::GitInspector;

/// Options for `fossa init`.
#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    /// Config file to create or update instead of `.fossa.yml`.
    pub config: Option<PathBuf>,
    /// Server URL to record instead of the resolved one.
    pub endpoint: Option<String>,
    /// Project name to record instead of the resolved one.
    pub project: Option<String>,
    /// Rewrite an existing config file.
    pub overwrite: bool,
}

/// Result of a successful `fossa init`.
#[derive(Debug, Clone)]
pub struct InitOutcome {
    pub path: PathBuf,
    pub config: ResolvedConfig,
}

/// Resolve the current configuration, apply overrides, and persist it.
///
/// An explicit `config` path that does not exist yet is treated as the target
/// to create rather than as an error.
pub fn execute<G>(root: &Path, options: InitOptions, git: &G) -> Result<InitOutcome, AppError>
where
    G: GitInspector + ?Sized,
{
    let mut config = match load_config(root, options.config.as_deref(), git) {
        Ok(config) => {
            if let Some(existing) = &config.config_file_path
                && !options.overwrite
            {
                return Err(AppError::ConfigExists(existing.clone()));
            }
            config
        }
        Err(AppError::InvalidConfigPath(target)) => {
            let document = apply_defaults(ConfigDocument::default(), root, git);
            ResolvedConfig::from_document(document, Some(target))
        }
        Err(err) => return Err(err),
    };

    if let Some(endpoint) = options.endpoint.filter(|value| !value.is_empty()) {
        config.endpoint = endpoint;
    }
    if let Some(project) = options.project.filter(|value| !value.is_empty()) {
        config.project = Some(project);
    }

    let path = write_config(root, &mut config)?;
    Ok(InitOutcome { path, config })
}
