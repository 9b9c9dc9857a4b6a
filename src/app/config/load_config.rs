//! Config loading: discovery, decoding, defaulting.

use std::path::Path;

use tracing::{debug, info};

use super::resolve_path::resolve_config_path;
use crate::domain::config::{ConfigDocument, ResolvedConfig, apply_defaults, parse_document};
use crate::domain::AppError;
use crate::ports::GitInspector;

/// Load the effective configuration for `root`.
///
/// `explicit` overrides discovery of `.fossa.yml` / `.fossa.yaml`. When no file
/// is found the configuration is built from the environment and git state alone.
/// The returned `config_file_path` is the file actually read, if any.
pub fn load_config<G>(
    root: &Path,
    explicit: Option<&Path>,
    git: &G,
) -> Result<ResolvedConfig, AppError>
where
    G: GitInspector + ?Sized,
{
    let path = resolve_config_path(root, explicit)?;

    let document = match &path {
        None => {
            debug!(root = %root.display(), "no config file found, using defaults");
            ConfigDocument::default()
        }
        Some(path) => {
            let content = std::fs::read_to_string(path)?;
            let document = parse_document(&content)
                .map_err(|source| AppError::Parse { path: path.clone(), source })?;
            info!(path = %path.display(), "loaded config file");
            document
        }
    };

    let document = apply_defaults(document, root, git);
    Ok(ResolvedConfig::from_document(document, path))
}
