//! API Facade for the application.
//!
//! Each operation comes in two forms: one rooted at the process working
//! directory and an `_at` variant taking the root explicitly.

use std::path::{Path, PathBuf};

use crate::adapters::git::Git2Inspector;
use crate::app::commands::{config, init};
use crate::app::config as config_file;

pub use crate::app::commands::config::ConfigFormat;
pub use crate::app::commands::init::{InitOptions, InitOutcome};
pub use crate::domain::AppError;
pub use crate::domain::config::ResolvedConfig;

// =============================================================================
// Config Load / Write API
// =============================================================================

/// Load the configuration for the current directory.
pub fn load_config(explicit: Option<&Path>) -> Result<ResolvedConfig, AppError> {
    load_config_at(std::env::current_dir()?, explicit)
}

/// Load the configuration rooted at `root`.
///
/// Conventional filenames are probed in `root`, relative explicit paths are
/// resolved against it, and `root` is the directory inspected for git state.
pub fn load_config_at(
    root: impl Into<PathBuf>,
    explicit: Option<&Path>,
) -> Result<ResolvedConfig, AppError> {
    config_file::load_config(&root.into(), explicit, &Git2Inspector::new())
}

/// Persist `config` relative to the current directory.
pub fn write_config(config: &mut ResolvedConfig) -> Result<PathBuf, AppError> {
    write_config_at(std::env::current_dir()?, config)
}

/// Persist `config` relative to `root`.
pub fn write_config_at(
    root: impl Into<PathBuf>,
    config: &mut ResolvedConfig,
) -> Result<PathBuf, AppError> {
    config_file::write_config(&root.into(), config)
}

// =============================================================================
// Command API
// =============================================================================

/// Create or update the config file in the current directory.
pub fn init(options: InitOptions) -> Result<InitOutcome, AppError> {
    init_at(std::env::current_dir()?, options)
}

/// Create or update the config file under `root`.
pub fn init_at(root: impl Into<PathBuf>, options: InitOptions) -> Result<InitOutcome, AppError> {
    init::execute(&root.into(), options, &Git2Inspector::new())
}

/// Render the resolved configuration for the current directory.
pub fn show_config(explicit: Option<&Path>, format: ConfigFormat) -> Result<String, AppError> {
    show_config_at(std::env::current_dir()?, explicit, format)
}

/// Render the resolved configuration rooted at `root`.
pub fn show_config_at(
    root: impl Into<PathBuf>,
    explicit: Option<&Path>,
    format: ConfigFormat,
) -> Result<String, AppError> {
    let resolved = load_config_at(root, explicit)?;
    config::render(&resolved, format)
}
