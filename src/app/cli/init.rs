//! Init command implementation.

use std::path::PathBuf;

use crate::app::api::{self, InitOptions};
use crate::domain::AppError;

pub fn run_init(
    config: Option<PathBuf>,
    endpoint: Option<String>,
    project: Option<String>,
    overwrite: bool,
) -> Result<(), AppError> {
    let outcome = api::init(InitOptions { config, endpoint, project, overwrite })?;
    println!("✅ Wrote {}", outcome.path.display());
    if outcome.config.api_key.is_none() {
        println!("⚠️  No API key configured. Set FOSSA_API_KEY before uploading.");
    }
    Ok(())
}
