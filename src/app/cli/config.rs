//! Config command implementation.

use std::path::PathBuf;

use crate::app::api::{self, ConfigFormat};
use crate::domain::AppError;

pub fn run_config(config: Option<PathBuf>, json: bool) -> Result<(), AppError> {
    let format = if json { ConfigFormat::Json } else { ConfigFormat::Yaml };
    let rendered = api::show_config(config.as_deref(), format)?;
    println!("{}", rendered.trim_end());
    Ok(())
}
