use crate::domain::AppError;
use crate::domain::config::ResolvedConfig;

/// Output format for `fossa config`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfigFormat {
    #[default]
    Yaml,
    Json,
}

/// Render the resolved configuration for display. The API key is masked.
pub fn render(config: &ResolvedConfig, format: ConfigFormat) -> Result<String, AppError> {
    let redacted = config.redacted();
    match format {
        ConfigFormat::Yaml => serde_yaml::to_string(&redacted).map_err(AppError::Serialization),
        ConfigFormat::Json => Ok(serde_json::to_string_pretty(&redacted)?),
    }
}
