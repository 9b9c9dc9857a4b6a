use std::path::PathBuf;

use serde::Serialize;

use super::document::{AnalyzeSection, CliSection, ConfigDocument, ModuleConfig};
use super::paths::{CONFIG_VERSION, DEFAULT_ENDPOINT};

/// Configuration consumed by the rest of the CLI after file, environment and
/// git state have been merged.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedConfig {
    /// FOSSA server base URL.
    pub endpoint: String,
    pub api_key: Option<String>,
    pub project: Option<String>,
    /// `git+<project>$<revision>`; `None` means unknown provenance.
    pub locator: Option<String>,
    /// File the config was read from, or will be written to.
    pub config_file_path: Option<PathBuf>,
    pub modules: Vec<ModuleConfig>,
}

impl ResolvedConfig {
    /// Copy a defaulted document into its in-memory form.
    pub fn from_document(document: ConfigDocument, config_file_path: Option<PathBuf>) -> Self {
        let CliSection { api_key, server, project, locator } = document.cli;
        Self {
            endpoint: server.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            api_key,
            project,
            locator,
            config_file_path,
            modules: document.analyze.modules,
        }
    }

    /// Project into a fresh on-disk document.
    ///
    /// The locator is not persisted; it is re-derived on every load.
    pub fn to_document(&self) -> ConfigDocument {
        ConfigDocument {
            version: CONFIG_VERSION,
            cli: CliSection {
                api_key: self.api_key.clone().filter(|key| !key.is_empty()),
                server: Some(self.endpoint.clone()).filter(|server| !server.is_empty()),
                project: self.project.clone().filter(|project| !project.is_empty()),
                locator: None,
            },
            analyze: AnalyzeSection { modules: self.modules.clone() },
        }
    }

    /// Copy with the API key replaced by a fixed mask, for display.
    pub fn redacted(&self) -> Self {
        Self { api_key: self.api_key.as_ref().map(|_| "********".to_string()), ..self.clone() }
    }
}
