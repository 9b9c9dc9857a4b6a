//! On-disk shape of `.fossa.yml` and its YAML codec.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Version 1 config document as stored on disk.
///
/// Every field is optional at parse time. Empty strings are read as unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigDocument {
    #[serde(default, deserialize_with = "null_as_zero")]
    pub version: u32,
    #[serde(default)]
    pub cli: CliSection,
    #[serde(default)]
    pub analyze: AnalyzeSection,
}

/// Upload settings under `cli:`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliSection {
    #[serde(default, deserialize_with = "non_empty", skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default, deserialize_with = "non_empty", skip_serializing_if = "Option::is_none")]
    pub server: Option<String>,
    #[serde(default, deserialize_with = "non_empty", skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(default, deserialize_with = "non_empty", skip_serializing_if = "Option::is_none")]
    pub locator: Option<String>,
}

/// Analyzer settings under `analyze:`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeSection {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modules: Vec<ModuleConfig>,
}

/// A single analyzable module. Owned by the analyzers; carried through untouched here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleConfig {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub path: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub options: BTreeMap<String, serde_yaml::Value>,
}

fn non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u32>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decode a config document from YAML text.
///
/// A document with no content (only whitespace, comments or a `---` marker)
/// decodes to the zero-value document.
pub fn parse_document(content: &str) -> Result<ConfigDocument, serde_yaml::Error> {
    if is_blank_document(content) {
        return Ok(ConfigDocument::default());
    }
    serde_yaml::from_str(content)
}

/// Encode a config document as YAML text.
pub fn render_document(document: &ConfigDocument) -> Result<String, serde_yaml::Error> {
    serde_yaml::to_string(document)
}

fn is_blank_document(content: &str) -> bool {
    content.lines().map(str::trim).all(|line| line.is_empty() || line.starts_with('#') || line == "---")
}
