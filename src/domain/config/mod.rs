mod defaults;
mod document;
mod locator;
pub mod paths;
mod resolved;

pub use defaults::apply_defaults;
pub use document::{
    AnalyzeSection, CliSection, ConfigDocument, ModuleConfig, parse_document, render_document,
};
pub use locator::Locator;
pub use resolved::ResolvedConfig;
