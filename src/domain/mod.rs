pub mod config;
pub mod error;

pub use config::{ConfigDocument, Locator, ModuleConfig, ResolvedConfig};
pub use error::AppError;
