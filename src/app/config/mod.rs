//! Config file discovery, loading and persistence.
//!
//! The document schema and the defaulting rules live in `domain::config`;
//! this module owns the filesystem side.

mod load_config;
mod resolve_path;
mod write_config;

pub use load_config::load_config;
pub use resolve_path::resolve_config_path;
pub use write_config::write_config;
