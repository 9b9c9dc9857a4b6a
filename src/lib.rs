//! fossa: discover, default, and persist FOSSA CLI configuration (`.fossa.yml`).

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    ConfigFormat, InitOptions, InitOutcome, init, init_at, load_config, load_config_at,
    show_config, show_config_at, write_config, write_config_at,
};
pub use domain::config::paths::{
    API_KEY_ENV, CONFIG_HEADER, CONFIG_VERSION, DEFAULT_ENDPOINT, ENDPOINT_ENV,
    PRIMARY_CONFIG_FILE, SECONDARY_CONFIG_FILE,
};
pub use domain::{AppError, ConfigDocument, Locator, ModuleConfig, ResolvedConfig};
