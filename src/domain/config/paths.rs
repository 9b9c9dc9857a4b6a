//! Well-known names for the `.fossa.yml` config file and its environment overrides.

/// Preferred config filename; also the filename written when none was loaded.
pub const PRIMARY_CONFIG_FILE: &str = ".fossa.yml";

/// Fallback config filename, probed after [`PRIMARY_CONFIG_FILE`].
pub const SECONDARY_CONFIG_FILE: &str = ".fossa.yaml";

/// Conventional filenames in probe order.
pub const CONVENTIONAL_CONFIG_FILES: [&str; 2] = [PRIMARY_CONFIG_FILE, SECONDARY_CONFIG_FILE];

/// The only document format version this crate reads and writes.
pub const CONFIG_VERSION: u32 = 1;

/// Endpoint used when neither the file nor the environment names a server.
pub const DEFAULT_ENDPOINT: &str = "https://app.fossa.io";

/// Environment variable consulted when `cli.server` is unset.
pub const ENDPOINT_ENV: &str = "FOSSA_ENDPOINT";

/// Environment variable consulted when `cli.api_key` is unset.
pub const API_KEY_ENV: &str = "FOSSA_API_KEY";

/// Remote whose first URL becomes the inferred project.
pub const ORIGIN_REMOTE: &str = "origin";

/// Provenance comment prepended to every written config file.
pub const CONFIG_HEADER: &str = "# Generated by FOSSA CLI (https://github.com/fossas/fossa-cli)\n# Visit https://fossa.io to learn more\n";

/// Mode applied to written config files.
///
/// World-writable for compatibility with files produced by earlier releases.
/// TODO: tighten to 0o600 once downstream tooling no longer rewrites the file as another user.
pub const CONFIG_FILE_MODE: u32 = 0o777;
