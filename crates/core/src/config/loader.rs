use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use std::path::Path;

use super::{types::Config, ConfigError};

/// Load configuration from the environment, with an optional TOML file.
///
/// `SOURCE`, `DEST_BASE` and `MODIFIED_WITHIN_HOURS` are read directly from
/// the environment. When `LINKARR_CONFIG` names a TOML file, that file is
/// loaded first and environment values override it.
pub fn load_config() -> Result<Config, ConfigError> {
    let mut figment = Figment::new();

    if let Ok(path) = std::env::var("LINKARR_CONFIG") {
        let path = Path::new(&path);
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }
        figment = figment.merge(Toml::file(path));
    }

    figment
        .merge(Env::raw().only(&["source", "dest_base", "modified_within_hours"]))
        .extract()
        .map_err(|e| ConfigError::ParseError(e.to_string()))
}

/// Load configuration from a TOML string (useful for testing).
pub fn load_config_from_str(toml_str: &str) -> Result<Config, ConfigError> {
    toml::from_str(toml_str).map_err(|e| ConfigError::ParseError(e.to_string()))
}
