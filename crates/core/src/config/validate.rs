use super::{types::Config, ConfigError};

/// Validate configuration.
/// Currently validates:
/// - `source` exists and is a directory
/// - `dest_base` exists and is a directory
///
/// Failing either check is fatal misconfiguration; the run must not start.
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    for (key, path) in [("source", &config.source), ("dest_base", &config.dest_base)] {
        match std::fs::metadata(path) {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => {
                return Err(ConfigError::ValidationError(format!(
                    "{} is not a directory: {}",
                    key,
                    path.display()
                )));
            }
            Err(e) => {
                return Err(ConfigError::ValidationError(format!(
                    "{} is not accessible: {}: {}",
                    key,
                    path.display(),
                    e
                )));
            }
        }
    }

    Ok(())
}
