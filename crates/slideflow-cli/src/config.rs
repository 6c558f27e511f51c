//! Configuration file loading for the CLI.

use std::fs;

use log::{debug, info};

use slideflow::config::AppConfig;

use crate::CliError;

/// Loads the application configuration from the given TOML file, falling
/// back to defaults when no path is provided.
pub fn load_config(path: Option<&String>) -> Result<AppConfig, CliError> {
    let Some(path) = path else {
        debug!("No configuration file given, using defaults");
        return Ok(AppConfig::default());
    };

    let contents = fs::read_to_string(path)?;
    let config = toml::from_str(&contents)
        .map_err(|err| CliError::Config(format!("failed to parse `{path}`: {err}")))?;

    info!(config_path = path.as_str(); "Loaded configuration");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_path_uses_defaults() {
        let config = load_config(None).unwrap();
        assert_eq!(config.style().connector_width(), 2.0);
    }

    #[test]
    fn test_loads_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[style]\nconnector_width = 3.5").unwrap();

        let path = file.path().to_string_lossy().to_string();
        let config = load_config(Some(&path)).unwrap();

        assert_eq!(config.style().connector_width(), 3.5);
    }

    #[test]
    fn test_bad_toml_reports_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "not valid toml [[").unwrap();

        let path = file.path().to_string_lossy().to_string();
        let result = load_config(Some(&path));

        assert!(matches!(result, Err(CliError::Config(_))));
    }
}
