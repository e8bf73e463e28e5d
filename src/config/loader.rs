// Copyright 2025 The Drasi Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Centralized configuration loading with automatic environment variable interpolation.
//!
//! This module provides the primary interface for loading server configuration
//! files with transparent environment variable substitution.

use super::env_interpolation;
use super::types::ImoveisServerConfig;
use super::validation::{self, ValidationError};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Unified error type for configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Environment variable interpolation failed: {0}")]
    InterpolationError(#[from] env_interpolation::InterpolationError),

    #[error("Failed to parse config file '{path}': YAML error: {yaml_err}, JSON error: {json_err}")]
    ParseError {
        path: String,
        yaml_err: String,
        json_err: String,
    },

    #[error("Invalid configuration fields: {0}")]
    UnknownFields(#[from] ValidationError),

    #[error("Validation error: {0}")]
    ValidationError(#[from] anyhow::Error),
}

/// Deserialize YAML with automatic environment variable interpolation.
///
/// Variables in the format `${VAR_NAME}` or `${VAR_NAME:-default}` are
/// replaced before deserialization.
///
/// # Examples
///
/// ```
/// use imoveis_server::config::loader::from_yaml_str;
/// use serde::Deserialize;
/// use std::env;
///
/// #[derive(Deserialize, Debug)]
/// struct Database {
///     url: String,
///     port: u16,
/// }
///
/// env::set_var("DOC_DB_URL", "sqlite://imoveis.db");
///
/// let yaml = r#"
/// url: ${DOC_DB_URL}
/// port: ${DOC_DB_PORT:-5432}
/// "#;
///
/// let db: Database = from_yaml_str(yaml).unwrap();
/// assert_eq!(db.url, "sqlite://imoveis.db");
/// assert_eq!(db.port, 5432);
/// ```
pub fn from_yaml_str<T: DeserializeOwned>(s: &str) -> Result<T, ConfigError> {
    let interpolated = env_interpolation::interpolate(s)?;
    Ok(serde_yaml::from_str(&interpolated)?)
}

/// Deserialize JSON with automatic environment variable interpolation.
///
/// # Examples
///
/// ```
/// use imoveis_server::config::loader::from_json_str;
/// use serde::Deserialize;
/// use std::env;
///
/// #[derive(Deserialize)]
/// struct Listener {
///     host: String,
/// }
///
/// env::set_var("DOC_LISTEN_HOST", "127.0.0.1");
///
/// let json = r#"{"host": "${DOC_LISTEN_HOST}"}"#;
/// let listener: Listener = from_json_str(json).unwrap();
/// assert_eq!(listener.host, "127.0.0.1");
/// ```
pub fn from_json_str<T: DeserializeOwned>(s: &str) -> Result<T, ConfigError> {
    let interpolated = env_interpolation::interpolate(s)?;
    Ok(serde_json::from_str(&interpolated)?)
}

/// Load the server configuration from a file.
///
/// 1. Reads the file
/// 2. Interpolates environment variables
/// 3. Parses as YAML, falling back to JSON
/// 4. Rejects unknown fields
/// 5. Validates the resulting configuration
///
/// An empty file yields the default configuration.
///
/// ```no_run
/// use imoveis_server::config::loader::load_config_file;
///
/// let config = load_config_file("config/server.yaml").unwrap();
/// println!("Server will bind to {}:{}", config.host, config.port);
/// ```
pub fn load_config_file<P: AsRef<Path>>(path: P) -> Result<ImoveisServerConfig, ConfigError> {
    let path_ref = path.as_ref();
    let content = fs::read_to_string(path_ref)?;

    let interpolated = env_interpolation::interpolate(&content)?;

    // Try YAML first, then JSON
    let value = match serde_yaml::from_str::<serde_yaml::Value>(&interpolated) {
        Ok(value) => value,
        Err(yaml_err) => match serde_json::from_str::<serde_yaml::Value>(&interpolated) {
            Ok(value) => value,
            Err(json_err) => {
                return Err(ConfigError::ParseError {
                    path: path_ref.display().to_string(),
                    yaml_err: yaml_err.to_string(),
                    json_err: json_err.to_string(),
                });
            }
        },
    };

    validation::validate_config(&value)?;

    let config = if value.is_null() {
        ImoveisServerConfig::default()
    } else {
        serde_yaml::from_value::<ImoveisServerConfig>(value)?
    };

    config.validate()?;

    Ok(config)
}

/// Save the configuration to a file in YAML format.
///
/// Environment variable references are not preserved; the interpolated
/// values are written.
pub fn save_config_file<P: AsRef<Path>>(
    config: &ImoveisServerConfig,
    path: P,
) -> Result<(), ConfigError> {
    let content = serde_yaml::to_string(config)?;
    Ok(fs::write(path, content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabaseKind;
    use serial_test::serial;
    use std::env;
    use tempfile::NamedTempFile;

    fn write_temp(content: &str) -> NamedTempFile {
        let temp_file = NamedTempFile::new().unwrap();
        fs::write(temp_file.path(), content).unwrap();
        temp_file
    }

    #[test]
    #[serial]
    fn test_load_config_file_with_env_vars() {
        env::set_var("TEST_IMOVEIS_HOST", "127.0.0.1");
        env::set_var("TEST_IMOVEIS_PORT", "9090");
        env::set_var("TEST_IMOVEIS_DB", "sqlite://test-imoveis.db");

        let temp_file = write_temp(
            r#"
host: ${TEST_IMOVEIS_HOST}
port: ${TEST_IMOVEIS_PORT}
logLevel: debug
database:
  kind: sqlite
  url: ${TEST_IMOVEIS_DB}
"#,
        );

        let config = load_config_file(temp_file.path()).unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9090);
        assert_eq!(config.log_level, "debug");
        assert_eq!(
            config.database.url.as_deref(),
            Some("sqlite://test-imoveis.db")
        );
    }

    #[test]
    #[serial]
    fn test_load_config_file_with_defaults() {
        env::remove_var("TEST_IMOVEIS_MISSING_HOST");

        let temp_file = write_temp(
            r#"
host: ${TEST_IMOVEIS_MISSING_HOST:-localhost}
port: 8080
"#,
        );

        let config = load_config_file(temp_file.path()).unwrap();
        assert_eq!(config.host, "localhost");
    }

    #[test]
    #[serial]
    fn test_load_module_doc_example() {
        for var in ["SERVER_HOST", "SERVER_PORT", "LOG_LEVEL", "DATABASE_URL"] {
            env::remove_var(var);
        }

        let temp_file = write_temp(
            r#"
host: "${SERVER_HOST:-0.0.0.0}"
port: ${SERVER_PORT:-8080}
logLevel: "${LOG_LEVEL:-info}"
database:
  kind: sqlite
  url: "${DATABASE_URL:-sqlite://imoveis.db?mode=rwc}"
  maxConnections: 5
  acquireTimeoutSecs: 30
"#,
        );

        let config = load_config_file(temp_file.path()).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.log_level, "info");
        assert_eq!(
            config.database.url.as_deref(),
            Some("sqlite://imoveis.db?mode=rwc")
        );
    }

    #[test]
    #[serial]
    fn test_quoted_port_is_rejected() {
        env::remove_var("SERVER_PORT");

        let temp_file = write_temp("port: \"${SERVER_PORT:-8080}\"\n");

        let result = load_config_file(temp_file.path());
        assert!(matches!(result, Err(ConfigError::YamlError(_))));
    }

    #[test]
    #[serial]
    fn test_load_config_file_missing_required_var() {
        env::remove_var("TEST_IMOVEIS_REQUIRED");

        let temp_file = write_temp(
            r#"
database:
  url: ${TEST_IMOVEIS_REQUIRED}
"#,
        );

        let result = load_config_file(temp_file.path());
        assert!(matches!(result, Err(ConfigError::InterpolationError(_))));
    }

    #[test]
    fn test_load_json_config() {
        let temp_file = write_temp(
            r#"{"host": "0.0.0.0", "port": 8081, "database": {"kind": "memory"}}"#,
        );

        let config = load_config_file(temp_file.path()).unwrap();
        assert_eq!(config.port, 8081);
        assert_eq!(config.database.kind, DatabaseKind::Memory);
    }

    #[test]
    fn test_empty_file_yields_defaults() {
        let temp_file = write_temp("");
        let config = load_config_file(temp_file.path()).unwrap();
        assert_eq!(config, ImoveisServerConfig::default());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let temp_file = write_temp("host: 0.0.0.0\nlog_level: info\n");

        let result = load_config_file(temp_file.path());
        assert!(matches!(result, Err(ConfigError::UnknownFields(_))));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let temp_file = write_temp("port: 0\n");

        let result = load_config_file(temp_file.path());
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_save_and_load_config_file() {
        let temp_file = NamedTempFile::new().unwrap();

        let mut config = ImoveisServerConfig::default();
        config.host = "localhost".to_string();
        config.port = 9090;
        config.database.kind = DatabaseKind::Memory;

        save_config_file(&config, temp_file.path()).unwrap();
        let loaded = load_config_file(temp_file.path()).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = load_config_file("/nonexistent/imoveis/server.yaml");
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }
}
