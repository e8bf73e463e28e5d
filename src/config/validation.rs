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

//! Configuration field validation.
//!
//! Catches typos and snake_case keys that serde defaults would otherwise
//! silently ignore (e.g. `log_level` instead of `logLevel`).

use std::collections::HashSet;

/// Validation error for unknown configuration fields.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("{0}")]
    UnknownField(String),

    #[error("Multiple validation errors:\n{}", .0.join("\n"))]
    Multiple(Vec<String>),
}

/// Known fields for server-level configuration.
const SERVER_FIELDS: &[&str] = &["host", "port", "logLevel", "database"];

/// Known fields for the `database` section.
const DATABASE_FIELDS: &[&str] = &["kind", "url", "maxConnections", "acquireTimeoutSecs"];

/// Validate a parsed configuration value and report every unknown field.
pub fn validate_config(value: &serde_yaml::Value) -> Result<(), ValidationError> {
    let mut errors = Vec::new();

    if let Some(map) = value.as_mapping() {
        validate_fields(map, SERVER_FIELDS, "server configuration", &mut errors);

        if let Some(database) = map.get("database").and_then(|d| d.as_mapping()) {
            validate_fields(database, DATABASE_FIELDS, "database", &mut errors);
        }
    }

    match errors.len() {
        0 => Ok(()),
        1 => Err(ValidationError::UnknownField(errors.remove(0))),
        _ => Err(ValidationError::Multiple(errors)),
    }
}

fn validate_fields(
    map: &serde_yaml::Mapping,
    valid_fields: &[&str],
    context: &str,
    errors: &mut Vec<String>,
) {
    let valid_set: HashSet<&str> = valid_fields.iter().copied().collect();

    for key in map.keys() {
        if let Some(key_str) = key.as_str() {
            if !valid_set.contains(key_str) {
                errors.push(format!(
                    "Unknown field '{key_str}' in {context}. Valid fields: {valid_fields:?}"
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(yaml: &str) -> serde_yaml::Value {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_valid_config_passes() {
        let value = parse(
            r#"
            host: 0.0.0.0
            port: 8080
            logLevel: info
            database:
              kind: sqlite
              url: sqlite://imoveis.db
              maxConnections: 5
              acquireTimeoutSecs: 10
        "#,
        );

        let result = validate_config(&value);
        assert!(result.is_ok(), "Valid config should pass: {result:?}");
    }

    #[test]
    fn test_snake_case_log_level_rejected() {
        let value = parse(
            r#"
            host: 0.0.0.0
            log_level: info
        "#,
        );

        let err = validate_config(&value).unwrap_err().to_string();
        assert!(err.contains("log_level"), "Error should mention log_level: {err}");
    }

    #[test]
    fn test_snake_case_database_field_rejected() {
        let value = parse(
            r#"
            database:
              kind: sqlite
              max_connections: 5
        "#,
        );

        let err = validate_config(&value).unwrap_err().to_string();
        assert!(
            err.contains("max_connections") && err.contains("database"),
            "Error should mention the database field: {err}"
        );
    }

    #[test]
    fn test_multiple_errors_all_reported() {
        let value = parse(
            r#"
            hostname: localhost
            database:
              path: imoveis.db
        "#,
        );

        match validate_config(&value) {
            Err(ValidationError::Multiple(errors)) => {
                assert_eq!(errors.len(), 2);
                assert!(errors.iter().any(|e| e.contains("hostname")));
                assert!(errors.iter().any(|e| e.contains("path")));
            }
            other => panic!("Expected multiple errors, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_document_passes() {
        assert!(validate_config(&serde_yaml::Value::Null).is_ok());
    }
}
