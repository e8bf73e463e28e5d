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

//! Environment variable interpolation for configuration files.
//!
//! POSIX-style references are replaced before the file is parsed:
//! - `${VAR_NAME}` - required variable
//! - `${VAR_NAME:-default}` - variable with a default used when unset or empty
//!
//! ```
//! use imoveis_server::config::env_interpolation::interpolate;
//! use std::env;
//!
//! env::set_var("DOC_IMOVEIS_DB", "sqlite://imoveis.db");
//!
//! let input = r#"
//! database:
//!   url: ${DOC_IMOVEIS_DB}
//!   maxConnections: ${DOC_IMOVEIS_POOL:-5}
//! "#;
//!
//! let result = interpolate(input).unwrap();
//! assert!(result.contains("url: sqlite://imoveis.db"));
//! assert!(result.contains("maxConnections: 5"));
//! ```

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use std::env;

/// Upper bound on the interpolated output size.
const MAX_INTERPOLATED_LENGTH: usize = 10_000_000;

lazy_static! {
    /// `${NAME}` or `${NAME:-default}`; group 1 is the name, group 3 the default.
    static ref ENV_VAR_PATTERN: Regex = Regex::new(
        r"\$\{([A-Za-z_][A-Za-z0-9_]*)(:-([^}]*))?\}"
    ).expect("Invalid regex pattern");
}

/// Errors that can occur during environment variable interpolation.
#[derive(Debug, thiserror::Error)]
pub enum InterpolationError {
    #[error("Environment variable '{name}' is not set and has no default value")]
    MissingVariable { name: String },

    #[error("Interpolated result exceeds maximum allowed length of {MAX_INTERPOLATED_LENGTH} bytes")]
    ResultTooLarge,
}

/// Replace every `${...}` reference in `input` with its environment value.
///
/// Substituted values are not scanned again, so there is no recursive
/// expansion. Names must start with a letter or underscore; anything else
/// is left untouched.
pub fn interpolate(input: &str) -> Result<String, InterpolationError> {
    let mut result = String::with_capacity(input.len());
    let mut last_match_end = 0;
    let mut variables_used = Vec::new();

    for caps in ENV_VAR_PATTERN.captures_iter(input) {
        let (Some(full_match), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let var_name = name.as_str();
        let default_value = caps.get(3).map(|m| m.as_str());

        result.push_str(&input[last_match_end..full_match.start()]);

        let value = match env::var(var_name) {
            Ok(val) if !val.is_empty() => val,
            Ok(_) | Err(env::VarError::NotPresent) => match default_value {
                Some(default) => default.to_string(),
                None => {
                    return Err(InterpolationError::MissingVariable {
                        name: var_name.to_string(),
                    });
                }
            },
            Err(env::VarError::NotUnicode(_)) => {
                return Err(InterpolationError::MissingVariable {
                    name: format!("{var_name} (contains invalid Unicode)"),
                });
            }
        };

        variables_used.push(var_name);
        result.push_str(&value);
        last_match_end = full_match.end();

        if result.len() > MAX_INTERPOLATED_LENGTH {
            return Err(InterpolationError::ResultTooLarge);
        }
    }

    result.push_str(&input[last_match_end..]);

    // Names only; values may be credentials.
    if !variables_used.is_empty() {
        debug!(
            "Interpolated environment variables: {}",
            variables_used.join(", ")
        );
    }

    Ok(result)
}
