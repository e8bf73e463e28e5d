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

//! Configuration management for the imoveis server.
//!
//! - Type-safe configuration structures
//! - Automatic environment variable interpolation
//! - YAML and JSON file loading
//! - Unknown-field and value validation
//!
//! # Configuration File Example
//!
//! ```yaml
//! host: "${SERVER_HOST:-0.0.0.0}"
//! port: ${SERVER_PORT:-8080}
//! logLevel: "${LOG_LEVEL:-info}"
//! database:
//!   kind: sqlite
//!   url: "${DATABASE_URL:-sqlite://imoveis.db?mode=rwc}"
//!   maxConnections: 5
//!   acquireTimeoutSecs: 30
//! ```
//!
//! Numeric fields must stay unquoted so the interpolated value parses as a number.

pub mod env_interpolation;
pub mod loader;
pub mod types;
pub mod validation;

pub use loader::{from_json_str, from_yaml_str, load_config_file, save_config_file, ConfigError};
pub use types::{DatabaseKind, DatabaseSettings, ImoveisServerConfig};
