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

//! Configuration types for the imoveis server.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Top-level server configuration.
///
/// Built once at startup and passed by reference to whatever needs it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImoveisServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub database: DatabaseSettings,
}

impl Default for ImoveisServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
            database: DatabaseSettings::default(),
        }
    }
}

/// Which store backend to run against.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseKind {
    Sqlite,
    Memory,
}

impl std::fmt::Display for DatabaseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatabaseKind::Sqlite => write!(f, "sqlite"),
            DatabaseKind::Memory => write!(f, "memory"),
        }
    }
}

/// Store connection settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseSettings {
    #[serde(default = "default_database_kind")]
    pub kind: DatabaseKind,
    /// Connection URL, required for `sqlite`
    #[serde(default = "default_database_url", skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Seconds a request waits for a pooled connection before failing
    #[serde(default = "default_acquire_timeout_secs")]
    pub acquire_timeout_secs: u64,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            kind: default_database_kind(),
            url: default_database_url(),
            max_connections: default_max_connections(),
            acquire_timeout_secs: default_acquire_timeout_secs(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_database_kind() -> DatabaseKind {
    DatabaseKind::Sqlite
}

fn default_database_url() -> Option<String> {
    Some("sqlite://imoveis.db?mode=rwc".to_string())
}

fn default_max_connections() -> u32 {
    5
}

fn default_acquire_timeout_secs() -> u64 {
    30
}

impl ImoveisServerConfig {
    /// Check the semantic constraints serde cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(anyhow!("Invalid port: 0 (cannot be 0)"));
        }

        if self.host.trim().is_empty() {
            return Err(anyhow!("host cannot be empty"));
        }

        if !VALID_LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(anyhow!(
                "Invalid logLevel '{}'. Valid levels: {VALID_LOG_LEVELS:?}",
                self.log_level
            ));
        }

        self.database.validate()
    }
}

impl DatabaseSettings {
    pub fn validate(&self) -> Result<()> {
        if self.kind == DatabaseKind::Sqlite
            && self.url.as_deref().map_or(true, |u| u.trim().is_empty())
        {
            return Err(anyhow!("database.url is required when database.kind is sqlite"));
        }

        if self.max_connections == 0 {
            return Err(anyhow!("database.maxConnections must be at least 1"));
        }

        Ok(())
    }
}
