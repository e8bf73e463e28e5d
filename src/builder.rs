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

use std::sync::Arc;

use crate::api::models::Property;
use crate::config::DatabaseSettings;
use crate::server::ImoveisServer;
use crate::store::{self, MemoryStore, PropertyStore, SharedStore, StoreResult};

/// Builder for creating an ImoveisServer programmatically
pub struct ImoveisServerBuilder {
    store: Option<SharedStore>,
    database: Option<DatabaseSettings>,
    port: u16,
    host: String,
    config_file_path: Option<String>,
}

impl Default for ImoveisServerBuilder {
    fn default() -> Self {
        Self {
            store: None,
            database: None,
            port: 8080,
            host: "127.0.0.1".to_string(),
            config_file_path: None,
        }
    }
}

impl ImoveisServerBuilder {
    /// Create a new ImoveisServerBuilder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a pre-built store instance
    pub fn with_store(mut self, store: impl PropertyStore + 'static) -> Self {
        self.store = Some(Arc::new(store));
        self
    }

    /// Use an in-memory store seeded with `records`
    pub fn with_records(self, records: impl IntoIterator<Item = Property>) -> Self {
        self.with_store(MemoryStore::with_records(records))
    }

    /// Open the store from database settings when the server is built
    ///
    /// Ignored if a store instance was also supplied.
    pub fn with_database(mut self, settings: DatabaseSettings) -> Self {
        self.database = Some(settings);
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_host_port(mut self, host: impl Into<String>, port: u16) -> Self {
        self.host = host.into();
        self.port = port;
        self
    }

    /// Record the config file this server was created from
    pub fn with_config_file(mut self, path: impl Into<String>) -> Self {
        self.config_file_path = Some(path.into());
        self
    }

    /// Build an ImoveisServer
    ///
    /// Without a store or database settings an empty in-memory store is used.
    pub async fn build(self) -> StoreResult<ImoveisServer> {
        let store = match (self.store, self.database) {
            (Some(store), _) => store,
            (None, Some(settings)) => store::open_store(&settings).await?,
            (None, None) => Arc::new(MemoryStore::new()),
        };

        Ok(ImoveisServer::from_store(
            store,
            self.host,
            self.port,
            self.config_file_path,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabaseKind;

    #[test]
    fn test_builder_defaults() {
        let builder = ImoveisServerBuilder::new();
        assert_eq!(builder.host, "127.0.0.1");
        assert_eq!(builder.port, 8080);
        assert!(builder.store.is_none());
    }

    #[test]
    fn test_builder_fluent_api() {
        let builder = ImoveisServerBuilder::new()
            .with_host_port("0.0.0.0", 9090)
            .with_config_file("config/server.yaml");

        assert_eq!(builder.host, "0.0.0.0");
        assert_eq!(builder.port, 9090);
        assert_eq!(
            builder.config_file_path.as_deref(),
            Some("config/server.yaml")
        );
    }

    #[tokio::test]
    async fn test_build_without_store_uses_empty_memory_store() {
        let server = ImoveisServerBuilder::new().with_port(9191).build().await.unwrap();

        assert_eq!(server.address(), "127.0.0.1:9191");
        let all = server
            .store()
            .fetch_collection(&store::CollectionFilter::All)
            .await
            .unwrap();
        assert!(all.is_empty());
    }

    #[tokio::test]
    async fn test_build_from_database_settings() {
        let settings = DatabaseSettings {
            kind: DatabaseKind::Sqlite,
            url: Some("sqlite::memory:".to_string()),
            ..Default::default()
        };

        let server = ImoveisServerBuilder::new()
            .with_database(settings)
            .build()
            .await
            .unwrap();

        assert!(server.store().fetch_by_id(1).await.unwrap().is_none());
    }
}
