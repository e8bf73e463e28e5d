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

pub mod api;
pub mod builder;
pub mod config;
pub mod server;
pub mod store;

// Main exports for library users
pub use api::build_router;
pub use builder::ImoveisServerBuilder;
pub use server::ImoveisServer;

// Configuration
pub use config::{
    from_json_str, from_yaml_str, load_config_file, save_config_file, ConfigError,
    DatabaseKind, DatabaseSettings, ImoveisServerConfig,
};

// Data access
pub use api::models::{Property, PropertyInput};
pub use store::{
    open_store, CollectionFilter, MemoryStore, PropertyStore, SharedStore, SqliteStore,
    StoreError, StoreResult,
};
