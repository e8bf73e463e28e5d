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

use anyhow::Result;
use axum::Router;
use log::info;
use std::future::Future;
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::net::TcpListener;

use crate::api;
use crate::config::ImoveisServerConfig;
use crate::load_config_file;
use crate::store::{self, SharedStore};

pub struct ImoveisServer {
    store: SharedStore,
    host: String,
    port: u16,
    log_level: String,
    config_file_path: Option<String>,
}

impl ImoveisServer {
    /// Create an ImoveisServer from a configuration file, listening on `port`
    pub async fn new(config_path: PathBuf, port: u16) -> Result<Self> {
        let config = load_config_file(&config_path)?;
        let config_file = config_path.to_string_lossy().to_string();
        Self::from_config(&config, port, Some(config_file)).await
    }

    /// Create an ImoveisServer from an already loaded configuration
    pub async fn from_config(
        config: &ImoveisServerConfig,
        port: u16,
        config_file_path: Option<String>,
    ) -> Result<Self> {
        config.validate()?;

        info!("Opening {} store", config.database.kind);
        let store = store::open_store(&config.database)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to open store: {e}"))?;

        Ok(Self::from_store(
            store,
            config.host.clone(),
            port,
            config_file_path,
        )
        .with_log_level(&config.log_level))
    }

    /// Create an ImoveisServer around a pre-built store (for use with builder)
    pub fn from_store(
        store: SharedStore,
        host: String,
        port: u16,
        config_file_path: Option<String>,
    ) -> Self {
        Self {
            store,
            host,
            port,
            log_level: "info".to_string(),
            config_file_path,
        }
    }

    /// Record the level logging was initialised with, for the startup banner.
    pub fn with_log_level(mut self, level: &str) -> Self {
        self.log_level = level.to_string();
        self
    }

    pub fn store(&self) -> SharedStore {
        self.store.clone()
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn log_level(&self) -> &str {
        &self.log_level
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// The full application router for this server's store.
    pub fn router(&self) -> Router {
        api::build_router(self.store.clone())
    }

    /// Bind the configured address and serve until Ctrl+C.
    #[allow(clippy::print_stdout)]
    pub async fn run(self) -> Result<()> {
        println!("Starting Imoveis Server");
        if let Some(config_file) = &self.config_file_path {
            println!("  Config file: {config_file}");
        }
        println!("  API Port: {}", self.port);
        println!("  Log level: {}", self.log_level);

        let addr = self.address();
        let listener = TcpListener::bind(&addr).await?;
        info!("Starting web API on {addr}");
        info!("Swagger UI available at http://{addr}/docs/");

        self.serve(listener, shutdown_signal()).await
    }

    /// Serve on an already bound listener until `shutdown` resolves.
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let local_addr: SocketAddr = listener.local_addr()?;
        let app = self.router();

        info!("Imoveis Server listening on {local_addr}");
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("Shutting down Imoveis Server");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {e}");
    }
}
