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

// Allow println! in main.rs for CLI user-facing output (validate command)
#![allow(clippy::print_stdout)]

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use imoveis_server::{load_config_file, save_config_file, ImoveisServer, ImoveisServerConfig};

#[derive(Parser)]
#[command(name = "imoveis-server")]
#[command(about = "CRUD API server for property records")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the configuration file
    #[arg(short, long, default_value = "config/server.yaml", global = true)]
    config: PathBuf,

    /// Override the server port
    #[arg(short, long, global = true)]
    port: Option<u16>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the server (default if no subcommand specified)
    Run {
        /// Path to the configuration file
        #[arg(short, long, default_value = "config/server.yaml")]
        config: PathBuf,

        /// Override the server port
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Validate a configuration file without starting the server
    Validate {
        /// Path to the configuration file to validate
        #[arg(short, long, default_value = "config/server.yaml")]
        config: PathBuf,

        /// Show resolved configuration with environment variables expanded
        #[arg(long)]
        show_resolved: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Run { config, port }) => run_server(config, port).await,
        Some(Commands::Validate {
            config,
            show_resolved,
        }) => validate_config(config, show_resolved),
        None => run_server(cli.config, cli.port).await,
    }
}

/// Load `.env` from the config file's directory, if present.
fn load_env_file(config_path: &Path) -> bool {
    let Some(config_dir) = config_path.parent() else {
        return false;
    };
    let env_file = config_dir.join(".env");
    if !env_file.exists() {
        return false;
    }
    match dotenvy::from_path(&env_file) {
        Ok(_) => true,
        Err(e) => {
            eprintln!("Warning: Failed to load .env file: {e}");
            false
        }
    }
}

/// Install the tracing subscriber; `RUST_LOG` wins over the configured level.
fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    if let Err(e) = tracing_subscriber::fmt().with_env_filter(filter).try_init() {
        eprintln!("Warning: Failed to initialize logging: {e}");
    }
}

/// Run the Imoveis Server
async fn run_server(config_path: PathBuf, port_override: Option<u16>) -> Result<()> {
    let env_file_loaded = load_env_file(&config_path);

    // Check if config file exists, create default if it doesn't
    let config = if !config_path.exists() {
        let mut default_config = ImoveisServerConfig::default();
        if let Some(port) = port_override {
            default_config.port = port;
        }
        init_logging(&default_config.log_level);

        warn!(
            "Config file '{}' not found. Creating default configuration.",
            config_path.display()
        );

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        save_config_file(&default_config, &config_path)?;

        info!(
            "Default configuration created at: {}",
            config_path.display()
        );
        default_config
    } else {
        let config = load_config_file(&config_path)?;
        init_logging(&config.log_level);
        config
    };

    info!("Starting Imoveis Server");
    debug!("Debug logging is enabled");

    if env_file_loaded {
        info!("Loaded environment variables from .env file");
    }

    info!("Config file: {}", config_path.display());

    let final_port = port_override.unwrap_or(config.port);
    info!("Port: {final_port}");
    debug!("Server configuration: {config:?}");

    let server = ImoveisServer::from_config(
        &config,
        final_port,
        Some(config_path.to_string_lossy().to_string()),
    )
    .await?;
    server.run().await?;

    Ok(())
}

/// Validate a configuration file
fn validate_config(config_path: PathBuf, show_resolved: bool) -> Result<()> {
    load_env_file(&config_path);

    println!("Validating configuration: {}", config_path.display());
    println!();

    if !config_path.exists() {
        println!(
            "[ERROR] Configuration file not found: {}",
            config_path.display()
        );
        std::process::exit(1);
    }

    match load_config_file(&config_path) {
        Ok(config) => {
            println!("[OK] Configuration file is valid");
            println!();

            println!("Summary:");
            println!("  Database: {}", config.database.kind);
            println!("  Max connections: {}", config.database.max_connections);

            if show_resolved {
                println!();
                println!("Resolved server settings:");
                println!("  Host: {}", config.host);
                println!("  Port: {}", config.port);
                println!("  Log Level: {}", config.log_level);
                if let Some(url) = &config.database.url {
                    println!("  Database URL: {url}");
                }
                println!(
                    "  Acquire timeout: {}s",
                    config.database.acquire_timeout_secs
                );
            }

            Ok(())
        }
        Err(e) => {
            println!("[ERROR] Configuration is invalid:");
            println!("  {e}");
            std::process::exit(1);
        }
    }
}
