/*
 * SPDX-FileCopyrightText: 2024 A3Mailer Project
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

//! # Template Server
//!
//! HTTP front end for the template generator. Accepts a signature
//! description and a target language on `POST /api/v1/template` and answers
//! with the generated source text.

pub mod api;
pub mod cli;
pub mod config;
pub mod error;

use std::path::Path;

use anyhow::Context;
use template_generator::{generate_template, TemplateRequest};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub use config::ServerConfig;

/// Initialize logging. `RUST_LOG` takes precedence over the configured level.
pub fn init_logging(config: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    // A subscriber may already be installed, e.g. by tests
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Load configuration, install logging from it and log the effective settings
pub async fn load_config(path: Option<&Path>) -> anyhow::Result<ServerConfig> {
    let config = ServerConfig::load(path).await?;
    init_logging(&config);

    info!(
        source = %path.map_or_else(|| "defaults".to_string(), |p| p.display().to_string()),
        listen_address = %config.listen_address,
        listen_port = config.listen_port,
        log_level = %config.log_level,
        "Configuration loaded"
    );
    Ok(config)
}

/// Serve the API until Ctrl-C
pub async fn serve(config: &ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!(address = %addr, "Template server listening");

    axum::serve(listener, api::router())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Template server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received, stopping server");
    }
}

/// Generate one template from a JSON request file
pub async fn generate_from_file(path: &Path) -> anyhow::Result<String> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let request = TemplateRequest::from_json(&content)
        .with_context(|| format!("Invalid request in {}", path.display()))?;
    let response = generate_template(&request)?;
    Ok(response.template)
}
