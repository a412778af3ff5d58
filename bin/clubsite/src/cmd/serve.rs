//! Serve command - host the built site and its fixtures

use std::path::{Path, PathBuf};

use clubsite_core::Config;
use color_eyre::eyre::{Result, WrapErr, bail};
use tokio::net::TcpListener;

use crate::server::{DATA_PREFIX, create_router};

/// Run the serve command.
///
/// `port` and `dist` override the `[server]` section of the configuration.
pub async fn run(config_path: &Path, port: Option<u16>, dist: Option<PathBuf>) -> Result<()> {
    tracing::info!(?config_path, ?port, ?dist, "Starting server");

    let config = Config::load_with_env(config_path).wrap_err("Failed to load configuration")?;
    let port = port.unwrap_or(config.server.port);
    let dist_dir = dist.unwrap_or(config.server.dist_dir);

    if !dist_dir.is_dir() {
        bail!(
            "Site directory does not exist: {} (build the frontend first)",
            dist_dir.display()
        );
    }
    if !config.data.dir.is_dir() {
        tracing::warn!(dir = %config.data.dir.display(), "data directory missing");
    }

    let app = create_router(&dist_dir, &config.data.dir);
    let addr = format!("127.0.0.1:{port}");

    let listener = TcpListener::bind(&addr)
        .await
        .wrap_err_with(|| format!("Failed to bind to {addr}"))?;

    println!();
    println!("  {} running at http://{addr}", config.site.title);
    println!("  Fixtures under http://{addr}{DATA_PREFIX}/");
    println!("  Press Ctrl+C to stop");
    println!();

    axum::serve(listener, app).await.wrap_err("Server error")?;

    Ok(())
}
