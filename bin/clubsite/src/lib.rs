//! Clubsite CLI Library
//!
//! Command implementations behind the `clubsite` binary.
//!
//! # Modules
//!
//! - [`cmd`] - Command implementations (check, search, serve)
//! - [`server`] - Static file router for the built site and its fixtures
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use clubsite::cmd;
//!
//! // Validate configuration and fixtures
//! cmd::check::run(Path::new("clubsite.toml"), false).unwrap();
//! ```

pub mod cmd;
pub mod server;

pub use clubsite_core::{Catalog, Config};

/// Initialize tracing with the specified verbosity level.
///
/// * `verbose` - Verbosity level (0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE)
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}
