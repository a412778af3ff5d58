//! Static file server for a built site and its fixtures.

use std::path::Path;

use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

/// URL prefix the fixture directory is mounted under.
pub const DATA_PREFIX: &str = "/data";

/// Create the router serving `dist_dir` at the root and `data_dir` under [`DATA_PREFIX`].
///
/// Unknown paths fall back to `index.html` so client-side routes such as `/people`
/// survive a reload.
pub fn create_router(dist_dir: &Path, data_dir: &Path) -> Router {
    let index = dist_dir.join("index.html");

    Router::new()
        .nest_service(DATA_PREFIX, ServeDir::new(data_dir))
        .fallback_service(ServeDir::new(dist_dir).fallback(ServeFile::new(index)))
}
