//! Environment/runtime helpers
//!
//! Sanity checks run once at startup.

use tracing::warn;

/// Warn when the configured frontend directory is missing; static assets would 404.
/// Returns whether the directory exists.
pub async fn check_frontend_dir(frontend_dir: &str) -> bool {
    match tokio::fs::metadata(frontend_dir).await {
        Ok(meta) if meta.is_dir() => true,
        _ => {
            warn!(%frontend_dir, "frontend assets directory not found; static assets may 404");
            false
        }
    }
}
