//! Environment/runtime helpers
//!
//! Sanity checks for the directories the web process expects at startup.

use tracing::warn;

/// Warn when the static asset directory is missing; pages still render
/// but stylesheets will 404.
pub async fn ensure_env(static_dir: &str) -> anyhow::Result<()> {
    match tokio::fs::metadata(static_dir).await {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(anyhow::anyhow!("{static_dir} exists but is not a directory")),
        Err(_) => {
            warn!(%static_dir, "static assets directory not found; static files will 404");
            Ok(())
        }
    }
}
