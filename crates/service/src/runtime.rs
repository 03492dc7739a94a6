//! Runtime environment helpers
//!
//! Thin wrapper around `common::env` so the server crate imports
//! `service::runtime::ensure_env` without depending directly on `common`.

/// Warn when the static asset directory is missing.
pub async fn ensure_env(static_dir: &str) -> anyhow::Result<()> {
    common::env::ensure_env(static_dir).await
}
