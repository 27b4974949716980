//! Acquisition bootstrap: make sure the plugin binary is on disk.
//!
//! Idempotent by construction: once a binary exists at its derived path it
//! is never re-verified or re-fetched for the same version. Downloads stage
//! into a `.part` file and rename into place, so a crashed or failed fetch
//! never leaves a half-written binary at the final path.

use std::path::Path;

use thiserror::Error;

use crate::fetch::{DownloadError, Fetcher};
use crate::layout::{Layout, Naming};
use crate::target::Target;

/// Bootstrap failure. Download errors always carry the failing URL so both
/// library and CLI callers can report it.
#[derive(Error, Debug)]
pub enum BootstrapError {
    /// The remote fetch failed.
    #[error("Failed to download {url}: {source}")]
    Download {
        /// URL whose fetch failed.
        url: String,
        /// Underlying download failure.
        source: DownloadError,
    },

    /// Creating the release directory, fixing permissions, or moving the
    /// staged file into place failed.
    #[error("Filesystem error: {0}")]
    Filesystem(#[from] std::io::Error),
}

/// What the bootstrap did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bootstrap {
    /// The binary was already at its derived path; nothing was fetched.
    AlreadyPresent,
    /// The binary was fetched from `url` and installed.
    Downloaded {
        /// URL the binary was fetched from.
        url: String,
    },
}

/// Ensure the plugin binary for `target` exists at its derived path,
/// fetching it if absent and marking it executable.
///
/// # Errors
///
/// [`BootstrapError::Download`] if the fetch fails (the error names the
/// URL), [`BootstrapError::Filesystem`] if the binary cannot be staged,
/// made executable, or moved into place.
pub async fn ensure_plugin(
    layout: &Layout,
    target: &Target,
    naming: Naming,
    fetcher: &dyn Fetcher,
) -> Result<Bootstrap, BootstrapError> {
    let dest = layout.plugin_path(target, naming);
    if dest.exists() {
        tracing::debug!(path = %dest.display(), "plugin already installed");
        return Ok(Bootstrap::AlreadyPresent);
    }

    let url = layout.download_url(target, naming);
    tracing::info!(%target, url, "fetching plugin binary");

    tokio::fs::create_dir_all(layout.release_dir()).await?;

    let staging = dest.with_extension("part");
    if let Err(source) = fetcher.fetch(&url, &staging).await {
        tokio::fs::remove_file(&staging).await.ok();
        return Err(BootstrapError::Download { url, source });
    }

    make_executable(&staging).await?;
    tokio::fs::rename(&staging, &dest).await?;

    tracing::info!(path = %dest.display(), "plugin installed");
    Ok(Bootstrap::Downloaded { url })
}

/// Downloaded files do not retain the execute bit; set 0755 explicitly.
#[cfg(unix)]
async fn make_executable(path: &Path) -> std::io::Result<()> {
    use std::fs::Permissions;
    use std::os::unix::fs::PermissionsExt;
    tokio::fs::set_permissions(path, Permissions::from_mode(0o755)).await
}

#[cfg(not(unix))]
async fn make_executable(_path: &Path) -> std::io::Result<()> {
    Ok(())
}
