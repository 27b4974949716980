//! Download helper: URL in, complete file on disk out.
//!
//! The bootstrap only depends on the [`Fetcher`] contract, so tests can
//! substitute a stub that writes a placeholder or fails on demand. The real
//! implementation streams over HTTPS with no retries and no verification;
//! failures are fatal to the operation that triggered them.

use std::path::Path;

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::Client;
use thiserror::Error;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

/// Remote fetch failure (network, HTTP status, or local write).
#[derive(Error, Debug)]
pub enum DownloadError {
    /// The request failed or the server answered with an error status.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body could not be written to the destination.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A download operation: resolves after the complete file is at `dest`, or
/// fails with an error carrying a human-readable message.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch `url` into the file at `dest`.
    async fn fetch(&self, url: &str, dest: &Path) -> Result<(), DownloadError>;
}

/// Streaming HTTPS fetcher backed by a shared [`reqwest::Client`].
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Fetcher reusing an existing client (connection pool).
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str, dest: &Path) -> Result<(), DownloadError> {
        let user_agent = format!("pga/{}", env!("CARGO_PKG_VERSION"));

        let response = self
            .client
            .get(url)
            .header(reqwest::header::USER_AGENT, &user_agent)
            .send()
            .await?
            .error_for_status()?;

        let total_size = response.content_length().unwrap_or(0);
        tracing::debug!(url, total_size, "starting download");

        let mut file = File::create(dest).await?;
        let mut stream = response.bytes_stream();
        let mut downloaded: u64 = 0;

        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            file.write_all(&chunk).await?;
            downloaded += chunk.len() as u64;
        }

        file.flush().await?;
        tracing::debug!(url, downloaded, "download complete");
        Ok(())
    }
}
