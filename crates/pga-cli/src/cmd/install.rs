//! Install command - fetch the plugin binary for this machine

use anyhow::{Context as _, Result};
use pga_core::{Bootstrap, HttpFetcher, ensure_plugin};

use super::Context;

/// Ensure the plugin binary is installed, downloading it if absent.
///
/// Failures print a diagnostic naming the failed URL and exit the process
/// with status 1 (via the propagated error).
pub(crate) async fn install(ctx: &Context, force: bool) -> Result<()> {
    if force {
        let path = ctx.plugin_path();
        if path.exists() {
            tokio::fs::remove_file(&path)
                .await
                .with_context(|| format!("Failed to remove {}", path.display()))?;
            println!("Removed {}", path.display());
        }
    }

    let fetcher = HttpFetcher::new(reqwest::Client::new());
    let outcome = ensure_plugin(&ctx.layout, &ctx.target, ctx.naming, &fetcher).await?;

    match outcome {
        Bootstrap::AlreadyPresent => {
            println!(
                "protoc-gen-angular v{} already installed at {}",
                ctx.target.version,
                ctx.plugin_path().display()
            );
        }
        Bootstrap::Downloaded { url } => {
            println!("Downloaded {url}");
            println!(
                "protoc-gen-angular v{} installed at {}",
                ctx.target.version,
                ctx.plugin_path().display()
            );
        }
    }

    Ok(())
}
