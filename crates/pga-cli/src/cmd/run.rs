//! Run command - spawn the plugin with forwarded arguments

use anyhow::{Context as _, Result};
use pga_core::{HttpFetcher, Plugin, SpawnOptions, ensure_plugin};

use super::Context;

/// Ensure the plugin is present, then run it with the caller's arguments
/// and the parent's standard streams, propagating the child's exit code.
pub(crate) async fn run(ctx: &Context, args: &[String]) -> Result<()> {
    let fetcher = HttpFetcher::new(reqwest::Client::new());
    ensure_plugin(&ctx.layout, &ctx.target, ctx.naming, &fetcher).await?;

    let plugin = Plugin::resolve(&ctx.layout, &ctx.target, ctx.naming);
    let mut child = plugin.spawn(args, &SpawnOptions::default())?;

    let status = child
        .wait()
        .await
        .context("Failed to wait on plugin process")?;

    if !status.success() {
        std::process::exit(status.code().unwrap_or(1));
    }

    Ok(())
}
