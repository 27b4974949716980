//! Status command - report install state

use anyhow::Result;

use super::Context;

/// Print plugin version, expected binary location, and whether it is
/// installed.
pub(crate) fn status(ctx: &Context) -> Result<()> {
    let path = ctx.plugin_path();
    println!("plugin:    protoc-gen-angular");
    println!("version:   {}", ctx.target.version);
    println!("target:    {}-{}", ctx.target.platform, ctx.target.arch);
    println!("path:      {}", path.display());
    println!(
        "installed: {}",
        if path.exists() { "yes" } else { "no" }
    );
    Ok(())
}
