//! pga - installer and runner for the prebuilt protoc-gen-angular plugin

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;

#[derive(Parser)]
#[command(name = "pga")]
#[command(author, version, about = "Fetch and run the protoc-gen-angular plugin")]
struct Cli {
    /// Use the legacy one-binary-per-OS asset names (no architecture)
    #[arg(long, global = true)]
    legacy_naming: bool,

    /// Manifest pinning the plugin release version (defaults to the built-in)
    #[arg(long, global = true, value_name = "FILE")]
    manifest: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Download the plugin binary for this machine if it is not installed
    Install {
        /// Re-download even if the binary is already present
        #[arg(short, long)]
        force: bool,
    },
    /// Run the plugin, forwarding all arguments verbatim
    Run {
        /// Arguments for the plugin
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Print the resolved plugin binary path
    Path,
    /// Show plugin version, expected path, and install state
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let ctx = cmd::Context::resolve(cli.manifest.as_deref(), cli.legacy_naming)?;

    match cli.command {
        Commands::Install { force } => cmd::install::install(&ctx, force).await,
        Commands::Run { args } => cmd::run::run(&ctx, &args).await,
        Commands::Path => {
            println!("{}", ctx.plugin_path().display());
            Ok(())
        }
        Commands::Status => cmd::status::status(&ctx),
    }
}
