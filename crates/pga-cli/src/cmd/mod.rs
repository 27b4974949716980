//! Subcommand implementations

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use pga_core::{Layout, Manifest, Naming, Target, default_version};

pub(crate) mod install;
pub(crate) mod run;
pub(crate) mod status;

/// Everything the subcommands need, resolved once from flags and env.
pub(crate) struct Context {
    pub(crate) layout: Layout,
    pub(crate) target: Target,
    pub(crate) naming: Naming,
}

impl Context {
    /// Resolve layout, target, and naming scheme from the global flags.
    pub(crate) fn resolve(manifest: Option<&Path>, legacy_naming: bool) -> Result<Self> {
        let version = match manifest {
            Some(path) => {
                Manifest::load(path)
                    .with_context(|| format!("Failed to load manifest {}", path.display()))?
                    .version
            }
            None => default_version(),
        };

        let layout = Layout::from_env()
            .context("Could not determine home directory. Set PGA_HOME to override.")?;
        let target = Target::current(version);
        tracing::debug!(%target, root = %layout.root().display(), "resolved context");
        let naming = if legacy_naming {
            Naming::PerOs
        } else {
            Naming::PerArch
        };

        Ok(Self {
            layout,
            target,
            naming,
        })
    }

    /// Derived binary location for this context.
    pub(crate) fn plugin_path(&self) -> PathBuf {
        self.layout.plugin_path(&self.target, self.naming)
    }
}
