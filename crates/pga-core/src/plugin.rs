//! Invocation facade: spawn the resolved plugin binary.
//!
//! A [`Plugin`] resolves its binary path once at construction and never
//! re-derives it per call. Spawning forwards the caller's arguments
//! verbatim and hands back the [`tokio::process::Child`] untouched; waiting
//! on, reading from, or killing the child is entirely the caller's concern.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::Stdio;

use thiserror::Error;
use tokio::process::{Child, Command};

use crate::layout::{Layout, Naming};
use crate::target::Target;

/// Spawn failure, reported before or by the OS-level spawn.
#[derive(Error, Debug)]
pub enum SpawnError {
    /// The plugin binary is not on disk. Run the bootstrap (or `pga
    /// install`) first.
    #[error("Plugin binary not found at {path}. Run the bootstrap first.")]
    Missing {
        /// Path the binary was expected at.
        path: PathBuf,
    },

    /// The OS refused to spawn the process (not executable, bad interpreter).
    #[error("Failed to spawn {path}: {source}")]
    Spawn {
        /// Path of the binary that failed to spawn.
        path: PathBuf,
        /// Error reported by the OS spawn primitive.
        source: std::io::Error,
    },
}

/// How one of the child's standard streams is wired up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StreamMode {
    /// Share the parent's stream (default).
    #[default]
    Inherit,
    /// Capture through a pipe on the returned child handle.
    Piped,
    /// Discard.
    Null,
}

impl StreamMode {
    fn to_stdio(self) -> Stdio {
        match self {
            Self::Inherit => Stdio::inherit(),
            Self::Piped => Stdio::piped(),
            Self::Null => Stdio::null(),
        }
    }
}

/// Process-spawn options forwarded untouched to the underlying command.
#[derive(Debug, Clone, Default)]
pub struct SpawnOptions {
    /// Working directory for the child, if different from the parent's.
    pub current_dir: Option<PathBuf>,
    /// Extra environment variables layered over the inherited environment.
    pub envs: HashMap<String, String>,
    /// Standard input wiring. protoc drives the plugin over stdin.
    pub stdin: StreamMode,
    /// Standard output wiring. The plugin answers protoc over stdout.
    pub stdout: StreamMode,
    /// Standard error wiring.
    pub stderr: StreamMode,
}

/// Handle on the resolved plugin binary.
#[derive(Debug, Clone)]
pub struct Plugin {
    path: PathBuf,
}

impl Plugin {
    /// Resolve the plugin for a target within a layout. The path is derived
    /// once here; existence is only checked at spawn time.
    pub fn resolve(layout: &Layout, target: &Target, naming: Naming) -> Self {
        Self {
            path: layout.plugin_path(target, naming),
        }
    }

    /// Plugin handle for an explicit binary path.
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    /// The resolved binary location, for packaging or diagnostics.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Assemble the command that [`spawn`](Self::spawn) would run: program
    /// is the resolved binary, argv is `args` forwarded verbatim.
    pub fn command<I, S>(&self, args: I, options: &SpawnOptions) -> Command
    where
        I: IntoIterator<Item = S>,
        S: AsRef<std::ffi::OsStr>,
    {
        let mut cmd = Command::new(&self.path);
        cmd.args(args)
            .envs(&options.envs)
            .stdin(options.stdin.to_stdio())
            .stdout(options.stdout.to_stdio())
            .stderr(options.stderr.to_stdio());
        if let Some(dir) = &options.current_dir {
            cmd.current_dir(dir);
        }
        cmd
    }

    /// Spawn the plugin with the given arguments.
    ///
    /// Returns the child handle without waiting on it. The caller observes
    /// completion via `wait()`, reads any piped streams, and may `kill()`.
    ///
    /// # Errors
    ///
    /// [`SpawnError::Missing`] if the binary is not on disk,
    /// [`SpawnError::Spawn`] if the OS-level spawn fails.
    pub fn spawn<I, S>(&self, args: I, options: &SpawnOptions) -> Result<Child, SpawnError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<std::ffi::OsStr>,
    {
        if !self.path.exists() {
            return Err(SpawnError::Missing {
                path: self.path.clone(),
            });
        }

        self.command(args, options)
            .spawn()
            .map_err(|source| SpawnError::Spawn {
                path: self.path.clone(),
                source,
            })
    }
}
