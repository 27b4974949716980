//! Where plugin binaries live on disk and where they are fetched from.
//!
//! Both the local path and the download URL are pure functions of the
//! [`Target`] and the [`Naming`] scheme, and are derived from the same
//! asset filename. That shared filename is the invariant that guarantees a
//! successful download always lands content valid for its local path.

use std::path::PathBuf;

use crate::target::Target;

/// Basename prefix shared by every release asset.
pub const PLUGIN_PREFIX: &str = "protoc-gen-angular";

/// Directory under the pga home that holds fetched binaries.
pub const RELEASE_DIR: &str = "release";

/// Default GitHub project hosting the release assets.
pub const DEFAULT_RELEASE_BASE_URL: &str = "https://github.com/zaucy/protoc-gen-angular";

/// Asset filename scheme.
///
/// Older releases published one binary per operating system; current
/// releases qualify the filename with the CPU architecture as well. Both
/// distributions remain supported through this flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Naming {
    /// `protoc-gen-angular-<platform>-<arch>[.exe]` (current scheme).
    #[default]
    PerArch,
    /// `protoc-gen-angular-<platform>[.exe]` (legacy, one binary per OS).
    PerOs,
}

/// Filesystem root for fetched plugin binaries.
#[derive(Debug, Clone)]
pub struct Layout {
    root: PathBuf,
    base_url: String,
}

impl Layout {
    /// Layout rooted at an explicit directory, downloading from the default
    /// release host.
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            base_url: DEFAULT_RELEASE_BASE_URL.to_string(),
        }
    }

    /// Layout honoring the `PGA_HOME` and `PGA_RELEASE_BASE_URL` overrides,
    /// falling back to `~/.pga` and the default release host.
    ///
    /// Returns `None` only if neither `PGA_HOME` is set nor the user's home
    /// directory can be resolved.
    pub fn from_env() -> Option<Self> {
        let root = match std::env::var("PGA_HOME") {
            Ok(val) => PathBuf::from(val),
            Err(_) => dirs::home_dir()?.join(".pga"),
        };
        let base_url = std::env::var("PGA_RELEASE_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_RELEASE_BASE_URL.to_string());
        Some(Self { root, base_url })
    }

    /// Override the release host, e.g. for a mirror. Trailing slashes are
    /// trimmed so URL assembly stays uniform.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Root directory of this layout.
    pub fn root(&self) -> &std::path::Path {
        &self.root
    }

    /// Directory that holds (or will hold) fetched binaries.
    pub fn release_dir(&self) -> PathBuf {
        self.root.join(RELEASE_DIR)
    }

    /// Local path of the plugin binary for a target.
    pub fn plugin_path(&self, target: &Target, naming: Naming) -> PathBuf {
        self.release_dir().join(asset_name(target, naming))
    }

    /// Download URL of the plugin binary for a target.
    ///
    /// The URL's last path segment always equals the basename returned by
    /// [`plugin_path`](Self::plugin_path) for the same target and scheme.
    pub fn download_url(&self, target: &Target, naming: Naming) -> String {
        format!(
            "{}/releases/download/v{}/{}",
            self.base_url,
            target.version,
            asset_name(target, naming)
        )
    }
}

/// Release asset filename for a target:
/// `protoc-gen-angular-<platform>[-<arch>][.exe]`.
pub fn asset_name(target: &Target, naming: Naming) -> String {
    let suffix = target.platform.exe_suffix();
    match naming {
        Naming::PerArch => format!(
            "{PLUGIN_PREFIX}-{}-{}{suffix}",
            target.platform, target.arch
        ),
        Naming::PerOs => format!("{PLUGIN_PREFIX}-{}{suffix}", target.platform),
    }
}
