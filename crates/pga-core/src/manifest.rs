//! Optional `pga.toml` manifest pinning the plugin release version.
//!
//! By default the plugin release tracks this crate's own package version,
//! the same way the original npm wrapper's package version tracked the
//! plugin release it installed. A manifest file can pin a different one:
//!
//! ```toml
//! version = "0.5.0"
//! ```

use std::path::Path;

use semver::Version;
use serde::Deserialize;
use thiserror::Error;

/// Failure to read or parse a `pga.toml` manifest.
#[derive(Error, Debug)]
pub enum ManifestError {
    /// The manifest file could not be read.
    #[error("Failed to read manifest: {0}")]
    Io(#[from] std::io::Error),

    /// The manifest file is not valid TOML or is missing required fields.
    #[error("Failed to parse manifest: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Parsed `pga.toml` contents. Only the version field is consumed.
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    /// Plugin release version to fetch, e.g. `0.5.0` (no `v` prefix).
    pub version: Version,
}

impl Manifest {
    /// Load and parse a manifest file.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }
}

/// The release version built into this crate, used when no manifest pins one.
///
/// # Panics
///
/// Panics only if the crate's own `Cargo.toml` version is not valid semver,
/// which cargo rejects at build time.
pub fn default_version() -> Version {
    Version::parse(env!("CARGO_PKG_VERSION")).expect("crate version is valid semver")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pinned_version() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pga.toml");
        std::fs::write(&path, "version = \"0.5.1\"\n").unwrap();

        let manifest = Manifest::load(&path).unwrap();
        assert_eq!(manifest.version, Version::new(0, 5, 1));
    }

    #[test]
    fn rejects_missing_version() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pga.toml");
        std::fs::write(&path, "name = \"pga\"\n").unwrap();

        assert!(matches!(
            Manifest::load(&path),
            Err(ManifestError::Parse(_))
        ));
    }

    #[test]
    fn default_version_matches_crate() {
        assert_eq!(default_version().to_string(), env!("CARGO_PKG_VERSION"));
    }
}
