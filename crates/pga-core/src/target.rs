//! Target detection: which plugin artifact matches the running machine.
//!
//! Release assets are published per operating system and, in the current
//! naming scheme, per CPU architecture. Both identifiers are detected once
//! at startup and passed explicitly; nothing in this crate reads the
//! environment ambiently after that.

use semver::Version;
use serde::{Deserialize, Serialize};

/// Operating system identifier used in release asset filenames.
///
/// Vendors use inconsistent naming (`macos`, `darwin`, `osx`), so parsing
/// accepts the common aliases while [`as_str()`](Self::as_str) always emits
/// the canonical release-asset spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Linux-based operating systems.
    Linux,
    /// Apple macOS (asset filenames use the kernel name `darwin`).
    Darwin,
    /// Microsoft Windows. The only platform whose binaries carry `.exe`.
    Win32,
}

impl Platform {
    /// Detect the platform the current process is running on.
    pub fn current() -> Self {
        #[cfg(target_os = "windows")]
        {
            Self::Win32
        }
        #[cfg(target_os = "macos")]
        {
            Self::Darwin
        }
        #[cfg(not(any(target_os = "windows", target_os = "macos")))]
        {
            Self::Linux
        }
    }

    /// Canonical spelling used in release asset filenames.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Linux => "linux",
            Self::Darwin => "darwin",
            Self::Win32 => "win32",
        }
    }

    /// Filename suffix for executables on this platform (`.exe` or empty).
    pub fn exe_suffix(&self) -> &'static str {
        match self {
            Self::Win32 => ".exe",
            _ => "",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "linux" => Ok(Self::Linux),
            "darwin" | "macos" | "osx" => Ok(Self::Darwin),
            "win32" | "windows" => Ok(Self::Win32),
            _ => Err(format!("Unknown platform: {s}")),
        }
    }
}

/// CPU architecture identifier used in release asset filenames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Arch {
    /// Intel/AMD 64-bit.
    X64,
    /// ARM 64-bit (Apple Silicon, aarch64 Linux).
    Arm64,
}

impl Arch {
    /// Detect the architecture the current process is running on.
    pub fn current() -> Self {
        #[cfg(target_arch = "aarch64")]
        {
            Self::Arm64
        }
        #[cfg(not(target_arch = "aarch64"))]
        {
            Self::X64
        }
    }

    /// Canonical spelling used in release asset filenames.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::X64 => "x64",
            Self::Arm64 => "arm64",
        }
    }
}

impl std::fmt::Display for Arch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Arch {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "x64" | "x86_64" | "amd64" => Ok(Self::X64),
            "arm64" | "aarch64" => Ok(Self::Arm64),
            _ => Err(format!("Unknown architecture: {s}")),
        }
    }
}

/// The tuple identifying which plugin artifact to fetch: operating system,
/// CPU architecture, and release version. Computed once, then immutable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// Operating system of the machine that will run the plugin.
    pub platform: Platform,
    /// CPU architecture of that machine.
    pub arch: Arch,
    /// Plugin release version (selects the GitHub release tag `v<version>`).
    pub version: Version,
}

impl Target {
    /// Describe the current machine, pinned to the given release version.
    pub fn current(version: Version) -> Self {
        Self {
            platform: Platform::current(),
            arch: Arch::current(),
            version,
        }
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{} v{}", self.platform, self.arch, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_aliases_parse() {
        assert_eq!("macos".parse::<Platform>(), Ok(Platform::Darwin));
        assert_eq!("darwin".parse::<Platform>(), Ok(Platform::Darwin));
        assert_eq!("windows".parse::<Platform>(), Ok(Platform::Win32));
        assert_eq!("linux".parse::<Platform>(), Ok(Platform::Linux));
        assert!("beos".parse::<Platform>().is_err());
    }

    #[test]
    fn arch_aliases_parse() {
        assert_eq!("x86_64".parse::<Arch>(), Ok(Arch::X64));
        assert_eq!("amd64".parse::<Arch>(), Ok(Arch::X64));
        assert_eq!("aarch64".parse::<Arch>(), Ok(Arch::Arm64));
        assert!("mips".parse::<Arch>().is_err());
    }

    #[test]
    fn exe_suffix_only_on_windows() {
        assert_eq!(Platform::Win32.exe_suffix(), ".exe");
        assert_eq!(Platform::Linux.exe_suffix(), "");
        assert_eq!(Platform::Darwin.exe_suffix(), "");
    }
}
