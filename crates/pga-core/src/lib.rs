//! pga - plugin bootstrap for protoc-gen-angular
//!
//! Fetches the prebuilt `protoc-gen-angular` protoc plugin for the current
//! platform from its GitHub release on first use, and spawns it with
//! forwarded arguments thereafter. The plugin itself (an Angular code
//! generator driven by protoc over stdin/stdout) is opaque to this crate;
//! everything here is acquisition and invocation plumbing.
//!
//! # Overview
//!
//! - [`target::Target`] describes the machine and release version, detected
//!   once and passed explicitly.
//! - [`layout::Layout`] derives the local binary path and the download URL
//!   from the same asset filename, so the two can never disagree.
//! - [`bootstrap::ensure_plugin`] is the idempotent fetch-and-chmod step.
//! - [`plugin::Plugin`] is the invocation facade; it resolves the path once
//!   and returns an unawaited child handle on spawn.
//!
//! # Directory layout
//!
//! ```text
//! ~/.pga/                      (override with PGA_HOME)
//! └── release/
//!     └── protoc-gen-angular-<platform>[-<arch>][.exe]
//! ```

pub mod bootstrap;
pub mod fetch;
pub mod layout;
pub mod manifest;
pub mod plugin;
pub mod target;

// Re-exports for convenience
pub use bootstrap::{Bootstrap, BootstrapError, ensure_plugin};
pub use fetch::{DownloadError, Fetcher, HttpFetcher};
pub use layout::{Layout, Naming};
pub use manifest::{Manifest, default_version};
pub use plugin::{Plugin, SpawnError, SpawnOptions, StreamMode};
pub use target::{Arch, Platform, Target};
