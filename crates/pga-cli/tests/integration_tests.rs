//! Integration tests for the pga CLI binary.

use std::path::PathBuf;
use std::process::Command;

use tempfile::TempDir;

/// Test context that sets up a temporary pga home environment
struct TestContext {
    temp_dir: TempDir,
    pga_home: PathBuf,
}

impl TestContext {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let pga_home = temp_dir.path().join(".pga");
        std::fs::create_dir_all(&pga_home).expect("failed to create pga home");
        Self { temp_dir, pga_home }
    }

    fn pga_cmd(&self) -> Command {
        // Find the binary built by cargo
        let bin_path = env!("CARGO_BIN_EXE_pga");
        let mut cmd = Command::new(bin_path);
        cmd.env("HOME", self.temp_dir.path());
        cmd.env("PGA_HOME", &self.pga_home);
        cmd
    }

    /// Expected binary location for the current machine (per-arch naming).
    fn plugin_path(&self) -> PathBuf {
        let platform = std::env::consts::OS;
        let platform = match platform {
            "macos" => "darwin",
            "windows" => "win32",
            other => other,
        };
        let arch = match std::env::consts::ARCH {
            "aarch64" => "arm64",
            _ => "x64",
        };
        let suffix = if platform == "win32" { ".exe" } else { "" };
        self.pga_home
            .join("release")
            .join(format!("protoc-gen-angular-{platform}-{arch}{suffix}"))
    }
}

#[test]
fn test_help_command() {
    let ctx = TestContext::new();
    let output = ctx
        .pga_cmd()
        .arg("--help")
        .output()
        .expect("failed to run pga");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage:"));
}

#[test]
fn test_version_command() {
    let ctx = TestContext::new();
    let output = ctx
        .pga_cmd()
        .arg("--version")
        .output()
        .expect("failed to run pga");
    assert!(output.status.success());
}

#[test]
fn test_path_command_points_into_pga_home() {
    let ctx = TestContext::new();
    let output = ctx
        .pga_cmd()
        .arg("path")
        .output()
        .expect("failed to run pga path");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), ctx.plugin_path().display().to_string());
}

#[test]
fn test_status_reports_not_installed() {
    let ctx = TestContext::new();
    let output = ctx
        .pga_cmd()
        .arg("status")
        .output()
        .expect("failed to run pga status");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("installed: no"));
}

#[test]
fn test_install_fetches_and_is_idempotent() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let asset = ctx.plugin_path();
    let asset_name = asset.file_name().unwrap().to_str().unwrap().to_string();
    let version = env!("CARGO_PKG_VERSION");
    let mock = server
        .mock(
            "GET",
            format!("/releases/download/v{version}/{asset_name}").as_str(),
        )
        .with_status(200)
        .with_body(b"placeholder plugin")
        .expect(1)
        .create();

    let output = ctx
        .pga_cmd()
        .env("PGA_RELEASE_BASE_URL", server.url())
        .arg("install")
        .output()
        .expect("failed to run pga install");
    assert!(
        output.status.success(),
        "install failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(std::fs::read(&asset).unwrap(), b"placeholder plugin");

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = std::fs::metadata(&asset).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o755);
    }

    // Second install must not hit the server again
    let output = ctx
        .pga_cmd()
        .env("PGA_RELEASE_BASE_URL", server.url())
        .arg("install")
        .output()
        .expect("failed to run pga install twice");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("already installed"));

    mock.assert();
}

#[test]
fn test_install_failure_exits_nonzero_with_url() {
    let ctx = TestContext::new();
    let server = mockito::Server::new();
    // No mock registered: every asset request answers 501

    let output = ctx
        .pga_cmd()
        .env("PGA_RELEASE_BASE_URL", server.url())
        .arg("install")
        .output()
        .expect("failed to run pga install");

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains(&server.url()),
        "diagnostic should name the failing URL, got: {stderr}"
    );
}

#[cfg(unix)]
#[test]
fn test_run_forwards_arguments() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let asset_name = ctx
        .plugin_path()
        .file_name()
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    let version = env!("CARGO_PKG_VERSION");
    server
        .mock(
            "GET",
            format!("/releases/download/v{version}/{asset_name}").as_str(),
        )
        .with_status(200)
        .with_body("#!/bin/sh\necho \"args:$*\"\n")
        .create();

    let output = ctx
        .pga_cmd()
        .env("PGA_RELEASE_BASE_URL", server.url())
        .args(["run", "--", "--foo", "bar"])
        .output()
        .expect("failed to run pga run");

    assert!(
        output.status.success(),
        "run failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("args:--foo bar"));
}
