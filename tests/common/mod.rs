//! Common test utilities for toolkit integration tests
//!
//! Every command runs against a private temp workspace: the manifest URL
//! points at a closed local port, the local manifest, static directory and
//! config file live inside the workspace, so no test touches the network or
//! the developer's own configuration.

#![allow(dead_code, clippy::expect_used, clippy::unwrap_used)]

use std::net::TcpListener;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Manifest used by most tests: two static tools and one dynamic tool
pub const SAMPLE_MANIFEST: &str = r#"[
    {"name": "WinDirStat", "url": "static/WinDirStat-x64.msi", "type": "static", "category": "Maintenance"},
    {"name": "VLC Media Player", "url": "static/vlc-3.0.18.exe", "type": "static", "category": "Maintenance"},
    {"name": "Malwarebytes", "url": "https://data-cdn.mbamupdates.com/web/mb-windows/MBSetup.exe", "type": "dynamic", "category": "Security", "silent_args": "/VERYSILENT /NORESTART"}
]"#;

/// URL on a local port that refuses connections
pub fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let port = listener.local_addr().expect("No local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

/// A test workspace for integration tests
pub struct TestWorkspace {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
    /// Closed-port base used for every remote URL
    pub offline_base: String,
}

impl TestWorkspace {
    /// Create a workspace with a config file and no manifest
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        let offline_base = unreachable_url();
        let workspace = Self {
            temp,
            path,
            offline_base,
        };
        workspace.write_file(
            "config.yaml",
            &format!(
                "static_base_url: {}/static\nmanifest_timeout_secs: 2\ndownload_timeout_secs: 5\ndownload_dir: {}\n",
                workspace.offline_base,
                workspace.path.join("downloads").display()
            ),
        );
        workspace
    }

    /// Create a workspace with [`SAMPLE_MANIFEST`] as the local manifest
    pub fn with_sample_manifest() -> Self {
        let workspace = Self::new();
        workspace.write_manifest(SAMPLE_MANIFEST);
        workspace
    }

    /// Write the local manifest (`tools.json`)
    pub fn write_manifest(&self, json: &str) {
        self.write_file("tools.json", json);
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) -> PathBuf {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }

    /// Check if a file exists in workspace
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Put an executable installer script into the static directory.
    ///
    /// The script exits with `code` and writes its arguments to `<name>.args`.
    #[cfg(unix)]
    pub fn add_static_installer(&self, name: &str, code: i32) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let args_file = self.path.join("static").join(format!("{name}.args"));
        let script = format!(
            "#!/bin/sh\necho \"$@\" > '{}'\nexit {code}\n",
            args_file.display()
        );
        let path = self.write_file(&format!("static/{name}"), &script);
        let mut perms = std::fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&path, perms).unwrap();
        path
    }

    /// `toolkit` command wired to this workspace
    #[allow(deprecated)]
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("toolkit").unwrap();
        cmd.current_dir(&self.path);
        cmd.env_remove("RUST_LOG");
        cmd.env("TOOLKIT_CONFIG", self.path.join("config.yaml"));
        cmd.env(
            "TOOLKIT_MANIFEST_URL",
            format!("{}/tools.json", self.offline_base),
        );
        cmd.env("TOOLKIT_MANIFEST", self.path.join("tools.json"));
        cmd.env("TOOLKIT_STATIC_DIR", self.path.join("static"));
        cmd
    }

    pub fn root(&self) -> &Path {
        &self.path
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}
