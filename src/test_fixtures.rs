//! Test fixtures and utilities for reducing test setup duplication.
//!
//! Provides temp directories, a throwaway HTTP responder and sample tool
//! descriptors so pipeline tests never reach the real network.
//!
//! ```ignore
//! use crate::test_fixtures::{TestServer, create_temp_dir};
//!
//! let temp = create_temp_dir();
//! let server = TestServer::start(vec![("/a.exe", 200, b"MZ".to_vec())]);
//! let url = server.url("/a.exe");
//! ```

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tempfile::TempDir;

use crate::catalog::{ToolDescriptor, ToolKind};
use crate::invoker::{CommandRunner, InstallCommand, MSIEXEC};

/// Directory for temp dirs that is never relative to the working directory
/// (e.g. when TMPDIR=tmp).
fn temp_dir_base() -> PathBuf {
    let t = std::env::temp_dir();
    if t.is_absolute() {
        t
    } else {
        PathBuf::from("/tmp")
    }
}

/// Create a temp directory in the system temp location.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new_in(temp_dir_base()).expect("Failed to create temp directory")
}

/// A dynamic tool pointing at `url`
pub fn dynamic_tool(name: &str, url: &str) -> ToolDescriptor {
    ToolDescriptor::new(name, url, ToolKind::Dynamic, "Security")
}

/// A static tool whose artifact is `file_name` under the static dir
pub fn static_tool(name: &str, file_name: &str) -> ToolDescriptor {
    ToolDescriptor::new(
        name,
        format!("static/{file_name}"),
        ToolKind::Static,
        "Maintenance",
    )
}

/// Write `content` to `dir/name`, creating parent directories.
pub fn write_file(dir: &Path, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    std::fs::write(&path, content).expect("Failed to write file");
    path
}

/// URL on a local port that refuses connections.
pub fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let port = listener.local_addr().expect("No local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

type Routes = HashMap<String, (u16, Vec<u8>)>;

/// Minimal HTTP/1.1 responder serving fixed bodies by path.
///
/// Unknown paths answer 404. Every request path is recorded so tests can
/// assert whether (and what) the code under test fetched.
pub struct TestServer {
    base: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl TestServer {
    /// Start serving `(path, status, body)` routes on a background thread.
    pub fn start(routes: Vec<(&str, u16, Vec<u8>)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind test server");
        let base = format!("http://{}", listener.local_addr().expect("No local addr"));
        let routes: Routes = routes
            .into_iter()
            .map(|(path, status, body)| (path.to_string(), (status, body)))
            .collect();
        let requests = Arc::new(Mutex::new(Vec::new()));

        let recorded = Arc::clone(&requests);
        std::thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(stream) = stream else { continue };
                if let Some(path) = handle_connection(stream, &routes) {
                    recorded.lock().unwrap().push(path);
                }
            }
        });

        Self { base, requests }
    }

    /// Absolute URL for `path` on this server
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// Paths requested so far
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

fn handle_connection(mut stream: TcpStream, routes: &Routes) -> Option<String> {
    let mut buf = Vec::new();
    let mut chunk = [0_u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = stream.read(&mut chunk).ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    let request = String::from_utf8_lossy(&buf);
    let path = request.split_whitespace().nth(1)?.to_string();
    let (status, body) = routes
        .get(&path)
        .cloned()
        .unwrap_or((404, b"not found".to_vec()));
    let reason = match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Status",
    };

    let head = format!(
        "HTTP/1.1 {status} {reason}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        body.len()
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(&body);
    let _ = stream.flush();
    Some(path)
}

/// Command runner that never spawns anything.
///
/// Exit codes are looked up by the file name of the program (or of the
/// package for `msiexec`); unlisted programs exit 0. Every command is recorded.
#[derive(Clone, Default)]
pub struct RecordingRunner {
    exit_codes: HashMap<String, i32>,
    commands: Arc<Mutex<Vec<InstallCommand>>>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_exit_code(mut self, file_name: &str, code: i32) -> Self {
        self.exit_codes.insert(file_name.to_string(), code);
        self
    }

    pub fn commands(&self) -> Vec<InstallCommand> {
        self.commands.lock().unwrap().clone()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, command: &InstallCommand) -> std::io::Result<Option<i32>> {
        self.commands.lock().unwrap().push(command.clone());
        let artifact = if command.program == Path::new(MSIEXEC) {
            command.args.get(1).map(PathBuf::from)
        } else {
            Some(command.program.clone())
        };
        let code = artifact
            .as_deref()
            .and_then(Path::file_name)
            .and_then(|name| self.exit_codes.get(&*name.to_string_lossy()))
            .copied()
            .unwrap_or(0);
        Ok(Some(code))
    }
}

/// Write an executable shell script that exits with `code`, named like an installer.
///
/// The script appends its arguments to `<name>.args` next to itself so tests
/// can check the flags it was launched with.
#[cfg(unix)]
pub fn write_script_installer(dir: &Path, name: &str, code: i32) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let args_file = dir.join(format!("{name}.args"));
    let script = format!(
        "#!/bin/sh\necho \"$@\" >> '{}'\nexit {code}\n",
        args_file.display()
    );
    let path = write_file(dir, name, script.as_bytes());
    let mut perms = std::fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).unwrap();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_temp_dir() {
        let temp = create_temp_dir();
        assert!(temp.path().exists());
        assert!(temp.path().is_absolute());
    }

    #[test]
    fn test_server_records_requests() {
        let server = TestServer::start(vec![("/hello", 200, b"hi".to_vec())]);
        let body = reqwest::blocking::get(server.url("/hello"))
            .unwrap()
            .text()
            .unwrap();
        assert_eq!(body, "hi");
        assert_eq!(server.requests(), vec!["/hello".to_string()]);
    }

    #[test]
    fn test_server_unknown_path_is_404() {
        let server = TestServer::start(vec![]);
        let response = reqwest::blocking::get(server.url("/missing")).unwrap();
        assert_eq!(response.status().as_u16(), 404);
    }
}
