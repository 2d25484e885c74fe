//! Artifact download
//!
//! Downloads stream into a temp file next to the destination and are renamed
//! into place only once the body has been read completely.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::blocking::Client;
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::error::{Result, ToolkitError, fetch_failed};
use crate::locator::{ArtifactSource, DownloadTarget};

/// Bytes read from the network per write
pub const CHUNK_SIZE: usize = 8 * 1024;

/// Download progress for one artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DownloadProgress {
    pub downloaded: u64,
    /// From `Content-Length`, when the server sends it
    pub total: Option<u64>,
}

/// Makes a located artifact available on disk
pub trait Fetcher: Send + Sync {
    /// Fetch `target` and return the path the installer should run.
    ///
    /// Local targets are returned as-is without touching the network.
    fn fetch(
        &self,
        target: &DownloadTarget,
        progress: &mut dyn FnMut(DownloadProgress),
    ) -> Result<PathBuf>;
}

/// Fetcher backed by a blocking HTTP client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("toolkit-installer/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }

    fn download(
        &self,
        url: &str,
        destination: &Path,
        progress: &mut dyn FnMut(DownloadProgress),
    ) -> Result<u64> {
        let parent = match destination.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent).map_err(|e| write_failed(parent, &e))?;

        debug!(url = %url, destination = %destination.display(), "starting download");
        let mut response = self
            .client
            .get(url)
            .send()
            .map_err(|e| fetch_failed(url, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(fetch_failed(url, format!("HTTP {status}")));
        }

        let total = response.content_length();
        let mut file = NamedTempFile::new_in(parent).map_err(|e| write_failed(parent, &e))?;
        let mut buf = vec![0_u8; CHUNK_SIZE];
        let mut downloaded = 0_u64;
        progress(DownloadProgress { downloaded, total });

        loop {
            let n = response
                .read(&mut buf)
                .map_err(|e| fetch_failed(url, e.to_string()))?;
            if n == 0 {
                break;
            }
            file.write_all(&buf[..n])
                .map_err(|e| write_failed(destination, &e))?;
            downloaded += n as u64;
            progress(DownloadProgress { downloaded, total });
        }

        file.flush().map_err(|e| write_failed(destination, &e))?;
        file.persist(destination)
            .map_err(|e| write_failed(destination, &e.error))?;

        info!(url = %url, bytes = downloaded, "download finished");
        Ok(downloaded)
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(
        &self,
        target: &DownloadTarget,
        progress: &mut dyn FnMut(DownloadProgress),
    ) -> Result<PathBuf> {
        match target.source {
            ArtifactSource::Local(ref path) => {
                debug!(tool = %target.tool, path = %path.display(), "using local artifact, skipping download");
                Ok(path.clone())
            }
            ArtifactSource::Remote(ref url) => {
                self.download(url, &target.destination, progress)?;
                Ok(target.destination.clone())
            }
        }
    }
}

fn write_failed(path: &Path, err: &std::io::Error) -> ToolkitError {
    ToolkitError::FileWriteFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}
