//! Installer settings (config.yaml)
//!
//! Settings are layered: built-in defaults, then an optional YAML file, then
//! command line / environment overrides.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, ToolkitError};

/// Raw file base of the project repository
pub const PROJECT_RAW_BASE: &str =
    "https://raw.githubusercontent.com/SamuelHughes25/Security-Toolkit/main";

/// Directory name under the user's config directory
const CONFIG_DIR: &str = "toolkit";

/// Config file name inside [`CONFIG_DIR`]
const CONFIG_FILE: &str = "config.yaml";

/// Settings that drive manifest resolution, artifact location and downloads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Remote manifest URL (first resolution tier)
    pub manifest_url: String,

    /// Local manifest file (second resolution tier)
    pub local_manifest: PathBuf,

    /// Directory holding installers that ship with the project
    pub static_dir: PathBuf,

    /// Base URL that hosts the project's static installers
    pub static_base_url: String,

    /// Timeout for the remote manifest request
    pub manifest_timeout_secs: u64,

    /// Timeout for a single installer download
    pub download_timeout_secs: u64,

    /// Default target directory for downloads
    pub download_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            manifest_url: format!("{PROJECT_RAW_BASE}/tools.json"),
            local_manifest: PathBuf::from("tools.json"),
            static_dir: PathBuf::from("static"),
            static_base_url: format!("{PROJECT_RAW_BASE}/static"),
            manifest_timeout_secs: 10,
            download_timeout_secs: 30,
            download_dir: None,
        }
    }
}

/// Values from the command line or environment that win over the config file
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub manifest_url: Option<String>,
    pub local_manifest: Option<PathBuf>,
    pub static_dir: Option<PathBuf>,
}

impl Settings {
    /// Parse settings from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let settings: Self = serde_yaml::from_str(yaml)?;
        Ok(settings)
    }

    /// Load settings from an explicit file, or the default location if it exists.
    ///
    /// A missing file at the default location is not an error; a missing
    /// explicit file is.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match default_config_path() {
                Some(path) if path.is_file() => path,
                _ => {
                    debug!("no config file found, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        let content =
            std::fs::read_to_string(&path).map_err(|e| ToolkitError::ConfigReadFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        debug!(path = %path.display(), "loaded config file");
        Self::from_yaml(&content).map_err(|e| ToolkitError::ConfigParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Apply command line / environment overrides
    #[must_use]
    pub fn with_overrides(mut self, overrides: SettingsOverrides) -> Self {
        if let Some(url) = overrides.manifest_url {
            self.manifest_url = url;
        }
        if let Some(path) = overrides.local_manifest {
            self.local_manifest = path;
        }
        if let Some(dir) = overrides.static_dir {
            self.static_dir = dir;
        }
        self
    }

    pub fn manifest_timeout(&self) -> Duration {
        Duration::from_secs(self.manifest_timeout_secs)
    }

    pub fn download_timeout(&self) -> Duration {
        Duration::from_secs(self.download_timeout_secs)
    }

    /// Target directory for downloads: configured value, else the user's Downloads folder
    pub fn resolved_download_dir(&self) -> PathBuf {
        if let Some(ref dir) = self.download_dir {
            return dir.clone();
        }
        default_download_dir()
    }
}

/// The user's downloads location, falling back to `~/Downloads`
pub fn default_download_dir() -> PathBuf {
    dirs::download_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join("Downloads")))
        .unwrap_or_else(|| PathBuf::from("Downloads"))
}

/// Default config file location (e.g. `~/.config/toolkit/config.yaml`)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
}
