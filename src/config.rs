//! Client configuration.
//!
//! The backend base URL and the local data directory come from the
//! environment, with the platform data dir as the default. No base URL
//! means local-only operation; with one, every client call falls back
//! to the local store on failure.

use std::env;
use std::path::PathBuf;

use crate::platform;

pub const API_URL_VAR: &str = "LINKBOARD_API_URL";
pub const DATA_DIR_VAR: &str = "LINKBOARD_DATA_DIR";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL; `None` selects local-only operation.
    pub base_url: Option<String>,
    /// Directory holding the local storage blobs.
    pub data_dir: PathBuf,
}

impl ClientConfig {
    /// Local-only configuration rooted at `data_dir`.
    pub fn local(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_url: None,
            data_dir: data_dir.into(),
        }
    }

    /// Configuration with a backend, falling back to `data_dir` when
    /// the backend is unreachable.
    pub fn with_backend(base_url: impl Into<String>, data_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_url: Some(base_url.into()),
            data_dir: data_dir.into(),
        }
    }

    /// Read configuration from the environment.
    ///
    /// An unset or empty `LINKBOARD_API_URL` selects local-only mode.
    pub fn from_env() -> Self {
        let base_url = env::var(API_URL_VAR)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        let data_dir = env::var(DATA_DIR_VAR)
            .ok()
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(platform::get_data_dir);
        Self { base_url, data_dir }
    }
}
