//! Application configuration stored as `{data_dir}/config.yaml`.
//!
//! A missing or unreadable file yields the defaults; the workbench never
//! requires configuration to run.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Delay of the simulated upload, in milliseconds.
    pub upload_delay_ms: u64,
    /// Directory for exported reports (default: `{data_dir}/laporan`).
    pub report_dir: Option<PathBuf>,
    /// Route shown on startup when no `--route` is given, e.g. "/upload".
    pub start_route: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            upload_delay_ms: 2000,
            report_dir: None,
            start_route: None,
        }
    }
}

impl AppConfig {
    pub fn path(data_dir: &Path) -> PathBuf {
        data_dir.join("config.yaml")
    }

    /// Load the config, returning defaults if the file doesn't exist or
    /// fails to parse.
    pub fn load_or_default(data_dir: &Path) -> Self {
        let path = Self::path(data_dir);
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => serde_saphyr::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    pub fn upload_delay(&self) -> Duration {
        Duration::from_millis(self.upload_delay_ms)
    }

    /// Report output directory, falling back to `{data_dir}/laporan`.
    pub fn report_dir(&self, data_dir: &Path) -> PathBuf {
        self.report_dir
            .clone()
            .unwrap_or_else(|| data_dir.join("laporan"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_or_default(dir.path());
        assert_eq!(config.upload_delay_ms, 2000);
        assert!(config.report_dir.is_none());
        assert!(config.start_route.is_none());
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            AppConfig::path(dir.path()),
            "upload_delay_ms: 500\nstart_route: /upload\n",
        )
        .unwrap();

        let config = AppConfig::load_or_default(dir.path());
        assert_eq!(config.upload_delay(), Duration::from_millis(500));
        assert_eq!(config.start_route.as_deref(), Some("/upload"));
        assert_eq!(
            config.report_dir(dir.path()),
            dir.path().join("laporan")
        );
    }

    #[test]
    fn test_unparseable_yaml_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(AppConfig::path(dir.path()), ": not yaml [").unwrap();

        let config = AppConfig::load_or_default(dir.path());
        assert_eq!(config.upload_delay_ms, 2000);
    }
}
