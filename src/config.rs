//! Runtime configuration for the loader.
//!
//! Everything has a default, so running without a config file talks to a
//! local server on port 8000. A TOML file can override any subset of keys:
//!
//! ```toml
//! [server]
//! base_url = "https://analysis.example.org"
//! upload_path = "/api/dataset/upload"
//! field_name = "dataset"
//!
//! [notifications]
//! success_timeout_ms = 3000
//! error_timeout_ms = 5000
//! ```

use reqwest::Url;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid upload URL `{url}`: {reason}")]
    InvalidUrl { url: String, reason: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    pub server: ServerConfig,
    pub notifications: NotificationConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub base_url: String,
    pub upload_path: String,
    pub field_name: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            upload_path: "/api/dataset/upload".to_string(),
            field_name: "dataset".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    pub success_timeout_ms: u64,
    pub error_timeout_ms: u64,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            success_timeout_ms: 3000,
            error_timeout_ms: 5000,
        }
    }
}

impl NotificationConfig {
    pub fn success_timeout(&self) -> Duration {
        Duration::from_millis(self.success_timeout_ms)
    }

    pub fn error_timeout(&self) -> Duration {
        Duration::from_millis(self.error_timeout_ms)
    }
}

impl LoaderConfig {
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            tracing::debug!("no config file given, using defaults");
            return Ok(Self::default());
        };

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "loaded config file");

        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: LoaderConfig = toml::from_str(content)?;
        config.server.upload_url()?;
        Ok(config)
    }
}

impl ServerConfig {
    pub fn upload_url(&self) -> Result<Url, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidUrl {
            url: self.base_url.clone(),
            reason,
        };

        let mut base = Url::parse(&self.base_url).map_err(|e| invalid(e.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(invalid("not a base URL".to_string()));
        }

        // keep any prefix the server is mounted under
        if !base.path().ends_with('/') {
            let prefix = format!("{}/", base.path());
            base.set_path(&prefix);
        }

        base.join(self.upload_path.trim_start_matches('/'))
            .map_err(|e| invalid(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_upload_endpoint() {
        let config = LoaderConfig::default();

        assert_eq!(
            config.server.upload_url().unwrap().as_str(),
            "http://127.0.0.1:8000/api/dataset/upload"
        );
        assert_eq!(config.server.field_name, "dataset");
        assert_eq!(config.notifications.success_timeout(), Duration::from_secs(3));
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let config = LoaderConfig::from_toml(
            r#"
            [server]
            base_url = "https://analysis.example.org"

            [notifications]
            error_timeout_ms = 8000
            "#,
        )
        .unwrap();

        assert_eq!(
            config.server.upload_url().unwrap().as_str(),
            "https://analysis.example.org/api/dataset/upload"
        );
        assert_eq!(config.notifications.success_timeout_ms, 3000);
        assert_eq!(config.notifications.error_timeout_ms, 8000);
    }

    #[test]
    fn base_url_path_prefix_is_kept() {
        for base_url in [
            "https://host.example/analysis",
            "https://host.example/analysis/",
        ] {
            let server = ServerConfig {
                base_url: base_url.to_string(),
                ..ServerConfig::default()
            };

            assert_eq!(
                server.upload_url().unwrap().as_str(),
                "https://host.example/analysis/api/dataset/upload",
                "{base_url}"
            );
        }
    }

    #[test]
    fn upload_path_without_leading_slash_is_appended() {
        let server = ServerConfig {
            base_url: "https://host.example/analysis".to_string(),
            upload_path: "datasets".to_string(),
            ..ServerConfig::default()
        };

        assert_eq!(
            server.upload_url().unwrap().as_str(),
            "https://host.example/analysis/datasets"
        );
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let result = LoaderConfig::from_toml(
            r#"
            [server]
            base_url = "not a url"
            "#,
        );

        assert!(matches!(result, Err(ConfigError::InvalidUrl { .. })));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let result = LoaderConfig::from_toml("[server");

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = LoaderConfig::load(Some(&dir.path().join("loader.toml")));

        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn no_path_means_defaults() {
        assert_eq!(LoaderConfig::load(None).unwrap(), LoaderConfig::default());
    }
}
