//! Widget configuration loader.
//!
//! Reads `premier.toml` (from `<config dir>/premier/` unless a path is given)
//! and deserializes it into [`WidgetConfig`]. Falls back to defaults when the
//! file is missing or malformed.

use std::path::{Path, PathBuf};

use premier_types::config::WidgetConfig;
use premier_types::error::ConfigError;

/// File name looked up in the config directory.
pub const CONFIG_FILE: &str = "premier.toml";

/// `<config dir>/premier/premier.toml`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("premier").join(CONFIG_FILE))
}

/// Read and parse `path`. A missing file yields `Ok(None)`.
///
/// # Errors
///
/// Returns [`ConfigError::Read`] if the file exists but cannot be read, and
/// [`ConfigError::Parse`] if it is not valid widget TOML.
pub async fn try_load_widget_config(path: &Path) -> Result<Option<WidgetConfig>, ConfigError> {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(ConfigError::Read(format!("{}: {err}", path.display()))),
    };

    toml::from_str::<WidgetConfig>(&content)
        .map(Some)
        .map_err(|err| ConfigError::Parse(format!("{}: {err}", path.display())))
}

/// Load configuration from `path`.
///
/// - If the file does not exist, returns [`WidgetConfig::default()`].
/// - If the file exists but fails to read or parse, logs a warning and
///   returns the default.
pub async fn load_widget_config(path: &Path) -> WidgetConfig {
    match try_load_widget_config(path).await {
        Ok(Some(config)) => {
            tracing::debug!(?config, "loaded {}", path.display());
            config
        }
        Ok(None) => {
            tracing::debug!("No config found at {}, using defaults", path.display());
            WidgetConfig::default()
        }
        Err(err) => {
            tracing::warn!(%err, "using default widget config");
            WidgetConfig::default()
        }
    }
}

/// Load from an explicit path, or from [`default_config_path`].
pub async fn resolve_widget_config(explicit: Option<&Path>) -> WidgetConfig {
    match explicit.map(Path::to_path_buf).or_else(default_config_path) {
        Some(path) => load_widget_config(&path).await,
        None => {
            tracing::debug!("No config directory on this platform, using defaults");
            WidgetConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_widget_config(&tmp.path().join(CONFIG_FILE)).await;
        assert!(config.endpoint().is_none());
        assert_eq!(config.canned_delay_ms, 800);
    }

    #[tokio::test]
    async fn load_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILE);
        tokio::fs::write(
            &path,
            r#"
endpoint = "http://localhost:8080/api/chat"
page = "/mortgages"
request_timeout_secs = 10
"#,
        )
        .await
        .unwrap();

        let config = load_widget_config(&path).await;
        assert_eq!(config.endpoint(), Some("http://localhost:8080/api/chat"));
        assert_eq!(config.page, "/mortgages");
        assert_eq!(config.request_timeout_secs, 10);
        assert_eq!(config.focus_delay_ms, 100);
    }

    #[tokio::test]
    async fn load_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILE);
        tokio::fs::write(&path, "endpoint = [not valid").await.unwrap();

        let config = load_widget_config(&path).await;
        assert!(config.endpoint.is_none());
        assert_eq!(config.page, "/");
    }

    #[tokio::test]
    async fn try_load_reports_parse_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILE);
        tokio::fs::write(&path, "request_timeout_secs = \"soon\"").await.unwrap();

        let err = try_load_widget_config(&path).await.unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().contains(CONFIG_FILE));
    }

    #[tokio::test]
    async fn try_load_reports_read_error() {
        let tmp = TempDir::new().unwrap();
        // A directory exists at the path but cannot be read as a file.
        let err = try_load_widget_config(tmp.path()).await.unwrap_err();
        assert!(matches!(err, ConfigError::Read(_)));
    }

    #[tokio::test]
    async fn try_load_missing_file_is_none() {
        let tmp = TempDir::new().unwrap();
        let loaded = try_load_widget_config(&tmp.path().join(CONFIG_FILE)).await.unwrap();
        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn resolve_prefers_explicit_path() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("custom.toml");
        tokio::fs::write(&path, "canned_delay_ms = 5").await.unwrap();

        let config = resolve_widget_config(Some(&path)).await;
        assert_eq!(config.canned_delay_ms, 5);
    }

    #[test]
    fn default_path_ends_with_file_name() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with("premier/premier.toml"));
        }
    }
}
