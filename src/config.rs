use crate::core::catalog::DEFAULT_LIBRARY_NAME;
use crate::core::filter::{FileTypeFilter, SortOption};
use crate::utils::get_data_dir;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// User preferences for browsing libraries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_library")]
    pub active_library: String,
    /// File type filter selected when a library is opened
    #[serde(default)]
    pub default_file_type: FileTypeFilter,
    /// Sort selected when a library is opened
    #[serde(default)]
    pub default_sort: SortOption,
    /// Run searches over the type-filtered view instead of the whole library.
    ///
    /// Off by default: a search ignores the selected file type and restores it
    /// when cleared.
    #[serde(default)]
    pub search_within_file_type: bool,
    #[serde(default)]
    pub expand_sections_by_default: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            active_library: default_library(),
            default_file_type: FileTypeFilter::AllFiles,
            default_sort: SortOption::AToZ,
            search_within_file_type: false,
            expand_sections_by_default: false,
        }
    }
}

fn default_library() -> String {
    DEFAULT_LIBRARY_NAME.to_string()
}

/// Saves the config to `dir/config.json` using an atomic write pattern.
/// 1. Writes to a temporary file.
/// 2. Sets restrictive permissions (0o600).
/// 3. Atomically renames to the target path.
///
/// # Async
/// Uses `tokio::fs` for non-blocking I/O.
pub async fn save_config_in(dir: &Path, config: &AppConfig) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(config)?;
    let temp_path = dir.join("config.json.tmp");
    let path = dir.join("config.json");

    #[cfg(unix)]
    {
        use tokio::fs::OpenOptions;
        use tokio::io::AsyncWriteExt;

        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .mode(0o600)
            .open(&temp_path)
            .await?;

        file.write_all(json.as_bytes()).await?;
        file.sync_all().await?;
    }

    #[cfg(not(unix))]
    {
        use tokio::io::AsyncWriteExt;

        let mut file = tokio::fs::File::create(&temp_path).await?;
        file.write_all(json.as_bytes()).await?;
        file.sync_all().await?;
    }

    tokio::fs::rename(temp_path, path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::StorageFull {
            std::io::Error::new(
                std::io::ErrorKind::StorageFull,
                "Disk full: cannot save configuration. Free up space and try again.",
            )
        } else {
            e
        }
    })
}

/// Loads `dir/config.json`, or returns the default if missing or unreadable.
pub async fn load_config_in(dir: &Path) -> AppConfig {
    let path = dir.join("config.json");
    match tokio::fs::read_to_string(&path).await {
        Ok(json) => match serde_json::from_str::<AppConfig>(&json) {
            Ok(config) => return config,
            Err(e) => tracing::warn!("Ignoring malformed config {}: {}", path.display(), e),
        },
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => tracing::warn!("Cannot read config {}: {}", path.display(), e),
    }
    AppConfig::default()
}

/// Saves the config in the user's data directory.
pub async fn save_config(config: &AppConfig) -> std::io::Result<()> {
    if let Some(dir) = get_data_dir() {
        tokio::fs::create_dir_all(&dir).await?;
        save_config_in(&dir, config).await?;
    }
    Ok(())
}

/// Loads the config from the user's data directory.
pub async fn load_config() -> AppConfig {
    match get_data_dir() {
        Some(dir) => load_config_in(&dir).await,
        None => AppConfig::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            active_library: "hr".into(),
            default_file_type: FileTypeFilter::Videos,
            default_sort: SortOption::MostRecent,
            search_within_file_type: true,
            expand_sections_by_default: true,
        };
        save_config_in(dir.path(), &config).await.unwrap();
        assert_eq!(load_config_in(dir.path()).await, config);
        assert!(!dir.path().join("config.json.tmp").exists());
    }

    #[tokio::test]
    async fn test_missing_config_is_default() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_config_in(dir.path()).await, AppConfig::default());
    }

    #[tokio::test]
    async fn test_partial_config_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("config.json"),
            r#"{"default_sort": "most-viewed"}"#,
        )
        .unwrap();
        let config = load_config_in(dir.path()).await;
        assert_eq!(config.default_sort, SortOption::MostViewed);
        assert_eq!(config.active_library, DEFAULT_LIBRARY_NAME);
        assert!(!config.search_within_file_type);
    }

    #[tokio::test]
    async fn test_malformed_config_is_default() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.json"), "not json").unwrap();
        assert_eq!(load_config_in(dir.path()).await, AppConfig::default());
    }
}
