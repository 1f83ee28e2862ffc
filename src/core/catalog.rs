//! Library catalog management
//!
//! Libraries are standalone JSON files containing a [`Library`]. The default
//! catalog lives in the application's data directory under `libraries/`.
//! Each saved file gets a `.sha256` sidecar; a mismatch on load is logged and
//! tolerated, since library files are often edited by hand.

use crate::core::library::Library;
use crate::utils::get_data_dir;
use crate::validators::{unknown_document_types, validate_library, validate_library_name};
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

/// The canonical name for the initial/fallback library.
/// This library is protected from deletion.
pub const DEFAULT_LIBRARY_NAME: &str = "default";

/// Error type for catalog operations
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Invalid library name: {0}")]
    InvalidName(String),

    #[error("Library not found: {0}")]
    NotFound(String),

    #[error("Library '{name}' contains {count} documents (max: {max})")]
    TooLarge {
        name: String,
        count: usize,
        max: usize,
    },

    #[error("Invalid library '{name}': {reason}")]
    Invalid { name: String, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Data directory not available")]
    DataDirUnavailable,
}

fn checksum(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

/// Parses library JSON, normalizes display counts, and validates it.
///
/// `name` is only used in error messages and as the library name when the
/// JSON does not carry one.
pub fn parse_library(name: &str, json: &str) -> Result<Library, CatalogError> {
    let mut library: Library = serde_json::from_str(json)?;

    let count = library.document_count();
    if count > crate::core::library::MAX_DOCUMENTS {
        return Err(CatalogError::TooLarge {
            name: name.to_string(),
            count,
            max: crate::core::library::MAX_DOCUMENTS,
        });
    }

    validate_library(&library).map_err(|reason| CatalogError::Invalid {
        name: name.to_string(),
        reason,
    })?;

    let unknown = unknown_document_types(&library);
    if !unknown.is_empty() {
        tracing::warn!(
            "Library '{}' has documents of unknown type {:?}; they only appear under All Files",
            name,
            unknown
        );
    }

    if library.name.is_empty() {
        library.name = name.to_string();
    }
    library.normalize_counts();
    Ok(library)
}

/// Loads a library from an arbitrary JSON file (outside the catalog).
///
/// # Async
/// Uses `tokio::fs` for non-blocking file I/O.
pub async fn load_library_from_path(path: &Path) -> Result<Library, CatalogError> {
    let json = tokio::fs::read_to_string(path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CatalogError::NotFound(path.display().to_string())
        } else {
            CatalogError::Io(e)
        }
    })?;
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("library");
    let library = parse_library(name, &json)?;
    tracing::info!(
        "Loaded library '{}' from {} ({} sections, {} documents)",
        library.name,
        path.display(),
        library.sections.len(),
        library.document_count()
    );
    Ok(library)
}

/// A directory of named library files
#[derive(Debug, Clone)]
pub struct Catalog {
    root: PathBuf,
}

impl Catalog {
    /// Opens the catalog in the user's data directory.
    pub fn open_default() -> Result<Self, CatalogError> {
        let mut root = get_data_dir().ok_or(CatalogError::DataDirUnavailable)?;
        root.push("libraries");
        Ok(Self { root })
    }

    /// Opens a catalog rooted at an explicit directory.
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Creates the catalog directory if it doesn't exist.
    async fn ensure_root(&self) -> Result<(), CatalogError> {
        if !tokio::fs::try_exists(&self.root).await? {
            tokio::fs::create_dir_all(&self.root).await?;
        }
        Ok(())
    }

    /// Returns the path to a library file.
    /// Validates the name first to prevent directory traversal.
    pub fn library_path(&self, name: &str) -> Result<PathBuf, CatalogError> {
        validate_library_name(name).map_err(CatalogError::InvalidName)?;
        Ok(self.root.join(format!("{name}.json")))
    }

    /// Lists all library names, sorted.
    ///
    /// # Async
    /// Uses `tokio::fs` for non-blocking directory scanning.
    pub async fn list_libraries(&self) -> Result<Vec<String>, CatalogError> {
        self.ensure_root().await?;
        let mut names = Vec::new();

        let mut entries = tokio::fs::read_dir(&self.root).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();

            if path.is_file()
                && path.extension().and_then(|s| s.to_str()) == Some("json")
                && let Some(name) = path.file_stem().and_then(|s| s.to_str())
            {
                names.push(name.to_string());
            }
        }

        names.sort();
        Ok(names)
    }

    /// Loads a library by name.
    ///
    /// # Async
    /// Uses `tokio::fs` for non-blocking file I/O.
    pub async fn load_library(&self, name: &str) -> Result<Library, CatalogError> {
        let path = self.library_path(name)?;

        if !tokio::fs::try_exists(&path).await? {
            return Err(CatalogError::NotFound(name.to_string()));
        }

        let json = tokio::fs::read_to_string(&path).await?;

        let mut checksum_path = path.clone();
        checksum_path.set_extension("json.sha256");

        if let Ok(expected) = tokio::fs::read_to_string(&checksum_path).await {
            let actual = checksum(json.as_bytes());
            if expected.trim() != actual {
                tracing::warn!(
                    "Library '{}' checksum mismatch (expected: {}, got: {})",
                    name,
                    expected.trim(),
                    actual
                );
            }
        }

        let library = parse_library(name, &json)?;
        tracing::info!(
            "Loaded library '{}' ({} sections, {} documents)",
            name,
            library.sections.len(),
            library.document_count()
        );
        Ok(library)
    }

    /// Saves a library atomically (temp file + rename) and writes its checksum.
    ///
    /// # Async
    /// Uses `tokio::fs` for non-blocking file I/O.
    pub async fn save_library(&self, name: &str, library: &Library) -> Result<(), CatalogError> {
        validate_library(library).map_err(|reason| CatalogError::Invalid {
            name: name.to_string(),
            reason,
        })?;
        let path = self.library_path(name)?;
        self.ensure_root().await?;
        let json = serde_json::to_string_pretty(library)?;

        let mut temp_path = path.clone();
        temp_path.set_extension("json.tmp");

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
            tokio::fs::write(&temp_path, &json).await?;
        }

        tokio::fs::rename(temp_path, &path).await?;

        let mut checksum_path = path.clone();
        checksum_path.set_extension("json.sha256");
        tokio::fs::write(checksum_path, checksum(json.as_bytes())).await?;

        tracing::info!("Saved library '{}' to {}", name, path.display());
        Ok(())
    }

    /// Deletes a library and its checksum.
    /// The default library cannot be deleted.
    ///
    /// # Async
    /// Uses `tokio::fs` for non-blocking file I/O.
    pub async fn delete_library(&self, name: &str) -> Result<(), CatalogError> {
        if name == DEFAULT_LIBRARY_NAME {
            return Err(CatalogError::InvalidName(
                "Cannot delete default library".into(),
            ));
        }

        let path = self.library_path(name)?;
        if !tokio::fs::try_exists(&path).await? {
            return Err(CatalogError::NotFound(name.to_string()));
        }
        tokio::fs::remove_file(&path).await?;

        let mut checksum_path = path;
        checksum_path.set_extension("json.sha256");
        if tokio::fs::try_exists(&checksum_path).await? {
            tokio::fs::remove_file(checksum_path).await?;
        }

        tracing::info!("Deleted library '{}'", name);
        Ok(())
    }
}
