//! Utility functions for directory management and display text
//!
//! Directories follow the XDG Base Directory specification:
//!
//! - Data: `~/.local/share/doclib/` - Saved libraries and configuration
//! - State: `~/.local/state/doclib/` - Log files
//!
//! # Example
//!
//! ```no_run
//! use doclib::utils::{ensure_dirs, get_data_dir};
//!
//! ensure_dirs().expect("Failed to create directories");
//!
//! if let Some(data_path) = get_data_dir() {
//!     // Load libraries from data_path
//! }
//! ```

use directories::ProjectDirs;
use std::path::PathBuf;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "doclib", "doclib")
}

/// Directory holding the library catalog and `config.json`.
pub fn get_data_dir() -> Option<PathBuf> {
    project_dirs().map(|pd| pd.data_dir().to_path_buf())
}

/// Directory holding `doclib.log`. `None` on platforms without a state dir.
pub fn get_state_dir() -> Option<PathBuf> {
    project_dirs().and_then(|pd| pd.state_dir().map(std::path::Path::to_path_buf))
}

/// Creates the data and state directories, user-only on Unix.
pub fn ensure_dirs() -> std::io::Result<()> {
    for dir in [get_data_dir(), get_state_dir()].into_iter().flatten() {
        create_private_dir(&dir)?;
    }
    Ok(())
}

#[cfg(unix)]
fn create_private_dir(dir: &std::path::Path) -> std::io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;

    std::fs::DirBuilder::new()
        .mode(0o700)
        .recursive(true)
        .create(dir)
}

#[cfg(not(unix))]
fn create_private_dir(dir: &std::path::Path) -> std::io::Result<()> {
    std::fs::create_dir_all(dir)
}

/// Truncates a string to at most `max_chars` characters, ending with "..."
/// when anything was cut.
pub fn truncate_string(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let keep = max_chars.saturating_sub(3);
    let head: String = s.chars().take(keep).collect();
    format!("{head}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short() {
        assert_eq!(truncate_string("Form I-9.pdf", 40), "Form I-9.pdf");
    }

    #[test]
    fn test_truncate_long() {
        let out = truncate_string("List of Acceptable Documents.pdf", 12);
        assert_eq!(out, "List of A...");
        assert_eq!(out.chars().count(), 12);
    }

    #[cfg(unix)]
    #[test]
    fn test_create_private_dir_is_user_only() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("nested/state");
        create_private_dir(&dir).unwrap();
        // Idempotent
        create_private_dir(&dir).unwrap();
        let mode = std::fs::metadata(&dir).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o700);
    }

    #[test]
    fn test_truncate_multibyte() {
        let out = truncate_string("Ünïcödé Fïlé Nämé.pdf", 8);
        assert_eq!(out, "Ünïcö...");
    }
}
