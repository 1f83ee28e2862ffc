//! Input validation for library names and library contents
//!
//! Library names become file names in the catalog directory, so they are
//! restricted to a portable character set. Library contents are checked for
//! the uniqueness guarantees the view layer relies on (section ids are used to
//! track expanded sections, document ids to key rendered rows).

use crate::core::library::{Library, MAX_DOCUMENTS};
use std::collections::HashSet;

/// Validates a library name for filesystem safety.
///
/// Constraints:
/// - Alphanumeric, underscores, and hyphens only
/// - 1 to 64 characters
/// - Not "." or ".."
///
/// # Examples
///
/// ```
/// use doclib::validators::validate_library_name;
///
/// assert!(validate_library_name("hr-2024").is_ok());
/// assert!(validate_library_name("../etc").is_err());
/// ```
pub fn validate_library_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("Name cannot be empty".to_string());
    }

    if name.len() > 64 {
        return Err("Name too long (max 64 chars)".to_string());
    }

    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err("Name contains invalid characters (use only a-z, 0-9, _, -)".to_string());
    }

    if name == "." || name == ".." {
        return Err("Invalid name".to_string());
    }

    Ok(())
}

/// Validates the structure of a loaded library.
///
/// # Errors
///
/// Returns `Err` if:
/// - The library holds more than [`MAX_DOCUMENTS`] documents
/// - Two sections share an id
/// - Two documents share an id (across the whole library)
/// - A document has an empty name
pub fn validate_library(library: &Library) -> Result<(), String> {
    let total = library.document_count();
    if total > MAX_DOCUMENTS {
        return Err(format!(
            "Library contains {total} documents (max: {MAX_DOCUMENTS})"
        ));
    }

    let mut section_ids = HashSet::new();
    let mut document_ids = HashSet::new();

    for section in &library.sections {
        if !section_ids.insert(section.id.as_str()) {
            return Err(format!("Duplicate section id '{}'", section.id));
        }
        for doc in &section.documents {
            if !document_ids.insert(doc.id.as_str()) {
                return Err(format!(
                    "Duplicate document id '{}' in section '{}'",
                    doc.id, section.title
                ));
            }
            if doc.name.trim().is_empty() {
                return Err(format!(
                    "Document '{}' in section '{}' has no name",
                    doc.id, section.title
                ));
            }
        }
    }

    Ok(())
}

/// Returns the distinct document types outside the known vocabulary.
///
/// These documents still load and show under "All Files"; callers log them.
pub fn unknown_document_types(library: &Library) -> Vec<String> {
    let mut seen: Vec<String> = library
        .documents()
        .filter(|d| !d.is_known_type())
        .map(|d| d.doc_type.clone())
        .collect();
    seen.sort();
    seen.dedup();
    seen
}
