//! Document library data structures
//!
//! A [`Library`] is an ordered list of titled [`Section`]s, each owning an
//! ordered list of [`Document`]s. Libraries are supplied once (loaded from the
//! catalog or a file) and never mutated by filtering: every filtered, searched,
//! or sorted view is a fresh `Vec<Section>` whose documents are shared with the
//! source through `Arc`.
//!
//! Expand/collapse state is deliberately absent from these records. The view
//! layer tracks open sections by id (see [`crate::app::State`]).
//!
//! # Example
//!
//! ```
//! use doclib::core::library::{Document, Library, Section};
//!
//! let section = Section::new(
//!     "contracts",
//!     "Contracts",
//!     vec![Document::new("d1", "Invoice.pdf", "1.2 MB", "PDF")],
//! );
//! let library = Library::new("Compliance", vec![section]);
//! assert_eq!(library.document_count(), 1);
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Maximum number of documents allowed in a single library
///
/// Prevents memory exhaustion from malformed library files.
pub const MAX_DOCUMENTS: usize = 10_000;

/// Document types the front-end knows how to display.
///
/// Other values are accepted on load but never match a type filter other
/// than "All Files".
pub const KNOWN_DOCUMENT_TYPES: [&str; 4] = ["PDF", "Video", "Doc", "PPT"];

fn new_record_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// A single file entry in a section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Unique identifier; generated on load when the source file omits it
    #[serde(default = "new_record_id")]
    pub id: String,
    pub name: String,
    /// Human-readable size ("1.2 MB"). Display only, never parsed.
    #[serde(default)]
    pub size: String,
    /// One of [`KNOWN_DOCUMENT_TYPES`] in well-formed data
    #[serde(rename = "type")]
    pub doc_type: String,
    /// Upload time, used by the "Most Recent" sort
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Document {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        size: impl Into<String>,
        doc_type: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            size: size.into(),
            doc_type: doc_type.into(),
            created_at: None,
        }
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    pub fn is_known_type(&self) -> bool {
        KNOWN_DOCUMENT_TYPES.contains(&self.doc_type.as_str())
    }
}

/// A titled group of documents
///
/// `count` is the display count shown next to the title. Type filtering keeps
/// it equal to `documents.len()`; search sets it to the number of name matches
/// (which is 0 when the section is kept only because its title matched).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    #[serde(default = "new_record_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub count: usize,
    #[serde(default)]
    pub documents: Vec<Arc<Document>>,
}

impl Section {
    /// Creates a section whose count matches its document list.
    pub fn new(id: impl Into<String>, title: impl Into<String>, documents: Vec<Document>) -> Self {
        let documents: Vec<Arc<Document>> = documents.into_iter().map(Arc::new).collect();
        Self {
            id: id.into(),
            title: title.into(),
            count: documents.len(),
            documents,
        }
    }

    /// Derives a new section with the same identity and a different document list.
    pub(crate) fn derive(&self, documents: Vec<Arc<Document>>, count: usize) -> Self {
        Self {
            id: self.id.clone(),
            title: self.title.clone(),
            count,
            documents,
        }
    }
}

/// A named, ordered collection of sections
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Library {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl Library {
    pub fn new(name: impl Into<String>, sections: Vec<Section>) -> Self {
        Self {
            name: name.into(),
            sections,
        }
    }

    pub fn document_count(&self) -> usize {
        self.sections.iter().map(|s| s.documents.len()).sum()
    }

    /// Iterates over every document in section order.
    pub fn documents(&self) -> impl Iterator<Item = &Arc<Document>> {
        self.sections.iter().flat_map(|s| s.documents.iter())
    }

    /// Resets every section's display count to its document count.
    ///
    /// Library files written by hand often omit or misstate `count`.
    pub fn normalize_counts(&mut self) {
        for section in &mut self.sections {
            section.count = section.documents.len();
        }
    }
}
