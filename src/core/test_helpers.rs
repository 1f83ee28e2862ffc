//! Shared test utilities for core module tests
//!
//! Provides common builders to avoid duplication across test suites.
//! This module is only compiled in test mode.

use crate::core::library::{Document, Library, Section};

/// Creates a document with an empty size string.
pub fn doc(id: &str, name: &str, doc_type: &str) -> Document {
    Document::new(id, name, "", doc_type)
}

/// Creates a section whose count matches its documents.
pub fn section(id: &str, title: &str, documents: Vec<Document>) -> Section {
    Section::new(id, title, documents)
}

/// Document names of a section, in order.
pub fn names(section: &Section) -> Vec<&str> {
    section.documents.iter().map(|d| d.name.as_str()).collect()
}

/// Creates a small compliance library covering every known document type.
///
/// This is the canonical fixture for view and filter tests.
pub fn create_test_sections() -> Vec<Section> {
    vec![
        section(
            "policies",
            "Company Policies",
            vec![
                doc("p1", "Travel Policy.pdf", "PDF"),
                doc("p2", "Code of Conduct.docx", "Doc"),
                doc("p3", "Anti-Harassment Training.mp4", "Video"),
            ],
        ),
        section(
            "i9",
            "I-9 Resources",
            vec![
                doc("i1", "Form I-9.pdf", "PDF"),
                doc("i2", "List of Acceptable Documents.pdf", "PDF"),
            ],
        ),
        section(
            "training",
            "Training Decks",
            vec![doc("t1", "Screening Overview.pptx", "PPT")],
        ),
    ]
}

pub fn create_test_library() -> Library {
    Library::new("Compliance", create_test_sections())
}
