//! Type filtering, sorting, and search over a library's sections
//!
//! These are pure functions: they borrow the source sections and return new
//! section lists that share the source's `Arc<Document>` values. Nothing here
//! can fail. Unknown filter or sort names parse to a pass-through rather than
//! an error (see [`FileTypeFilter::parse_lenient`] and
//! [`SortOption::parse_lenient`]).
//!
//! Search and type/sort filtering are independent operations. The view layer
//! decides whether to compose them.

use crate::core::library::{Document, Section};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::sync::Arc;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// File type dropdown selection
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(ascii_case_insensitive)]
pub enum FileTypeFilter {
    #[default]
    #[strum(to_string = "All Files", serialize = "all", serialize = "all-files", serialize = "allfiles")]
    AllFiles,
    #[strum(to_string = "PDF", serialize = "pdf")]
    Pdf,
    #[strum(to_string = "Videos", serialize = "videos", serialize = "video")]
    Videos,
    #[strum(to_string = "Docs", serialize = "docs", serialize = "doc")]
    Docs,
    #[strum(to_string = "PPT", serialize = "ppt")]
    Ppt,
}

impl FileTypeFilter {
    /// The `Document::doc_type` value this filter keeps, or `None` for all files.
    pub const fn document_type(self) -> Option<&'static str> {
        match self {
            FileTypeFilter::AllFiles => None,
            FileTypeFilter::Pdf => Some("PDF"),
            FileTypeFilter::Videos => Some("Video"),
            FileTypeFilter::Docs => Some("Doc"),
            FileTypeFilter::Ppt => Some("PPT"),
        }
    }

    /// Parses a filter name, falling back to [`FileTypeFilter::AllFiles`].
    pub fn parse_lenient(value: &str) -> Self {
        value.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Unknown file type filter '{}', showing all files", value);
            FileTypeFilter::AllFiles
        })
    }

    fn matches(self, document: &Document) -> bool {
        self.document_type()
            .is_none_or(|wanted| document.doc_type == wanted)
    }
}

/// Sort dropdown selection
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(ascii_case_insensitive)]
pub enum SortOption {
    #[default]
    #[strum(to_string = "A to Z", serialize = "a-z", serialize = "atoz", serialize = "a-to-z")]
    AToZ,
    #[strum(to_string = "Most Recent", serialize = "recent", serialize = "most-recent")]
    MostRecent,
    #[strum(to_string = "Most Viewed", serialize = "viewed", serialize = "most-viewed")]
    MostViewed,
}

impl SortOption {
    /// Parses a sort name. Unknown names yield `None`, which keeps source order.
    pub fn parse_lenient(value: &str) -> Option<Self> {
        match value.trim().parse() {
            Ok(option) => Some(option),
            Err(_) => {
                tracing::warn!("Unknown sort option '{}', keeping source order", value);
                None
            }
        }
    }

    /// Orders two documents for this sort.
    ///
    /// `MostViewed` is a placeholder: documents carry no view counts, so it
    /// orders by name descending. `MostRecent` orders by `created_at`
    /// descending with undated documents last.
    pub fn compare(self, a: &Document, b: &Document) -> Ordering {
        match self {
            SortOption::AToZ => compare_names(&a.name, &b.name),
            SortOption::MostViewed => compare_names(&b.name, &a.name),
            SortOption::MostRecent => match (a.created_at, b.created_at) {
                (Some(x), Some(y)) => y.cmp(&x),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
        }
    }
}

/// Locale-style name order.
///
/// Compared level by level until one differs:
/// 1. base letters, ignoring accents and case ("Étude" sorts with "etude")
/// 2. accents ("etude" before "étude")
/// 3. case, lowercase first ("report" before "Report")
/// 4. raw code points, so the order is total
fn compare_names(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| {
            a.nfd()
                .flat_map(char::to_lowercase)
                .cmp(b.nfd().flat_map(char::to_lowercase))
        })
        .then_with(|| {
            a.chars()
                .map(char::is_uppercase)
                .cmp(b.chars().map(char::is_uppercase))
        })
        .then_with(|| a.cmp(b))
}

fn base_letters(name: &str) -> impl Iterator<Item = char> + '_ {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

/// Filters each section by document type, then sorts its documents.
///
/// Sections left empty by the type filter are dropped. Section order follows
/// the source; document order within a section follows `sort` (stable), or
/// the source order when `sort` is `None`. Every output section's `count`
/// equals its document count.
pub fn apply_type_and_sort(
    source: &[Section],
    file_type: FileTypeFilter,
    sort: Option<SortOption>,
) -> Vec<Section> {
    source
        .iter()
        .filter_map(|section| {
            let mut documents: Vec<Arc<Document>> = section
                .documents
                .iter()
                .filter(|doc| file_type.matches(doc))
                .cloned()
                .collect();

            if documents.is_empty() && file_type != FileTypeFilter::AllFiles {
                return None;
            }

            if let Some(sort) = sort {
                documents.sort_by(|a, b| sort.compare(a, b));
            }

            let count = documents.len();
            Some(section.derive(documents, count))
        })
        .collect()
}

/// Case-insensitive substring search over document names and section titles.
///
/// An empty query borrows the source unchanged. Otherwise a section is kept
/// when any document name or its title contains the query. A kept section
/// lists only the matching documents, or all of its documents when only the
/// title matched; its `count` is the number of matching documents either way.
pub fn apply_search<'a>(source: &'a [Section], query: &str) -> Cow<'a, [Section]> {
    if query.is_empty() {
        return Cow::Borrowed(source);
    }

    let needle = query.to_lowercase();
    let results: Vec<Section> = source
        .iter()
        .filter_map(|section| {
            let matching: Vec<Arc<Document>> = section
                .documents
                .iter()
                .filter(|doc| doc.name.to_lowercase().contains(&needle))
                .cloned()
                .collect();
            let title_match = section.title.to_lowercase().contains(&needle);

            if matching.is_empty() && !title_match {
                return None;
            }

            let count = matching.len();
            let documents = if matching.is_empty() {
                section.documents.clone()
            } else {
                matching
            };
            Some(section.derive(documents, count))
        })
        .collect();

    Cow::Owned(results)
}

/// Total documents across all sections (the "N results" counter).
pub fn result_count(sections: &[Section]) -> usize {
    sections.iter().map(|s| s.documents.len()).sum()
}
