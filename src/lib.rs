//! doclib - document library browser
//!
//! Browse, filter, sort, and search a compliance document library: titled
//! sections of PDFs, videos, documents, and slide decks.
//!
//! # Architecture
//!
//! - [`core`] - Library data model, filter pipeline, and saved library catalog
//! - [`app`] - View state: browsing/searching modes, dropdowns, section expansion
//! - [`validators`] - Library name and content validation
//! - [`config`] - Preference persistence
//! - [`utils`] - Utility functions (XDG directories, etc.)

#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::missing_errors_doc)]

pub mod app;
pub mod config;
pub mod core;
pub mod utils;
pub mod validators;

// Re-export commonly used types
pub use core::error::{Error, Result};
pub use core::filter::{FileTypeFilter, SortOption, apply_search, apply_type_and_sort};
pub use core::library::{Document, Library, Section};
