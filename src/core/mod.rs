//! Core document library functionality
//!
//! - [`library`]: Data structures for documents, sections, and libraries
//! - [`filter`]: Type filtering, sorting, and search over sections
//! - [`catalog`]: Saved library files and their integrity checks
//! - [`error`]: Error types for library operations

pub mod catalog;
pub mod error;
pub mod filter;
pub mod library;

#[cfg(test)]
pub mod test_helpers;
