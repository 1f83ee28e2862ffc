//! Message handlers organized by domain
//!
//! - [`search`]: search text entry and clearing
//! - [`filters`]: file type and sort selection, library replacement
//! - [`ui_state`]: dropdowns and section expansion

pub mod filters;
pub mod search;
pub mod ui_state;

#[cfg(test)]
pub mod test_utils;

pub(crate) use filters::*;
pub(crate) use search::*;
pub(crate) use ui_state::*;
