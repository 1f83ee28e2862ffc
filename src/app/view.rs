//! Plain-text rendering of the library view
//!
//! Renders the visible sections as an accordion: one header line per section
//! with its open marker and display count, and the documents of open sections
//! indented underneath. While searching, a results counter heads the output.

use crate::app::{DisplayMode, State};
use crate::core::filter::result_count;
use crate::utils::truncate_string;
use std::fmt::Write;

const NAME_WIDTH: usize = 44;

/// Renders the current view of `state`.
pub fn render_text(state: &State) -> String {
    let mut out = String::new();
    let sections = state.visible_sections();

    match state.mode {
        DisplayMode::Browsing => {
            let _ = writeln!(
                out,
                "{} [{} | {}]",
                display_name(state),
                state.filters.selected_file_type,
                state.filters.selected_sort
            );
        }
        DisplayMode::Searching => {
            let _ = writeln!(
                out,
                "{} [search \"{}\": {} results]",
                display_name(state),
                state.filters.search_query,
                result_count(sections)
            );
        }
    }

    if sections.is_empty() {
        out.push_str("  (no documents)\n");
        return out;
    }

    for section in sections {
        let open = state.is_section_open(&section.id);
        let marker = if open { '▾' } else { '▸' };
        let _ = writeln!(out, "{marker} {} ({})", section.title, section.count);

        if open {
            for doc in &section.documents {
                let _ = writeln!(
                    out,
                    "    {:<width$}  {:<5}  {}",
                    truncate_string(&doc.name, NAME_WIDTH),
                    doc.doc_type,
                    doc.size,
                    width = NAME_WIDTH
                );
            }
        }
    }

    out
}

fn display_name(state: &State) -> &str {
    if state.library.name.is_empty() {
        "Library"
    } else {
        &state.library.name
    }
}
