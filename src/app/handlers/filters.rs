//! File type and sort selection, and library replacement

use crate::app::handlers::search::refresh_search_view;
use crate::app::{DisplayMode, State};
use crate::core::filter::{FileTypeFilter, SortOption};
use crate::core::library::Library;

pub(crate) fn handle_file_type_selected(state: &mut State, file_type: FileTypeFilter) {
    state.filters.selected_file_type = file_type;
    state.open_dropdown = None;
    refresh_after_selection(state);
}

pub(crate) fn handle_sort_selected(state: &mut State, sort: SortOption) {
    state.filters.selected_sort = sort;
    state.open_dropdown = None;
    refresh_after_selection(state);
}

/// Replaces the source library, keeping selections and any active search.
///
/// Expanded sections that no longer exist are forgotten.
pub(crate) fn handle_library_loaded(state: &mut State, library: Library) {
    tracing::info!(
        "Library '{}' loaded ({} sections)",
        library.name,
        library.sections.len()
    );
    state
        .open_section_ids
        .retain(|id| library.sections.iter().any(|s| &s.id == id));
    state.library = library;
    state.refresh_browse_view();
    if state.mode == DisplayMode::Searching {
        refresh_search_view(state);
    }
}

fn refresh_after_selection(state: &mut State) {
    state.refresh_browse_view();
    // Search results ignore the selections unless composed with them
    if state.mode == DisplayMode::Searching && state.search_within_file_type {
        refresh_search_view(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::handlers::test_utils::{create_test_state, visible_ids};
    use crate::app::{Dropdown, Message};
    use crate::core::test_helpers::{doc, names, section};

    #[test]
    fn test_file_type_selection_filters_browse_view() {
        let mut state = create_test_state();
        handle_file_type_selected(&mut state, FileTypeFilter::Pdf);
        assert_eq!(visible_ids(&state), vec!["policies", "i9"]);
        assert_eq!(state.visible_sections()[0].count, 1);
    }

    #[test]
    fn test_selection_closes_dropdown() {
        let mut state = create_test_state();
        state.update(Message::ToggleDropdown(Dropdown::Sort));
        assert_eq!(state.open_dropdown, Some(Dropdown::Sort));
        handle_sort_selected(&mut state, SortOption::MostViewed);
        assert!(state.open_dropdown.is_none());
    }

    #[test]
    fn test_sort_selection_reorders_documents() {
        let mut state = create_test_state();
        handle_sort_selected(&mut state, SortOption::MostViewed);
        assert_eq!(
            names(&state.visible_sections()[0]),
            vec![
                "Travel Policy.pdf",
                "Code of Conduct.docx",
                "Anti-Harassment Training.mp4"
            ]
        );
    }

    #[test]
    fn test_selection_while_searching_keeps_search_results() {
        let mut state = create_test_state();
        state.update(Message::SearchChanged("pdf".to_string()));
        let results = state.cached_search_view.clone();

        handle_file_type_selected(&mut state, FileTypeFilter::Ppt);

        assert_eq!(state.mode, DisplayMode::Searching);
        assert_eq!(state.cached_search_view, results);
        assert_eq!(visible_ids(&state), vec!["policies", "i9"]);

        state.update(Message::ClearSearch);
        assert_eq!(visible_ids(&state), vec!["training"]);
    }

    #[test]
    fn test_library_loaded_prunes_open_sections() {
        let mut state = create_test_state();
        state.update(Message::ToggleSection("policies".to_string()));
        state.update(Message::ToggleSection("i9".to_string()));

        let library = Library::new(
            "Replacement",
            vec![section("i9", "I-9 Resources", vec![doc("n1", "New I-9.pdf", "PDF")])],
        );
        handle_library_loaded(&mut state, library);

        assert!(state.is_section_open("i9"));
        assert!(!state.is_section_open("policies"));
        assert_eq!(visible_ids(&state), vec!["i9"]);
    }
}
