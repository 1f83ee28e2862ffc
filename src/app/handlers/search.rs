//! Search handling
//!
//! Search text drives the Browsing/Searching mode switch. Results are
//! computed over the whole library by default, so an active file type filter
//! is ignored while searching and comes back when the search is cleared.

use crate::app::{DisplayMode, State};
use crate::core::filter::{apply_search, result_count};

pub(crate) fn handle_search_changed(state: &mut State, query: String) {
    state.filters.search_query = query;

    if state.filters.search_query.is_empty() {
        leave_search(state);
    } else {
        state.mode = DisplayMode::Searching;
        refresh_search_view(state);
    }
}

pub(crate) fn handle_clear_search(state: &mut State) {
    state.filters.search_query.clear();
    leave_search(state);
}

/// Recomputes search results for the current query.
///
/// Only called while searching, so the query is non-empty.
pub(crate) fn refresh_search_view(state: &mut State) {
    let source = if state.search_within_file_type {
        &state.cached_browse_view
    } else {
        &state.library.sections
    };
    state.cached_search_view = apply_search(source, &state.filters.search_query).into_owned();
    tracing::debug!(
        "Search '{}': {} results in {} sections",
        state.filters.search_query,
        result_count(&state.cached_search_view),
        state.cached_search_view.len()
    );
}

fn leave_search(state: &mut State) {
    state.mode = DisplayMode::Browsing;
    state.cached_search_view.clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Message;
    use crate::app::handlers::test_utils::{create_test_state, create_test_state_with, visible_ids};
    use crate::config::AppConfig;
    use crate::core::filter::FileTypeFilter;

    #[test]
    fn test_typing_enters_search_mode() {
        let mut state = create_test_state();
        handle_search_changed(&mut state, "form".to_string());
        assert_eq!(state.mode, DisplayMode::Searching);
        assert_eq!(visible_ids(&state), vec!["i9"]);
        assert_eq!(result_count(state.visible_sections()), 1);
    }

    #[test]
    fn test_emptying_input_returns_to_browsing() {
        let mut state = create_test_state();
        handle_search_changed(&mut state, "f".to_string());
        handle_search_changed(&mut state, String::new());
        assert_eq!(state.mode, DisplayMode::Browsing);
        assert!(state.cached_search_view.is_empty());
        assert_eq!(visible_ids(&state), vec!["policies", "i9", "training"]);
    }

    #[test]
    fn test_search_ignores_file_type_filter() {
        let mut state = create_test_state();
        state.update(Message::FileTypeSelected(FileTypeFilter::Ppt));
        assert_eq!(visible_ids(&state), vec!["training"]);

        state.update(Message::SearchChanged("policy".to_string()));
        assert_eq!(visible_ids(&state), vec!["policies"]);
    }

    #[test]
    fn test_clear_restores_last_browse_view() {
        let mut state = create_test_state();
        state.update(Message::FileTypeSelected(FileTypeFilter::Pdf));
        let before = state.cached_browse_view.clone();

        state.update(Message::SearchChanged("training".to_string()));
        state.update(Message::ClearSearch);

        assert_eq!(state.mode, DisplayMode::Browsing);
        assert!(state.filters.search_query.is_empty());
        assert_eq!(state.visible_sections(), before.as_slice());
        assert_eq!(state.filters.selected_file_type, FileTypeFilter::Pdf);
    }

    #[test]
    fn test_clear_with_all_files_shows_every_source_document() {
        let mut state = create_test_state();
        state.update(Message::SearchChanged("i-9".to_string()));
        state.update(Message::ClearSearch);

        let visible = state.visible_sections();
        assert_eq!(visible.len(), state.library.sections.len());
        for (shown, source) in visible.iter().zip(&state.library.sections) {
            assert_eq!(shown.id, source.id);
            assert_eq!(shown.count, source.documents.len());
            for doc in &source.documents {
                assert!(shown.documents.contains(doc));
            }
        }
    }

    #[test]
    fn test_search_within_file_type_when_enabled() {
        let config = AppConfig {
            search_within_file_type: true,
            ..AppConfig::default()
        };
        let mut state = create_test_state_with(&config);
        state.update(Message::FileTypeSelected(FileTypeFilter::Videos));
        state.update(Message::SearchChanged("polic".to_string()));
        // "Company Policies" still matches by title, showing only its video
        assert_eq!(visible_ids(&state), vec!["policies"]);
        assert_eq!(state.visible_sections()[0].documents.len(), 1);
        assert_eq!(state.visible_sections()[0].count, 0);
    }

    #[test]
    fn test_title_match_reports_zero_count() {
        let mut state = create_test_state();
        state.update(Message::SearchChanged("decks".to_string()));
        let sections = state.visible_sections();
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].count, 0);
        assert_eq!(sections[0].documents.len(), 1);
    }
}
