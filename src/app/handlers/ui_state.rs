//! UI state management
//!
//! Handles presentation-only state:
//! - Toolbar dropdowns (at most one open, dismissed by an outside click)
//! - Section expand/collapse, tracked by section id

use crate::app::{Dropdown, State};

/// Opens `dropdown`, or closes it if it is already open.
pub(crate) fn handle_toggle_dropdown(state: &mut State, dropdown: Dropdown) {
    state.open_dropdown = if state.open_dropdown == Some(dropdown) {
        None
    } else {
        Some(dropdown)
    };
}

pub(crate) fn handle_outside_click(state: &mut State) {
    state.open_dropdown = None;
}

pub(crate) fn handle_toggle_section(state: &mut State, id: &str) {
    if !state.open_section_ids.remove(id) {
        if state.library.sections.iter().any(|s| s.id == id) {
            state.open_section_ids.insert(id.to_string());
        } else {
            tracing::warn!("ToggleSection for unknown section '{}'", id);
        }
    }
}

/// Expands every section currently visible.
pub(crate) fn handle_expand_all(state: &mut State) {
    let ids: Vec<String> = state
        .visible_sections()
        .iter()
        .map(|s| s.id.clone())
        .collect();
    state.open_section_ids.extend(ids);
}

pub(crate) fn handle_collapse_all(state: &mut State) {
    state.open_section_ids.clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Message;
    use crate::app::handlers::test_utils::create_test_state;
    use crate::config::AppConfig;
    use crate::core::test_helpers::create_test_library;

    #[test]
    fn test_only_one_dropdown_open() {
        let mut state = create_test_state();
        handle_toggle_dropdown(&mut state, Dropdown::FileType);
        assert_eq!(state.open_dropdown, Some(Dropdown::FileType));
        handle_toggle_dropdown(&mut state, Dropdown::Sort);
        assert_eq!(state.open_dropdown, Some(Dropdown::Sort));
        handle_toggle_dropdown(&mut state, Dropdown::Sort);
        assert!(state.open_dropdown.is_none());
    }

    #[test]
    fn test_outside_click_dismisses_dropdown() {
        let mut state = create_test_state();
        state.update(Message::ToggleDropdown(Dropdown::FileType));
        state.update(Message::OutsideClick);
        assert!(state.open_dropdown.is_none());

        // No-op when nothing is open
        state.update(Message::OutsideClick);
        assert!(state.open_dropdown.is_none());
    }

    #[test]
    fn test_toggle_section() {
        let mut state = create_test_state();
        handle_toggle_section(&mut state, "i9");
        assert!(state.is_section_open("i9"));
        handle_toggle_section(&mut state, "i9");
        assert!(!state.is_section_open("i9"));
    }

    #[test]
    fn test_toggle_unknown_section_is_ignored() {
        let mut state = create_test_state();
        handle_toggle_section(&mut state, "missing");
        assert!(state.open_section_ids.is_empty());
    }

    #[test]
    fn test_expand_all_covers_visible_sections_only() {
        let mut state = create_test_state();
        state.update(Message::SearchChanged("form".to_string()));
        handle_expand_all(&mut state);
        assert!(state.is_section_open("i9"));
        assert!(!state.is_section_open("policies"));

        handle_collapse_all(&mut state);
        assert!(state.open_section_ids.is_empty());
    }

    #[test]
    fn test_expand_by_default_config() {
        let config = AppConfig {
            expand_sections_by_default: true,
            ..AppConfig::default()
        };
        let state = State::new(create_test_library(), &config);
        assert_eq!(state.open_section_ids.len(), 3);
    }

    #[test]
    fn test_expansion_survives_filtering() {
        let mut state = create_test_state();
        state.update(Message::ToggleSection("training".to_string()));
        state.update(Message::FileTypeSelected(crate::core::filter::FileTypeFilter::Pdf));
        state.update(Message::FileTypeSelected(crate::core::filter::FileTypeFilter::AllFiles));
        assert!(state.is_section_open("training"));
    }
}
