//! View state for browsing a document library
//!
//! [`State`] owns the source [`Library`] and the user's current selections.
//! All recomputation happens synchronously inside [`State::update`], so the
//! cached views are always consistent with the selections once `update`
//! returns.
//!
//! The visible list comes from one of two modes:
//!
//! - [`DisplayMode::Browsing`]: the type-filtered, sorted view
//! - [`DisplayMode::Searching`]: a search over the whole library, ignoring
//!   the selected file type and sort (unless `search_within_file_type` is set)
//!
//! Typing a non-empty query enters `Searching`; clearing it returns to
//! `Browsing` and shows the last type-filtered view again.

pub mod handlers;
pub mod view;

use crate::config::AppConfig;
use crate::core::filter::{FileTypeFilter, SortOption, apply_type_and_sort};
use crate::core::library::{Library, Section};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    Browsing,
    Searching,
}

/// Dropdown menus in the library toolbar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dropdown {
    FileType,
    Sort,
}

/// The user's current search text and dropdown selections
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub search_query: String,
    pub selected_file_type: FileTypeFilter,
    pub selected_sort: SortOption,
}

#[derive(Debug, Clone)]
pub enum Message {
    SearchChanged(String),
    ClearSearch,
    FileTypeSelected(FileTypeFilter),
    SortSelected(SortOption),
    ToggleDropdown(Dropdown),
    /// A click landed outside any open dropdown. Sent by the host UI.
    OutsideClick,
    ToggleSection(String),
    ExpandAll,
    CollapseAll,
    LibraryLoaded(Library),
}

pub struct State {
    pub library: Library,
    pub filters: FilterState,
    pub mode: DisplayMode,
    pub search_within_file_type: bool,
    pub open_section_ids: HashSet<String>,
    pub open_dropdown: Option<Dropdown>,
    /// Last type-filtered, sorted view (shown while browsing)
    pub cached_browse_view: Vec<Section>,
    /// Current search results (only meaningful while searching)
    pub cached_search_view: Vec<Section>,
}

impl State {
    pub fn new(library: Library, config: &AppConfig) -> Self {
        let open_section_ids = if config.expand_sections_by_default {
            library.sections.iter().map(|s| s.id.clone()).collect()
        } else {
            HashSet::new()
        };

        let mut state = Self {
            library,
            filters: FilterState {
                search_query: String::new(),
                selected_file_type: config.default_file_type,
                selected_sort: config.default_sort,
            },
            mode: DisplayMode::Browsing,
            search_within_file_type: config.search_within_file_type,
            open_section_ids,
            open_dropdown: None,
            cached_browse_view: Vec::new(),
            cached_search_view: Vec::new(),
        };
        state.refresh_browse_view();
        state
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::SearchChanged(query) => handlers::handle_search_changed(self, query),
            Message::ClearSearch => handlers::handle_clear_search(self),
            Message::FileTypeSelected(file_type) => {
                handlers::handle_file_type_selected(self, file_type);
            }
            Message::SortSelected(sort) => handlers::handle_sort_selected(self, sort),
            Message::ToggleDropdown(dropdown) => handlers::handle_toggle_dropdown(self, dropdown),
            Message::OutsideClick => handlers::handle_outside_click(self),
            Message::ToggleSection(id) => handlers::handle_toggle_section(self, &id),
            Message::ExpandAll => handlers::handle_expand_all(self),
            Message::CollapseAll => handlers::handle_collapse_all(self),
            Message::LibraryLoaded(library) => handlers::handle_library_loaded(self, library),
        }
    }

    /// The sections to render for the current mode.
    pub fn visible_sections(&self) -> &[Section] {
        match self.mode {
            DisplayMode::Browsing => &self.cached_browse_view,
            DisplayMode::Searching => &self.cached_search_view,
        }
    }

    pub fn is_section_open(&self, id: &str) -> bool {
        self.open_section_ids.contains(id)
    }

    /// Recomputes the browsing view from the source library and selections.
    pub(crate) fn refresh_browse_view(&mut self) {
        self.cached_browse_view = apply_type_and_sort(
            &self.library.sections,
            self.filters.selected_file_type,
            Some(self.filters.selected_sort),
        );
        tracing::debug!(
            "Browse view: {} sections ({}, {})",
            self.cached_browse_view.len(),
            self.filters.selected_file_type,
            self.filters.selected_sort
        );
    }
}
