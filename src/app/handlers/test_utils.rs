//! Shared test utilities for handler modules

use crate::app::State;
use crate::config::AppConfig;
use crate::core::test_helpers::create_test_library;

pub fn create_test_state() -> State {
    State::new(create_test_library(), &AppConfig::default())
}

pub fn create_test_state_with(config: &AppConfig) -> State {
    State::new(create_test_library(), config)
}

/// Section ids of the visible view, in order.
pub fn visible_ids(state: &State) -> Vec<&str> {
    state
        .visible_sections()
        .iter()
        .map(|s| s.id.as_str())
        .collect()
}
