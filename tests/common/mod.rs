#![allow(dead_code)]

use chrono::Duration;
use shortlinks::domain::Registry;
use shortlinks::state::AppState;
use std::sync::Arc;

pub const TEST_BASE_URL: &str = "https://s.test";

pub fn create_test_state() -> AppState {
    AppState {
        registry: Arc::new(Registry::new()),
        base_url: TEST_BASE_URL.to_string(),
    }
}

pub fn create_test_link(state: &AppState, url: &str) -> String {
    state.registry.create(url.to_string(), None).unwrap()
}

pub fn create_expired_link(state: &AppState, url: &str) -> String {
    state
        .registry
        .create(url.to_string(), Some(Duration::hours(-1)))
        .unwrap()
}
