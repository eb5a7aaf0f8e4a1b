//! Global Application State Store
//!
//! Uses Leptos reactive_stores for field-level reactivity: the clock ticks
//! without notifying readers of the stock state, and vice versa.

use chrono::{Local, NaiveDateTime};
use leptos::prelude::*;
use reactive_stores::Store;
use stock_core::StockState;

/// Global application state
#[derive(Clone, Debug, Store)]
pub struct AppState {
    /// Vocabularies, items, draft form, submit phase, feedback
    pub stock: StockState,
    /// "Now" used for urgency; refreshed periodically
    pub now: NaiveDateTime,
}

impl AppState {
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            stock: StockState::new(),
            now,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Local wall-clock time
pub fn current_time() -> NaiveDateTime {
    Local::now().naive_local()
}

// ========================
// Store Helper Functions
// ========================

/// Move the urgency clock forward
pub fn store_tick_clock(store: &AppStore) {
    *store.now().write() = current_time();
}
