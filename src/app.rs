//! DLC Stock Frontend App
//!
//! Main application component: entry form on top, inventory below.

use gloo_timers::callback::Interval;
use leptos::prelude::*;
use reactive_stores::Store;
use tracing::debug;

use crate::commands::FetchApi;
use crate::components::{ExpirySummary, FeedbackBanner, InventoryTable, ItemForm};
use crate::context::AppContext;
use crate::store::{current_time, store_tick_clock, AppState};

/// Urgency labels are recomputed on this period
const CLOCK_TICK_MS: u32 = 60_000;

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new(current_time()));
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let ctx = AppContext::new(store, FetchApi::from_build_env(), set_reload_trigger);

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Vocabularies load once, independently of the item list
    Effect::new(move |_| {
        ctx.load_references();
    });

    // Load items on mount and whenever the trigger changes
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        debug!("[APP] Loading items, trigger={}", trigger);
        ctx.load_items();
    });

    Interval::new(CLOCK_TICK_MS, move || store_tick_clock(&store)).forget();

    view! {
        <div class="app-layout">
            <main class="main-content">
                <h1>"Stock DLC"</h1>

                <FeedbackBanner />

                <ItemForm />

                <ExpirySummary />

                <InventoryTable />
            </main>
        </div>
    }
}
