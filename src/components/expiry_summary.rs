//! Expiry Summary Component
//!
//! One-line heads-up about perishables reaching their DLC this week.

use leptos::prelude::*;
use stock_core::Item;

use crate::store::{use_app_store, AppStateStoreFields};

/// Look-ahead window, in days
const SUMMARY_WINDOW_DAYS: u32 = 7;

/// Text for the summary line; `None` hides it
pub fn summary_text(expiring: &[Item], days: u32) -> Option<String> {
    match expiring {
        [] => None,
        [only] => Some(format!("{} expires within {} days.", only.name, days)),
        many => {
            let names: Vec<&str> = many.iter().map(|i| i.name.as_str()).collect();
            Some(format!(
                "{} items expire within {} days: {}.",
                many.len(),
                days,
                names.join(", ")
            ))
        }
    }
}

#[component]
pub fn ExpirySummary() -> impl IntoView {
    let store = use_app_store();

    let text = Memo::new(move |_| {
        let today = store.now().get().date();
        let expiring = store.stock().read().expiring_within(today, SUMMARY_WINDOW_DAYS);
        summary_text(&expiring, SUMMARY_WINDOW_DAYS)
    });

    move || {
        text.get().map(|t| view! { <p class="expiry-summary">{t}</p> })
    }
}
