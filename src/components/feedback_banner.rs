//! Feedback Banner Component
//!
//! Shows the current success or error notice, if any.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn FeedbackBanner() -> impl IntoView {
    let store = use_app_store();

    let notice = move || store.stock().read().feedback().notice().cloned();

    move || {
        notice().map(|n| {
            let class = if n.is_error() {
                "feedback feedback-error"
            } else {
                "feedback feedback-success"
            };
            view! {
                <div class=class role="status">
                    {n.text().to_string()}
                </div>
            }
        })
    }
}
