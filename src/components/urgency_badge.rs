//! Urgency Badge Component

use leptos::prelude::*;
use stock_core::Expiry;

/// Colored label: "Expired" or the remaining day count
#[component]
pub fn UrgencyBadge(expiry: Expiry) -> impl IntoView {
    let class = format!("urgency-badge {}", expiry.urgency.css_class());
    view! {
        <span class=class title=expiry.urgency.as_str()>
            {expiry.label()}
        </span>
    }
}
