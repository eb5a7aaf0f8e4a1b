//! Dispose Buttons Component
//!
//! Inline "Consumed" / "Lost" actions for one inventory row.

use leptos::prelude::*;
use stock_core::DisposalOutcome;

use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

/// Both disposal actions for an item
///
/// Buttons stay disabled while a disposal for the same item is in flight.
#[component]
pub fn DisposeButtons(id: u32) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let store = use_app_store();

    let busy = move || store.stock().read().is_disposing(id);

    view! {
        <span class="dispose-actions">
            {[DisposalOutcome::Consumed, DisposalOutcome::Lost].into_iter().map(|outcome| {
                let (class, text) = match outcome {
                    DisposalOutcome::Consumed => ("dispose-btn consumed", "Consumed"),
                    DisposalOutcome::Lost => ("dispose-btn lost", "Lost"),
                };
                view! {
                    <button
                        type="button"
                        class=class
                        disabled=busy
                        on:click=move |ev| {
                            ev.stop_propagation();
                            ctx.dispose(id, outcome);
                        }
                    >
                        {text}
                    </button>
                }
            }).collect_view()}
        </span>
    }
}
