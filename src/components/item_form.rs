//! Item Form Component
//!
//! Entry form for new items. Every field writes straight into the draft
//! held by the store; submission goes through the app context.

use chrono::NaiveDate;
use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

/// Format used by `<input type="date">`
const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Parse the date input's value; an empty or partial value means "no date yet"
pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_INPUT_FORMAT).ok()
}

/// Value to show in the date input
pub fn dlc_input_value(dlc: Option<NaiveDate>) -> String {
    dlc.map(|d| d.format(DATE_INPUT_FORMAT).to_string())
        .unwrap_or_default()
}

#[component]
pub fn ItemForm() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let store = use_app_store();

    let is_loading = move || store.stock().read().is_loading();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.submit();
    };

    view! {
        <form class="item-form" on:submit=on_submit>
            <div class="form-row">
                <label for="item-name">"Name"</label>
                <input
                    id="item-name"
                    type="text"
                    placeholder="Product name"
                    prop:value=move || store.stock().read().draft.name.clone()
                    on:input=move |ev| {
                        store.stock().write().draft.name = event_target_value(&ev);
                    }
                />
            </div>

            <div class="form-row">
                <label for="item-category">"Category"</label>
                <select
                    id="item-category"
                    prop:value=move || store.stock().read().draft.category.clone()
                    on:change=move |ev| {
                        store.stock().write().draft.category = event_target_value(&ev);
                    }
                >
                    {move || {
                        let (options, selected) = {
                            let stock = store.stock().read();
                            (stock.categories.clone(), stock.draft.category.clone())
                        };
                        options.into_iter().map(|c| {
                            let is_selected = c == selected;
                            view! { <option value=c.clone() selected=is_selected>{c.clone()}</option> }
                        }).collect_view()
                    }}
                </select>
            </div>

            <div class="form-row">
                <label for="item-location">"Location"</label>
                <select
                    id="item-location"
                    prop:value=move || store.stock().read().draft.location.clone()
                    on:change=move |ev| {
                        store.stock().write().draft.location = event_target_value(&ev);
                    }
                >
                    {move || {
                        let (options, selected) = {
                            let stock = store.stock().read();
                            (stock.locations.clone(), stock.draft.location.clone())
                        };
                        options.into_iter().map(|l| {
                            let is_selected = l == selected;
                            view! { <option value=l.clone() selected=is_selected>{l.clone()}</option> }
                        }).collect_view()
                    }}
                </select>
            </div>

            <div class="form-row">
                <label for="item-dlc">"DLC"</label>
                <input
                    id="item-dlc"
                    type="date"
                    prop:value=move || dlc_input_value(store.stock().read().draft.dlc)
                    on:input=move |ev| {
                        store.stock().write().draft.dlc = parse_date_input(&event_target_value(&ev));
                    }
                />
            </div>

            <div class="form-row checkbox-row">
                <label>
                    <input
                        type="checkbox"
                        prop:checked=move || store.stock().read().draft.perishable
                        on:change=move |ev| {
                            store.stock().write().draft.perishable = event_target_checked(&ev);
                        }
                    />
                    " Perishable"
                </label>
            </div>

            <button type="submit" disabled=is_loading>
                {move || if is_loading() { "Saving..." } else { "Add" }}
            </button>
        </form>
    }
}
