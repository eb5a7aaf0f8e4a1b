//! Inventory Table Component
//!
//! One row per item in stock, in the order the backend returned them.

use leptos::prelude::*;
use stock_core::InventoryRow;

use super::{DisposeButtons, UrgencyBadge};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn InventoryTable() -> impl IntoView {
    let store = use_app_store();

    // Rows depend on both the items and the clock
    let rows = Memo::new(move |_| {
        let now = store.now().get();
        store.stock().read().rows(now)
    });

    view! {
        <section class="inventory">
            <h2>"Inventory"</h2>
            <Show
                when=move || !rows.get().is_empty()
                fallback=|| view! { <p class="empty-state">"No items."</p> }
            >
                <table class="inventory-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Category"</th>
                            <th>"Location"</th>
                            <th>"DLC"</th>
                            <th>"Status"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || rows.get()
                            key=|row| (row.item.id, row.expiry.days)
                            children=move |row: InventoryRow| {
                                let id = row.item.id;
                                view! {
                                    <tr class="inventory-row">
                                        <td class="item-name">
                                            {row.item.name.clone()}
                                            {(!row.item.perishable).then(|| view! {
                                                <span class="non-perishable">" (non-perishable)"</span>
                                            })}
                                        </td>
                                        <td>{row.item.category.clone()}</td>
                                        <td>{row.item.location.clone()}</td>
                                        <td>{row.item.dlc.to_string()}</td>
                                        <td><UrgencyBadge expiry=row.expiry /></td>
                                        <td><DisposeButtons id=id /></td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>
        </section>
    }
}
