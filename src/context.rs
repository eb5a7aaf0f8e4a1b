//! Application Context
//!
//! Shared handles provided via Leptos Context API, plus the user actions
//! that go through the API. Every action turns its failure into feedback.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::debug;

use stock_core::{load_references, DisposalOutcome, StockApi, StockError, FEEDBACK_TTL};

use crate::commands::FetchApi;
use crate::store::{AppStateStoreFields, AppStore};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: AppStore,
    api: StoredValue<FetchApi>,
    /// Trigger to reload items from backend; the App effect reads it
    set_reload_trigger: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(store: AppStore, api: FetchApi, set_reload_trigger: WriteSignal<u32>) -> Self {
        Self {
            store,
            api: StoredValue::new(api),
            set_reload_trigger,
        }
    }

    fn api(&self) -> FetchApi {
        self.api.get_value()
    }

    /// Trigger a reload of items
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Fetch the item list and replace the cached copy
    pub fn load_items(&self) {
        let ctx = *self;
        let api = self.api();
        spawn_local(async move {
            match api.list_items().await {
                Ok(items) => {
                    debug!("[INVENTORY] Loaded {} items", items.len());
                    ctx.store.stock().write().replace_items(items);
                }
                Err(err) => {
                    ctx.store.stock().write().load_failed(&err);
                    ctx.flash();
                }
            }
        });
    }

    /// Fetch both vocabularies; seeds the form defaults on success
    pub fn load_references(&self) {
        let ctx = *self;
        let api = self.api();
        spawn_local(async move {
            match load_references(&api).await {
                Ok(refs) => ctx.store.stock().write().apply_references(refs),
                Err(err) => {
                    ctx.store.stock().write().load_failed(&err);
                    ctx.flash();
                }
            }
        });
    }

    /// Submit the draft form
    pub fn submit(&self) {
        let started = self.store.stock().write().begin_submit();
        let payload = match started {
            Ok(payload) => payload,
            // The loading flag already disables the button
            Err(StockError::Busy) => return,
            Err(_) => {
                self.flash();
                return;
            }
        };

        let ctx = *self;
        let api = self.api();
        spawn_local(async move {
            let result = api.create_item(&payload).await;
            let created = result.is_ok();
            ctx.store.stock().write().finish_submit(&result);
            ctx.flash();
            if created {
                ctx.reload();
            }
        });
    }

    /// Dispose of one item; its row disappears as soon as the call succeeds
    pub fn dispose(&self, id: u32, outcome: DisposalOutcome) {
        if !self.store.stock().write().begin_dispose(id) {
            debug!("[INVENTORY] Disposal of #{} already in flight", id);
            return;
        }

        let ctx = *self;
        let api = self.api();
        spawn_local(async move {
            let result = api.dispose_item(id, outcome).await;
            ctx.store.stock().write().finish_dispose(id, outcome, &result);
            ctx.flash();
        });
    }

    /// Clear the current notice after the TTL unless something replaced it
    fn flash(&self) {
        let store = self.store;
        let ticket = store.stock().read_untracked().feedback().ticket();
        spawn_local(async move {
            TimeoutFuture::new(FEEDBACK_TTL.as_millis() as u32).await;
            store.stock().write().feedback_mut().expire(ticket);
        });
    }
}
