//! Stock Session
//!
//! Owns the application state and the API handle, and runs each user
//! action end to end. Failures never escape: they land in the feedback.

use futures::join;
use tracing::{debug, info};

use crate::api::StockApi;
use crate::error::StockResult;
use crate::models::{DisposalOutcome, Item};
use crate::references::load_references;
use crate::state::StockState;

pub struct Session<A> {
    api: A,
    state: StockState,
}

impl<A: StockApi> Session<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: StockState::new(),
        }
    }

    pub fn state(&self) -> &StockState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut StockState {
        &mut self.state
    }

    /// Initial load: vocabularies and items, concurrently and independently
    pub async fn start(&mut self) {
        let (refs, items) = join!(load_references(&self.api), self.api.list_items());
        match refs {
            Ok(refs) => self.state.apply_references(refs),
            Err(err) => self.state.load_failed(&err),
        }
        match items {
            Ok(items) => self.state.replace_items(items),
            Err(err) => self.state.load_failed(&err),
        }
        info!(items = self.state.items.len(), "session started");
    }

    /// Re-fetch the full item list
    pub async fn refresh(&mut self) -> StockResult<()> {
        match self.api.list_items().await {
            Ok(items) => {
                self.state.replace_items(items);
                Ok(())
            }
            Err(err) => {
                self.state.load_failed(&err);
                Err(err)
            }
        }
    }

    /// Validate and create the drafted item, then refresh the list
    pub async fn submit(&mut self) -> StockResult<Item> {
        let payload = self.state.begin_submit()?;
        let result = self.api.create_item(&payload).await;
        self.state.finish_submit(&result);
        let created = result?;
        // The created item is already on the server; a failed refresh only
        // leaves the cached list stale.
        let _ = self.refresh().await;
        Ok(created)
    }

    /// Dispose of `id`. Returns Ok(false) when a request for it is already in flight.
    pub async fn dispose(&mut self, id: u32, outcome: DisposalOutcome) -> StockResult<bool> {
        if !self.state.begin_dispose(id) {
            debug!(id, "disposal already in flight");
            return Ok(false);
        }
        let result = self.api.dispose_item(id, outcome).await;
        self.state.finish_dispose(id, outcome, &result);
        result.map(|()| true)
    }
}
