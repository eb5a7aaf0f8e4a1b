//! Application State
//!
//! The single state object behind both clients: vocabularies, the cached
//! item list, the draft form, the submit phase and the feedback notice.
//! Async work lives elsewhere; these transitions are synchronous so the
//! UI can apply them inside a store update.

use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveDateTime};
use tracing::{debug, warn};

use crate::error::{StockError, StockResult};
use crate::feedback::Feedback;
use crate::inventory::{expiring_within, inventory_rows, InventoryRow};
use crate::models::{DisposalOutcome, DraftItem, Item, NewItem, References};

pub const MSG_ITEM_ADDED: &str = "Item added.";
pub const MSG_REQUIRED_FIELDS: &str = "Name and DLC are required.";

/// Where the form is in its submit lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StockState {
    pub categories: Vec<String>,
    pub locations: Vec<String>,
    /// Cached copy of the server list
    pub items: Vec<Item>,
    pub draft: DraftItem,
    phase: SubmitPhase,
    feedback: Feedback,
    /// Ids with a disposal request in flight
    pending_disposals: BTreeSet<u32>,
}

impl StockState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The loading flag: true while a creation request is in flight
    pub fn is_loading(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    pub fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    pub fn feedback_mut(&mut self) -> &mut Feedback {
        &mut self.feedback
    }

    pub fn is_disposing(&self, id: u32) -> bool {
        self.pending_disposals.contains(&id)
    }

    // ========================
    // Loading
    // ========================

    /// Install the vocabularies and seed empty form selections
    pub fn apply_references(&mut self, refs: References) {
        self.draft.seed_defaults(&refs);
        self.categories = refs.categories;
        self.locations = refs.locations;
    }

    /// Full replace, never a merge
    pub fn replace_items(&mut self, items: Vec<Item>) {
        debug!(count = items.len(), "item list replaced");
        self.items = items;
    }

    /// Surface a failed load; the affected state stays as it was
    pub fn load_failed(&mut self, err: &StockError) {
        warn!(error = %err, "load failed");
        self.feedback.error(err.to_string());
    }

    // ========================
    // Submit
    // ========================

    /// Enter `Submitting` and hand back the payload to send.
    ///
    /// A validation failure sets the error notice and stays idle.
    pub fn begin_submit(&mut self) -> StockResult<NewItem> {
        if self.is_loading() {
            return Err(StockError::Busy);
        }
        self.feedback.clear();
        match self.draft.validate() {
            Ok(payload) => {
                self.phase = SubmitPhase::Submitting;
                Ok(payload)
            }
            Err(err) => {
                self.feedback.error(err.to_string());
                Err(err)
            }
        }
    }

    /// Leave `Submitting`. The caller refreshes the list on success.
    pub fn finish_submit(&mut self, result: &StockResult<Item>) {
        self.phase = SubmitPhase::Idle;
        match result {
            Ok(created) => {
                debug!(id = created.id, "item created");
                self.feedback.success(MSG_ITEM_ADDED);
                self.draft.reset_after_submit();
            }
            Err(err) => {
                warn!(error = %err, "item creation failed");
                self.feedback.error(err.to_string());
            }
        }
    }

    // ========================
    // Disposal
    // ========================

    /// Mark `id` as in flight. Returns false if it already is.
    pub fn begin_dispose(&mut self, id: u32) -> bool {
        self.pending_disposals.insert(id)
    }

    /// Apply a disposal result. Success removes the item without a refresh.
    pub fn finish_dispose(&mut self, id: u32, outcome: DisposalOutcome, result: &StockResult<()>) {
        self.pending_disposals.remove(&id);
        match result {
            Ok(()) => {
                self.items.retain(|item| item.id != id);
                self.feedback.success(outcome.success_message());
            }
            Err(err) => {
                warn!(id, error = %err, "disposal failed");
                self.feedback.error(err.to_string());
            }
        }
    }

    // ========================
    // Views
    // ========================

    pub fn rows(&self, now: NaiveDateTime) -> Vec<InventoryRow> {
        inventory_rows(&self.items, now)
    }

    pub fn expiring_within(&self, today: NaiveDate, days: u32) -> Vec<Item> {
        expiring_within(&self.items, today, days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::make_item;

    fn filled_state() -> StockState {
        let mut state = StockState::new();
        state.apply_references(References {
            categories: vec!["Dairy".to_string(), "Produce".to_string()],
            locations: vec!["Fridge".to_string(), "Pantry".to_string()],
        });
        state.draft.name = "Milk".to_string();
        state.draft.dlc = NaiveDate::from_ymd_opt(2024, 1, 1);
        state
    }

    #[test]
    fn test_apply_references_seeds_once() {
        let mut state = filled_state();
        assert_eq!(state.draft.category, "Dairy");
        assert_eq!(state.draft.location, "Fridge");

        state.draft.category = "Produce".to_string();
        state.apply_references(References {
            categories: vec!["Bakery".to_string()],
            locations: vec!["Cellar".to_string()],
        });
        assert_eq!(state.draft.category, "Produce");
        assert_eq!(state.draft.location, "Fridge");
        assert_eq!(state.categories, vec!["Bakery"]);
    }

    #[test]
    fn test_begin_submit_validation_failure() {
        let mut state = filled_state();
        state.draft.name = "  ".to_string();

        let err = state.begin_submit().unwrap_err();
        assert!(err.is_validation());
        assert!(!state.is_loading());
        assert_eq!(state.feedback().error_message(), Some(MSG_REQUIRED_FIELDS));
    }

    #[test]
    fn test_submit_success_resets_name_and_dlc_only() {
        let mut state = filled_state();
        state.draft.perishable = false;

        let payload = state.begin_submit().expect("valid draft");
        assert_eq!(payload.name, "Milk");
        assert!(state.is_loading());
        assert_eq!(state.phase, SubmitPhase::Submitting);

        let created = make_item(1, "Milk", "2024-01-01");
        state.finish_submit(&Ok(created));
        assert!(!state.is_loading());
        assert!(state.draft.name.is_empty());
        assert_eq!(state.draft.dlc, None);
        assert_eq!(state.draft.category, "Dairy");
        assert_eq!(state.draft.location, "Fridge");
        assert!(!state.draft.perishable);
        assert_eq!(state.feedback().success_message(), Some(MSG_ITEM_ADDED));
        // Refresh is the caller's job: nothing appended locally
        assert!(state.items.is_empty());
    }

    #[test]
    fn test_submit_failure_keeps_draft() {
        let mut state = filled_state();
        state.begin_submit().unwrap();
        state.finish_submit(&Err(StockError::Remote("db locked".to_string())));

        assert!(!state.is_loading());
        assert_eq!(state.draft.name, "Milk");
        assert!(state.draft.dlc.is_some());
        assert_eq!(state.feedback().error_message(), Some("db locked"));
    }

    #[test]
    fn test_resubmit_while_loading_is_busy() {
        let mut state = filled_state();
        state.begin_submit().unwrap();
        state.feedback_mut().error("still visible");

        assert_eq!(state.begin_submit(), Err(StockError::Busy));
        assert_eq!(state.feedback().error_message(), Some("still visible"));
    }

    #[test]
    fn test_begin_submit_clears_previous_feedback() {
        let mut state = filled_state();
        state.feedback_mut().error("old error");
        state.begin_submit().unwrap();
        assert!(state.feedback().notice().is_none());
    }

    #[test]
    fn test_dispose_success_removes_item() {
        let mut state = StockState::new();
        state.replace_items(vec![
            make_item(7, "Milk", "2024-01-01"),
            make_item(8, "Eggs", "2024-01-02"),
        ]);

        assert!(state.begin_dispose(7));
        assert!(state.is_disposing(7));
        state.finish_dispose(7, DisposalOutcome::Lost, &Ok(()));

        assert!(!state.is_disposing(7));
        assert_eq!(state.items.len(), 1);
        assert!(state.items.iter().all(|i| i.id != 7));
        assert_eq!(state.feedback().success_message(), Some("Item marked as lost."));
    }

    #[test]
    fn test_dispose_failure_keeps_item() {
        let mut state = StockState::new();
        state.replace_items(vec![make_item(7, "Milk", "2024-01-01")]);

        assert!(state.begin_dispose(7));
        state.finish_dispose(
            7,
            DisposalOutcome::Consumed,
            &Err(StockError::Remote("Item introuvable".to_string())),
        );

        assert_eq!(state.items.len(), 1);
        assert_eq!(state.feedback().error_message(), Some("Item introuvable"));
        assert!(!state.is_disposing(7));
    }

    #[test]
    fn test_duplicate_dispose_refused_while_in_flight() {
        let mut state = StockState::new();
        state.replace_items(vec![
            make_item(7, "Milk", "2024-01-01"),
            make_item(8, "Eggs", "2024-01-02"),
        ]);

        assert!(state.begin_dispose(7));
        assert!(!state.begin_dispose(7));
        // Other rows stay independent
        assert!(state.begin_dispose(8));
    }

    #[test]
    fn test_load_failed_leaves_state_empty() {
        let mut state = StockState::new();
        state.load_failed(&StockError::Remote("offline".to_string()));
        assert!(state.items.is_empty());
        assert!(state.categories.is_empty());
        assert_eq!(state.feedback().error_message(), Some("offline"));
    }
}
