//! DLC Stock Core
//!
//! Layered like the clients that use it:
//! - models: wire entities and the draft form
//! - urgency: expiry classification
//! - state: the single application state object and its transitions
//! - api / references / session: remote calls and their orchestration

mod config;
mod error;
mod feedback;
mod inventory;
mod models;
mod references;
mod session;
mod state;
mod urgency;
pub mod api;

#[cfg(test)]
pub(crate) mod testing;

pub use api::StockApi;
pub use config::{ApiConfig, DEFAULT_API_BASE};
pub use error::{describe_unknown, StockError, StockResult, UNKNOWN_ERROR};
pub use feedback::{Feedback, FeedbackTicket, Notice, FEEDBACK_TTL};
pub use inventory::{expiring_within, inventory_rows, sort_for_display, InventoryRow};
pub use models::{DisposalOutcome, DisposalRequest, DraftItem, Item, NewItem, References};
pub use references::load_references;
pub use session::Session;
pub use state::{StockState, MSG_ITEM_ADDED, MSG_REQUIRED_FIELDS};
pub use urgency::{days_until, Expiry, Urgency};
