//! UI Components
//!
//! Reusable Leptos components.

mod dispose_buttons;
mod expiry_summary;
mod feedback_banner;
mod inventory_table;
mod item_form;
mod urgency_badge;

pub use dispose_buttons::DisposeButtons;
pub use expiry_summary::ExpirySummary;
pub use feedback_banner::FeedbackBanner;
pub use inventory_table::InventoryTable;
pub use item_form::ItemForm;
pub use urgency_badge::UrgencyBadge;
