//! Stock Models
//!
//! Data structures matching the remote API, plus the client-only draft.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{StockError, StockResult};
use crate::state::MSG_REQUIRED_FIELDS;

/// Item data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub perishable: bool,
    pub dlc: NaiveDate,
    pub location: String,
    /// Server timestamp, never interpreted by the client
    #[serde(default)]
    pub created_at: String,
}

/// Form contents before submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftItem {
    pub name: String,
    pub category: String,
    pub perishable: bool,
    pub dlc: Option<NaiveDate>,
    pub location: String,
}

impl Default for DraftItem {
    fn default() -> Self {
        Self {
            name: String::new(),
            category: String::new(),
            perishable: true,
            dlc: None,
            location: String::new(),
        }
    }
}

impl DraftItem {
    /// Check required fields and build the POST payload.
    ///
    /// No network call may happen before this succeeds.
    pub fn validate(&self) -> StockResult<NewItem> {
        let name = self.name.trim();
        match self.dlc {
            Some(dlc) if !name.is_empty() => Ok(NewItem {
                name: name.to_string(),
                category: self.category.clone(),
                perishable: self.perishable,
                dlc,
                location: self.location.clone(),
            }),
            _ => Err(StockError::Validation(MSG_REQUIRED_FIELDS.to_string())),
        }
    }

    /// Fill empty category/location from the first vocabulary entry.
    ///
    /// Never overwrites a selection the user already made.
    pub fn seed_defaults(&mut self, refs: &References) {
        if self.category.is_empty() {
            if let Some(first) = refs.categories.first() {
                self.category = first.clone();
            }
        }
        if self.location.is_empty() {
            if let Some(first) = refs.locations.first() {
                self.location = first.clone();
            }
        }
    }

    /// Clear the per-item fields, keeping the ones likely reused for the next entry
    pub fn reset_after_submit(&mut self) {
        self.name.clear();
        self.dlc = None;
    }
}

/// Validated creation payload (POST /items body)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub category: String,
    pub perishable: bool,
    pub dlc: NaiveDate,
    pub location: String,
}

/// Allowed category and location values, in server order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct References {
    pub categories: Vec<String>,
    pub locations: Vec<String>,
}

/// Why an item left the stock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DisposalOutcome {
    #[serde(rename = "consomme")]
    Consumed,
    #[serde(rename = "perdu")]
    Lost,
}

impl DisposalOutcome {
    /// Wire value
    pub fn as_str(&self) -> &'static str {
        match self {
            DisposalOutcome::Consumed => "consomme",
            DisposalOutcome::Lost => "perdu",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DisposalOutcome::Consumed => "consumed",
            DisposalOutcome::Lost => "lost",
        }
    }

    pub fn success_message(&self) -> String {
        format!("Item marked as {}.", self.label())
    }

    /// Accepts both the English labels and the wire values
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "consumed" | "consomme" => Some(DisposalOutcome::Consumed),
            "lost" | "perdu" => Some(DisposalOutcome::Lost),
            _ => None,
        }
    }
}

/// POST /items/{id}/dispose body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisposalRequest {
    pub outcome: DisposalOutcome,
}
