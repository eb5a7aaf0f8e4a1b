//! Urgency Classification
//!
//! Maps an expiry date and the current moment to one of four tiers.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Urgency tiers, most urgent first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Urgency {
    /// Past due
    Expired,
    /// 0 to 3 days left
    Critical,
    /// 4 to 7 days left
    Warning,
    /// More than a week left
    Ok,
}

impl Urgency {
    pub fn from_days(days: i64) -> Self {
        match days {
            d if d < 0 => Urgency::Expired,
            0..=3 => Urgency::Critical,
            4..=7 => Urgency::Warning,
            _ => Urgency::Ok,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Expired => "expired",
            Urgency::Critical => "critical",
            Urgency::Warning => "warning",
            Urgency::Ok => "ok",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Urgency::Expired => "urgency-expired",
            Urgency::Critical => "urgency-critical",
            Urgency::Warning => "urgency-warning",
            Urgency::Ok => "urgency-ok",
        }
    }
}

/// Whole days from `now` until the start of `dlc`, truncated toward zero
pub fn days_until(dlc: NaiveDate, now: NaiveDateTime) -> i64 {
    (dlc.and_time(NaiveTime::MIN) - now).num_days()
}

/// Day count and tier for one item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expiry {
    pub days: i64,
    pub urgency: Urgency,
}

impl Expiry {
    pub fn compute(dlc: NaiveDate, now: NaiveDateTime) -> Self {
        let days = days_until(dlc, now);
        Self {
            days,
            urgency: Urgency::from_days(days),
        }
    }

    /// "Expired", or the signed day count
    pub fn label(&self) -> String {
        match self.urgency {
            Urgency::Expired => "Expired".to_string(),
            _ => format!("{} days", self.days),
        }
    }
}
