//! Transient Feedback
//!
//! One message at a time. A message auto-clears after [`FEEDBACK_TTL`]
//! unless a newer one replaced it first; the ticket makes that check.

use std::time::Duration;

/// How long a notice stays visible
pub const FEEDBACK_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    pub fn text(&self) -> &str {
        match self {
            Notice::Success(msg) | Notice::Error(msg) => msg,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notice::Error(_))
    }
}

/// Identifies the notice an auto-clear timer was started for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackTicket(u64);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Feedback {
    notice: Option<Notice>,
    generation: u64,
}

impl Feedback {
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn success_message(&self) -> Option<&str> {
        match &self.notice {
            Some(Notice::Success(msg)) => Some(msg),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.notice {
            Some(Notice::Error(msg)) => Some(msg),
            _ => None,
        }
    }

    /// Ticket for whatever is currently shown
    pub fn ticket(&self) -> FeedbackTicket {
        FeedbackTicket(self.generation)
    }

    pub fn success(&mut self, msg: impl Into<String>) -> FeedbackTicket {
        self.replace(Some(Notice::Success(msg.into())))
    }

    pub fn error(&mut self, msg: impl Into<String>) -> FeedbackTicket {
        self.replace(Some(Notice::Error(msg.into())))
    }

    pub fn clear(&mut self) {
        self.replace(None);
    }

    /// Clear the notice if it is still the one `ticket` was issued for.
    ///
    /// Returns whether anything was cleared.
    pub fn expire(&mut self, ticket: FeedbackTicket) -> bool {
        if ticket.0 != self.generation || self.notice.is_none() {
            return false;
        }
        self.notice = None;
        true
    }

    fn replace(&mut self, notice: Option<Notice>) -> FeedbackTicket {
        self.generation = self.generation.wrapping_add(1);
        self.notice = notice;
        FeedbackTicket(self.generation)
    }
}
