// Custom countdown event model
// User-created events owned by the custom countdown store, plus the
// validated draft and partial-update payloads that feed it

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use super::event::EventType;

/// User-created countdown event. The wire shape matches the persisted
/// collection layout: camelCase field names, `type` for the kind tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomCountdownEvent {
    pub id: String,
    pub title: String,
    pub target_date: DateTime<Local>,
    pub color: String,
    pub priority: i32,
    #[serde(rename = "type")]
    pub kind: EventType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub is_custom: bool,
    pub created_at: DateTime<Local>,
}

/// Draft for a new custom countdown. Validation lives here so the store can
/// treat a well-formed draft as a precondition.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCountdown {
    pub title: String,
    pub target_date: DateTime<Local>,
    pub color: String,
    pub priority: i32,
    pub kind: EventType,
    pub notes: Option<String>,
}

impl NewCountdown {
    /// Create a draft with required fields.
    ///
    /// # Arguments
    /// * `title` - Display title (required, non-empty after trimming)
    /// * `target_date` - The instant counted down to
    ///
    /// # Returns
    /// Returns `Result<NewCountdown, String>` with validation
    pub fn new(title: impl Into<String>, target_date: DateTime<Local>) -> Result<Self, String> {
        let title = title.into();
        let title = title.trim().to_string();

        if title.is_empty() {
            return Err("Countdown title cannot be empty".to_string());
        }

        let kind = EventType::Exam;
        Ok(Self {
            title,
            target_date,
            color: kind.default_color().to_string(),
            priority: 1,
            kind,
            notes: None,
        })
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn kind(mut self, kind: EventType) -> Self {
        self.kind = kind;
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        let notes = notes.into();
        self.notes = if notes.trim().is_empty() {
            None
        } else {
            Some(notes)
        };
        self
    }
}

/// Partial update for an existing custom countdown. Only mutable fields can
/// be expressed here; `id`, `is_custom` and `created_at` stay fixed for the
/// lifetime of a record no matter what a caller sends.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CountdownUpdate {
    pub title: Option<String>,
    pub target_date: Option<DateTime<Local>>,
    pub color: Option<String>,
    pub priority: Option<i32>,
    pub kind: Option<EventType>,
    /// Outer `None` leaves notes untouched; `Some(None)` clears them.
    pub notes: Option<Option<String>>,
}

impl CountdownUpdate {
    /// Shallow-merge the provided fields over `event`.
    pub fn apply_to(&self, event: &mut CustomCountdownEvent) {
        if let Some(title) = &self.title {
            event.title = title.clone();
        }
        if let Some(target_date) = self.target_date {
            event.target_date = target_date;
        }
        if let Some(color) = &self.color {
            event.color = color.clone();
        }
        if let Some(priority) = self.priority {
            event.priority = priority;
        }
        if let Some(kind) = self.kind {
            event.kind = kind;
        }
        if let Some(notes) = &self.notes {
            event.notes = notes.clone();
        }
    }
}
