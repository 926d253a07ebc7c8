// Event module
// Catalog event model and the closed set of event kinds

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Kind tag carried by every tracked event, curated or user-created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Exam,
    ApplicationStart,
    ApplicationEnd,
    Result,
    Holiday,
}

impl EventType {
    /// Display label in the application's fixed locale.
    pub fn label(&self) -> &'static str {
        match self {
            EventType::Exam => "Sınav",
            EventType::ApplicationStart => "Başvuru Başlangıç",
            EventType::ApplicationEnd => "Son Başvuru",
            EventType::Result => "Sonuç Açıklama",
            EventType::Holiday => "Tatil / Özel Gün",
        }
    }

    /// Accent color used when an event carries no explicit color.
    pub fn default_color(&self) -> &'static str {
        match self {
            EventType::Exam => "#3b82f6",
            EventType::ApplicationStart => "#10b981",
            EventType::ApplicationEnd => "#f59e0b",
            EventType::Result => "#a855f7",
            EventType::Holiday => "#ec4899",
        }
    }
}

/// Curated event from the static catalog. Immutable once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEvent {
    pub id: String,
    pub title: String,
    pub target_date: DateTime<Local>,
    pub color: Option<String>,
    pub priority: i32,
    pub kind: EventType,
}

impl CatalogEvent {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        target_date: DateTime<Local>,
        kind: EventType,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            target_date,
            color: None,
            priority: 2,
            kind,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// The color to render this event with, falling back to the kind accent.
    pub fn effective_color(&self) -> &str {
        self.color.as_deref().unwrap_or_else(|| self.kind.default_color())
    }
}

/// Read-only catalog group: a named, slugged set of curated events.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub events: Vec<CatalogEvent>,
}

impl Category {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        slug: impl Into<String>,
        events: Vec<CatalogEvent>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            slug: slug.into(),
            events,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::date::local_datetime;

    #[test]
    fn test_event_type_serializes_snake_case() {
        let json = serde_json::to_string(&EventType::ApplicationStart).unwrap();
        assert_eq!(json, "\"application_start\"");

        let parsed: EventType = serde_json::from_str("\"holiday\"").unwrap();
        assert_eq!(parsed, EventType::Holiday);
    }

    #[test]
    fn test_event_type_rejects_unknown_variant() {
        let result = serde_json::from_str::<EventType>("\"deadline\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_catalog_event_defaults() {
        let event = CatalogEvent::new(
            "yks-2026",
            "YKS 2026",
            local_datetime(2026, 6, 20, 10, 0),
            EventType::Exam,
        );

        assert_eq!(event.color, None);
        assert_eq!(event.priority, 2);
        assert_eq!(event.effective_color(), "#3b82f6");
        assert_eq!(event.kind.label(), "Sınav");
    }

    #[test]
    fn test_catalog_event_explicit_color_wins() {
        let event = CatalogEvent::new(
            "kurban-2026",
            "Kurban Bayramı",
            local_datetime(2026, 5, 27, 0, 0),
            EventType::Holiday,
        )
        .with_color("#ef4444")
        .with_priority(1);

        assert_eq!(event.effective_color(), "#ef4444");
        assert_eq!(event.priority, 1);
    }
}
