// Unified event listing
// Merges the static catalog with the custom countdown store into one
// sequence, then filters, sorts and windows it for presentation consumers.

use chrono::{DateTime, Local};

use crate::models::custom_event::CustomCountdownEvent;
use crate::models::event::{Category, EventType};
use crate::services::countdown::days_remaining;
use crate::utils::collate;

/// Provenance tag attached to custom events in the unified view.
pub const CUSTOM_CATEGORY_LABEL: &str = "Kişisel";
pub const CUSTOM_CATEGORY_SLUG: &str = "custom";

/// Events further in the past than this many days disappear from every
/// listing; yesterday's events stay visible. The exact cutoff is a product
/// decision, not a derived invariant.
const HIDE_PAST_BEYOND_DAYS: i64 = 1;

/// Read-only merge of a catalog event or custom countdown, tagged with its
/// provenance. Downstream code discriminates on `is_custom`, never by
/// probing optional fields.
#[derive(Debug, Clone, PartialEq)]
pub struct UnifiedEvent {
    pub id: String,
    pub title: String,
    pub target_date: DateTime<Local>,
    pub color: Option<String>,
    pub priority: i32,
    pub kind: EventType,
    pub category_label: String,
    pub category_slug: String,
    pub is_custom: bool,
}

/// Concatenate both sources into one sequence without mutating either.
/// Catalog events carry their group's title and slug; custom events get the
/// fixed personal tag. Custom ids are prefix-namespaced, so the merged id
/// set stays unique.
pub fn unify(catalog: &[Category], custom: &[CustomCountdownEvent]) -> Vec<UnifiedEvent> {
    let mut events: Vec<UnifiedEvent> = catalog
        .iter()
        .flat_map(|category| {
            category.events.iter().map(|event| UnifiedEvent {
                id: event.id.clone(),
                title: event.title.clone(),
                target_date: event.target_date,
                color: event.color.clone(),
                priority: event.priority,
                kind: event.kind,
                category_label: category.title.clone(),
                category_slug: category.slug.clone(),
                is_custom: false,
            })
        })
        .collect();

    events.extend(custom.iter().map(|event| UnifiedEvent {
        id: event.id.clone(),
        title: event.title.clone(),
        target_date: event.target_date,
        color: Some(event.color.clone()),
        priority: event.priority,
        kind: event.kind,
        category_label: CUSTOM_CATEGORY_LABEL.to_string(),
        category_slug: CUSTOM_CATEGORY_SLUG.to_string(),
        is_custom: true,
    }));

    events
}

/// Preset filters layered on top of the free-text/category/type criteria.
/// Presets are mutually exclusive with each other but compose with the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuickFilter {
    #[default]
    All,
    /// Exams within the next 30 days (today included).
    UpcomingExams,
    /// Application window openings and deadlines.
    Applications,
    /// Result announcements.
    Results,
}

impl QuickFilter {
    fn matches(&self, event: &UnifiedEvent, now: DateTime<Local>) -> bool {
        match self {
            QuickFilter::All => true,
            QuickFilter::UpcomingExams => {
                let days = days_remaining(event.target_date, now);
                event.kind == EventType::Exam && (0..=30).contains(&days)
            }
            QuickFilter::Applications => matches!(
                event.kind,
                EventType::ApplicationStart | EventType::ApplicationEnd
            ),
            QuickFilter::Results => event.kind == EventType::Result,
        }
    }
}

/// Combinable filter criteria; all present criteria must match.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    /// Case-insensitive substring match on the title.
    pub query: Option<String>,
    /// Category slug equality.
    pub category: Option<String>,
    /// Event kind equality.
    pub kind: Option<EventType>,
    pub quick: QuickFilter,
}

impl EventFilter {
    pub fn apply(&self, events: &[UnifiedEvent], now: DateTime<Local>) -> Vec<UnifiedEvent> {
        events
            .iter()
            .filter(|event| self.matches(event, now))
            .cloned()
            .collect()
    }

    fn matches(&self, event: &UnifiedEvent, now: DateTime<Local>) -> bool {
        if days_remaining(event.target_date, now) < -HIDE_PAST_BEYOND_DAYS {
            return false;
        }

        if let Some(query) = self.query.as_deref() {
            let query = query.trim().to_lowercase();
            if !query.is_empty() && !event.title.to_lowercase().contains(&query) {
                return false;
            }
        }

        if let Some(category) = self.category.as_deref() {
            if event.category_slug != category {
                return false;
            }
        }

        if let Some(kind) = self.kind {
            if event.kind != kind {
                return false;
            }
        }

        self.quick.matches(event, now)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    #[default]
    DateAsc,
    DateDesc,
    NameAsc,
    NameDesc,
}

/// Order events in place. Name sorts collate per the application locale
/// rather than by code point.
pub fn sort(events: &mut [UnifiedEvent], mode: SortMode) {
    match mode {
        SortMode::DateAsc => events.sort_by_key(|event| event.target_date),
        SortMode::DateDesc => {
            events.sort_by(|a, b| b.target_date.cmp(&a.target_date));
        }
        SortMode::NameAsc => events.sort_by(|a, b| collate::compare_tr(&a.title, &b.title)),
        SortMode::NameDesc => events.sort_by(|a, b| collate::compare_tr(&b.title, &a.title)),
    }
}

/// Windowing over an already filtered and sorted list: show the first N
/// entries, grow N on demand. Re-slices the in-memory sequence, never
/// refetches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    visible: usize,
    step: usize,
}

impl Window {
    pub const DEFAULT_STEP: usize = 12;

    pub fn new(step: usize) -> Self {
        Self {
            visible: step,
            step,
        }
    }

    pub fn page<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[..self.visible.min(items.len())]
    }

    pub fn has_more<T>(&self, items: &[T]) -> bool {
        items.len() > self.visible
    }

    pub fn show_more(&mut self) {
        self.visible = self.visible.saturating_add(self.step);
    }

    pub fn reset(&mut self) {
        self.visible = self.step;
    }
}

impl Default for Window {
    fn default() -> Self {
        Self::new(Self::DEFAULT_STEP)
    }
}

/// How many suggestions an empty query yields.
pub const SUGGESTION_DEFAULT_COUNT: usize = 4;
/// How many matches a non-empty query yields at most.
pub const SUGGESTION_MATCH_COUNT: usize = 5;

/// Search-box suggestions: with no query the first few events, otherwise
/// the first few title matches.
pub fn suggestions<'a>(events: &'a [UnifiedEvent], query: &str) -> Vec<&'a UnifiedEvent> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return events.iter().take(SUGGESTION_DEFAULT_COUNT).collect();
    }

    events
        .iter()
        .filter(|event| event.title.to_lowercase().contains(&query))
        .take(SUGGESTION_MATCH_COUNT)
        .collect()
}

/// Featured picks: priority-1 events, capped.
pub fn priority_picks<'a>(events: &'a [UnifiedEvent], limit: usize) -> Vec<&'a UnifiedEvent> {
    events
        .iter()
        .filter(|event| event.priority == 1)
        .take(limit)
        .collect()
}
