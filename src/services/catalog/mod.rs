// Static event catalog
// Curated category groups for the 2026 season. Loaded once, read-only; the
// rest of the crate treats this data as an immutable external input.

use chrono::{DateTime, Local};

use crate::models::event::{CatalogEvent, Category, EventType};
use crate::utils::date::local_datetime;

/// The curated category groups: exams, holidays and special dates.
pub fn default_catalog() -> Vec<Category> {
    vec![
        Category::new("1", "Sınavlar", "exams", exam_events()),
        Category::new("2", "Resmi Tatiller", "holidays", holiday_events()),
        Category::new("3", "Özel Günler", "special", special_events()),
    ]
}

/// The event spotlighted on the landing display.
pub fn featured_event() -> CatalogEvent {
    CatalogEvent::new(
        "yks-2026",
        "YKS 2026",
        local_datetime(2026, 6, 20, 10, 0),
        EventType::Exam,
    )
    .with_color("#3b82f6")
    .with_priority(1)
}

/// An event resolved from the catalog together with its group provenance.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogHit<'a> {
    pub event: &'a CatalogEvent,
    pub category_title: &'a str,
    pub category_slug: &'a str,
}

/// Look an event up by id across all category groups.
pub fn find_event<'a>(catalog: &'a [Category], id: &str) -> Option<CatalogHit<'a>> {
    for category in catalog {
        if let Some(event) = category.events.iter().find(|event| event.id == id) {
            return Some(CatalogHit {
                event,
                category_title: &category.title,
                category_slug: &category.slug,
            });
        }
    }
    None
}

fn exam_events() -> Vec<CatalogEvent> {
    vec![
        featured_event(),
        catalog_event(
            "yks-2026-basvuru",
            "YKS 2026 Başvuru Başlangıcı",
            local_datetime(2026, 2, 4, 10, 0),
            EventType::ApplicationStart,
            2,
        ),
        catalog_event(
            "yks-2026-son-basvuru",
            "YKS 2026 Son Başvuru",
            local_datetime(2026, 2, 18, 23, 59),
            EventType::ApplicationEnd,
            2,
        ),
        catalog_event(
            "yks-2026-sonuc",
            "YKS 2026 Sonuç Açıklama",
            local_datetime(2026, 7, 17, 14, 0),
            EventType::Result,
            2,
        ),
        CatalogEvent::new(
            "kpss-2026",
            "KPSS 2026 Lisans",
            local_datetime(2026, 7, 12, 10, 15),
            EventType::Exam,
        )
        .with_color("#3b82f6")
        .with_priority(1),
        catalog_event(
            "ales-2026-1",
            "ALES/1 2026",
            local_datetime(2026, 5, 3, 10, 0),
            EventType::Exam,
            2,
        ),
        catalog_event(
            "dgs-2026",
            "DGS 2026",
            local_datetime(2026, 7, 5, 10, 15),
            EventType::Exam,
            2,
        ),
        catalog_event(
            "msu-2026",
            "MSÜ 2026",
            local_datetime(2026, 3, 29, 10, 0),
            EventType::Exam,
            2,
        ),
        catalog_event(
            "yds-2026-1",
            "YDS/1 2026",
            local_datetime(2026, 4, 12, 10, 0),
            EventType::Exam,
            3,
        ),
    ]
}

fn holiday_events() -> Vec<CatalogEvent> {
    vec![
        CatalogEvent::new(
            "ramazan-bayrami-2026",
            "Ramazan Bayramı",
            local_datetime(2026, 3, 20, 0, 0),
            EventType::Holiday,
        )
        .with_color("#ec4899")
        .with_priority(1),
        CatalogEvent::new(
            "kurban-bayrami-2026",
            "Kurban Bayramı",
            local_datetime(2026, 5, 27, 0, 0),
            EventType::Holiday,
        )
        .with_color("#ec4899")
        .with_priority(1),
        catalog_event(
            "23-nisan-2026",
            "23 Nisan Ulusal Egemenlik ve Çocuk Bayramı",
            local_datetime(2026, 4, 23, 0, 0),
            EventType::Holiday,
            2,
        ),
        catalog_event(
            "19-mayis-2026",
            "19 Mayıs Atatürk'ü Anma, Gençlik ve Spor Bayramı",
            local_datetime(2026, 5, 19, 0, 0),
            EventType::Holiday,
            2,
        ),
        catalog_event(
            "30-agustos-2026",
            "30 Ağustos Zafer Bayramı",
            local_datetime(2026, 8, 30, 0, 0),
            EventType::Holiday,
            2,
        ),
        catalog_event(
            "29-ekim-2026",
            "29 Ekim Cumhuriyet Bayramı",
            local_datetime(2026, 10, 29, 0, 0),
            EventType::Holiday,
            1,
        ),
    ]
}

fn special_events() -> Vec<CatalogEvent> {
    vec![
        catalog_event(
            "anneler-gunu-2026",
            "Anneler Günü",
            local_datetime(2026, 5, 10, 0, 0),
            EventType::Holiday,
            3,
        ),
        catalog_event(
            "babalar-gunu-2026",
            "Babalar Günü",
            local_datetime(2026, 6, 21, 0, 0),
            EventType::Holiday,
            3,
        ),
        catalog_event(
            "ogretmenler-gunu-2026",
            "Öğretmenler Günü",
            local_datetime(2026, 11, 24, 0, 0),
            EventType::Holiday,
            2,
        ),
        catalog_event(
            "yilbasi-2027",
            "Yılbaşı",
            local_datetime(2027, 1, 1, 0, 0),
            EventType::Holiday,
            2,
        ),
    ]
}

fn catalog_event(
    id: &str,
    title: &str,
    target_date: DateTime<Local>,
    kind: EventType,
    priority: i32,
) -> CatalogEvent {
    CatalogEvent::new(id, title, target_date, kind)
        .with_color(kind.default_color())
        .with_priority(priority)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_ids_are_unique() {
        let catalog = default_catalog();
        let ids: Vec<&str> = catalog
            .iter()
            .flat_map(|category| category.events.iter().map(|event| event.id.as_str()))
            .collect();

        let unique: HashSet<&&str> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn test_category_slugs() {
        let catalog = default_catalog();
        let slugs: Vec<&str> = catalog.iter().map(|c| c.slug.as_str()).collect();
        assert_eq!(slugs, vec!["exams", "holidays", "special"]);
    }

    #[test]
    fn test_find_event_carries_provenance() {
        let catalog = default_catalog();

        let hit = find_event(&catalog, "29-ekim-2026").unwrap();
        assert_eq!(hit.event.title, "29 Ekim Cumhuriyet Bayramı");
        assert_eq!(hit.category_title, "Resmi Tatiller");
        assert_eq!(hit.category_slug, "holidays");

        assert!(find_event(&catalog, "no-such-event").is_none());
    }

    #[test]
    fn test_featured_event_is_in_the_catalog() {
        let catalog = default_catalog();
        let featured = featured_event();

        let hit = find_event(&catalog, &featured.id).unwrap();
        assert_eq!(hit.event, &featured);
        assert_eq!(featured.priority, 1);
    }
}
