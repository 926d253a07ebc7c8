use anyhow::Result;
use chrono::Local;

use crate::models::custom_event::{CountdownUpdate, CustomCountdownEvent, NewCountdown};

use super::id::generate_id;
use super::storage::{FileStorage, StorageBackend, STORAGE_KEY};

/// CRUD store for user-created countdown events.
///
/// Holds the collection in memory and mirrors every mutation to the storage
/// backend as one whole-collection snapshot. Reads happen once at `load`;
/// afterwards the in-memory collection is authoritative, even when a write
/// fails (the next mutation simply tries again with the full state).
pub struct CustomCountdownStore {
    events: Vec<CustomCountdownEvent>,
    loaded: bool,
    storage: Box<dyn StorageBackend>,
}

impl CustomCountdownStore {
    pub fn new(storage: Box<dyn StorageBackend>) -> Self {
        Self {
            events: Vec::new(),
            loaded: false,
            storage,
        }
    }

    /// Store backed by a file in the platform data directory.
    pub fn in_default_location() -> Result<Self> {
        let storage = FileStorage::in_default_location()?;
        Ok(Self::new(Box::new(storage)))
    }

    /// Read the persisted collection.
    ///
    /// Fails soft: an absent, unreadable or corrupt payload degrades to an
    /// empty collection with a logged warning. Callers can rely on `load`
    /// never surfacing an error; after it returns, `is_loaded` is true.
    pub fn load(&mut self) -> &[CustomCountdownEvent] {
        self.events = match self.storage.read(STORAGE_KEY) {
            Ok(Some(payload)) => match serde_json::from_str(&payload) {
                Ok(events) => events,
                Err(err) => {
                    log::warn!("discarding corrupt custom countdown collection: {}", err);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                log::warn!("failed to read custom countdowns: {}", err);
                Vec::new()
            }
        };
        self.loaded = true;
        &self.events
    }

    /// Whether `load` has run. Lets consumers tell "not yet loaded" apart
    /// from "loaded and empty".
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn events(&self) -> &[CustomCountdownEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Append a new countdown built from the validated draft.
    ///
    /// Assigns a fresh id and creation stamp, persists the collection and
    /// returns the stored record.
    pub fn add(&mut self, draft: NewCountdown) -> &CustomCountdownEvent {
        let event = CustomCountdownEvent {
            id: generate_id(),
            title: draft.title,
            target_date: draft.target_date,
            color: draft.color,
            priority: draft.priority,
            kind: draft.kind,
            notes: draft.notes,
            is_custom: true,
            created_at: Local::now(),
        };

        let index = self.events.len();
        self.events.push(event);
        self.persist();
        &self.events[index]
    }

    /// Merge `update` over the record with the given id. Unknown ids are a
    /// no-op, not an error.
    pub fn update(&mut self, id: &str, update: CountdownUpdate) {
        let Some(event) = self.events.iter_mut().find(|event| event.id == id) else {
            log::warn!("update: no custom countdown with id {}", id);
            return;
        };

        update.apply_to(event);
        self.persist();
    }

    /// Drop the record with the given id. Unknown ids are a no-op.
    pub fn remove(&mut self, id: &str) {
        let before = self.events.len();
        self.events.retain(|event| event.id != id);
        if self.events.len() == before {
            log::warn!("remove: no custom countdown with id {}", id);
            return;
        }
        self.persist();
    }

    /// In-memory lookup by id; no I/O.
    pub fn get(&self, id: &str) -> Option<&CustomCountdownEvent> {
        self.events.iter().find(|event| event.id == id)
    }

    /// Write the whole collection back as one snapshot. Failures are logged
    /// and otherwise ignored; the in-memory state stays authoritative and
    /// the next mutation attempts the write again.
    fn persist(&self) {
        let payload = match serde_json::to_string_pretty(&self.events) {
            Ok(payload) => payload,
            Err(err) => {
                log::warn!("failed to serialize custom countdowns: {}", err);
                return;
            }
        };

        if let Err(err) = self.storage.write(STORAGE_KEY, &payload) {
            log::warn!("failed to persist custom countdowns: {}", err);
        }
    }
}
