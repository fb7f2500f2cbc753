//! Event lookup backed by an [`OrderedIndex`].
//!
//! Records are keyed by `lowercase(title) + "_" + date`, so the in-order walk
//! lists events alphabetically by title and then by date. Every query other
//! than the key itself is a filtered in-order scan.

use crate::Priority;
use campus_core::index::OrderedIndex;
use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Date format used for event dates (ISO, so lexical order is date order).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// An indexed campus event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    pub event_id: String,
    pub title: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub category: String,
    pub priority: Priority,
    #[serde(default)]
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl EventRecord {
    pub fn search_key(&self) -> String {
        search_key(&self.title, &self.date)
    }
}

fn search_key(title: &str, date: &str) -> String {
    format!("{}_{}", title.to_lowercase(), date)
}

/// Caller-supplied fields of a new event; the index assigns the id and
/// creation time.
#[derive(Debug, Clone, PartialEq)]
pub struct EventDraft {
    pub title: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub category: String,
    pub priority: Priority,
    pub description: String,
}

impl EventDraft {
    pub fn new(title: &str, date: &str, time: &str, location: &str) -> Self {
        Self {
            title: title.to_string(),
            date: date.to_string(),
            time: time.to_string(),
            location: location.to_string(),
            category: "General".to_string(),
            priority: Priority::Medium,
            description: String::new(),
        }
    }

    pub fn category(mut self, category: &str) -> Self {
        self.category = category.to_string();
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }
}

/// Shape of the index, for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    pub events: usize,
    pub height: isize,
    pub balanced: bool,
    pub categories: Vec<String>,
}

#[derive(Debug, Default)]
pub struct EventSearchIndex {
    tree: OrderedIndex<String, EventRecord>,
    counter: u32,
    categories: BTreeSet<String>,
}

impl EventSearchIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// `None` once the id space is used up.
    fn next_id(&mut self) -> Option<String> {
        self.counter = self.counter.checked_add(1)?;
        Some(format!("EVT_{:04}", self.counter))
    }

    /// Index a new event under a fresh `EVT_nnnn` id.
    ///
    /// An event with the same title (ignoring case) and date replaces the
    /// existing one; the return value is `false` in that case. Also returns
    /// `false`, indexing nothing, when no further id can be allocated.
    pub fn add_event(&mut self, draft: EventDraft) -> bool {
        let Some(event_id) = self.next_id() else {
            tracing::warn!(title = %draft.title, "event ids exhausted");
            return false;
        };
        let record = EventRecord {
            event_id,
            title: draft.title,
            date: draft.date,
            time: draft.time,
            location: draft.location,
            category: draft.category,
            priority: draft.priority,
            description: draft.description,
            created_at: Utc::now(),
        };
        self.store(record)
    }

    /// Index a previously created record as-is, keeping its id. Later ids are
    /// allocated above any `EVT_nnnn` seen here.
    pub fn insert_record(&mut self, record: EventRecord) -> bool {
        if let Some(n) = record.event_id.strip_prefix("EVT_")
            && let Ok(n) = n.parse::<u32>()
        {
            self.counter = self.counter.max(n);
        }
        self.store(record)
    }

    fn store(&mut self, record: EventRecord) -> bool {
        self.categories.insert(record.category.clone());
        let key = record.search_key();
        let created = self.tree.insert(key, record);
        if !created {
            tracing::debug!("replaced event with identical title and date");
        }
        created
    }

    fn matching(&self, mut pred: impl FnMut(&EventRecord) -> bool) -> Vec<&EventRecord> {
        self.tree
            .values()
            .into_iter()
            .filter(|&event| pred(event))
            .collect()
    }

    /// Events whose title contains `title`, ignoring case.
    pub fn search_by_title(&self, title: &str) -> Vec<&EventRecord> {
        let needle = title.to_lowercase();
        self.matching(|e| e.title.to_lowercase().contains(&needle))
    }

    pub fn search_by_date(&self, date: &str) -> Vec<&EventRecord> {
        self.matching(|e| e.date == date)
    }

    pub fn search_by_category(&self, category: &str) -> Vec<&EventRecord> {
        self.matching(|e| e.category.to_lowercase() == category.to_lowercase())
    }

    pub fn search_by_priority(&self, priority: &str) -> Vec<&EventRecord> {
        self.matching(|e| e.priority.as_str().eq_ignore_ascii_case(priority.trim()))
    }

    /// Events whose location contains `location`, ignoring case.
    pub fn search_by_location(&self, location: &str) -> Vec<&EventRecord> {
        let needle = location.to_lowercase();
        self.matching(|e| e.location.to_lowercase().contains(&needle))
    }

    /// Events dated within `start..=end` (ISO dates, compared as strings).
    pub fn events_in_range(&self, start: &str, end: &str) -> Vec<&EventRecord> {
        self.matching(|e| start <= e.date.as_str() && e.date.as_str() <= end)
    }

    /// Events from `today` through `days` days later, inclusive.
    pub fn upcoming_events(&self, today: NaiveDate, days: u32) -> Vec<&EventRecord> {
        let end = today
            .checked_add_days(Days::new(u64::from(days)))
            .unwrap_or(NaiveDate::MAX);
        let start = today.format(DATE_FORMAT).to_string();
        let end = end.format(DATE_FORMAT).to_string();
        self.events_in_range(&start, &end)
    }

    /// Remove the event with `event_id`. Returns `false` if no event has it.
    pub fn delete_event(&mut self, event_id: &str) -> bool {
        let key = self
            .tree
            .inorder_traversal()
            .into_iter()
            .find(|(_, e)| e.event_id == event_id)
            .map(|(k, _)| k.clone());
        match key {
            Some(key) => self.tree.delete(&key),
            None => false,
        }
    }

    /// All events in key order.
    pub fn all_events(&self) -> Vec<&EventRecord> {
        self.tree.values()
    }

    pub fn event_count(&self) -> usize {
        self.tree.len()
    }

    /// Every category ever indexed, sorted.
    pub fn categories(&self) -> Vec<String> {
        self.categories.iter().cloned().collect()
    }

    pub fn priorities(&self) -> [Priority; 3] {
        Priority::ALL
    }

    pub fn tree_stats(&self) -> IndexStats {
        IndexStats {
            events: self.tree.len(),
            height: self.tree.get_height(),
            balanced: self.tree.is_balanced(),
            categories: self.categories(),
        }
    }
}
