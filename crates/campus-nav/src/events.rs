//! Ordered event list with bounded undo/redo.
//!
//! Events live in a [`PositionalList`]. Every mutation records a [`Command`]
//! naming the action performed; undo applies its inverse and moves the
//! command to the redo stack, redo re-applies it and moves it back.

use campus_core::bounded::BoundedStack;
use campus_core::list::PositionalList;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub title: String,
    pub date: String,
    pub time: String,
    pub location: String,
    #[serde(default)]
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl Event {
    pub fn new(title: &str, date: &str, time: &str, location: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            date: date.to_string(),
            time: time.to_string(),
            location: location.to_string(),
            description: description.to_string(),
            created_at: Utc::now(),
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} at {} ({})",
            self.title, self.date, self.time, self.location
        )
    }
}

/// A recorded mutation of the event list.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `event` was inserted at `position`.
    Add { position: usize, event: Event },
    /// `event` was removed from `position`.
    Delete { position: usize, event: Event },
    /// The event at `position` was replaced.
    Edit {
        position: usize,
        before: Event,
        after: Event,
    },
}

/// Push onto a history stack, evicting the oldest entry when it is full.
fn record(stack: &mut BoundedStack<Command>, command: Command) {
    if stack.is_full()
        && let Some(limit) = stack.max_size()
    {
        stack.set_max_size(Some(limit.saturating_sub(1)));
        stack.set_max_size(Some(limit));
        tracing::debug!(limit, "history full, dropped oldest command");
    }
    stack.push(command);
}

#[derive(Debug, Clone)]
pub struct EventsManager {
    events: PositionalList<Event>,
    undo_stack: BoundedStack<Command>,
    redo_stack: BoundedStack<Command>,
}

impl EventsManager {
    /// Empty manager keeping at most `history_limit` (min 1) undo and redo
    /// steps each.
    pub fn new(history_limit: usize) -> Self {
        let limit = history_limit.max(1);
        Self {
            events: PositionalList::new(),
            undo_stack: BoundedStack::with_max_size(limit),
            redo_stack: BoundedStack::with_max_size(limit),
        }
    }

    /// Restore stored events in order. Nothing is recorded in the history.
    pub fn from_events(events: impl IntoIterator<Item = Event>, history_limit: usize) -> Self {
        let mut manager = Self::new(history_limit);
        manager.events = events.into_iter().collect();
        manager
    }

    fn perform(&mut self, command: Command) {
        record(&mut self.undo_stack, command);
        self.redo_stack.clear();
    }

    /// Append `event`.
    pub fn add_event(&mut self, event: Event) -> bool {
        let position = self.events.len();
        self.events.insert_at_end(event.clone());
        self.perform(Command::Add { position, event });
        true
    }

    /// Remove and return the event at `position`.
    pub fn delete_event(&mut self, position: usize) -> Option<Event> {
        let event = self.events.delete_at_position(position)?;
        self.perform(Command::Delete {
            position,
            event: event.clone(),
        });
        Some(event)
    }

    /// Replace the event at `position`. Returns `false` when out of range.
    pub fn edit_event(&mut self, position: usize, event: Event) -> bool {
        let Some(before) = self.events.get_at_position(position).cloned() else {
            return false;
        };
        self.events.update_at_position(position, event.clone());
        self.perform(Command::Edit {
            position,
            before,
            after: event,
        });
        true
    }

    /// Revert the most recent command. Returns `false` when there is nothing
    /// to undo or the list no longer matches the command.
    pub fn undo(&mut self) -> bool {
        let Some(command) = self.undo_stack.pop() else {
            return false;
        };
        let applied = match &command {
            Command::Add { position, .. } => self.events.delete_at_position(*position).is_some(),
            Command::Delete { position, event } => {
                self.events.insert_at_position(event.clone(), *position)
            }
            Command::Edit {
                position, before, ..
            } => self.events.update_at_position(*position, before.clone()),
        };
        if applied {
            record(&mut self.redo_stack, command);
        } else {
            tracing::warn!(?command, "undo did not apply, dropping command");
        }
        applied
    }

    /// Re-apply the most recently undone command.
    pub fn redo(&mut self) -> bool {
        let Some(command) = self.redo_stack.pop() else {
            return false;
        };
        let applied = match &command {
            Command::Add { position, event } => {
                self.events.insert_at_position(event.clone(), *position)
            }
            Command::Delete { position, .. } => {
                self.events.delete_at_position(*position).is_some()
            }
            Command::Edit {
                position, after, ..
            } => self.events.update_at_position(*position, after.clone()),
        };
        if applied {
            record(&mut self.undo_stack, command);
        } else {
            tracing::warn!(?command, "redo did not apply, dropping command");
        }
        applied
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn all_events(&self) -> Vec<Event> {
        self.events.to_list()
    }

    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    pub fn get(&self, position: usize) -> Option<&Event> {
        self.events.get_at_position(position)
    }

    /// Events whose title, description or location contains `keyword`,
    /// ignoring case.
    pub fn search_events(&self, keyword: &str) -> Vec<&Event> {
        let needle = keyword.to_lowercase();
        self.events
            .iter()
            .filter(|e| {
                e.title.to_lowercase().contains(&needle)
                    || e.description.to_lowercase().contains(&needle)
                    || e.location.to_lowercase().contains(&needle)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(title: &str) -> Event {
        Event::new(title, "2024-01-15", "10:00", "CS Department", "")
    }

    #[test]
    fn test_full_history_evicts_oldest() {
        let mut manager = EventsManager::new(2);
        for title in ["a", "b", "c"] {
            manager.add_event(event(title));
        }
        assert_eq!(manager.undo_stack.len(), 2);
        assert!(manager.undo());
        assert!(manager.undo());
        assert!(!manager.undo());
        // "a" was added before the history window.
        let titles: Vec<String> = manager.all_events().into_iter().map(|e| e.title).collect();
        assert_eq!(titles, vec!["a"]);
    }

    #[test]
    fn test_from_events_has_no_history() {
        let manager = EventsManager::from_events([event("a"), event("b")], 50);
        assert_eq!(manager.event_count(), 2);
        assert!(!manager.can_undo());
        assert!(!manager.can_redo());
    }
}
