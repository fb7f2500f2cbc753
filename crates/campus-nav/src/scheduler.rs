//! FIFO task scheduling: the task that has waited longest completes next.

use crate::Priority;
use campus_core::bounded::BoundedQueue;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub priority: Priority,
    /// Free-form deadline, usually `YYYY-MM-DD`.
    #[serde(default)]
    pub deadline: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            description: String::new(),
            priority: Priority::Medium,
            deadline: String::new(),
            created_at: Utc::now(),
            completed_at: None,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_deadline(mut self, deadline: &str) -> Self {
        self.deadline = deadline.to_string();
        self
    }

    pub fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.is_completed() {
            "Completed"
        } else {
            "Pending"
        };
        write!(f, "{} ({}) - {}", self.title, self.priority, status)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TaskStatistics {
    pub pending: usize,
    pub completed: usize,
    pub total_created: usize,
    /// Completed share of all tasks ever created, as a percentage.
    pub completion_rate: f64,
}

#[derive(Debug, Clone, Default)]
pub struct TaskScheduler {
    queue: BoundedQueue<Task>,
    completed: Vec<Task>,
    total_created: usize,
}

impl TaskScheduler {
    /// Scheduler holding at most `max_pending` tasks; unbounded for `None`.
    pub fn new(max_pending: Option<usize>) -> Self {
        let queue = match max_pending {
            Some(max) => BoundedQueue::with_max_size(max),
            None => BoundedQueue::new(),
        };
        Self {
            queue,
            completed: Vec::new(),
            total_created: 0,
        }
    }

    /// Queue `task`. Returns `false` when the queue is full.
    pub fn add_task(&mut self, task: Task) -> bool {
        if !self.queue.enqueue(task) {
            tracing::debug!(pending = self.queue.len(), "task queue full");
            return false;
        }
        self.total_created += 1;
        true
    }

    /// Complete the oldest pending task and return it.
    pub fn complete_next_task(&mut self) -> Option<&Task> {
        let mut task = self.queue.dequeue()?;
        task.completed_at = Some(Utc::now());
        tracing::debug!(title = %task.title, pending = self.queue.len(), "completed task");
        self.completed.push(task);
        self.completed.last()
    }

    pub fn peek_next_task(&self) -> Option<&Task> {
        self.queue.peek()
    }

    /// Pending tasks, oldest first.
    pub fn pending_tasks(&self) -> Vec<&Task> {
        self.queue.iter().collect()
    }

    /// Completed tasks in completion order.
    pub fn completed_tasks(&self) -> &[Task] {
        &self.completed
    }

    /// Drop the oldest pending task titled `title`.
    pub fn cancel_task(&mut self, title: &str) -> bool {
        let Some(task) = self.queue.iter().find(|t| t.title == title).cloned() else {
            return false;
        };
        self.queue.remove(&task)
    }

    pub fn pending_count(&self) -> usize {
        self.queue.len()
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    pub fn total_created(&self) -> usize {
        self.total_created
    }

    pub fn clear_completed(&mut self) {
        self.completed.clear();
    }

    pub fn statistics(&self) -> TaskStatistics {
        let completed = self.completed_count();
        let completion_rate = if self.total_created > 0 {
            completed as f64 / self.total_created as f64 * 100.0
        } else {
            0.0
        };
        TaskStatistics {
            pending: self.pending_count(),
            completed,
            total_created: self.total_created,
            completion_rate,
        }
    }
}
