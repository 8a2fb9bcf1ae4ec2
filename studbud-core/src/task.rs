//! Task model: one unit of study work for a single syllabus topic.

use anyhow::{bail, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    /// Sort rank: High=0, Medium=1, Low=2.
    pub fn rank(self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::High => write!(f, "High"),
            Priority::Medium => write!(f, "Medium"),
            Priority::Low => write!(f, "Low"),
        }
    }
}

/// Core task type.
///
/// `duration` is fixed at construction; `priority` is overwritten by each
/// prioritization pass. Deserialization goes through `Task::new`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TaskRecord")]
pub struct Task {
    pub subject: String,
    pub topic: String,

    /// Minutes, always > 0.
    duration: u32,

    pub priority: Priority,

    /// Optional exam/due date.
    pub due_date: Option<NaiveDate>,
}

/// Unchecked wire shape of a `Task`.
#[derive(Deserialize)]
struct TaskRecord {
    subject: String,
    topic: String,
    duration: u32,
    #[serde(default)]
    priority: Priority,
    #[serde(default)]
    due_date: Option<NaiveDate>,
}

impl TryFrom<TaskRecord> for Task {
    type Error = anyhow::Error;

    fn try_from(r: TaskRecord) -> Result<Self> {
        let mut task = Task::new(r.subject, r.topic, r.duration)?.with_priority(r.priority);
        task.due_date = r.due_date;
        Ok(task)
    }
}

impl Task {
    pub fn new(subject: impl Into<String>, topic: impl Into<String>, duration: u32) -> Result<Self> {
        if duration == 0 {
            bail!("task duration must be positive");
        }
        Ok(Self {
            subject: subject.into(),
            topic: topic.into(),
            duration,
            priority: Priority::Medium,
            due_date: None,
        })
    }

    pub fn with_due_date(mut self, due: NaiveDate) -> Self {
        self.due_date = Some(due);
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} ({} mins, Priority: {}, Due: ",
            self.subject, self.topic, self.duration, self.priority
        )?;
        match self.due_date {
            Some(d) => write!(f, "{})", d.format("%Y-%m-%d")),
            None => write!(f, "None)"),
        }
    }
}
