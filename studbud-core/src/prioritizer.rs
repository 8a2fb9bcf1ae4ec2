//! Prioritizer: label each task High/Medium/Low from profile keyword matches,
//! then produce a total order.
//!
//! Deterministic keyword heuristics, no model:
//! 1) a weakness keyword in topic or subject raises the task to High
//! 2) otherwise a strength keyword lowers it to Low, unless the task is due
//!    within `URGENT_WITHIN_DAYS` of today
//!
//! Matching is unanchored, case-insensitive substring search, so short
//! keywords over-match.

use chrono::{Duration, NaiveDate};
use log::debug;

use crate::profile::StudentProfile;
use crate::task::{Priority, Task};

/// Tasks due within this many days (inclusive) of today keep their priority
/// even when they match a strength.
pub const URGENT_WITHIN_DAYS: i64 = 2;

/// Assigns a priority label to one task.
///
/// Alternative classifiers plug in here without touching the scheduler.
pub trait PriorityScorer {
    fn score(&self, task: &Task, profile: &StudentProfile, today: NaiveDate) -> Priority;
}

/// Default scorer: keyword substring matches against weaknesses/strengths.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordScorer;

impl PriorityScorer for KeywordScorer {
    fn score(&self, task: &Task, profile: &StudentProfile, today: NaiveDate) -> Priority {
        let mut priority = Priority::Medium;

        // First matching weakness wins.
        for weakness in &profile.weaknesses {
            if mentions(task, weakness) {
                priority = Priority::High;
                break;
            }
        }

        if matches!(priority, Priority::Medium | Priority::Low) {
            for strength in &profile.strengths {
                if mentions(task, strength) {
                    if is_urgent(task, today) {
                        // leave as is
                        continue;
                    }
                    priority = Priority::Low;
                }
            }
        }

        priority
    }
}

fn mentions(task: &Task, keyword: &str) -> bool {
    let kw = keyword.to_lowercase();
    task.topic.to_lowercase().contains(&kw) || task.subject.to_lowercase().contains(&kw)
}

fn is_urgent(task: &Task, today: NaiveDate) -> bool {
    match task.due_date {
        Some(due) => due <= today + Duration::days(URGENT_WITHIN_DAYS),
        None => false,
    }
}

/// Prioritize with the default keyword scorer.
pub fn prioritize(tasks: &[Task], profile: &StudentProfile, today: NaiveDate) -> Vec<Task> {
    prioritize_with(&KeywordScorer, tasks, profile, today)
}

/// Returns a new sequence with every priority recomputed, stably sorted by
/// (priority rank, due date), undated tasks last.
pub fn prioritize_with<S: PriorityScorer + ?Sized>(
    scorer: &S,
    tasks: &[Task],
    profile: &StudentProfile,
    today: NaiveDate,
) -> Vec<Task> {
    let mut out: Vec<Task> = tasks
        .iter()
        .map(|t| {
            let mut t = t.clone();
            t.priority = scorer.score(&t, profile, today);
            debug!("prioritized '{} - {}' as {}", t.subject, t.topic, t.priority);
            t
        })
        .collect();

    out.sort_by_key(|t| (t.priority.rank(), t.due_date.unwrap_or(NaiveDate::MAX)));
    out
}
