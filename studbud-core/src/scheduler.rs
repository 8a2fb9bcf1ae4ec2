//! Scheduler: walk the date range and greedily fill each study day from a
//! prioritized task pool.
//!
//! Fill rule for one day:
//! - scan the pool in its current order for the first task that fits the
//!   remaining minutes
//! - place it, subtract its duration, repeat
//! - stop the day as soon as a scan finds nothing, even if minutes remain
//!
//! No bin-packing: a smaller task further back never gets a second look on
//! the day a scan fails.

use chrono::NaiveDate;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::profile::StudentProfile;
use crate::task::Task;
use crate::time::weekday_name;

/// What one date in the plan holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "tasks", rename_all = "snake_case")]
pub enum DailyPlan {
    Break,
    /// Tasks in placement order. Empty means "revise previous topics".
    Study(Vec<Task>),
}

impl DailyPlan {
    pub fn is_break(&self) -> bool {
        matches!(self, DailyPlan::Break)
    }

    pub fn tasks(&self) -> &[Task] {
        match self {
            DailyPlan::Break => &[],
            DailyPlan::Study(tasks) => tasks,
        }
    }

    pub fn total_minutes(&self) -> u32 {
        self.tasks().iter().map(Task::duration).sum()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudySchedule {
    /// One entry per date in range, chronological.
    pub days: BTreeMap<NaiveDate, DailyPlan>,
    /// Pool left over after the last day, in pool order.
    pub unplaced: Vec<Task>,
}

impl StudySchedule {
    pub fn iter(&self) -> impl Iterator<Item = (&NaiveDate, &DailyPlan)> {
        self.days.iter()
    }

    pub fn placed_count(&self) -> usize {
        self.days.values().map(|p| p.tasks().len()).sum()
    }

    pub fn break_days(&self) -> usize {
        self.days.values().filter(|p| p.is_break()).count()
    }
}

/// Build a schedule over `[start, end]` inclusive.
///
/// `tasks` is taken by value and becomes this call's private pool.
/// `break_days` holds weekday names, matched exactly against English names.
/// If `start > end` the schedule has no days and every task is unplaced.
pub fn schedule(
    tasks: Vec<Task>,
    profile: &StudentProfile,
    start: NaiveDate,
    end: NaiveDate,
    break_days: &BTreeSet<String>,
) -> StudySchedule {
    let mut pool = tasks;
    let mut days = BTreeMap::new();

    let mut current = start;
    while current <= end {
        let weekday = weekday_name(current);

        if break_days.contains(weekday) {
            debug!("{current} ({weekday}): break day");
            days.insert(current, DailyPlan::Break);
        } else {
            let capacity = profile.minutes_for_weekday(weekday);
            let placed = fill_day(&mut pool, capacity);
            debug!(
                "{current} ({weekday}): placed {} task(s) in {capacity} min, {} left in pool",
                placed.len(),
                pool.len()
            );
            days.insert(current, DailyPlan::Study(placed));
        }

        match current.succ_opt() {
            Some(next) => current = next,
            None => break,
        }
    }

    info!(
        "scheduled {} day(s) from {start} to {end}; {} task(s) unplaced",
        days.len(),
        pool.len()
    );

    StudySchedule {
        days,
        unplaced: pool,
    }
}

/// Take tasks off the front-most fitting positions of `pool` until nothing fits.
fn fill_day(pool: &mut Vec<Task>, capacity: u32) -> Vec<Task> {
    let mut remaining = capacity;
    let mut placed = Vec::new();

    while remaining > 0 && !pool.is_empty() {
        let Some(idx) = pool.iter().position(|t| t.duration() <= remaining) else {
            break;
        };
        let t = pool.remove(idx);
        remaining -= t.duration();
        placed.push(t);
    }

    placed
}
