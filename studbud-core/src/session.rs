//! Study session setup: one task per catalog topic.

use anyhow::{bail, Result};
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;

use crate::task::Task;

/// Supplies a duration (minutes) for each new task.
pub trait DurationSource {
    fn next_minutes(&mut self, topic: &str) -> u32;
}

/// Uniform random minutes from an inclusive range.
#[derive(Debug, Clone)]
pub struct RandomDurations {
    range: RangeInclusive<u32>,
    rng: StdRng,
}

impl RandomDurations {
    pub const DEFAULT_RANGE: RangeInclusive<u32> = 30..=90;

    pub fn new(range: RangeInclusive<u32>, seed: Option<u64>) -> Result<Self> {
        if *range.start() == 0 || range.start() > range.end() {
            bail!(
                "invalid duration range {}..={}: need 0 < min <= max",
                range.start(),
                range.end()
            );
        }
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Ok(Self { range, rng })
    }
}

impl DurationSource for RandomDurations {
    fn next_minutes(&mut self, _topic: &str) -> u32 {
        self.rng.random_range(self.range.clone())
    }
}

/// Same minutes for every topic.
#[derive(Debug, Clone, Copy)]
pub struct FixedDuration(pub u32);

impl DurationSource for FixedDuration {
    fn next_minutes(&mut self, _topic: &str) -> u32 {
        self.0
    }
}

/// Create one Medium task per topic, all due on `due`.
pub fn build_tasks<D: DurationSource + ?Sized>(
    subject: &str,
    topics: &[String],
    due: NaiveDate,
    durations: &mut D,
) -> Result<Vec<Task>> {
    topics
        .iter()
        .map(|topic| {
            let minutes = durations.next_minutes(topic);
            Ok(Task::new(subject, topic.as_str(), minutes)?.with_due_date(due))
        })
        .collect()
}
