//! Planning request: validate raw form-style input before the engine runs.
//!
//! The engine itself assumes `start <= end`; every check that guarantees it
//! lives here.

use anyhow::{bail, Result};
use chrono::{NaiveDate, NaiveTime};
use log::warn;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::time::{parse_date, parse_time, WEEKDAY_NAMES};

/// How the student would like the plan laid out. Advisory; allocation
/// does not consult it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StudyPreference {
    #[default]
    EqualDistribution,
    PrioritizeDifficultTopics,
    IncludeRevisionDays,
}

impl fmt::Display for StudyPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EqualDistribution => write!(f, "Equal Distribution"),
            Self::PrioritizeDifficultTopics => write!(f, "Prioritize Difficult Topics"),
            Self::IncludeRevisionDays => write!(f, "Include Revision Days"),
        }
    }
}

impl FromStr for StudyPreference {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let norm = s.trim().to_lowercase().replace(['-', '_'], " ");
        match norm.as_str() {
            "" | "equal distribution" => Ok(Self::EqualDistribution),
            "prioritize difficult topics" => Ok(Self::PrioritizeDifficultTopics),
            "include revision days" => Ok(Self::IncludeRevisionDays),
            _ => bail!("unknown study preference: {s}"),
        }
    }
}

/// Raw text fields as typed by the student.
#[derive(Debug, Clone, Default)]
pub struct PlanInput {
    pub subject: String,
    pub current_date: String,
    pub exam_date: String,
    pub start_time: String,
    pub break_days: String,
    pub preference: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanRequest {
    pub subject: String,
    pub current_date: NaiveDate,
    pub exam_date: NaiveDate,
    pub start_time: NaiveTime,
    pub break_days: BTreeSet<String>,
    pub preference: StudyPreference,
}

impl PlanRequest {
    pub fn parse(input: &PlanInput) -> Result<Self> {
        let current_date = parse_date(&input.current_date)?;
        let exam_date = parse_date(&input.exam_date)?;
        let start_time = parse_time(&input.start_time)?;
        let break_days = parse_break_days(&input.break_days);
        let preference: StudyPreference = input.preference.parse()?;

        if exam_date <= current_date {
            bail!("exam date must be in the future (current {current_date}, exam {exam_date})");
        }

        Ok(Self {
            subject: input.subject.trim().to_string(),
            current_date,
            exam_date,
            start_time,
            break_days,
            preference,
        })
    }

    /// First plan day.
    pub fn start_date(&self) -> NaiveDate {
        self.current_date
    }

    /// Last plan day: the day before the exam.
    pub fn end_date(&self) -> NaiveDate {
        // exam_date > current_date, so a predecessor exists
        self.exam_date.pred_opt().unwrap_or(self.current_date)
    }

    pub fn days_until_exam(&self) -> i64 {
        (self.exam_date - self.current_date).num_days()
    }
}

/// Split "Saturday, Sunday" into trimmed names.
///
/// Names are kept verbatim; anything that is not an exact English weekday
/// name simply never matches.
pub fn parse_break_days(s: &str) -> BTreeSet<String> {
    s.split(',')
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .inspect(|d| {
            if !WEEKDAY_NAMES.iter().any(|w| w == d) {
                warn!("break day '{d}' is not a weekday name (expected e.g. 'Sunday'); it will never match");
            }
        })
        .map(str::to_string)
        .collect()
}
