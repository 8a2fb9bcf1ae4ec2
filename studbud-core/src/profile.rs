//! Student profile: declared goals, strengths, weaknesses and weekly availability.
//!
//! Profiles are file-backed (JSON) by the CLI; this module only defines the shape
//! and the lookups the planner needs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::time::{weekday_name, WEEKDAY_NAMES};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudentProfile {
    pub goals: Vec<String>,
    /// Keywords, matched in stored order.
    pub strengths: Vec<String>,
    /// Keywords, matched in stored order.
    pub weaknesses: Vec<String>,
    /// Advisory only.
    pub preferences: Vec<String>,
    /// Weekday name ("Monday") -> minutes available. Unlisted days are 0.
    pub available_minutes: BTreeMap<String, u32>,
}

impl StudentProfile {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stand-in profile used when the student never ran setup.
    pub fn placeholder(subject: &str) -> Self {
        Self {
            goals: vec![format!("Pass the exam in {subject}")],
            strengths: vec!["Good at studying".to_string()],
            weaknesses: vec!["Procrastination".to_string()],
            preferences: vec!["Prefers studying in the morning".to_string()],
            available_minutes: WEEKDAY_NAMES
                .iter()
                .map(|d| (d.to_string(), 4 * 60))
                .collect(),
        }
    }

    pub fn with_strengths<I, S>(mut self, strengths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.strengths = strengths.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_weaknesses<I, S>(mut self, weaknesses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.weaknesses = weaknesses.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_minutes(mut self, weekday: impl Into<String>, minutes: u32) -> Self {
        self.available_minutes.insert(weekday.into(), minutes);
        self
    }

    /// Same minutes for all seven weekdays.
    pub fn with_minutes_every_day(mut self, minutes: u32) -> Self {
        for d in WEEKDAY_NAMES {
            self.available_minutes.insert(d.to_string(), minutes);
        }
        self
    }

    pub fn minutes_for_weekday(&self, weekday: &str) -> u32 {
        self.available_minutes.get(weekday).copied().unwrap_or(0)
    }

    pub fn minutes_on(&self, date: NaiveDate) -> u32 {
        self.minutes_for_weekday(weekday_name(date))
    }

    /// Total over the seven weekdays, saturating at `u32::MAX`.
    pub fn weekly_minutes(&self) -> u32 {
        WEEKDAY_NAMES
            .iter()
            .fold(0u32, |acc, d| acc.saturating_add(self.minutes_for_weekday(d)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlisted_weekday_has_zero_minutes() {
        let p = StudentProfile::new().with_minutes("Monday", 90);
        assert_eq!(p.minutes_for_weekday("Monday"), 90);
        assert_eq!(p.minutes_for_weekday("Tuesday"), 0);
        // Lookup is by exact name.
        assert_eq!(p.minutes_for_weekday("monday"), 0);
    }

    #[test]
    fn minutes_on_uses_date_weekday() {
        let p = StudentProfile::new().with_minutes("Saturday", 120);
        let sat = NaiveDate::from_ymd_opt(2026, 10, 24).unwrap();
        assert_eq!(p.minutes_on(sat), 120);
        assert_eq!(p.minutes_on(sat.succ_opt().unwrap()), 0);
    }

    #[test]
    fn placeholder_gives_four_hours_daily() {
        let p = StudentProfile::placeholder("Biology");
        assert_eq!(p.goals, vec!["Pass the exam in Biology".to_string()]);
        assert_eq!(p.weekly_minutes(), 7 * 240);
        assert_eq!(p.weaknesses, vec!["Procrastination".to_string()]);
    }

    #[test]
    fn weekly_total_saturates_instead_of_overflowing() {
        let p = StudentProfile::new()
            .with_minutes("Monday", u32::MAX)
            .with_minutes("Tuesday", u32::MAX)
            .with_minutes("Wednesday", 60);
        assert_eq!(p.weekly_minutes(), u32::MAX);
    }

    #[test]
    fn missing_fields_deserialize_to_defaults() {
        let p: StudentProfile =
            serde_json::from_str(r#"{"weaknesses":["calculus"],"available_minutes":{"Friday":60}}"#)
                .unwrap();
        assert!(p.strengths.is_empty());
        assert_eq!(p.weaknesses, vec!["calculus".to_string()]);
        assert_eq!(p.minutes_for_weekday("Friday"), 60);
    }
}
