//! Plain-text rendering of a study schedule.

use crate::scheduler::{DailyPlan, StudySchedule};
use crate::time::weekday_name;

pub const BREAK_DAY: &str = "Break Day";
pub const REVISION_DAY: &str = "Revise previous topics.";

/// One header per date, then "Break Day", the task lines, or a revision note.
pub fn render_schedule(schedule: &StudySchedule) -> String {
    let mut s = String::new();
    for (date, plan) in schedule.iter() {
        s.push_str(&format!(
            "\n{}, {}:\n",
            weekday_name(*date),
            date.format("%Y-%m-%d")
        ));
        match plan {
            DailyPlan::Break => s.push_str(&format!("  {BREAK_DAY}\n")),
            DailyPlan::Study(tasks) if tasks.is_empty() => {
                s.push_str(&format!("  {REVISION_DAY}\n"))
            }
            DailyPlan::Study(tasks) => {
                for t in tasks {
                    s.push_str(&format!("  - {t}\n"));
                }
            }
        }
    }
    s
}

/// Short footer: totals and anything left unplaced.
pub fn render_summary(schedule: &StudySchedule) -> String {
    let mut s = format!(
        "\n{} day(s), {} break day(s), {} task(s) placed",
        schedule.days.len(),
        schedule.break_days(),
        schedule.placed_count()
    );
    if schedule.unplaced.is_empty() {
        s.push_str(".\n");
    } else {
        s.push_str(&format!(
            "; {} task(s) did not fit before the exam:\n",
            schedule.unplaced.len()
        ));
        for t in &schedule.unplaced {
            s.push_str(&format!("  - {t}\n"));
        }
    }
    s
}
