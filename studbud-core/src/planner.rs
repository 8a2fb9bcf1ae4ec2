//! Study planner: catalog topics -> tasks -> prioritize -> schedule.

use anyhow::Result;
use chrono::NaiveDate;
use log::info;

use crate::catalog::TopicCatalog;
use crate::prioritizer::{prioritize_with, PriorityScorer};
use crate::profile::StudentProfile;
use crate::request::PlanRequest;
use crate::scheduler::{schedule, StudySchedule};
use crate::session::{build_tasks, DurationSource};
use crate::task::Task;

/// Everything a caller needs to render one planning run.
#[derive(Debug, Clone)]
pub struct StudyPlan {
    pub request: PlanRequest,
    pub topics: Vec<String>,
    /// Tasks in priority order, as handed to the scheduler.
    pub prioritized: Vec<Task>,
    pub schedule: StudySchedule,
}

/// Run one planning request end to end.
///
/// `today` drives the urgency check in prioritization; it is the wall-clock
/// date, not the plan's start date.
pub fn plan_study<C, S, D>(
    request: &PlanRequest,
    profile: &StudentProfile,
    catalog: &C,
    scorer: &S,
    durations: &mut D,
    today: NaiveDate,
) -> Result<StudyPlan>
where
    C: TopicCatalog + ?Sized,
    S: PriorityScorer + ?Sized,
    D: DurationSource + ?Sized,
{
    let topics = catalog.topics_for(&request.subject);
    let tasks = build_tasks(&request.subject, &topics, request.exam_date, durations)?;
    let prioritized = prioritize_with(scorer, &tasks, profile, today);

    info!(
        "planning '{}': {} topic(s), {} -> {} ({})",
        request.subject,
        topics.len(),
        request.start_date(),
        request.end_date(),
        request.preference
    );

    let schedule = schedule(
        prioritized.clone(),
        profile,
        request.start_date(),
        request.end_date(),
        &request.break_days,
    );

    Ok(StudyPlan {
        request: request.clone(),
        topics,
        prioritized,
        schedule,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::BuiltinCatalog;
    use crate::prioritizer::KeywordScorer;
    use crate::request::PlanInput;
    use crate::session::FixedDuration;
    use crate::task::Priority;

    fn request(breaks: &str) -> PlanRequest {
        PlanRequest::parse(&PlanInput {
            subject: "btech electrical engineering".to_string(),
            current_date: "2026-10-19".to_string(),
            exam_date: "2026-10-23".to_string(),
            start_time: "08:00".to_string(),
            break_days: breaks.to_string(),
            preference: String::new(),
        })
        .unwrap()
    }

    #[test]
    fn weaknesses_go_first_and_pool_is_not_aliased() {
        let req = request("");
        let profile = StudentProfile::new()
            .with_weaknesses(["power"])
            .with_minutes_every_day(120);
        let today = req.current_date;

        let plan = plan_study(
            &req,
            &profile,
            &BuiltinCatalog,
            &KeywordScorer,
            &mut FixedDuration(60),
            today,
        )
        .unwrap();

        assert_eq!(plan.topics.len(), 13);
        assert_eq!(plan.prioritized.len(), 13);
        assert_eq!(plan.prioritized[0].topic, "Power Systems");
        assert_eq!(plan.prioritized[1].topic, "Power Electronics");
        assert_eq!(plan.prioritized[0].priority, Priority::High);

        // Mon..Thu, two 60-minute tasks per day.
        assert_eq!(plan.schedule.days.len(), 4);
        assert_eq!(plan.schedule.placed_count(), 8);
        assert_eq!(plan.schedule.unplaced.len(), 5);
        let first_day = plan.schedule.days.values().next().unwrap();
        assert_eq!(first_day.tasks()[0].topic, "Power Systems");
    }

    #[test]
    fn break_days_flow_through() {
        let req = request("Tuesday, Wednesday");
        let profile = StudentProfile::new().with_minutes_every_day(60);
        let plan = plan_study(
            &req,
            &profile,
            &BuiltinCatalog,
            &KeywordScorer,
            &mut FixedDuration(60),
            req.current_date,
        )
        .unwrap();
        assert_eq!(plan.schedule.break_days(), 2);
        assert_eq!(plan.schedule.placed_count(), 2);
    }
}
