use chrono::{Duration, NaiveDate};
use std::collections::BTreeSet;
use studbud_core::{
    plan_study, prioritize, render_schedule, schedule, BuiltinCatalog, DailyPlan, FixedDuration,
    KeywordScorer, PlanInput, PlanRequest, Priority, RandomDurations, StudentProfile, Task,
    TopicCatalog,
};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

/// Weakness raises, strength lowers, weakness sorts first.
#[test]
fn test_calculus_before_algebra() {
    let today = d(2026, 3, 2);
    let due = today + Duration::days(5);
    let tasks = vec![
        Task::new("Math", "Algebra", 60).unwrap().with_due_date(due),
        Task::new("Math", "Calculus", 90).unwrap().with_due_date(due),
    ];
    let profile = StudentProfile::new()
        .with_weaknesses(["calculus"])
        .with_strengths(["algebra"]);

    let out = prioritize(&tasks, &profile, today);
    assert_eq!(out[0].topic, "Calculus");
    assert_eq!(out[0].priority, Priority::High);
    assert_eq!(out[1].topic, "Algebra");
    assert_eq!(out[1].priority, Priority::Low);
}

/// Full pipeline over a real catalog: every task lands somewhere exactly once.
#[test]
fn test_full_plan_conserves_tasks() {
    let req = PlanRequest::parse(&PlanInput {
        subject: "11th grade physics".to_string(),
        current_date: "2026-10-19".to_string(),
        exam_date: "2026-11-02".to_string(),
        start_time: "07:30".to_string(),
        break_days: "Sunday".to_string(),
        preference: "Prioritize Difficult Topics".to_string(),
    })
    .unwrap();

    let profile = StudentProfile::new()
        .with_weaknesses(["electro", "optics"])
        .with_strengths(["motion"])
        .with_minutes_every_day(150)
        .with_minutes("Saturday", 300);

    let mut durations = RandomDurations::new(30..=90, Some(42)).unwrap();
    let plan = plan_study(
        &req,
        &profile,
        &BuiltinCatalog,
        &KeywordScorer,
        &mut durations,
        req.current_date,
    )
    .unwrap();

    // 2026-10-19 .. 2026-11-01 inclusive
    assert_eq!(plan.schedule.days.len(), 14);
    assert_eq!(plan.schedule.break_days(), 2);

    for (date, day) in plan.schedule.iter() {
        if date.format("%A").to_string() == "Sunday" {
            assert_eq!(*day, DailyPlan::Break);
        } else {
            assert!(day.total_minutes() <= profile.minutes_on(*date));
        }
    }

    let placed = plan.schedule.placed_count() + plan.schedule.unplaced.len();
    assert_eq!(placed, BuiltinCatalog.topics_for("11th grade physics").len());

    // High-priority topics lead the first study day.
    let first = plan.schedule.days.values().next().unwrap();
    assert_eq!(first.tasks()[0].priority, Priority::High);

    let text = render_schedule(&plan.schedule);
    assert!(text.starts_with("\nMonday, 2026-10-19:\n"));
    assert!(text.contains("\nSunday, 2026-10-25:\n  Break Day\n"));
}

/// Once the pool runs dry the remaining days are revision days.
#[test]
fn test_short_syllabus_leaves_revision_days() {
    let start = d(2026, 10, 19);
    let profile = StudentProfile::new().with_minutes_every_day(240);
    let tasks = (1..=5)
        .map(|i| Task::new("Biology", format!("Topic {i}"), 60).unwrap())
        .collect::<Vec<_>>();

    let out = schedule(tasks, &profile, start, start + Duration::days(3), &BTreeSet::new());
    assert_eq!(out.days[&start].tasks().len(), 4);
    assert_eq!(out.days[&(start + Duration::days(1))].tasks().len(), 1);
    assert!(out.days[&(start + Duration::days(2))].tasks().is_empty());
    assert!(out.unplaced.is_empty());

    let text = render_schedule(&out);
    assert_eq!(text.matches("Revise previous topics.").count(), 2);
}

/// Break on the first day leaves the pool for the next.
#[test]
fn test_break_on_start_date() {
    let start = d(2026, 10, 24); // Saturday
    let profile = StudentProfile::new().with_minutes_every_day(60);
    let breaks: BTreeSet<String> = ["Saturday".to_string()].into();
    let tasks = vec![Task::new("Math", "Sets", 60).unwrap()];

    let out = schedule(tasks, &profile, start, start + Duration::days(1), &breaks);
    assert!(out.days[&start].is_break());
    assert_eq!(out.days[&(start + Duration::days(1))].tasks()[0].topic, "Sets");
}

/// Same seed, same plan.
#[test]
fn test_seeded_plan_is_reproducible() {
    let req = PlanRequest::parse(&PlanInput {
        subject: "btech computer science".to_string(),
        current_date: "2026-10-19".to_string(),
        exam_date: "2026-10-30".to_string(),
        start_time: "18:00".to_string(),
        break_days: String::new(),
        preference: String::new(),
    })
    .unwrap();
    let profile = StudentProfile::placeholder(&req.subject);

    let run = |seed| {
        let mut durations = RandomDurations::new(30..=90, Some(seed)).unwrap();
        plan_study(&req, &profile, &BuiltinCatalog, &KeywordScorer, &mut durations, req.current_date)
            .unwrap()
            .schedule
    };
    assert_eq!(run(9), run(9));

    let fixed = plan_study(
        &req,
        &profile,
        &BuiltinCatalog,
        &KeywordScorer,
        &mut FixedDuration(80),
        req.current_date,
    )
    .unwrap();
    // 240 min/day fits three 80-minute tasks.
    assert!(fixed.schedule.days.values().all(|p| p.tasks().len() <= 3));
}
