//! studbud-core: planning engine for the Studbud study planner

pub mod catalog;
pub mod planner;
pub mod prioritizer;
pub mod profile;
pub mod render;
pub mod request;
pub mod scheduler;
pub mod session;
pub mod task;
pub mod time;

pub use catalog::{known_subjects, BuiltinCatalog, LayeredCatalog, TopicCatalog};
pub use planner::{plan_study, StudyPlan};
pub use prioritizer::{prioritize, prioritize_with, KeywordScorer, PriorityScorer, URGENT_WITHIN_DAYS};
pub use profile::StudentProfile;
pub use render::{render_schedule, render_summary};
pub use request::{parse_break_days, PlanInput, PlanRequest, StudyPreference};
pub use scheduler::{schedule, DailyPlan, StudySchedule};
pub use session::{build_tasks, DurationSource, FixedDuration, RandomDurations};
pub use task::{Priority, Task};
pub use time::{weekday_name, WEEKDAY_NAMES};
