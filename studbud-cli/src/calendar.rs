use chrono::{DateTime, Duration, NaiveTime, Utc};
use chrono_tz::Tz;
use log::warn;
use studbud_core::time::local_to_utc;
use studbud_core::{DailyPlan, StudySchedule};

pub struct CalendarEvent {
    pub start_utc: DateTime<Utc>,
    pub end_utc: DateTime<Utc>,
    pub summary: String,
    pub description: String,
}

/// Lay each study day's tasks out back to back from `start_time` (local).
///
/// Break days and revision days produce no events. A start time repeated by
/// a DST fall-back uses its first occurrence; a day whose start time is
/// skipped by spring-forward gets no events.
pub fn schedule_to_timeblocks(
    schedule: &StudySchedule,
    start_time: NaiveTime,
    tz: Tz,
    prefix: &str,
) -> Vec<CalendarEvent> {
    let mut events = Vec::new();

    for (date, plan) in schedule.iter() {
        let DailyPlan::Study(tasks) = plan else { continue };
        if tasks.is_empty() {
            continue;
        }

        let Some(mut cursor) = local_to_utc(*date, start_time, tz) else {
            warn!(
                "{date}: {} does not exist in {tz} (DST); {} task(s) left out of the calendar",
                start_time.format("%H:%M"),
                tasks.len()
            );
            continue;
        };
        for t in tasks {
            let end = cursor + Duration::minutes(i64::from(t.duration()));
            events.push(CalendarEvent {
                start_utc: cursor,
                end_utc: end,
                summary: format!("{}{} - {}", prefix, t.subject, t.topic),
                description: format!(
                    "Subject: {}\nTopic: {}\nPriority: {}\nMinutes: {}\n",
                    t.subject,
                    t.topic,
                    t.priority,
                    t.duration()
                ),
            });
            cursor = end;
        }
    }

    events
}

/// Emit a minimal ICS calendar containing VEVENT blocks.
///
/// DTSTART/DTEND are UTC.
pub fn events_to_ics(events: &[CalendarEvent]) -> String {
    let mut s = String::new();
    s.push_str("BEGIN:VCALENDAR\nVERSION:2.0\nPRODID:-//Studbud//EN\n");

    for (i, e) in events.iter().enumerate() {
        let dtstart = e.start_utc.format("%Y%m%dT%H%M%SZ");
        let dtend = e.end_utc.format("%Y%m%dT%H%M%SZ");

        s.push_str("BEGIN:VEVENT\n");
        s.push_str(&format!("UID:studbud-{}-{}@studbud\n", dtstart, i));
        s.push_str(&format!("DTSTART:{}\n", dtstart));
        s.push_str(&format!("DTEND:{}\n", dtend));
        s.push_str(&format!("SUMMARY:{}\n", escape_ics(&e.summary)));
        s.push_str(&format!("DESCRIPTION:{}\n", escape_ics(&e.description)));
        s.push_str("END:VEVENT\n");
    }

    s.push_str("END:VCALENDAR\n");
    s
}

fn escape_ics(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('\n', "\\n")
        .replace(',', "\\,")
        .replace(';', "\\;")
}
