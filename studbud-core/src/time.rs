//! Time utilities: date/time parsing, weekday names, timezone-aware "today".

use anyhow::Result;
use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, TimeZone, Utc, Weekday};
use chrono_tz::Tz;

/// English weekday name, independent of locale.
pub fn weekday_name(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Parse "YYYY-MM-DD".
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| anyhow::anyhow!("invalid date '{s}': expected YYYY-MM-DD ({e})"))
}

/// Parse "HH:MM".
pub fn parse_time(s: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M")
        .map_err(|e| anyhow::anyhow!("invalid start time '{s}': expected HH:MM ({e})"))
}

pub fn parse_tz(tz: &str) -> Result<Tz> {
    tz.parse()
        .map_err(|_| anyhow::anyhow!("invalid timezone: {tz}"))
}

/// Calendar date of `now` as observed in an IANA tz like "America/Chicago".
pub fn today_in(tz: &str, now: DateTime<Utc>) -> Result<NaiveDate> {
    let tz = parse_tz(tz)?;
    Ok(now.with_timezone(&tz).date_naive())
}

/// Local wall time on `date` in `tz`, returned as UTC.
///
/// A repeated (fall-back) time resolves to its earliest instant; a skipped
/// (spring-forward) time has no instant and yields `None`.
pub fn local_to_utc(date: NaiveDate, time: NaiveTime, tz: Tz) -> Option<DateTime<Utc>> {
    tz.from_local_datetime(&date.and_time(time))
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekday_names_are_english() {
        // 2026-10-19 is a Monday
        let d = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        assert_eq!(weekday_name(d), "Monday");
        assert_eq!(weekday_name(d + chrono::Duration::days(6)), "Sunday");
    }

    #[test]
    fn parse_date_rejects_garbage() {
        assert!(parse_date("2026-02-30").is_err());
        assert!(parse_date("20/02/2026").is_err());
        assert_eq!(
            parse_date(" 2026-02-20 ").unwrap(),
            NaiveDate::from_ymd_opt(2026, 2, 20).unwrap()
        );
    }

    #[test]
    fn parse_time_hh_mm() {
        assert_eq!(parse_time("09:30").unwrap(), NaiveTime::from_hms_opt(9, 30, 0).unwrap());
        assert!(parse_time("25:00").is_err());
        let err = parse_time("9am").unwrap_err().to_string();
        assert!(err.contains("expected HH:MM"));
    }

    #[test]
    fn today_respects_timezone() {
        // 03:00 UTC is still the previous evening in Chicago.
        let now = Utc.with_ymd_and_hms(2026, 2, 21, 3, 0, 0).unwrap();
        assert_eq!(today_in("UTC", now).unwrap(), NaiveDate::from_ymd_opt(2026, 2, 21).unwrap());
        assert_eq!(
            today_in("America/Chicago", now).unwrap(),
            NaiveDate::from_ymd_opt(2026, 2, 20).unwrap()
        );
        assert!(today_in("Mars/Olympus", now).is_err());
    }

    #[test]
    fn chicago_local_to_utc() {
        // Feb is CST (UTC-6)
        let d = NaiveDate::from_ymd_opt(2026, 2, 20).unwrap();
        let t = NaiveTime::from_hms_opt(23, 59, 0).unwrap();
        let utc = local_to_utc(d, t, parse_tz("America/Chicago").unwrap()).unwrap();
        assert_eq!(utc.to_rfc3339(), "2026-02-21T05:59:00+00:00");
    }

    #[test]
    fn dst_transitions_resolve_or_skip() {
        let chicago = parse_tz("America/Chicago").unwrap();
        let t = NaiveTime::from_hms_opt(1, 30, 0).unwrap();

        // 01:30 happens twice on 2026-11-01; take the CDT (UTC-5) one.
        let fall_back = NaiveDate::from_ymd_opt(2026, 11, 1).unwrap();
        let utc = local_to_utc(fall_back, t, chicago).unwrap();
        assert_eq!(utc.to_rfc3339(), "2026-11-01T06:30:00+00:00");

        // 02:30 never happens on 2026-03-08.
        let spring = NaiveDate::from_ymd_opt(2026, 3, 8).unwrap();
        let skipped = NaiveTime::from_hms_opt(2, 30, 0).unwrap();
        assert!(local_to_utc(spring, skipped, chicago).is_none());
    }
}
