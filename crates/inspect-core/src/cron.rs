//! Cron expression parsing and description
//!
//! Handles classic 5-field expressions (minute, hour, day-of-month, month,
//! day-of-week) with `*`, steps, ranges, lists and month/weekday names.
//! When both day fields are restricted they combine with OR, matching
//! Vixie cron. Descriptions are plain English for the cron page.

use crate::error::InspectError;
use chrono::{DateTime, Datelike, Duration, NaiveTime, TimeZone, Timelike, Utc};
use std::collections::BTreeSet;

const MONTH_NAMES: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];
const DAY_NAMES: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];

const MONTH_FULL: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];
const DAY_FULL: [&str; 7] = [
    "Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday",
];

/// How a field was written, for description purposes
#[derive(Debug, Clone, PartialEq, Eq)]
enum FieldKind {
    Any,
    Step(u8),
    Values(Vec<u8>),
}

#[derive(Debug, Clone)]
struct Field {
    kind: FieldKind,
    /// Materialized set of allowed values
    allowed: BTreeSet<u8>,
}

impl Field {
    fn contains(&self, value: u8) -> bool {
        self.allowed.contains(&value)
    }

    fn is_any(&self) -> bool {
        self.kind == FieldKind::Any
    }
}

/// A parsed 5-field cron expression
#[derive(Debug, Clone)]
pub struct CronSchedule {
    minute: Field,
    hour: Field,
    day_of_month: Field,
    month: Field,
    day_of_week: Field,
}

impl CronSchedule {
    pub fn parse(expression: &str) -> Result<Self, InspectError> {
        let fields: Vec<&str> = expression.split_whitespace().collect();
        if fields.len() != 5 {
            return Err(InspectError::Cron(format!(
                "Expected 5 fields, found {}",
                fields.len()
            )));
        }

        Ok(Self {
            minute: parse_field(fields[0], 0, 59, None)?,
            hour: parse_field(fields[1], 0, 23, None)?,
            day_of_month: parse_field(fields[2], 1, 31, None)?,
            month: parse_field(fields[3], 1, 12, Some(&MONTH_NAMES))?,
            day_of_week: parse_field(fields[4], 0, 7, Some(&DAY_NAMES))?,
        })
    }

    /// Whether the schedule fires at the given instant (second precision
    /// is ignored; cron is minute-granular)
    pub fn matches(&self, at: DateTime<Utc>) -> bool {
        self.minute.contains(at.minute() as u8)
            && self.hour.contains(at.hour() as u8)
            && self.month.contains(at.month() as u8)
            && self.matches_day(at)
    }

    /// Vixie semantics: both day fields restricted means either may match
    fn matches_day(&self, at: DateTime<Utc>) -> bool {
        let dom = self.day_of_month.contains(at.day() as u8);
        let dow = self
            .day_of_week
            .contains(at.weekday().num_days_from_sunday() as u8);
        match (self.day_of_month.is_any(), self.day_of_week.is_any()) {
            (true, true) => true,
            (false, true) => dom,
            (true, false) => dow,
            (false, false) => dom || dow,
        }
    }

    pub fn describe(&self) -> String {
        let mut parts = vec![self.describe_time()];
        if let Some(day) = self.describe_day() {
            parts.push(day);
        }
        if let Some(month) = self.describe_month() {
            parts.push(month);
        }
        parts.join(", ")
    }

    fn describe_time(&self) -> String {
        match (&self.minute.kind, &self.hour.kind) {
            (FieldKind::Any, FieldKind::Any) => "Every minute".to_string(),
            (FieldKind::Step(n), FieldKind::Any) => format!("Every {} minutes", n),
            (FieldKind::Any, FieldKind::Step(n)) => {
                format!("Every minute, every {} hours", n)
            }
            (FieldKind::Any, FieldKind::Values(hours)) => {
                format!("Every minute during hour {}", list_numbers(hours))
            }
            (FieldKind::Values(minutes), FieldKind::Any) => {
                format!("At minute {} of every hour", list_numbers(minutes))
            }
            (FieldKind::Step(m), FieldKind::Step(h)) => {
                format!("Every {} minutes, every {} hours", m, h)
            }
            (FieldKind::Step(n), FieldKind::Values(hours)) => {
                format!("Every {} minutes during hour {}", n, list_numbers(hours))
            }
            (FieldKind::Values(minutes), FieldKind::Step(n)) => {
                format!("At minute {}, every {} hours", list_numbers(minutes), n)
            }
            (FieldKind::Values(minutes), FieldKind::Values(hours)) => {
                if minutes.len() == 1 && hours.len() == 1 {
                    format!("At {:02}:{:02}", hours[0], minutes[0])
                } else {
                    format!(
                        "At minute {} past hour {}",
                        list_numbers(minutes),
                        list_numbers(hours)
                    )
                }
            }
        }
    }

    fn describe_day(&self) -> Option<String> {
        let dom = match &self.day_of_month.kind {
            FieldKind::Any => None,
            FieldKind::Step(n) => Some(format!("every {} days of the month", n)),
            FieldKind::Values(days) => Some(format!("on day {} of the month", list_numbers(days))),
        };
        let dow = match &self.day_of_week.kind {
            FieldKind::Any => None,
            FieldKind::Step(n) => Some(format!("every {} days of the week", n)),
            FieldKind::Values(days) => {
                let names: Vec<&str> = days.iter().map(|&d| DAY_FULL[d as usize % 7]).collect();
                Some(format!("on {}", list_words(&names)))
            }
        };
        match (dom, dow) {
            (Some(dom), Some(dow)) => Some(format!("{} and {}", dom, dow)),
            (Some(dom), None) => Some(dom),
            (None, Some(dow)) => Some(dow),
            (None, None) => None,
        }
    }

    fn describe_month(&self) -> Option<String> {
        match &self.month.kind {
            FieldKind::Any => None,
            FieldKind::Step(n) => Some(format!("every {} months", n)),
            FieldKind::Values(months) => {
                let names: Vec<&str> = months
                    .iter()
                    .map(|&m| MONTH_FULL[(m as usize) - 1])
                    .collect();
                Some(format!("in {}", list_words(&names)))
            }
        }
    }
}

/// "Every 15 minutes, on Monday, in January" for the given expression
pub fn describe_cron(expression: &str) -> Result<String, InspectError> {
    Ok(CronSchedule::parse(expression)?.describe())
}

/// The next `count` fire times strictly after `from`.
///
/// Gives up past a four-year horizon, which covers every satisfiable
/// 5-field schedule (including Feb 29 day-of-month restrictions).
pub fn next_occurrences(
    schedule: &CronSchedule,
    from: DateTime<Utc>,
    count: usize,
) -> Vec<DateTime<Utc>> {
    let mut out = Vec::with_capacity(count);
    if count == 0 {
        return out;
    }

    let start = (from + Duration::minutes(1))
        .with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(from);

    let mut date = start.date_naive();
    let horizon = date + Duration::days(4 * 366);

    while date <= horizon && out.len() < count {
        let month_ok = schedule.month.contains(date.month() as u8);
        if month_ok {
            for &hour in &schedule.hour.allowed {
                for &minute in &schedule.minute.allowed {
                    let Some(time) = NaiveTime::from_hms_opt(hour as u32, minute as u32, 0)
                    else {
                        continue;
                    };
                    let candidate = Utc.from_utc_datetime(&date.and_time(time));
                    if candidate >= start && schedule.matches(candidate) {
                        out.push(candidate);
                        if out.len() == count {
                            return out;
                        }
                    }
                }
            }
        }
        date += Duration::days(1);
    }
    out
}

fn parse_field(
    token: &str,
    min: u8,
    max: u8,
    names: Option<&[&str]>,
) -> Result<Field, InspectError> {
    // Day-of-week is the only field whose range reaches 7, an alias
    // for Sunday (0).
    let norm = |v: u8| if max == 7 && v == 7 { 0 } else { v };

    if token == "*" {
        return Ok(Field {
            kind: FieldKind::Any,
            allowed: (min..=max).map(norm).collect(),
        });
    }

    if let Some(step) = token.strip_prefix("*/") {
        let step: u8 = step
            .parse()
            .map_err(|_| InspectError::Cron(format!("Bad step in {:?}", token)))?;
        if step == 0 {
            return Err(InspectError::Cron("Step of 0".into()));
        }
        let allowed = (min..=max).step_by(step as usize).map(norm).collect();
        return Ok(Field { kind: FieldKind::Step(step), allowed });
    }

    let mut allowed = BTreeSet::new();
    for part in token.split(',') {
        let (range, step) = match part.split_once('/') {
            Some((range, step)) => {
                let step: u8 = step
                    .parse()
                    .map_err(|_| InspectError::Cron(format!("Bad step in {:?}", part)))?;
                if step == 0 {
                    return Err(InspectError::Cron("Step of 0".into()));
                }
                (range, step)
            }
            None => (part, 1),
        };

        let (lo, hi) = match range.split_once('-') {
            Some((lo, hi)) => (
                parse_value(lo, min, max, names)?,
                parse_value(hi, min, max, names)?,
            ),
            None => {
                let v = parse_value(range, min, max, names)?;
                (v, v)
            }
        };
        if lo > hi {
            return Err(InspectError::Cron(format!("Backwards range {:?}", range)));
        }
        allowed.extend((lo..=hi).step_by(step as usize).map(norm));
    }

    if allowed.is_empty() {
        return Err(InspectError::Cron(format!("Empty field {:?}", token)));
    }
    Ok(Field {
        kind: FieldKind::Values(allowed.iter().copied().collect()),
        allowed,
    })
}

fn parse_value(token: &str, min: u8, max: u8, names: Option<&[&str]>) -> Result<u8, InspectError> {
    let token = token.trim();
    if let Some(names) = names {
        let upper = token.to_uppercase();
        if let Some(index) = names.iter().position(|&n| n == upper) {
            // Name tables are 0-based for weekdays, 1-based for months
            return Ok(if max == 7 { index as u8 } else { index as u8 + 1 });
        }
    }
    let value: u8 = token
        .parse()
        .map_err(|_| InspectError::Cron(format!("Bad value {:?}", token)))?;
    if value < min || value > max {
        return Err(InspectError::Cron(format!(
            "{} out of range {}-{}",
            value, min, max
        )));
    }
    Ok(value)
}

fn list_numbers(values: &[u8]) -> String {
    let rendered: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    list_words(&rendered.iter().map(String::as_str).collect::<Vec<_>>())
}

fn list_words(words: &[&str]) -> String {
    match words {
        [] => String::new(),
        [only] => (*only).to_string(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    #[test]
    fn test_describe_every_minute() {
        assert_eq!(describe_cron("* * * * *").unwrap(), "Every minute");
    }

    #[test]
    fn test_describe_step_minutes() {
        assert_eq!(describe_cron("*/15 * * * *").unwrap(), "Every 15 minutes");
    }

    #[test]
    fn test_describe_step_minutes_and_hours() {
        assert_eq!(
            describe_cron("*/15 */2 * * *").unwrap(),
            "Every 15 minutes, every 2 hours"
        );
    }

    #[test]
    fn test_describe_fixed_time() {
        assert_eq!(describe_cron("30 14 * * *").unwrap(), "At 14:30");
    }

    #[test]
    fn test_describe_weekday_and_month() {
        assert_eq!(
            describe_cron("0 9 * JAN MON-FRI").unwrap(),
            "At 09:00, on Monday, Tuesday, Wednesday, Thursday and Friday, in January"
        );
    }

    #[test]
    fn test_describe_day_of_month() {
        assert_eq!(
            describe_cron("0 0 1 * *").unwrap(),
            "At 00:00, on day 1 of the month"
        );
    }

    #[test]
    fn test_describe_minute_of_every_hour() {
        assert_eq!(
            describe_cron("5 * * * *").unwrap(),
            "At minute 5 of every hour"
        );
    }

    #[test]
    fn test_rejects_wrong_field_count() {
        assert!(describe_cron("* * * *").is_err());
        assert!(describe_cron("* * * * * *").is_err());
    }

    #[test]
    fn test_rejects_out_of_range_values() {
        assert!(CronSchedule::parse("60 * * * *").is_err());
        assert!(CronSchedule::parse("* 24 * * *").is_err());
        assert!(CronSchedule::parse("* * 32 * *").is_err());
        assert!(CronSchedule::parse("* * * 13 *").is_err());
        assert!(CronSchedule::parse("* * * * 8").is_err());
    }

    #[test]
    fn test_rejects_zero_step() {
        assert!(CronSchedule::parse("*/0 * * * *").is_err());
    }

    #[test]
    fn test_dow_seven_is_sunday() {
        let sched = CronSchedule::parse("0 0 * * 7").unwrap();
        // 2026-08-30 is a Sunday
        assert!(sched.matches(utc(2026, 8, 30, 0, 0)));
        assert!(!sched.matches(utc(2026, 8, 31, 0, 0)));
    }

    #[test]
    fn test_next_occurrences_hourly() {
        let sched = CronSchedule::parse("0 * * * *").unwrap();
        let from = utc(2026, 1, 1, 10, 30);
        let next = next_occurrences(&sched, from, 3);
        assert_eq!(
            next,
            vec![
                utc(2026, 1, 1, 11, 0),
                utc(2026, 1, 1, 12, 0),
                utc(2026, 1, 1, 13, 0),
            ]
        );
    }

    #[test]
    fn test_next_occurrence_strictly_after_from() {
        let sched = CronSchedule::parse("30 10 * * *").unwrap();
        let from = utc(2026, 1, 1, 10, 30);
        let next = next_occurrences(&sched, from, 1);
        assert_eq!(next, vec![utc(2026, 1, 2, 10, 30)]);
    }

    #[test]
    fn test_next_occurrences_monthly_boundary() {
        let sched = CronSchedule::parse("0 0 1 * *").unwrap();
        let from = utc(2026, 1, 15, 12, 0);
        let next = next_occurrences(&sched, from, 2);
        assert_eq!(next, vec![utc(2026, 2, 1, 0, 0), utc(2026, 3, 1, 0, 0)]);
    }

    #[test]
    fn test_dom_dow_or_semantics() {
        // Day 15 OR Monday: both should appear
        let sched = CronSchedule::parse("0 0 15 * 1").unwrap();
        let from = utc(2026, 6, 10, 0, 0);
        let next = next_occurrences(&sched, from, 3);
        // 2026-06-15 is a Monday; then 2026-06-22, 2026-06-29 (Mondays)
        assert_eq!(
            next,
            vec![
                utc(2026, 6, 15, 0, 0),
                utc(2026, 6, 22, 0, 0),
                utc(2026, 6, 29, 0, 0),
            ]
        );
    }

    #[test]
    fn test_leap_day_schedule_found() {
        let sched = CronSchedule::parse("0 0 29 2 *").unwrap();
        let from = utc(2026, 1, 1, 0, 0);
        let next = next_occurrences(&sched, from, 1);
        assert_eq!(next, vec![utc(2028, 2, 29, 0, 0)]);
    }

    #[test]
    fn test_unsatisfiable_schedule_returns_empty() {
        // February 31st never exists
        let sched = CronSchedule::parse("0 0 31 2 *").unwrap();
        let next = next_occurrences(&sched, utc(2026, 1, 1, 0, 0), 1);
        assert!(next.is_empty());
    }

    #[test]
    fn test_ranges_with_steps() {
        let sched = CronSchedule::parse("0-30/10 * * * *").unwrap();
        assert!(sched.matches(utc(2026, 1, 1, 5, 0)));
        assert!(sched.matches(utc(2026, 1, 1, 5, 10)));
        assert!(sched.matches(utc(2026, 1, 1, 5, 30)));
        assert!(!sched.matches(utc(2026, 1, 1, 5, 15)));
        assert!(!sched.matches(utc(2026, 1, 1, 5, 40)));
    }

    #[test]
    fn test_month_names_case_insensitive() {
        let sched = CronSchedule::parse("0 0 1 jan *").unwrap();
        assert!(sched.matches(utc(2026, 1, 1, 0, 0)));
        assert!(!sched.matches(utc(2026, 2, 1, 0, 0)));
    }
}
