use chrono::{Duration, NaiveDateTime, NaiveTime};
use regex::Regex;
use thiserror::Error;

/// Clock time used when the input carries no time cue at all.
const DEFAULT_CLOCK_TIME: (u32, u32) = (9, 0);

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("Could not find a task in the reminder request. Try something like: 'Remind me to call John tomorrow at 5pm'")]
    NoTask,
    #[error("A reminder needs both a message and a recipient")]
    EmptyInput,
}

/// Successful outcome of parsing a reminder request.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedReminder {
    /// The task phrase, trimmed of surrounding whitespace.
    pub task: String,
    /// When to remind, at minute precision (seconds are always zero).
    pub target_time: NaiveDateTime,
}

/// Parses a free-form reminder request like
/// "remind me to call mom tomorrow at 5pm" into a task and a target time,
/// resolved against `reference_time`.
///
/// The date and the clock time are resolved in two independent passes: the
/// date pass picks a day relative to `reference_time` ("tomorrow", "next
/// week", or a 1-hour-ahead default when no date cue is present) and the
/// clock pass then unconditionally overwrites the time-of-day (09:00 when no
/// time cue is found). Explicit numeric dates such as "3/15" are not
/// understood and fall through to the 1-hour-ahead default.
pub fn parse(input: &str, reference_time: NaiveDateTime) -> Result<ParsedReminder, ParseError> {
    if input.trim().is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let task = extract_task(input)?;
    let date = resolve_date(input, reference_time);
    let (hour, minute) = resolve_clock_time(input);

    let clock = NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_else(|| date.time());
    let target_time = NaiveDateTime::new(date.date(), clock);

    Ok(ParsedReminder { task, target_time })
}

/// The task is everything between the trigger phrase and the first
/// date/time keyword. When no trailing keyword exists, a looser fallback
/// captures everything after the first standalone "to".
fn extract_task(input: &str) -> Result<String, ParseError> {
    let primary = Regex::new(r"(?i)remind\s+(?:me\s+)?to\s+(.+?)\s+(?:on|at|tomorrow|next)\b")
        .expect("valid task pattern");
    let fallback = Regex::new(r"(?i)\bto\s+(.+)").expect("valid fallback task pattern");

    let task = primary
        .captures(input)
        .or_else(|| fallback.captures(input))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .ok_or(ParseError::NoTask)?;

    if task.is_empty() {
        return Err(ParseError::NoTask);
    }
    Ok(task)
}

/// Picks the calendar day, first cue wins. "next week" and any other
/// "next ..." both resolve one week out; weekdays are not resolved.
fn resolve_date(input: &str, reference_time: NaiveDateTime) -> NaiveDateTime {
    let input = input.to_lowercase();
    if input.contains("tomorrow") {
        reference_time + Duration::days(1)
    } else if input.contains("next") {
        reference_time + Duration::days(7)
    } else {
        // No date cue: a conservative near-term default.
        reference_time + Duration::hours(1)
    }
}

/// Scans anywhere in the input for an `H[:MM] [am|pm]` pattern. The meridiem
/// is optional, so a bare 1-2 digit number counts as an hour cue. Values the
/// clock cannot represent fall back to the default.
fn resolve_clock_time(input: &str) -> (u32, u32) {
    let pattern = Regex::new(r"(?i)\b(\d{1,2})(?::(\d{2}))?\s*(am|pm)?\b")
        .expect("valid clock time pattern");

    let caps = match pattern.captures(input) {
        Some(caps) => caps,
        None => return DEFAULT_CLOCK_TIME,
    };

    let hour: u32 = match caps[1].parse() {
        Ok(hour) => hour,
        Err(_) => return DEFAULT_CLOCK_TIME,
    };
    let minute: u32 = caps
        .get(2)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0);

    let meridiem = caps.get(3).map(|m| m.as_str().to_lowercase());
    let hour = match meridiem.as_deref() {
        Some("pm") if hour < 12 => hour + 12,
        Some("am") if hour == 12 => 0,
        _ => hour,
    };

    if hour > 23 || minute > 59 {
        return DEFAULT_CLOCK_TIME;
    }
    (hour, minute)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn reference() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    fn datetime(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    }

    #[test]
    fn parses_tomorrow_with_pm_time() {
        let parsed = parse("remind me to call mom tomorrow at 5pm", reference()).unwrap();
        assert_eq!(parsed.task, "call mom");
        assert_eq!(parsed.target_time, datetime(2024, 1, 2, 17, 0));
        assert_eq!(
            parsed.target_time.format(crate::TIME_FORMAT).to_string(),
            "2024-01-02 17:00"
        );
    }

    #[test]
    fn no_cues_defaults_to_one_hour_ahead_date_and_default_clock() {
        // The date pass moves one hour ahead, then the clock pass overwrites
        // the time-of-day with the 09:00 default since no digits appear.
        let parsed = parse("remind me to buy milk", reference()).unwrap();
        assert_eq!(parsed.task, "buy milk");
        assert_eq!(parsed.target_time, datetime(2024, 1, 1, 9, 0));
    }

    #[test]
    fn one_hour_default_can_roll_the_date() {
        let late = datetime(2024, 1, 1, 23, 30);
        let parsed = parse("remind me to check the oven", late).unwrap();
        assert_eq!(parsed.target_time, datetime(2024, 1, 2, 9, 0));
    }

    #[test]
    fn missing_trigger_phrase_is_no_task() {
        assert_eq!(parse("call mom", reference()), Err(ParseError::NoTask));
    }

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(parse("   ", reference()), Err(ParseError::EmptyInput));
    }

    #[test]
    fn next_week_resolves_seven_days_out() {
        let parsed = parse("remind me to water plants next week at 8am", reference()).unwrap();
        assert_eq!(parsed.task, "water plants");
        assert_eq!(parsed.target_time, datetime(2024, 1, 8, 8, 0));
    }

    #[test]
    fn next_weekday_is_deliberately_coarse() {
        // "next friday" gets no weekday resolution, just one week out.
        let parsed = parse("remind me to submit report next friday", reference()).unwrap();
        assert_eq!(parsed.task, "submit report");
        assert_eq!(parsed.target_time, datetime(2024, 1, 8, 9, 0));
    }

    #[test]
    fn twelve_hour_conversion_edge_cases() {
        let noon = parse("remind me to eat lunch tomorrow at 12pm", reference()).unwrap();
        assert_eq!(noon.target_time, datetime(2024, 1, 2, 12, 0));

        let midnight = parse("remind me to sleep tomorrow at 12am", reference()).unwrap();
        assert_eq!(midnight.target_time, datetime(2024, 1, 2, 0, 0));
    }

    #[test]
    fn minutes_are_parsed() {
        let parsed = parse("remind me to join standup tomorrow at 9:45am", reference()).unwrap();
        assert_eq!(parsed.task, "join standup");
        assert_eq!(parsed.target_time, datetime(2024, 1, 2, 9, 45));
    }

    #[test]
    fn twenty_four_hour_clock_is_accepted() {
        let parsed = parse("remind me to call back tomorrow at 17:30", reference()).unwrap();
        assert_eq!(parsed.target_time, datetime(2024, 1, 2, 17, 30));
    }

    #[test]
    fn numeric_dates_are_ignored_but_their_digits_are_clock_cues() {
        // "3/15" never reaches the date pass (1-hour default applies), yet
        // the clock scan picks up the bare "3" as an hour.
        let parsed = parse("remind me to pay rent on 3/15", reference()).unwrap();
        assert_eq!(parsed.task, "pay rent");
        assert_eq!(parsed.target_time, datetime(2024, 1, 1, 3, 0));
    }

    #[test]
    fn unrepresentable_hour_falls_back_to_default_clock() {
        let parsed = parse("remind me to stretch at 99", reference()).unwrap();
        assert_eq!(parsed.target_time.time(), NaiveTime::from_hms_opt(9, 0, 0).unwrap());
    }

    #[test]
    fn trigger_without_me_works() {
        let parsed = parse("remind to stand up tomorrow at 2pm", reference()).unwrap();
        assert_eq!(parsed.task, "stand up");
        assert_eq!(parsed.target_time, datetime(2024, 1, 2, 14, 0));
    }

    #[test]
    fn task_is_trimmed() {
        let parsed = parse("Remind me to   walk the dog  ", reference()).unwrap();
        assert_eq!(parsed.task, "walk the dog");
    }
}
