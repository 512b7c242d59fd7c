use crate::utils::error::{AgeError, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// 解析日期字串，只保留日期部分
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps and naive ISO datetimes. For
/// timestamps the calendar date as written is kept and the time of day dropped,
/// so no timezone conversion can move the day.
pub fn parse_date(field: &str, input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(invalid(field, input, "date is missing"));
    }

    match NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        Ok(date) => return Ok(date),
        Err(e) if !trimmed.contains('T') && !trimmed.contains(' ') => {
            return Err(invalid(field, input, &e.to_string()));
        }
        Err(_) => {}
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.date_naive());
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .map(|dt| dt.date())
        .ok_or_else(|| invalid(field, input, "expected YYYY-MM-DD or an ISO 8601 datetime"))
}

pub fn parse_optional_date(field: &str, input: Option<&str>) -> Result<Option<NaiveDate>> {
    match input {
        Some(value) if !value.trim().is_empty() => parse_date(field, value).map(Some),
        _ => Ok(None),
    }
}

/// Whole days from `start` to `end`; negative when `end` comes first.
pub fn whole_days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    end.signed_duration_since(start).num_days()
}

fn invalid(field: &str, value: &str, reason: &str) -> AgeError {
    AgeError::InvalidDate {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
