use chrono::prelude::*;
use chrono_tz::Tz;

/// Parses `YYYY-MM-DD`. Month and day may omit the leading zero
/// (`2024-7-1`), the year has to be within 1970 - 2100.
pub fn parse_date(datestr: &str) -> anyhow::Result<NaiveDate> {
    let parts = datestr.trim().split('-').collect::<Vec<_>>();
    if parts.len() != 3 {
        return Err(anyhow::Error::msg(datestr.to_string()));
    }
    let year = parts[0].parse::<i32>();
    let month = parts[1].parse::<u32>();
    let day = parts[2].parse::<u32>();

    let (year, month, day) = match (year, month, day) {
        (Ok(year), Ok(month), Ok(day)) => (year, month, day),
        _ => return Err(anyhow::Error::msg(datestr.to_string())),
    };
    if !(1970..=2100).contains(&year) {
        return Err(anyhow::Error::msg(datestr.to_string()));
    }

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| anyhow::Error::msg(datestr.to_string()))
}

/// The calendar date at `timestamp_millis` as seen in the given timezone
pub fn date_in_timezone(timestamp_millis: i64, tz: &Tz) -> NaiveDate {
    let utc = Utc
        .timestamp_millis_opt(timestamp_millis)
        .single()
        .unwrap_or_else(Utc::now);
    utc.with_timezone(tz).date_naive()
}

/// Number of days from `from` until `to`, negative if `to` is before `from`
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

pub fn format_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
