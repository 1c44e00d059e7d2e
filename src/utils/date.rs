use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, TimeDelta};

/// Day 0 of the spreadsheet serial date system.
pub const EXCEL_EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(1899, 12, 30) {
    Some(d) => d,
    None => panic!("invalid serial date epoch"),
};

/// Display format used in the timeline, e.g. `5-Jan-2024`.
pub const DISPLAY_FORMAT: &str = "%-d-%b-%Y";

/// Number format applied to date cells written back to the sheet.
pub const SHEET_DATE_FORMAT: &str = "dd-mmm-yyyy";

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Calendar date for a day count. `None` when outside chrono's range.
pub fn day_count_to_date(days: i64) -> Option<NaiveDate> {
    EXCEL_EPOCH.checked_add_signed(TimeDelta::try_days(days)?)
}

pub fn date_to_day_count(date: NaiveDate) -> i64 {
    date.signed_duration_since(EXCEL_EPOCH).num_days()
}

/// Whole-day part of a serial value; the time-of-day fraction is dropped.
pub fn serial_to_day_count(serial: f64) -> Option<i64> {
    if !serial.is_finite() {
        return None;
    }
    let days = serial.floor();
    if days.abs() > i32::MAX as f64 {
        return None;
    }
    Some(days as i64)
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

/// Format a day count for display; out-of-range counts render empty.
pub fn format_day_count(days: i64) -> String {
    day_count_to_date(days).map(format_date).unwrap_or_default()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Parse a `YYYY-MM-DD` date typed by the user.
pub fn parse_user_date(s: &str) -> AppResult<NaiveDate> {
    parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}
