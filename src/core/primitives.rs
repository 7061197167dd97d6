use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::error::{ChartError, ChartResult};

pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Format used both for parsing date column names and for tooltip labels.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// UTC midnight of `date` as fractional unix seconds.
#[must_use]
pub fn date_to_unix_seconds(date: NaiveDate) -> f64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp() as f64
}

/// Maps unix seconds back to a UTC timestamp.
pub fn unix_seconds_to_datetime(seconds: f64) -> ChartResult<DateTime<Utc>> {
    if !seconds.is_finite() {
        return Err(ChartError::InvalidData(
            "timestamp must be finite".to_owned(),
        ));
    }
    let millis = (seconds * 1000.0).round() as i64;
    DateTime::<Utc>::from_timestamp_millis(millis).ok_or_else(|| {
        ChartError::InvalidData(format!("timestamp {seconds} is out of range"))
    })
}

/// Strict `YYYY-MM-DD` parse.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text, DATE_FORMAT).ok()
}

#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
