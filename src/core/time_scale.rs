use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::core::primitives::{SECONDS_PER_DAY, date_to_unix_seconds, unix_seconds_to_datetime};
use crate::core::{LinearScale, PixelRange, TimeAxis};
use crate::error::ChartResult;

/// Calendar step between time-axis ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeTickInterval {
    Days(u32),
    Week,
    Months(u32),
    Years(u32),
}

impl TimeTickInterval {
    /// Candidate intervals, shortest first.
    pub const LADDER: [Self; 8] = [
        Self::Days(1),
        Self::Days(2),
        Self::Week,
        Self::Months(1),
        Self::Months(3),
        Self::Years(1),
        Self::Years(5),
        Self::Years(10),
    ];

    /// Approximate length in seconds, used only to choose an interval.
    #[must_use]
    pub fn approx_seconds(self) -> f64 {
        match self {
            Self::Days(n) => f64::from(n) * SECONDS_PER_DAY,
            Self::Week => 7.0 * SECONDS_PER_DAY,
            Self::Months(n) => f64::from(n) * 30.0 * SECONDS_PER_DAY,
            Self::Years(n) => f64::from(n) * 365.0 * SECONDS_PER_DAY,
        }
    }

    /// Picks the ladder entry closest (by ratio) to `span / count`.
    #[must_use]
    pub fn for_span(span_seconds: f64, count: usize) -> Self {
        if count == 0 || !span_seconds.is_finite() || span_seconds <= 0.0 {
            return Self::LADDER[0];
        }
        let target = span_seconds / count as f64;
        let mut previous = Self::LADDER[0];
        if target <= previous.approx_seconds() {
            return previous;
        }
        for interval in Self::LADDER.into_iter().skip(1) {
            let seconds = interval.approx_seconds();
            if target <= seconds {
                return if target / previous.approx_seconds() < seconds / target {
                    previous
                } else {
                    interval
                };
            }
            previous = interval;
        }
        previous
    }

    #[must_use]
    pub fn contains(self, date: NaiveDate) -> bool {
        match self {
            Self::Days(n) => date.day0() % n == 0,
            Self::Week => date.weekday() == Weekday::Sun,
            Self::Months(n) => date.day() == 1 && date.month0() % n == 0,
            Self::Years(n) => {
                date.ordinal() == 1 && date.year().rem_euclid(n.max(1) as i32) == 0
            }
        }
    }
}

/// Time axis model mapping unix seconds onto a horizontal pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    linear: LinearScale,
}

impl TimeScale {
    pub fn new(time_start: f64, time_end: f64, range: PixelRange) -> ChartResult<Self> {
        let (start, end) = widen_degenerate(time_start, time_end);
        Ok(Self {
            linear: LinearScale::new(start, end, range)?,
        })
    }

    /// Domain spans the first and last axis point. Empty and single-point axes
    /// get a one-day domain so inversion stays defined.
    pub fn from_axis(axis: &TimeAxis, range: PixelRange) -> ChartResult<Self> {
        let (start, end) = axis.bounds().unwrap_or((0.0, SECONDS_PER_DAY));
        Self::new(start, end, range)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        self.linear.domain()
    }

    #[must_use]
    pub fn range(self) -> PixelRange {
        self.linear.range()
    }

    pub fn time_to_pixel(self, time: f64) -> ChartResult<f64> {
        self.linear.domain_to_pixel(time)
    }

    pub fn date_to_pixel(self, date: NaiveDate) -> ChartResult<f64> {
        self.time_to_pixel(date_to_unix_seconds(date))
    }

    pub fn pixel_to_time(self, pixel: f64) -> ChartResult<f64> {
        self.linear.pixel_to_domain(pixel)
    }

    /// Calendar-aligned tick dates inside the domain.
    pub fn ticks(self, count: usize) -> ChartResult<Vec<NaiveDate>> {
        let (start, end) = self.domain();
        let interval = TimeTickInterval::for_span(end - start, count);

        let first = unix_seconds_to_datetime(start)?;
        let last = unix_seconds_to_datetime(end)?.date_naive();
        let mut date = first.date_naive();
        if date_to_unix_seconds(date) < start {
            date += Duration::days(1);
        }

        let mut ticks = Vec::new();
        while date <= last {
            if interval.contains(date) {
                ticks.push(date);
            }
            date += Duration::days(1);
        }
        Ok(ticks)
    }
}

/// Label for a time-axis tick: the year on Jan 1, the month name on the
/// first of a month, otherwise month and day.
#[must_use]
pub fn format_time_tick(date: NaiveDate) -> String {
    if date.ordinal() == 1 {
        date.format("%Y").to_string()
    } else if date.day() == 1 {
        date.format("%B").to_string()
    } else {
        date.format("%b %d").to_string()
    }
}

fn widen_degenerate(start: f64, end: f64) -> (f64, f64) {
    if start == end {
        let half = SECONDS_PER_DAY / 2.0;
        return (start - half, end + half);
    }
    (start.min(end), start.max(end))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn interval_choice_tracks_target_spacing() {
        let day = SECONDS_PER_DAY;
        assert_eq!(TimeTickInterval::for_span(10.0 * day, 10), TimeTickInterval::Days(1));
        assert_eq!(TimeTickInterval::for_span(70.0 * day, 10), TimeTickInterval::Week);
        assert_eq!(TimeTickInterval::for_span(300.0 * day, 10), TimeTickInterval::Months(1));
    }

    #[test]
    fn tick_labels_use_coarsest_boundary() {
        assert_eq!(format_time_tick(date(2021, 1, 1)), "2021");
        assert_eq!(format_time_tick(date(2020, 3, 1)), "March");
        assert_eq!(format_time_tick(date(2020, 3, 8)), "Mar 08");
    }

    #[test]
    fn weekly_ticks_land_on_sundays() {
        let axis = TimeAxis::new(vec![date(2020, 1, 13), date(2020, 3, 23)]).expect("axis");
        let scale = TimeScale::from_axis(&axis, PixelRange::new(0.0, 800.0)).expect("scale");
        let ticks = scale.ticks(10).expect("ticks");
        assert!(!ticks.is_empty());
        assert!(ticks.iter().all(|d| d.weekday() == Weekday::Sun));
        assert_eq!(ticks[0], date(2020, 1, 19));
    }
}
