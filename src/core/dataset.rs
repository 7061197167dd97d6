use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::primitives::date_to_unix_seconds;
use crate::error::{ChartError, ChartResult};

/// One value of one series at one time point. `None` marks a missing sample.
pub type Sample = Option<f64>;

/// Named sequence of samples aligned with the dataset's [`TimeAxis`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    pub alt_name: Option<String>,
    pub transportation_type: String,
    pub values: Vec<Sample>,
}

impl Series {
    #[must_use]
    pub fn new(name: impl Into<String>, values: Vec<Sample>) -> Self {
        Self {
            name: name.into(),
            alt_name: None,
            transportation_type: String::new(),
            values,
        }
    }

    /// Sets the alternate name; empty strings count as absent.
    #[must_use]
    pub fn with_alt_name(mut self, alt_name: impl Into<String>) -> Self {
        let alt_name = alt_name.into();
        self.alt_name = (!alt_name.is_empty()).then_some(alt_name);
        self
    }

    #[must_use]
    pub fn with_transportation_type(mut self, transportation_type: impl Into<String>) -> Self {
        self.transportation_type = transportation_type.into();
        self
    }

    #[must_use]
    pub fn value_at(&self, index: usize) -> Sample {
        self.values.get(index).copied().flatten()
    }
}

/// Strictly increasing dates shared by every series.
///
/// Serialized as the bare date list; deserialization goes through
/// [`TimeAxis::new`], so the ordering check and the seconds cache always hold.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<NaiveDate>", into = "Vec<NaiveDate>")]
pub struct TimeAxis {
    dates: Vec<NaiveDate>,
    seconds: Vec<f64>,
}

impl TimeAxis {
    pub fn new(dates: Vec<NaiveDate>) -> ChartResult<Self> {
        if let Some(pair) = dates.windows(2).find(|pair| pair[0] >= pair[1]) {
            return Err(ChartError::InvalidData(format!(
                "time axis must be strictly increasing: {} is followed by {}",
                pair[0], pair[1]
            )));
        }
        let seconds = dates.iter().copied().map(date_to_unix_seconds).collect();
        Ok(Self { dates, seconds })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    #[must_use]
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Unix seconds at UTC midnight, index-aligned with [`Self::dates`].
    #[must_use]
    pub fn seconds(&self) -> &[f64] {
        &self.seconds
    }

    #[must_use]
    pub fn date(&self, index: usize) -> Option<NaiveDate> {
        self.dates.get(index).copied()
    }

    #[must_use]
    pub fn seconds_at(&self, index: usize) -> Option<f64> {
        self.seconds.get(index).copied()
    }

    /// First and last time point in unix seconds.
    #[must_use]
    pub fn bounds(&self) -> Option<(f64, f64)> {
        Some((*self.seconds.first()?, *self.seconds.last()?))
    }
}

/// Immutable time axis plus series, built once from source rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DatasetParts")]
pub struct Dataset {
    time_axis: TimeAxis,
    series: Vec<Series>,
}

#[derive(Deserialize)]
struct DatasetParts {
    time_axis: TimeAxis,
    series: Vec<Series>,
}

impl TryFrom<Vec<NaiveDate>> for TimeAxis {
    type Error = ChartError;

    fn try_from(dates: Vec<NaiveDate>) -> ChartResult<Self> {
        Self::new(dates)
    }
}

impl From<TimeAxis> for Vec<NaiveDate> {
    fn from(axis: TimeAxis) -> Self {
        axis.dates
    }
}

impl TryFrom<DatasetParts> for Dataset {
    type Error = ChartError;

    fn try_from(parts: DatasetParts) -> ChartResult<Self> {
        Self::new(parts.time_axis, parts.series)
    }
}

impl Dataset {
    /// Builds a dataset, rejecting series whose length differs from the axis.
    pub fn new(time_axis: TimeAxis, series: Vec<Series>) -> ChartResult<Self> {
        if let Some(bad) = series.iter().find(|s| s.values.len() != time_axis.len()) {
            return Err(ChartError::InvalidData(format!(
                "series `{}` has {} samples, time axis has {}",
                bad.name,
                bad.values.len(),
                time_axis.len()
            )));
        }
        Ok(Self { time_axis, series })
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn time_axis(&self) -> &TimeAxis {
        &self.time_axis
    }

    #[must_use]
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Global min/max across every defined sample of every series.
    #[must_use]
    pub fn value_extent(&self) -> Option<(f64, f64)> {
        extent(
            self.series
                .iter()
                .flat_map(|series| series.values.iter().copied().flatten()),
        )
    }
}

fn extent(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((min, max)) => Some((min.min(v), max.max(v))),
        })
}
