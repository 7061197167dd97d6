use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::primitives::format_date;
use crate::core::{Dataset, Series, TimeScale, ValueScale};
use crate::error::ChartResult;
use crate::interaction::HighlightState;

/// Readout for the tracked sample: marker position plus label text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tooltip {
    pub series: usize,
    pub index: usize,
    pub date: NaiveDate,
    pub value: f64,
    /// Marker center in pixels.
    pub x: f64,
    pub y: f64,
    pub label: String,
}

impl Tooltip {
    /// Resolves the tooltip for `highlight`.
    ///
    /// Returns `None` when the highlight points past the dataset or at a
    /// missing sample.
    pub fn from_highlight(
        dataset: &Dataset,
        highlight: HighlightState,
        time_scale: TimeScale,
        value_scale: ValueScale,
    ) -> ChartResult<Option<Self>> {
        let Some(series) = dataset.series().get(highlight.series) else {
            return Ok(None);
        };
        let (Some(date), Some(value)) = (
            dataset.time_axis().date(highlight.index),
            series.value_at(highlight.index),
        ) else {
            return Ok(None);
        };

        Ok(Some(Self {
            series: highlight.series,
            index: highlight.index,
            date,
            value,
            x: time_scale.date_to_pixel(date)?,
            y: value_scale.value_to_pixel(value)?,
            label: format_tooltip_label(series, date, value),
        }))
    }
}

/// `"Name (Alt) - YYYY-MM-DD - value"`; the parenthesized part is dropped
/// when the series has no alternate name.
#[must_use]
pub fn format_tooltip_label(series: &Series, date: NaiveDate, value: f64) -> String {
    let alt = match series.alt_name.as_deref() {
        Some(alt) if !alt.is_empty() => format!(" ({alt})"),
        _ => String::new(),
    };
    format!("{}{alt} - {} - {value}", series.name, format_date(date))
}
