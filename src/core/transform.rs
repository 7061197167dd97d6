use chrono::NaiveDate;
use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::dataset::{Dataset, Sample, Series, TimeAxis};
use crate::core::primitives::parse_date;
use crate::error::{ChartError, ChartResult};

/// One source row: column name to raw cell text, in source column order.
pub type RawRow = IndexMap<String, String>;

pub const DEFAULT_DATE_COLUMN_PATTERN: &str = r"\d\d\d\d-\d\d-\d\d";
pub const DEFAULT_GEO_TYPE_FILTER: &str = "country/region";
pub const DEFAULT_TRANSPORTATION_TYPE_FILTER: &str = "driving";
/// Index baseline subtracted from every parsed cell.
pub const DEFAULT_VALUE_OFFSET: i64 = 100;

/// Source column names consumed by the transformer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetColumns {
    pub geo_type: String,
    pub transportation_type: String,
    pub name: String,
    pub alt_name: String,
}

impl Default for DatasetColumns {
    fn default() -> Self {
        Self {
            geo_type: "geo_type".to_owned(),
            transportation_type: "transportation_type".to_owned(),
            name: "region".to_owned(),
            alt_name: "alternative_name".to_owned(),
        }
    }
}

/// Row selection and reshaping options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    #[serde(alias = "dateColumnPattern")]
    pub date_column_pattern: String,
    #[serde(alias = "geoTypeFilter")]
    pub geo_type_filter: String,
    #[serde(alias = "transportationTypeFilter")]
    pub transportation_type_filter: String,
    #[serde(alias = "valueOffset")]
    pub value_offset: i64,
    pub columns: DatasetColumns,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            date_column_pattern: DEFAULT_DATE_COLUMN_PATTERN.to_owned(),
            geo_type_filter: DEFAULT_GEO_TYPE_FILTER.to_owned(),
            transportation_type_filter: DEFAULT_TRANSPORTATION_TYPE_FILTER.to_owned(),
            value_offset: DEFAULT_VALUE_OFFSET,
            columns: DatasetColumns::default(),
        }
    }
}

impl DatasetConfig {
    pub fn date_column_regex(&self) -> ChartResult<Regex> {
        Regex::new(&self.date_column_pattern).map_err(|err| {
            ChartError::Config(format!(
                "date column pattern `{}` is invalid: {err}",
                self.date_column_pattern
            ))
        })
    }

    /// Whether `row` passes both discriminator filters.
    #[must_use]
    pub fn accepts(&self, row: &RawRow) -> bool {
        row.get(&self.columns.geo_type)
            .is_some_and(|v| *v == self.geo_type_filter)
            && row
                .get(&self.columns.transportation_type)
                .is_some_and(|v| *v == self.transportation_type_filter)
    }
}

impl Dataset {
    /// Filters `rows` and reshapes the survivors into a dataset.
    ///
    /// Date columns are taken from the first surviving row; every row is
    /// expected to carry the same column set. A date column absent from a later
    /// row reads as missing samples.
    pub fn from_rows(rows: &[RawRow], config: &DatasetConfig) -> ChartResult<Self> {
        let pattern = config.date_column_regex()?;
        let kept: Vec<&RawRow> = rows.iter().filter(|row| config.accepts(row)).collect();
        debug!(
            input_rows = rows.len(),
            kept_rows = kept.len(),
            geo_type = %config.geo_type_filter,
            transportation_type = %config.transportation_type_filter,
            "filter source rows"
        );

        let Some(first) = kept.first() else {
            return Ok(Self::empty());
        };

        let columns = date_columns(first, &pattern)?;
        let time_axis = TimeAxis::new(columns.iter().map(|(_, date)| *date).collect())?;

        let series = kept
            .iter()
            .map(|row| row_to_series(row, &columns, config))
            .collect();

        let dataset = Self::new(time_axis, series)?;
        debug!(
            series = dataset.series().len(),
            time_points = dataset.time_axis().len(),
            "built dataset"
        );
        Ok(dataset)
    }
}

/// Date-named columns of `row` in column order, with their parsed dates.
pub fn date_columns<'a>(row: &'a RawRow, pattern: &Regex) -> ChartResult<Vec<(&'a str, NaiveDate)>> {
    row.keys()
        .filter(|name| pattern.is_match(name))
        .map(|name| {
            parse_date(name)
                .map(|date| (name.as_str(), date))
                .ok_or_else(|| ChartError::InvalidDateColumn {
                    column: name.clone(),
                })
        })
        .collect()
}

/// Parses the leading base-10 integer of `cell` and subtracts `offset`.
///
/// Leading whitespace and an optional sign are accepted, and trailing
/// characters after the digits are ignored (`"98.7"` reads as 98). Cells
/// without leading digits are missing.
#[must_use]
pub fn parse_sample(cell: &str, offset: i64) -> Sample {
    let trimmed = cell.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    let magnitude: i64 = rest[..digits_len].parse().ok()?;
    let value = if negative { -magnitude } else { magnitude };
    Some(value.checked_sub(offset)? as f64)
}

fn row_to_series(row: &RawRow, columns: &[(&str, NaiveDate)], config: &DatasetConfig) -> Series {
    let field = |name: &str| row.get(name).cloned().unwrap_or_default();
    let absent = columns
        .iter()
        .filter(|(column, _)| !row.contains_key(*column))
        .count();
    if absent > 0 {
        warn!(
            region = %field(&config.columns.name),
            absent,
            "row lacks date columns of the first row; samples read as missing"
        );
    }
    let values = columns
        .iter()
        .map(|(column, _)| {
            row.get(*column)
                .and_then(|cell| parse_sample(cell, config.value_offset))
        })
        .collect();

    Series::new(field(&config.columns.name), values)
        .with_alt_name(field(&config.columns.alt_name))
        .with_transportation_type(field(&config.columns.transportation_type))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_sample_follows_leading_integer_rules() {
        assert_eq!(parse_sample("110", 100), Some(10.0));
        assert_eq!(parse_sample(" 90", 100), Some(-10.0));
        assert_eq!(parse_sample("98.76", 100), Some(-2.0));
        assert_eq!(parse_sample("-5", 0), Some(-5.0));
        assert_eq!(parse_sample("+7", 0), Some(7.0));
        assert_eq!(parse_sample("", 100), None);
        assert_eq!(parse_sample("n/a", 100), None);
        assert_eq!(parse_sample("-", 100), None);
    }

    #[test]
    fn date_columns_reject_pattern_matches_that_are_not_dates() {
        let pattern = Regex::new(DEFAULT_DATE_COLUMN_PATTERN).expect("pattern");
        let mut row = RawRow::new();
        row.insert("region".to_owned(), "Albania".to_owned());
        row.insert("2020-02-30".to_owned(), "100".to_owned());

        let err = date_columns(&row, &pattern).expect_err("invalid date");
        assert!(matches!(err, ChartError::InvalidDateColumn { column } if column == "2020-02-30"));
    }
}
