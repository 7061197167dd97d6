use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::core::{Sample, TimeAxis, TimeScale, ValueScale};
use crate::error::{ChartError, ChartResult};

/// Projected point in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathPoint {
    pub x: f64,
    pub y: f64,
}

/// Pixel-space polyline split into runs of consecutive defined samples.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinePath {
    pub runs: Vec<Vec<PathPoint>>,
}

impl LinePath {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    #[must_use]
    pub fn point_count(&self) -> usize {
        self.runs.iter().map(Vec::len).sum()
    }

    /// SVG path data: one `M` per run followed by `L` commands.
    #[must_use]
    pub fn to_svg_path_data(&self) -> String {
        let mut data = String::new();
        for run in &self.runs {
            for (i, point) in run.iter().enumerate() {
                let command = if i == 0 { 'M' } else { 'L' };
                let _ = write!(
                    data,
                    "{command}{},{}",
                    format_coord(point.x),
                    format_coord(point.y)
                );
            }
        }
        data
    }
}

/// Projects one series onto pixel space.
///
/// A missing sample closes the current run; the next defined sample opens a
/// new one, so no segment is ever drawn across a gap.
pub fn project_series_path(
    values: &[Sample],
    axis: &TimeAxis,
    time_scale: TimeScale,
    value_scale: ValueScale,
) -> ChartResult<LinePath> {
    if values.len() != axis.len() {
        return Err(ChartError::InvalidData(format!(
            "series has {} samples, time axis has {}",
            values.len(),
            axis.len()
        )));
    }

    let mut path = LinePath::default();
    let mut current: Vec<PathPoint> = Vec::new();
    for (value, time) in values.iter().zip(axis.seconds()) {
        match value {
            Some(value) if value.is_finite() => current.push(PathPoint {
                x: time_scale.time_to_pixel(*time)?,
                y: value_scale.value_to_pixel(*value)?,
            }),
            _ => {
                if !current.is_empty() {
                    path.runs.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() {
        path.runs.push(current);
    }

    Ok(path)
}

/// Fixed three-decimal formatting with trailing zeros removed.
#[must_use]
pub fn format_coord(value: f64) -> String {
    let text = format!("{value:.3}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    match text {
        "-0" | "" => "0".to_owned(),
        other => other.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_coord_trims_trailing_zeros() {
        assert_eq!(format_coord(10.0), "10");
        assert_eq!(format_coord(10.5), "10.5");
        assert_eq!(format_coord(1.23456), "1.235");
        assert_eq!(format_coord(-0.0001), "0");
    }
}
