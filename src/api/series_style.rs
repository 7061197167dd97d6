use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::interaction::HoverState;
use crate::render::{BlendMode, Color};

/// Visual constants for every chart element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    pub series_color: Color,
    pub muted_series_color: Color,
    pub series_stroke_width: f64,
    pub series_blend_mode: BlendMode,
    pub axis_color: Color,
    pub axis_label_font_size_px: f64,
    /// Bold caption drawn next to the top value tick; empty disables it.
    pub value_axis_caption: String,
    /// Target horizontal distance between time ticks.
    pub time_tick_spacing_px: f64,
    pub value_tick_count: usize,
    pub tooltip_color: Color,
    pub tooltip_marker_radius_px: f64,
    pub tooltip_font_size_px: f64,
    /// Label baseline offset above the marker.
    pub tooltip_label_offset_px: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            series_color: Color::rgb8(70, 130, 180),
            muted_series_color: Color::rgb8(0xdd, 0xdd, 0xdd),
            series_stroke_width: 1.5,
            series_blend_mode: BlendMode::Multiply,
            axis_color: Color::rgb(0.0, 0.0, 0.0),
            axis_label_font_size_px: 10.0,
            value_axis_caption: "Country".to_owned(),
            time_tick_spacing_px: 80.0,
            value_tick_count: 10,
            tooltip_color: Color::rgb(0.0, 0.0, 0.0),
            tooltip_marker_radius_px: 2.5,
            tooltip_font_size_px: 10.0,
            tooltip_label_offset_px: 8.0,
        }
    }
}

impl ChartStyle {
    pub fn validate(&self) -> ChartResult<()> {
        self.series_color.validate()?;
        self.muted_series_color.validate()?;
        self.axis_color.validate()?;
        self.tooltip_color.validate()?;
        for (name, value) in [
            ("series_stroke_width", self.series_stroke_width),
            ("axis_label_font_size_px", self.axis_label_font_size_px),
            ("time_tick_spacing_px", self.time_tick_spacing_px),
            ("tooltip_marker_radius_px", self.tooltip_marker_radius_px),
            ("tooltip_font_size_px", self.tooltip_font_size_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::Config(format!(
                    "style `{name}` must be finite and > 0"
                )));
            }
        }
        if !self.tooltip_label_offset_px.is_finite() {
            return Err(ChartError::Config(
                "style `tooltip_label_offset_px` must be finite".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Resolved stroke of one series for the current hover state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesStyle {
    pub color: Color,
    pub stroke_width: f64,
    pub blend_mode: BlendMode,
}

/// Per-series strokes, indexed like the dataset's series.
///
/// - idle: every series uses the blended default stroke
/// - tracking: every series is muted except the highlighted one, which keeps
///   the default color without blending
#[must_use]
pub fn series_styles(series_count: usize, hover: HoverState, style: &ChartStyle) -> Vec<SeriesStyle> {
    let highlighted = hover.highlight().map(|h| h.series);
    (0..series_count)
        .map(|index| {
            let color = match hover {
                HoverState::Idle => style.series_color,
                HoverState::Tracking { .. } if highlighted == Some(index) => style.series_color,
                HoverState::Tracking { .. } => style.muted_series_color,
            };
            let blend_mode = if hover.is_tracking() {
                BlendMode::Normal
            } else {
                style.series_blend_mode
            };
            SeriesStyle {
                color,
                stroke_width: style.series_stroke_width,
                blend_mode,
            }
        })
        .collect()
}

/// Series indices in paint order: insertion order, with the highlighted
/// series moved last so it renders on top.
#[must_use]
pub fn draw_order(series_count: usize, hover: HoverState) -> Vec<usize> {
    let highlighted = hover
        .highlight()
        .map(|h| h.series)
        .filter(|index| *index < series_count);
    let mut order: Vec<usize> = (0..series_count)
        .filter(|index| Some(*index) != highlighted)
        .collect();
    order.extend(highlighted);
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::HighlightState;

    #[test]
    fn draw_order_raises_highlighted_series() {
        let hover = HoverState::Tracking {
            highlight: Some(HighlightState {
                series: 1,
                index: 0,
            }),
        };
        assert_eq!(draw_order(3, hover), vec![0, 2, 1]);
        assert_eq!(draw_order(3, HoverState::Idle), vec![0, 1, 2]);
        assert_eq!(
            draw_order(3, HoverState::Tracking { highlight: None }),
            vec![0, 1, 2]
        );
    }
}
