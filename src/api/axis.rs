use crate::core::{TimeScale, ValueScale, format_time_tick};
use crate::error::ChartResult;
use crate::render::{LinePrimitive, TextHAlign, TextPrimitive};

use super::ChartConfig;

const AXIS_STROKE_WIDTH: f64 = 1.0;
const TICK_SIZE_PX: f64 = 6.0;
const TICK_PADDING_PX: f64 = 3.0;
const CAPTION_OFFSET_PX: f64 = 3.0;

/// Lines and labels for both axes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AxisPrimitives {
    pub lines: Vec<LinePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

/// Bottom time axis: domain line without outer ticks, one tick per
/// `time_tick_spacing_px` of chart width.
pub fn build_time_axis(config: &ChartConfig, time_scale: TimeScale) -> ChartResult<AxisPrimitives> {
    let style = &config.style;
    let y = f64::from(config.height) - config.margin.bottom;
    let range = time_scale.range();
    let mut axis = AxisPrimitives::default();

    axis.lines.push(LinePrimitive::new(
        range.start,
        y,
        range.end,
        y,
        AXIS_STROKE_WIDTH,
        style.axis_color,
    ));

    let count = (f64::from(config.width) / style.time_tick_spacing_px).floor() as usize;
    for date in time_scale.ticks(count)? {
        let x = time_scale.date_to_pixel(date)?;
        axis.lines.push(LinePrimitive::new(
            x,
            y,
            x,
            y + TICK_SIZE_PX,
            AXIS_STROKE_WIDTH,
            style.axis_color,
        ));
        axis.texts.push(TextPrimitive::new(
            format_time_tick(date),
            x,
            y + TICK_SIZE_PX + TICK_PADDING_PX + style.axis_label_font_size_px,
            style.axis_label_font_size_px,
            style.axis_color,
            TextHAlign::Center,
        ));
    }

    Ok(axis)
}

/// Left value axis: ticks and labels only, plus the bold caption beside the
/// topmost tick.
pub fn build_value_axis(
    config: &ChartConfig,
    value_scale: ValueScale,
) -> ChartResult<AxisPrimitives> {
    let style = &config.style;
    let x = config.margin.left;
    let mut axis = AxisPrimitives::default();
    // Baseline nudge that vertically centers a label on its tick.
    let center_nudge = style.axis_label_font_size_px * 0.32;

    let ticks = value_scale.ticks(style.value_tick_count);
    for value in &ticks {
        let y = value_scale.value_to_pixel(*value)?;
        axis.lines.push(LinePrimitive::new(
            x - TICK_SIZE_PX,
            y,
            x,
            y,
            AXIS_STROKE_WIDTH,
            style.axis_color,
        ));
        axis.texts.push(TextPrimitive::new(
            format_value_tick(*value),
            x - TICK_SIZE_PX - TICK_PADDING_PX,
            y + center_nudge,
            style.axis_label_font_size_px,
            style.axis_color,
            TextHAlign::Right,
        ));
    }

    let caption_tick = ticks
        .last()
        .filter(|_| !style.value_axis_caption.is_empty());
    if let Some(top) = caption_tick {
        let y = value_scale.value_to_pixel(*top)?;
        axis.texts.push(
            TextPrimitive::new(
                style.value_axis_caption.clone(),
                x + CAPTION_OFFSET_PX,
                y + center_nudge,
                style.axis_label_font_size_px,
                style.axis_color,
                TextHAlign::Left,
            )
            .bold(),
        );
    }

    Ok(axis)
}

/// Shortest decimal text for a tick value, with `-0` shown as `0`.
#[must_use]
pub fn format_value_tick(value: f64) -> String {
    if value == 0.0 {
        return "0".to_owned();
    }
    format!("{value}")
}
