use crate::error::ChartResult;
use crate::render::{
    CirclePrimitive, PathPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive,
    TooltipPrimitive,
};

use super::axis::{build_time_axis, build_value_axis};
use super::series_style::{SeriesStyle, draw_order, series_styles};
use super::{ChartEngine, Tooltip};

impl<R: Renderer> ChartEngine<R> {
    /// Series strokes for the current hover state, indexed like the dataset.
    #[must_use]
    pub fn series_styles(&self) -> Vec<SeriesStyle> {
        series_styles(
            self.dataset.series().len(),
            self.interaction.hover(),
            &self.config.style,
        )
    }

    /// Tooltip for the current highlight; `None` while idle or unresolved.
    pub fn tooltip(&self) -> ChartResult<Option<Tooltip>> {
        match self.interaction.highlight() {
            Some(highlight) => {
                Tooltip::from_highlight(&self.dataset, highlight, self.time_scale, self.value_scale)
            }
            None => Ok(None),
        }
    }

    /// Materializes axes, series paths in draw order, and the tooltip.
    pub fn build_render_frame(&self) -> ChartResult<RenderFrame> {
        let mut frame = RenderFrame::new(self.viewport());

        for axis in [
            build_time_axis(&self.config, self.time_scale)?,
            build_value_axis(&self.config, self.value_scale)?,
        ] {
            frame.lines.extend(axis.lines);
            frame.texts.extend(axis.texts);
        }

        let hover = self.interaction.hover();
        let styles = self.series_styles();
        for index in draw_order(self.series_paths.len(), hover) {
            let style = styles[index];
            frame.paths.push(PathPrimitive {
                series_index: index,
                path: self.series_paths[index].clone(),
                stroke_width: style.stroke_width,
                color: style.color,
                blend_mode: style.blend_mode,
            });
        }

        let style = &self.config.style;
        let tooltip = self.tooltip()?.map(|tooltip| TooltipPrimitive {
            marker: CirclePrimitive {
                cx: tooltip.x,
                cy: tooltip.y,
                radius: style.tooltip_marker_radius_px,
                color: style.tooltip_color,
            },
            label: TextPrimitive::new(
                tooltip.label,
                tooltip.x,
                tooltip.y - style.tooltip_label_offset_px,
                style.tooltip_font_size_px,
                style.tooltip_color,
                TextHAlign::Center,
            ),
        });

        Ok(frame.with_tooltip(tooltip))
    }
}
