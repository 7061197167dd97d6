use std::fmt::Write as _;

use quick_xml::escape::escape;

use crate::core::format_coord;
use crate::error::{ChartError, ChartResult};
use crate::render::{
    BlendMode, FontWeight, PathPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

/// Renders frames into standalone SVG documents.
///
/// The last document is kept so hosts can mount or persist it.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    document: String,
    font_family: Option<String>,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the `sans-serif` font family used for labels.
    #[must_use]
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    /// SVG markup of the most recent frame; empty before the first render.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    #[must_use]
    pub fn into_document(self) -> String {
        self.document
    }

    fn write_frame(&self, frame: &RenderFrame) -> Result<String, std::fmt::Error> {
        let family = self.font_family.as_deref().unwrap_or("sans-serif");
        let width = frame.viewport.width;
        let height = frame.viewport.height;
        let mut out = String::new();

        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {width} {height}" width="{width}" height="{height}" style="overflow: visible">"#
        )?;

        writeln!(out, r#"<g class="axes" fill="none">"#)?;
        for line in &frame.lines {
            writeln!(
                out,
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
                format_coord(line.x1),
                format_coord(line.y1),
                format_coord(line.x2),
                format_coord(line.y2),
                line.color.to_hex(),
                format_coord(line.stroke_width),
            )?;
        }
        writeln!(out, "</g>")?;

        writeln!(
            out,
            r#"<g class="axis-labels" font-family="{}" font-size="10">"#,
            escape(family)
        )?;
        for text in &frame.texts {
            write_text(&mut out, text)?;
        }
        writeln!(out, "</g>")?;

        writeln!(
            out,
            r#"<g class="series" fill="none" stroke-linejoin="round" stroke-linecap="round">"#
        )?;
        for path in &frame.paths {
            write_path(&mut out, path)?;
        }
        writeln!(out, "</g>")?;

        if let Some(tooltip) = &frame.tooltip {
            writeln!(
                out,
                r#"<g class="tooltip" font-family="{}" transform="translate({},{})">"#,
                escape(family),
                format_coord(tooltip.marker.cx),
                format_coord(tooltip.marker.cy),
            )?;
            writeln!(
                out,
                r#"<circle r="{}" fill="{}"/>"#,
                format_coord(tooltip.marker.radius),
                tooltip.marker.color.to_hex(),
            )?;
            let mut label = tooltip.label.clone();
            label.x -= tooltip.marker.cx;
            label.y -= tooltip.marker.cy;
            write_text(&mut out, &label)?;
            writeln!(out, "</g>")?;
        }

        writeln!(out, "</svg>")?;
        Ok(out)
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.document = self
            .write_frame(frame)
            .map_err(|err| ChartError::InvalidData(format!("failed to write svg: {err}")))?;
        Ok(())
    }
}

fn write_path(out: &mut String, path: &PathPrimitive) -> std::fmt::Result {
    let blend = match path.blend_mode {
        BlendMode::Normal => "",
        BlendMode::Multiply => r#" style="mix-blend-mode: multiply""#,
    };
    writeln!(
        out,
        r#"<path data-series="{}" d="{}" stroke="{}" stroke-opacity="{}" stroke-width="{}"{blend}/>"#,
        path.series_index,
        path.path.to_svg_path_data(),
        path.color.to_hex(),
        format_coord(path.color.alpha),
        format_coord(path.stroke_width),
    )
}

fn write_text(out: &mut String, text: &TextPrimitive) -> std::fmt::Result {
    let anchor = match text.h_align {
        TextHAlign::Left => "start",
        TextHAlign::Center => "middle",
        TextHAlign::Right => "end",
    };
    let weight = match text.font_weight {
        FontWeight::Normal => "",
        FontWeight::Bold => r#" font-weight="bold""#,
    };
    writeln!(
        out,
        r#"<text x="{}" y="{}" font-size="{}" fill="{}" text-anchor="{anchor}"{weight}>{}</text>"#,
        format_coord(text.x),
        format_coord(text.y),
        format_coord(text.font_size_px),
        text.color.to_hex(),
        escape(text.text.as_str()),
    )
}
