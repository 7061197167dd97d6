use cairo::{Context, Format, ImageSurface, LineCap, LineJoin, Operator};
use pango::FontDescription;
use std::f64::consts::TAU;

use crate::error::{ChartError, ChartResult};
use crate::render::{
    BlendMode, Color, FontWeight, RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub lines_drawn: usize,
    pub paths_drawn: usize,
    pub texts_drawn: usize,
    pub tooltip_drawn: bool,
}

/// Offscreen Cairo + Pango renderer producing raster frames.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::rgb(1.0, 1.0, 1.0),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    /// Encodes the current surface as PNG.
    pub fn write_png(&self, writer: &mut impl std::io::Write) -> ChartResult<()> {
        self.surface
            .write_to_png(writer)
            .map_err(|err| ChartError::InvalidData(format!("failed to encode png: {err}")))
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut stats = CairoRenderStats::default();

        for line in &frame.lines {
            apply_color(context, line.color);
            context.set_line_width(line.stroke_width);
            context.move_to(line.x1, line.y1);
            context.line_to(line.x2, line.y2);
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke line", err))?;
            stats.lines_drawn += 1;
        }

        for text in &frame.texts {
            draw_text(context, text);
            stats.texts_drawn += 1;
        }

        context.set_line_join(LineJoin::Round);
        context.set_line_cap(LineCap::Round);
        for path in &frame.paths {
            context.set_operator(match path.blend_mode {
                BlendMode::Normal => Operator::Over,
                BlendMode::Multiply => Operator::Multiply,
            });
            apply_color(context, path.color);
            context.set_line_width(path.stroke_width);
            for run in &path.path.runs {
                let mut points = run.iter();
                if let Some(first) = points.next() {
                    context.move_to(first.x, first.y);
                    for point in points {
                        context.line_to(point.x, point.y);
                    }
                }
            }
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke series path", err))?;
            stats.paths_drawn += 1;
        }
        context.set_operator(Operator::Over);

        if let Some(tooltip) = &frame.tooltip {
            apply_color(context, tooltip.marker.color);
            context.arc(
                tooltip.marker.cx,
                tooltip.marker.cy,
                tooltip.marker.radius,
                0.0,
                TAU,
            );
            context
                .fill()
                .map_err(|err| map_backend_error("failed to fill tooltip marker", err))?;
            draw_text(context, &tooltip.label);
            stats.tooltip_drawn = true;
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

fn draw_text(context: &Context, text: &TextPrimitive) {
    let layout = pangocairo::functions::create_layout(context);
    let weight = match text.font_weight {
        FontWeight::Normal => "",
        FontWeight::Bold => " Bold",
    };
    let font_description =
        FontDescription::from_string(&format!("Sans{weight} {}", text.font_size_px));
    layout.set_font_description(Some(&font_description));
    layout.set_text(&text.text);

    let (text_width, text_height) = layout.pixel_size();
    let x = match text.h_align {
        TextHAlign::Left => text.x,
        TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
        TextHAlign::Right => text.x - f64::from(text_width),
    };

    apply_color(context, text.color);
    // Text coordinates are baselines; pango positions by the top edge.
    context.move_to(x, text.y - f64::from(text_height));
    pangocairo::functions::show_layout(context, &layout);
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::InvalidData(format!("{prefix}: {err}"))
}
