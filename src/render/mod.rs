mod frame;
mod null_renderer;
mod primitives;
mod svg_renderer;

pub use frame::{RenderFrame, TooltipPrimitive};
pub use null_renderer::NullRenderer;
pub use primitives::{
    BlendMode, CirclePrimitive, Color, FontWeight, LinePrimitive, PathPrimitive, TextHAlign,
    TextPrimitive,
};
pub use svg_renderer::SvgRenderer;

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code stays isolated from dataset and hover logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoRenderStats, CairoRenderer};
