use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{CirclePrimitive, LinePrimitive, PathPrimitive, TextPrimitive};

/// Marker and label drawn at the tracked sample.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipPrimitive {
    pub marker: CirclePrimitive,
    pub label: TextPrimitive,
}

/// Backend-agnostic scene for one chart draw pass.
///
/// Backends draw `lines`, then `texts`, then `paths` in order (last on top),
/// then the tooltip.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub lines: Vec<LinePrimitive>,
    pub texts: Vec<TextPrimitive>,
    pub paths: Vec<PathPrimitive>,
    pub tooltip: Option<TooltipPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            lines: Vec::new(),
            texts: Vec::new(),
            paths: Vec::new(),
            tooltip: None,
        }
    }

    #[must_use]
    pub fn with_tooltip(mut self, tooltip: Option<TooltipPrimitive>) -> Self {
        self.tooltip = tooltip;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for line in &self.lines {
            line.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }
        for path in &self.paths {
            path.validate()?;
        }
        if let Some(tooltip) = &self.tooltip {
            tooltip.marker.validate()?;
            tooltip.label.validate()?;
        }

        Ok(())
    }

    /// Path index of `series_index` in draw order.
    #[must_use]
    pub fn draw_position(&self, series_index: usize) -> Option<usize> {
        self.paths
            .iter()
            .position(|path| path.series_index == series_index)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
            && self.texts.is_empty()
            && self.paths.is_empty()
            && self.tooltip.is_none()
    }
}
