use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content so tests catch invalid geometry.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_line_count: usize,
    pub last_path_count: usize,
    pub last_text_count: usize,
    pub last_tooltip_visible: bool,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_line_count = frame.lines.len();
        self.last_path_count = frame.paths.len();
        self.last_text_count = frame.texts.len();
        self.last_tooltip_visible = frame.tooltip.is_some();
        Ok(())
    }
}
