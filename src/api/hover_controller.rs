use tracing::trace;

use crate::error::{ChartError, ChartResult};
use crate::interaction::{HighlightState, PointerEvent, nearest_series, nearest_time_index};
use crate::render::Renderer;

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    /// Maps a pointer position to the nearest (series, time index) pair.
    ///
    /// The x pixel is inverted to a time and snapped to the closest axis
    /// sample; the y pixel is inverted to a value and matched against every
    /// series' sample at that index. `None` when the dataset is empty or
    /// every series is missing at the resolved index.
    pub fn resolve_highlight(&self, x: f64, y: f64) -> ChartResult<Option<HighlightState>> {
        if !x.is_finite() || !y.is_finite() {
            return Err(ChartError::InvalidData(
                "pointer coordinates must be finite".to_owned(),
            ));
        }

        let xm = self.time_scale.pixel_to_time(x)?;
        let ym = self.value_scale.pixel_to_value(y)?;
        let Some(index) = nearest_time_index(self.dataset.time_axis().seconds(), xm) else {
            return Ok(None);
        };
        Ok(nearest_series(&self.dataset, index, ym).map(|series| HighlightState { series, index }))
    }

    /// Enters tracking: every series is muted until the first move.
    pub fn pointer_enter(&mut self) {
        self.interaction.on_pointer_enter();
        trace!("pointer entered chart");
    }

    /// Recomputes the highlight for a pointer position.
    ///
    /// Rejected coordinates leave the hover state unchanged.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> ChartResult<Option<HighlightState>> {
        let highlight = self.resolve_highlight(x, y)?;
        self.interaction.on_pointer_move(x, y, highlight);
        trace!(
            x,
            y,
            series = ?highlight.map(|h| h.series),
            index = ?highlight.map(|h| h.index),
            "pointer moved"
        );
        Ok(highlight)
    }

    /// Clears the highlight and restores the blended default style.
    pub fn pointer_leave(&mut self) {
        self.interaction.on_pointer_leave();
        trace!("pointer left chart");
    }

    /// Applies one pointer event and re-renders before returning.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) -> ChartResult<()> {
        match event {
            PointerEvent::Enter => self.pointer_enter(),
            PointerEvent::Move { x, y } => {
                self.pointer_move(x, y)?;
            }
            PointerEvent::Leave => self.pointer_leave(),
        }
        self.render()
    }
}
