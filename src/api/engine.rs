use tracing::debug;

use crate::core::{
    Dataset, LinePath, RawRow, Series, TimeScale, ValueScale, Viewport, project_series_path,
};
use crate::error::ChartResult;
use crate::interaction::{HighlightState, HoverState, InteractionState};
use crate::render::Renderer;

use super::ChartConfig;

/// Main orchestration facade consumed by host applications.
///
/// `ChartEngine` owns the immutable dataset, its scales and projected series
/// paths, the hover state machine, and the renderer that frames are pushed to.
pub struct ChartEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: ChartConfig,
    pub(super) dataset: Dataset,
    pub(super) time_scale: TimeScale,
    pub(super) value_scale: ValueScale,
    pub(super) interaction: InteractionState,
    pub(super) series_paths: Vec<LinePath>,
}

impl<R: Renderer> ChartEngine<R> {
    pub fn new(renderer: R, config: ChartConfig, dataset: Dataset) -> ChartResult<Self> {
        config.validate()?;

        let time_scale = TimeScale::from_axis(dataset.time_axis(), config.time_range())?;
        let value_scale = ValueScale::from_dataset(&dataset, config.value_range())?;
        let series_paths = project_all_series(&dataset, time_scale, value_scale)?;
        debug!(
            series = dataset.series().len(),
            time_points = dataset.time_axis().len(),
            time_domain = ?time_scale.domain(),
            value_domain = ?value_scale.domain(),
            "chart engine initialized"
        );

        Ok(Self {
            renderer,
            config,
            dataset,
            time_scale,
            value_scale,
            interaction: InteractionState::default(),
            series_paths,
        })
    }

    /// Filters and reshapes `rows` with the config's dataset options, then
    /// builds the engine.
    pub fn from_rows(renderer: R, config: ChartConfig, rows: &[RawRow]) -> ChartResult<Self> {
        let dataset = Dataset::from_rows(rows, &config.dataset)?;
        Self::new(renderer, config, dataset)
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.config.viewport()
    }

    #[must_use]
    pub fn time_scale(&self) -> TimeScale {
        self.time_scale
    }

    #[must_use]
    pub fn value_scale(&self) -> ValueScale {
        self.value_scale
    }

    /// Projected path of every series, indexed like the dataset.
    #[must_use]
    pub fn series_paths(&self) -> &[LinePath] {
        &self.series_paths
    }

    #[must_use]
    pub fn hover_state(&self) -> HoverState {
        self.interaction.hover()
    }

    #[must_use]
    pub fn highlight(&self) -> Option<HighlightState> {
        self.interaction.highlight()
    }

    /// Last tracked pointer position; `None` while idle or before a move.
    #[must_use]
    pub fn cursor(&self) -> Option<(f64, f64)> {
        self.interaction.cursor()
    }

    #[must_use]
    pub fn highlighted_series(&self) -> Option<&Series> {
        self.dataset.series().get(self.highlight()?.series)
    }

    pub fn map_time_to_pixel(&self, time: f64) -> ChartResult<f64> {
        self.time_scale.time_to_pixel(time)
    }

    pub fn map_pixel_to_time(&self, pixel: f64) -> ChartResult<f64> {
        self.time_scale.pixel_to_time(pixel)
    }

    pub fn map_value_to_pixel(&self, value: f64) -> ChartResult<f64> {
        self.value_scale.value_to_pixel(value)
    }

    pub fn map_pixel_to_value(&self, pixel: f64) -> ChartResult<f64> {
        self.value_scale.pixel_to_value(pixel)
    }

    /// Builds the frame for the current state and hands it to the renderer.
    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_render_frame()?;
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

#[cfg(not(feature = "parallel-projection"))]
fn project_all_series(
    dataset: &Dataset,
    time_scale: TimeScale,
    value_scale: ValueScale,
) -> ChartResult<Vec<LinePath>> {
    dataset
        .series()
        .iter()
        .map(|series| {
            project_series_path(&series.values, dataset.time_axis(), time_scale, value_scale)
        })
        .collect()
}

#[cfg(feature = "parallel-projection")]
fn project_all_series(
    dataset: &Dataset,
    time_scale: TimeScale,
    value_scale: ValueScale,
) -> ChartResult<Vec<LinePath>> {
    use rayon::prelude::*;

    dataset
        .series()
        .par_iter()
        .map(|series| {
            project_series_path(&series.values, dataset.time_axis(), time_scale, value_scale)
        })
        .collect()
}
