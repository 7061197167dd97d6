use tracing::{error, info};

use crate::core::Viewport;
use crate::error::ChartResult;
use crate::loader::DataSource;
use crate::render::Renderer;

use super::{ChartConfig, ChartEngine};

/// Mount point supplied by the host page or window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostContainer {
    /// Data-source attribute: an HTTP(S) URL, a `file://` URL, or a path.
    pub data_url: String,
    /// Host viewport at load time; the chart does not track later resizes.
    pub viewport: Viewport,
}

impl HostContainer {
    #[must_use]
    pub fn new(data_url: impl Into<String>, viewport: Viewport) -> Self {
        Self {
            data_url: data_url.into(),
            viewport,
        }
    }
}

/// Loads the container's data source once, builds the chart sized to the
/// host viewport, and renders the initial frame.
///
/// Any failure is logged and returned; no engine exists unless the whole
/// pipeline succeeded.
pub async fn mount<R: Renderer>(
    container: &HostContainer,
    config: ChartConfig,
    renderer: R,
) -> ChartResult<ChartEngine<R>> {
    let source = DataSource::from_attribute(&container.data_url)?;
    mount_source(&source, config.sized_for(container.viewport), renderer).await
}

/// [`mount`] for an already resolved source and a fully sized config.
pub async fn mount_source<R: Renderer>(
    source: &DataSource,
    config: ChartConfig,
    renderer: R,
) -> ChartResult<ChartEngine<R>> {
    let result = load_and_render(source, config, renderer).await;
    match &result {
        Ok(engine) => info!(
            series = engine.dataset().series().len(),
            time_points = engine.dataset().time_axis().len(),
            "chart mounted"
        ),
        Err(err) => error!(error = %err, source = ?source, "chart mount failed"),
    }
    result
}

async fn load_and_render<R: Renderer>(
    source: &DataSource,
    config: ChartConfig,
    renderer: R,
) -> ChartResult<ChartEngine<R>> {
    let rows = source.load_rows().await?;
    let mut engine = ChartEngine::from_rows(renderer, config, &rows)?;
    engine.render()?;
    Ok(engine)
}
