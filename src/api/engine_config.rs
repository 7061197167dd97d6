use serde::{Deserialize, Serialize};

use crate::core::{DatasetConfig, Margin, PixelRange, Viewport};
use crate::error::{ChartError, ChartResult};

use super::ChartStyle;

/// Public chart construction configuration.
///
/// Serializable so hosts can ship chart setup as JSON next to the page; every
/// field falls back to its default when omitted. Dataset options are
/// flattened, so `geo_type_filter` and friends sit at the top level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub margin: Margin,
    pub width: u32,
    pub height: u32,
    #[serde(flatten)]
    pub dataset: DatasetConfig,
    pub style: ChartStyle,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            margin: Margin::default(),
            width: 960,
            height: 500,
            dataset: DatasetConfig::default(),
            style: ChartStyle::default(),
        }
    }
}

impl ChartConfig {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn from_json_str(json: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|err| ChartError::Config(format!("malformed chart config: {err}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|err| ChartError::Config(format!("cannot serialize chart config: {err}")))
    }

    /// Sizes the chart from the host viewport, leaving the right and bottom
    /// margins outside the drawing.
    #[must_use]
    pub fn sized_for(mut self, viewport: Viewport) -> Self {
        let shrink = |total: u32, margin: f64| (f64::from(total) - margin).max(1.0) as u32;
        self.width = shrink(viewport.width, self.margin.right);
        self.height = shrink(viewport.height, self.margin.bottom);
        self
    }

    #[must_use]
    pub fn with_margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }

    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub fn with_geo_type_filter(mut self, geo_type: impl Into<String>) -> Self {
        self.dataset.geo_type_filter = geo_type.into();
        self
    }

    #[must_use]
    pub fn with_transportation_type_filter(mut self, transportation_type: impl Into<String>) -> Self {
        self.dataset.transportation_type_filter = transportation_type.into();
        self
    }

    #[must_use]
    pub fn with_date_column_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.dataset.date_column_pattern = pattern.into();
        self
    }

    #[must_use]
    pub fn with_value_offset(mut self, value_offset: i64) -> Self {
        self.dataset.value_offset = value_offset;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }

    /// Horizontal pixel span of the time axis.
    #[must_use]
    pub fn time_range(&self) -> PixelRange {
        PixelRange::new(self.margin.left, f64::from(self.width) - self.margin.right)
    }

    /// Vertical pixel span of the value axis, bottom to top.
    #[must_use]
    pub fn value_range(&self) -> PixelRange {
        PixelRange::new(f64::from(self.height) - self.margin.bottom, self.margin.top)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport().is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        if !self.margin.is_valid() {
            return Err(ChartError::Config(
                "margins must be finite and >= 0".to_owned(),
            ));
        }
        if self.time_range().span() <= 0.0 || self.value_range().span() >= 0.0 {
            return Err(ChartError::Config(format!(
                "margins {:?} leave no drawing area in {}x{}",
                self.margin, self.width, self.height
            )));
        }
        self.dataset.date_column_regex()?;
        self.style.validate()
    }
}
