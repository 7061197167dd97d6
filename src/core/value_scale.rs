use crate::core::{Dataset, LinearScale, PixelRange};
use crate::error::ChartResult;

/// Tick count the value domain is niced against.
pub const VALUE_NICE_TICK_COUNT: usize = 10;

/// Domain used when the dataset has no defined samples.
pub const DEFAULT_VALUE_DOMAIN: (f64, f64) = (0.0, 1.0);

/// Vertical value model; callers pass a bottom-to-top range so larger values
/// plot higher.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueScale {
    linear: LinearScale,
}

impl ValueScale {
    pub fn new(value_min: f64, value_max: f64, range: PixelRange) -> ChartResult<Self> {
        let (min, max) = if value_min == value_max {
            // At least one unit, and always wider than the rounding step of
            // the value itself.
            let pad = (value_min.abs() * f64::EPSILON * 4.0).max(1.0);
            (value_min - pad, value_max + pad)
        } else {
            (value_min.min(value_max), value_min.max(value_max))
        };
        Ok(Self {
            linear: LinearScale::new(min, max, range)?.nice(VALUE_NICE_TICK_COUNT),
        })
    }

    /// Fits the niced domain to every defined sample of `dataset`.
    pub fn from_dataset(dataset: &Dataset, range: PixelRange) -> ChartResult<Self> {
        let (min, max) = dataset.value_extent().unwrap_or(DEFAULT_VALUE_DOMAIN);
        Self::new(min, max, range)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        self.linear.domain()
    }

    #[must_use]
    pub fn range(self) -> PixelRange {
        self.linear.range()
    }

    pub fn value_to_pixel(self, value: f64) -> ChartResult<f64> {
        self.linear.domain_to_pixel(value)
    }

    pub fn pixel_to_value(self, pixel: f64) -> ChartResult<f64> {
        self.linear.pixel_to_domain(pixel)
    }

    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<f64> {
        self.linear.ticks(count)
    }
}
