pub mod dataset;
pub mod line_series;
pub mod primitives;
pub mod scale;
pub mod time_scale;
pub mod transform;
pub mod types;
pub mod value_scale;

pub use dataset::{Dataset, Sample, Series, TimeAxis};
pub use line_series::{LinePath, PathPoint, format_coord, project_series_path};
pub use scale::LinearScale;
pub use time_scale::{TimeScale, TimeTickInterval, format_time_tick};
pub use transform::{DatasetColumns, DatasetConfig, RawRow, parse_sample};
pub use types::{Margin, PixelRange, Viewport};
pub use value_scale::ValueScale;
