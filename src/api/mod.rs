mod axis;
mod engine;
mod engine_config;
mod host;
mod hover_controller;
mod render_frame_builder;
mod series_style;
mod tooltip;

pub use axis::{AxisPrimitives, build_time_axis, build_value_axis, format_value_tick};
pub use engine::ChartEngine;
pub use engine_config::ChartConfig;
pub use host::{HostContainer, mount, mount_source};
pub use series_style::{ChartStyle, SeriesStyle, draw_order, series_styles};
pub use tooltip::{Tooltip, format_tooltip_label};
