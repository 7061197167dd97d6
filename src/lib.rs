//! mobility-chart: interactive multi-series time-line chart for regional
//! mobility-trend CSV datasets.
//!
//! Rows are filtered to one geography type and one transportation type,
//! date-named columns become a shared time axis, and each region becomes one
//! line. Pointer input resolves to the nearest (time sample, series) pair,
//! which is highlighted and described by a tooltip.
//!
//! The crate keeps a strict split between dataset/scale math (`core`),
//! hover state (`interaction`), frame orchestration (`api`), and backends
//! (`render`).

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod loader;
pub mod render;
pub mod telemetry;

pub use api::{ChartConfig, ChartEngine, HostContainer, mount};
pub use error::{ChartError, ChartResult};
