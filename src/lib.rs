//! stat-radar: named stats from a Notion database, drawn as a radar chart.
//!
//! Records flow through a strict split: `source` fetches raw records,
//! `api::StatExtractor` normalizes them into a `core::StatSeries`, and
//! `api::RadarSurface` picks a bucketed axis maximum and hands a deterministic
//! `render::RenderFrame` to a backend.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod source;
pub mod telemetry;

#[cfg(feature = "server")]
pub mod server;

pub use api::{RadarChartConfig, RadarSurface, StatExtractor};
pub use error::{RadarError, RadarResult};
