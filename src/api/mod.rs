mod chart_config;
mod extractor;
mod frame_builder;
mod json_contract;
mod pipeline;
mod render_style;
mod surface;
mod validation;

pub use chart_config::{AnimationConfig, DEFAULT_CANVAS_PX, Easing, RadarChartConfig};
pub use extractor::{
    DEFAULT_POINTS_PROPERTY, DEFAULT_TITLE_PROPERTY, ExtractorConfig, StatExtractor,
};
pub use pipeline::{
    CycleOutcome, DEFAULT_FETCH_TIMEOUT, HttpStatsFetcher, LOAD_FAILURE_MESSAGE, MessageSink,
    StatsFetcher, StatsPipeline, TextSink,
};
pub use render_style::RadarStyle;
pub use surface::{ChartInstance, RadarSurface};
