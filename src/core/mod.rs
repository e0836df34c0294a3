pub mod property;
pub mod radial;
pub mod record;
pub mod scale;
pub mod stats;
pub mod types;

pub use property::{ComputedValue, PropertyValue};
pub use radial::RadialGeometry;
pub use record::RawRecord;
pub use scale::{AXIS_MAX_BUCKETS, AXIS_MAX_CEILING, ChartScale, choose_scale, coerce_finite};
pub use stats::{ErrorPayload, StatPoint, StatSeries, StatsPayload, UNKNOWN_LABEL};
pub use types::{PixelPoint, Viewport};
