use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{ComputedValue, PropertyValue, RawRecord, StatPoint, StatSeries, UNKNOWN_LABEL};

pub const DEFAULT_TITLE_PROPERTY: &str = "Stat Name";
pub const DEFAULT_POINTS_PROPERTY: &str = "Points";

/// Names of the record properties the extractor reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    #[serde(default = "default_title_property")]
    pub title_property: String,
    #[serde(default = "default_points_property")]
    pub points_property: String,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            title_property: default_title_property(),
            points_property: default_points_property(),
        }
    }
}

impl ExtractorConfig {
    #[must_use]
    pub fn with_title_property(mut self, name: impl Into<String>) -> Self {
        self.title_property = name.into();
        self
    }

    #[must_use]
    pub fn with_points_property(mut self, name: impl Into<String>) -> Self {
        self.points_property = name.into();
        self
    }
}

fn default_title_property() -> String {
    DEFAULT_TITLE_PROPERTY.to_owned()
}

fn default_points_property() -> String {
    DEFAULT_POINTS_PROPERTY.to_owned()
}

/// Turns raw records into a `StatSeries`, one point per record.
///
/// Extraction is best effort: a missing or oddly typed property yields the
/// `"Unknown"` label or a `0` value, never an error. Records keep their input
/// order.
#[derive(Debug, Clone, Default)]
pub struct StatExtractor {
    config: ExtractorConfig,
}

impl StatExtractor {
    #[must_use]
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    #[must_use]
    pub fn extract(&self, records: &[RawRecord]) -> StatSeries {
        let series: StatSeries = records
            .iter()
            .map(|record| StatPoint::new(self.resolve_label(record), self.resolve_value(record)))
            .collect();

        let unknown = series
            .points()
            .iter()
            .filter(|point| point.label == UNKNOWN_LABEL)
            .count();
        debug!(records = records.len(), unknown_labels = unknown, "extracted stats");
        if !series.is_sorted_by_label() {
            warn!(
                title_property = %self.config.title_property,
                "records are not in ascending label order; keeping source order"
            );
        }
        series
    }

    #[must_use]
    pub fn resolve_label(&self, record: &RawRecord) -> String {
        match record.property(&self.config.title_property) {
            Some(PropertyValue::Title(runs)) => {
                let text = runs.concat();
                if text.is_empty() {
                    UNKNOWN_LABEL.to_owned()
                } else {
                    text
                }
            }
            Some(
                PropertyValue::Number(_)
                | PropertyValue::Formula(_)
                | PropertyValue::Rollup(_)
                | PropertyValue::Unrecognized,
            )
            | None => UNKNOWN_LABEL.to_owned(),
        }
    }

    #[must_use]
    pub fn resolve_value(&self, record: &RawRecord) -> f64 {
        match record.property(&self.config.points_property) {
            Some(
                PropertyValue::Number(number)
                | PropertyValue::Formula(ComputedValue::Number(number))
                | PropertyValue::Rollup(ComputedValue::Number(number)),
            ) => number.unwrap_or(0.0),
            Some(
                PropertyValue::Title(_)
                | PropertyValue::Formula(ComputedValue::Other)
                | PropertyValue::Rollup(ComputedValue::Other)
                | PropertyValue::Unrecognized,
            )
            | None => 0.0,
        }
    }
}
