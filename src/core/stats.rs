use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{RadarError, RadarResult};

use super::scale::coerce_finite;

pub const UNKNOWN_LABEL: &str = "Unknown";

/// Normalized `(label, value)` unit.
#[derive(Debug, Clone, PartialEq)]
pub struct StatPoint {
    pub label: String,
    pub value: f64,
}

impl StatPoint {
    #[must_use]
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Ordered stat points. Order is whatever the producer supplied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatSeries {
    points: Vec<StatPoint>,
}

impl StatSeries {
    #[must_use]
    pub fn new(points: Vec<StatPoint>) -> Self {
        Self { points }
    }

    /// Zips parallel label/value vectors; a length mismatch is a payload error.
    pub fn from_parts(labels: Vec<String>, values: Vec<f64>) -> RadarResult<Self> {
        if labels.len() != values.len() {
            return Err(RadarError::InvalidPayload(format!(
                "labels/values length mismatch: {} labels, {} values",
                labels.len(),
                values.len()
            )));
        }
        Ok(Self::new(
            labels
                .into_iter()
                .zip(values)
                .map(|(label, value)| StatPoint::new(label, value))
                .collect(),
        ))
    }

    #[must_use]
    pub fn points(&self) -> &[StatPoint] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.points.iter().map(|point| point.label.clone()).collect()
    }

    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|point| point.value).collect()
    }

    /// Case-insensitive ascending check used to flag unsorted upstream data.
    #[must_use]
    pub fn is_sorted_by_label(&self) -> bool {
        self.points
            .windows(2)
            .all(|pair| pair[0].label.to_lowercase() <= pair[1].label.to_lowercase())
    }

    #[must_use]
    pub fn to_payload(&self) -> StatsPayload {
        StatsPayload {
            labels: self.labels(),
            values: self.values(),
        }
    }
}

impl FromIterator<StatPoint> for StatSeries {
    fn from_iter<T: IntoIterator<Item = StatPoint>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Wire form exchanged over `/api/stats`.
///
/// Values decode leniently: numbers pass through, numeric strings are
/// parsed, and anything else becomes `0`. Non-array fields still fail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsPayload {
    pub labels: Vec<String>,
    #[serde(deserialize_with = "deserialize_lenient_values")]
    pub values: Vec<f64>,
}

impl StatsPayload {
    pub fn validate(&self) -> RadarResult<()> {
        if self.labels.len() != self.values.len() {
            return Err(RadarError::InvalidPayload(format!(
                "labels/values length mismatch: {} labels, {} values",
                self.labels.len(),
                self.values.len()
            )));
        }
        Ok(())
    }

    pub fn into_series(self) -> RadarResult<StatSeries> {
        StatSeries::from_parts(self.labels, self.values)
    }
}

/// Error body returned alongside a non-success status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub error: String,
}

fn deserialize_lenient_values<'de, D>(deserializer: D) -> Result<Vec<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<Value>::deserialize(deserializer)?;
    Ok(raw.iter().map(lenient_number).collect())
}

fn lenient_number(value: &Value) -> f64 {
    let number = match value {
        Value::Number(number) => number.as_f64().unwrap_or(0.0),
        Value::String(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse::<f64>().unwrap_or(0.0)
            }
        }
        _ => 0.0,
    };
    coerce_finite(number)
}
