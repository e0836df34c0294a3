use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Result carried by computed properties (formula, rollup).
#[derive(Debug, Clone, PartialEq)]
pub enum ComputedValue {
    Number(Option<f64>),
    /// Any non-numeric result: strings, dates, arrays, booleans.
    Other,
}

impl ComputedValue {
    fn from_json(value: Option<&Value>) -> Self {
        let Some(object) = value.and_then(Value::as_object) else {
            return Self::Other;
        };
        match object.get("type").and_then(Value::as_str) {
            Some("number") => Self::Number(object.get("number").and_then(Value::as_f64)),
            _ => Self::Other,
        }
    }
}

/// Typed value of one record property.
///
/// Decoding is total: shapes that do not match a known variant become
/// `Unrecognized` instead of failing the whole record.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    /// Title property as its ordered plain-text runs.
    Title(Vec<String>),
    Number(Option<f64>),
    Formula(ComputedValue),
    Rollup(ComputedValue),
    Unrecognized,
}

impl PropertyValue {
    #[must_use]
    pub fn title(text: impl Into<String>) -> Self {
        Self::Title(vec![text.into()])
    }

    #[must_use]
    pub fn number(value: f64) -> Self {
        Self::Number(Some(value))
    }

    #[must_use]
    pub fn formula_number(value: Option<f64>) -> Self {
        Self::Formula(ComputedValue::Number(value))
    }

    #[must_use]
    pub fn rollup_number(value: Option<f64>) -> Self {
        Self::Rollup(ComputedValue::Number(value))
    }

    /// Decodes a Notion property object (`{"type": ..., <type>: ...}`).
    #[must_use]
    pub fn from_json(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            return Self::Unrecognized;
        };
        match object.get("type").and_then(Value::as_str) {
            Some("title") => Self::Title(
                object
                    .get("title")
                    .and_then(Value::as_array)
                    .map(|runs| runs.iter().map(text_run).collect())
                    .unwrap_or_default(),
            ),
            Some("number") => Self::Number(object.get("number").and_then(Value::as_f64)),
            Some("formula") => Self::Formula(ComputedValue::from_json(object.get("formula"))),
            Some("rollup") => Self::Rollup(ComputedValue::from_json(object.get("rollup"))),
            _ => Self::Unrecognized,
        }
    }
}

impl<'de> Deserialize<'de> for PropertyValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_json(&value))
    }
}

fn text_run(run: &Value) -> String {
    run.get("plain_text")
        .and_then(Value::as_str)
        .or_else(|| {
            run.get("text")
                .and_then(|text| text.get("content"))
                .and_then(Value::as_str)
        })
        .unwrap_or_default()
        .to_owned()
}
