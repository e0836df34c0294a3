use crate::core::{ErrorPayload, StatsPayload};
use crate::error::{RadarError, RadarResult};

impl StatsPayload {
    pub fn to_json(&self) -> RadarResult<String> {
        serde_json::to_string(self)
            .map_err(|e| RadarError::InvalidData(format!("failed to serialize stats payload: {e}")))
    }

    /// Parses and validates a payload; shape and length problems are both
    /// reported as `InvalidPayload`.
    pub fn from_json_str(input: &str) -> RadarResult<Self> {
        let payload: Self = serde_json::from_str(input).map_err(|e| {
            RadarError::InvalidPayload(format!("failed to parse stats payload: {e}"))
        })?;
        payload.validate()?;
        Ok(payload)
    }
}

impl ErrorPayload {
    /// Builds the client-facing body for `err` without upstream detail.
    #[must_use]
    pub fn from_error(err: &RadarError) -> Self {
        Self {
            error: err.public_message().to_owned(),
        }
    }
}
