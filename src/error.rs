use thiserror::Error;

pub type RadarResult<T> = Result<T, RadarError>;

#[derive(Debug, Error)]
pub enum RadarError {
    #[error("missing configuration: {0}")]
    Configuration(String),

    #[error("upstream query failed with status {status}")]
    UpstreamQuery { status: u16, body: String },

    #[error("transport failure: {0}")]
    Transport(String),

    #[error("invalid stats payload: {0}")]
    InvalidPayload(String),

    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}

impl RadarError {
    /// Message safe to hand to remote callers; upstream detail stays in logs.
    #[must_use]
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::Configuration(_) => "Missing NOTION_TOKEN or DATABASE_ID env vars",
            Self::UpstreamQuery { .. } => "Failed to query Notion",
            Self::Transport(_)
            | Self::InvalidPayload(_)
            | Self::InvalidViewport { .. }
            | Self::InvalidData(_) => "Unexpected error calling Notion",
        }
    }
}

impl From<reqwest::Error> for RadarError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}
