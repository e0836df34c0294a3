use std::future::Future;
use std::time::Duration;

use tracing::{debug, error};

use crate::core::StatsPayload;
use crate::error::{RadarError, RadarResult};
use crate::render::Renderer;

use super::RadarSurface;

/// The one message users see when a cycle fails.
pub const LOAD_FAILURE_MESSAGE: &str =
    "Couldn't load stats from Notion. Check integration, database share, and env vars.";

/// Request bound for every retrieval path unless the caller overrides it.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Retrieval seam for the normalized `{ labels, values }` payload.
pub trait StatsFetcher {
    fn fetch(&self) -> impl Future<Output = RadarResult<StatsPayload>> + Send;
}

/// Fetches the payload from a stats endpoint such as `/api/stats`.
#[derive(Debug, Clone)]
pub struct HttpStatsFetcher {
    client: reqwest::Client,
    url: String,
}

impl HttpStatsFetcher {
    pub fn new(url: impl Into<String>, timeout: Duration) -> RadarResult<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl StatsFetcher for HttpStatsFetcher {
    async fn fetch(&self) -> RadarResult<StatsPayload> {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(RadarError::UpstreamQuery {
                status: status.as_u16(),
                body,
            });
        }
        serde_json::from_str(&body)
            .map_err(|err| RadarError::InvalidPayload(format!("malformed stats payload: {err}")))
    }
}

/// Text slot holding at most one user-visible message.
pub trait MessageSink {
    /// Replaces whatever message is shown.
    fn show_message(&mut self, message: &str);

    fn clear_message(&mut self);
}

/// In-memory `MessageSink`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TextSink {
    message: Option<String>,
}

impl TextSink {
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl MessageSink for TextSink {
    fn show_message(&mut self, message: &str) {
        self.message = Some(message.to_owned());
    }

    fn clear_message(&mut self) {
        self.message = None;
    }
}

/// Result of one fetch/validate/render cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum CycleOutcome {
    Rendered {
        instance_id: u64,
        points: usize,
        axis_max: f64,
    },
    Failed {
        reason: String,
    },
}

impl CycleOutcome {
    #[must_use]
    pub fn is_rendered(&self) -> bool {
        matches!(self, Self::Rendered { .. })
    }
}

/// Client side of the system: fetch, validate, draw, and turn any failure
/// into the single diagnostic message.
pub struct StatsPipeline<F, R, S>
where
    F: StatsFetcher,
    R: Renderer,
    S: MessageSink,
{
    fetcher: F,
    surface: RadarSurface<R>,
    sink: S,
    frames_per_second: Option<u32>,
}

impl<F, R, S> StatsPipeline<F, R, S>
where
    F: StatsFetcher,
    R: Renderer,
    S: MessageSink,
{
    #[must_use]
    pub fn new(fetcher: F, surface: RadarSurface<R>, sink: S) -> Self {
        Self {
            fetcher,
            surface,
            sink,
            frames_per_second: None,
        }
    }

    /// Plays the entrance animation at `frames_per_second` on every cycle.
    #[must_use]
    pub fn with_animation_fps(mut self, frames_per_second: u32) -> Self {
        self.frames_per_second = Some(frames_per_second);
        self
    }

    #[must_use]
    pub fn surface(&self) -> &RadarSurface<R> {
        &self.surface
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    #[must_use]
    pub fn into_parts(self) -> (F, RadarSurface<R>, S) {
        (self.fetcher, self.surface, self.sink)
    }

    /// Runs one cycle. Never fails: errors are logged, the surface is left
    /// empty, and the sink shows `LOAD_FAILURE_MESSAGE`.
    pub async fn run_cycle(&mut self) -> CycleOutcome {
        match self.try_cycle().await {
            Ok(outcome) => {
                self.sink.clear_message();
                outcome
            }
            Err(err) => {
                error!(error = %err, "radar cycle failed");
                if let RadarError::UpstreamQuery { status, body } = &err {
                    debug!(status, body = %body, "stats endpoint response");
                }
                if self.surface.current().is_some() {
                    self.surface.destroy();
                }
                self.sink.show_message(LOAD_FAILURE_MESSAGE);
                CycleOutcome::Failed {
                    reason: err.to_string(),
                }
            }
        }
    }

    async fn try_cycle(&mut self) -> RadarResult<CycleOutcome> {
        let payload = self.fetcher.fetch().await?;
        payload.validate()?;
        let series = payload.into_series()?;

        let instance = match self.frames_per_second {
            Some(fps) => self.surface.render_animated(&series, fps)?,
            None => self.surface.render(&series)?,
        };
        Ok(CycleOutcome::Rendered {
            instance_id: instance.id(),
            points: instance.labels().len(),
            axis_max: instance.axis_max(),
        })
    }
}
