use std::env;
use std::time::Duration;

use serde::Deserialize;
use serde_json::json;
use tracing::{debug, error, warn};

use crate::api::DEFAULT_FETCH_TIMEOUT;
use crate::core::RawRecord;
use crate::error::{RadarError, RadarResult};

use super::RecordSource;

pub const DEFAULT_NOTION_API_BASE: &str = "https://api.notion.com/v1";
pub const DEFAULT_NOTION_VERSION: &str = "2022-06-28";
pub const DEFAULT_PAGE_SIZE: u32 = 100;
/// Upper bound on followed cursors, guarding against a source that never
/// stops reporting `has_more`.
pub const MAX_QUERY_PAGES: usize = 50;

/// Connection settings for one Notion database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotionConfig {
    pub token: String,
    pub database_id: String,
    pub api_base: String,
    pub api_version: String,
    pub page_size: u32,
    pub timeout: Duration,
}

impl NotionConfig {
    #[must_use]
    pub fn new(token: impl Into<String>, database_id: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            database_id: database_id.into(),
            api_base: DEFAULT_NOTION_API_BASE.to_owned(),
            api_version: DEFAULT_NOTION_VERSION.to_owned(),
            page_size: DEFAULT_PAGE_SIZE,
            timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }

    #[must_use]
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Reads `NOTION_TOKEN`, `DATABASE_ID`, and the optional
    /// `NOTION_API_BASE` / `NOTION_TIMEOUT_SECS` from the process environment.
    /// The timeout must be a positive whole number of seconds.
    pub fn from_env() -> RadarResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> RadarResult<Self> {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let (Some(token), Some(database_id)) = (non_empty("NOTION_TOKEN"), non_empty("DATABASE_ID"))
        else {
            return Err(RadarError::Configuration(
                "NOTION_TOKEN and DATABASE_ID must both be set".to_owned(),
            ));
        };

        let mut config = Self::new(token, database_id);
        if let Some(api_base) = non_empty("NOTION_API_BASE") {
            config.api_base = api_base;
        }
        if let Some(raw) = non_empty("NOTION_TIMEOUT_SECS") {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| {
                    RadarError::Configuration(format!(
                        "NOTION_TIMEOUT_SECS must be a positive whole number of seconds, got `{raw}`"
                    ))
                })?;
            config.timeout = Duration::from_secs(secs);
        }
        Ok(config)
    }

    #[must_use]
    pub fn query_url(&self) -> String {
        format!(
            "{}/databases/{}/query",
            self.api_base.trim_end_matches('/'),
            self.database_id
        )
    }
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    results: Vec<RawRecord>,
    #[serde(default)]
    has_more: bool,
    #[serde(default)]
    next_cursor: Option<String>,
}

/// Database query client. Pages are requested sorted ascending by
/// `sort_property`; the extractor trusts that order.
///
/// `query` follows at most `MAX_QUERY_PAGES` cursors. Past that it logs a
/// warning and returns the records gathered so far.
#[derive(Debug, Clone)]
pub struct NotionSource {
    client: reqwest::Client,
    config: NotionConfig,
    sort_property: String,
}

impl NotionSource {
    pub fn new(config: NotionConfig, sort_property: impl Into<String>) -> RadarResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            client,
            config,
            sort_property: sort_property.into(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &NotionConfig {
        &self.config
    }

    async fn query_page(&self, cursor: Option<&str>) -> RadarResult<QueryResponse> {
        let mut body = json!({
            "page_size": self.config.page_size,
            "sorts": [
                { "property": self.sort_property, "direction": "ascending" }
            ],
        });
        if let Some(cursor) = cursor {
            body["start_cursor"] = json!(cursor);
        }

        let response = self
            .client
            .post(self.config.query_url())
            .bearer_auth(&self.config.token)
            .header("Notion-Version", &self.config.api_version)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), body = %body, "notion query failed");
            return Err(RadarError::UpstreamQuery {
                status: status.as_u16(),
                body,
            });
        }

        response.json::<QueryResponse>().await.map_err(|err| {
            RadarError::Transport(format!("failed to decode notion query response: {err}"))
        })
    }
}

impl RecordSource for NotionSource {
    async fn query(&self) -> RadarResult<Vec<RawRecord>> {
        let mut records = Vec::new();
        let mut cursor: Option<String> = None;

        for page in 1..=MAX_QUERY_PAGES {
            let response = self.query_page(cursor.as_deref()).await?;
            debug!(page, results = response.results.len(), "notion page received");
            records.extend(response.results);

            match (response.has_more, response.next_cursor) {
                (true, Some(next)) => cursor = Some(next),
                _ => return Ok(records),
            }
        }

        warn!(
            pages = MAX_QUERY_PAGES,
            records = records.len(),
            "stopped following notion cursors at the page limit"
        );
        Ok(records)
    }
}
