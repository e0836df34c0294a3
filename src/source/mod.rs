//! Record sources: where raw records come from before extraction.

mod notion;

use std::future::Future;

pub use notion::{
    DEFAULT_NOTION_API_BASE, DEFAULT_NOTION_VERSION, DEFAULT_PAGE_SIZE, MAX_QUERY_PAGES,
    NotionConfig, NotionSource,
};

use crate::api::{StatExtractor, StatsFetcher};
use crate::core::{RawRecord, StatsPayload};
use crate::error::RadarResult;

/// Opaque supplier of raw records. Failing to obtain the collection is a
/// retrieval error; per-record oddities are the extractor's business.
///
/// A successful `query` is not always the complete collection: paginated
/// sources may stop at a page cap (`NotionSource` stops after
/// `MAX_QUERY_PAGES` pages) and return what they have.
pub trait RecordSource {
    fn query(&self) -> impl Future<Output = RadarResult<Vec<RawRecord>>> + Send;
}

/// Fixed in-memory records.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    records: Vec<RawRecord>,
}

impl StaticSource {
    #[must_use]
    pub fn new(records: Vec<RawRecord>) -> Self {
        Self { records }
    }
}

impl RecordSource for StaticSource {
    async fn query(&self) -> RadarResult<Vec<RawRecord>> {
        Ok(self.records.clone())
    }
}

/// Queries `source` and extracts the normalized payload served to clients.
pub async fn collect_stats<S: RecordSource>(
    source: &S,
    extractor: &StatExtractor,
) -> RadarResult<StatsPayload> {
    let records = source.query().await?;
    Ok(extractor.extract(&records).to_payload())
}

/// Runs a record source through an extractor in-process, standing in for
/// the `/api/stats` round trip.
#[derive(Debug, Clone)]
pub struct ExtractingFetcher<S> {
    source: S,
    extractor: StatExtractor,
}

impl<S: RecordSource> ExtractingFetcher<S> {
    #[must_use]
    pub fn new(source: S, extractor: StatExtractor) -> Self {
        Self { source, extractor }
    }
}

impl<S: RecordSource + Sync> StatsFetcher for ExtractingFetcher<S> {
    async fn fetch(&self) -> RadarResult<StatsPayload> {
        collect_stats(&self.source, &self.extractor).await
    }
}
