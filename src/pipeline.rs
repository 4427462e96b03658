//! Batch pipeline: search every input pair, then fetch every matched record
//!
//! The pipeline is strictly sequential. Searches run first, in input order;
//! the resulting identifiers are flattened into one list and each record is
//! fetched in that order. The first unrecovered error aborts the run.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::config::PipelineConfig;
use crate::error::Result;
use crate::pubmed::{PubMedClient, RecordInfo};
use crate::query::{DateRange, build_query};

/// One substance/disease combination to search for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputPair {
    pub active_substance: String,
    pub disease_name: String,
}

impl InputPair {
    pub fn new<S: Into<String>, D: Into<String>>(active_substance: S, disease_name: D) -> Self {
        Self {
            active_substance: active_substance.into(),
            disease_name: disease_name.into(),
        }
    }
}

/// One matched publication in the output table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRow {
    /// Position of the originating pair in the input
    pub index: usize,
    /// PubMed identifier of the matched record
    pub pmid: String,
    #[serde(flatten)]
    pub info: RecordInfo,
}

/// Source of record identifiers for a query
pub trait RecordSearch {
    fn search(
        &self,
        query: &str,
        date_range: &DateRange,
        page_size: usize,
    ) -> impl Future<Output = Result<Vec<String>>> + Send;
}

/// Source of per-record trial metadata
pub trait RecordFetch {
    fn fetch_info(&self, pmid: &str) -> impl Future<Output = Result<RecordInfo>> + Send;
}

impl RecordSearch for PubMedClient {
    async fn search(
        &self,
        query: &str,
        date_range: &DateRange,
        page_size: usize,
    ) -> Result<Vec<String>> {
        self.search_articles(query, date_range, page_size).await
    }
}

impl RecordFetch for PubMedClient {
    async fn fetch_info(&self, pmid: &str) -> Result<RecordInfo> {
        PubMedClient::fetch_info(self, pmid).await
    }
}

/// Drives searches and fetches for a table of input pairs
///
/// # Example
///
/// ```no_run
/// use pubmed_trials::{ClientConfig, InputPair, Pipeline, PipelineConfig, PubMedClient};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = PubMedClient::with_config(
///         ClientConfig::new().with_email("researcher@university.edu"),
///     );
///     let pipeline = Pipeline::from_client(client, PipelineConfig::default());
///
///     let rows = pipeline
///         .run(&[InputPair::new("ibuprofen", "headache")])
///         .await?;
///     for row in rows {
///         println!("{} {} {:?}", row.index, row.pmid, row.info.ncts);
///     }
///     Ok(())
/// }
/// ```
pub struct Pipeline<S, F> {
    searcher: S,
    fetcher: F,
    config: PipelineConfig,
}

impl Pipeline<PubMedClient, PubMedClient> {
    /// Use one PubMed client for both searching and fetching
    pub fn from_client(client: PubMedClient, config: PipelineConfig) -> Self {
        Self::new(client.clone(), client, config)
    }
}

impl<S: RecordSearch, F: RecordFetch> Pipeline<S, F> {
    pub fn new(searcher: S, fetcher: F, config: PipelineConfig) -> Self {
        Self {
            searcher,
            fetcher,
            config,
        }
    }

    /// Search every pair and return the identifiers found for each, by pair index
    pub async fn search_all(&self, pairs: &[InputPair]) -> Result<Vec<(usize, Vec<String>)>> {
        let mut found = Vec::with_capacity(pairs.len());

        for (index, pair) in pairs.iter().enumerate() {
            let query = build_query(&pair.active_substance, &pair.disease_name);
            debug!(
                index,
                substance = %pair.active_substance,
                disease = %pair.disease_name,
                "Searching pair"
            );
            let pmids = self
                .searcher
                .search(&query, &self.config.date_range, self.config.page_size)
                .await?;
            found.push((index, pmids));
        }

        Ok(found)
    }

    /// Run the whole batch and return one row per matched record
    ///
    /// Rows follow input order, then the order the search returned
    /// identifiers in. Pairs without matches contribute no rows. A record
    /// matched by several pairs appears once per pair.
    #[instrument(skip(self, pairs), fields(pairs = pairs.len()))]
    pub async fn run(&self, pairs: &[InputPair]) -> Result<Vec<ResultRow>> {
        let found = self.search_all(pairs).await?;
        let unmatched_pairs = found.iter().filter(|(_, ids)| ids.is_empty()).count();

        let entries = flatten_matches(found);
        info!(
            records = entries.len(),
            unmatched_pairs, "Searches complete, fetching records"
        );

        let mut rows = Vec::with_capacity(entries.len());
        for (index, pmid) in entries {
            let info = self.fetcher.fetch_info(&pmid).await?;
            rows.push(ResultRow { index, pmid, info });
        }

        let absent_rows = rows.iter().filter(|row| row.info.is_absent()).count();
        info!(
            pairs = pairs.len(),
            unmatched_pairs,
            rows = rows.len(),
            absent_rows,
            "Pipeline run complete"
        );

        Ok(rows)
    }
}

/// Turn per-pair identifier lists into `(pair index, pmid)` entries
pub fn flatten_matches(found: Vec<(usize, Vec<String>)>) -> Vec<(usize, String)> {
    found
        .into_iter()
        .flat_map(|(index, pmids)| pmids.into_iter().map(move |pmid| (index, pmid)))
        .collect()
}
