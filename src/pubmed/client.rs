use crate::config::ClientConfig;
use crate::error::{PubMedError, Result};
use crate::pubmed::models::RecordInfo;
use crate::pubmed::parser::PubMedXmlParser;
use crate::pubmed::responses::ESearchResult;
use crate::query::DateRange;
use reqwest::Client;
use tracing::{debug, info, instrument, warn};

/// Client for the PubMed ESearch and EFetch endpoints
///
/// Requests are issued one at a time and never retried.
#[derive(Clone)]
pub struct PubMedClient {
    client: Client,
    base_url: String,
    config: ClientConfig,
}

impl PubMedClient {
    /// Create a new PubMed client with default configuration
    ///
    /// # Example
    ///
    /// ```
    /// use pubmed_trials::PubMedClient;
    ///
    /// let client = PubMedClient::new();
    /// ```
    pub fn new() -> Self {
        Self::with_config(ClientConfig::new())
    }

    /// Create a new PubMed client with custom configuration
    ///
    /// # Example
    ///
    /// ```
    /// use pubmed_trials::{ClientConfig, PubMedClient};
    ///
    /// let config = ClientConfig::new()
    ///     .with_email("researcher@university.edu")
    ///     .with_tool("trial-survey");
    ///
    /// let client = PubMedClient::with_config(config);
    /// ```
    pub fn with_config(config: ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.effective_user_agent())
            .build()
            .expect("Failed to create HTTP client");

        Self::with_client(client, config)
    }

    /// Create a new PubMed client around an existing reqwest client
    ///
    /// The timeout and user agent of `config` are not applied; the given
    /// client's own settings are used.
    pub fn with_client(client: Client, config: ClientConfig) -> Self {
        let base_url = config.effective_base_url().to_string();

        Self {
            client,
            base_url,
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn endpoint_url(&self, endpoint: &str, params: &[(&str, String)]) -> String {
        let mut url = format!("{}/{}", self.base_url, endpoint);

        let identity = self.config.build_api_params();
        let all = params
            .iter()
            .map(|(k, v)| (*k, v.as_str()))
            .chain(identity.iter().map(|(k, v)| (k.as_str(), v.as_str())));

        for (i, (key, value)) in all.enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(key);
            url.push('=');
            url.push_str(&urlencoding::encode(value));
        }

        url
    }

    /// Search PubMed and return matching PMIDs in the order NCBI returns them
    ///
    /// # Arguments
    ///
    /// * `query` - Search query string
    /// * `date_range` - Inclusive publication-date window
    /// * `limit` - Maximum number of identifiers to return (`retmax`)
    ///
    /// # Errors
    ///
    /// * `PubMedError::RequestError` - If the HTTP request fails
    /// * `PubMedError::ApiError` - If NCBI answers with an error status or rejects the query
    /// * `PubMedError::JsonError` - If the response cannot be decoded
    ///
    /// # Example
    ///
    /// ```no_run
    /// use pubmed_trials::query::{build_query, DateRange};
    /// use pubmed_trials::PubMedClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = PubMedClient::new();
    ///     let query = build_query("ibuprofen", "headache");
    ///     let pmids = client
    ///         .search_articles(&query, &DateRange::default(), 100)
    ///         .await?;
    ///     println!("Found {} articles", pmids.len());
    ///     Ok(())
    /// }
    /// ```
    #[instrument(skip(self, date_range), fields(query = %query, limit = limit))]
    pub async fn search_articles(
        &self,
        query: &str,
        date_range: &DateRange,
        limit: usize,
    ) -> Result<Vec<String>> {
        let url = self.endpoint_url(
            "esearch.fcgi",
            &[
                ("db", "pubmed".to_string()),
                ("term", query.to_string()),
                ("retmax", limit.to_string()),
                ("mindate", date_range.min.to_pubmed_string()),
                ("maxdate", date_range.max.to_pubmed_string()),
                ("retmode", "json".to_string()),
            ],
        );

        debug!("Making ESearch API request");
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            warn!(
                "Search API request failed with status: {}",
                response.status()
            );
            return Err(PubMedError::from_status(response.status()));
        }

        let body = response.text().await?;
        let search_result: ESearchResult = serde_json::from_str(&body)?;

        if let Some(message) = search_result.esearchresult.error {
            warn!(error = %message, "ESearch rejected the query");
            return Err(PubMedError::ApiError {
                status: 200,
                message,
            });
        }

        let pmids = search_result.esearchresult.idlist;
        info!(
            results_found = pmids.len(),
            total_count = search_result.esearchresult.count.as_deref().unwrap_or("?"),
            "Search completed successfully"
        );

        Ok(pmids)
    }

    /// Fetch the EFetch XML document for one PMID
    ///
    /// # Errors
    ///
    /// * `PubMedError::RequestError` - If the HTTP request fails
    /// * `PubMedError::ApiError` - If NCBI answers with an error status
    #[instrument(skip(self), fields(pmid = %pmid))]
    pub async fn fetch_record_xml(&self, pmid: &str) -> Result<String> {
        let url = self.endpoint_url(
            "efetch.fcgi",
            &[
                ("db", "pubmed".to_string()),
                ("id", pmid.to_string()),
                ("retmode", "xml".to_string()),
            ],
        );

        debug!("Making EFetch API request");
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            warn!("API request failed with status: {}", response.status());
            return Err(PubMedError::from_status(response.status()));
        }

        Ok(response.text().await?)
    }

    /// Fetch one record and extract its trial metadata
    ///
    /// A request NCBI answers with an HTTP error status (4xx or 5xx) is
    /// logged and yields [`RecordInfo::absent`]. Transport failures and
    /// unparseable XML are returned.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use pubmed_trials::PubMedClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = PubMedClient::new();
    ///     let info = client.fetch_info("31978945").await?;
    ///     println!("Year: {:?}, NCTs: {:?}", info.pub_year, info.ncts);
    ///     Ok(())
    /// }
    /// ```
    #[instrument(skip(self), fields(pmid = %pmid))]
    pub async fn fetch_info(&self, pmid: &str) -> Result<RecordInfo> {
        let xml = match self.fetch_record_xml(pmid).await {
            Ok(xml) => xml,
            Err(e) if e.is_http_status_error() => {
                warn!(pmid = %pmid, error = %e, "PMID could not be fetched");
                return Ok(RecordInfo::absent());
            }
            Err(e) => return Err(e),
        };

        let result = PubMedXmlParser::parse_record_info(&xml);
        if let Err(e) = &result {
            warn!("Failed to parse record XML: {}", e);
        }
        result
    }
}

impl Default for PubMedClient {
    fn default() -> Self {
        Self::new()
    }
}
