//! Configuration for the NCBI client and the search pipeline

use std::time::Duration;

use crate::query::DateRange;

const DEFAULT_BASE_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils";
const DEFAULT_TOOL: &str = "pubmed-trials";

/// Default number of identifiers requested per search
pub const DEFAULT_PAGE_SIZE: usize = 1000;

/// Configuration for [`PubMedClient`](crate::PubMedClient)
///
/// NCBI asks every caller to identify itself with a contact email and a tool
/// name. Both are sent with each request.
///
/// # Example
///
/// ```
/// use pubmed_trials::ClientConfig;
///
/// let config = ClientConfig::new()
///     .with_email("researcher@university.edu")
///     .with_tool("trial-survey");
///
/// assert_eq!(config.effective_tool(), "trial-survey");
/// ```
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Contact email passed to E-utilities as `email`
    pub email: Option<String>,
    /// Tool name passed to E-utilities as `tool`
    pub tool: Option<String>,
    /// Override for the E-utilities base URL
    pub base_url: Option<String>,
    /// Override for the HTTP User-Agent header
    pub user_agent: Option<String>,
    /// Per-request timeout
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new() -> Self {
        Self {
            email: None,
            tool: None,
            base_url: None,
            user_agent: None,
            timeout: Duration::from_secs(30),
        }
    }

    /// Set the contact email sent with every request
    pub fn with_email<S: Into<String>>(mut self, email: S) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the tool name sent with every request
    pub fn with_tool<S: Into<String>>(mut self, tool: S) -> Self {
        self.tool = Some(tool.into());
        self
    }

    /// Point the client at a different E-utilities host (used for mock servers)
    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn effective_base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
    }

    pub fn effective_user_agent(&self) -> String {
        match &self.user_agent {
            Some(agent) => agent.clone(),
            None => format!("pubmed-trials/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    pub fn effective_tool(&self) -> &str {
        self.tool.as_deref().unwrap_or(DEFAULT_TOOL)
    }

    /// Identity parameters appended to every E-utilities request
    pub fn build_api_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();

        if let Some(email) = &self.email {
            params.push(("email".to_string(), email.clone()));
        }
        params.push(("tool".to_string(), self.effective_tool().to_string()));

        params
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Settings for a single pipeline run
#[derive(Clone, Debug, PartialEq)]
pub struct PipelineConfig {
    /// Maximum identifiers returned per search (`retmax`)
    pub page_size: usize,
    /// Inclusive publication-date window for searches
    pub date_range: DateRange,
}

impl PipelineConfig {
    pub fn new() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            date_range: DateRange::default(),
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_date_range(mut self, date_range: DateRange) -> Self {
        self.date_range = date_range;
        self
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::new()
    }
}
