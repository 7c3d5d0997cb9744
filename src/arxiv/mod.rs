//! arXiv export API client: query construction, feed retrieval, and the
//! `PaperSearch` boundary trait.

mod atom;
mod types;

use std::time::Duration;

use reqwest::Client;
use tracing::debug;
use url::Url;

pub use types::PaperRecord;

const API_BASE: &str = "https://export.arxiv.org/api/query";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, thiserror::Error)]
pub enum ArxivError {
    #[error("arXiv API returned status {0}")]
    Status(u16),

    #[error("invalid query URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Abstraction for keyword paper search. Implemented by `ArxivClient` for
/// production; mock implementations used in tests.
///
/// No ordering guarantee beyond "as returned by the service"; fewer than
/// `limit` results (including zero) is legal.
pub trait PaperSearch {
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<PaperRecord>, ArxivError>;
}

/// Sort order requested from the arXiv API.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum SortMode {
    /// Most recently submitted first.
    #[default]
    Latest,
    /// The API's own relevance ordering.
    Relevance,
}

impl SortMode {
    fn as_api_str(self) -> &'static str {
        match self {
            SortMode::Latest => "submittedDate",
            SortMode::Relevance => "relevance",
        }
    }
}

#[derive(Clone)]
pub struct ArxivClient {
    http: Client,
    base_url: String,
    category: String,
    sort: SortMode,
}

impl ArxivClient {
    pub fn new(http: Client, category: String, sort: SortMode) -> Self {
        Self {
            http,
            base_url: API_BASE.to_string(),
            category,
            sort,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_base_url(http: Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.to_string(),
            category: "cs.*".to_string(),
            sort: SortMode::Latest,
        }
    }

    fn search_url(&self, query: &str, limit: usize) -> Result<Url, url::ParseError> {
        let search_query = format!(
            "((ti:{query} OR abs:{query}) AND cat:{})",
            self.category
        );
        Url::parse_with_params(
            &self.base_url,
            &[
                ("search_query", search_query.as_str()),
                ("start", "0"),
                ("max_results", &limit.to_string()),
                ("sortBy", self.sort.as_api_str()),
                ("sortOrder", "descending"),
            ],
        )
    }
}

impl PaperSearch for ArxivClient {
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<PaperRecord>, ArxivError> {
        let url = self.search_url(query, limit)?;
        debug!(%url, "arxiv query");

        let response = self
            .http
            .get(url)
            .header("User-Agent", crate::USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ArxivError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let papers = atom::parse_feed(&body);
        debug!(query, results = papers.len(), "arxiv search complete");
        Ok(papers)
    }
}
