use std::time::Duration;

use finder_logging::finder_debug;

use crate::decode::decode_search_page;
use crate::{CatalogQuery, SearchError, SearchPage};

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: "https://openlibrary.org".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// The external catalog collaborator. Implementations must fail explicitly;
/// a returned page is always fully decoded, never partial garbage.
#[async_trait::async_trait]
pub trait CatalogClient: Send + Sync {
    async fn search(&self, query: &CatalogQuery) -> Result<SearchPage, SearchError>;
}

/// `CatalogClient` backed by the Open Library `search.json` endpoint.
#[derive(Debug, Clone)]
pub struct OpenLibraryClient {
    settings: ClientSettings,
    client: reqwest::Client,
}

impl OpenLibraryClient {
    pub fn new(settings: ClientSettings) -> Result<Self, SearchError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| SearchError::Network(err.to_string()))?;
        Ok(Self { settings, client })
    }

    fn search_url(&self, query: &CatalogQuery) -> Result<reqwest::Url, SearchError> {
        let base = reqwest::Url::parse(&self.settings.base_url)
            .map_err(|err| SearchError::Network(err.to_string()))?;
        let mut url = base
            .join("/search.json")
            .map_err(|err| SearchError::Network(err.to_string()))?;
        {
            let mut pairs = url.query_pairs_mut();
            if !query.term.is_empty() {
                pairs.append_pair("q", &query.term);
            }
            for subject in &query.subjects {
                pairs.append_pair("subject", subject);
            }
            pairs.append_pair("page", &query.page.to_string());
        }
        Ok(url)
    }
}

#[async_trait::async_trait]
impl CatalogClient for OpenLibraryClient {
    async fn search(&self, query: &CatalogQuery) -> Result<SearchPage, SearchError> {
        let url = self.search_url(query)?;
        finder_debug!("catalog search page={} url={}", query.page, url);

        let response = self.client.get(url).send().await.map_err(map_reqwest_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::HttpStatus(status.as_u16()));
        }

        let bytes = response.bytes().await.map_err(map_reqwest_error)?;
        decode_search_page(&bytes, query.page, query.page_size)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> SearchError {
    if err.is_timeout() {
        return SearchError::Timeout;
    }
    SearchError::Network(err.to_string())
}
