use thiserror::Error;

/// One outbound search, fully described. The controller builds these from
/// the current query model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogQuery {
    /// Free text; an empty term is a browse-by-subject query.
    pub term: String,
    /// Canonical category names, in selection order.
    pub subjects: Vec<String>,
    pub page: u32,
    pub page_size: usize,
}

/// One decoded record from the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRecord {
    pub id: String,
    pub title: String,
    pub authors: Vec<String>,
    pub cover_ref: Option<u64>,
    pub first_publish_year: Option<i32>,
}

/// One page of decoded results, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPage {
    pub records: Vec<CatalogRecord>,
    pub requested_page: u32,
    /// False when the catalog returned fewer records than asked for.
    pub is_complete: bool,
}

/// Why a search failed. The controller collapses these to a two-way
/// transport/malformed split; the full variant stays here for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out")]
    Timeout,
    #[error("http status {0}")]
    HttpStatus(u16),
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl SearchError {
    /// True when a response arrived but could not be interpreted; all other
    /// variants are transport-level failures.
    pub fn is_malformed(&self) -> bool {
        matches!(self, SearchError::Malformed(_))
    }
}
