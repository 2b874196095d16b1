use crate::QueryModel;

/// One record from the external catalog, reduced to the fields the
/// controller reasons about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogItem {
    /// Stable, unique identifier from the catalog.
    pub id: String,
    pub title: String,
    /// Possibly empty.
    pub authors: Vec<String>,
    /// Opaque cover image reference, when the catalog has one.
    pub cover_ref: Option<u64>,
    pub first_publish_year: Option<i32>,
}

/// One page of catalog results, in the order the catalog returned them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultPage {
    pub items: Vec<CatalogItem>,
    pub requested_page: u32,
    /// False when fewer items than the page size came back, meaning no
    /// further pages exist.
    pub is_complete: bool,
}

/// Collapsed failure taxonomy at the controller boundary. The detailed cause
/// stays in the catalog crate for diagnostics; only the class crosses over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFailure {
    /// Network unreachable, timeout, or non-success response status.
    Transport,
    /// Response received but not interpretable into a result page.
    MalformedResponse,
}

/// The single renderable state the presentation layer observes.
///
/// Exactly one is current at any time; superseded in-flight requests never
/// overwrite a state produced by a more recent query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ResultState {
    /// No query has been run yet.
    #[default]
    Idle,
    /// A request is outstanding for this exact query snapshot.
    Loading { for_query: QueryModel },
    Success {
        for_query: QueryModel,
        page: ResultPage,
    },
    Error {
        for_query: QueryModel,
        message: String,
    },
}
