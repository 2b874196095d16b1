use finder_catalog::{CatalogQuery, SearchError, SearchPage};
use finder_core::{CatalogItem, QueryModel, ResultPage, SearchFailure, PAGE_SIZE};

pub(crate) fn to_catalog_query(query: &QueryModel) -> CatalogQuery {
    CatalogQuery {
        term: query.term().to_string(),
        subjects: query
            .filters()
            .iter()
            .map(|id| id.as_str().to_string())
            .collect(),
        page: query.page(),
        page_size: PAGE_SIZE,
    }
}

pub(crate) fn to_result_page(page: SearchPage) -> ResultPage {
    ResultPage {
        items: page
            .records
            .into_iter()
            .map(|record| CatalogItem {
                id: record.id,
                title: record.title,
                authors: record.authors,
                cover_ref: record.cover_ref,
                first_publish_year: record.first_publish_year,
            })
            .collect(),
        requested_page: page.requested_page,
        is_complete: page.is_complete,
    }
}

/// Collapses the catalog's error taxonomy to the two-way split the core
/// renders from. The detailed variant is logged before this point.
pub(crate) fn to_failure(err: &SearchError) -> SearchFailure {
    if err.is_malformed() {
        SearchFailure::MalformedResponse
    } else {
        SearchFailure::Transport
    }
}
