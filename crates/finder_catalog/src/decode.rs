use serde::Deserialize;

use crate::{CatalogRecord, SearchError, SearchPage};

#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    #[serde(default)]
    docs: Vec<DocRecord>,
}

/// The handful of `search.json` fields the controller reasons about.
/// Everything else in the payload is ignored.
#[derive(Debug, Deserialize)]
struct DocRecord {
    key: Option<String>,
    title: Option<String>,
    #[serde(default)]
    author_name: Vec<String>,
    cover_i: Option<u64>,
    first_publish_year: Option<i32>,
}

/// Decodes a raw `search.json` payload into at most `page_size` records.
///
/// Entries without a stable `key` cannot be identified or linked and are
/// skipped. Any payload that does not parse is a [`SearchError::Malformed`].
pub fn decode_search_page(
    bytes: &[u8],
    requested_page: u32,
    page_size: usize,
) -> Result<SearchPage, SearchError> {
    let envelope: SearchEnvelope =
        serde_json::from_slice(bytes).map_err(|err| SearchError::Malformed(err.to_string()))?;

    let mut records = Vec::with_capacity(page_size);
    for doc in envelope.docs {
        if records.len() == page_size {
            break;
        }
        let Some(id) = doc.key else { continue };
        records.push(CatalogRecord {
            id,
            title: doc.title.unwrap_or_default(),
            authors: doc.author_name,
            cover_ref: doc.cover_i,
            first_publish_year: doc.first_publish_year,
        });
    }

    let is_complete = records.len() >= page_size;
    Ok(SearchPage {
        records,
        requested_page,
        is_complete,
    })
}
