//! Finder catalog: the external search collaborator and its wire decoding.
mod client;
mod decode;
mod types;

pub use client::{CatalogClient, ClientSettings, OpenLibraryClient};
pub use decode::decode_search_page;
pub use types::{CatalogQuery, CatalogRecord, SearchError, SearchPage};
