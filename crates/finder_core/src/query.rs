use std::fmt;

/// Number of items requested per result page. Fixed by the controller,
/// not user-configurable.
pub const PAGE_SIZE: usize = 20;

/// Stable identifier for a catalog category. Carries the canonical
/// vocabulary name (see [`crate::CATEGORIES`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CategoryId(String);

impl CategoryId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CategoryId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Immutable description of what to search for. Every user input produces a
/// new version; nothing mutates a `QueryModel` in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryModel {
    term: String,
    filters: Vec<CategoryId>,
    page: u32,
}

impl Default for QueryModel {
    fn default() -> Self {
        Self {
            term: String::new(),
            filters: Vec::new(),
            page: 1,
        }
    }
}

impl QueryModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    /// Selected category filters in insertion order. Order is irrelevant to
    /// request semantics but kept stable for the UI.
    pub fn filters(&self) -> &[CategoryId] {
        &self.filters
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    /// New version with a different free-text term. Resets to page 1.
    pub fn with_term(&self, term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            filters: self.filters.clone(),
            page: 1,
        }
    }

    /// New version with `id` toggled: removed if present, appended otherwise.
    /// Resets to page 1.
    pub fn with_toggled_filter(&self, id: CategoryId) -> Self {
        let mut filters = self.filters.clone();
        match filters.iter().position(|existing| *existing == id) {
            Some(index) => {
                filters.remove(index);
            }
            None => filters.push(id),
        }
        Self {
            term: self.term.clone(),
            filters,
            page: 1,
        }
    }

    /// New version on a different page. Pages below 1 clamp to 1.
    pub fn with_page(&self, page: u32) -> Self {
        Self {
            term: self.term.clone(),
            filters: self.filters.clone(),
            page: page.max(1),
        }
    }
}
