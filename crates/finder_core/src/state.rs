use crate::view_model::FinderViewModel;
use crate::{tags, QueryModel, QuickTag, ResultState};

/// The controller's whole state: current query, derived tags, the renderable
/// result, and the two counters backing debounce collapsing and the
/// staleness guard.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    query: QueryModel,
    quick_tags: Vec<QuickTag>,
    result: ResultState,
    /// Newest debounce window. Expiry of any older generation is ignored.
    debounce_generation: u64,
    /// Most recently issued search. Completions carrying any other sequence
    /// number are discarded. Zero means nothing has been issued.
    issued_seq: u64,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &QueryModel {
        &self.query
    }

    pub fn quick_tags(&self) -> &[QuickTag] {
        &self.quick_tags
    }

    pub fn result(&self) -> &ResultState {
        &self.result
    }

    pub fn view(&self) -> FinderViewModel {
        FinderViewModel {
            result: self.result.clone(),
            quick_tags: self.quick_tags.to_vec(),
            page: self.query.page(),
            selected: self.query.filters().to_vec(),
        }
    }

    /// Replaces the query and recomputes quick tags from the new term.
    pub(crate) fn set_query(&mut self, query: QueryModel) {
        self.quick_tags = tags::extract(query.term());
        self.query = query;
    }

    pub(crate) fn set_result(&mut self, result: ResultState) {
        self.result = result;
    }

    /// The query snapshot an outstanding request was issued for, if any.
    pub(crate) fn loading_query(&self) -> Option<&QueryModel> {
        match &self.result {
            ResultState::Loading { for_query } => Some(for_query),
            _ => None,
        }
    }

    pub(crate) fn bump_debounce_generation(&mut self) -> u64 {
        self.debounce_generation += 1;
        self.debounce_generation
    }

    pub(crate) fn is_current_generation(&self, generation: u64) -> bool {
        generation == self.debounce_generation
    }

    pub(crate) fn next_seq(&mut self) -> u64 {
        self.issued_seq += 1;
        self.issued_seq
    }

    pub(crate) fn is_latest_seq(&self, seq: u64) -> bool {
        seq != 0 && seq == self.issued_seq
    }
}
