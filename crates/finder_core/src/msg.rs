use crate::{CategoryId, ResultPage, SearchFailure};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the free-text search box (debounced input).
    TermEdited(String),
    /// User toggled a category chip (debounced input).
    FilterToggled(CategoryId),
    /// User requested the next result page. Bypasses debounce.
    NextPage,
    /// User requested the previous result page. Bypasses debounce;
    /// a no-op at page 1.
    PreviousPage,
    /// User requested a reload of the current query. Bypasses debounce.
    Refresh,
    /// A previously scheduled debounce window expired.
    DebounceElapsed { generation: u64 },
    /// An issued search resolved, successfully or not.
    SearchCompleted {
        seq: u64,
        outcome: Result<ResultPage, SearchFailure>,
    },
    /// Fallback for placeholder wiring.
    NoOp,
}
