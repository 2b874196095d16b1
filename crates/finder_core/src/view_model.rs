use crate::{CategoryId, QuickTag, ResultState};

/// Everything the presentation layer may read from the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinderViewModel {
    pub result: ResultState,
    pub quick_tags: Vec<QuickTag>,
    pub page: u32,
    pub selected: Vec<CategoryId>,
}
