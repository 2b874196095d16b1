//! Finder core: pure query/result state machine and view-model helpers.
mod effect;
mod msg;
mod query;
mod result;
mod state;
mod tags;
mod update;
mod view_model;
mod vocabulary;

pub use effect::Effect;
pub use msg::Msg;
pub use query::{CategoryId, QueryModel, PAGE_SIZE};
pub use result::{CatalogItem, ResultPage, ResultState, SearchFailure};
pub use state::AppState;
pub use tags::{extract, QuickTag};
pub use update::{update, DEBOUNCE_DELAY, LOAD_ERROR_MESSAGE};
pub use view_model::FinderViewModel;
pub use vocabulary::{canonical, CATEGORIES};
