use std::time::Duration;

use crate::QueryModel;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Start (or restart) the debounce timer. Only the expiry of the newest
    /// generation is honored, so an unexpired older timer becomes inert.
    ScheduleDebounce { generation: u64, delay: Duration },
    /// Issue exactly one catalog search for this query snapshot. The sequence
    /// number tags the eventual completion for the staleness guard.
    IssueSearch { seq: u64, query: QueryModel },
}
