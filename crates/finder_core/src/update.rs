use std::time::Duration;

use crate::{AppState, Effect, Msg, ResultState};

/// How long typing-speed input must settle before a search is issued.
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(400);

/// The only failure text the presentation layer ever sees. The underlying
/// cause is logged by the runtime, not rendered.
pub const LOAD_ERROR_MESSAGE: &str = "Could not load results. Please try again.";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::TermEdited(term) => {
            if term == state.query().term() {
                // Unchanged text re-delivered by the input box settles nothing.
                return (state, Vec::new());
            }
            let next = state.query().with_term(term);
            state.set_query(next);
            schedule_debounce(&mut state)
        }
        Msg::FilterToggled(id) => {
            let next = state.query().with_toggled_filter(id);
            state.set_query(next);
            schedule_debounce(&mut state)
        }
        Msg::NextPage => {
            let page = state.query().page().saturating_add(1);
            let next = state.query().with_page(page);
            state.set_query(next);
            issue_search(&mut state)
        }
        Msg::PreviousPage => {
            if state.query().page() == 1 {
                // Idempotent at the floor.
                return (state, Vec::new());
            }
            let page = state.query().page() - 1;
            let next = state.query().with_page(page);
            state.set_query(next);
            issue_search(&mut state)
        }
        Msg::Refresh => issue_search(&mut state),
        Msg::DebounceElapsed { generation } => {
            if state.is_current_generation(generation) {
                issue_search(&mut state)
            } else {
                // A newer input superseded this window.
                Vec::new()
            }
        }
        Msg::SearchCompleted { seq, outcome } => {
            if state.is_latest_seq(seq) {
                let for_query = state
                    .loading_query()
                    .cloned()
                    .unwrap_or_else(|| state.query().clone());
                let result = match outcome {
                    Ok(page) => ResultState::Success { for_query, page },
                    Err(_) => ResultState::Error {
                        for_query,
                        message: LOAD_ERROR_MESSAGE.to_string(),
                    },
                };
                state.set_result(result);
            }
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn schedule_debounce(state: &mut AppState) -> Vec<Effect> {
    let generation = state.bump_debounce_generation();
    vec![Effect::ScheduleDebounce {
        generation,
        delay: DEBOUNCE_DELAY,
    }]
}

fn issue_search(state: &mut AppState) -> Vec<Effect> {
    // Discrete actions also invalidate any still-pending debounce window, so
    // a late expiry cannot fire a second search for an older query.
    state.bump_debounce_generation();
    let seq = state.next_seq();
    let query = state.query().clone();
    state.set_result(ResultState::Loading {
        for_query: query.clone(),
    });
    vec![Effect::IssueSearch { seq, query }]
}
