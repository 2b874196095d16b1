use std::sync::Once;

use finder_core::{
    update, AppState, CategoryId, Effect, Msg, ResultState, DEBOUNCE_DELAY,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(finder_logging::initialize_for_tests);
}

fn type_term(state: AppState, term: &str) -> (AppState, Vec<Effect>) {
    update(state, Msg::TermEdited(term.to_string()))
}

fn latest_generation(effects: &[Effect]) -> u64 {
    match effects.last() {
        Some(Effect::ScheduleDebounce { generation, .. }) => *generation,
        other => panic!("expected ScheduleDebounce, got {other:?}"),
    }
}

#[test]
fn term_edit_schedules_debounce() {
    init_logging();
    let state = AppState::new();
    let (state, effects) = type_term(state, "dragons");

    assert_eq!(
        effects,
        vec![Effect::ScheduleDebounce {
            generation: 1,
            delay: DEBOUNCE_DELAY,
        }]
    );
    // Nothing is issued until the window settles.
    assert_eq!(state.view().result, ResultState::Idle);
}

#[test]
fn burst_of_edits_issues_one_search_for_the_last_model() {
    init_logging();
    let mut state = AppState::new();
    let mut generations = Vec::new();
    for term in ["d", "dr", "dragons"] {
        let (next, effects) = type_term(state, term);
        generations.push(latest_generation(&effects));
        state = next;
    }

    // Superseded windows expire without effect.
    let (state, effects) = update(
        state,
        Msg::DebounceElapsed {
            generation: generations[0],
        },
    );
    assert!(effects.is_empty());
    let (state, effects) = update(
        state,
        Msg::DebounceElapsed {
            generation: generations[1],
        },
    );
    assert!(effects.is_empty());

    // The surviving window issues exactly one search for the final model.
    let (state, effects) = update(
        state,
        Msg::DebounceElapsed {
            generation: generations[2],
        },
    );
    match effects.as_slice() {
        [Effect::IssueSearch { seq, query }] => {
            assert_eq!(*seq, 1);
            assert_eq!(query.term(), "dragons");
            assert_eq!(query.page(), 1);
            assert!(query.filters().is_empty());
        }
        other => panic!("expected one IssueSearch, got {other:?}"),
    }
    assert!(matches!(state.view().result, ResultState::Loading { .. }));
}

#[test]
fn unchanged_term_does_not_restart_the_window() {
    init_logging();
    let state = AppState::new();
    let (state, effects) = type_term(state, "dragons");
    assert_eq!(effects.len(), 1);

    let (_state, effects) = type_term(state, "dragons");
    assert!(effects.is_empty());
}

#[test]
fn filter_toggle_pair_restores_original_set() {
    init_logging();
    let state = AppState::new();
    let fantasy = CategoryId::from("Fantasy");

    let (state, effects) = update(state, Msg::FilterToggled(fantasy.clone()));
    assert_eq!(state.view().selected, vec![fantasy.clone()]);
    assert!(matches!(effects[0], Effect::ScheduleDebounce { .. }));

    let (state, _effects) = update(state, Msg::FilterToggled(fantasy));
    assert!(state.view().selected.is_empty());
}

#[test]
fn two_toggles_in_one_window_issue_one_search_in_insertion_order() {
    init_logging();
    let state = AppState::new();
    let (state, _) = update(state, Msg::FilterToggled(CategoryId::from("Fantasy")));
    let (state, effects) = update(state, Msg::FilterToggled(CategoryId::from("Horror")));
    let generation = latest_generation(&effects);

    let (_state, effects) = update(state, Msg::DebounceElapsed { generation });
    match effects.as_slice() {
        [Effect::IssueSearch { query, .. }] => {
            assert_eq!(
                query.filters(),
                &[CategoryId::from("Fantasy"), CategoryId::from("Horror")]
            );
        }
        other => panic!("expected one IssueSearch, got {other:?}"),
    }
}

#[test]
fn term_edits_recompute_quick_tags_in_the_view() {
    init_logging();
    let state = AppState::new();
    let (state, _) = type_term(state, "Fantasy published after 2020");

    let labels: Vec<String> = state
        .view()
        .quick_tags
        .iter()
        .map(|tag| tag.label.clone())
        .collect();
    assert_eq!(labels, vec!["Year: > 2020", "Fantasy"]);
}
