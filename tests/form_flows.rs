//! End-to-end form flows driven through `handle_event`, the same entry
//! point the plugin shim uses.

use proptest::prelude::*;
use transaction_processor::{handle_event, initialize, Config, Event, Focus, FormState, Phase, SortOrder};

fn new_form() -> FormState {
    initialize(&Config::default())
}

fn type_text(state: &mut FormState, text: &str) {
    for c in text.chars() {
        let event = if c == '\n' { Event::Activate } else { Event::Char(c) };
        handle_event(state, &event).unwrap();
    }
}

fn processed(text: &str) -> FormState {
    let mut state = new_form();
    type_text(&mut state, text);
    let (render, actions) = handle_event(&mut state, &Event::Process).unwrap();
    assert!(render);
    assert!(actions.is_empty());
    state
}

#[test]
fn valid_input_is_shown_ascending_with_summary() {
    let state = processed("10, 5, 20, 1");
    let vm = state.compute_viewmodel(80);

    assert!(vm.errors.is_none());
    let results = vm.results.expect("results block");
    assert_eq!(results.numbers, vec!["1", "5", "10", "20"]);
    assert_eq!(results.summary.total, "Total values: 4");
    assert_eq!(results.summary.order, "Order: Ascending");
    assert_eq!(results.summary.range, "Range: 1 to 20");
    assert_eq!(results.toggle.label, "↓ Switch to Descending");
}

#[test]
fn invalid_token_is_reported_and_results_hidden() {
    let state = processed("10, abc, 20");
    let vm = state.compute_viewmodel(80);

    assert!(vm.results.is_none());
    let errors = vm.errors.expect("error block");
    assert_eq!(errors.title, "Validation Errors:");
    assert_eq!(errors.messages, vec!["Value \"abc\" at position 2 is not a valid number"]);
    assert!(vm.input.has_errors);
}

#[test]
fn toggling_shows_descending_without_reprocessing() {
    let mut state = processed("30, 10, 20");
    handle_event(&mut state, &Event::ToggleSort).unwrap();

    let results = state.compute_viewmodel(80).results.expect("results block");
    assert_eq!(results.numbers, vec!["30", "20", "10"]);
    assert_eq!(results.summary.order, "Order: Descending");
    assert_eq!(results.summary.range, "Range: 10 to 30");
    assert_eq!(results.toggle.label, "↑ Switch to Ascending");
}

#[test]
fn reset_clears_everything_and_disables_itself() {
    let mut state = processed("3, 2, 1");
    assert!(state.snapshot().can_reset());

    let (render, _) = handle_event(&mut state, &Event::Reset).unwrap();
    assert!(render);

    let vm = state.compute_viewmodel(80);
    assert_eq!(state.snapshot().raw_input(), "");
    assert!(vm.errors.is_none());
    assert!(vm.results.is_none());
    assert!(!vm.buttons[1].enabled);
    assert_eq!(state.snapshot().phase(), Phase::Idle);

    let (render, _) = handle_event(&mut state, &Event::Reset).unwrap();
    assert!(!render);
}

#[test]
fn every_invalid_token_is_reported_in_order() {
    let state = processed("1e3, .5, Infinity,, 3.14.15, 5., nan");
    let messages = state.compute_viewmodel(80).errors.expect("error block").messages;

    assert_eq!(
        messages,
        vec![
            "Value \"1e3\" at position 1 is not a valid number",
            "Value \"Infinity\" at position 3 is not a valid number",
            "Value \"3.14.15\" at position 4 is not a valid number",
            "Value \"nan\" at position 6 is not a valid number",
        ]
    );
    assert_eq!(state.snapshot().validation().numbers, vec![0.5, 5.0]);
}

#[test]
fn multi_line_input_is_split_on_commas_only() {
    let state = processed("4,\n2,\n-1.5");
    let results = state.compute_viewmodel(80).results.expect("results block");
    assert_eq!(results.numbers, vec!["-1.5", "2", "4"]);
}

#[test]
fn separators_only_input_reports_missing_values() {
    let state = processed(" , ,  ,");
    let errors = state.compute_viewmodel(80).errors.expect("error block");
    assert_eq!(errors.messages, vec!["Please enter valid comma-separated values"]);
}

#[test]
fn blank_input_cannot_be_processed() {
    let mut state = new_form();
    type_text(&mut state, "   ");

    let (render, _) = handle_event(&mut state, &Event::Process).unwrap();
    assert!(!render);
    assert!(!state.snapshot().has_processed());
    assert!(state.compute_viewmodel(80).errors.is_none());
}

#[test]
fn editing_after_process_keeps_the_shown_result() {
    let mut state = processed("2, 1");
    type_text(&mut state, ", abc");

    let vm = state.compute_viewmodel(80);
    assert_eq!(vm.results.expect("results block").numbers, vec!["1", "2"]);
    assert!(vm.errors.is_none());
}

#[test]
fn keyboard_only_flow_through_focus() {
    let mut state = new_form();
    type_text(&mut state, "9, 8");

    handle_event(&mut state, &Event::FocusNext).unwrap();
    assert_eq!(state.focus, Focus::ProcessButton);
    handle_event(&mut state, &Event::Activate).unwrap();

    handle_event(&mut state, &Event::FocusNext).unwrap();
    handle_event(&mut state, &Event::FocusNext).unwrap();
    assert_eq!(state.focus, Focus::SortToggle);
    handle_event(&mut state, &Event::Activate).unwrap();
    assert_eq!(state.snapshot().sort_order(), SortOrder::Descending);

    handle_event(&mut state, &Event::FocusPrevious).unwrap();
    assert_eq!(state.focus, Focus::ResetButton);
    handle_event(&mut state, &Event::Activate).unwrap();
    assert_eq!(state.focus, Focus::Input);
    assert_eq!(state.snapshot().sort_order(), SortOrder::Ascending);
}

#[test]
fn configured_initial_order_applies_on_load_and_reset() {
    let config = Config {
        initial_order: SortOrder::Descending,
        ..Config::default()
    };
    let mut state = initialize(&config);
    type_text(&mut state, "1, 3, 2");
    handle_event(&mut state, &Event::Process).unwrap();
    handle_event(&mut state, &Event::ToggleSort).unwrap();
    assert_eq!(state.snapshot().sort_order(), SortOrder::Ascending);

    handle_event(&mut state, &Event::Reset).unwrap();
    assert_eq!(state.snapshot().sort_order(), SortOrder::Descending);
}

proptest! {
    #[test]
    fn toggling_twice_restores_the_displayed_numbers(values in prop::collection::vec(-1000i32..1000, 1..20)) {
        let input = values.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ");
        let mut state = processed(&input);
        let before = state.compute_viewmodel(80);

        handle_event(&mut state, &Event::ToggleSort).unwrap();
        handle_event(&mut state, &Event::ToggleSort).unwrap();

        prop_assert_eq!(state.compute_viewmodel(80), before);
    }

    #[test]
    fn summary_range_matches_extremes(values in prop::collection::vec(-1000i32..1000, 1..20)) {
        let input = values.iter().map(ToString::to_string).collect::<Vec<_>>().join(",");
        let mut state = processed(&input);
        let min = values.iter().min().copied().unwrap_or_default();
        let max = values.iter().max().copied().unwrap_or_default();
        let expected = format!("Range: {min} to {max}");

        let ascending = state.compute_viewmodel(80).results.unwrap().summary.range;
        handle_event(&mut state, &Event::ToggleSort).unwrap();
        let descending = state.compute_viewmodel(80).results.unwrap().summary.range;

        prop_assert_eq!(&ascending, &expected);
        prop_assert_eq!(&descending, &expected);
    }
}
