//! Form state, transitions and view model computation.
//!
//! This module defines [`FormSnapshot`], the immutable record of everything
//! the form knows (raw input, last validation result, processed flag, sort
//! order), and [`FormState`], which owns the current snapshot together with
//! keyboard focus and the theme.
//!
//! # Architecture
//!
//! Every user action builds a new snapshot from the previous one and
//! replaces it wholesale; nothing is patched in place. Sorted numbers, the
//! summary and the rendered view are projections of the snapshot, computed
//! on demand and never stored.
//!
//! # Transitions
//!
//! | Action       | Enabled when                         | Effect                                   |
//! |--------------|--------------------------------------|------------------------------------------|
//! | edit         | always                               | replaces raw input only                  |
//! | Process      | trimmed input non-empty              | re-validates, marks processed            |
//! | Reset        | processed                            | back to the initial snapshot             |
//! | Toggle sort  | processed with a valid, non-empty result | flips sort order only                |
//!
//! # Example
//!
//! ```rust
//! use transaction_processor::app::FormState;
//! use transaction_processor::ui::Theme;
//!
//! let mut state = FormState::new(Theme::default());
//! state.replace_input("30, 10, 20".to_string());
//! assert!(state.process());
//! assert!(state.toggle_sort());
//! assert_eq!(state.snapshot().sorted_numbers(), vec![30.0, 20.0, 10.0]);
//! ```

use super::modes::{Focus, Phase};
use crate::domain::{sort_numbers, validate, NumericRange, SortOrder, ValidationResult};
use crate::ui::helpers::{format_number, wrap_text};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    ButtonInfo, ErrorBlock, FooterInfo, FormViewModel, HeaderInfo, InputBoxInfo, ResultsBlock,
    SummaryInfo,
};

/// Label above the input box.
pub const INPUT_LABEL: &str = "Enter Transaction Values (comma-separated):";

/// Placeholder shown while the input is empty.
pub const INPUT_PLACEHOLDER: &str = "e.g., 10.5, 25, 3.14, 100, 7.89";

/// Help line under the input box.
pub const INPUT_HELP: &str =
    "Enter numerical values separated by commas. Both integers and decimals are accepted.";

/// Number of text rows visible in the input box.
pub const INPUT_VISIBLE_ROWS: usize = 4;

/// Columns consumed by the input box frame and margins.
const INPUT_CHROME_COLS: usize = 6;

/// Immutable snapshot of the form's data.
#[derive(Debug, Clone, PartialEq)]
pub struct FormSnapshot {
    raw_input: String,
    validation: ValidationResult,
    has_processed: bool,
    sort_order: SortOrder,
}

impl FormSnapshot {
    /// The idle snapshot: empty input, empty-valid result, given order.
    #[must_use]
    pub fn initial(sort_order: SortOrder) -> Self {
        Self {
            raw_input: String::new(),
            validation: ValidationResult::default(),
            has_processed: false,
            sort_order,
        }
    }

    #[must_use]
    pub fn raw_input(&self) -> &str {
        &self.raw_input
    }

    #[must_use]
    pub const fn validation(&self) -> &ValidationResult {
        &self.validation
    }

    #[must_use]
    pub const fn has_processed(&self) -> bool {
        self.has_processed
    }

    #[must_use]
    pub const fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        if self.has_processed {
            Phase::Processed
        } else {
            Phase::Idle
        }
    }

    /// Process is enabled iff the trimmed input is non-empty.
    #[must_use]
    pub fn can_process(&self) -> bool {
        !self.raw_input.trim().is_empty()
    }

    /// Reset is enabled iff Process has run since load or the last reset.
    #[must_use]
    pub const fn can_reset(&self) -> bool {
        self.has_processed
    }

    /// Results (and the sort toggle) are shown iff processed with a valid,
    /// non-empty result.
    #[must_use]
    pub fn shows_results(&self) -> bool {
        self.has_processed && self.validation.has_displayable_numbers()
    }

    /// The error block is shown iff processed with at least one error.
    #[must_use]
    pub fn shows_errors(&self) -> bool {
        self.has_processed && !self.validation.errors.is_empty()
    }

    /// Numbers in the current sort order; empty unless the result is valid
    /// and non-empty.
    #[must_use]
    pub fn sorted_numbers(&self) -> Vec<f64> {
        if !self.validation.has_displayable_numbers() {
            return vec![];
        }
        sort_numbers(&self.validation.numbers, self.sort_order)
    }

    /// Range of the full valid numeric set, independent of sort order.
    #[must_use]
    pub fn range(&self) -> Option<NumericRange> {
        if !self.validation.has_displayable_numbers() {
            return None;
        }
        NumericRange::of(&self.validation.numbers)
    }

    /// Snapshot with the raw input replaced. Validation and the processed
    /// flag are untouched.
    #[must_use]
    pub fn with_input(self, raw_input: String) -> Self {
        Self { raw_input, ..self }
    }

    /// Snapshot after running Process on the current input.
    #[must_use]
    pub fn processed(self) -> Self {
        let validation = validate(&self.raw_input);
        Self {
            validation,
            has_processed: true,
            ..self
        }
    }

    /// Snapshot with the sort order flipped.
    #[must_use]
    pub fn with_toggled_order(self) -> Self {
        Self {
            sort_order: self.sort_order.toggled(),
            ..self
        }
    }
}

impl Default for FormSnapshot {
    fn default() -> Self {
        Self::initial(SortOrder::default())
    }
}

/// Central application state container.
///
/// Owns the current [`FormSnapshot`] plus UI-only concerns (focus, theme,
/// the order restored by Reset). Mutated by the event handler; every
/// transition method returns `true` if it changed anything and `false` if
/// the corresponding control was disabled.
#[derive(Debug, Clone)]
pub struct FormState {
    snapshot: FormSnapshot,

    /// Control that receives keyboard input. Always an enabled control.
    pub focus: Focus,

    /// Order used on load and restored by Reset.
    pub initial_order: SortOrder,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl FormState {
    /// Creates an idle form with ascending order.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self::with_initial_order(theme, SortOrder::default())
    }

    /// Creates an idle form whose load and reset order is `initial_order`.
    #[must_use]
    pub fn with_initial_order(theme: Theme, initial_order: SortOrder) -> Self {
        Self {
            snapshot: FormSnapshot::initial(initial_order),
            focus: Focus::Input,
            initial_order,
            theme,
        }
    }

    #[must_use]
    pub const fn snapshot(&self) -> &FormSnapshot {
        &self.snapshot
    }

    fn transition(&mut self, step: impl FnOnce(FormSnapshot) -> FormSnapshot) {
        let previous = std::mem::take(&mut self.snapshot);
        self.snapshot = step(previous);
        self.normalize_focus();
    }

    /// Replaces the raw input text. Never re-validates.
    pub fn replace_input(&mut self, raw_input: String) {
        self.transition(|snapshot| snapshot.with_input(raw_input));
    }

    /// Appends one character to the raw input.
    pub fn insert_char(&mut self, c: char) {
        let mut text = self.snapshot.raw_input.clone();
        text.push(c);
        self.replace_input(text);
    }

    /// Removes the last character of the raw input. Returns `false` if the
    /// input was already empty.
    pub fn delete_char(&mut self) -> bool {
        let mut text = self.snapshot.raw_input.clone();
        if text.pop().is_none() {
            return false;
        }
        self.replace_input(text);
        true
    }

    /// Clears the raw input. Returns `false` if it was already empty.
    pub fn clear_input(&mut self) -> bool {
        if self.snapshot.raw_input.is_empty() {
            return false;
        }
        self.replace_input(String::new());
        true
    }

    /// Runs Process: validates the current input and marks the form processed.
    pub fn process(&mut self) -> bool {
        if !self.snapshot.can_process() {
            tracing::debug!("process ignored: input is blank");
            return false;
        }

        self.transition(FormSnapshot::processed);

        tracing::debug!(
            is_valid = self.snapshot.validation.is_valid,
            error_count = self.snapshot.validation.errors.len(),
            number_count = self.snapshot.validation.numbers.len(),
            "input processed"
        );
        true
    }

    /// Runs Reset: restores the initial snapshot.
    pub fn reset(&mut self) -> bool {
        if !self.snapshot.can_reset() {
            tracing::debug!("reset ignored: nothing processed");
            return false;
        }

        let initial_order = self.initial_order;
        self.transition(|_| FormSnapshot::initial(initial_order));
        tracing::debug!(order = %initial_order, "form reset");
        true
    }

    /// Flips the sort order while results are shown.
    pub fn toggle_sort(&mut self) -> bool {
        if !self.snapshot.shows_results() {
            tracing::debug!("sort toggle ignored: no results shown");
            return false;
        }

        self.transition(FormSnapshot::with_toggled_order);
        tracing::debug!(order = %self.snapshot.sort_order, "sort order toggled");
        true
    }

    /// Returns `true` if `control` can currently receive focus and be used.
    #[must_use]
    pub fn is_enabled(&self, control: Focus) -> bool {
        match control {
            Focus::Input => true,
            Focus::ProcessButton => self.snapshot.can_process(),
            Focus::ResetButton => self.snapshot.can_reset(),
            Focus::SortToggle => self.snapshot.shows_results(),
        }
    }

    /// Moves focus to the next enabled control, wrapping around.
    pub fn focus_next(&mut self) {
        self.focus = self.cycle_focus(1);
    }

    /// Moves focus to the previous enabled control, wrapping around.
    pub fn focus_previous(&mut self) {
        self.focus = self.cycle_focus(Focus::ALL.len() - 1);
    }

    fn cycle_focus(&self, step: usize) -> Focus {
        let len = Focus::ALL.len();
        let start = Focus::ALL
            .iter()
            .position(|f| *f == self.focus)
            .unwrap_or(0);

        (1..=len)
            .map(|offset| Focus::ALL[(start + offset * step) % len])
            .find(|candidate| self.is_enabled(*candidate))
            .unwrap_or(Focus::Input)
    }

    fn normalize_focus(&mut self) {
        if !self.is_enabled(self.focus) {
            self.focus = Focus::Input;
        }
    }

    /// Computes a renderable view model for a pane `cols` wide.
    ///
    /// Applies the rendering rules: nothing below the buttons before the
    /// first Process; the error block alone when there are errors; the
    /// results block alone when the result is valid and non-empty.
    #[must_use]
    pub fn compute_viewmodel(&self, cols: usize) -> FormViewModel {
        let snapshot = &self.snapshot;

        FormViewModel {
            header: HeaderInfo {
                title: "Transaction Processor".to_string(),
                subtitle: "Enter comma separated numbers to sort".to_string(),
            },
            input: self.compute_input_box(cols),
            buttons: vec![
                self.compute_button("Process Values", Focus::ProcessButton),
                self.compute_button("Reset", Focus::ResetButton),
            ],
            errors: snapshot.shows_errors().then(|| ErrorBlock {
                title: "Validation Errors:".to_string(),
                messages: snapshot.validation.errors.clone(),
            }),
            results: self.compute_results(),
            footer: self.compute_footer(),
        }
    }

    fn compute_input_box(&self, cols: usize) -> InputBoxInfo {
        let raw_input = &self.snapshot.raw_input;
        let mut lines = wrap_text(raw_input, cols.saturating_sub(INPUT_CHROME_COLS));
        if lines.len() > INPUT_VISIBLE_ROWS {
            lines.drain(..lines.len() - INPUT_VISIBLE_ROWS);
        }

        InputBoxInfo {
            label: INPUT_LABEL.to_string(),
            lines,
            placeholder: raw_input.is_empty().then(|| INPUT_PLACEHOLDER.to_string()),
            help: INPUT_HELP.to_string(),
            is_focused: self.focus == Focus::Input,
            has_errors: self.snapshot.shows_errors(),
        }
    }

    fn compute_button(&self, label: &str, control: Focus) -> ButtonInfo {
        ButtonInfo {
            label: label.to_string(),
            enabled: self.is_enabled(control),
            focused: self.focus == control,
        }
    }

    fn compute_results(&self) -> Option<ResultsBlock> {
        let snapshot = &self.snapshot;
        if !snapshot.shows_results() {
            return None;
        }

        let range = snapshot.range()?;
        let order = snapshot.sort_order;
        let toggle_label = match order.toggled() {
            SortOrder::Ascending => "↑ Switch to Ascending",
            SortOrder::Descending => "↓ Switch to Descending",
        };

        Some(ResultsBlock {
            title: "Sorted Results:".to_string(),
            toggle: self.compute_button(toggle_label, Focus::SortToggle),
            numbers: snapshot.sorted_numbers().into_iter().map(format_number).collect(),
            summary: SummaryInfo {
                total: format!("Total values: {}", snapshot.validation.numbers.len()),
                order: format!("Order: {}", order.label()),
                range: format!(
                    "Range: {} to {}",
                    format_number(range.min),
                    format_number(range.max)
                ),
            },
        })
    }

    fn compute_footer(&self) -> FooterInfo {
        let mut hints = vec![match self.focus {
            Focus::Input => "Type values  Enter: newline  Ctrl+u: clear",
            _ => "Enter: press",
        }];
        hints.push("Tab/Shift+Tab: move");
        if self.snapshot.can_process() {
            hints.push("Alt+p: process");
        }
        if self.snapshot.can_reset() {
            hints.push("Alt+r: reset");
        }
        if self.snapshot.shows_results() {
            hints.push("Alt+s: sort");
        }
        hints.push("Esc: close");

        FooterInfo {
            keybindings: hints.join("  "),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form_with(input: &str) -> FormState {
        let mut state = FormState::new(Theme::default());
        state.replace_input(input.to_string());
        state
    }

    #[test]
    fn new_form_is_idle_with_default_result() {
        let state = FormState::new(Theme::default());
        let snapshot = state.snapshot();
        assert_eq!(snapshot.phase(), Phase::Idle);
        assert_eq!(snapshot.validation(), &ValidationResult::default());
        assert_eq!(snapshot.sort_order(), SortOrder::Ascending);
        assert!(!snapshot.can_process());
        assert!(!snapshot.can_reset());
        assert_eq!(state.focus, Focus::Input);
    }

    #[test]
    fn editing_does_not_revalidate() {
        let mut state = form_with("1, 2");
        assert!(state.process());
        let before = state.snapshot().validation().clone();

        state.replace_input("abc".to_string());
        assert_eq!(state.snapshot().validation(), &before);
        assert!(state.snapshot().has_processed());
        assert_eq!(state.snapshot().raw_input(), "abc");
    }

    #[test]
    fn process_is_ignored_for_blank_input() {
        let mut state = form_with("   ");
        assert!(!state.process());
        assert_eq!(state.snapshot().phase(), Phase::Idle);
    }

    #[test]
    fn process_marks_processed_even_when_invalid() {
        let mut state = form_with("10, abc");
        assert!(state.process());
        assert_eq!(state.snapshot().phase(), Phase::Processed);
        assert!(state.snapshot().shows_errors());
        assert!(!state.snapshot().shows_results());
    }

    #[test]
    fn partial_numbers_are_not_displayed_when_invalid() {
        let mut state = form_with("10, abc, 20");
        state.process();
        assert_eq!(state.snapshot().validation().numbers, vec![10.0, 20.0]);
        assert!(state.snapshot().sorted_numbers().is_empty());
        assert!(state.snapshot().range().is_none());
    }

    #[test]
    fn reset_restores_initial_snapshot() {
        let mut state = form_with("3, 1, 2");
        state.process();
        state.toggle_sort();
        assert!(state.reset());

        assert_eq!(state.snapshot(), &FormSnapshot::initial(SortOrder::Ascending));
        assert!(!state.reset());
    }

    #[test]
    fn reset_restores_configured_initial_order() {
        let mut state = FormState::with_initial_order(Theme::default(), SortOrder::Descending);
        state.replace_input("1, 2".to_string());
        state.process();
        state.toggle_sort();
        assert_eq!(state.snapshot().sort_order(), SortOrder::Ascending);

        state.reset();
        assert_eq!(state.snapshot().sort_order(), SortOrder::Descending);
    }

    #[test]
    fn toggle_requires_displayed_results() {
        let mut state = form_with("1, x");
        assert!(!state.toggle_sort());
        state.process();
        assert!(!state.toggle_sort());
        assert_eq!(state.snapshot().sort_order(), SortOrder::Ascending);
    }

    #[test]
    fn toggle_changes_only_the_order() {
        let mut state = form_with("30, 10, 20");
        state.process();
        let validation = state.snapshot().validation().clone();

        assert!(state.toggle_sort());
        assert_eq!(state.snapshot().validation(), &validation);
        assert!(state.snapshot().has_processed());
        assert_eq!(state.snapshot().sorted_numbers(), vec![30.0, 20.0, 10.0]);
    }

    #[test]
    fn toggling_twice_restores_the_view() {
        let mut state = form_with("4, -1, 2.5, 2.5, 0");
        state.process();
        let original = state.snapshot().sorted_numbers();
        state.toggle_sort();
        state.toggle_sort();
        assert_eq!(state.snapshot().sorted_numbers(), original);
    }

    #[test]
    fn range_ignores_sort_order() {
        let mut state = form_with("10, 5, 20, 1");
        state.process();
        let ascending = state.snapshot().range();
        state.toggle_sort();
        assert_eq!(state.snapshot().range(), ascending);
        assert_eq!(ascending, Some(NumericRange { min: 1.0, max: 20.0 }));
    }

    #[test]
    fn insert_and_delete_chars_edit_the_tail() {
        let mut state = FormState::new(Theme::default());
        state.insert_char('4');
        state.insert_char('2');
        assert_eq!(state.snapshot().raw_input(), "42");
        assert!(state.delete_char());
        assert_eq!(state.snapshot().raw_input(), "4");
        assert!(state.delete_char());
        assert!(!state.delete_char());
    }

    #[test]
    fn clear_input_keeps_processed_result() {
        let mut state = form_with("1, 2");
        state.process();
        assert!(state.clear_input());
        assert!(state.snapshot().shows_results());
        assert!(!state.snapshot().can_process());
        assert!(!state.clear_input());
    }

    #[test]
    fn focus_cycles_over_enabled_controls_only() {
        let mut state = FormState::new(Theme::default());
        state.focus_next();
        assert_eq!(state.focus, Focus::Input);

        state.replace_input("1, 2".to_string());
        state.focus_next();
        assert_eq!(state.focus, Focus::ProcessButton);
        state.focus_next();
        assert_eq!(state.focus, Focus::Input);

        state.process();
        state.focus_next();
        state.focus_next();
        assert_eq!(state.focus, Focus::ResetButton);
        state.focus_next();
        assert_eq!(state.focus, Focus::SortToggle);
        state.focus_next();
        assert_eq!(state.focus, Focus::Input);
        state.focus_previous();
        assert_eq!(state.focus, Focus::SortToggle);
    }

    #[test]
    fn focus_falls_back_to_input_when_control_is_disabled() {
        let mut state = form_with("1, 2");
        state.process();
        state.focus = Focus::ResetButton;
        state.reset();
        assert_eq!(state.focus, Focus::Input);

        state.replace_input("5".to_string());
        state.focus = Focus::ProcessButton;
        state.clear_input();
        assert_eq!(state.focus, Focus::Input);
    }

    #[test]
    fn idle_viewmodel_shows_only_input_and_buttons() {
        let state = FormState::new(Theme::default());
        let vm = state.compute_viewmodel(80);

        assert_eq!(vm.input.label, INPUT_LABEL);
        assert_eq!(vm.input.placeholder.as_deref(), Some(INPUT_PLACEHOLDER));
        assert!(vm.input.lines.is_empty());
        assert_eq!(vm.buttons.len(), 2);
        assert_eq!(vm.buttons[0].label, "Process Values");
        assert!(!vm.buttons[0].enabled);
        assert_eq!(vm.buttons[1].label, "Reset");
        assert!(!vm.buttons[1].enabled);
        assert!(vm.errors.is_none());
        assert!(vm.results.is_none());
    }

    #[test]
    fn error_viewmodel_lists_every_message_and_hides_results() {
        let mut state = form_with("Infinity, NaN, 5");
        state.process();
        let vm = state.compute_viewmodel(80);

        let errors = vm.errors.expect("error block shown");
        assert_eq!(errors.title, "Validation Errors:");
        assert_eq!(
            errors.messages,
            vec![
                "Value \"Infinity\" at position 1 is not a valid number",
                "Value \"NaN\" at position 2 is not a valid number",
            ]
        );
        assert!(vm.results.is_none());
        assert!(vm.input.has_errors);
    }

    #[test]
    fn results_viewmodel_has_sorted_numbers_and_summary() {
        let mut state = form_with("10, 5, 20, 1");
        state.process();
        let vm = state.compute_viewmodel(80);

        let results = vm.results.expect("results shown");
        assert_eq!(results.numbers, vec!["1", "5", "10", "20"]);
        assert_eq!(results.toggle.label, "↓ Switch to Descending");
        assert!(results.toggle.enabled);
        assert_eq!(results.summary.total, "Total values: 4");
        assert_eq!(results.summary.order, "Order: Ascending");
        assert_eq!(results.summary.range, "Range: 1 to 20");
        assert!(vm.errors.is_none());
    }

    #[test]
    fn toggle_label_names_the_direction_it_switches_to() {
        let mut state = form_with("1, 2");
        state.process();
        state.toggle_sort();
        let results = state.compute_viewmodel(80).results.expect("results shown");
        assert_eq!(results.toggle.label, "↑ Switch to Ascending");
        assert_eq!(results.summary.order, "Order: Descending");
    }

    #[test]
    fn input_box_shows_tail_of_long_input() {
        let state = form_with("1\n2\n3\n4\n5\n6");
        let vm = state.compute_viewmodel(80);
        assert_eq!(vm.input.lines, vec!["3", "4", "5", "6"]);
        assert!(vm.input.placeholder.is_none());
    }

    #[test]
    fn footer_only_advertises_enabled_shortcuts() {
        let state = FormState::new(Theme::default());
        let footer = state.compute_viewmodel(80).footer.keybindings;
        assert!(!footer.contains("Alt+p"));
        assert!(!footer.contains("Alt+r"));
        assert!(footer.contains("Esc: close"));

        let mut state = form_with("1");
        state.process();
        let footer = state.compute_viewmodel(80).footer.keybindings;
        assert!(footer.contains("Alt+p"));
        assert!(footer.contains("Alt+r"));
        assert!(footer.contains("Alt+s"));
    }
}
