//! Event handling and state transition logic.
//!
//! This module implements the event handler that turns discrete user
//! actions into form transitions and side-effect actions. Each event is
//! handled synchronously and completely; nothing is deferred.
//!
//! # Event Types
//!
//! - **Editing**: `Char`, `Backspace`, `ClearInput`
//! - **Focus**: `FocusNext`, `FocusPrevious`
//! - **Form actions**: `Activate`, `Process`, `Reset`, `ToggleSort`
//! - **Plugin**: `CloseFocus`
//!
//! # Example
//!
//! ```rust
//! use transaction_processor::app::{handle_event, Event, FormState};
//! use transaction_processor::ui::Theme;
//!
//! let mut state = FormState::new(Theme::default());
//! for c in "1, 2".chars() {
//!     handle_event(&mut state, &Event::Char(c))?;
//! }
//! let (should_render, actions) = handle_event(&mut state, &Event::Process)?;
//! assert!(should_render);
//! assert!(actions.is_empty());
//! # Ok::<(), transaction_processor::ProcessorError>(())
//! ```

use crate::app::modes::Focus;
use crate::app::{Action, FormState};
use crate::domain::error::Result;

/// Events triggered by user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Types a character. Moves focus to the input first if a button has it.
    Char(char),
    /// Removes the last character of the input.
    Backspace,
    /// Clears the input text. Counts as an edit, not as Reset.
    ClearInput,

    /// Moves focus to the next enabled control.
    FocusNext,
    /// Moves focus to the previous enabled control.
    FocusPrevious,

    /// `Enter`: inserts a newline in the input, or presses the focused button.
    Activate,
    /// Runs Process (shortcut, independent of focus).
    Process,
    /// Runs Reset (shortcut, independent of focus).
    Reset,
    /// Flips the sort direction (shortcut, independent of focus).
    ToggleSort,

    /// Hides the plugin pane.
    CloseFocus,
}

/// Processes an event, mutates form state, and returns actions to execute.
///
/// # Returns
///
/// `(should_render, actions)`. `should_render` is `false` when the event was
/// a no-op, e.g. Process while the input is blank or Reset before any
/// Process.
///
/// # Errors
///
/// No form transition can fail today; the `Result` keeps the plugin shim's
/// error path uniform with the rest of the crate.
pub fn handle_event(state: &mut FormState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event, focus = ?state.focus).entered();

    match event {
        Event::Char(c) => {
            state.focus = Focus::Input;
            state.insert_char(*c);
            tracing::trace!(input_len = state.snapshot().raw_input().len(), char = %c, "input edited");
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if state.focus != Focus::Input {
                return Ok((false, vec![]));
            }
            Ok((state.delete_char(), vec![]))
        }
        Event::ClearInput => Ok((state.clear_input(), vec![])),
        Event::FocusNext => {
            let before = state.focus;
            state.focus_next();
            Ok((state.focus != before, vec![]))
        }
        Event::FocusPrevious => {
            let before = state.focus;
            state.focus_previous();
            Ok((state.focus != before, vec![]))
        }
        Event::Activate => match state.focus {
            Focus::Input => {
                state.insert_char('\n');
                Ok((true, vec![]))
            }
            Focus::ProcessButton => Ok((state.process(), vec![])),
            Focus::ResetButton => Ok((state.reset(), vec![])),
            Focus::SortToggle => Ok((state.toggle_sort(), vec![])),
        },
        Event::Process => Ok((state.process(), vec![])),
        Event::Reset => Ok((state.reset(), vec![])),
        Event::ToggleSort => Ok((state.toggle_sort(), vec![])),
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
    }
}
