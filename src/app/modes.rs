//! Form phase and keyboard focus types.
//!
//! # State Machine
//!
//! The form is in one of two phases:
//! - **Idle**: initial state and the state after Reset; nothing is shown
//!   below the input
//! - **Processed**: Process has run at least once since the last reset;
//!   either the error block or the results block is shown
//!
//! Independently of the phase, exactly one control holds keyboard focus.
//! Focus only ever rests on an enabled control.

/// Lifecycle phase of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No Process action since load or the last Reset.
    Idle,

    /// Process has run. "Processed" means the action ran, not that the
    /// input was valid.
    Processed,
}

/// Control that currently receives keyboard input.
///
/// Variants are listed in visual (and Tab) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The multi-line text input. Always enabled.
    #[default]
    Input,
    /// The "Process Values" button.
    ProcessButton,
    /// The "Reset" button.
    ResetButton,
    /// The sort-direction toggle, present only while results are shown.
    SortToggle,
}

impl Focus {
    /// All controls in Tab order.
    pub const ALL: [Self; 4] = [
        Self::Input,
        Self::ProcessButton,
        Self::ResetButton,
        Self::SortToggle,
    ];
}
