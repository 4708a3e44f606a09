//! View model types representing renderable UI state.
//!
//! View models are computed from [`FormState`](crate::app::FormState) by
//! `compute_viewmodel()` and consumed by the renderer. They carry no
//! business logic, only display-ready strings and flags, which makes every
//! rendering rule checkable without a terminal.
//!
//! # Example
//!
//! ```rust
//! use transaction_processor::app::FormState;
//! use transaction_processor::ui::Theme;
//!
//! let state = FormState::new(Theme::default());
//! let vm = state.compute_viewmodel(80);
//! assert!(vm.errors.is_none());
//! assert!(vm.results.is_none());
//! ```

/// Complete UI view model for rendering the form.
#[derive(Debug, Clone, PartialEq)]
pub struct FormViewModel {
    /// Title bar.
    pub header: HeaderInfo,

    /// The labelled multi-line input box.
    pub input: InputBoxInfo,

    /// The Process and Reset buttons, in that order.
    pub buttons: Vec<ButtonInfo>,

    /// Error block. `Some` only after Process produced errors.
    pub errors: Option<ErrorBlock>,

    /// Results block. `Some` only after Process produced a valid, non-empty
    /// result. Never `Some` together with `errors`.
    pub results: Option<ResultsBlock>,

    /// Keybinding hints.
    pub footer: FooterInfo,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
    pub subtitle: String,
}

/// Input box display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputBoxInfo {
    /// Label drawn in the top border.
    pub label: String,

    /// Visible wrapped lines of the current text (the tail, so the caret
    /// end is always on screen). Empty when the input is empty.
    pub lines: Vec<String>,

    /// Placeholder shown while the input is empty.
    pub placeholder: Option<String>,

    /// Help line under the box.
    pub help: String,

    /// Whether the input holds keyboard focus.
    pub is_focused: bool,

    /// Whether the error block is shown (input is styled as erroneous).
    pub has_errors: bool,
}

/// A single button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonInfo {
    pub label: String,
    pub enabled: bool,
    pub focused: bool,
}

/// Validation error list. Rendered assertively (alert styling).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorBlock {
    pub title: String,
    pub messages: Vec<String>,
}

/// Sorted results with summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsBlock {
    pub title: String,

    /// Sort toggle, labelled with the direction it switches to.
    pub toggle: ButtonInfo,

    /// Numbers formatted for display, in the current sort order.
    pub numbers: Vec<String>,

    pub summary: SummaryInfo,
}

/// The three summary lines under the results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryInfo {
    /// `Total values: N`
    pub total: String,
    /// `Order: Ascending|Descending`
    pub order: String,
    /// `Range: <min> to <max>`
    pub range: String,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
}
