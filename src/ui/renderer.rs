//! Top-level rendering coordinator.
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `FormState` into `FormViewModel`
//! 2. **Component Rendering**: Delegate to the component renderers
//!
//! # Example
//!
//! ```rust
//! use transaction_processor::app::FormState;
//! use transaction_processor::ui::{render, Theme};
//!
//! let state = FormState::new(Theme::default());
//! render(&state, 24, 80);
//! ```

use crate::app::FormState;
use crate::ui::components;

/// Renders the plugin UI to stdout.
///
/// # Parameters
///
/// * `state` - Current form state
/// * `rows` - Pane height in rows
/// * `cols` - Pane width in columns
///
/// # Output
///
/// Prints ANSI-styled output using `print!`. Does not clear the screen;
/// Zellij hands the plugin a fresh frame on every render.
pub fn render(state: &FormState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(cols);
    tracing::trace!(
        rows,
        cols,
        has_errors = viewmodel.errors.is_some(),
        has_results = viewmodel.results.is_some(),
        "rendering form"
    );

    components::render_form(&viewmodel, &state.theme, cols, rows);
}
