//! Composable UI component renderers.
//!
//! Each component renders one part of the form at a given row and returns
//! the next free row, so the layout function reads top to bottom.
//!
//! # Components
//!
//! - [`header`]: Title and subtitle
//! - [`input`]: Labelled multi-line input box with help line
//! - [`buttons`]: Button row (Process Values, Reset)
//! - [`errors`]: Validation error block
//! - [`results`]: Sorted numbers, sort toggle and summary
//! - [`footer`]: Keybinding hints
//!
//! # Example
//!
//! ```rust
//! use transaction_processor::app::FormState;
//! use transaction_processor::ui::components::render_form;
//! use transaction_processor::ui::Theme;
//!
//! let state = FormState::new(Theme::default());
//! let vm = state.compute_viewmodel(80);
//! render_form(&vm, &state.theme, 80, 24);
//! ```

mod buttons;
mod errors;
mod footer;
mod header;
mod input;
mod results;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FormViewModel;

use buttons::render_button_row;
use errors::render_error_block;
use footer::render_footer;
use header::render_header;
use input::render_input_box;
use results::render_results_block;

/// Left indent shared by the button row and the output blocks, lined up
/// with the input box border.
const CONTENT_INDENT: usize = 2;

/// Renders a horizontal border line at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the whole form.
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Header - 2 lines]
/// [Border]
/// [Input box + help]
/// [blank line]
/// [Buttons]
/// [blank line]
/// [Error block | Results block | nothing]
/// [Border]
/// [Footer]
/// ```
///
/// The error and results blocks are cut off above the bottom border when
/// the pane is too short to hold them.
pub fn render_form(vm: &FormViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_input_box(current_row, &vm.input, theme, cols);
    current_row = render_button_row(current_row + 1, CONTENT_INDENT, &vm.buttons, theme);
    current_row += 1;

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);
    let last_content_row = border_row.saturating_sub(1);

    if let Some(errors) = &vm.errors {
        render_error_block(current_row, CONTENT_INDENT, errors, theme, cols, last_content_row);
    } else if let Some(results) = &vm.results {
        render_results_block(current_row, CONTENT_INDENT, results, theme, cols, last_content_row);
    }

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::FormState;

    fn render_input(input: &str, rows: usize, cols: usize) {
        let mut state = FormState::new(Theme::default());
        state.replace_input(input.to_string());
        state.process();
        render_form(&state.compute_viewmodel(cols), &state.theme, cols, rows);
    }

    #[test]
    fn renders_every_form_phase() {
        render_form(
            &FormState::new(Theme::default()).compute_viewmodel(80),
            &Theme::default(),
            80,
            24,
        );
        render_input("10, 5, 20, 1", 24, 80);
        render_input("10, abc, 20, Infinity", 24, 80);
    }

    #[test]
    fn tiny_panes_do_not_panic() {
        render_input("1, 2, 3", 3, 4);
        render_input("x, y", 0, 0);
        render_input(&"1,".repeat(500), 12, 20);
    }
}
