//! Button component renderer.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ButtonInfo;

/// Spacing between adjacent buttons.
const BUTTON_GAP: usize = 2;

/// Returns the on-screen text of a button, e.g. `[ Reset ]`.
#[must_use]
pub fn button_text(button: &ButtonInfo) -> String {
    format!("[ {} ]", button.label)
}

/// Prints one button with styling for its state.
///
/// Focused buttons are drawn inverted (`button_focused_fg` on
/// `button_focused_bg`); disabled ones are dimmed in `button_disabled_fg`.
/// A disabled button never shows focus.
pub fn print_button(button: &ButtonInfo, theme: &Theme) {
    if !button.enabled {
        print!("{}{}", Theme::dim(), Theme::fg(&theme.colors.button_disabled_fg));
    } else if button.focused {
        print!("{}", Theme::bold());
        print!("{}", Theme::fg(&theme.colors.button_focused_fg));
        print!("{}", Theme::bg(&theme.colors.button_focused_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.button_fg));
    }
    print!("{}", button_text(button));
    print!("{}", Theme::reset());
}

/// Renders a row of buttons at the specified row, indented by `indent`.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_button_row(row: usize, indent: usize, buttons: &[ButtonInfo], theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}", " ".repeat(indent));
    for (index, button) in buttons.iter().enumerate() {
        if index > 0 {
            print!("{}", " ".repeat(BUTTON_GAP));
        }
        print_button(button, theme);
    }
    row + 1
}
