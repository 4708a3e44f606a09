//! Validation error block renderer.
//!
//! The block is the terminal equivalent of an alert region: it is drawn in
//! the theme's alert colour with a bold title so it stands out from the rest
//! of the form.

use crate::ui::helpers::{pad_to, position_cursor, wrap_text};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ErrorBlock;

/// Renders the error title and one bullet per message.
///
/// Long messages wrap under their bullet. Every message is rendered; rows
/// past `last_row` are not drawn.
///
/// # Returns
///
/// The next available row position.
pub fn render_error_block(
    row: usize,
    indent: usize,
    errors: &ErrorBlock,
    theme: &Theme,
    cols: usize,
    last_row: usize,
) -> usize {
    let width = cols.saturating_sub(indent);
    let margin = " ".repeat(indent);

    position_cursor(row, 1);
    print!("{margin}");
    print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.alert_fg));
    print!("{}", pad_to(&errors.title, width));
    print!("{}", Theme::reset());

    let mut current_row = row + 1;
    for message in &errors.messages {
        for (index, line) in wrap_text(message, width.saturating_sub(2)).iter().enumerate() {
            if current_row > last_row {
                return current_row;
            }
            position_cursor(current_row, 1);
            print!("{margin}");
            if index == 0 {
                print!("{}•{} ", Theme::fg(&theme.colors.alert_fg), Theme::reset());
            } else {
                print!("  ");
            }
            print!("{}", Theme::fg(&theme.colors.text_normal));
            print!("{}", pad_to(line, width.saturating_sub(2)));
            print!("{}", Theme::reset());
            current_row += 1;
        }
    }

    current_row
}
