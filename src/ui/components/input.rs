//! Input box component renderer.
//!
//! Renders the labelled multi-line text input, its placeholder and the help
//! line under it.

use crate::app::state::INPUT_VISIBLE_ROWS;
use crate::ui::helpers::{pad_to, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::InputBoxInfo;

/// Horizontal margin for the input box (spaces on left and right).
const INPUT_BOX_MARGIN: usize = 2;

/// Block caret drawn after the text while the input has focus.
const CARET: char = '█';

/// Renders the input box at the specified row.
///
/// # Layout
///
/// ```text
/// [margin] ┌ Enter Transaction Values (comma-separated): ┐
/// [margin] │ text or placeholder                          │  × INPUT_VISIBLE_ROWS
/// [margin] └──────────────────────────────────────────────┘
/// [margin] help text
/// ```
///
/// The border uses `alert_border` while validation errors are shown,
/// `focus_border` while the input has focus, and `border` otherwise.
///
/// # Returns
///
/// The next available row position.
pub fn render_input_box(row: usize, input: &InputBoxInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(INPUT_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let margin = " ".repeat(INPUT_BOX_MARGIN);

    let border_color = if input.has_errors {
        &theme.colors.alert_border
    } else if input.is_focused {
        &theme.colors.focus_border
    } else {
        &theme.colors.border
    };

    let label: String = format!(" {} ", input.label).chars().take(inner_width).collect();
    let label_len = label.chars().count();

    position_cursor(row, 1);
    print!("{margin}");
    print!("{}", Theme::fg(border_color));
    print!("┌");
    print!("{}", Theme::bold());
    print!("{label}");
    print!("{}", Theme::reset());
    print!("{}", Theme::fg(border_color));
    print!("{}┐", "─".repeat(inner_width.saturating_sub(label_len)));
    print!("{}", Theme::reset());

    let mut current_row = row + 1;
    for index in 0..INPUT_VISIBLE_ROWS {
        position_cursor(current_row, 1);
        print!("{margin}");
        print!("{}│{}", Theme::fg(border_color), Theme::reset());
        render_text_row(input, index, theme, inner_width);
        print!("{}│{}", Theme::fg(border_color), Theme::reset());
        current_row += 1;
    }

    position_cursor(current_row, 1);
    print!("{margin}");
    print!("{}", Theme::fg(border_color));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());
    current_row += 1;

    position_cursor(current_row, 1);
    print!("{margin}");
    print!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
    let help: String = input.help.chars().take(box_width).collect();
    print!("{}", pad_to(&help, box_width));
    print!("{}", Theme::reset());

    current_row + 1
}

/// Renders the content of one text row inside the box, padded to `width`.
fn render_text_row(input: &InputBoxInfo, index: usize, theme: &Theme, width: usize) {
    if let Some(placeholder) = &input.placeholder {
        if index == 0 {
            let mut used = 0;
            if input.is_focused && width > 0 {
                print!("{}{CARET}", Theme::fg(&theme.colors.text_normal));
                used = 1;
            }
            let visible: String = placeholder.chars().take(width.saturating_sub(used)).collect();
            used += visible.chars().count();
            print!("{}{}{visible}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
            print!("{}{}", " ".repeat(width.saturating_sub(used)), Theme::reset());
        } else {
            print!("{}", " ".repeat(width));
        }
        return;
    }

    let Some(line) = input.lines.get(index) else {
        print!("{}", " ".repeat(width));
        return;
    };

    let is_last = index + 1 == input.lines.len();
    let mut text = line.clone();
    if is_last && input.is_focused && line.chars().count() < width {
        text.push(CARET);
    }

    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{}", pad_to(&text, width));
    print!("{}", Theme::reset());
}
