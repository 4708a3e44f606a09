//! Sorted results block renderer.

use super::buttons::{button_text, print_button};
use crate::ui::helpers::{flow_tokens, pad_to, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ResultsBlock;

/// Spaces between numbers on a row.
const NUMBER_GAP: usize = 3;

/// Renders the results title with the sort toggle, the numbers flowed over
/// as many rows as needed, and the three summary lines.
///
/// # Layout
///
/// ```text
/// Sorted Results:   [ ↓ Switch to Descending ]
///   1   5   10   20
///
/// Total values: 4
/// Order: Ascending
/// Range: 1 to 20
/// ```
///
/// Rows past `last_row` are not drawn.
///
/// # Returns
///
/// The next available row position.
pub fn render_results_block(
    row: usize,
    indent: usize,
    results: &ResultsBlock,
    theme: &Theme,
    cols: usize,
    last_row: usize,
) -> usize {
    let width = cols.saturating_sub(indent);
    let margin = " ".repeat(indent);

    position_cursor(row, 1);
    print!("{margin}");
    print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg));
    print!("{}", results.title);
    print!("{}", Theme::reset());
    print!("   ");
    print_button(&results.toggle, theme);
    let used = results.title.chars().count() + 3 + button_text(&results.toggle).chars().count();
    print!("{}", " ".repeat(width.saturating_sub(used)));

    let mut current_row = row + 1;
    for line in flow_tokens(&results.numbers, width.saturating_sub(2), NUMBER_GAP) {
        if current_row > last_row {
            return current_row;
        }
        position_cursor(current_row, 1);
        print!("{margin}  ");
        print!("{}", Theme::fg(&theme.colors.number_fg));
        print!("{}", pad_to(&line, width.saturating_sub(2)));
        print!("{}", Theme::reset());
        current_row += 1;
    }

    current_row += 1;

    for line in [&results.summary.total, &results.summary.order, &results.summary.range] {
        if current_row > last_row {
            return current_row;
        }
        position_cursor(current_row, 1);
        print!("{margin}");
        print_summary_line(line, theme, width);
        current_row += 1;
    }

    current_row
}

/// Prints `Label: value` with the label in `summary_label_fg`.
fn print_summary_line(line: &str, theme: &Theme, width: usize) {
    let (label, value) = line.split_once(": ").unwrap_or((line, ""));
    print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.summary_label_fg));
    print!("{label}:");
    print!("{}", Theme::reset());
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{}", pad_to(&format!(" {value}"), width.saturating_sub(label.chars().count() + 1)));
    print!("{}", Theme::reset());
}
