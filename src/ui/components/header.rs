//! Header component renderer.

use crate::ui::helpers::{pad_to, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the title and subtitle lines starting at `row`.
///
/// The title is bold in `header_fg` (on `header_bg` if the theme sets one);
/// the subtitle is dimmed. Both lines are padded to the full pane width.
///
/// # Returns
///
/// The next available row position (row + 2)
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("{}", pad_to(&format!(" {}", header.title), cols));
    print!("{}", Theme::reset());

    position_cursor(row + 1, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", pad_to(&format!(" {}", header.subtitle), cols));
    print!("{}", Theme::reset());

    row + 2
}
