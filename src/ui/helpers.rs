//! Shared rendering utilities and helpers.
//!
//! Cursor positioning, number formatting and text wrapping used across the
//! UI components and by view model computation. Wrapping operates on `char`
//! counts, not bytes, so multi-byte input never splits a character.

/// Positions the cursor at a specific row and column.
///
/// Uses ANSI escape sequence `\u{1b}[{row};{col}H`. Coordinates are 1-indexed.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Formats a parsed number for display.
///
/// Produces the shortest decimal form that round-trips, without an exponent
/// (`0.5`, `5`, `10.5`). Negative zero is shown as `0`.
///
/// # Example
///
/// ```rust
/// use transaction_processor::ui::helpers::format_number;
///
/// assert_eq!(format_number(5.0), "5");
/// assert_eq!(format_number(0.5), "0.5");
/// assert_eq!(format_number(-0.0), "0");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}

/// Hard-wraps `text` to lines of at most `width` characters.
///
/// Embedded newlines start a new line. A zero `width` is treated as 1.
/// Empty input yields no lines; a trailing newline yields a final empty line
/// so the caret position stays visible.
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if text.is_empty() {
        return vec![];
    }

    let width = width.max(1);
    let mut lines = Vec::new();

    for raw_line in text.split('\n') {
        let chars: Vec<char> = raw_line.chars().collect();
        if chars.is_empty() {
            lines.push(String::new());
            continue;
        }
        lines.extend(chars.chunks(width).map(|chunk| chunk.iter().collect::<String>()));
    }

    lines
}

/// Lays out tokens left to right, separated by `gap` spaces, starting a new
/// row whenever the next token would exceed `width` characters.
///
/// A token wider than `width` occupies a row of its own.
#[must_use]
pub fn flow_tokens(tokens: &[String], width: usize, gap: usize) -> Vec<String> {
    let mut rows = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for token in tokens {
        let token_len = token.chars().count();
        let needed = if current_len == 0 { token_len } else { current_len + gap + token_len };

        if current_len > 0 && needed > width {
            rows.push(std::mem::take(&mut current));
            current_len = 0;
        }

        if current_len > 0 {
            current.push_str(&" ".repeat(gap));
            current_len += gap;
        }
        current.push_str(token);
        current_len += token_len;
    }

    if current_len > 0 {
        rows.push(current);
    }

    rows
}

/// Pads `text` with spaces up to `width` characters. Longer text is returned
/// unchanged.
#[must_use]
pub fn pad_to(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{text}{}", " ".repeat(width.saturating_sub(len)))
}
