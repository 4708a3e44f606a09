//! Keyboard mapping from Zellij key presses to form events.
//!
//! | Key | Event |
//! |---|---|
//! | `Tab` / `Shift+Tab` | [`Event::FocusNext`] / [`Event::FocusPrevious`] |
//! | `Enter` | [`Event::Activate`] |
//! | `Backspace` | [`Event::Backspace`] |
//! | `Esc` | [`Event::CloseFocus`] |
//! | `Alt+p` / `Alt+r` / `Alt+s` | [`Event::Process`] / [`Event::Reset`] / [`Event::ToggleSort`] |
//! | `Ctrl+u` | [`Event::ClearInput`] |
//! | printable character | [`Event::Char`] |

use crate::app::Event;
use zellij_tile::prelude::{BareKey, KeyModifier, KeyWithModifier};

/// Maps a key press to a form event, or `None` if the key is unbound.
///
/// Characters are accepted with no modifier or with Shift alone, so upper
/// case letters and shifted symbols type normally.
///
/// # Example
///
/// ```rust
/// use transaction_processor::app::{map_key, Event};
/// use zellij_tile::prelude::{BareKey, KeyWithModifier};
///
/// let key = KeyWithModifier::new(BareKey::Char('p')).with_alt_modifier();
/// assert_eq!(map_key(&key), Some(Event::Process));
/// ```
#[must_use]
pub fn map_key(key: &KeyWithModifier) -> Option<Event> {
    let modifiers = &key.key_modifiers;
    let only = |modifier: KeyModifier| modifiers.len() == 1 && modifiers.contains(&modifier);

    let event = match key.bare_key {
        BareKey::Tab if only(KeyModifier::Shift) => Event::FocusPrevious,
        BareKey::Tab if modifiers.is_empty() => Event::FocusNext,
        BareKey::Enter if modifiers.is_empty() => Event::Activate,
        BareKey::Backspace if modifiers.is_empty() => Event::Backspace,
        BareKey::Esc => Event::CloseFocus,
        BareKey::Char(c) if only(KeyModifier::Alt) => match c.to_ascii_lowercase() {
            'p' => Event::Process,
            'r' => Event::Reset,
            's' => Event::ToggleSort,
            _ => return None,
        },
        BareKey::Char('u') if only(KeyModifier::Ctrl) => Event::ClearInput,
        BareKey::Char(c) if modifiers.is_empty() || only(KeyModifier::Shift) => Event::Char(c),
        _ => return None,
    };

    tracing::trace!(bare_key = ?key.bare_key, ?event, "key mapped");
    Some(event)
}
