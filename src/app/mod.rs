//! Application layer coordinating form state, events, and actions.
//!
//! This module sits between the plugin runtime (main.rs) and the domain
//! layer. It owns the form's state machine and derives everything the UI
//! shows from it.
//!
//! # Architecture
//!
//! ```text
//! Key press → Event → handle_event → new FormSnapshot → compute_viewmodel → render
//!                          ↓
//!                       Actions (hide pane)
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and transition dispatch
//! - [`keys`]: Zellij key press to [`Event`] mapping
//! - [`modes`]: Form phase and keyboard focus types
//! - [`state`]: Form snapshot, transitions and view model computation
//!
//! # Example
//!
//! ```rust
//! use transaction_processor::app::{handle_event, Event, FormState};
//! use transaction_processor::ui::Theme;
//!
//! let mut state = FormState::new(Theme::default());
//! let (should_render, actions) = handle_event(&mut state, &Event::Char('7'))?;
//! assert!(should_render);
//! assert!(actions.is_empty());
//! # Ok::<(), transaction_processor::ProcessorError>(())
//! ```

pub mod actions;
pub mod handler;
pub mod keys;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use keys::map_key;
pub use modes::{Focus, Phase};
pub use state::{FormSnapshot, FormState};
