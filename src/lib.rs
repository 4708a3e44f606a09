//! Transaction Processor: a Zellij plugin that validates and sorts
//! comma-separated numbers.
//!
//! The user types values such as `10, 5, 20, 1` into a multi-line input,
//! presses Process, and either sees every validation error at once or the
//! sorted numbers with a short summary. The sort direction can be flipped
//! without re-processing, and Reset returns the form to its initial state.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Form state machine
//! │  - Key mapping and event handling                   │
//! │  - Immutable form snapshots                         │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                   │
//! ┌─────────────────────┐         ┌─────────────────────┐
//! │ UI Layer (ui/)      │         │ Domain (domain/)    │
//! │ - Rendering         │         │ - Number grammar    │
//! │ - Theming           │         │ - Validator         │
//! │ - Components        │         │ - Sort ordering     │
//! └─────────────────────┘         └─────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Best effort
//! │  - OpenTelemetry tracing                            │
//! │  - File-based OTLP export                           │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Form state machine with event/action model
//! - [`domain`]: Number grammar, validator, sort ordering, errors
//! - [`infrastructure`]: Sandbox paths
//! - [`ui`]: Terminal rendering with theme support
//! - [`observability`]: OpenTelemetry tracing to a rotating file
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/transaction-processor.wasm" {
//!         theme "catppuccin-latte"
//!         theme_file "~/.config/zellij/processor-theme.toml"
//!         trace_level "debug"
//!         initial_order "descending"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use transaction_processor::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! for c in "10, 5, 20, 1".chars() {
//!     handle_event(&mut state, &Event::Char(c))?;
//! }
//! handle_event(&mut state, &Event::Process)?;
//!
//! assert_eq!(state.snapshot().sorted_numbers(), vec![1.0, 5.0, 10.0, 20.0]);
//! # Ok::<(), transaction_processor::ProcessorError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, map_key, Action, Event, Focus, FormState, Phase};
pub use domain::{validate, ProcessorError, Result, SortOrder, ValidationResult};
pub use ui::Theme;

use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's KDL plugin block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Built-in theme name (`catppuccin-mocha`, `catppuccin-latte`).
    /// Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. `~` refers to the host home
    /// directory. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for tracing. Default: `"info"`
    pub trace_level: Option<String>,

    /// Sort order on load and after Reset. Default: ascending.
    pub initial_order: SortOrder,
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Blank values count as unset. An unrecognised `initial_order` falls
    /// back to ascending.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use transaction_processor::{Config, SortOrder};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("theme".to_string(), "catppuccin-latte".to_string());
    /// map.insert("initial_order".to_string(), "descending".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
    /// assert_eq!(config.initial_order, SortOrder::Descending);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let value = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        let initial_order = value("initial_order").map_or_else(SortOrder::default, |raw| {
            raw.parse().unwrap_or_else(|e: ProcessorError| {
                tracing::debug!(initial_order = %raw, error = %e, "falling back to ascending");
                SortOrder::default()
            })
        });

        Self {
            theme_name: value("theme"),
            theme_file: value("theme_file"),
            trace_level: value("trace_level"),
            initial_order,
        }
    }

    /// Resolves the configured theme: file first, then built-in name, then
    /// the default. Failures are logged and fall through to the next source.
    #[must_use]
    pub fn resolve_theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            let path = infrastructure::expand_tilde(theme_file);
            match Theme::from_file(&path) {
                Ok(theme) => return theme,
                Err(e) => {
                    tracing::debug!(theme_file = %path, error = %e, "failed to load theme from file, using default");
                    return Theme::default();
                }
            }
        }

        self.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
            Theme::from_name(theme_name).unwrap_or_else(|| {
                tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                Theme::default()
            })
        })
    }
}

/// Builds the initial form state from configuration.
///
/// # Example
///
/// ```rust
/// use transaction_processor::{initialize, Config, Phase};
///
/// let state = initialize(&Config::default());
/// assert_eq!(state.snapshot().phase(), Phase::Idle);
/// ```
#[must_use]
pub fn initialize(config: &Config) -> FormState {
    tracing::debug!(initial_order = %config.initial_order, "initializing transaction processor");
    FormState::with_initial_order(config.resolve_theme(), config.initial_order)
}
