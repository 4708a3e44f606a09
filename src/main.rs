//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the `transaction_processor` library and
//! Zellij: it parses configuration, subscribes to key events, forwards them
//! to the library and executes the resulting actions.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, build `FormState`
//! 2. **Subscribe**: Register for `Key` events
//! 3. **Update**: Map key → `Event`, run `handle_event`, execute actions
//! 4. **Render**: Call the library render function
//!
//! The form needs no host permissions: it reads nothing from the session
//! and changes nothing besides hiding its own pane.

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use transaction_processor::{handle_event, map_key, Action, Config, FormState};

// Zellij host imports only resolve when built for wasm; native builds (e.g.
// `cargo test`) get an empty entry point so the crate still links.
#[cfg(target_family = "wasm")]
register_plugin!(State);

#[cfg(not(target_family = "wasm"))]
fn main() {}

/// Plugin state wrapper around the library's `FormState`.
struct State {
    app: FormState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: transaction_processor::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        if let Err(e) = transaction_processor::observability::init_tracing(&config) {
            eprintln!("transaction-processor: tracing disabled: {e}");
        }

        let _guard = tracing::debug_span!("plugin_load").entered();
        tracing::debug!(?config, "parsed configuration");

        self.app = transaction_processor::initialize(&config);
        subscribe(&[EventType::Key]);

        tracing::debug!("plugin load complete");
    }

    /// Returns `true` if the pane should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let zellij_tile::prelude::Event::Key(key) = event else {
            return false;
        };

        let _guard = tracing::debug_span!("plugin_update_key", bare_key = ?key.bare_key).entered();

        let Some(form_event) = map_key(&key) else {
            tracing::trace!("unbound key ignored");
            return false;
        };

        match handle_event(&mut self.app, &form_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render,
                    "event handled successfully"
                );
                for action in &actions {
                    Self::execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        transaction_processor::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Translates library actions to Zellij API calls.
    #[tracing::instrument(level = "debug")]
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("hiding plugin pane");
                hide_self();
            }
        }
    }
}
