//! User interface rendering layer with component-based architecture.
//!
//! This module turns form state into ANSI-styled terminal output through
//! composable rendering components, with theme support and width-aware
//! layout.
//!
//! # Architecture
//!
//! ```text
//! FormState → compute_viewmodel → FormViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Shared rendering utilities (number formatting, wrapping)
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    ButtonInfo, ErrorBlock, FooterInfo, FormViewModel, HeaderInfo, InputBoxInfo, ResultsBlock,
    SummaryInfo,
};
