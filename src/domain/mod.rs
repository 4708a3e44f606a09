//! Domain layer: the number grammar, the validator and sort ordering.
//!
//! Nothing in here touches Zellij, the terminal or the filesystem. The
//! validator is a free function with no state, so it can be exercised in
//! isolation from the form and its rendering.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`grammar`]: `winnow` grammar for a single numeric token
//! - [`validation`]: [`validate`] and [`ValidationResult`]
//! - [`order`]: [`SortOrder`], sorting and range computation
//!
//! # Examples
//!
//! ```
//! use transaction_processor::domain::{sort_numbers, validate, SortOrder};
//!
//! let result = validate("10, 5, 20, 1");
//! assert!(result.is_valid);
//! assert_eq!(sort_numbers(&result.numbers, SortOrder::Ascending), vec![1.0, 5.0, 10.0, 20.0]);
//! ```

pub mod error;
pub mod grammar;
pub mod order;
pub mod validation;

pub use error::{ProcessorError, Result};
pub use order::{sort_numbers, NumericRange, SortOrder};
pub use validation::{validate, ValidationResult};
