//! Validation and parsing of comma-separated numeric input.
//!
//! [`validate`] is a pure function: it maps the raw input text to a
//! [`ValidationResult`] and never fails. Every problem with the input is
//! reported as a message in `errors`; processing is not fail-fast, so one pass
//! reports all malformed tokens.

use super::grammar::{is_non_finite_name, is_number_literal};

/// Message returned when the input is empty or whitespace only.
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter some values";

/// Message returned when the input holds only separators and whitespace.
pub const NO_TOKENS_MESSAGE: &str = "Please enter valid comma-separated values";

/// Outcome of validating one input string.
///
/// `is_valid` is `true` exactly when `errors` is empty. `numbers` holds every
/// successfully parsed token in input order, even when other tokens failed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub numbers: Vec<f64>,
}

impl ValidationResult {
    fn from_parts(errors: Vec<String>, numbers: Vec<f64>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
            numbers,
        }
    }

    fn rejected(message: &str) -> Self {
        Self::from_parts(vec![message.to_string()], vec![])
    }

    /// Returns `true` if there is something to show in the results view.
    #[must_use]
    pub fn has_displayable_numbers(&self) -> bool {
        self.is_valid && !self.numbers.is_empty()
    }
}

impl Default for ValidationResult {
    /// The empty-valid result used before the first Process and after Reset.
    fn default() -> Self {
        Self::from_parts(vec![], vec![])
    }
}

/// Splits raw input into trimmed, non-empty tokens.
///
/// Empty segments from consecutive or trailing commas are dropped, so they
/// do not consume a position number.
pub fn tokenize(input: &str) -> Vec<&str> {
    input
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect()
}

/// Builds the per-token error message. `position` is 1-based.
#[must_use]
pub fn invalid_token_message(token: &str, position: usize) -> String {
    format!("Value \"{token}\" at position {position} is not a valid number")
}

/// Converts a single token to a finite number.
///
/// The named literals `Infinity`/`NaN` are checked first, then the grammar,
/// then finiteness of the converted value. Any failure yields `None`.
fn parse_token(token: &str) -> Option<f64> {
    if is_non_finite_name(token) || !is_number_literal(token) {
        return None;
    }

    token.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Validates comma-separated input and parses the numbers it contains.
///
/// # Example
///
/// ```
/// use transaction_processor::domain::validate;
///
/// let result = validate("10, abc, 20");
/// assert!(!result.is_valid);
/// assert_eq!(result.errors, vec!["Value \"abc\" at position 2 is not a valid number"]);
/// assert_eq!(result.numbers, vec![10.0, 20.0]);
/// ```
#[must_use]
pub fn validate(input: &str) -> ValidationResult {
    let _span = tracing::debug_span!("validate", input_len = input.len()).entered();

    if input.trim().is_empty() {
        tracing::debug!("input is empty");
        return ValidationResult::rejected(EMPTY_INPUT_MESSAGE);
    }

    let tokens = tokenize(input);
    if tokens.is_empty() {
        tracing::debug!("input holds only separators");
        return ValidationResult::rejected(NO_TOKENS_MESSAGE);
    }

    let mut errors = Vec::new();
    let mut numbers = Vec::with_capacity(tokens.len());

    for (index, token) in tokens.iter().enumerate() {
        match parse_token(token) {
            Some(value) => numbers.push(value),
            None => errors.push(invalid_token_message(token, index + 1)),
        }
    }

    tracing::debug!(
        token_count = tokens.len(),
        parsed_count = numbers.len(),
        error_count = errors.len(),
        "input validated"
    );

    ValidationResult::from_parts(errors, numbers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_whitespace_input_is_rejected_with_empty_message() {
        for input in ["", " ", "   \t", "\n\n", " \r\n "] {
            let result = validate(input);
            assert!(!result.is_valid);
            assert_eq!(result.errors, vec![EMPTY_INPUT_MESSAGE]);
            assert!(result.numbers.is_empty());
        }
    }

    #[test]
    fn separator_only_input_is_rejected_with_no_tokens_message() {
        for input in [",", " , ,  ,", ",,,", "\n,\t,"] {
            let result = validate(input);
            assert!(!result.is_valid);
            assert_eq!(result.errors, vec![NO_TOKENS_MESSAGE]);
            assert!(result.numbers.is_empty());
        }
    }

    #[test]
    fn valid_input_keeps_input_order() {
        let result = validate("10, 5, 20, 1");
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
        assert_eq!(result.numbers, vec![10.0, 5.0, 20.0, 1.0]);
    }

    #[test]
    fn edge_decimal_formats_are_accepted() {
        let result = validate(".5, 5., -12, +3.25");
        assert!(result.is_valid);
        assert_eq!(result.numbers, vec![0.5, 5.0, -12.0, 3.25]);
    }

    #[test]
    fn empty_segments_do_not_consume_positions() {
        let result = validate(",, 1, , abc,,");
        assert_eq!(result.errors, vec![invalid_token_message("abc", 2)]);
        assert_eq!(result.numbers, vec![1.0]);
    }

    #[test]
    fn every_invalid_token_is_reported_in_order() {
        let result = validate("Infinity, NaN, 5, 1e3, 3.14.15");
        assert!(!result.is_valid);
        assert_eq!(
            result.errors,
            vec![
                "Value \"Infinity\" at position 1 is not a valid number",
                "Value \"NaN\" at position 2 is not a valid number",
                "Value \"1e3\" at position 4 is not a valid number",
                "Value \"3.14.15\" at position 5 is not a valid number",
            ]
        );
        assert_eq!(result.numbers, vec![5.0]);
    }

    #[test]
    fn non_finite_names_are_rejected_in_any_case() {
        let result = validate("infinity, nan, INFINITY, nAn");
        assert_eq!(result.errors.len(), 4);
        assert!(result.numbers.is_empty());
    }

    #[test]
    fn error_message_quotes_the_trimmed_token() {
        let result = validate("  12 ,   twelve   ");
        assert_eq!(result.errors, vec![invalid_token_message("twelve", 2)]);
    }

    #[test]
    fn literal_too_large_for_f64_is_rejected() {
        let huge = "9".repeat(400);
        let result = validate(&format!("1, {huge}"));
        assert_eq!(result.errors, vec![invalid_token_message(&huge, 2)]);
        assert_eq!(result.numbers, vec![1.0]);
    }

    #[test]
    fn default_result_is_empty_and_valid() {
        let result = ValidationResult::default();
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
        assert!(result.numbers.is_empty());
        assert!(!result.has_displayable_numbers());
    }

    #[test]
    fn tokenize_trims_and_drops_empty_segments() {
        assert_eq!(tokenize(" a ,, b,\n c , "), vec!["a", "b", "c"]);
    }
}
