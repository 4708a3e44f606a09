//! Grammar for a single numeric token.
//!
//! A token is a valid number iff it matches
//!
//! ```text
//! number   = sign? ( digits ( "." digit* )? | "." digits )
//! sign     = "+" | "-"
//! digits   = digit+
//! ```
//!
//! Accepted: `5`, `-12`, `3.14`, `5.`, `.5`, `+0.25`.
//! Rejected: exponents (`1e3`), named literals (`Infinity`, `NaN`), extra
//! dots (`3.14.15`), a bare sign or dot, and anything with other characters.
//!
//! The parsers are `winnow` combinators. [`is_number_literal`] requires the
//! whole token to be consumed.

use winnow::ascii::{digit0, digit1};
use winnow::combinator::{alt, opt};
use winnow::token::one_of;
use winnow::{ModalResult, Parser};

/// Parses an optional leading `+` or `-`.
fn parse_sign(input: &mut &str) -> ModalResult<Option<char>> {
    opt(one_of(['+', '-'])).parse_next(input)
}

/// Parses `digits ( "." digit* )?`, e.g. `12`, `12.`, `12.5`.
fn parse_integer_led(input: &mut &str) -> ModalResult<()> {
    (digit1, opt(('.', digit0))).void().parse_next(input)
}

/// Parses `"." digits`, e.g. `.5`.
fn parse_fraction_led(input: &mut &str) -> ModalResult<()> {
    ('.', digit1).void().parse_next(input)
}

/// Parses one number literal and returns the matched slice.
///
/// Does not require the input to be exhausted; callers that need a full
/// match should check the remaining input, as [`is_number_literal`] does.
pub fn parse_number_literal<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    (parse_sign, alt((parse_integer_led, parse_fraction_led)))
        .take()
        .parse_next(input)
}

/// Returns `true` if the entire token matches the number grammar.
///
/// # Example
///
/// ```
/// use transaction_processor::domain::grammar::is_number_literal;
///
/// assert!(is_number_literal(".5"));
/// assert!(is_number_literal("-12"));
/// assert!(!is_number_literal("1e3"));
/// assert!(!is_number_literal("3.14.15"));
/// ```
#[must_use]
pub fn is_number_literal(token: &str) -> bool {
    let mut input = token;
    parse_number_literal(&mut input).is_ok() && input.is_empty()
}

/// Returns `true` for the named non-finite literals `Infinity` and `NaN`,
/// compared case-insensitively.
#[must_use]
pub fn is_non_finite_name(token: &str) -> bool {
    token.eq_ignore_ascii_case("infinity") || token.eq_ignore_ascii_case("nan")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn accepts_plain_and_signed_integers() {
        for token in ["0", "5", "007", "-12", "+42", "1234567890"] {
            assert!(is_number_literal(token), "{token} should be accepted");
        }
    }

    #[test]
    fn accepts_all_decimal_shapes() {
        for token in ["3.14", "5.", ".5", "-.5", "+5.", "0.0", "-0"] {
            assert!(is_number_literal(token), "{token} should be accepted");
        }
    }

    #[test]
    fn rejects_exponents_and_named_literals() {
        for token in ["1e3", "1E3", "2.5e-4", "Infinity", "-Infinity", "NaN", "inf"] {
            assert!(!is_number_literal(token), "{token} should be rejected");
        }
    }

    #[test]
    fn rejects_malformed_tokens() {
        for token in ["", "+", "-", ".", "+.", "3.14.15", "1..2", "--1", "+-1", "1-", "abc", "12abc", "1 2", "0x10", "1,5"] {
            assert!(!is_number_literal(token), "{token:?} should be rejected");
        }
    }

    #[test]
    fn parse_number_literal_stops_at_first_non_matching_char() {
        let mut input = "3.14.15";
        let matched = parse_number_literal(&mut input).unwrap();
        assert_eq!(matched, "3.14");
        assert_eq!(input, ".15");
    }

    #[test]
    fn non_finite_names_are_case_insensitive() {
        for token in ["Infinity", "infinity", "INFINITY", "NaN", "nan", "NAN"] {
            assert!(is_non_finite_name(token));
        }
        assert!(!is_non_finite_name("-Infinity"));
        assert!(!is_non_finite_name("inf"));
    }

    proptest! {
        #[test]
        fn generated_literals_match_and_parse_as_f64(
            literal in "[+-]?([0-9]{1,12}(\\.[0-9]{0,6})?|\\.[0-9]{1,6})"
        ) {
            prop_assert!(is_number_literal(&literal));
            prop_assert!(literal.parse::<f64>().is_ok());
        }

        #[test]
        fn anything_with_a_letter_is_rejected(
            prefix in "[0-9]{0,4}",
            letter in "[a-zA-Z]",
            suffix in "[0-9]{0,4}",
        ) {
            let token = format!("{prefix}{letter}{suffix}");
            prop_assert!(!is_number_literal(&token));
        }
    }
}
