//! Sort order and the derived projections over parsed numbers.

use super::error::ProcessorError;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Direction in which the results view lists numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// Returns the opposite direction.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Human-readable name, as shown on the `Order:` summary line.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ascending => "Ascending",
            Self::Descending => "Descending",
        }
    }

    /// Compares two numbers in this direction.
    ///
    /// Parsed numbers are always finite, so `partial_cmp` never yields `None`.
    /// Equal values (including `0` and `-0`) compare as equal.
    #[must_use]
    pub fn compare(self, a: f64, b: f64) -> Ordering {
        let ascending = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
        match self {
            Self::Ascending => ascending,
            Self::Descending => ascending.reverse(),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SortOrder {
    type Err = ProcessorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Ascending),
            "desc" | "descending" => Ok(Self::Descending),
            other => Err(ProcessorError::Config(format!("unknown sort order '{other}'"))),
        }
    }
}

/// Returns a copy of `numbers` sorted in `order`.
///
/// The sort is stable: equal values keep their original relative order in
/// both directions.
#[must_use]
pub fn sort_numbers(numbers: &[f64], order: SortOrder) -> Vec<f64> {
    let mut sorted = numbers.to_vec();
    sorted.sort_by(|a, b| order.compare(*a, *b));
    sorted
}

/// Smallest and largest value of a non-empty numeric set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericRange {
    pub min: f64,
    pub max: f64,
}

impl NumericRange {
    /// Computes the range of `numbers`, or `None` when the slice is empty.
    ///
    /// Independent of any sort order.
    #[must_use]
    pub fn of(numbers: &[f64]) -> Option<Self> {
        let (&first, rest) = numbers.split_first()?;
        Some(rest.iter().fold(Self { min: first, max: first }, |range, &value| Self {
            min: range.min.min(value),
            max: range.max.max(value),
        }))
    }
}
