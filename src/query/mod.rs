//! Filter model and query translation.
//!
//! Stored analyses can be filtered two ways: structured query parameters
//! ([`params::build_filter`]) or a free-text natural-language query
//! ([`natural::parse_natural_language`]). Both translate into the same
//! [`StringFilter`] predicate, and [`StringFilter::matches`] is the single
//! routine that applies it, so the two surfaces can never drift apart.

pub mod natural;
pub mod params;

use crate::analyzer::AnalysisResult;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while translating a filter request into a [`StringFilter`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// A free-text query contained no recognizable filter pattern.
    #[error("no recognizable filter pattern in query {0:?}")]
    UnparseableQuery(String),
    /// A structured filter parameter was present but not parseable. Surfaced
    /// instead of silently coercing to a default.
    #[error("invalid value {value:?} for filter {field:?}")]
    InvalidFilterValue {
        field: &'static str,
        value: String,
    },
}

/// An AND-combination of field constraints over stored analysis properties.
///
/// Absent fields impose no constraint. The filter is echoed back to clients
/// in query responses, so it serializes with absent fields omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StringFilter {
    /// Equality match on the palindrome flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_palindrome: Option<bool>,
    /// Inclusive lower bound on character length.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    /// Inclusive upper bound on character length.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    /// Exact word count match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_count: Option<usize>,
    /// Character that must occur at least once.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contains_character: Option<char>,
}

impl StringFilter {
    /// True when no field imposes a constraint.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Apply the predicate to one record's properties. All present fields
    /// must hold.
    pub fn matches(&self, properties: &AnalysisResult) -> bool {
        if let Some(expected) = self.is_palindrome {
            if properties.is_palindrome != expected {
                return false;
            }
        }
        if let Some(min) = self.min_length {
            if properties.length < min {
                return false;
            }
        }
        if let Some(max) = self.max_length {
            if properties.length > max {
                return false;
            }
        }
        if let Some(words) = self.word_count {
            if properties.word_count != words {
                return false;
            }
        }
        if let Some(ch) = self.contains_character {
            // Only observed characters are keys, so presence implies count >= 1.
            if !properties.character_frequency.contains_key(&ch) {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::analyze;

    #[test]
    fn empty_filter_matches_everything() {
        let filter = StringFilter::default();
        assert!(filter.is_empty());
        assert!(filter.matches(&analyze("")));
        assert!(filter.matches(&analyze("anything at all")));
    }

    #[test]
    fn length_bounds_are_inclusive() {
        let filter = StringFilter {
            min_length: Some(5),
            max_length: Some(10),
            ..Default::default()
        };
        assert!(!filter.matches(&analyze("abcd")));
        assert!(filter.matches(&analyze("abcde")));
        assert!(filter.matches(&analyze("abcdefghij")));
        assert!(!filter.matches(&analyze("abcdefghijk")));
    }

    #[test]
    fn constraints_combine_with_and() {
        let filter = StringFilter {
            is_palindrome: Some(true),
            word_count: Some(1),
            ..Default::default()
        };
        assert!(filter.matches(&analyze("racecar")));
        // Palindrome, but three words.
        assert!(!filter.matches(&analyze("never odd or even")));
        // One word, not a palindrome.
        assert!(!filter.matches(&analyze("hello")));
    }

    #[test]
    fn contains_character_is_case_sensitive() {
        let filter = StringFilter {
            contains_character: Some('H'),
            ..Default::default()
        };
        assert!(filter.matches(&analyze("Hello")));
        assert!(!filter.matches(&analyze("hello")));
    }

    #[test]
    fn absent_fields_are_omitted_from_the_echo() {
        let filter = StringFilter {
            min_length: Some(3),
            ..Default::default()
        };
        let echoed = serde_json::to_value(&filter).unwrap();
        assert_eq!(echoed, serde_json::json!({ "min_length": 3 }));
    }
}
