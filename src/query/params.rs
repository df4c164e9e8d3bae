//! Structured filter parameters.
//!
//! Translates raw string-valued query parameters into a [`StringFilter`].
//! Every malformed value is rejected with [`QueryError::InvalidFilterValue`]
//! rather than being coerced to a default, so a typo never silently widens or
//! narrows a query.

use super::{QueryError, StringFilter};
use serde::Deserialize;

/// Raw query parameters as they arrive on the wire. All values are strings;
/// parsing and validation happen in [`build_filter`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterParams {
    pub is_palindrome: Option<String>,
    pub min_length: Option<String>,
    pub max_length: Option<String>,
    pub word_count: Option<String>,
    /// `contains` is the historical name for this parameter and is still
    /// accepted.
    #[serde(alias = "contains")]
    pub contains_character: Option<String>,
}

/// Validate raw parameters and build the normalized filter predicate.
pub fn build_filter(params: &FilterParams) -> Result<StringFilter, QueryError> {
    Ok(StringFilter {
        is_palindrome: params
            .is_palindrome
            .as_deref()
            .map(|raw| parse_bool("is_palindrome", raw))
            .transpose()?,
        min_length: params
            .min_length
            .as_deref()
            .map(|raw| parse_count("min_length", raw))
            .transpose()?,
        max_length: params
            .max_length
            .as_deref()
            .map(|raw| parse_count("max_length", raw))
            .transpose()?,
        word_count: params
            .word_count
            .as_deref()
            .map(|raw| parse_count("word_count", raw))
            .transpose()?,
        contains_character: params
            .contains_character
            .as_deref()
            .map(|raw| parse_char("contains_character", raw))
            .transpose()?,
    })
}

fn parse_bool(field: &'static str, raw: &str) -> Result<bool, QueryError> {
    match raw {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(QueryError::InvalidFilterValue {
            field,
            value: raw.to_string(),
        }),
    }
}

fn parse_count(field: &'static str, raw: &str) -> Result<usize, QueryError> {
    raw.parse().map_err(|_| QueryError::InvalidFilterValue {
        field,
        value: raw.to_string(),
    })
}

fn parse_char(field: &'static str, raw: &str) -> Result<char, QueryError> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch),
        _ => Err(QueryError::InvalidFilterValue {
            field,
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::analyze;

    fn params(
        is_palindrome: Option<&str>,
        min_length: Option<&str>,
        max_length: Option<&str>,
        word_count: Option<&str>,
        contains_character: Option<&str>,
    ) -> FilterParams {
        FilterParams {
            is_palindrome: is_palindrome.map(String::from),
            min_length: min_length.map(String::from),
            max_length: max_length.map(String::from),
            word_count: word_count.map(String::from),
            contains_character: contains_character.map(String::from),
        }
    }

    #[test]
    fn absent_params_build_the_empty_filter() {
        let filter = build_filter(&FilterParams::default()).unwrap();
        assert!(filter.is_empty());
    }

    #[test]
    fn length_range_selects_only_records_within_bounds() {
        let filter = build_filter(&params(None, Some("5"), Some("10"), None, None)).unwrap();

        let records = [analyze("abcd"), analyze("abcdefg"), analyze("abcdefghijkl")];
        let selected: Vec<usize> = records
            .iter()
            .filter(|r| filter.matches(r))
            .map(|r| r.length)
            .collect();
        assert_eq!(selected, vec![7]);
    }

    #[test]
    fn all_fields_parse_together() {
        let filter =
            build_filter(&params(Some("true"), Some("1"), Some("20"), Some("1"), Some("e")))
                .unwrap();
        assert_eq!(filter.is_palindrome, Some(true));
        assert_eq!(filter.min_length, Some(1));
        assert_eq!(filter.max_length, Some(20));
        assert_eq!(filter.word_count, Some(1));
        assert_eq!(filter.contains_character, Some('e'));
    }

    #[test]
    fn malformed_word_count_is_rejected() {
        let err = build_filter(&params(None, None, None, Some("abc"), None)).unwrap_err();
        assert_eq!(
            err,
            QueryError::InvalidFilterValue {
                field: "word_count",
                value: "abc".to_string(),
            }
        );
    }

    #[test]
    fn malformed_bounds_are_rejected_not_coerced() {
        assert!(build_filter(&params(None, Some("five"), None, None, None)).is_err());
        assert!(build_filter(&params(None, Some("-3"), None, None, None)).is_err());
        assert!(build_filter(&params(None, None, Some("1.5"), None, None)).is_err());
    }

    #[test]
    fn is_palindrome_accepts_only_true_or_false() {
        assert!(build_filter(&params(Some("yes"), None, None, None, None)).is_err());
        assert!(build_filter(&params(Some("TRUE"), None, None, None, None)).is_err());
        let filter = build_filter(&params(Some("false"), None, None, None, None)).unwrap();
        assert_eq!(filter.is_palindrome, Some(false));
    }

    #[test]
    fn contains_character_must_be_a_single_character() {
        assert!(build_filter(&params(None, None, None, None, Some("ab"))).is_err());
        assert!(build_filter(&params(None, None, None, None, Some(""))).is_err());
        // A single multi-byte character is fine.
        let filter = build_filter(&params(None, None, None, None, Some("é"))).unwrap();
        assert_eq!(filter.contains_character, Some('é'));
    }
}
