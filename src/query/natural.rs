//! Natural-language filter parsing.
//!
//! Translates a free-text query such as "find palindromes longer than 5
//! characters" into a [`StringFilter`]. Patterns are matched independently
//! and case-insensitively; any subset may co-occur, each setting one filter
//! field. A query matching no pattern at all is rejected with
//! [`QueryError::UnparseableQuery`].

use super::{QueryError, StringFilter};
use once_cell::sync::Lazy;
use regex::Regex;

static LONGER_THAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"longer than (\d+)").expect("hard-coded pattern compiles"));

static SHORTER_THAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"shorter than (\d+)").expect("hard-coded pattern compiles"));

static CONTAINS_LETTER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"contain(?:s|ing)? (?:the )?letter ([a-z])").expect("hard-coded pattern compiles")
});

/// Parse a free-text query into a filter predicate.
///
/// Recognized patterns:
///
/// - `palindrom` (substring) → `is_palindrome = true`
/// - `single word` / `one word` → `word_count = 1`
/// - `longer than N` → `min_length = N` (inclusive at N)
/// - `shorter than N` → `max_length = N`
/// - `contains the letter x` → `contains_character = 'x'`
///
/// "Longer than N" is read as an inclusive bound at N, matching the captured
/// number literally; records of exactly length N are included.
pub fn parse_natural_language(query: &str) -> Result<StringFilter, QueryError> {
    let lowered = query.to_lowercase();
    let mut filter = StringFilter::default();

    if lowered.contains("palindrom") {
        filter.is_palindrome = Some(true);
    }
    if lowered.contains("single word") || lowered.contains("one word") {
        filter.word_count = Some(1);
    }
    if let Some(captures) = LONGER_THAN.captures(&lowered) {
        filter.min_length = Some(parse_bound("min_length", &captures[1])?);
    }
    if let Some(captures) = SHORTER_THAN.captures(&lowered) {
        filter.max_length = Some(parse_bound("max_length", &captures[1])?);
    }
    if let Some(captures) = CONTAINS_LETTER.captures(&lowered) {
        filter.contains_character = captures[1].chars().next();
    }

    if filter.is_empty() {
        return Err(QueryError::UnparseableQuery(query.to_string()));
    }
    Ok(filter)
}

// `\d+` guarantees digits, but an absurdly long run can still overflow.
fn parse_bound(field: &'static str, digits: &str) -> Result<usize, QueryError> {
    digits.parse().map_err(|_| QueryError::InvalidFilterValue {
        field,
        value: digits.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palindromes_longer_than_five() {
        let filter = parse_natural_language("Find palindromes longer than 5 characters").unwrap();
        assert_eq!(filter.is_palindrome, Some(true));
        assert_eq!(filter.min_length, Some(5));
        assert_eq!(filter.max_length, None);
        assert_eq!(filter.word_count, None);
        assert_eq!(filter.contains_character, None);
    }

    #[test]
    fn unrecognizable_query_fails() {
        let err = parse_natural_language("hello").unwrap_err();
        assert_eq!(err, QueryError::UnparseableQuery("hello".to_string()));
    }

    #[test]
    fn single_word_variants_set_word_count() {
        assert_eq!(
            parse_natural_language("single word strings").unwrap().word_count,
            Some(1)
        );
        assert_eq!(
            parse_natural_language("strings with one word").unwrap().word_count,
            Some(1)
        );
    }

    #[test]
    fn letter_pattern_accepts_grammatical_variants() {
        for query in [
            "strings containing the letter z",
            "contains the letter z",
            "contain letter z",
            "must CONTAIN THE LETTER Z",
        ] {
            let filter = parse_natural_language(query).unwrap();
            assert_eq!(filter.contains_character, Some('z'), "query: {query:?}");
        }
    }

    #[test]
    fn shorter_than_sets_the_upper_bound() {
        let filter = parse_natural_language("strings shorter than 12").unwrap();
        assert_eq!(filter.max_length, Some(12));
    }

    #[test]
    fn patterns_compose() {
        let filter = parse_natural_language(
            "single word palindromes longer than 3 and shorter than 9 containing the letter a",
        )
        .unwrap();
        assert_eq!(filter.is_palindrome, Some(true));
        assert_eq!(filter.word_count, Some(1));
        assert_eq!(filter.min_length, Some(3));
        assert_eq!(filter.max_length, Some(9));
        assert_eq!(filter.contains_character, Some('a'));
    }

    #[test]
    fn longer_than_is_inclusive_at_the_captured_number() {
        use crate::analyzer::analyze;
        let filter = parse_natural_language("longer than 5").unwrap();
        assert!(filter.matches(&analyze("abcde")));
        assert!(!filter.matches(&analyze("abcd")));
    }

    #[test]
    fn overflowing_bound_is_an_invalid_filter_value() {
        let err = parse_natural_language("longer than 99999999999999999999999").unwrap_err();
        assert!(matches!(err, QueryError::InvalidFilterValue { field: "min_length", .. }));
    }
}
