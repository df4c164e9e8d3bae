//! Pure string property analysis.
//!
//! This module computes the fixed set of descriptive properties the service
//! stores for every submitted string: character length, palindrome check,
//! word count, unique character count, a character-frequency histogram, and a
//! SHA-256 content hash. The entry point is [`analyze`], which is total and
//! deterministic: any input (including the empty string) is valid, and the
//! same input always produces the same output.
//!
//! Two different views of the input are used, on purpose:
//!
//! - The **trimmed** string (leading/trailing whitespace stripped, everything
//!   else untouched) drives `length`, `word_count`, `unique_characters`, the
//!   frequency histogram, and the content hash.
//! - A **normalized** string (trimmed, lower-cased, all non-alphanumeric
//!   characters removed) drives only the palindrome check, so that
//!   `"A man, a plan, a canal: Panama"` is recognized as a palindrome.
//!
//! All counting operates on Unicode scalar values, not bytes.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::HashMap;

/// Derived properties of a single string, computed once at creation time and
/// never recomputed or mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalysisResult {
    /// Number of characters in the trimmed string.
    pub length: usize,
    /// Whether the normalized (lower-cased, alphanumeric-only) form reads the
    /// same forwards and backwards. The empty normalized form counts as a
    /// palindrome.
    pub is_palindrome: bool,
    /// Number of whitespace-delimited, non-empty tokens in the trimmed string.
    pub word_count: usize,
    /// Number of distinct characters in the trimmed string. Case-sensitive;
    /// internal whitespace counts.
    pub unique_characters: usize,
    /// Character → occurrence count over the trimmed string. Consumers must
    /// treat this as an unordered map.
    pub character_frequency: HashMap<char, u64>,
    /// Hex-encoded SHA-256 digest of the trimmed string. Doubles as the
    /// record's dedup key.
    pub sha256_hash: String,
}

/// Analyze a string and return its derived properties.
///
/// # Example
///
/// ```
/// use stringlens::analyze;
///
/// let result = analyze("  racecar  ");
/// assert_eq!(result.length, 7);
/// assert!(result.is_palindrome);
/// assert_eq!(result.word_count, 1);
/// assert_eq!(result.unique_characters, 4);
/// ```
pub fn analyze(input: &str) -> AnalysisResult {
    let trimmed = input.trim();

    // Palindrome check runs over a separate normalization so punctuation,
    // case and spacing do not break symmetry.
    let normalized: String = trimmed
        .chars()
        .flat_map(char::to_lowercase)
        .filter(char::is_ascii_alphanumeric)
        .collect();
    let is_palindrome = normalized.chars().eq(normalized.chars().rev());

    let word_count = trimmed.split_whitespace().count();

    let mut character_frequency: HashMap<char, u64> = HashMap::new();
    let mut length = 0usize;
    for ch in trimmed.chars() {
        length += 1;
        *character_frequency.entry(ch).or_insert(0) += 1;
    }
    let unique_characters = character_frequency.len();

    let mut hasher = Sha256::new();
    hasher.update(trimmed.as_bytes());
    let sha256_hash = hex::encode(hasher.finalize());

    AnalysisResult {
        length,
        is_palindrome,
        word_count,
        unique_characters,
        character_frequency,
        sha256_hash,
    }
}
