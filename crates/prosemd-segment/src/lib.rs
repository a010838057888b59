//! # prosemd-segment
//!
//! **Tier 1 (Segmentation)**
//!
//! Splits prose samples into words, sentences, and paragraphs, and
//! normalizes raw tokens for tallying and overlap scoring. Everything
//! here is a total function over arbitrary strings; callers decide what
//! to count and what to rank.

#![forbid(unsafe_code)]

use std::sync::LazyLock;

use regex::Regex;

/// Sentence terminators. Runs of these split one sentence from the next.
const SENTENCE_TERMINATORS: &[char] = &['.', '!', '?'];

/// Paragraph boundary: a newline, optional whitespace, then another newline.
static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("valid regex literal"));

/// Split a sample into raw whitespace-delimited words, in input order.
///
/// Never yields empty tokens. Punctuation stays attached to its word;
/// stripping it is [`normalize_word`]'s job.
#[must_use]
pub fn words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Split a sample into sentences on runs of `.`, `!`, or `?`.
///
/// Segments are trimmed and blank segments are dropped, so `"Hi...Bye"`
/// yields two sentences and `"..."` yields none.
#[must_use]
pub fn sentences(text: &str) -> Vec<&str> {
    text.split(SENTENCE_TERMINATORS)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// Split a sample into paragraphs on blank-line boundaries.
///
/// A run of newlines with only whitespace between them counts as a
/// single boundary. Segments are trimmed and blank segments dropped.
#[must_use]
pub fn paragraphs(text: &str) -> Vec<&str> {
    PARAGRAPH_BREAK
        .split(text)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// Normalize a raw word: lowercase, then keep only ASCII letters,
/// digits, apostrophes, and hyphens.
///
/// May return an empty string (e.g. for `"..."` or `"?!"`); callers skip
/// those when tallying or building overlap sets.
#[must_use]
pub fn normalize_word(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '\'' || *c == '-')
        .collect()
}

/// Tokenize a sample for set-membership overlap: split on whitespace,
/// normalize each token, and drop tokens that normalize to nothing.
#[must_use]
pub fn normalized_words(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(normalize_word)
        .filter(|token| !token.is_empty())
        .collect()
}
