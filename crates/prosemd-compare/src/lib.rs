//! Pairwise comparison of two text samples.
//!
//! Each sample is analyzed independently by `prosemd-model`; this crate
//! adds the comparison record on top: signed deltas and a token-overlap
//! similarity score over distinct normalized tokens.

use std::collections::BTreeSet;

use prosemd_math::overlap_coefficient;
use prosemd_model::analyze_sample;
use prosemd_segment::normalized_words;
use prosemd_types::{ComparisonMetrics, PairReport, SampleMetrics};

/// Compare two samples and return only the comparison record.
///
/// Total over arbitrary strings, including an empty pair.
#[must_use]
pub fn compare_samples(primary: &str, secondary: &str) -> ComparisonMetrics {
    compare_pair(primary, secondary).comparison
}

/// Analyze both samples and derive the pairwise comparison.
///
/// Callers re-invoke this on every edit of either sample; each call
/// recomputes all three records from the two current strings.
#[must_use]
pub fn compare_pair(primary: &str, secondary: &str) -> PairReport {
    let primary_metrics = analyze_sample(primary);
    let secondary_metrics = analyze_sample(secondary);
    let comparison = derive_comparison(&primary_metrics, &secondary_metrics, primary, secondary);
    PairReport {
        primary: primary_metrics,
        secondary: secondary_metrics,
        comparison,
    }
}

/// Count distinct normalized tokens present in both samples and score
/// the overlap against the combined raw word count.
///
/// This runs its own tokenization pass on the raw inputs: set
/// membership wants distinct tokens, while the per-sample tally counts
/// occurrences. Keep the two passes separate.
fn derive_comparison(
    primary_metrics: &SampleMetrics,
    secondary_metrics: &SampleMetrics,
    primary: &str,
    secondary: &str,
) -> ComparisonMetrics {
    let primary_tokens: BTreeSet<String> = normalized_words(primary).into_iter().collect();
    let mut shared: BTreeSet<String> = BTreeSet::new();
    for token in normalized_words(secondary) {
        if primary_tokens.contains(&token) {
            shared.insert(token);
        }
    }

    let total_words = primary_metrics.words + secondary_metrics.words;
    ComparisonMetrics {
        word_delta: secondary_metrics.words as i64 - primary_metrics.words as i64,
        character_delta: secondary_metrics.characters as i64 - primary_metrics.characters as i64,
        similarity: overlap_coefficient(shared.len(), total_words),
    }
}
