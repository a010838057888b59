use std::collections::BTreeMap;

use prosemd_math::safe_ratio;
use prosemd_segment::normalize_word;
use prosemd_types::SampleMetrics;

/// Fixed reading pace used for the reading-time estimate.
pub const WORDS_PER_MINUTE: usize = 200;

/// Maximum number of repeated words reported per sample.
pub const TOP_REPEATED: usize = 5;

/// Compute the full metrics record for one text sample.
///
/// Total over arbitrary strings. Empty or whitespace-only input yields
/// the all-zero record; nothing here can fail.
#[must_use]
pub fn analyze_sample(raw: &str) -> SampleMetrics {
    let text = raw.trim();
    if text.is_empty() {
        return SampleMetrics::default();
    }

    let words = prosemd_segment::words(text);
    let total_word_chars: usize = words.iter().map(|w| w.chars().count()).sum();
    let tally = tally_words(&words);

    SampleMetrics {
        characters: text.chars().count(),
        words: words.len(),
        sentences: prosemd_segment::sentences(text).len(),
        paragraphs: prosemd_segment::paragraphs(text).len(),
        avg_word_length: safe_ratio(total_word_chars, words.len()),
        reading_time_minutes: words.len() as f64 / WORDS_PER_MINUTE as f64,
        repeated_words: top_repeated(&tally),
    }
}

/// Tally normalized word occurrences in first-encounter order.
///
/// Words that normalize to the empty string are skipped entirely; they
/// still count toward the raw word total in [`analyze_sample`].
#[must_use]
pub fn tally_words(words: &[&str]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut index: BTreeMap<String, usize> = BTreeMap::new();

    for raw in words {
        let key = normalize_word(raw);
        if key.is_empty() {
            continue;
        }
        match index.get(&key) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                index.insert(key.clone(), counts.len());
                counts.push((key, 1));
            }
        }
    }

    counts
}

/// Rank a tally down to the repeated-word list: entries with count > 1,
/// most frequent first, at most [`TOP_REPEATED`] entries.
#[must_use]
pub fn top_repeated(tally: &[(String, usize)]) -> Vec<String> {
    let mut repeated: Vec<&(String, usize)> =
        tally.iter().filter(|(_, count)| *count > 1).collect();
    // Stable sort: equal counts keep the tally's first-encounter order.
    repeated.sort_by(|a, b| b.1.cmp(&a.1));
    repeated
        .into_iter()
        .take(TOP_REPEATED)
        .map(|(word, _)| word.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_sentence_sample_counts_match() {
        let metrics = analyze_sample("Hello world. Hello again!");
        assert_eq!(metrics.characters, 25);
        assert_eq!(metrics.words, 4);
        assert_eq!(metrics.sentences, 2);
        assert_eq!(metrics.paragraphs, 1);
        assert_eq!(metrics.avg_word_length, 5.5);
        assert_eq!(metrics.reading_time_minutes, 0.02);
        assert_eq!(metrics.repeated_words, vec!["hello".to_string()]);
    }

    #[test]
    fn blank_line_splits_paragraphs() {
        let metrics = analyze_sample("One\n\nTwo");
        assert_eq!(metrics.paragraphs, 2);
        assert_eq!(metrics.words, 2);
        assert_eq!(metrics.sentences, 1);
    }

    #[test]
    fn empty_input_yields_zero_record() {
        assert_eq!(analyze_sample(""), SampleMetrics::default());
        assert_eq!(analyze_sample("   \n\t  "), SampleMetrics::default());
    }

    #[test]
    fn surrounding_whitespace_is_trimmed_before_counting() {
        let metrics = analyze_sample("  word  ");
        assert_eq!(metrics.characters, 4);
        assert_eq!(metrics.words, 1);
    }

    #[test]
    fn punctuation_only_words_count_raw_but_not_in_tally() {
        let metrics = analyze_sample("... word ...");
        assert_eq!(metrics.words, 3);
        // "..." repeats but normalizes to nothing, so it never ranks.
        assert!(metrics.repeated_words.is_empty());
    }

    #[test]
    fn tally_preserves_first_encounter_order() {
        let words = ["b", "b", "a", "a", "a", "c"];
        let tally = tally_words(&words);
        assert_eq!(
            tally,
            vec![
                ("b".to_string(), 2),
                ("a".to_string(), 3),
                ("c".to_string(), 1),
            ]
        );
    }

    #[test]
    fn top_repeated_ranks_by_count_then_encounter_order() {
        let words = ["b", "b", "a", "a", "a", "c", "c", "d"];
        let tally = tally_words(&words);
        assert_eq!(top_repeated(&tally), vec!["a", "b", "c"]);
    }

    #[test]
    fn top_repeated_tie_keeps_encounter_order() {
        let words = ["dog", "cat", "dog", "cat", "ant", "ant"];
        let tally = tally_words(&words);
        assert_eq!(top_repeated(&tally), vec!["dog", "cat", "ant"]);
    }

    #[test]
    fn top_repeated_truncates_to_five() {
        let words = [
            "a", "a", "b", "b", "c", "c", "d", "d", "e", "e", "f", "f", "g", "g",
        ];
        let tally = tally_words(&words);
        let repeated = top_repeated(&tally);
        assert_eq!(repeated.len(), 5);
        assert_eq!(repeated, vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn case_and_punctuation_fold_into_one_key() {
        let metrics = analyze_sample("Dog dog. DOG!");
        assert_eq!(metrics.repeated_words, vec!["dog".to_string()]);
    }
}
