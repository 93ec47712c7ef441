use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::models::KeywordCount;
use crate::text::stopwords::is_stopword;

fn word_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\b[a-z]{3,}\b").unwrap())
}

/// Frequency-ranked keywords over case-folded alphabetic tokens of length
/// >= 3, stopwords removed. Descending by count, ties kept in first-seen
/// order, capped at `top_n`. Pure and total; empty input yields an empty
/// list.
///
/// Note: the historical tokenizer kept length >= 4 words and no stopword
/// filter; the length-3 + stopword variant is deliberate so that short
/// content words like "cat" or "war" rank while "the"/"and" never do.
pub fn keywords(text: &str, top_n: usize) -> Vec<KeywordCount> {
    if text.is_empty() {
        return Vec::new();
    }

    let lowered = text.to_lowercase();
    let mut counts: HashMap<&str, u32> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();
    for m in word_pattern().find_iter(&lowered) {
        let word = m.as_str();
        if is_stopword(word) {
            continue;
        }
        match counts.get_mut(word) {
            Some(count) => *count += 1,
            None => {
                counts.insert(word, 1);
                order.push(word);
            }
        }
    }

    let mut ranked: Vec<KeywordCount> = order
        .into_iter()
        .map(|word| KeywordCount {
            word: word.to_string(),
            count: counts[word],
        })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(top_n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_case_folded() {
        let ranked = keywords("the cat sat on the Cat mat mat mat", 5);
        assert_eq!(ranked[0].word, "mat");
        assert_eq!(ranked[0].count, 3);
        // "the" and "on" are stopwords, so "cat" and "sat" follow.
        assert_eq!(ranked[1].word, "cat");
        assert_eq!(ranked[1].count, 2);
        assert_eq!(ranked[2].word, "sat");
        assert_eq!(ranked[2].count, 1);
        assert_eq!(ranked.len(), 3);
    }

    #[test]
    fn test_short_words_and_stopwords_excluded() {
        let ranked = keywords("a an the it", 10);
        assert_eq!(ranked.len(), 0);
    }

    #[test]
    fn test_top_n_cap() {
        let ranked = keywords("alpha beta gamma delta epsilon", 2);
        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn test_empty_input() {
        assert!(keywords("", 5).is_empty());
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let ranked = keywords("zebra apple zebra apple mango", 5);
        assert_eq!(ranked[0].word, "zebra");
        assert_eq!(ranked[1].word, "apple");
        assert_eq!(ranked[2].word, "mango");
    }
}
