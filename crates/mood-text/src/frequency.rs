use std::collections::HashMap;

use mood_core::WordCount;

/// Default cap on words handed to a word-cloud renderer.
pub const DEFAULT_MAX_WORDS: usize = 200;

/// Word counts over cleaned text.
#[derive(Debug, Clone, Default)]
pub struct WordFrequencies {
    counts: HashMap<String, usize>,
    total: usize,
}

impl WordFrequencies {
    /// Count the whitespace-separated tokens of already-cleaned text.
    pub fn from_cleaned(text: &str) -> Self {
        Self::from_tokens(text.split_whitespace())
    }

    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut freqs = Self::default();
        for token in tokens {
            *freqs.counts.entry(token.into()).or_insert(0) += 1;
            freqs.total += 1;
        }
        freqs
    }

    /// Total number of tokens counted.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct words.
    pub fn unique(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn count(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// The `n` most frequent words, by count descending then word ascending.
    ///
    /// Weights are relative to the most frequent word overall.
    pub fn top(&self, n: usize) -> Vec<WordCount> {
        let mut sorted: Vec<(&String, &usize)> = self.counts.iter().collect();
        sorted.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

        let max = sorted.first().map(|(_, c)| **c).unwrap_or(0);
        sorted
            .into_iter()
            .take(n)
            .map(|(word, count)| WordCount {
                word: word.clone(),
                count: *count,
                weight: *count as f64 / max as f64,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_tokens() {
        let freqs = WordFrequencies::from_cleaned("samosa chai samosa naan samosa chai");
        assert_eq!(freqs.total(), 6);
        assert_eq!(freqs.unique(), 3);
        assert_eq!(freqs.count("samosa"), 3);
        assert_eq!(freqs.count("chai"), 2);
        assert_eq!(freqs.count("biryani"), 0);
    }

    #[test]
    fn top_orders_by_count_then_word() {
        let freqs = WordFrequencies::from_cleaned("naan chai samosa chai samosa dal");
        let top = freqs.top(10);
        let words: Vec<&str> = top.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(words, vec!["chai", "samosa", "dal", "naan"]);
    }

    #[test]
    fn top_weights_are_relative_to_max() {
        let freqs = WordFrequencies::from_cleaned("samosa samosa samosa samosa chai");
        let top = freqs.top(2);
        assert_eq!(top[0].weight, 1.0);
        assert_eq!(top[1].weight, 0.25);
        for wc in &top {
            assert!(wc.weight > 0.0 && wc.weight <= 1.0);
        }
    }

    #[test]
    fn top_truncates() {
        let freqs = WordFrequencies::from_cleaned("a b c d e");
        assert_eq!(freqs.top(2).len(), 2);
        assert!(freqs.top(0).is_empty());
    }

    #[test]
    fn empty_text() {
        let freqs = WordFrequencies::from_cleaned("");
        assert!(freqs.is_empty());
        assert_eq!(freqs.total(), 0);
        assert_eq!(freqs.unique(), 0);
        assert!(freqs.top(DEFAULT_MAX_WORDS).is_empty());
    }

    #[test]
    fn from_normalized_text() {
        let cleaned = crate::normalize("The samosa is tasty. The samosa is hot!");
        let freqs = WordFrequencies::from_cleaned(&cleaned);
        assert_eq!(freqs.count("samosa"), 2);
        assert_eq!(freqs.count("the"), 0);
        assert_eq!(freqs.top(1)[0].word, "samosa");
    }
}
