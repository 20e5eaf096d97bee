use std::collections::HashSet;
use std::sync::LazyLock;

use unicode_segmentation::UnicodeSegmentation;

use crate::stopwords::ENGLISH_STOPWORDS;

/// Contraction and possessive suffixes split off their host word, the way
/// Treebank-style English tokenizers do: "don't" -> "do" + "n't".
const CLITICS: &[&str] = &[
    "n't", "n\u{2019}t", "'s", "\u{2019}s", "'m", "\u{2019}m", "'d", "\u{2019}d", "'ll",
    "\u{2019}ll", "'re", "\u{2019}re", "'ve", "\u{2019}ve",
];

static ENGLISH: LazyLock<Normalizer> = LazyLock::new(Normalizer::english);

/// Clean raw text with the default English normalizer.
///
/// Shorthand for `Normalizer::english().normalize(raw)` without rebuilding
/// the stopword set on every call.
pub fn normalize(raw: &str) -> String {
    ENGLISH.normalize(raw)
}

/// Lowercase `input` and split it into word tokens.
///
/// Words come from Unicode segmentation (UAX #29), then get split again on
/// anything that isn't a letter, digit or apostrophe, since UAX #29 keeps
/// `spicy:hot` and `food.loved` together. Clitics are emitted as their own
/// tokens. No filtering happens here, so numerals and tokens like `"n't"` are
/// still present.
pub fn tokenize(input: &str) -> Vec<String> {
    let lower = input.to_lowercase();
    let mut tokens = Vec::new();

    for word in lower.unicode_words() {
        for piece in word.split(is_separator).filter(|p| !p.is_empty()) {
            match split_clitic(piece) {
                Some((host, clitic)) => {
                    tokens.push(host.to_string());
                    tokens.push(clitic.to_string());
                }
                None => tokens.push(piece.to_string()),
            }
        }
    }

    tokens
}

fn is_separator(c: char) -> bool {
    !c.is_alphanumeric() && c != '\'' && c != '\u{2019}'
}

/// Split a trailing clitic off `word`, if it has one and something remains.
fn split_clitic(word: &str) -> Option<(&str, &str)> {
    CLITICS.iter().find_map(|clitic| {
        word.strip_suffix(clitic)
            .filter(|host| !host.is_empty())
            .map(|host| (host, &word[host.len()..]))
    })
}

fn is_alphabetic(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphabetic)
}

/// Turns free text into cleaned, space-joined tokens.
///
/// A token survives when it is purely alphabetic and not a stopword.
/// Instances are immutable once built and safe to share across threads.
#[derive(Debug, Clone)]
pub struct Normalizer {
    stopwords: HashSet<String>,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::english()
    }
}

impl Normalizer {
    /// Normalizer filtering the English stopword list.
    pub fn english() -> Self {
        Self {
            stopwords: ENGLISH_STOPWORDS.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Normalizer that keeps stopwords (only the alphabetic filter applies).
    pub fn without_stopwords() -> Self {
        Self {
            stopwords: HashSet::new(),
        }
    }

    /// Add extra stopwords. Words are lowercased before insertion.
    pub fn with_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stopwords
            .extend(words.into_iter().map(|w| w.as_ref().trim().to_lowercase()));
        self
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&word.to_lowercase())
    }

    /// Tokens of `raw` that pass the alphabetic and stopword filters,
    /// in original order.
    pub fn tokens(&self, raw: &str) -> Vec<String> {
        let all = tokenize(raw);
        let total = all.len();
        let kept: Vec<String> = all
            .into_iter()
            .filter(|t| is_alphabetic(t) && !self.stopwords.contains(t))
            .collect();

        tracing::trace!(total, kept = kept.len(), "filtered tokens");
        kept
    }

    /// Clean `raw` into lowercase alphabetic tokens joined by single spaces.
    ///
    /// Never fails: degenerate input (empty, only stopwords, no letters)
    /// yields an empty string.
    pub fn normalize(&self, raw: &str) -> String {
        self.tokens(raw).join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- tokenize ---

    #[test]
    fn tokenize_lowercases_and_strips_punctuation() {
        assert_eq!(
            tokenize("Hello, World! Pav-Bhaji?"),
            vec!["hello", "world", "pav", "bhaji"]
        );
    }

    #[test]
    fn tokenize_keeps_numbers_as_tokens() {
        assert_eq!(tokenize("2 plates of 12.5"), vec!["2", "plates", "of", "12", "5"]);
    }

    #[test]
    fn tokenize_splits_on_inner_punctuation() {
        assert_eq!(tokenize("spicy:hot"), vec!["spicy", "hot"]);
        assert_eq!(tokenize("food.Loved"), vec!["food", "loved"]);
        assert_eq!(tokenize("dal\u{00b7}chawal"), vec!["dal", "chawal"]);
        assert_eq!(tokenize("masala_dosa"), vec!["masala", "dosa"]);
    }

    #[test]
    fn tokenize_splits_contractions() {
        assert_eq!(tokenize("don't"), vec!["do", "n't"]);
        assert_eq!(tokenize("they're"), vec!["they", "'re"]);
    }

    #[test]
    fn tokenize_splits_possessive_with_typographic_apostrophe() {
        assert_eq!(tokenize("Chef\u{2019}s"), vec!["chef", "\u{2019}s"]);
    }

    #[test]
    fn tokenize_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  !!  ...").is_empty());
    }

    // --- split_clitic ---

    #[test]
    fn split_clitic_requires_host() {
        assert_eq!(split_clitic("'s"), None);
        assert_eq!(split_clitic("samosa's"), Some(("samosa", "'s")));
        assert_eq!(split_clitic("samosa"), None);
    }

    // --- normalize ---

    #[test]
    fn normalize_strips_stopwords_and_punctuation() {
        assert_eq!(normalize("Samosa is Tasty!!"), "samosa tasty");
    }

    #[test]
    fn normalize_keeps_words_joined_by_punctuation() {
        assert_eq!(normalize("spicy:hot"), "spicy hot");
        assert_eq!(normalize("food.Loved it"), "food loved");
        assert_eq!(normalize("Service:slow, Dr.Who's pick"), "service slow dr pick");
    }

    #[test]
    fn normalize_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \n\t "), "");
    }

    #[test]
    fn normalize_only_stopwords() {
        assert_eq!(normalize("The The a an"), "");
    }

    #[test]
    fn normalize_drops_numerals_and_symbols() {
        assert_eq!(normalize("3 spicy 4u $$ curry 100%"), "spicy curry");
    }

    #[test]
    fn normalize_keeps_duplicates_in_order() {
        assert_eq!(
            normalize("Biryani, biryani and MORE Biryani"),
            "biryani biryani biryani"
        );
    }

    #[test]
    fn normalize_drops_possessive_clitic() {
        assert_eq!(normalize("The chef's special"), "chef special");
    }

    #[test]
    fn normalize_drops_negation_contractions() {
        assert_eq!(normalize("I don't like cold naan"), "like cold naan");
    }

    #[test]
    fn normalize_handles_non_ascii_letters() {
        assert_eq!(normalize("Crème Brûlée is délicieux"), "crème brûlée délicieux");
    }

    #[test]
    fn normalize_is_idempotent() {
        let inputs = [
            "Samosa is Tasty!!",
            "The chef's 2 BEST dishes: Dal-Khichdi & Gulab Jamun.",
            "I wouldn't say it's bad",
            "Crème Brûlée 漢字 ÉCLAIR",
            "Service:slow, food.Loved it",
            "",
        ];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn normalize_output_invariant() {
        let out = normalize("It's the BEST paneer-tikka in town, 10/10 would eat again!");
        for token in out.split(' ') {
            assert!(is_alphabetic(token), "non-alphabetic token {token:?}");
            assert_eq!(token, token.to_lowercase());
            assert!(!ENGLISH.is_stopword(token), "stopword leaked: {token}");
        }
        assert!(!out.contains("  "));
    }

    // --- Normalizer configuration ---

    #[test]
    fn extra_stopwords_are_filtered() {
        let n = Normalizer::english().with_stopwords(["Restaurant", " food "]);
        assert_eq!(n.normalize("Great restaurant food and samosa"), "great samosa");
        assert!(n.is_stopword("RESTAURANT"));
    }

    #[test]
    fn without_stopwords_keeps_function_words() {
        let n = Normalizer::without_stopwords();
        assert_eq!(n.normalize("The samosa is 5 stars"), "the samosa is stars");
        assert!(!n.is_stopword("the"));
    }

    #[test]
    fn default_is_english() {
        let n = Normalizer::default();
        assert!(n.is_stopword("the"));
        assert!(n.is_stopword("The"));
        assert!(!n.is_stopword("samosa"));
    }

    #[test]
    fn tokens_returns_filtered_vec() {
        let n = Normalizer::english();
        assert_eq!(n.tokens("Hot chai, hot samosa"), vec!["hot", "chai", "hot", "samosa"]);
    }
}
