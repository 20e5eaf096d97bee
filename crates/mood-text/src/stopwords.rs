/// English stopwords, the classic NLTK corpus list.
///
/// Apostrophe forms are kept so the list can be shared with tokenizers that
/// don't split contractions. Tokens produced by [`crate::tokenize`] never
/// contain apostrophes after clitic splitting, so only the bare forms match.
pub const ENGLISH_STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn list_has_179_unique_entries() {
        let unique: HashSet<&str> = ENGLISH_STOPWORDS.iter().copied().collect();
        assert_eq!(ENGLISH_STOPWORDS.len(), 179);
        assert_eq!(unique.len(), ENGLISH_STOPWORDS.len());
    }

    #[test]
    fn list_is_lowercase() {
        for word in ENGLISH_STOPWORDS {
            assert_eq!(*word, word.to_lowercase(), "not lowercase: {word}");
        }
    }

    #[test]
    fn contains_basics() {
        for word in ["the", "is", "a", "an", "not", "don't"] {
            assert!(ENGLISH_STOPWORDS.contains(&word), "missing: {word}");
        }
        assert!(!ENGLISH_STOPWORDS.contains(&"samosa"));
        assert!(!ENGLISH_STOPWORDS.contains(&"tasty"));
    }
}
