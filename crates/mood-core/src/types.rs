use serde::Serialize;

/// One entry of a word-frequency table.
///
/// `weight` is the count relative to the most frequent word, so the top word
/// always has weight `1.0`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
    pub weight: f64,
}

/// Outcome of looking a mood up in a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoodMatch {
    /// The query after trimming and lowercasing.
    pub query: String,
    /// The matched catalog key, `None` when the mood is unknown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
    pub dishes: Vec<String>,
}

impl MoodMatch {
    /// Build a match from a normalized query and its lookup result.
    /// An empty dish list means the mood was not recognized.
    pub fn new(query: &str, dishes: Vec<String>) -> Self {
        let mood = (!dishes.is_empty()).then(|| query.to_string());
        Self {
            query: query.to_string(),
            mood,
            dishes,
        }
    }

    pub fn is_recognized(&self) -> bool {
        self.mood.is_some()
    }
}
