use serde::Serialize;

use mood_core::{MoodMatch, WordCount};
use mood_text::WordFrequencies;

#[derive(Serialize)]
struct FrequencyReport {
    total_tokens: usize,
    unique_tokens: usize,
    words: Vec<WordCount>,
}

/// Frequencies as one pretty-printed JSON document.
pub fn render_frequencies_json(
    freqs: &WordFrequencies,
    max_words: usize,
) -> anyhow::Result<String> {
    let report = FrequencyReport {
        total_tokens: freqs.total(),
        unique_tokens: freqs.unique(),
        words: freqs.top(max_words),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

pub fn render_match_json(m: &MoodMatch) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(m)?)
}
