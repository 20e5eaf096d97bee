use mood_catalog::MoodCatalog;
use mood_core::MoodMatch;
use mood_text::WordFrequencies;

/// Number of mood names suggested when a query isn't recognized.
const HINT_MOODS: usize = 3;

/// Aligned `word  count` table of the `max_words` most frequent words.
pub fn render_frequencies_human(freqs: &WordFrequencies, max_words: usize) -> String {
    let top = freqs.top(max_words);
    if top.is_empty() {
        return "No words left after cleaning.\n".to_string();
    }

    let width = top
        .iter()
        .map(|wc| wc.word.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for wc in &top {
        out.push_str(&format!("{:<width$}  {:>6}\n", wc.word, wc.count));
    }

    let omitted = freqs.unique() - top.len();
    if omitted > 0 {
        out.push_str(&format!("({omitted} more words)\n"));
    }
    out.push_str(&format!("{} tokens, {} unique\n", freqs.total(), freqs.unique()));
    out
}

/// Suggestion list for a recognized mood, or the "not recognized" notice.
pub fn render_match_human(m: &MoodMatch, catalog: &MoodCatalog) -> String {
    if !m.is_recognized() {
        return format!("{}\n", unrecognized_hint(catalog));
    }

    let mut out = format!("Based on your mood '{}', try:\n", m.query);
    for dish in &m.dishes {
        out.push_str(&format!("- {dish}\n"));
    }
    out
}

/// "Mood not recognized. Try 'happy', 'sad', 'lazy', etc."
pub fn unrecognized_hint(catalog: &MoodCatalog) -> String {
    let names: Vec<String> = catalog
        .moods()
        .take(HINT_MOODS)
        .map(|m| format!("'{m}'"))
        .collect();
    let etc = if catalog.len() > HINT_MOODS { ", etc" } else { "" };
    format!("Mood not recognized. Try {}{etc}.", names.join(", "))
}
