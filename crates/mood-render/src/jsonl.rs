use mood_text::{DEFAULT_MAX_WORDS, WordFrequencies};
use serde::Serialize;
use std::io::Write;

/// Writes word frequencies as JSONL: header, one line per word, footer.
pub struct FrequencyWriter<'a> {
    freqs: &'a WordFrequencies,
    max_words: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct Header {
    version: String,
    total_tokens: usize,
    unique_tokens: usize,
    max_words: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct Entry<'a> {
    word: &'a str,
    count: usize,
    weight: f64,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct Footer {
    shown: usize,
    omitted: usize,
}

impl<'a> FrequencyWriter<'a> {
    pub fn new(freqs: &'a WordFrequencies) -> Self {
        Self {
            freqs,
            max_words: DEFAULT_MAX_WORDS,
        }
    }

    pub fn max_words(mut self, max_words: usize) -> Self {
        self.max_words = max_words;
        self
    }

    /// Render frequencies as a JSONL string.
    pub fn render(&self) -> anyhow::Result<String> {
        let mut buf = Vec::new();
        self.write_to(&mut buf)?;
        Ok(String::from_utf8(buf)?)
    }

    /// Write JSONL output to a writer.
    pub fn write_to(&self, writer: &mut dyn Write) -> anyhow::Result<()> {
        let header = Header {
            version: "1".to_string(),
            total_tokens: self.freqs.total(),
            unique_tokens: self.freqs.unique(),
            max_words: self.max_words,
        };
        serde_json::to_writer(&mut *writer, &header)?;
        writeln!(writer)?;

        let top = self.freqs.top(self.max_words);
        for wc in &top {
            let entry = Entry {
                word: &wc.word,
                count: wc.count,
                weight: wc.weight,
            };
            serde_json::to_writer(&mut *writer, &entry)?;
            writeln!(writer)?;
        }

        let footer = Footer {
            shown: top.len(),
            omitted: self.freqs.unique() - top.len(),
        };
        serde_json::to_writer(&mut *writer, &footer)?;
        writeln!(writer)?;

        Ok(())
    }
}
