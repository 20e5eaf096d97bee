use crate::{Cli, TextArgs};
use anyhow::Result;
use mood_render::{FrequencyWriter, OutputFormat};
use mood_text::WordFrequencies;

pub fn run(cli: &Cli, args: &TextArgs, max_words: usize) -> Result<()> {
    let raw = super::read_text(cli, args)?;
    let freqs = WordFrequencies::from_tokens(args.normalizer().tokens(&raw));

    if freqs.is_empty() {
        tracing::warn!("no words left after cleaning");
    }

    match cli.format() {
        OutputFormat::Human => {
            print!("{}", mood_render::render_frequencies_human(&freqs, max_words));
        }
        OutputFormat::Json => {
            println!("{}", mood_render::render_frequencies_json(&freqs, max_words)?);
        }
        OutputFormat::Jsonl => {
            let mut stdout = std::io::stdout().lock();
            FrequencyWriter::new(&freqs)
                .max_words(max_words)
                .write_to(&mut stdout)?;
        }
    }

    Ok(())
}
