use crate::{Cli, TextArgs};
use anyhow::Result;
use mood_render::OutputFormat;
use serde_json::json;

pub fn run(cli: &Cli, args: &TextArgs) -> Result<()> {
    let raw = super::read_text(cli, args)?;
    let tokens = args.normalizer().tokens(&raw);
    let cleaned = tokens.join(" ");

    tracing::info!(raw_bytes = raw.len(), tokens = tokens.len(), "cleaned text");

    match cli.format() {
        OutputFormat::Human => println!("{cleaned}"),
        OutputFormat::Json => {
            let doc = json!({ "cleaned": cleaned, "tokens": tokens.len() });
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
        OutputFormat::Jsonl => {
            let doc = json!({ "Cleaned": cleaned, "Tokens": tokens.len() });
            println!("{}", serde_json::to_string(&doc)?);
        }
    }

    Ok(())
}
