use crate::{CatalogArgs, Cli};
use anyhow::Result;
use mood_render::OutputFormat;

pub fn run(cli: &Cli, mood: &str, args: &CatalogArgs) -> Result<()> {
    let catalog = super::load_catalog(args)?;
    let matched = catalog.match_mood(mood);

    if !matched.is_recognized() {
        tracing::info!(query = %matched.query, "mood not in catalog");
    }

    match cli.format() {
        OutputFormat::Human => print!("{}", mood_render::render_match_human(&matched, &catalog)),
        OutputFormat::Json => println!("{}", mood_render::render_match_json(&matched)?),
        OutputFormat::Jsonl => println!("{}", serde_json::to_string(&matched)?),
    }

    Ok(())
}
