use crate::{CatalogArgs, Cli};
use anyhow::Result;
use mood_render::OutputFormat;

pub fn run(cli: &Cli, args: &CatalogArgs) -> Result<()> {
    let catalog = super::load_catalog(args)?;

    match cli.format() {
        OutputFormat::Human => {
            for mood in catalog.moods() {
                let dishes = catalog.lookup(mood);
                println!("{mood:<12} {}", dishes.join(", "));
            }
        }
        OutputFormat::Json | OutputFormat::Jsonl => {
            let moods: Vec<&str> = catalog.moods().collect();
            let out = if cli.format() == OutputFormat::Json {
                serde_json::to_string_pretty(&moods)?
            } else {
                serde_json::to_string(&moods)?
            };
            println!("{out}");
        }
    }

    Ok(())
}
