pub mod clean;
pub mod freq;
pub mod moods;
pub mod suggest;

use std::borrow::Cow;
use std::io::{BufRead, IsTerminal};

use anyhow::{Context, Result};
use mood_catalog::MoodCatalog;
use mood_text::join_column;

use crate::{CatalogArgs, Cli, TextArgs};

/// Raw text for `clean`/`freq`: positional arguments if given, else stdin.
pub(crate) fn read_text(cli: &Cli, args: &TextArgs) -> Result<String> {
    if !args.text.is_empty() {
        return Ok(args.text.join(" "));
    }

    let stdin = std::io::stdin();
    if stdin.is_terminal() && !cli.is_quiet() {
        eprintln!("Reading text from stdin, one value per line (Ctrl-D to finish)...");
    }
    read_cells(stdin.lock()).context("failed to read text from stdin")
}

/// Treat each line as one column cell; blank lines are missing values.
pub(crate) fn read_cells<R: BufRead>(reader: R) -> Result<String> {
    let mut cells = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            cells.push(None);
        } else {
            cells.push(Some(line));
        }
    }

    let present = cells.iter().flatten().count();
    tracing::info!(cells = cells.len(), present, "read column cells");
    Ok(join_column(cells))
}

/// The catalog named by `--catalog`, or the built-in one.
pub(crate) fn load_catalog(args: &CatalogArgs) -> Result<Cow<'static, MoodCatalog>> {
    match &args.catalog {
        Some(path) => {
            let catalog = MoodCatalog::from_path(path)?;
            tracing::info!(path = %path.display(), moods = catalog.len(), "using catalog file");
            Ok(Cow::Owned(catalog))
        }
        None => Ok(Cow::Borrowed(MoodCatalog::builtin())),
    }
}
