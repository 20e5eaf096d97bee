use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use mood_render::OutputFormat;
use mood_text::{DEFAULT_MAX_WORDS, Normalizer};
use tracing_subscriber::EnvFilter;

mod commands;

/// mood-lens — clean text for word clouds and match food to your mood.
#[derive(Parser, Debug)]
#[command(name = "mood-lens", version, about)]
pub struct Cli {
    /// Increase log verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format: human, json, or jsonl
    #[arg(long, global = true, default_value_t = OutputFormat::Human)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Clean text into lowercase words with stopwords removed
    Clean(TextArgs),

    /// Count word frequencies of the cleaned text
    Freq {
        #[command(flatten)]
        text: TextArgs,

        /// Maximum number of words to list
        #[arg(long, default_value_t = DEFAULT_MAX_WORDS)]
        max_words: usize,
    },

    /// Suggest dishes for a mood
    Suggest {
        /// Mood to look up (e.g. happy, sad, romantic)
        mood: String,

        #[command(flatten)]
        catalog: CatalogArgs,
    },

    /// List the moods the catalog knows
    Moods(CatalogArgs),
}

/// Text input shared by `clean` and `freq`.
#[derive(Args, Debug)]
pub struct TextArgs {
    /// Text to analyze; read from stdin (one cell per line) when omitted
    text: Vec<String>,

    /// Extra stopword to filter (repeatable)
    #[arg(long = "stopword", value_name = "WORD")]
    stopwords: Vec<String>,

    /// Keep English stopwords
    #[arg(long)]
    keep_stopwords: bool,
}

impl TextArgs {
    pub fn normalizer(&self) -> Normalizer {
        let base = if self.keep_stopwords {
            Normalizer::without_stopwords()
        } else {
            Normalizer::english()
        };
        base.with_stopwords(&self.stopwords)
    }
}

#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// JSON file mapping moods to dish lists (defaults to the built-in catalog)
    #[arg(long, value_name = "PATH", env = "MOOD_LENS_CATALOG")]
    catalog: Option<PathBuf>,
}

impl Cli {
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    fn log_filter(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

fn init_logging(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    match &cli.command {
        Command::Clean(text) => commands::clean::run(&cli, text),
        Command::Freq { text, max_words } => commands::freq::run(&cli, text, *max_words),
        Command::Suggest { mood, catalog } => commands::suggest::run(&cli, mood, catalog),
        Command::Moods(catalog) => commands::moods::run(&cli, catalog),
    }
}
