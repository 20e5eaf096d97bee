//! Output rendering for mood-lens.

mod format;
mod human;
mod json;
mod jsonl;

pub use format::OutputFormat;
pub use human::{render_frequencies_human, render_match_human, unrecognized_hint};
pub use json::{render_frequencies_json, render_match_json};
pub use jsonl::FrequencyWriter;
