//! Mood-keyed dish suggestions.
//!
//! A [`MoodCatalog`] maps a closed set of mood keywords to ordered dish
//! lists. Lookup is exact after trimming and lowercasing the query; an
//! unknown mood yields an empty list, never an error.

mod builtin;
mod catalog;
mod file;

pub use catalog::MoodCatalog;

use mood_core::MoodMatch;

/// Look `query` up in the built-in catalog.
pub fn lookup(query: &str) -> Vec<String> {
    MoodCatalog::builtin().lookup(query)
}

/// Look `query` up in the built-in catalog, keeping the normalized query.
pub fn match_mood(query: &str) -> MoodMatch {
    MoodCatalog::builtin().match_mood(query)
}
