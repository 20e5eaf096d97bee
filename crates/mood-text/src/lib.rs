//! Text cleaning for word-frequency analysis.
//!
//! Raw column text goes in, a space-joined sequence of lowercase alphabetic
//! tokens with English stopwords removed comes out. [`WordFrequencies`] turns
//! that cleaned text into the weighted table a word-cloud renderer consumes.

mod column;
mod frequency;
mod normalizer;
mod stopwords;

pub use column::join_column;
pub use frequency::{DEFAULT_MAX_WORDS, WordFrequencies};
pub use normalizer::{Normalizer, normalize, tokenize};
pub use stopwords::ENGLISH_STOPWORDS;
