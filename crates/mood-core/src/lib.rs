//! mood-lens core result types and errors.

mod error;
mod types;

pub use error::MoodLensError;
pub use types::{MoodMatch, WordCount};
