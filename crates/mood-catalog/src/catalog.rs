use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

use mood_core::{MoodLensError, MoodMatch};

use crate::builtin::BUILTIN_MOODS;
use crate::file::CatalogEntries;

static BUILTIN: LazyLock<MoodCatalog> = LazyLock::new(|| {
    let entries = BUILTIN_MOODS.iter().map(|(mood, dishes)| {
        (
            mood.to_string(),
            dishes.iter().map(|d| d.to_string()).collect::<Vec<_>>(),
        )
    });
    MoodCatalog::from_parts(entries.collect())
});

/// Immutable mapping from mood keys to ordered dish lists.
#[derive(Debug, Clone)]
pub struct MoodCatalog {
    entries: Vec<(String, Vec<String>)>,
    index: HashMap<String, usize>,
}

impl MoodCatalog {
    /// The catalog shipped with mood-lens, built once per process.
    pub fn builtin() -> &'static MoodCatalog {
        &BUILTIN
    }

    /// Build a catalog from `(mood, dishes)` pairs.
    ///
    /// Mood keys are trimmed and lowercased. Fails on an empty catalog, an
    /// empty key, a key repeated after normalization, or a mood without dishes.
    pub fn from_entries<I, K, D>(entries: I) -> Result<Self, MoodLensError>
    where
        I: IntoIterator<Item = (K, D)>,
        K: AsRef<str>,
        D: IntoIterator,
        D::Item: Into<String>,
    {
        let mut normalized: Vec<(String, Vec<String>)> = Vec::new();

        for (mood, dishes) in entries {
            let key = normalize_key(mood.as_ref());
            if key.is_empty() {
                return Err(MoodLensError::Catalog("mood name is empty".to_string()));
            }
            if normalized.iter().any(|(k, _)| *k == key) {
                return Err(MoodLensError::Catalog(format!("duplicate mood '{key}'")));
            }
            let dishes: Vec<String> = dishes.into_iter().map(Into::into).collect();
            if dishes.is_empty() {
                return Err(MoodLensError::Catalog(format!("mood '{key}' has no dishes")));
            }
            normalized.push((key, dishes));
        }

        if normalized.is_empty() {
            return Err(MoodLensError::Catalog("catalog has no moods".to_string()));
        }

        Ok(Self::from_parts(normalized))
    }

    /// Parse a catalog from a JSON object of `"mood": ["dish", ...]`.
    pub fn from_json(json: &str) -> Result<Self, MoodLensError> {
        let CatalogEntries(entries) = serde_json::from_str::<CatalogEntries>(json)?;
        Self::from_entries(entries)
    }

    /// Read and parse a catalog JSON file.
    pub fn from_path(path: &Path) -> Result<Self, MoodLensError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| MoodLensError::Io(format!("{}: {e}", path.display())))?;
        let catalog = Self::from_json(&json).map_err(|e| match e {
            MoodLensError::Parse(msg) => MoodLensError::Parse(format!("{}: {msg}", path.display())),
            MoodLensError::Catalog(msg) => {
                MoodLensError::Catalog(format!("{}: {msg}", path.display()))
            }
            other => other,
        })?;

        tracing::debug!(
            path = %path.display(),
            moods = catalog.len(),
            "loaded mood catalog"
        );
        Ok(catalog)
    }

    fn from_parts(entries: Vec<(String, Vec<String>)>) -> Self {
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, (mood, _))| (mood.clone(), i))
            .collect();
        Self { entries, index }
    }

    /// Dishes for `query`, or an empty list if the mood is unknown.
    ///
    /// The query is trimmed and lowercased, then matched exactly. The result
    /// is a fresh copy; the catalog itself never changes.
    pub fn lookup(&self, query: &str) -> Vec<String> {
        self.get(&normalize_key(query))
            .map(<[String]>::to_vec)
            .unwrap_or_default()
    }

    /// Like [`lookup`](Self::lookup), but also reports the normalized query.
    pub fn match_mood(&self, query: &str) -> MoodMatch {
        let key = normalize_key(query);
        let dishes = self.get(&key).map(<[String]>::to_vec).unwrap_or_default();
        tracing::debug!(query = %key, found = !dishes.is_empty(), "mood lookup");
        MoodMatch::new(&key, dishes)
    }

    fn get(&self, key: &str) -> Option<&[String]> {
        self.index.get(key).map(|&i| self.entries[i].1.as_slice())
    }

    pub fn contains(&self, query: &str) -> bool {
        self.index.contains_key(&normalize_key(query))
    }

    /// Mood keys in declaration order.
    pub fn moods(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(mood, _)| mood.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn normalize_key(query: &str) -> String {
    query.trim().to_lowercase()
}
