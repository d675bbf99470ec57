use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Maximum number of search terms kept in the history.
pub const MAX_HISTORY_LENGTH: usize = 5;

/// Bounded, deduplicated search history, most recent first.
///
/// The list is persisted as a plain JSON string array, read once when the
/// history is created and rewritten on every mutation. Re-searching a term
/// that is already present moves it to the front instead of duplicating it.
pub struct SearchHistory {
    terms: Vec<String>,
    history_file: PathBuf,
}

impl SearchHistory {
    /// Open the history at its default location under the home directory.
    pub fn new() -> Result<Self> {
        let history_file = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".airport-search")
            .join("history.json");
        Self::with_file(history_file)
    }

    /// Open the history backed by a specific file.
    pub fn with_file(history_file: PathBuf) -> Result<Self> {
        let mut history = Self {
            terms: Vec::new(),
            history_file,
        };
        history.load_from_file()?;
        Ok(history)
    }

    /// Move `term` to the front, dropping any earlier occurrence (exact,
    /// case-sensitive match), truncate to the most recent
    /// [`MAX_HISTORY_LENGTH`] entries and persist the result.
    pub fn add(&mut self, term: &str) -> Result<()> {
        self.terms.retain(|existing| existing != term);
        self.terms.insert(0, term.to_string());
        self.terms.truncate(MAX_HISTORY_LENGTH);
        self.save_to_file()
    }

    /// Empty the in-memory list and remove the persisted copy.
    pub fn clear(&mut self) -> Result<()> {
        self.terms.clear();
        if self.history_file.exists() {
            fs::remove_file(&self.history_file)?;
        }
        Ok(())
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    fn load_from_file(&mut self) -> Result<()> {
        if !self.history_file.exists() {
            return Ok(());
        }

        let content = fs::read_to_string(&self.history_file)?;
        if content.trim().is_empty() {
            return Ok(());
        }

        let mut terms: Vec<String> = serde_json::from_str(&content)?;
        // A hand-edited file may exceed the cap; enforce it on load.
        terms.truncate(MAX_HISTORY_LENGTH);
        debug!(count = terms.len(), "loaded search history");
        self.terms = terms;
        Ok(())
    }

    fn save_to_file(&self) -> Result<()> {
        if let Some(parent) = self.history_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.terms)?;
        fs::write(&self.history_file, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn open(dir: &TempDir) -> SearchHistory {
        SearchHistory::with_file(dir.path().join("history.json")).unwrap()
    }

    #[test]
    fn readding_a_term_moves_it_to_front() {
        let dir = TempDir::new().unwrap();
        let mut history = open(&dir);

        history.add("Madrid").unwrap();
        history.add("Paris").unwrap();
        history.add("Madrid").unwrap();

        assert_eq!(history.terms(), ["Madrid", "Paris"]);
    }

    #[test]
    fn history_never_exceeds_cap() {
        let dir = TempDir::new().unwrap();
        let mut history = open(&dir);

        for term in ["A", "B", "C", "D", "E", "F"] {
            history.add(term).unwrap();
        }

        assert_eq!(history.len(), MAX_HISTORY_LENGTH);
        assert_eq!(history.terms(), ["F", "E", "D", "C", "B"]);
    }

    #[test]
    fn matching_is_case_sensitive() {
        let dir = TempDir::new().unwrap();
        let mut history = open(&dir);

        history.add("madrid").unwrap();
        history.add("Madrid").unwrap();

        assert_eq!(history.terms(), ["Madrid", "madrid"]);
    }
}
