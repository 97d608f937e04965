use serde::{Deserialize, Serialize};

pub const MAX_RECENT_SEARCHES: usize = 10;

/// Recent search queries, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchHistory(Vec<String>);

impl SearchHistory {
    /// Blank queries are ignored. A query already present, compared without
    /// case, moves to the front with its new spelling.
    pub fn add(&mut self, query: &str) -> bool {
        let query = query.trim();
        if query.is_empty() {
            return false;
        }
        let lowered = query.to_lowercase();
        self.0.retain(|q| q.to_lowercase() != lowered);
        self.0.insert(0, query.to_string());
        self.0.truncate(MAX_RECENT_SEARCHES);
        true
    }

    pub fn remove(&mut self, query: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|q| q != query);
        self.0.len() != before
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn queries(&self) -> &[String] {
        &self.0
    }
}
