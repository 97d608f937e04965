use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// User defined tags attached to genres.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GenreTags(BTreeMap<String, Vec<String>>);

impl GenreTags {
    /// Adds a trimmed tag to a genre. Blank tags and tags the genre already
    /// has are ignored.
    pub fn add(&mut self, genre_id: &str, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() {
            return false;
        }
        let tags = self.0.entry(genre_id.to_string()).or_default();
        if tags.iter().any(|t| t == tag) {
            return false;
        }
        tags.push(tag.to_string());
        true
    }

    pub fn remove(&mut self, genre_id: &str, tag: &str) -> bool {
        let Some(tags) = self.0.get_mut(genre_id) else {
            return false;
        };
        let before = tags.len();
        tags.retain(|t| t != tag);
        let removed = tags.len() != before;
        if tags.is_empty() {
            self.0.remove(genre_id);
        }
        removed
    }

    pub fn get(&self, genre_id: &str) -> &[String] {
        self.0.get(genre_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every tag in use, sorted and without duplicates.
    pub fn all(&self) -> Vec<&str> {
        self.0
            .values()
            .flatten()
            .map(String::as_str)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Genres carrying `tag`, in id order.
    pub fn genres_with(&self, tag: &str) -> Vec<&str> {
        self.0
            .iter()
            .filter(|(_, tags)| tags.iter().any(|t| t == tag))
            .map(|(id, _)| id.as_str())
            .collect()
    }
}
