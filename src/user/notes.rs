use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Free text notes attached to genres.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GenreNotes(BTreeMap<String, String>);

impl GenreNotes {
    pub fn set(&mut self, genre_id: &str, note: &str) {
        self.0.insert(genre_id.to_string(), note.to_string());
    }

    /// The note of a genre, empty if there is none.
    pub fn get(&self, genre_id: &str) -> &str {
        self.0.get(genre_id).map(String::as_str).unwrap_or("")
    }

    pub fn delete(&mut self, genre_id: &str) -> bool {
        self.0.remove(genre_id).is_some()
    }

    /// An empty note counts as no note.
    pub fn has(&self, genre_id: &str) -> bool {
        !self.get(genre_id).is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .filter(|(_, note)| !note.is_empty())
            .map(|(id, note)| (id.as_str(), note.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notes_lifecycle() {
        let mut notes = GenreNotes::default();
        assert_eq!(notes.get("jazz"), "");
        assert!(!notes.has("jazz"));

        notes.set("jazz", "Listen to Kind of Blue");
        assert!(notes.has("jazz"));
        assert_eq!(notes.get("jazz"), "Listen to Kind of Blue");

        notes.set("jazz", "");
        assert!(!notes.has("jazz"));
        assert_eq!(notes.iter().count(), 0);

        notes.set("punk", "Fast");
        assert!(notes.delete("punk"));
        assert!(!notes.delete("punk"));
    }

    #[test]
    fn serializes_as_a_plain_map() {
        let mut notes = GenreNotes::default();
        notes.set("jazz", "cool");
        assert_eq!(serde_json::to_string(&notes).unwrap(), r#"{"jazz":"cool"}"#);
    }
}
