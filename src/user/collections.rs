use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_COLLECTION_COLOR: &str = "#666666";

/// A user curated group of genres.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalCollection {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub genre_ids: Vec<String>,
    /// Unix time in milliseconds.
    pub created_at: i64,
    pub color: String,
}

#[derive(Debug, Clone, Default)]
pub struct CollectionUpdate {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub color: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collections(Vec<PersonalCollection>);

impl Collections {
    pub fn create(
        &mut self,
        name: &str,
        description: Option<&str>,
        color: Option<&str>,
    ) -> &PersonalCollection {
        self.0.push(PersonalCollection {
            id: format!("collection-{}", Uuid::new_v4().simple()),
            name: name.to_string(),
            description: description.map(str::to_string),
            genre_ids: vec![],
            created_at: Utc::now().timestamp_millis(),
            color: color.unwrap_or(DEFAULT_COLLECTION_COLOR).to_string(),
        });
        &self.0[self.0.len() - 1]
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut PersonalCollection> {
        self.0.iter_mut().find(|c| c.id == id)
    }

    pub fn update(&mut self, id: &str, update: CollectionUpdate) -> bool {
        let Some(collection) = self.get_mut(id) else {
            return false;
        };
        if let Some(name) = update.name {
            collection.name = name;
        }
        if let Some(description) = update.description {
            collection.description = description;
        }
        if let Some(color) = update.color {
            collection.color = color;
        }
        true
    }

    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|c| c.id != id);
        self.0.len() != before
    }

    pub fn add_genre(&mut self, collection_id: &str, genre_id: &str) -> bool {
        match self.get_mut(collection_id) {
            Some(c) if !c.genre_ids.iter().any(|g| g == genre_id) => {
                c.genre_ids.push(genre_id.to_string());
                true
            }
            _ => false,
        }
    }

    pub fn remove_genre(&mut self, collection_id: &str, genre_id: &str) -> bool {
        let Some(collection) = self.get_mut(collection_id) else {
            return false;
        };
        let before = collection.genre_ids.len();
        collection.genre_ids.retain(|g| g != genre_id);
        collection.genre_ids.len() != before
    }

    pub fn get(&self, id: &str) -> Option<&PersonalCollection> {
        self.0.iter().find(|c| c.id == id)
    }

    pub fn all(&self) -> &[PersonalCollection] {
        &self.0
    }
}
