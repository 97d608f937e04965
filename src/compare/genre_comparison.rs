use crate::catalog::Genre;
use serde::Serialize;

pub const MAX_COMPARED_GENRES: usize = 3;
pub const MIN_COMPARED_GENRES: usize = 2;

const UNKNOWN: &str = "Unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ComparisonField {
    Category,
    Origin,
    Characteristics,
    KeyArtists,
    Description,
}

impl ComparisonField {
    pub const ALL: [ComparisonField; 5] = [
        ComparisonField::Category,
        ComparisonField::Origin,
        ComparisonField::Characteristics,
        ComparisonField::KeyArtists,
        ComparisonField::Description,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ComparisonField::Category => "Category",
            ComparisonField::Origin => "Origin",
            ComparisonField::Characteristics => "Characteristics",
            ComparisonField::KeyArtists => "Key artists",
            ComparisonField::Description => "Description",
        }
    }

    fn value_of(&self, genre: &Genre) -> String {
        match self {
            ComparisonField::Category => genre.category.display_name().to_string(),
            ComparisonField::Origin => genre
                .origin_year
                .clone()
                .unwrap_or_else(|| UNKNOWN.to_string()),
            ComparisonField::Characteristics => genre.characteristics.join(", "),
            ComparisonField::KeyArtists if genre.key_artists.is_empty() => UNKNOWN.to_string(),
            ComparisonField::KeyArtists => genre.key_artists.join(", "),
            ComparisonField::Description => genre.description.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonRow {
    pub field: ComparisonField,
    /// One value per compared genre, in selection order.
    pub values: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonTable {
    /// Column headers: the names of the compared genres.
    pub genres: Vec<String>,
    pub rows: Vec<ComparisonRow>,
}

/// Up to three genres picked for a side by side comparison.
#[derive(Debug, Clone, Default)]
pub struct GenreComparison {
    selected: Vec<Genre>,
}

impl GenreComparison {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a genre to the comparison. Returns `false`, leaving the selection
    /// untouched, if it's already selected or the selection is full.
    pub fn select(&mut self, genre: &Genre) -> bool {
        if self.selected.len() >= MAX_COMPARED_GENRES || self.contains(&genre.id) {
            return false;
        }
        self.selected.push(genre.clone());
        true
    }

    pub fn remove(&mut self, genre_id: &str) -> bool {
        let before = self.selected.len();
        self.selected.retain(|g| g.id != genre_id);
        self.selected.len() != before
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn contains(&self, genre_id: &str) -> bool {
        self.selected.iter().any(|g| g.id == genre_id)
    }

    pub fn selected(&self) -> &[Genre] {
        &self.selected
    }

    pub fn is_full(&self) -> bool {
        self.selected.len() >= MAX_COMPARED_GENRES
    }

    /// The comparison table, available once at least two genres are selected.
    pub fn table(&self) -> Option<ComparisonTable> {
        if self.selected.len() < MIN_COMPARED_GENRES {
            return None;
        }

        let rows = ComparisonField::ALL
            .into_iter()
            .map(|field| ComparisonRow {
                field,
                values: self.selected.iter().map(|g| field.value_of(g)).collect(),
            })
            .collect();

        Some(ComparisonTable {
            genres: self.selected.iter().map(|g| g.name.clone()).collect(),
            rows,
        })
    }
}
