//! Free text search and advanced filtering over the catalog.

use super::{Genre, GenreCatalog, GenreCategory};
use std::collections::BTreeSet;

/// Case-insensitive substring search over name, description and characteristics.
/// An empty query matches every genre.
pub fn search<'a>(catalog: &'a GenreCatalog, query: &str) -> Vec<&'a Genre> {
    let query = query.trim().to_lowercase();
    catalog
        .genres()
        .iter()
        .filter(|genre| query.is_empty() || matches_query(genre, &query))
        .collect()
}

fn matches_query(genre: &Genre, lowercase_query: &str) -> bool {
    genre.name.to_lowercase().contains(lowercase_query)
        || genre.description.to_lowercase().contains(lowercase_query)
        || genre
            .characteristics
            .iter()
            .any(|c| c.to_lowercase().contains(lowercase_query))
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenreFilter {
    min_year: Option<u16>,
    max_year: Option<u16>,
    characteristics: BTreeSet<String>,
    categories: BTreeSet<GenreCategory>,
}

impl GenreFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the origin year bounds. An inverted range is ignored and leaves
    /// the current bounds untouched.
    pub fn set_year_range(&mut self, min_year: Option<u16>, max_year: Option<u16>) -> bool {
        if let (Some(min), Some(max)) = (min_year, max_year) {
            if min > max {
                return false;
            }
        }
        self.min_year = min_year;
        self.max_year = max_year;
        true
    }

    pub fn year_range(&self) -> (Option<u16>, Option<u16>) {
        (self.min_year, self.max_year)
    }

    /// Adds the characteristic if absent, removes it otherwise.
    pub fn toggle_characteristic(&mut self, characteristic: &str) {
        if !self.characteristics.remove(characteristic) {
            self.characteristics.insert(characteristic.to_string());
        }
    }

    pub fn toggle_category(&mut self, category: GenreCategory) {
        if !self.categories.remove(&category) {
            self.categories.insert(category);
        }
    }

    pub fn with_category(mut self, category: GenreCategory) -> Self {
        self.categories.insert(category);
        self
    }

    pub fn with_characteristic(mut self, characteristic: &str) -> Self {
        self.characteristics.insert(characteristic.to_string());
        self
    }

    pub fn with_year_range(mut self, min_year: Option<u16>, max_year: Option<u16>) -> Self {
        self.set_year_range(min_year, max_year);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.min_year.is_none()
            && self.max_year.is_none()
            && self.characteristics.is_empty()
            && self.categories.is_empty()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn matches(&self, genre: &Genre) -> bool {
        if self.min_year.is_some() || self.max_year.is_some() {
            let Some(year) = genre.origin_year_value() else {
                return false;
            };
            if self.min_year.is_some_and(|min| year < min) {
                return false;
            }
            if self.max_year.is_some_and(|max| year > max) {
                return false;
            }
        }

        if !self
            .characteristics
            .iter()
            .all(|c| genre.has_characteristic(c))
        {
            return false;
        }

        self.categories.is_empty() || self.categories.contains(&genre.category)
    }

    pub fn apply<'a, I>(&self, genres: I) -> Vec<&'a Genre>
    where
        I: IntoIterator<Item = &'a Genre>,
    {
        genres.into_iter().filter(|g| self.matches(g)).collect()
    }
}
