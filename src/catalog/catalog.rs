use super::{builtin::builtin_genres, Genre, GenreCategory};
use std::collections::{HashMap, HashSet};
use tracing::warn;

/// Non-fatal issues found while indexing a list of genres.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Problem {
    /// A second genre used an id already taken; the later one is dropped.
    DuplicateId(String),
    /// A related-genre edge points at an id that isn't in the catalog.
    DanglingRelation { genre_id: String, related_id: String },
}

/// Immutable, indexed list of genres.
///
/// Genres are kept in their original order, edges between them are plain
/// ids resolved through `index`.
#[derive(Debug, Clone)]
pub struct GenreCatalog {
    genres: Vec<Genre>,
    index: HashMap<String, usize>,
    problems: Vec<Problem>,
}

impl GenreCatalog {
    pub fn new(genres: Vec<Genre>) -> Self {
        let mut problems = vec![];
        let mut index = HashMap::with_capacity(genres.len());
        let mut kept = Vec::with_capacity(genres.len());

        for genre in genres {
            if index.contains_key(&genre.id) {
                warn!(genre_id = %genre.id, "Dropping genre with duplicate id");
                problems.push(Problem::DuplicateId(genre.id));
                continue;
            }
            index.insert(genre.id.clone(), kept.len());
            kept.push(genre);
        }

        for genre in kept.iter() {
            for related_id in genre.related_genres.iter() {
                if !index.contains_key(related_id) {
                    problems.push(Problem::DanglingRelation {
                        genre_id: genre.id.clone(),
                        related_id: related_id.clone(),
                    });
                }
            }
        }

        GenreCatalog {
            genres: kept,
            index,
            problems,
        }
    }

    pub fn builtin() -> Self {
        Self::new(builtin_genres())
    }

    pub fn genres(&self) -> &[Genre] {
        &self.genres
    }

    pub fn len(&self) -> usize {
        self.genres.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genres.is_empty()
    }

    pub fn problems(&self) -> &[Problem] {
        &self.problems
    }

    pub fn get(&self, id: &str) -> Option<&Genre> {
        self.index.get(id).map(|&i| &self.genres[i])
    }

    /// Position of the genre in catalog order.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn by_category(&self, category: GenreCategory) -> Vec<&Genre> {
        self.genres
            .iter()
            .filter(|g| g.category == category)
            .collect()
    }

    /// Resolves the related-genre edges of `id`, skipping ids not in the catalog.
    pub fn related(&self, id: &str) -> Vec<&Genre> {
        match self.get(id) {
            None => vec![],
            Some(genre) => genre
                .related_genres
                .iter()
                .filter_map(|related_id| self.get(related_id))
                .collect(),
        }
    }

    /// Resolves a list of ids, keeping the given order and skipping unknown ids.
    pub fn resolve<'a, I, S>(&self, ids: I) -> Vec<&Genre>
    where
        I: IntoIterator<Item = &'a S>,
        S: AsRef<str> + 'a + ?Sized,
    {
        ids.into_iter()
            .filter_map(|id| self.get(id.as_ref()))
            .collect()
    }

    /// Categories that have at least one genre, in declaration order.
    pub fn categories(&self) -> Vec<GenreCategory> {
        let present: HashSet<GenreCategory> = self.genres.iter().map(|g| g.category).collect();
        GenreCategory::ALL
            .into_iter()
            .filter(|c| present.contains(c))
            .collect()
    }

    /// All distinct characteristics, sorted alphabetically.
    pub fn characteristics(&self) -> Vec<&str> {
        let mut all: Vec<&str> = self
            .genres
            .iter()
            .flat_map(|g| g.characteristics.iter().map(String::as_str))
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        all.sort_unstable();
        all
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::testing::genre;

    #[test]
    fn indexes_and_resolves_relations() {
        let catalog = GenreCatalog::new(vec![
            genre("a", GenreCategory::Rock, &["x"], &["b", "missing"]),
            genre("b", GenreCategory::Jazz, &["y"], &["a"]),
        ]);

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("b").unwrap().category, GenreCategory::Jazz);
        assert_eq!(catalog.position("b"), Some(1));
        let related: Vec<&str> = catalog.related("a").iter().map(|g| g.id.as_str()).collect();
        assert_eq!(related, vec!["b"]);
        assert!(catalog.related("nope").is_empty());
        assert_eq!(
            catalog.problems(),
            &[Problem::DanglingRelation {
                genre_id: "a".to_string(),
                related_id: "missing".to_string()
            }]
        );
    }

    #[test]
    fn drops_duplicate_ids() {
        let catalog = GenreCatalog::new(vec![
            genre("a", GenreCategory::Rock, &[], &[]),
            genre("a", GenreCategory::Pop, &[], &[]),
        ]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("a").unwrap().category, GenreCategory::Rock);
        assert_eq!(catalog.problems(), &[Problem::DuplicateId("a".to_string())]);
    }

    #[test]
    fn lists_categories_and_characteristics() {
        let catalog = GenreCatalog::new(vec![
            genre("a", GenreCategory::Pop, &["b-tag", "a-tag"], &[]),
            genre("b", GenreCategory::Rock, &["a-tag"], &[]),
        ]);
        assert_eq!(
            catalog.categories(),
            vec![GenreCategory::Rock, GenreCategory::Pop]
        );
        assert_eq!(catalog.characteristics(), vec!["a-tag", "b-tag"]);
        assert_eq!(catalog.by_category(GenreCategory::Pop).len(), 1);
    }

    #[test]
    fn builtin_catalog_loads() {
        let catalog = GenreCatalog::builtin();
        assert!(!catalog.is_empty());
        assert!(catalog.get("classic-rock").is_some());
        assert!(catalog
            .problems()
            .iter()
            .all(|p| matches!(p, Problem::DanglingRelation { .. })));
    }
}
