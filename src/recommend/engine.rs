use crate::catalog::{Genre, GenreCatalog};
use rand::seq::IndexedRandom;
use rand::Rng;
use std::collections::HashSet;
use tracing::debug;

pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 12;

/// Maximum number of characteristic-based matches merged into the result.
const MAX_SCORED_MATCHES: usize = 10;

/// Maximum number of genres returned when nothing else matched.
const MAX_FALLBACK: usize = 6;

/// Recommends genres for a set of favorite genre ids.
///
/// With no favorites a random sample of the catalog is returned. Otherwise
/// genres related to the favorites come first, followed by genres sharing
/// characteristics with them, best matches first. Favorites are never
/// recommended and unknown favorite ids are ignored.
pub fn recommend<'a, S, R>(
    favorite_ids: &[S],
    catalog: &'a GenreCatalog,
    limit: usize,
    rng: &mut R,
) -> Vec<&'a Genre>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    if favorite_ids.is_empty() {
        let count = limit.min(catalog.len());
        return catalog
            .genres()
            .choose_multiple(rng, count)
            .collect();
    }

    let favorites: HashSet<&str> = favorite_ids.iter().map(|id| id.as_ref()).collect();
    let favorite_genres = catalog.resolve(favorite_ids.iter().map(|id| id.as_ref()));

    let adjacent = adjacent_genres(catalog, &favorite_genres, &favorites);
    let scored = scored_genres(catalog, &favorite_genres, &favorites);
    debug!(
        favorites = favorites.len(),
        adjacent = adjacent.len(),
        scored = scored.len(),
        "Computed recommendation candidates"
    );

    let mut seen = HashSet::new();
    let mut recommendations: Vec<&Genre> = adjacent
        .into_iter()
        .chain(scored)
        .filter(|genre| seen.insert(genre.id.as_str()))
        .take(limit)
        .collect();

    if recommendations.is_empty() {
        recommendations = catalog
            .genres()
            .iter()
            .filter(|genre| !favorites.contains(genre.id.as_str()))
            .take(limit.min(MAX_FALLBACK))
            .collect();
    }

    recommendations
}

/// Genres reachable through a related-genre edge of any favorite, in catalog order.
fn adjacent_genres<'a>(
    catalog: &'a GenreCatalog,
    favorite_genres: &[&Genre],
    favorites: &HashSet<&str>,
) -> Vec<&'a Genre> {
    let related_ids: HashSet<&str> = favorite_genres
        .iter()
        .flat_map(|genre| genre.related_genres.iter().map(String::as_str))
        .filter(|id| !favorites.contains(id))
        .collect();

    catalog
        .genres()
        .iter()
        .filter(|genre| related_ids.contains(genre.id.as_str()))
        .collect()
}

fn scored_genres<'a>(
    catalog: &'a GenreCatalog,
    favorite_genres: &[&Genre],
    favorites: &HashSet<&str>,
) -> Vec<&'a Genre> {
    let favorite_characteristics: HashSet<&str> = favorite_genres
        .iter()
        .flat_map(|genre| genre.characteristics.iter().map(String::as_str))
        .collect();

    let mut scored: Vec<(&Genre, usize)> = catalog
        .genres()
        .iter()
        .filter(|genre| !favorites.contains(genre.id.as_str()))
        .map(|genre| {
            let score = genre
                .characteristics
                .iter()
                .filter(|c| favorite_characteristics.contains(c.as_str()))
                .count();
            (genre, score)
        })
        .filter(|(_, score)| *score > 0)
        .collect();

    // stable, ties keep catalog order
    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored
        .into_iter()
        .take(MAX_SCORED_MATCHES)
        .map(|(genre, _)| genre)
        .collect()
}
