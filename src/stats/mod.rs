//! Aggregations over genre lists: category counts, characteristic
//! frequencies and the decade histogram used by the timeline.

use crate::catalog::{decade_label, decade_of, Genre, GenreCatalog, GenreCategory};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

pub const DEFAULT_TOP_CHARACTERISTICS: usize = 10;

pub fn aggregate_by_category<'a, I>(genres: I) -> BTreeMap<GenreCategory, usize>
where
    I: IntoIterator<Item = &'a Genre>,
{
    let mut counts = BTreeMap::new();
    for genre in genres {
        *counts.entry(genre.category).or_insert(0) += 1;
    }
    counts
}

/// Category counts restricted to the favorited genres. Unknown ids are ignored.
pub fn aggregate_favorite_categories<S: AsRef<str>>(
    catalog: &GenreCatalog,
    favorite_ids: &[S],
) -> BTreeMap<GenreCategory, usize> {
    aggregate_by_category(catalog.resolve(favorite_ids.iter().map(|id| id.as_ref())))
}

/// Most frequent characteristics, descending by count. Ties keep the order in
/// which the characteristic was first seen.
pub fn aggregate_characteristics<'a, I>(genres: I, top_n: usize) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = &'a Genre>,
{
    let mut first_seen: Vec<&str> = vec![];
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for characteristic in genres
        .into_iter()
        .flat_map(|genre| genre.characteristics.iter())
    {
        let count = counts.entry(characteristic.as_str()).or_insert_with(|| {
            first_seen.push(characteristic.as_str());
            0
        });
        *count += 1;
    }

    let mut sorted: Vec<(String, usize)> = first_seen
        .into_iter()
        .map(|c| (c.to_string(), counts[c]))
        .collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1));
    sorted.truncate(top_n);
    sorted
}

/// Decade histogram ("1960s" -> count), ascending by decade. Genres without a
/// plausible origin year are left out.
pub fn aggregate_by_decade<'a, I>(genres: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = &'a Genre>,
{
    let mut counts: BTreeMap<u16, usize> = BTreeMap::new();
    for year in genres.into_iter().filter_map(Genre::origin_year_value) {
        *counts.entry(decade_of(year)).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .map(|(decade, count)| (decade_label(decade), count))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecadeBucket<'a> {
    pub decade: u16,
    pub label: String,
    pub genres: Vec<&'a Genre>,
}

/// Timeline view: genres grouped by decade, ordered by origin year inside
/// each bucket.
pub fn genres_by_decade<'a, I>(genres: I) -> Vec<DecadeBucket<'a>>
where
    I: IntoIterator<Item = &'a Genre>,
{
    let mut dated: Vec<(u16, &Genre)> = genres
        .into_iter()
        .filter_map(|genre| genre.origin_year_value().map(|year| (year, genre)))
        .collect();
    dated.sort_by_key(|(year, _)| *year);

    let mut buckets: Vec<DecadeBucket> = vec![];
    for (year, genre) in dated {
        let decade = decade_of(year);
        match buckets.last_mut() {
            Some(bucket) if bucket.decade == decade => bucket.genres.push(genre),
            _ => buckets.push(DecadeBucket {
                decade,
                label: decade_label(decade),
                genres: vec![genre],
            }),
        }
    }
    buckets
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSummary {
    pub total_genres: usize,
    pub total_categories: usize,
    pub total_characteristics: usize,
    pub favorite_genres: usize,
    pub top_category: Option<GenreCategory>,
    pub top_favorite_category: Option<GenreCategory>,
}

/// Ties between categories go to the one declared first.
fn top_category(counts: &BTreeMap<GenreCategory, usize>) -> Option<GenreCategory> {
    counts
        .iter()
        .fold(None, |best: Option<(GenreCategory, usize)>, (&category, &count)| {
            match best {
                Some((_, best_count)) if best_count >= count => best,
                _ => Some((category, count)),
            }
        })
        .map(|(category, _)| category)
}

pub fn summarize<S: AsRef<str>>(catalog: &GenreCatalog, favorite_ids: &[S]) -> CatalogSummary {
    let category_counts = aggregate_by_category(catalog.genres());
    let favorite_counts = aggregate_favorite_categories(catalog, favorite_ids);
    CatalogSummary {
        total_genres: catalog.len(),
        total_categories: category_counts.len(),
        total_characteristics: catalog.characteristics().len(),
        favorite_genres: favorite_counts.values().sum(),
        top_category: top_category(&category_counts),
        top_favorite_category: top_category(&favorite_counts),
    }
}
