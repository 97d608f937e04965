use crate::catalog::{Genre, GenreCatalog};
use chrono::{Datelike, NaiveDate};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use std::collections::HashSet;

pub const DEFAULT_DISCOVERY_COUNT: usize = 6;

/// Seed shared by every discovery made on the same calendar day.
pub fn daily_seed(date: NaiveDate) -> u64 {
    date.num_days_from_ce() as u64
}

/// Picks `count` genres that aren't favorites. The same seed always yields
/// the same picks for the same catalog and favorites.
pub fn discover<'a, S: AsRef<str>>(
    catalog: &'a GenreCatalog,
    favorite_ids: &[S],
    seed: u64,
    count: usize,
) -> Vec<&'a Genre> {
    let favorites: HashSet<&str> = favorite_ids.iter().map(|id| id.as_ref()).collect();
    let candidates: Vec<&Genre> = catalog
        .genres()
        .iter()
        .filter(|genre| !favorites.contains(genre.id.as_str()))
        .collect();

    let mut rng = StdRng::seed_from_u64(seed);
    candidates
        .choose_multiple(&mut rng, count.min(candidates.len()))
        .copied()
        .collect()
}

/// Daily discovery state: the day it was made for and how many times the
/// user asked for a different set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyDiscovery {
    date: NaiveDate,
    round: u64,
}

impl DailyDiscovery {
    pub fn for_date(date: NaiveDate) -> Self {
        Self { date, round: 0 }
    }

    pub fn today() -> Self {
        Self::for_date(chrono::Local::now().date_naive())
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn round(&self) -> u64 {
        self.round
    }

    pub fn seed(&self) -> u64 {
        daily_seed(self.date).wrapping_add(self.round)
    }

    pub fn reshuffle(&mut self) {
        self.round += 1;
    }

    pub fn picks<'a, S: AsRef<str>>(
        &self,
        catalog: &'a GenreCatalog,
        favorite_ids: &[S],
        count: usize,
    ) -> Vec<&'a Genre> {
        discover(catalog, favorite_ids, self.seed(), count)
    }
}
