use serde::{Deserialize, Serialize};

pub const MAX_HISTORY_ITEMS: usize = 500;

/// Plays of the same track closer together than this are recorded once.
pub const REPLAY_WINDOW_MS: i64 = 60_000;

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListeningHistoryItem {
    pub track_id: String,
    pub track_name: String,
    #[serde(default)]
    pub artists: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre_name: Option<String>,
    /// Unix time in milliseconds.
    pub timestamp: i64,
    /// Seconds listened.
    #[serde(default)]
    pub duration: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenrePlayCount {
    pub genre_id: String,
    pub genre_name: String,
    pub count: usize,
}

/// Played tracks, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListeningHistory(Vec<ListeningHistoryItem>);

impl ListeningHistory {
    /// Records a play at `item.timestamp`. Earlier plays of the same track
    /// inside the replay window are replaced by this one.
    pub fn add(&mut self, item: ListeningHistoryItem) {
        let now = item.timestamp;
        self.0
            .retain(|i| !(i.track_id == item.track_id && now - i.timestamp < REPLAY_WINDOW_MS));
        self.0.insert(0, item);
        self.0.truncate(MAX_HISTORY_ITEMS);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn remove(&mut self, track_id: &str, timestamp: i64) -> bool {
        let before = self.0.len();
        self.0
            .retain(|i| !(i.track_id == track_id && i.timestamp == timestamp));
        self.0.len() != before
    }

    pub fn items(&self) -> &[ListeningHistoryItem] {
        &self.0
    }

    pub fn by_genre(&self, genre_id: &str) -> Vec<&ListeningHistoryItem> {
        self.0
            .iter()
            .filter(|i| i.genre_id.as_deref() == Some(genre_id))
            .collect()
    }

    pub fn within_days(&self, days: u32, now_ms: i64) -> Vec<&ListeningHistoryItem> {
        let cutoff = now_ms - i64::from(days) * DAY_MS;
        self.0.iter().filter(|i| i.timestamp >= cutoff).collect()
    }

    /// Total seconds listened.
    pub fn total_time(&self) -> u64 {
        self.0.iter().map(|i| i.duration).sum()
    }

    /// Genres by number of plays. Only plays carrying both a genre id and a
    /// genre name count; ties keep the order of the most recent play.
    pub fn most_listened_genres(&self, limit: usize) -> Vec<GenrePlayCount> {
        let mut counts: Vec<GenrePlayCount> = vec![];
        for item in &self.0 {
            let (Some(genre_id), Some(genre_name)) = (&item.genre_id, &item.genre_name) else {
                continue;
            };
            match counts.iter_mut().find(|c| &c.genre_id == genre_id) {
                Some(entry) => {
                    entry.count += 1;
                    entry.genre_name = genre_name.clone();
                }
                None => counts.push(GenrePlayCount {
                    genre_id: genre_id.clone(),
                    genre_name: genre_name.clone(),
                    count: 1,
                }),
            }
        }
        counts.sort_by(|a, b| b.count.cmp(&a.count));
        counts.truncate(limit);
        counts
    }
}
