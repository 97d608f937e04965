//! Side by side comparison of the audio features of several tracks.

use crate::spotify::{AudioFeatures, Track};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioFeature {
    Energy,
    Danceability,
    Valence,
    Acousticness,
    Instrumentalness,
    Tempo,
}

impl AudioFeature {
    /// Features shown in a track comparison, in display order.
    pub const COMPARED: [AudioFeature; 5] = [
        AudioFeature::Energy,
        AudioFeature::Danceability,
        AudioFeature::Valence,
        AudioFeature::Acousticness,
        AudioFeature::Instrumentalness,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AudioFeature::Energy => "Energy",
            AudioFeature::Danceability => "Danceability",
            AudioFeature::Valence => "Valence",
            AudioFeature::Acousticness => "Acousticness",
            AudioFeature::Instrumentalness => "Instrumentalness",
            AudioFeature::Tempo => "Tempo",
        }
    }

    pub fn value(&self, features: &AudioFeatures) -> f64 {
        match self {
            AudioFeature::Energy => features.energy,
            AudioFeature::Danceability => features.danceability,
            AudioFeature::Valence => features.valence,
            AudioFeature::Acousticness => features.acousticness,
            AudioFeature::Instrumentalness => features.instrumentalness,
            AudioFeature::Tempo => features.tempo,
        }
    }

    pub fn format(&self, value: f64) -> String {
        match self {
            AudioFeature::Tempo => format_bpm(value),
            _ => format_percentage(value),
        }
    }
}

pub fn format_percentage(value: f64) -> String {
    format!("{:.0}%", value * 100.0)
}

pub fn format_bpm(value: f64) -> String {
    format!("{} BPM", value.round() as i64)
}

pub fn format_db(value: f64) -> String {
    format!("{:.1} dB", value)
}

/// A track and its audio features, if the provider has any.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparedTrack {
    pub track: Track,
    pub features: Option<AudioFeatures>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureBar {
    pub track_id: String,
    pub value: f64,
    /// Bar length relative to the largest value, from 0 to 100.
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureSummary {
    pub feature: AudioFeature,
    pub min: f64,
    pub max: f64,
    pub avg: f64,
    /// One bar per track that has features, in track order.
    pub bars: Vec<FeatureBar>,
}

/// Min, max, average and bars of one feature. Tracks without features are
/// left out of every figure. `None` when no track has features.
pub fn summarize_feature(tracks: &[ComparedTrack], feature: AudioFeature) -> Option<FeatureSummary> {
    let values: Vec<(&str, f64)> = tracks
        .iter()
        .filter_map(|t| {
            t.features
                .as_ref()
                .map(|f| (t.track.id.as_str(), feature.value(f)))
        })
        .collect();

    if values.is_empty() {
        return None;
    }

    let min = values.iter().map(|(_, v)| *v).fold(f64::INFINITY, f64::min);
    let max = values.iter().map(|(_, v)| *v).fold(f64::NEG_INFINITY, f64::max);
    let avg = values.iter().map(|(_, v)| *v).sum::<f64>() / values.len() as f64;

    let bars = values
        .iter()
        .map(|(track_id, value)| FeatureBar {
            track_id: track_id.to_string(),
            value: *value,
            width: if max > 0.0 { value / max * 100.0 } else { 0.0 },
        })
        .collect();

    Some(FeatureSummary {
        feature,
        min,
        max,
        avg,
        bars,
    })
}

/// Summaries of every compared feature. Empty when no track has features.
pub fn compare_tracks(tracks: &[ComparedTrack]) -> Vec<FeatureSummary> {
    AudioFeature::COMPARED
        .into_iter()
        .filter_map(|feature| summarize_feature(tracks, feature))
        .collect()
}

/// Pairs tracks with the result of a feature lookup made in the same order.
pub fn attach_features(
    tracks: Vec<Track>,
    features: Vec<Option<AudioFeatures>>,
) -> Vec<ComparedTrack> {
    tracks
        .into_iter()
        .zip(features.into_iter().chain(std::iter::repeat(None)))
        .map(|(track, features)| ComparedTrack { track, features })
        .collect()
}

/// Tracks picked for comparison, without duplicates.
#[derive(Debug, Clone, Default)]
pub struct TrackComparison {
    tracks: Vec<ComparedTrack>,
}

impl TrackComparison {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, track: ComparedTrack) -> bool {
        if self.tracks.iter().any(|t| t.track.id == track.track.id) {
            return false;
        }
        self.tracks.push(track);
        true
    }

    pub fn remove(&mut self, track_id: &str) -> bool {
        let before = self.tracks.len();
        self.tracks.retain(|t| t.track.id != track_id);
        self.tracks.len() != before
    }

    pub fn clear(&mut self) {
        self.tracks.clear();
    }

    pub fn tracks(&self) -> &[ComparedTrack] {
        &self.tracks
    }

    pub fn has_features(&self) -> bool {
        self.tracks.iter().any(|t| t.features.is_some())
    }

    pub fn summaries(&self) -> Vec<FeatureSummary> {
        compare_tracks(&self.tracks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spotify::models::ExternalUrls;

    fn track(id: &str) -> Track {
        Track {
            id: id.to_string(),
            name: format!("Track {}", id),
            artists: vec![],
            album: None,
            preview_url: None,
            external_urls: ExternalUrls::default(),
            duration_ms: 180_000,
        }
    }

    fn features(id: &str, energy: f64, tempo: f64) -> AudioFeatures {
        AudioFeatures {
            id: id.to_string(),
            tempo,
            energy,
            danceability: 0.5,
            valence: 0.0,
            acousticness: 0.25,
            instrumentalness: 0.0,
            liveness: 0.1,
            speechiness: 0.1,
            loudness: -6.5,
            key: 0,
            mode: 1,
            time_signature: 4,
            duration_ms: 180_000,
        }
    }

    #[test]
    fn excludes_tracks_without_features() {
        let tracks = attach_features(
            vec![track("a"), track("b"), track("c")],
            vec![Some(features("a", 0.8, 120.0)), None, Some(features("c", 0.4, 90.0))],
        );
        let energy = summarize_feature(&tracks, AudioFeature::Energy).unwrap();
        assert_eq!(energy.min, 0.4);
        assert_eq!(energy.max, 0.8);
        assert!((energy.avg - 0.6).abs() < 1e-9);
        assert_eq!(energy.bars.len(), 2);
        assert_eq!(energy.bars[0].track_id, "a");
        assert_eq!(energy.bars[0].width, 100.0);
        assert_eq!(energy.bars[1].width, 50.0);

        let tempo = summarize_feature(&tracks, AudioFeature::Tempo).unwrap();
        assert_eq!(tempo.max, 120.0);
    }

    #[test]
    fn zero_max_gives_empty_bars() {
        let tracks = attach_features(
            vec![track("a"), track("b")],
            vec![Some(features("a", 0.1, 100.0)), Some(features("b", 0.2, 100.0))],
        );
        let valence = summarize_feature(&tracks, AudioFeature::Valence).unwrap();
        assert!(valence.bars.iter().all(|bar| bar.width == 0.0));
        assert_eq!(valence.avg, 0.0);
    }

    #[test]
    fn no_features_no_summaries() {
        let tracks = attach_features(vec![track("a"), track("b")], vec![None]);
        assert_eq!(tracks.len(), 2);
        assert!(tracks.iter().all(|t| t.features.is_none()));
        assert!(compare_tracks(&tracks).is_empty());
        assert!(compare_tracks(&[]).is_empty());
    }

    #[test]
    fn compares_the_five_display_features() {
        let tracks = attach_features(vec![track("a")], vec![Some(features("a", 0.5, 100.0))]);
        let features: Vec<AudioFeature> = compare_tracks(&tracks).iter().map(|s| s.feature).collect();
        assert_eq!(features, AudioFeature::COMPARED.to_vec());
    }

    #[test]
    fn selection_rejects_duplicates() {
        let mut comparison = TrackComparison::new();
        assert!(comparison.add(ComparedTrack { track: track("a"), features: None }));
        assert!(!comparison.add(ComparedTrack { track: track("a"), features: None }));
        assert!(!comparison.has_features());
        assert!(comparison.remove("a"));
        assert!(comparison.tracks().is_empty());
    }

    #[test]
    fn formats_values() {
        assert_eq!(format_percentage(0.42), "42%");
        assert_eq!(format_bpm(127.6), "128 BPM");
        assert_eq!(format_db(-5.24), "-5.2 dB");
        assert_eq!(AudioFeature::Tempo.format(90.0), "90 BPM");
        assert_eq!(AudioFeature::Energy.format(1.0), "100%");
    }
}
