//! Moods and the audio feature bounds they translate to.

use crate::spotify::{AudioFeatures, FeatureFilters, RecommendationRequest};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Study,
    Workout,
    Relax,
    Party,
    Focus,
    Sleep,
    Happy,
    Sad,
    Energetic,
    Calm,
}

impl Mood {
    pub const ALL: [Mood; 10] = [
        Mood::Study,
        Mood::Workout,
        Mood::Relax,
        Mood::Party,
        Mood::Focus,
        Mood::Sleep,
        Mood::Happy,
        Mood::Sad,
        Mood::Energetic,
        Mood::Calm,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Mood::Study => "Study",
            Mood::Workout => "Workout",
            Mood::Relax => "Relax",
            Mood::Party => "Party",
            Mood::Focus => "Focus",
            Mood::Sleep => "Sleep",
            Mood::Happy => "Happy",
            Mood::Sad => "Sad",
            Mood::Energetic => "Energetic",
            Mood::Calm => "Calm",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Mood::Study => "Music perfect for studying and concentration",
            Mood::Workout => "High-energy tracks for workouts and exercise",
            Mood::Relax => "Calming music to help you unwind",
            Mood::Party => "Danceable tracks perfect for parties",
            Mood::Focus => "Music to help you focus and be productive",
            Mood::Sleep => "Gentle, slow music for falling asleep",
            Mood::Happy => "Upbeat, positive music to lift your mood",
            Mood::Sad => "Emotional music for reflection",
            Mood::Energetic => "High-energy music to boost your energy",
            Mood::Calm => "Peaceful, tranquil music",
        }
    }

    /// The feature bounds associated with this mood. Fields left `None` are
    /// not constrained by the mood.
    pub fn filters(&self) -> FeatureFilters {
        match self {
            Mood::Study => FeatureFilters {
                min_energy: Some(0.0),
                max_energy: Some(0.5),
                min_valence: Some(0.3),
                max_valence: Some(0.7),
                ..Default::default()
            },
            Mood::Workout => FeatureFilters {
                min_energy: Some(0.7),
                max_energy: Some(1.0),
                min_danceability: Some(0.6),
                min_tempo: Some(120.0),
                target_energy: Some(0.9),
                ..Default::default()
            },
            Mood::Relax => FeatureFilters {
                min_energy: Some(0.0),
                max_energy: Some(0.4),
                min_valence: Some(0.3),
                max_valence: Some(0.8),
                target_energy: Some(0.2),
                ..Default::default()
            },
            Mood::Party => FeatureFilters {
                min_energy: Some(0.7),
                max_energy: Some(1.0),
                min_danceability: Some(0.7),
                min_tempo: Some(110.0),
                min_valence: Some(0.6),
                target_danceability: Some(0.85),
                ..Default::default()
            },
            Mood::Focus => FeatureFilters {
                min_energy: Some(0.2),
                max_energy: Some(0.6),
                min_valence: Some(0.4),
                max_valence: Some(0.7),
                ..Default::default()
            },
            Mood::Sleep => FeatureFilters {
                min_energy: Some(0.0),
                max_energy: Some(0.3),
                min_tempo: Some(40.0),
                max_tempo: Some(80.0),
                target_energy: Some(0.1),
                ..Default::default()
            },
            Mood::Happy => FeatureFilters {
                min_valence: Some(0.7),
                max_valence: Some(1.0),
                min_energy: Some(0.5),
                target_valence: Some(0.9),
                ..Default::default()
            },
            Mood::Sad => FeatureFilters {
                min_valence: Some(0.0),
                max_valence: Some(0.4),
                min_energy: Some(0.2),
                max_energy: Some(0.6),
                target_valence: Some(0.2),
                ..Default::default()
            },
            Mood::Energetic => FeatureFilters {
                min_energy: Some(0.7),
                max_energy: Some(1.0),
                min_tempo: Some(120.0),
                target_energy: Some(0.9),
                ..Default::default()
            },
            Mood::Calm => FeatureFilters {
                min_energy: Some(0.0),
                max_energy: Some(0.4),
                min_tempo: Some(60.0),
                max_tempo: Some(100.0),
                target_energy: Some(0.2),
                ..Default::default()
            },
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returns `base` with the mood's bounds written over the matching fields.
/// Fields the mood doesn't constrain keep the base value.
pub fn apply_mood_filter(mood: Mood, base: &RecommendationRequest) -> RecommendationRequest {
    RecommendationRequest {
        filters: base.filters.merged_with(&mood.filters()),
        ..base.clone()
    }
}

/// Guesses which moods a track fits from its audio features, without
/// duplicates. Never empty, `Calm` is returned when no rule matches.
pub fn moods_for_features(features: &AudioFeatures) -> Vec<Mood> {
    let mut moods = vec![];

    if features.energy < 0.3 && features.tempo < 80.0 {
        moods.extend([Mood::Sleep, Mood::Calm]);
    } else if features.energy > 0.7 && features.danceability > 0.7 {
        moods.extend([Mood::Party, Mood::Workout, Mood::Energetic]);
    } else if features.valence > 0.7 {
        moods.push(Mood::Happy);
    } else if features.valence < 0.4 {
        moods.push(Mood::Sad);
    }

    if features.instrumentalness > 0.7 && features.energy < 0.5 {
        moods.extend([Mood::Study, Mood::Focus]);
    }

    if features.energy < 0.4 && features.valence > 0.4 && features.valence < 0.7 {
        moods.extend([Mood::Relax, Mood::Calm]);
    }

    if moods.is_empty() {
        return vec![Mood::Calm];
    }
    let mut seen = HashSet::new();
    moods.retain(|mood| seen.insert(*mood));
    moods
}

#[cfg(test)]
mod tests {
    use super::*;

    fn features(energy: f64, tempo: f64, danceability: f64, valence: f64, instrumental: f64) -> AudioFeatures {
        AudioFeatures {
            id: "t".to_string(),
            tempo,
            energy,
            danceability,
            valence,
            acousticness: 0.5,
            instrumentalness: instrumental,
            liveness: 0.1,
            speechiness: 0.05,
            loudness: -8.0,
            key: 5,
            mode: 1,
            time_signature: 4,
            duration_ms: 200_000,
        }
    }

    #[test]
    fn sleep_mood_query() {
        let request = apply_mood_filter(Mood::Sleep, &RecommendationRequest::for_genre("ambient"));
        assert_eq!(
            request.query_params(),
            vec![
                ("seed_genres", "ambient".to_string()),
                ("min_energy", "0".to_string()),
                ("max_energy", "0.3".to_string()),
                ("min_tempo", "40".to_string()),
                ("max_tempo", "80".to_string()),
                ("target_energy", "0.1".to_string()),
            ]
        );
    }

    #[test]
    fn mood_overrides_base_and_keeps_unconstrained_fields() {
        let base = RecommendationRequest::for_genre("pop")
            .with_limit(10)
            .with_filters(FeatureFilters {
                min_energy: Some(0.1),
                target_tempo: Some(95.0),
                ..Default::default()
            });
        let request = apply_mood_filter(Mood::Workout, &base);
        assert_eq!(request.filters.min_energy, Some(0.7));
        assert_eq!(request.filters.target_tempo, Some(95.0));
        assert_eq!(request.filters.max_valence, None);
        assert_eq!(request.limit, Some(10));
        assert_eq!(request.seed_genres, vec!["pop".to_string()]);
    }

    #[test]
    fn every_mood_has_label_and_filters() {
        for mood in Mood::ALL {
            assert!(!mood.label().is_empty());
            assert!(!mood.description().is_empty());
            assert!(!mood.filters().is_empty());
        }
    }

    #[test]
    fn infers_moods_from_features() {
        assert_eq!(
            moods_for_features(&features(0.2, 70.0, 0.3, 0.5, 0.1)),
            vec![Mood::Sleep, Mood::Calm, Mood::Relax]
        );
        assert_eq!(
            moods_for_features(&features(0.9, 128.0, 0.8, 0.8, 0.0)),
            vec![Mood::Party, Mood::Workout, Mood::Energetic]
        );
        assert_eq!(
            moods_for_features(&features(0.6, 110.0, 0.5, 0.9, 0.0)),
            vec![Mood::Happy]
        );
        assert_eq!(
            moods_for_features(&features(0.45, 90.0, 0.4, 0.2, 0.8)),
            vec![Mood::Sad, Mood::Study, Mood::Focus]
        );
        assert_eq!(
            moods_for_features(&features(0.6, 110.0, 0.5, 0.5, 0.0)),
            vec![Mood::Calm]
        );
    }
}
