use serde::{Deserialize, Serialize};

/// Optional bounds and targets on audio features, sent as query parameters
/// of a recommendations request. Absent fields are omitted from the query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_energy: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_energy: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_danceability: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_danceability: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_tempo: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tempo: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_valence: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_valence: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_energy: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_danceability: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_tempo: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_valence: Option<f64>,
}

impl FeatureFilters {
    fn fields(&self) -> [(&'static str, Option<f64>); 12] {
        [
            ("min_energy", self.min_energy),
            ("max_energy", self.max_energy),
            ("min_danceability", self.min_danceability),
            ("max_danceability", self.max_danceability),
            ("min_tempo", self.min_tempo),
            ("max_tempo", self.max_tempo),
            ("min_valence", self.min_valence),
            ("max_valence", self.max_valence),
            ("target_energy", self.target_energy),
            ("target_danceability", self.target_danceability),
            ("target_tempo", self.target_tempo),
            ("target_valence", self.target_valence),
        ]
    }

    pub fn is_empty(&self) -> bool {
        self.fields().iter().all(|(_, value)| value.is_none())
    }

    /// Query parameters for the fields that are set, in a fixed order.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        self.fields()
            .into_iter()
            .filter_map(|(name, value)| value.map(|v| (name, v.to_string())))
            .collect()
    }

    /// Returns a copy of `self` where every field set in `overrides` replaces
    /// the current value. Fields absent from `overrides` are left as they are.
    pub fn merged_with(&self, overrides: &FeatureFilters) -> FeatureFilters {
        FeatureFilters {
            min_energy: overrides.min_energy.or(self.min_energy),
            max_energy: overrides.max_energy.or(self.max_energy),
            min_danceability: overrides.min_danceability.or(self.min_danceability),
            max_danceability: overrides.max_danceability.or(self.max_danceability),
            min_tempo: overrides.min_tempo.or(self.min_tempo),
            max_tempo: overrides.max_tempo.or(self.max_tempo),
            min_valence: overrides.min_valence.or(self.min_valence),
            max_valence: overrides.max_valence.or(self.max_valence),
            target_energy: overrides.target_energy.or(self.target_energy),
            target_danceability: overrides.target_danceability.or(self.target_danceability),
            target_tempo: overrides.target_tempo.or(self.target_tempo),
            target_valence: overrides.target_valence.or(self.target_valence),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRequest {
    pub seed_genres: Vec<String>,
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub filters: FeatureFilters,
}

impl RecommendationRequest {
    pub fn for_genre(seed_genre: impl Into<String>) -> Self {
        Self {
            seed_genres: vec![seed_genre.into()],
            ..Default::default()
        }
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_filters(mut self, filters: FeatureFilters) -> Self {
        self.filters = filters;
        self
    }

    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("seed_genres", self.seed_genres.join(","))];
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }
        params.extend(self.filters.query_params());
        params
    }
}
