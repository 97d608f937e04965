mod genre_comparison;
mod track_comparison;

pub use genre_comparison::{
    ComparisonField, ComparisonRow, ComparisonTable, GenreComparison, MAX_COMPARED_GENRES,
    MIN_COMPARED_GENRES,
};
pub use track_comparison::{
    attach_features, compare_tracks, format_bpm, format_db, format_percentage, summarize_feature,
    AudioFeature, ComparedTrack, FeatureBar, FeatureSummary, TrackComparison,
};
