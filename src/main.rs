use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, level_filters::LevelFilter, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use genre_explorer::catalog::{load_catalog, search, Genre, GenreCatalog, GenreCategory, GenreFilter};
use genre_explorer::compare::{
    attach_features, compare_tracks, AudioFeature, GenreComparison, MAX_COMPARED_GENRES,
    MIN_COMPARED_GENRES,
};
use genre_explorer::config::{AppConfig, CliConfig, FileConfig};
use genre_explorer::export::{
    export_genres, favorite_genres, genre_share_link, search_share_link, ExportFormat,
};
use genre_explorer::mood::{apply_mood_filter, moods_for_features, Mood};
use genre_explorer::recommend::{recommend, DailyDiscovery, DEFAULT_DISCOVERY_COUNT};
use genre_explorer::spotify::{
    seed_genre_for, RecommendationRequest, SpotifyClient, Track, TrackWithFeatures,
};
use genre_explorer::stats::{
    aggregate_by_category, aggregate_by_decade, aggregate_characteristics,
    aggregate_favorite_categories, summarize, DEFAULT_TOP_CHARACTERISTICS,
};
use genre_explorer::user::{KeyValueStore, PersonalData, SqliteKeyValueStore};

fn parse_path(s: &str) -> Result<PathBuf> {
    let path_buf = PathBuf::from(s);
    if path_buf.is_absolute() {
        return Ok(path_buf);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(path_buf))
}

#[derive(Parser, Debug)]
#[command(name = "genre-explorer", about = "Explore music genres and their sound")]
struct CliArgs {
    /// Optional TOML config file, its values override the command line.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    /// Directory holding the personal data database.
    #[clap(long, value_parser = parse_path, default_value = ".genre-explorer")]
    pub data_dir: PathBuf,

    /// Genre catalog JSON file, the built-in catalog is used when missing.
    #[clap(long, value_parser = parse_path)]
    pub catalog: Option<PathBuf>,

    #[clap(long, env = "SPOTIFY_CLIENT_ID")]
    pub spotify_client_id: Option<String>,

    #[clap(long, env = "SPOTIFY_CLIENT_SECRET", hide_env_values = true)]
    pub spotify_client_secret: Option<String>,

    /// Base URL of the Spotify Web API.
    #[clap(long)]
    pub spotify_api_url: Option<String>,

    /// Base URL of the Spotify accounts service.
    #[clap(long)]
    pub spotify_accounts_url: Option<String>,

    /// Timeout in seconds for Spotify requests.
    #[clap(long)]
    pub spotify_timeout_sec: Option<u64>,

    /// Market used for artist top tracks.
    #[clap(long)]
    pub market: Option<String>,

    /// Base URL of shared links.
    #[clap(long)]
    pub share_base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Lists genres, optionally filtered.
    Genres {
        #[clap(long)]
        category: Vec<GenreCategory>,
        /// Genres must have every given characteristic.
        #[clap(long)]
        characteristic: Vec<String>,
        #[clap(long)]
        from_year: Option<u16>,
        #[clap(long)]
        to_year: Option<u16>,
    },

    /// Shows a genre, its related genres and personal notes.
    Genre { genre_id: String },

    /// Searches genres by name, description and characteristics.
    Search { query: String },

    /// Recommends genres based on favorites.
    Recommend {
        #[clap(long)]
        limit: Option<usize>,
    },

    /// Shows today's discovery picks.
    Discover {
        #[clap(long, default_value_t = DEFAULT_DISCOVERY_COUNT)]
        count: usize,
        /// Number of reshuffles to apply to today's picks.
        #[clap(long, default_value_t = 0)]
        round: u64,
    },

    /// Shows catalog statistics.
    Stats {
        #[clap(long, default_value_t = DEFAULT_TOP_CHARACTERISTICS)]
        top: usize,
    },

    /// Compares two or three genres side by side.
    Compare {
        #[clap(num_args = 2..=3, required = true)]
        genre_ids: Vec<String>,
    },

    /// Toggles a genre as favorite.
    Favorite { genre_id: String },

    /// Writes a note for a genre, an empty note deletes it.
    Note { genre_id: String, text: String },

    /// Adds a tag to a genre.
    Tag {
        genre_id: String,
        tag: String,
        #[clap(long)]
        remove: bool,
    },

    /// Prints a share link for a genre or a search.
    Share {
        #[clap(long, conflicts_with = "search")]
        genre: Option<String>,
        #[clap(long)]
        search: Option<String>,
    },

    /// Exports genres as JSON or CSV.
    Export {
        #[clap(long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,
        /// Only export favorite genres.
        #[clap(long)]
        favorites: bool,
        /// Output file, standard output when missing.
        #[clap(long, value_parser = parse_path)]
        output: Option<PathBuf>,
    },

    /// Lists moods, or shows the feature bounds of one.
    Mood {
        #[clap(value_enum)]
        mood: Option<Mood>,
    },

    /// Recommended tracks for a genre.
    Tracks {
        genre_id: String,
        #[clap(long, value_enum)]
        mood: Option<Mood>,
        #[clap(long, default_value_t = 10)]
        limit: u32,
    },

    /// Audio features of tracks.
    Features {
        #[clap(required = true)]
        track_ids: Vec<String>,
    },

    /// Compares the audio features of recommended tracks for a genre.
    CompareTracks {
        genre_id: String,
        #[clap(long, default_value_t = 3)]
        count: u32,
        #[clap(long, value_enum)]
        mood: Option<Mood>,
    },
}

impl CliArgs {
    fn cli_config(&self) -> CliConfig {
        CliConfig {
            data_dir: Some(self.data_dir.clone()),
            catalog_path: self.catalog.clone(),
            spotify_client_id: self.spotify_client_id.clone(),
            spotify_client_secret: self.spotify_client_secret.clone(),
            spotify_api_url: self.spotify_api_url.clone(),
            spotify_accounts_url: self.spotify_accounts_url.clone(),
            spotify_timeout_sec: self.spotify_timeout_sec,
            market: self.market.clone(),
            recommendation_limit: None,
            share_base_url: self.share_base_url.clone(),
        }
    }
}

/// An inverted year range is ignored with a warning and leaves the years unfiltered.
fn genre_filter(
    categories: Vec<GenreCategory>,
    characteristics: &[String],
    from_year: Option<u16>,
    to_year: Option<u16>,
) -> GenreFilter {
    let mut filter = GenreFilter::new();
    for c in categories {
        filter = filter.with_category(c);
    }
    for c in characteristics {
        filter = filter.with_characteristic(c);
    }
    if !filter.set_year_range(from_year, to_year) {
        warn!(?from_year, ?to_year, "Ignoring inverted year range");
    }
    filter
}

fn print_genre_line(genre: &Genre) {
    println!(
        "{:<24} {:<12} {}",
        genre.id,
        genre.category.display_name(),
        genre.origin_year.as_deref().unwrap_or("-")
    );
}

fn print_track(track: &TrackWithFeatures) {
    let features = track
        .audio_features
        .as_ref()
        .map(|f| {
            format!(
                "{} energy {} valence {}",
                AudioFeature::Tempo.format(f.tempo),
                AudioFeature::Energy.format(f.energy),
                AudioFeature::Valence.format(f.valence)
            )
        })
        .unwrap_or_else(|| "no audio features".to_string());
    println!(
        "{} - {} ({})",
        track.track.name,
        track.track.artist_names(),
        features
    );
}

struct App {
    config: AppConfig,
    catalog: GenreCatalog,
    data: PersonalData,
}

impl App {
    fn genre(&self, genre_id: &str) -> Result<&Genre> {
        self.catalog
            .get(genre_id)
            .with_context(|| format!("Unknown genre: {}", genre_id))
    }

    fn spotify(&self) -> Result<SpotifyClient> {
        let Some(credentials) = self.config.spotify.credentials.clone() else {
            bail!("Spotify credentials are required, set SPOTIFY_CLIENT_ID and SPOTIFY_CLIENT_SECRET");
        };
        Ok(SpotifyClient::new(
            credentials,
            self.config.spotify.client_config(),
        )?)
    }

    /// Recommended tracks with features. Falls back to a genre search when the
    /// recommendations endpoint can't be used.
    async fn genre_tracks(
        &self,
        client: &SpotifyClient,
        genre_id: &str,
        mood: Option<Mood>,
        limit: u32,
    ) -> Result<Vec<TrackWithFeatures>> {
        let base = RecommendationRequest::for_genre(seed_genre_for(genre_id));
        let filters = match mood {
            Some(mood) => apply_mood_filter(mood, &base).filters,
            None => base.filters,
        };
        match client
            .recommendations_with_features(genre_id, limit, &filters)
            .await
        {
            Ok(tracks) => Ok(tracks),
            Err(err) => {
                warn!(genre_id, status = ?err.status(), "Recommendations failed, searching instead: {}", err);
                let spotify_genre = &self.genre(genre_id)?.spotify_genre;
                let tracks: Vec<Track> = client
                    .search_tracks_by_genre(spotify_genre, limit)
                    .await?;
                Ok(client.tracks_with_features(tracks).await?)
            }
        }
    }

    async fn run(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Genres {
                category,
                characteristic,
                from_year,
                to_year,
            } => {
                let filter = genre_filter(category, &characteristic, from_year, to_year);
                let genres = filter.apply(self.catalog.genres());
                for genre in &genres {
                    print_genre_line(genre);
                }
                println!("{} of {} genres", genres.len(), self.catalog.len());
            }
            Command::Genre { genre_id } => {
                let genre = self.genre(&genre_id)?;
                let favorite = self.data.favorites.get().is_genre_favorite(&genre.id);
                println!("{}{}", genre.name, if favorite { " ★" } else { "" });
                println!("{}", genre.description);
                println!("Category: {}", genre.category.display_name());
                println!(
                    "Origin: {}",
                    genre.origin_year.as_deref().unwrap_or("Unknown")
                );
                println!("Characteristics: {}", genre.characteristics.join(", "));
                if !genre.key_artists.is_empty() {
                    println!("Key artists: {}", genre.key_artists.join(", "));
                }
                let related: Vec<&str> = self
                    .catalog
                    .related(&genre.id)
                    .iter()
                    .map(|g| g.name.as_str())
                    .collect();
                if !related.is_empty() {
                    println!("Related: {}", related.join(", "));
                }
                let tags = self.data.tags.get().get(&genre.id);
                if !tags.is_empty() {
                    println!("Tags: {}", tags.join(", "));
                }
                if self.data.notes.get().has(&genre.id) {
                    println!("Note: {}", self.data.notes.get().get(&genre.id));
                }
            }
            Command::Search { query } => {
                let results = search(&self.catalog, &query);
                for genre in &results {
                    print_genre_line(genre);
                }
                println!("{} results for \"{}\"", results.len(), query);
                self.data.search_history.update(|h| h.add(&query))?;
            }
            Command::Recommend { limit } => {
                let limit = limit.unwrap_or(self.config.recommendation_limit);
                let favorites = &self.data.favorites.get().genres;
                let genres = recommend(favorites, &self.catalog, limit, &mut rand::rng());
                if favorites.is_empty() {
                    println!("No favorites yet, here is a random selection:");
                }
                for genre in genres {
                    print_genre_line(genre);
                }
            }
            Command::Discover { count, round } => {
                let mut discovery = DailyDiscovery::today();
                for _ in 0..round {
                    discovery.reshuffle();
                }
                println!("Discovery for {}", discovery.date());
                for genre in discovery.picks(&self.catalog, &self.data.favorites.get().genres, count)
                {
                    print_genre_line(genre);
                }
            }
            Command::Stats { top } => {
                let favorites = &self.data.favorites.get().genres;
                let summary = summarize(&self.catalog, favorites);
                println!("{}", serde_json::to_string_pretty(&summary)?);

                println!("\nGenres by category:");
                for (category, count) in aggregate_by_category(self.catalog.genres()) {
                    println!("  {:<12} {}", category.display_name(), count);
                }
                let favorite_categories = aggregate_favorite_categories(&self.catalog, favorites);
                if !favorite_categories.is_empty() {
                    println!("\nFavorites by category:");
                    for (category, count) in favorite_categories {
                        println!("  {:<12} {}", category.display_name(), count);
                    }
                }
                println!("\nTop characteristics:");
                for (characteristic, count) in aggregate_characteristics(self.catalog.genres(), top)
                {
                    println!("  {:<24} {}", characteristic, count);
                }
                println!("\nGenres by decade:");
                for (decade, count) in aggregate_by_decade(self.catalog.genres()) {
                    println!("  {:<8} {}", decade, count);
                }
            }
            Command::Compare { genre_ids } => {
                let mut comparison = GenreComparison::new();
                for id in &genre_ids {
                    if !comparison.select(self.genre(id)?) {
                        warn!(genre_id = %id, "Not added to the comparison");
                    }
                }
                let Some(table) = comparison.table() else {
                    bail!(
                        "Select between {} and {} distinct genres to compare",
                        MIN_COMPARED_GENRES,
                        MAX_COMPARED_GENRES
                    );
                };
                println!("{:<16} {}", "", table.genres.join(" | "));
                for row in table.rows {
                    println!("{:<16} {}", row.field.label(), row.values.join(" | "));
                }
            }
            Command::Favorite { genre_id } => {
                let genre = self.genre(&genre_id)?;
                let id = genre.id.clone();
                let name = genre.name.clone();
                let added = self.data.favorites.update(|f| f.toggle_genre(&id))?;
                if added {
                    println!("Added {} to favorites", name);
                } else {
                    println!("Removed {} from favorites", name);
                }
            }
            Command::Note { genre_id, text } => {
                let id = self.genre(&genre_id)?.id.clone();
                self.data.notes.update(|n| {
                    if text.trim().is_empty() {
                        n.delete(&id);
                    } else {
                        n.set(&id, &text);
                    }
                })?;
            }
            Command::Tag {
                genre_id,
                tag,
                remove,
            } => {
                let id = self.genre(&genre_id)?.id.clone();
                let changed = self.data.tags.update(|t| {
                    if remove {
                        t.remove(&id, &tag)
                    } else {
                        t.add(&id, &tag)
                    }
                })?;
                if !changed {
                    println!("Tags of {} unchanged", id);
                }
                println!("All tags: {}", self.data.tags.get().all().join(", "));
            }
            Command::Share { genre, search } => {
                let link = match (genre, search) {
                    (Some(genre_id), _) => {
                        let genre = self.genre(&genre_id)?;
                        genre_share_link(&self.config.share_base_url, &genre.id, &genre.name)
                    }
                    (None, Some(query)) => search_share_link(&self.config.share_base_url, &query),
                    (None, None) => bail!("Either --genre or --search is required"),
                };
                println!("{}\n{}\n{}", link.title, link.text, link.url);
            }
            Command::Export {
                format,
                favorites,
                output,
            } => {
                let genres: Vec<&Genre> = if favorites {
                    favorite_genres(&self.catalog, &self.data.favorites.get().genres)
                } else {
                    self.catalog.genres().iter().collect()
                };
                let content = export_genres(&genres, format)?;
                match output {
                    Some(path) => {
                        std::fs::write(&path, content)
                            .with_context(|| format!("Failed to write export to {:?}", path))?;
                        info!("Exported {} genres to {:?}", genres.len(), path);
                    }
                    None => println!("{}", content),
                }
            }
            Command::Mood { mood: None } => {
                for mood in Mood::ALL {
                    println!("{:<10} {}", mood.label(), mood.description());
                }
            }
            Command::Mood { mood: Some(mood) } => {
                println!("{}: {}", mood.label(), mood.description());
                for (key, value) in mood.filters().query_params() {
                    println!("  {} = {}", key, value);
                }
            }
            Command::Tracks {
                genre_id,
                mood,
                limit,
            } => {
                self.genre(&genre_id)?;
                let client = self.spotify()?;
                let tracks = self.genre_tracks(&client, &genre_id, mood, limit).await?;
                if tracks.is_empty() {
                    println!("No tracks found");
                }
                for track in &tracks {
                    print_track(track);
                }
            }
            Command::Features { track_ids } => {
                let client = self.spotify()?;
                let features = client.fetch_features(&track_ids).await?;
                for (id, features) in track_ids.iter().zip(features) {
                    match features {
                        Some(features) => {
                            let moods: Vec<&str> = moods_for_features(&features)
                                .iter()
                                .map(|m| m.label())
                                .collect();
                            println!("{}", id);
                            for feature in AudioFeature::COMPARED {
                                println!(
                                    "  {:<18} {}",
                                    feature.label(),
                                    feature.format(feature.value(&features))
                                );
                            }
                            println!(
                                "  {:<18} {}",
                                AudioFeature::Tempo.label(),
                                AudioFeature::Tempo.format(features.tempo)
                            );
                            println!("  {:<18} {}", "Moods", moods.join(", "));
                        }
                        None => println!("{}: no audio features", id),
                    }
                }
            }
            Command::CompareTracks {
                genre_id,
                count,
                mood,
            } => {
                self.genre(&genre_id)?;
                let client = self.spotify()?;
                let tracks = self.genre_tracks(&client, &genre_id, mood, count).await?;
                let (tracks, features): (Vec<Track>, Vec<_>) = tracks
                    .into_iter()
                    .map(|t| (t.track, t.audio_features))
                    .unzip();
                let compared = attach_features(tracks, features);
                let summaries = compare_tracks(&compared);
                if summaries.is_empty() {
                    println!("None of the tracks have audio features");
                }
                for summary in summaries {
                    let feature = summary.feature;
                    println!(
                        "{}: min {} max {} avg {}",
                        feature.label(),
                        feature.format(summary.min),
                        feature.format(summary.max),
                        feature.format(summary.avg)
                    );
                    for bar in summary.bars {
                        let name = compared
                            .iter()
                            .find(|c| c.track.id == bar.track_id)
                            .map(|c| c.track.name.as_str())
                            .unwrap_or(bar.track_id.as_str());
                        let width = (bar.width / 5.0).round() as usize;
                        println!("  {:<32} {}", name, "#".repeat(width));
                    }
                }
            }
        }
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()?;

    let file_config = match &cli_args.config {
        Some(path) => Some(FileConfig::load(path)?),
        None => None,
    };
    let config = AppConfig::resolve(&cli_args.cli_config(), file_config)?;

    let catalog = load_catalog(config.catalog_path.as_ref())?;
    info!("Catalog ready with {} genres", catalog.len());

    let db_path = config.user_db_path();
    info!("Opening personal data at {:?}...", db_path);
    let store: Arc<dyn KeyValueStore> = Arc::new(SqliteKeyValueStore::new(&db_path)?);
    let data = PersonalData::open(store)?;

    let mut app = App {
        config,
        catalog,
        data,
    };
    app.run(cli_args.command).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverted_year_range_lists_unfiltered_years() {
        let catalog = GenreCatalog::builtin();
        let filter = genre_filter(vec![], &[], Some(2000), Some(1900));

        assert_eq!(filter.year_range(), (None, None));
        assert_eq!(filter.apply(catalog.genres()).len(), catalog.len());
    }

    #[test]
    fn year_range_filters_by_origin() {
        let catalog = GenreCatalog::builtin();
        let filter = genre_filter(vec![GenreCategory::Jazz], &[], Some(1900), Some(1950));

        let genres = filter.apply(catalog.genres());
        assert!(!genres.is_empty());
        assert!(genres.iter().all(|g| g.category == GenreCategory::Jazz));
    }
}
