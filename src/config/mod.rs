mod file_config;

pub use file_config::{FileConfig, SpotifyFileConfig};

use crate::recommend::DEFAULT_RECOMMENDATION_LIMIT;
use crate::spotify::{
    ClientCredentials, SpotifyClientConfig, DEFAULT_ACCOUNTS_BASE_URL, DEFAULT_API_BASE_URL,
    DEFAULT_TIMEOUT_SEC,
};
use anyhow::{bail, Context, Result};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_SHARE_BASE_URL: &str = "https://music-explorer.app/";
pub const DEFAULT_MARKET: &str = "US";

/// CLI arguments that can be used for config resolution.
/// TOML values override these where present.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub data_dir: Option<PathBuf>,
    pub catalog_path: Option<PathBuf>,
    pub spotify_client_id: Option<String>,
    pub spotify_client_secret: Option<String>,
    pub spotify_api_url: Option<String>,
    pub spotify_accounts_url: Option<String>,
    pub spotify_timeout_sec: Option<u64>,
    pub market: Option<String>,
    pub recommendation_limit: Option<usize>,
    pub share_base_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    /// Genre catalog JSON, the built-in catalog is used when unset.
    pub catalog_path: Option<PathBuf>,
    pub recommendation_limit: usize,
    pub share_base_url: String,

    pub spotify: SpotifySettings,
}

#[derive(Debug, Clone)]
pub struct SpotifySettings {
    /// Only present when both client id and secret are configured.
    pub credentials: Option<ClientCredentials>,
    pub api_base_url: String,
    pub accounts_base_url: String,
    pub timeout_sec: u64,
    pub market: String,
}

impl SpotifySettings {
    pub fn client_config(&self) -> SpotifyClientConfig {
        SpotifyClientConfig {
            api_base_url: self.api_base_url.clone(),
            accounts_base_url: self.accounts_base_url.clone(),
            timeout: Duration::from_secs(self.timeout_sec),
        }
    }
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let data_dir = file
            .data_dir
            .map(PathBuf::from)
            .or_else(|| cli.data_dir.clone())
            .ok_or_else(|| {
                anyhow::anyhow!("data_dir must be specified via --data-dir or in config file")
            })?;

        if data_dir.exists() && !data_dir.is_dir() {
            bail!("data_dir is not a directory: {:?}", data_dir);
        }
        if !data_dir.exists() {
            std::fs::create_dir_all(&data_dir)
                .with_context(|| format!("Failed to create data directory: {:?}", data_dir))?;
        }

        let catalog_path = file
            .catalog_path
            .map(PathBuf::from)
            .or_else(|| cli.catalog_path.clone());

        let recommendation_limit = file
            .recommendation_limit
            .or(cli.recommendation_limit)
            .unwrap_or(DEFAULT_RECOMMENDATION_LIMIT);
        if recommendation_limit == 0 {
            bail!("recommendation_limit must be greater than 0");
        }

        let share_base_url = file
            .share_base_url
            .or_else(|| cli.share_base_url.clone())
            .unwrap_or_else(|| DEFAULT_SHARE_BASE_URL.to_string());

        let spotify_file = file.spotify.unwrap_or_default();
        let client_id = spotify_file
            .client_id
            .or_else(|| cli.spotify_client_id.clone());
        let client_secret = spotify_file
            .client_secret
            .or_else(|| cli.spotify_client_secret.clone());
        let credentials = match (client_id, client_secret) {
            (Some(id), Some(secret)) => Some(ClientCredentials::new(id, secret)),
            (None, None) => None,
            _ => bail!("Both the Spotify client id and client secret must be provided together"),
        };

        let spotify = SpotifySettings {
            credentials,
            api_base_url: spotify_file
                .api_base_url
                .or_else(|| cli.spotify_api_url.clone())
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            accounts_base_url: spotify_file
                .accounts_base_url
                .or_else(|| cli.spotify_accounts_url.clone())
                .unwrap_or_else(|| DEFAULT_ACCOUNTS_BASE_URL.to_string()),
            timeout_sec: spotify_file
                .timeout_sec
                .or(cli.spotify_timeout_sec)
                .unwrap_or(DEFAULT_TIMEOUT_SEC),
            market: spotify_file
                .market
                .or_else(|| cli.market.clone())
                .unwrap_or_else(|| DEFAULT_MARKET.to_string()),
        };

        Ok(Self {
            data_dir,
            catalog_path,
            recommendation_limit,
            share_base_url,
            spotify,
        })
    }

    pub fn user_db_path(&self) -> PathBuf {
        self.data_dir.join("user.db")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn make_temp_data_dir() -> TempDir {
        TempDir::new().unwrap()
    }

    #[test]
    fn test_resolve_cli_only() {
        let temp_dir = make_temp_data_dir();
        let cli = CliConfig {
            data_dir: Some(temp_dir.path().to_path_buf()),
            catalog_path: Some(PathBuf::from("/catalog.json")),
            spotify_client_id: Some("id".to_string()),
            spotify_client_secret: Some("secret".to_string()),
            spotify_timeout_sec: Some(5),
            recommendation_limit: Some(20),
            ..Default::default()
        };

        let config = AppConfig::resolve(&cli, None).unwrap();

        assert_eq!(config.data_dir, temp_dir.path());
        assert_eq!(config.catalog_path, Some(PathBuf::from("/catalog.json")));
        assert_eq!(config.recommendation_limit, 20);
        assert_eq!(config.share_base_url, DEFAULT_SHARE_BASE_URL);
        assert_eq!(config.user_db_path(), temp_dir.path().join("user.db"));

        let spotify = &config.spotify;
        assert_eq!(
            spotify.credentials.as_ref().map(|c| c.client_id()),
            Some("id")
        );
        assert_eq!(spotify.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(spotify.market, DEFAULT_MARKET);
        assert_eq!(spotify.client_config().timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_toml_overrides_cli() {
        let temp_dir = make_temp_data_dir();
        let other_dir = make_temp_data_dir();
        let cli = CliConfig {
            data_dir: Some(temp_dir.path().to_path_buf()),
            recommendation_limit: Some(20),
            market: Some("US".to_string()),
            ..Default::default()
        };
        let file = FileConfig {
            data_dir: Some(other_dir.path().to_string_lossy().to_string()),
            recommendation_limit: Some(5),
            spotify: Some(SpotifyFileConfig {
                market: Some("IT".to_string()),
                api_base_url: Some("http://localhost:1234/v1".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };

        let config = AppConfig::resolve(&cli, Some(file)).unwrap();

        assert_eq!(config.data_dir, other_dir.path());
        assert_eq!(config.recommendation_limit, 5);
        assert_eq!(config.spotify.market, "IT");
        assert_eq!(config.spotify.api_base_url, "http://localhost:1234/v1");
        assert!(config.spotify.credentials.is_none());
    }

    #[test]
    fn test_missing_data_dir_fails() {
        let result = AppConfig::resolve(&CliConfig::default(), None);
        assert!(result.is_err());
    }

    #[test]
    fn test_data_dir_is_created() {
        let temp_dir = make_temp_data_dir();
        let nested = temp_dir.path().join("nested").join("data");
        let cli = CliConfig {
            data_dir: Some(nested.clone()),
            ..Default::default()
        };

        let config = AppConfig::resolve(&cli, None).unwrap();
        assert!(config.data_dir.is_dir());
        assert_eq!(config.recommendation_limit, DEFAULT_RECOMMENDATION_LIMIT);
    }

    #[test]
    fn test_data_dir_must_be_a_directory() {
        let temp_dir = make_temp_data_dir();
        let file_path = temp_dir.path().join("file.txt");
        std::fs::write(&file_path, "x").unwrap();
        let cli = CliConfig {
            data_dir: Some(file_path),
            ..Default::default()
        };
        assert!(AppConfig::resolve(&cli, None).is_err());
    }

    #[test]
    fn test_half_credentials_fail() {
        let temp_dir = make_temp_data_dir();
        let cli = CliConfig {
            data_dir: Some(temp_dir.path().to_path_buf()),
            spotify_client_id: Some("id".to_string()),
            ..Default::default()
        };
        assert!(AppConfig::resolve(&cli, None).is_err());
    }

    #[test]
    fn test_zero_limit_fails() {
        let temp_dir = make_temp_data_dir();
        let cli = CliConfig {
            data_dir: Some(temp_dir.path().to_path_buf()),
            recommendation_limit: Some(0),
            ..Default::default()
        };
        assert!(AppConfig::resolve(&cli, None).is_err());
    }
}
