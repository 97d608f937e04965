use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct FileConfig {
    // Core settings (can override CLI)
    pub data_dir: Option<String>,
    pub catalog_path: Option<String>,
    pub recommendation_limit: Option<usize>,
    pub share_base_url: Option<String>,

    pub spotify: Option<SpotifyFileConfig>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct SpotifyFileConfig {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub api_base_url: Option<String>,
    pub accounts_base_url: Option<String>,
    pub timeout_sec: Option<u64>,
    /// Country code used for artist top tracks.
    pub market: Option<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
recommendation_limit = 8

[spotify]
client_id = "abc"
market = "IT"
"#
        )
        .unwrap();

        let config = FileConfig::load(file.path()).unwrap();
        assert_eq!(config.recommendation_limit, Some(8));
        assert!(config.data_dir.is_none());
        let spotify = config.spotify.unwrap();
        assert_eq!(spotify.client_id.as_deref(), Some("abc"));
        assert_eq!(spotify.market.as_deref(), Some("IT"));
        assert!(spotify.timeout_sec.is_none());
    }

    #[test]
    fn reports_missing_and_malformed_files() {
        let dir = tempfile::tempdir().unwrap();
        assert!(FileConfig::load(&dir.path().join("missing.toml")).is_err());

        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "recommendation_limit = \"many\"").unwrap();
        assert!(FileConfig::load(&path).is_err());
    }
}
