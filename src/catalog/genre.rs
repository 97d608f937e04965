use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

lazy_static! {
    static ref FOUR_DIGIT_YEAR: Regex = Regex::new(r"[0-9]{4}").unwrap();
}

/// Years outside of this open interval are not considered valid origin years.
const MIN_ORIGIN_YEAR_EXCLUSIVE: u16 = 1800;
const MAX_ORIGIN_YEAR_EXCLUSIVE: u16 = 2100;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GenreCategory {
    Rock,
    Electronic,
    HipHop,
    Jazz,
    Pop,
    Indie,
    Metal,
    Classical,
    Latin,
    Country,
    Blues,
    Reggae,
    Soul,
    Folk,
}

impl GenreCategory {
    pub const ALL: [GenreCategory; 14] = [
        GenreCategory::Rock,
        GenreCategory::Electronic,
        GenreCategory::HipHop,
        GenreCategory::Jazz,
        GenreCategory::Pop,
        GenreCategory::Indie,
        GenreCategory::Metal,
        GenreCategory::Classical,
        GenreCategory::Latin,
        GenreCategory::Country,
        GenreCategory::Blues,
        GenreCategory::Reggae,
        GenreCategory::Soul,
        GenreCategory::Folk,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GenreCategory::Rock => "rock",
            GenreCategory::Electronic => "electronic",
            GenreCategory::HipHop => "hip-hop",
            GenreCategory::Jazz => "jazz",
            GenreCategory::Pop => "pop",
            GenreCategory::Indie => "indie",
            GenreCategory::Metal => "metal",
            GenreCategory::Classical => "classical",
            GenreCategory::Latin => "latin",
            GenreCategory::Country => "country",
            GenreCategory::Blues => "blues",
            GenreCategory::Reggae => "reggae",
            GenreCategory::Soul => "soul",
            GenreCategory::Folk => "folk",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            GenreCategory::Rock => "Rock",
            GenreCategory::Electronic => "Electronic",
            GenreCategory::HipHop => "Hip Hop",
            GenreCategory::Jazz => "Jazz",
            GenreCategory::Pop => "Pop",
            GenreCategory::Indie => "Indie",
            GenreCategory::Metal => "Metal",
            GenreCategory::Classical => "Classical",
            GenreCategory::Latin => "Latin",
            GenreCategory::Country => "Country",
            GenreCategory::Blues => "Blues",
            GenreCategory::Reggae => "Reggae",
            GenreCategory::Soul => "Soul",
            GenreCategory::Folk => "Folk",
        }
    }
}

impl fmt::Display for GenreCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GenreCategory {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        GenreCategory::ALL
            .iter()
            .find(|c| c.as_str() == normalized)
            .copied()
            .ok_or_else(|| anyhow::anyhow!("Unknown genre category: {}", s))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Genre {
    pub id: String,
    pub name: String,
    pub category: GenreCategory,
    pub description: String,
    pub characteristics: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_year: Option<String>,
    #[serde(default)]
    pub key_artists: Vec<String>,
    #[serde(default)]
    pub related_genres: Vec<String>,
    pub color: String,
    pub spotify_genre: String,
}

impl Genre {
    /// The year this genre originated in, if `origin_year` contains a plausible one.
    pub fn origin_year_value(&self) -> Option<u16> {
        self.origin_year.as_deref().and_then(parse_origin_year)
    }

    pub fn has_characteristic(&self, characteristic: &str) -> bool {
        self.characteristics.iter().any(|c| c == characteristic)
    }
}

/// Extracts the first four digit year out of free text such as "1960s" or
/// "late 1970s". Years not strictly between 1800 and 2100 yield `None`.
pub fn parse_origin_year(text: &str) -> Option<u16> {
    let year: u16 = FOUR_DIGIT_YEAR.find(text)?.as_str().parse().ok()?;
    if year > MIN_ORIGIN_YEAR_EXCLUSIVE && year < MAX_ORIGIN_YEAR_EXCLUSIVE {
        Some(year)
    } else {
        None
    }
}

/// Start year of the decade `year` belongs to.
pub fn decade_of(year: u16) -> u16 {
    year / 10 * 10
}

pub fn decade_label(decade: u16) -> String {
    format!("{}s", decade)
}
