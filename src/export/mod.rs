//! Genre export to JSON and CSV, and share links.

mod share;

pub use share::{genre_share_link, search_share_link, ShareLink};

use crate::catalog::{Genre, GenreCatalog};
use anyhow::{Context, Result};
use std::fmt;
use std::str::FromStr;

pub const CSV_HEADERS: [&str; 6] = [
    "Name",
    "Category",
    "Description",
    "Characteristics",
    "Origin Year",
    "Key Artists",
];

const LIST_SEPARATOR: &str = "; ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            other => anyhow::bail!("Unknown export format: {}", other),
        }
    }
}

pub fn genres_to_json(genres: &[&Genre]) -> Result<String> {
    serde_json::to_string_pretty(genres).context("Failed to serialize genres")
}

fn csv_cell(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// One line per genre after the header. Every cell is quoted.
pub fn genres_to_csv(genres: &[&Genre]) -> String {
    let mut lines = Vec::with_capacity(genres.len() + 1);
    lines.push(CSV_HEADERS.join(","));
    for genre in genres {
        let characteristics = genre.characteristics.join(LIST_SEPARATOR);
        let key_artists = genre.key_artists.join(LIST_SEPARATOR);
        let cells: [&str; 6] = [
            &genre.name,
            genre.category.as_str(),
            &genre.description,
            &characteristics,
            genre.origin_year.as_deref().unwrap_or(""),
            &key_artists,
        ];
        lines.push(cells.iter().map(|c| csv_cell(c)).collect::<Vec<_>>().join(","));
    }
    lines.join("\n")
}

pub fn export_genres(genres: &[&Genre], format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Json => genres_to_json(genres),
        ExportFormat::Csv => Ok(genres_to_csv(genres)),
    }
}

/// Favorited genres in catalog order.
pub fn favorite_genres<'a, S: AsRef<str>>(
    catalog: &'a GenreCatalog,
    favorite_ids: &[S],
) -> Vec<&'a Genre> {
    catalog
        .genres()
        .iter()
        .filter(|g| favorite_ids.iter().any(|id| id.as_ref() == g.id))
        .collect()
}
