//! Catalog loading functionality

use super::{Genre, GenreCatalog, LoadCatalogProblem};
use anyhow::{bail, Context, Result};
use std::path::Path;
use tracing::{debug, info};

fn read_genres(path: &Path) -> Result<Vec<Genre>> {
    let file_text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file {}", path.display()))?;
    serde_json::from_str(&file_text)
        .with_context(|| format!("Failed to parse catalog file {}", path.display()))
}

fn problems_summary(problems: &[LoadCatalogProblem]) -> String {
    if problems.is_empty() {
        return "Catalog checked, no issues found.".to_string();
    }
    let dangling = problems
        .iter()
        .filter(|p| matches!(p, LoadCatalogProblem::DanglingRelation { .. }))
        .count();
    format!(
        "Found {} non-fatal catalog issues ({} dangling relations)",
        problems.len(),
        dangling
    )
}

/// The builtin catalog links to genres it does not ship, so single issues
/// are only logged at debug level.
fn log_problems(problems: &[LoadCatalogProblem]) {
    info!("{}", problems_summary(problems));
    for problem in problems.iter() {
        debug!("- {:?}", problem);
    }
}

/// Loads the catalog from a JSON array of genres, or the builtin catalog
/// when no path is given.
pub fn load_catalog<P: AsRef<Path>>(path: Option<P>) -> Result<GenreCatalog> {
    let catalog = match path {
        Some(path) => {
            let path = path.as_ref();
            info!("Loading catalog from {}", path.display());
            GenreCatalog::new(read_genres(path)?)
        }
        None => {
            info!("Using builtin catalog");
            GenreCatalog::builtin()
        }
    };

    log_problems(catalog.problems());

    if catalog.is_empty() {
        bail!("Could not load catalog: no genres found");
    }

    info!(
        "Catalog has:\n{} genres\n{} categories",
        catalog.len(),
        catalog.categories().len()
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn summarizes_problems_in_one_line() {
        assert_eq!(problems_summary(&[]), "Catalog checked, no issues found.");

        let problems = vec![
            LoadCatalogProblem::DuplicateId("jazz".to_string()),
            LoadCatalogProblem::DanglingRelation {
                genre_id: "jazz".to_string(),
                related_id: "swing".to_string(),
            },
        ];
        assert_eq!(
            problems_summary(&problems),
            "Found 2 non-fatal catalog issues (1 dangling relations)"
        );
    }

    #[test]
    fn loads_builtin_without_path() {
        let catalog = load_catalog(None::<&Path>).unwrap();
        assert!(catalog.get("jazz").is_some());
    }

    #[test]
    fn loads_catalog_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r##"[{{
                "id": "shoegaze",
                "name": "Shoegaze",
                "category": "indie",
                "description": "Walls of guitar noise.",
                "characteristics": ["Dreamy", "Distorted"],
                "originYear": "late 1980s",
                "relatedGenres": ["dream-pop"],
                "color": "#aaaaaa",
                "spotifyGenre": "shoegaze"
            }}]"##
        )
        .unwrap();

        let catalog = load_catalog(Some(file.path())).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("shoegaze").unwrap().origin_year_value(), Some(1980));
        assert_eq!(catalog.problems().len(), 1);
    }

    #[test]
    fn rejects_empty_catalog() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[]").unwrap();
        let err = load_catalog(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("no genres"));
    }

    #[test]
    fn reports_unreadable_file() {
        let err = load_catalog(Some(Path::new("/nonexistent/catalog.json"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read catalog file"));
    }
}
