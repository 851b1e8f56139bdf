use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConvertError>;

/// Fatal conditions that abort a conversion run.
///
/// Rows without usable coordinates and cells that fail numeric coercion are
/// not errors; they are skipped or kept as text.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Could not find input CSV. Expected one of:{}", list_paths(candidates))]
    InputNotFound { candidates: Vec<PathBuf> },

    #[error("CSV appears to have no headers: {}", path.display())]
    NoHeaders { path: PathBuf },

    #[error(
        "Could not find Latitude/Longitude columns (latitude: {}, longitude: {}). Found headers: {headers:?}",
        found_or_missing(latitude),
        found_or_missing(longitude)
    )]
    MissingCoordinateColumns {
        latitude: Option<String>,
        longitude: Option<String>,
        headers: Vec<String>,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn list_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| format!("\n - {}", p.display()))
        .collect()
}

fn found_or_missing(column: &Option<String>) -> String {
    match column {
        Some(name) => format!("{:?}", name),
        None => "missing".to_string(),
    }
}
