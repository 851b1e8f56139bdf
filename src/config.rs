use std::path::{Path, PathBuf};

/// How a non-coordinate column is coerced into a property value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Fractional numbers; keeps cents for monetary totals.
    Float,
    /// Counts and identifiers; fractional text is truncated.
    Integer,
    /// Trimmed text.
    Text,
}

/// Fixed settings for one conversion run.
///
/// There is no runtime configuration: `Default` carries the values the tool
/// always uses. `rooted_at` only moves the file names under a directory.
#[derive(Debug, Clone)]
pub struct Config {
    /// Tried in order; the first existing file is the input.
    pub input_candidates: Vec<PathBuf>,
    pub output_path: PathBuf,
    pub latitude_aliases: Vec<String>,
    pub longitude_aliases: Vec<String>,
    pub float_columns: Vec<String>,
    pub integer_columns: Vec<String>,
    pub event_columns: Vec<String>,
    pub expedition_columns: Vec<String>,
    /// Column echoed in skip diagnostics next to the event number.
    pub city_column: String,
}

pub const INPUT_CANDIDATES: [&str; 2] = [
    "master clinic mapbox file.csv",
    "master clinic mapbox file.cvs",
];

pub const OUTPUT_FILE: &str = "MapBox Dataset.geojson";

pub const LATITUDE_ALIASES: [&str; 5] = ["Latitude", "Lat", "LAT", "lat", "latitude"];

pub const LONGITUDE_ALIASES: [&str; 8] = [
    "Longitude",
    "Longitutde",
    "Long",
    "Lng",
    "LON",
    "lon",
    "lng",
    "longitude",
];

pub const FLOAT_COLUMNS: [&str; 1] = ["Total Value of Care"];

pub const INTEGER_COLUMNS: [&str; 14] = [
    "Event #",
    "Expedition #",
    "Year",
    "ZipCode",
    "Total Volunteers",
    "Total Patients",
    "Animals Served",
    "Extractions",
    "Fillings",
    "Cleanings",
    "Glasses",
    "Eye Exams",
    "Medical Exams",
    "Women's Health",
];

pub const EVENT_COLUMNS: [&str; 3] = ["Event #", "Event#", "Event"];
pub const EXPEDITION_COLUMNS: [&str; 3] = ["Expedition #", "Expedition#", "Expedition"];

fn owned(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input_candidates: INPUT_CANDIDATES.iter().map(PathBuf::from).collect(),
            output_path: PathBuf::from(OUTPUT_FILE),
            latitude_aliases: owned(&LATITUDE_ALIASES),
            longitude_aliases: owned(&LONGITUDE_ALIASES),
            float_columns: owned(&FLOAT_COLUMNS),
            integer_columns: owned(&INTEGER_COLUMNS),
            event_columns: owned(&EVENT_COLUMNS),
            expedition_columns: owned(&EXPEDITION_COLUMNS),
            city_column: "City".to_string(),
        }
    }
}

impl Config {
    /// Default settings with the input candidates and output file placed in `dir`.
    pub fn rooted_at(dir: &Path) -> Self {
        let mut config = Config::default();
        config.input_candidates = config
            .input_candidates
            .iter()
            .map(|name| dir.join(name))
            .collect();
        config.output_path = dir.join(&config.output_path);
        config
    }

    pub fn column_kind(&self, column: &str) -> ColumnKind {
        if self.float_columns.iter().any(|c| c == column) {
            ColumnKind::Float
        } else if self.integer_columns.iter().any(|c| c == column) {
            ColumnKind::Integer
        } else {
            ColumnKind::Text
        }
    }

    /// Header name used to look up the event number in skip diagnostics.
    pub fn event_column(&self) -> &str {
        self.event_columns.first().map(String::as_str).unwrap_or("Event #")
    }
}
