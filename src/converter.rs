use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use csv::StringRecord;
use geo::Point;
use geojson::{Feature, FeatureCollection, Geometry, JsonObject};
use serde_json::Value;
use tracing::{debug, info};

use crate::coerce::{coerce_property, to_float};
use crate::config::Config;
use crate::error::{ConvertError, Result};
use crate::headers::{resolve_coordinate_columns, CoordinateColumns};

const BOM: char = '\u{feff}';

/// Outcome of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub features: usize,
    pub skipped: usize,
}

/// A row left out of the output because a coordinate did not parse.
/// Values are the raw cells; `None` means the row has no such cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    pub row: usize,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub event: Option<String>,
    pub city: Option<String>,
}

fn raw_repr(value: &Option<String>) -> String {
    match value {
        Some(s) => format!("{:?}", s),
        None => "None".to_string(),
    }
}

impl fmt::Display for SkippedRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SKIPPED row {}: lat={} lon={} event={} city={}",
            self.row,
            raw_repr(&self.latitude),
            raw_repr(&self.longitude),
            raw_repr(&self.event),
            raw_repr(&self.city)
        )
    }
}

/// One record looked up by header name.
pub struct Row<'a> {
    index: &'a HashMap<String, usize>,
    record: &'a StringRecord,
}

impl<'a> Row<'a> {
    pub fn new(index: &'a HashMap<String, usize>, record: &'a StringRecord) -> Self {
        Row { index, record }
    }

    /// Raw cell for `column`, or `None` if the column is unknown or the row is short.
    pub fn get(&self, column: &str) -> Option<&'a str> {
        self.index.get(column).and_then(|&i| self.record.get(i))
    }

    fn get_owned(&self, column: &str) -> Option<String> {
        self.get(column).map(str::to_string)
    }

    /// Trimmed value of the first listed column holding non-blank text.
    fn first_present(&self, columns: &[String]) -> Option<String> {
        columns
            .iter()
            .filter_map(|c| self.get(c))
            .map(str::trim)
            .find(|v| !v.is_empty())
            .map(str::to_string)
    }
}

/// Map header names to column positions. Repeated names resolve to the last one.
pub fn header_index(headers: &[String]) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(i, name)| (name.clone(), i))
        .collect()
}

/// Header names with a leading byte-order mark removed.
pub fn read_headers<R: Read>(rdr: &mut csv::Reader<R>) -> Result<Vec<String>> {
    let mut headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
    if let Some(first) = headers.first_mut() {
        if first.starts_with(BOM) {
            *first = first.trim_start_matches(BOM).to_string();
        }
    }
    Ok(headers)
}

/// Build the Feature for row number `ordinal` (1-based), or describe why it was skipped.
pub fn build_feature(
    row: &Row<'_>,
    ordinal: usize,
    headers: &[String],
    columns: &CoordinateColumns,
    config: &Config,
) -> std::result::Result<Feature, SkippedRow> {
    let raw_lat = row.get(&columns.latitude);
    let raw_lon = row.get(&columns.longitude);

    let (lat, lon) = match (raw_lat.and_then(to_float), raw_lon.and_then(to_float)) {
        (Some(lat), Some(lon)) => (lat, lon),
        _ => {
            return Err(SkippedRow {
                row: ordinal,
                latitude: raw_lat.map(str::to_string),
                longitude: raw_lon.map(str::to_string),
                event: row.get_owned(config.event_column()),
                city: row.get_owned(&config.city_column),
            })
        }
    };

    let mut properties = JsonObject::new();
    for name in headers {
        if *name == columns.latitude || *name == columns.longitude {
            continue;
        }
        let value = coerce_property(config.column_kind(name), row.get(name));
        properties.insert(name.clone(), value);
    }

    properties.insert("_row".to_string(), Value::from(ordinal));
    if let Some(event_id) = row.first_present(&config.event_columns) {
        properties.insert("_event_id".to_string(), Value::String(event_id));
    }
    if let Some(expedition_id) = row.first_present(&config.expedition_columns) {
        properties.insert("_expedition_id".to_string(), Value::String(expedition_id));
    }

    // x is longitude, so the position serialises as [lon, lat].
    let point = Point::new(lon, lat);

    Ok(Feature {
        bbox: None,
        geometry: Some(Geometry::new(geojson::Value::from(&point))),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    })
}

/// Transform every record after the header. Skip diagnostics are written to
/// `report` as rows are processed.
pub fn build_features<R: Read, W: Write>(
    rdr: &mut csv::Reader<R>,
    headers: &[String],
    columns: &CoordinateColumns,
    config: &Config,
    report: &mut W,
) -> Result<(Vec<Feature>, usize)> {
    let index = header_index(headers);
    let mut features = Vec::new();
    let mut skipped = 0;

    for (i, result) in rdr.records().enumerate() {
        let ordinal = i + 1;
        let record = result?;
        let row = Row::new(&index, &record);

        match build_feature(&row, ordinal, headers, columns, config) {
            Ok(feature) => features.push(feature),
            Err(skip) => {
                skipped += 1;
                debug!("Row {} has no usable coordinates", ordinal);
                writeln!(report, "{}", skip)?;
            }
        }

        if ordinal % 1000 == 0 {
            info!("Processed {} rows", ordinal);
        }
    }

    Ok((features, skipped))
}

/// Serialise all features to `output_path`, replacing any existing file.
pub fn write_feature_collection(features: Vec<Feature>, output_path: &Path) -> Result<()> {
    info!("Writing {} features to {}", features.len(), output_path.display());

    let feature_collection = FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    };

    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, &feature_collection)?;
    writer.flush()?;
    writer.get_ref().sync_all()?;

    Ok(())
}

/// Convert `input_path` into the configured output file.
pub fn convert_file<W: Write>(
    input_path: &Path,
    config: &Config,
    report: &mut W,
) -> Result<ConversionSummary> {
    info!("Loading file: {}", input_path.display());
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(input_path)?;

    let headers = read_headers(&mut rdr)?;
    if headers.is_empty() {
        return Err(ConvertError::NoHeaders {
            path: input_path.to_path_buf(),
        });
    }
    debug!("Found {} headers", headers.len());

    let columns = resolve_coordinate_columns(&headers, config)?;
    let (features, skipped) = build_features(&mut rdr, &headers, &columns, config, report)?;
    drop(rdr);

    let feature_count = features.len();
    write_feature_collection(features, &config.output_path)?;

    Ok(ConversionSummary {
        input_path: input_path.to_path_buf(),
        output_path: config.output_path.clone(),
        features: feature_count,
        skipped,
    })
}
