use tracing::{debug, info};

use crate::config::Config;
use crate::error::{ConvertError, Result};

/// Actual header names of the coordinate columns in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoordinateColumns {
    pub latitude: String,
    pub longitude: String,
}

/// Return the actual header name matching the first alias, in alias order.
///
/// Exact spellings are tried first. Only if none of them is present is the
/// alias list walked again comparing case-insensitively, ignoring surrounding
/// whitespace.
pub fn pick_header(headers: &[String], aliases: &[String]) -> Option<String> {
    if let Some(alias) = aliases.iter().find(|a| headers.iter().any(|h| h == *a)) {
        return Some(alias.clone());
    }
    aliases.iter().find_map(|alias| {
        headers
            .iter()
            .find(|h| h.trim().eq_ignore_ascii_case(alias.trim()))
            .cloned()
    })
}

pub fn resolve_coordinate_columns(
    headers: &[String],
    config: &Config,
) -> Result<CoordinateColumns> {
    let latitude = pick_header(headers, &config.latitude_aliases);
    let longitude = pick_header(headers, &config.longitude_aliases);

    match (latitude, longitude) {
        (Some(latitude), Some(longitude)) => {
            info!("Using columns latitude={:?} longitude={:?}", latitude, longitude);
            Ok(CoordinateColumns { latitude, longitude })
        }
        (latitude, longitude) => {
            debug!("Coordinate columns unresolved among {} headers", headers.len());
            Err(ConvertError::MissingCoordinateColumns {
                latitude,
                longitude,
                headers: headers.to_vec(),
            })
        }
    }
}
