use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDateTime, Timelike};
use log::info;
use thiserror::Error;

use super::filter::Filters;
use super::model::{self, City, RawTrip, Trip, TripTable};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Failures while reading a city dataset. All variants name the source file;
/// these are the only fatal conditions in normal operation.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("cannot read {}: {}", path.display(), source)]
    Open { path: PathBuf, source: csv::Error },

    #[error("{}: missing required column {column:?}", path.display())]
    MissingColumn { path: PathBuf, column: &'static str },

    #[error("{}: row {row}: {}", path.display(), source)]
    BadRow {
        path: PathBuf,
        row: usize,
        source: csv::Error,
    },

    #[error("{}: row {row}: unparseable Start Time {value:?}", path.display())]
    BadTimestamp {
        path: PathBuf,
        row: usize,
        value: String,
    },
}

/// Columns every city file must carry. `End Time`, `Gender`, and
/// `Birth Year` are optional and city-dependent.
pub const REQUIRED_COLUMNS: [&str; 5] = [
    model::COL_START_TIME,
    model::COL_TRIP_DURATION,
    model::COL_START_STATION,
    model::COL_END_STATION,
    model::COL_USER_TYPE,
];

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Load a city's trips from `data_dir`, derive the calendar columns from
/// `Start Time`, and keep only rows matching `filters`.
///
/// An empty result is valid (a filter combination may match nothing). The
/// table is rebuilt from the file on every call; identical inputs yield
/// identical tables with source order preserved.
pub fn load_data(data_dir: &Path, city: City, filters: &Filters) -> Result<TripTable, DataError> {
    let path = data_dir.join(city.file_name());

    let mut reader = csv::Reader::from_path(&path).map_err(|source| DataError::Open {
        path: path.clone(),
        source,
    })?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|source| DataError::Open {
            path: path.clone(),
            source,
        })?
        .iter()
        .map(str::to_string)
        .collect();

    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(DataError::MissingColumn {
                path: path.clone(),
                column,
            });
        }
    }

    let mut trips = Vec::new();
    let mut total = 0usize;

    for (row, result) in reader.deserialize::<RawTrip>().enumerate() {
        let raw = result.map_err(|source| DataError::BadRow {
            path: path.clone(),
            row,
            source,
        })?;
        total += 1;

        let start = parse_timestamp(&raw.start_time).ok_or_else(|| DataError::BadTimestamp {
            path: path.clone(),
            row,
            value: raw.start_time.clone(),
        })?;

        let trip = Trip {
            month: start.month(),
            weekday: start.weekday().num_days_from_monday(),
            hour: start.hour(),
            start,
            end_time: raw.end_time,
            duration_secs: raw.trip_duration,
            start_station: raw.start_station,
            end_station: raw.end_station,
            user_type: raw.user_type,
            gender: raw.gender,
            birth_year: raw.birth_year.map(|y| y as i32),
        };

        if filters.matches(&trip) {
            trips.push(trip);
        }
    }

    info!(
        "{}: {} trips read, {} match {}",
        path.display(),
        total,
        trips.len(),
        filters
    );

    Ok(TripTable {
        city,
        trips,
        columns: headers,
    })
}

/// Parse a source timestamp. Seconds are optional in some exports.
fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    const FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"];
    let s = s.trim();
    FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}
