use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::Deserialize;
use thiserror::Error;

// ---------------------------------------------------------------------------
// City – one of the three supported datasets
// ---------------------------------------------------------------------------

/// A city with a bikeshare dataset. Each variant maps to a fixed CSV file
/// name resolved under the data directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

/// Unrecognized city key.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown city {0:?}: expected chicago, new york city, or washington")]
pub struct UnknownCity(pub String);

impl FromStr for City {
    type Err = UnknownCity;

    /// Case-insensitive match against the three known city names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        if key.eq_ignore_ascii_case("chicago") {
            Ok(City::Chicago)
        } else if key.eq_ignore_ascii_case("new york city") {
            Ok(City::NewYorkCity)
        } else if key.eq_ignore_ascii_case("washington") {
            Ok(City::Washington)
        } else {
            Err(UnknownCity(key.to_string()))
        }
    }
}

impl City {
    /// File name of this city's dataset, relative to the data directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            City::Chicago => "Chicago",
            City::NewYorkCity => "New York City",
            City::Washington => "Washington",
        };
        write!(f, "{name}")
    }
}

// ---------------------------------------------------------------------------
// Column names
// ---------------------------------------------------------------------------

pub const COL_START_TIME: &str = "Start Time";
pub const COL_END_TIME: &str = "End Time";
pub const COL_TRIP_DURATION: &str = "Trip Duration";
pub const COL_START_STATION: &str = "Start Station";
pub const COL_END_STATION: &str = "End Station";
pub const COL_USER_TYPE: &str = "User Type";
pub const COL_GENDER: &str = "Gender";
pub const COL_BIRTH_YEAR: &str = "Birth Year";

// ---------------------------------------------------------------------------
// RawTrip – one CSV record as it appears in the source file
// ---------------------------------------------------------------------------

/// One source row, before timestamp parsing and calendar derivation.
///
/// `Gender` and `Birth Year` exist only in the Chicago and New York City
/// files; `#[serde(default)]` makes an absent column deserialize as `None`.
/// Empty cells in present columns also become `None`. `Birth Year` is
/// float-formatted in the source (`"1992.0"`).
#[derive(Debug, Clone, Deserialize)]
pub struct RawTrip {
    #[serde(rename = "Start Time")]
    pub start_time: String,
    #[serde(rename = "End Time", default)]
    pub end_time: Option<String>,
    #[serde(rename = "Trip Duration", default)]
    pub trip_duration: Option<f64>,
    #[serde(rename = "Start Station")]
    pub start_station: String,
    #[serde(rename = "End Station")]
    pub end_station: String,
    #[serde(rename = "User Type", default)]
    pub user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    pub gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    pub birth_year: Option<f64>,
}

// ---------------------------------------------------------------------------
// Trip – one row of the working table
// ---------------------------------------------------------------------------

/// A parsed trip row with its derived calendar columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub start: NaiveDateTime,
    /// Kept verbatim from the source; only shown in raw-row output.
    pub end_time: Option<String>,
    /// Elapsed seconds; `None` when the source cell is empty.
    pub duration_secs: Option<f64>,
    pub start_station: String,
    pub end_station: String,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,
    /// Calendar month of `start`, 1–12.
    pub month: u32,
    /// Day of week of `start`, 0 = Monday .. 6 = Sunday.
    pub weekday: u32,
    /// Hour of day of `start`, 0–23.
    pub hour: u32,
}

// ---------------------------------------------------------------------------
// TripTable – the filtered working set
// ---------------------------------------------------------------------------

/// All trips for one city that passed the month/day filters, plus the source
/// header list. The headers let reporters tell a column that is absent from
/// the schema apart from one that is present but empty in every row.
#[derive(Debug, Clone)]
pub struct TripTable {
    pub city: City,
    pub trips: Vec<Trip>,
    pub columns: Vec<String>,
}

impl TripTable {
    /// Number of trips.
    pub fn len(&self) -> usize {
        self.trips.len()
    }

    /// Whether the filtered table has no rows.
    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    /// Whether the source schema contains the named column.
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_parse_is_case_insensitive() {
        assert_eq!("chicago".parse::<City>(), Ok(City::Chicago));
        assert_eq!("  New York City ".parse::<City>(), Ok(City::NewYorkCity));
        assert_eq!("WASHINGTON".parse::<City>(), Ok(City::Washington));
    }

    #[test]
    fn city_parse_rejects_unknown_keys() {
        assert_eq!(
            "atlantis".parse::<City>(),
            Err(UnknownCity("atlantis".to_string()))
        );
        assert!("new york".parse::<City>().is_err());
        assert!("".parse::<City>().is_err());
    }

    #[test]
    fn city_file_names() {
        assert_eq!(City::Chicago.file_name(), "chicago.csv");
        assert_eq!(City::NewYorkCity.file_name(), "new_york_city.csv");
        assert_eq!(City::Washington.file_name(), "washington.csv");
    }

    #[test]
    fn has_column_matches_exact_header() {
        let table = TripTable {
            city: City::Washington,
            trips: Vec::new(),
            columns: vec![COL_START_TIME.to_string(), COL_USER_TYPE.to_string()],
        };
        assert!(table.has_column(COL_START_TIME));
        assert!(!table.has_column(COL_BIRTH_YEAR));
        assert!(!table.has_column("start time"));
    }
}
