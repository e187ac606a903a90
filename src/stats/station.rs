use std::time::Instant;

use crate::data::model::TripTable;

use super::{finish_section, mode, NO_DATA};

/// Most frequent stations and station pair over the filtered table.
///
/// `start` and `end` are independent modes; the pair is the most frequent
/// (start, end) combination by count and need not involve either of them.
#[derive(Debug, PartialEq, Eq)]
pub struct StationStats {
    pub start: String,
    pub end: String,
    pub trip: (String, String),
}

/// `None` when the table is empty.
pub fn compute(table: &TripTable) -> Option<StationStats> {
    if table.is_empty() {
        return None;
    }
    Some(StationStats {
        start: mode(table.trips.iter().map(|t| t.start_station.clone()))?,
        end: mode(table.trips.iter().map(|t| t.end_station.clone()))?,
        trip: mode(
            table
                .trips
                .iter()
                .map(|t| (t.start_station.clone(), t.end_station.clone())),
        )?,
    })
}

pub fn report(table: &TripTable) {
    println!("\nCalculating The Most Popular Stations and Trip...\n");
    let started = Instant::now();

    match compute(table) {
        Some(stats) => {
            println!("Popular Start Station: {}", stats.start);
            println!("Popular End Station: {}", stats.end);
            println!(
                "Combination of Start Station and End Station: {} -> {}",
                stats.trip.0, stats.trip.1
            );
        }
        None => println!("{NO_DATA}"),
    }

    finish_section(started);
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::data::model::{City, Trip};

    use super::*;

    fn trip(start_station: &str, end_station: &str) -> Trip {
        Trip {
            start: NaiveDate::from_ymd_opt(2017, 3, 6)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
            end_time: None,
            duration_secs: Some(300.0),
            start_station: start_station.to_string(),
            end_station: end_station.to_string(),
            user_type: Some("Subscriber".to_string()),
            gender: None,
            birth_year: None,
            month: 3,
            weekday: 0,
            hour: 9,
        }
    }

    fn table(trips: Vec<Trip>) -> TripTable {
        TripTable {
            city: City::Chicago,
            trips,
            columns: Vec::new(),
        }
    }

    #[test]
    fn empty_table_computes_nothing() {
        assert_eq!(compute(&table(Vec::new())), None);
    }

    #[test]
    fn start_end_and_pair_modes_are_independent() {
        // "Clark St" dominates starts, "State St" dominates ends, but the
        // single most frequent pair is Wells St -> Wells St.
        let stats = compute(&table(vec![
            trip("Clark St", "State St"),
            trip("Clark St", "Oak St"),
            trip("Clark St", "State St"),
            trip("Oak St", "State St"),
            trip("Wells St", "Wells St"),
            trip("Wells St", "Wells St"),
            trip("Wells St", "Wells St"),
            trip("Clark St", "Elm St"),
        ]))
        .unwrap();

        assert_eq!(stats.start, "Clark St");
        assert_eq!(stats.end, "State St");
        assert_eq!(
            stats.trip,
            ("Wells St".to_string(), "Wells St".to_string())
        );
    }

    #[test]
    fn ties_resolve_lexicographically() {
        let stats = compute(&table(vec![
            trip("B", "Z"),
            trip("A", "Y"),
        ]))
        .unwrap();

        assert_eq!(stats.start, "A");
        assert_eq!(stats.end, "Y");
        assert_eq!(stats.trip, ("A".to_string(), "Y".to_string()));
    }
}
