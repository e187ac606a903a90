use std::time::Instant;

use crate::data::filter::{day_name, month_name};
use crate::data::model::TripTable;

use super::{finish_section, mode, NO_DATA};

/// Most frequent travel times over the filtered table.
#[derive(Debug, PartialEq, Eq)]
pub struct TimeStats {
    pub hour: u32,
    pub month: u32,
    pub weekday: u32,
}

/// `None` when the table is empty; no mode is computed in that case.
pub fn compute(table: &TripTable) -> Option<TimeStats> {
    if table.is_empty() {
        return None;
    }
    Some(TimeStats {
        hour: mode(table.trips.iter().map(|t| t.hour))?,
        month: mode(table.trips.iter().map(|t| t.month))?,
        weekday: mode(table.trips.iter().map(|t| t.weekday))?,
    })
}

pub fn report(table: &TripTable) {
    println!("\nCalculating Time Stats...\n");
    let started = Instant::now();

    match compute(table) {
        Some(stats) => {
            println!("Most Popular Hour: {}", stats.hour);
            println!("Most Popular Month: {}", month_name(stats.month));
            println!("Most Popular Day: {}", day_name(stats.weekday));
        }
        None => println!("{NO_DATA}"),
    }

    finish_section(started);
}
