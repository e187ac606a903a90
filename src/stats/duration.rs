use std::time::Instant;

use crate::data::model::TripTable;

use super::{finish_section, NO_DATA};

/// Trip-duration aggregates over the filtered table.
#[derive(Debug, PartialEq)]
pub struct DurationStats {
    /// Sum of whole seconds across all rows, missing values counted as 0.
    pub total_secs: i64,
    /// `total_secs / row count`; `None` on an empty table.
    pub mean_secs: Option<f64>,
}

/// Runs unconditionally, even on an empty table.
///
/// A missing `Trip Duration` counts as 0 seconds: the row still contributes
/// to the divisor, so frequent missingness drags the mean down.
pub fn compute(table: &TripTable) -> DurationStats {
    let total_secs: i64 = table
        .trips
        .iter()
        .map(|t| t.duration_secs.unwrap_or(0.0) as i64)
        .sum();

    let mean_secs = if table.is_empty() {
        None
    } else {
        Some(total_secs as f64 / table.len() as f64)
    };

    DurationStats {
        total_secs,
        mean_secs,
    }
}

pub fn report(table: &TripTable) {
    println!("\nCalculating Trip Duration...\n");
    let started = Instant::now();

    let stats = compute(table);
    println!(
        "Total travel time: {} seconds -- {:.2} hours",
        stats.total_secs,
        stats.total_secs as f64 / 3600.0
    );
    match stats.mean_secs {
        Some(mean) => println!(
            "Mean travel time: {:.2} seconds -- {:.2} minutes",
            mean,
            mean / 60.0
        ),
        None => println!("Mean travel time: {NO_DATA}"),
    }

    finish_section(started);
}
