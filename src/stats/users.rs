use std::time::Instant;

use crate::data::model::{TripTable, COL_BIRTH_YEAR, COL_GENDER};

use super::{finish_section, mode, value_counts, NO_DATA};

/// User demographics over the filtered table.
#[derive(Debug, PartialEq, Eq)]
pub struct UserStats {
    /// Distinct `User Type` values, descending count, ascending name on ties.
    pub user_types: Vec<(String, usize)>,
    /// `None` when the schema has no `Gender` column.
    pub genders: Option<Vec<(String, usize)>>,
    pub earliest_birth_year: i32,
    pub most_recent_birth_year: i32,
    pub most_common_birth_year: i32,
}

/// `None` when the table is empty or every `Birth Year` value is missing.
/// The schema-level check (no `Birth Year` column at all, e.g. Washington)
/// belongs to the caller — that condition is reported differently.
pub fn compute(table: &TripTable) -> Option<UserStats> {
    let years: Vec<i32> = table.trips.iter().filter_map(|t| t.birth_year).collect();
    if years.is_empty() {
        return None;
    }

    let user_types = value_counts(table.trips.iter().filter_map(|t| t.user_type.clone()));
    let genders = table
        .has_column(COL_GENDER)
        .then(|| value_counts(table.trips.iter().filter_map(|t| t.gender.clone())));

    Some(UserStats {
        user_types,
        genders,
        earliest_birth_year: years.iter().copied().min()?,
        most_recent_birth_year: years.iter().copied().max()?,
        most_common_birth_year: mode(years)?,
    })
}

pub fn report(table: &TripTable) {
    println!("\nCalculating User Stats on the bikeshare users...\n");
    let started = Instant::now();

    // Expected for Washington, which ships no demographic columns.
    if !table.has_column(COL_BIRTH_YEAR) {
        println!("The {COL_BIRTH_YEAR:?} column does not exist in this dataset; user demographics are unavailable.");
        finish_section(started);
        return;
    }

    match compute(table) {
        Some(stats) => {
            println!("User Types:");
            for (value, count) in &stats.user_types {
                println!("  {value}: {count}");
            }
            if let Some(genders) = &stats.genders {
                println!("\nGender:");
                for (value, count) in genders {
                    println!("  {value}: {count}");
                }
            }
            println!("\nEarliest Birth Year: {}", stats.earliest_birth_year);
            println!("Most Recent Birth Year: {}", stats.most_recent_birth_year);
            println!("Most Common Birth Year: {}", stats.most_common_birth_year);
        }
        None => println!("{NO_DATA}"),
    }

    finish_section(started);
}
