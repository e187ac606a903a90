use crate::data::model::{self, Trip, TripTable};

/// Rows revealed per affirmative answer.
pub const PAGE_SIZE: usize = 5;

// ---------------------------------------------------------------------------
// RawDataPager – forward-only cursor over the filtered table
// ---------------------------------------------------------------------------

/// Reveals the filtered table in fixed-size row batches. The cursor only
/// moves forward, so pages never overlap and never replay rows. Once the
/// table is exhausted further requests yield empty pages, not errors.
pub struct RawDataPager<'a> {
    trips: &'a [Trip],
    cursor: usize,
}

impl<'a> RawDataPager<'a> {
    pub fn new(table: &'a TripTable) -> Self {
        Self {
            trips: &table.trips,
            cursor: 0,
        }
    }

    /// Index of the next row to be revealed.
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Advance by up to [`PAGE_SIZE`] rows; an empty slice once exhausted,
    /// the remainder when fewer rows are left.
    pub fn next_page(&mut self) -> &'a [Trip] {
        let start = self.cursor;
        let end = (start + PAGE_SIZE).min(self.trips.len());
        self.cursor = end;
        &self.trips[start..end]
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.trips.len()
    }
}

// ---------------------------------------------------------------------------
// Raw-row formatting
// ---------------------------------------------------------------------------

/// Print one raw row, one field per line. Fields the city's schema lacks
/// (or that are empty in the source) are skipped.
pub fn print_trip(row: usize, trip: &Trip) {
    println!("---- row {row} ----");
    println!("{}: {}", model::COL_START_TIME, trip.start);
    if let Some(end_time) = &trip.end_time {
        println!("{}: {}", model::COL_END_TIME, end_time);
    }
    if let Some(duration) = trip.duration_secs {
        println!("{}: {}", model::COL_TRIP_DURATION, duration);
    }
    println!("{}: {}", model::COL_START_STATION, trip.start_station);
    println!("{}: {}", model::COL_END_STATION, trip.end_station);
    if let Some(user_type) = &trip.user_type {
        println!("{}: {}", model::COL_USER_TYPE, user_type);
    }
    if let Some(gender) = &trip.gender {
        println!("{}: {}", model::COL_GENDER, gender);
    }
    if let Some(birth_year) = trip.birth_year {
        println!("{}: {}", model::COL_BIRTH_YEAR, birth_year);
    }
}
