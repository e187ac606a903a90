/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  chicago.csv / new_york_city.csv / washington.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse rows, derive month/weekday/hour → TripTable
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  month/day predicates applied during the load
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ TripTable │  Vec<Trip> + source header list
///   └──────────┘
/// ```
pub mod filter;
pub mod loader;
pub mod model;
