use chrono::{DateTime, Utc};

/// Day-first date used in the tables.
pub fn format_day(dt: DateTime<Utc>) -> String {
    dt.format("%d/%m/%Y").to_string()
}
