// File: ./src/model/item.rs

/// A single time-blocked entry in the schedule.
///
/// There is no identity field: `(start_hour, name)` is what the delete
/// path matches on. Hours are stored as given, 0-23 expected but never
/// range-checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub start_hour: i32,
    pub end_hour: i32,
    pub name: String,
}

impl Event {
    pub fn new(start_hour: i32, end_hour: i32, name: &str) -> Self {
        Self {
            start_hour,
            end_hour,
            name: name.to_string(),
        }
    }
}

/// The (year, month, day) identifier a day's events are grouped under.
///
/// Value equality and hashing only; there is no calendar validation, so
/// month 13 or day 45 are accepted as distinct keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateKey {
    pub year: i32,
    pub month: i32,
    pub day: i32,
}

impl DateKey {
    pub fn new(year: i32, month: i32, day: i32) -> Self {
        Self { year, month, day }
    }
}
