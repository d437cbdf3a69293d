// File: ./src/schedule.rs
use crate::model::{DateKey, Event};
use std::collections::HashMap;
use std::fmt::Write;

/// In-memory schedule: one ordered event list per date.
///
/// Created empty at startup and owned by the presentation shell for the
/// process lifetime. Single-threaded, synchronous, nothing persisted.
#[derive(Debug, Default)]
pub struct ScheduleStore {
    days: HashMap<DateKey, Vec<Event>>,
}

impl ScheduleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an event to the given date, creating the day's list if this
    /// is its first event. No range checks, no duplicate detection: adding
    /// the same event twice stores it twice.
    pub fn block_time(
        &mut self,
        year: i32,
        month: i32,
        day: i32,
        start_hour: i32,
        end_hour: i32,
        name: &str,
    ) {
        self.days
            .entry(DateKey::new(year, month, day))
            .or_default()
            .push(Event::new(start_hour, end_hour, name));
    }

    /// Renders the day's schedule as text: a header line followed by one
    /// line per event in insertion order (never sorted by hour). A date
    /// that was never written gets a one-line "No schedule" message.
    pub fn view_schedule(&self, year: i32, month: i32, day: i32) -> String {
        match self.days.get(&DateKey::new(year, month, day)) {
            Some(events) => {
                let mut out = format!("Schedule for {}/{}/{}:\n", month, day, year);
                for event in events {
                    let _ = writeln!(
                        out,
                        "{}:00 - {}:00: {}",
                        event.start_hour, event.end_hour, event.name
                    );
                }
                out
            }
            None => format!("No schedule for {}/{}/{}", month, day, year),
        }
    }

    /// Removes the first event on the date whose start hour and name both
    /// match exactly (case-sensitive). At most one event is removed; a
    /// missing date or no match is a silent no-op.
    ///
    /// Deleting the last event keeps the date mapped to an empty list, so
    /// `view_schedule` then shows the header with no event lines rather
    /// than the "No schedule" message. Inherited behavior, kept on purpose.
    pub fn delete_event(&mut self, year: i32, month: i32, day: i32, start_hour: i32, name: &str) {
        if let Some(events) = self.days.get_mut(&DateKey::new(year, month, day))
            && let Some(pos) = events
                .iter()
                .position(|e| e.start_hour == start_hour && e.name == name)
        {
            events.remove(pos);
        }
    }

    /// Adds `frequency` copies of the event on consecutive day values
    /// starting at `day`. Day values are not rolled over into the next
    /// month; day 30 of a 28-day month is stored verbatim as day 30.
    /// A zero or negative frequency adds nothing.
    pub fn add_recurring_event(
        &mut self,
        year: i32,
        month: i32,
        day: i32,
        start_hour: i32,
        end_hour: i32,
        name: &str,
        frequency: i32,
    ) {
        for i in 0..frequency {
            self.block_time(year, month, day + i, start_hour, end_hour, name);
        }
    }
}
