// File: ./src/model/parser.rs
// Turns raw form text into the integers the store expects
use anyhow::{Result, anyhow};

pub const FIELD_COUNT: usize = 7;

/// Display labels, in form order. Indexes match `FormInput::get`.
pub const FIELD_LABELS: [&str; FIELD_COUNT] = [
    "Year",
    "Month",
    "Day",
    "Start Hour",
    "End Hour",
    "Event Name",
    "Frequency",
];

/// The raw text captured from the entry form, exactly as typed.
///
/// Integer parsing happens here, at the boundary, so the store's contract
/// never has to deal with malformed text. The name field passes through
/// verbatim (case preserved, no trimming).
#[derive(Debug, Default, Clone)]
pub struct FormInput {
    pub year: String,
    pub month: String,
    pub day: String,
    pub start_hour: String,
    pub end_hour: String,
    pub name: String,
    pub frequency: String,
}

impl FormInput {
    pub fn get(&self, index: usize) -> &str {
        match index {
            0 => &self.year,
            1 => &self.month,
            2 => &self.day,
            3 => &self.start_hour,
            4 => &self.end_hour,
            5 => &self.name,
            _ => &self.frequency,
        }
    }

    pub fn get_mut(&mut self, index: usize) -> &mut String {
        match index {
            0 => &mut self.year,
            1 => &mut self.month,
            2 => &mut self.day,
            3 => &mut self.start_hour,
            4 => &mut self.end_hour,
            5 => &mut self.name,
            _ => &mut self.frequency,
        }
    }

    fn int_field(label: &str, raw: &str) -> Result<i32> {
        raw.parse::<i32>()
            .map_err(|_| anyhow!("{} must be a number (got {:?})", label, raw))
    }

    pub fn date(&self) -> Result<(i32, i32, i32)> {
        Ok((
            Self::int_field("Year", &self.year)?,
            Self::int_field("Month", &self.month)?,
            Self::int_field("Day", &self.day)?,
        ))
    }

    pub fn start_hour(&self) -> Result<i32> {
        Self::int_field("Start Hour", &self.start_hour)
    }

    pub fn hours(&self) -> Result<(i32, i32)> {
        Ok((
            self.start_hour()?,
            Self::int_field("End Hour", &self.end_hour)?,
        ))
    }

    pub fn frequency(&self) -> Result<i32> {
        Self::int_field("Frequency", &self.frequency)
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
