use std::str::FromStr;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{
    CycleLength, DAYS_BEFORE_OVULATION, DayStatus, FERTILE_WINDOW_DAYS, LUTEAL_PHASE_DAYS, ParseError,
    RANGE_SEPARATOR, parse_iso_date, prelude::*,
};

/// The estimated fertile days of one cycle (inclusive on both ends).
/// The end date is the ovulation day and the window always spans six calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{start}/{end}")]
pub struct FertileWindow {
    start: NaiveDate,
    end:   NaiveDate,
}

/// Error type for fertile window operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WindowError {
    /// Start and end are not exactly one fertile window apart.
    #[error("Invalid fertile window: {start}/{end} does not span {days} days", days = FERTILE_WINDOW_DAYS)]
    InvalidSpan { start: NaiveDate, end: NaiveDate },

    /// Error parsing date component.
    #[error(transparent)]
    ParseError(#[from] ParseError),

    /// Invalid window format.
    #[error("Invalid window format: {0}")]
    InvalidFormat(String),
}

impl FertileWindow {
    /// Derives the window for a cycle starting on `cycle_start`.
    /// Returns `None` only if the dates would leave chrono's representable range.
    pub fn from_cycle(cycle_start: NaiveDate, length: CycleLength) -> Option<Self> {
        let end = cycle_start.checked_add_days(Days::new(u64::from(length.ovulation_offset())))?;
        Self::from_ovulation_day(end)
    }

    /// The window ending on the given ovulation day.
    pub fn from_ovulation_day(ovulation_day: NaiveDate) -> Option<Self> {
        let start = ovulation_day.checked_sub_days(Days::new(u64::from(DAYS_BEFORE_OVULATION)))?;
        Some(Self {
            start,
            end: ovulation_day,
        })
    }

    /// Rebuilds a window from stored bounds.
    ///
    /// # Errors
    /// Returns `WindowError::InvalidSpan` unless `end` is exactly
    /// `DAYS_BEFORE_OVULATION` days after `start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, WindowError> {
        if end.signed_duration_since(start).num_days() != i64::from(DAYS_BEFORE_OVULATION) {
            return Err(WindowError::InvalidSpan { start, end });
        }
        Ok(Self { start, end })
    }

    /// First fertile day
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last fertile day, which is also the ovulation day
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    pub const fn ovulation_day(&self) -> NaiveDate {
        self.end
    }

    /// Returns both start and end dates as a tuple
    pub const fn dates(&self) -> (NaiveDate, NaiveDate) {
        (self.start, self.end)
    }

    /// Expected start of the following cycle: ovulation plus the luteal phase.
    pub fn expected_next_period(&self) -> Option<NaiveDate> {
        self.end.checked_add_days(Days::new(u64::from(LUTEAL_PHASE_DAYS)))
    }

    /// Number of calendar days covered, ovulation day included
    pub fn len_days(&self) -> i64 {
        self.end.signed_duration_since(self.start).num_days() + 1
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Checks if this window shares at least one day with another window
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Iterates over every fertile day in order
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        self.start.iter_days().take(usize::from(FERTILE_WINDOW_DAYS))
    }

    /// Classifies `date` for calendar highlighting.
    pub fn status_of(&self, date: NaiveDate) -> DayStatus {
        if date == self.end {
            DayStatus::Ovulation
        } else if self.contains(date) {
            DayStatus::Fertile
        } else {
            DayStatus::Outside
        }
    }
}

impl FromStr for FertileWindow {
    type Err = WindowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        let separator_count = trimmed.matches(RANGE_SEPARATOR).count();

        match separator_count {
            0 => Err(WindowError::InvalidFormat(format!(
                "No range separator found (expected '{RANGE_SEPARATOR}'): {s}"
            ))),
            1 => {
                let Some((start_str, end_str)) = trimmed.split_once(RANGE_SEPARATOR) else {
                    return Err(WindowError::InvalidFormat(s.to_owned()));
                };
                let start = parse_iso_date(start_str)?;
                let end = parse_iso_date(end_str)?;

                Self::new(start, end)
            },
            _ => Err(WindowError::InvalidFormat(format!(
                "Too many '{RANGE_SEPARATOR}' separators: expected 1, found {separator_count}"
            ))),
        }
    }
}

impl Serialize for FertileWindow {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for FertileWindow {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
