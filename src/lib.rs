mod calendar;
mod consts;
mod prelude;
mod profile;
mod types;
mod window;

pub use calendar::{DayStatus, MonthView};
pub use consts::*;
pub use profile::{CycleProfile, CycleSummary};
pub use types::CycleLength;
pub use window::{FertileWindow, WindowError};

use crate::prelude::*;
use chrono::NaiveDate;
use chrono::format::ParseErrorKind;

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid calendar date: {_0}")]
    InvalidDate(String),
    #[display(
        fmt = "Cycle length must be between {} and {} days (got {})",
        MIN_CYCLE_LENGTH,
        MAX_CYCLE_LENGTH,
        "_0"
    )]
    InvalidCycleLength(i32),
    #[display(fmt = "Invalid month {year}-{month:02}")]
    InvalidMonth { year: i32, month: u32 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

/// Estimates the fertile window for a cycle that started on `cycle_start`.
///
/// Ovulation is placed `cycle_length_days - LUTEAL_PHASE_DAYS` days after the
/// cycle start and the window runs from `DAYS_BEFORE_OVULATION` days before
/// ovulation through the ovulation day itself, six calendar days in total.
///
/// Returns `None` when no start date is given or when the cycle length is
/// outside `MIN_CYCLE_LENGTH..=MAX_CYCLE_LENGTH`. Out-of-range input is an
/// expected outcome, so this never errors and never clamps.
///
/// ```
/// use chrono::NaiveDate;
/// use fertile_window::compute_fertile_window;
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let window = compute_fertile_window(start, 28).unwrap();
/// assert_eq!(window.to_string(), "2024-01-10/2024-01-15");
///
/// assert!(compute_fertile_window(start, 36).is_none());
/// assert!(compute_fertile_window(None, 28).is_none());
/// ```
pub fn compute_fertile_window(
    cycle_start: impl Into<Option<NaiveDate>>,
    cycle_length_days: i32,
) -> Option<FertileWindow> {
    let cycle_start = cycle_start.into()?;
    let length = CycleLength::new(cycle_length_days).ok()?;
    FertileWindow::from_cycle(cycle_start, length)
}

/// Parses a last-period date entered as `YYYY-MM-DD` or `MM/DD/YYYY`.
///
/// # Errors
/// Returns `ParseError::EmptyInput` for blank input, `ParseError::InvalidDate`
/// for a well-formed date that does not exist on the calendar, and
/// `ParseError::InvalidFormat` for anything else.
pub fn parse_cycle_start(s: &str) -> Result<NaiveDate, ParseError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    // Strictly enforce delimiters: DATE_SEPARATOR for ISO, MONTH_FIRST_SEPARATOR for month-first
    let has_hyphen = trimmed.contains(DATE_SEPARATOR);
    let has_slash = trimmed.contains(MONTH_FIRST_SEPARATOR);

    match (has_hyphen, has_slash) {
        (true, true) => Err(ParseError::InvalidFormat(format!(
            "Mixed delimiters ({DATE_SEPARATOR} and {MONTH_FIRST_SEPARATOR})"
        ))),
        (true, false) => parse_with_format(trimmed, DATE_FORMAT),
        (false, true) => parse_with_format(trimmed, MONTH_FIRST_DATE_FORMAT),
        (false, false) => Err(ParseError::InvalidFormat(trimmed.to_owned())),
    }
}

/// Parses a strict ISO 8601 calendar date, as used inside window intervals.
pub(crate) fn parse_iso_date(s: &str) -> Result<NaiveDate, ParseError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyInput);
    }
    parse_with_format(trimmed, DATE_FORMAT)
}

fn parse_with_format(s: &str, format: &str) -> Result<NaiveDate, ParseError> {
    NaiveDate::parse_from_str(s, format).map_err(|err| match err.kind() {
        ParseErrorKind::OutOfRange | ParseErrorKind::Impossible => {
            ParseError::InvalidDate(s.to_owned())
        }
        _ => ParseError::InvalidFormat(s.to_owned()),
    })
}
