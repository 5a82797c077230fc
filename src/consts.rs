/// Shortest supported cycle length in days (inclusive)
pub const MIN_CYCLE_LENGTH: u8 = 21;

/// Longest supported cycle length in days (inclusive)
pub const MAX_CYCLE_LENGTH: u8 = 35;

/// Cycle length assumed when a profile has none yet
pub const DEFAULT_CYCLE_LENGTH: u8 = 28;

/// Days between ovulation and the next period.
/// Treated as constant; an inherited heuristic, not a clinical measurement.
pub const LUTEAL_PHASE_DAYS: u8 = 14;

/// Fertile days counted before the ovulation day
pub const DAYS_BEFORE_OVULATION: u8 = 5;

/// Calendar days covered by a fertile window, ovulation day included
pub const FERTILE_WINDOW_DAYS: u8 = DAYS_BEFORE_OVULATION + 1;

/// ISO 8601 calendar date format
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Month-first calendar date format (legacy US format)
pub const MONTH_FIRST_DATE_FORMAT: &str = "%m/%d/%Y";

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Month-first format separator (legacy US format)
pub const MONTH_FIRST_SEPARATOR: char = '/';
/// Range separator (ISO 8601 interval format)
pub const RANGE_SEPARATOR: char = '/';
