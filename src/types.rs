use crate::ParseError;
use crate::consts::{DEFAULT_CYCLE_LENGTH, LUTEAL_PHASE_DAYS, MAX_CYCLE_LENGTH, MIN_CYCLE_LENGTH};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;

/// A cycle length guaranteed to be in the range `MIN_CYCLE_LENGTH..=MAX_CYCLE_LENGTH` (21..=35)
/// Uses `NonZeroU8` internally, so 0 is never representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "u8")]
pub struct CycleLength(NonZeroU8);

impl CycleLength {
    const DEFAULT: Self = match NonZeroU8::new(DEFAULT_CYCLE_LENGTH) {
        Some(days) => Self(days),
        None => unreachable!(),
    };

    /// Creates a new `CycleLength`, validating that it lies in the supported range
    ///
    /// # Errors
    /// Returns `ParseError::InvalidCycleLength` if the value is below
    /// `MIN_CYCLE_LENGTH` or above `MAX_CYCLE_LENGTH`.
    pub fn new(value: i32) -> Result<Self, ParseError> {
        let days = u8::try_from(value).map_err(|_| ParseError::InvalidCycleLength(value))?;
        if !Self::is_supported(days) {
            return Err(ParseError::InvalidCycleLength(value));
        }
        let non_zero = NonZeroU8::new(days).ok_or(ParseError::InvalidCycleLength(value))?;
        Ok(Self(non_zero))
    }

    /// Whether `days` falls inside the supported range
    #[inline]
    pub const fn is_supported(days: u8) -> bool {
        days >= MIN_CYCLE_LENGTH && days <= MAX_CYCLE_LENGTH
    }

    /// Returns the cycle length in days
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Days from the cycle start to the estimated ovulation day.
    /// Always in `7..=21` because the luteal phase is fixed.
    #[inline]
    pub const fn ovulation_offset(self) -> u8 {
        self.0.get() - LUTEAL_PHASE_DAYS
    }
}

impl Default for CycleLength {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<i32> for CycleLength {
    type Error = ParseError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<u8> for CycleLength {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(i32::from(value))
    }
}

impl From<CycleLength> for u8 {
    fn from(length: CycleLength) -> Self {
        length.0.get()
    }
}

impl fmt::Display for CycleLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
