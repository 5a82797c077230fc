//! The per-user cycle settings as stored by the application.
//!
//! Edits are kept verbatim so a form can round-trip whatever the user typed;
//! validation happens when the profile is read.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    CycleLength, DEFAULT_CYCLE_LENGTH, DayStatus, FertileWindow, ParseError, compute_fertile_window,
};

/// Stored cycle settings: one row per user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct CycleProfile {
    cycle_length:     Option<i32>,
    last_period_date: Option<NaiveDate>,
}

/// Dashboard summary derived from a profile for a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CycleSummary {
    pub window:               FertileWindow,
    pub next_period:          NaiveDate,
    pub today_status:         DayStatus,
    /// Negative once the ovulation day has passed.
    pub days_until_ovulation: i64,
}

impl CycleProfile {
    pub const fn new(cycle_length: Option<i32>, last_period_date: Option<NaiveDate>) -> Self {
        Self {
            cycle_length,
            last_period_date,
        }
    }

    #[must_use]
    pub const fn with_cycle_length(mut self, days: i32) -> Self {
        self.cycle_length = Some(days);
        self
    }

    #[must_use]
    pub const fn with_last_period_date(mut self, date: NaiveDate) -> Self {
        self.last_period_date = Some(date);
        self
    }

    /// The stored cycle length, if the user has set one
    pub const fn cycle_length(&self) -> Option<i32> {
        self.cycle_length
    }

    pub const fn last_period_date(&self) -> Option<NaiveDate> {
        self.last_period_date
    }

    /// The stored cycle length, or `DEFAULT_CYCLE_LENGTH` when unset
    pub fn effective_cycle_length(&self) -> i32 {
        self.cycle_length.unwrap_or(i32::from(DEFAULT_CYCLE_LENGTH))
    }

    /// Validates the effective cycle length for form messaging.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidCycleLength` when the stored value is out of range.
    pub fn validated_cycle_length(&self) -> Result<CycleLength, ParseError> {
        CycleLength::new(self.effective_cycle_length())
    }

    /// The fertile window for the recorded cycle, if one can be estimated.
    pub fn fertile_window(&self) -> Option<FertileWindow> {
        let Some(last_period) = self.last_period_date else {
            debug!("no last period date recorded, fertile window unavailable");
            return None;
        };
        let cycle_length = self.effective_cycle_length();
        let window = compute_fertile_window(last_period, cycle_length);
        if window.is_none() {
            debug!(
                cycle_length,
                %last_period,
                "cycle inputs outside supported range, fertile window unavailable"
            );
        }
        window
    }

    /// Expected start of the next period: last period plus the cycle length.
    pub fn next_period_date(&self) -> Option<NaiveDate> {
        let last_period = self.last_period_date?;
        let length = self.validated_cycle_length().ok()?;
        last_period.checked_add_days(Days::new(u64::from(length.get())))
    }

    /// Figures shown on the dashboard summary cards for `today`.
    pub fn summary(&self, today: NaiveDate) -> Option<CycleSummary> {
        let window = self.fertile_window()?;
        let next_period = self.next_period_date()?;
        let summary = CycleSummary {
            window,
            next_period,
            today_status: window.status_of(today),
            days_until_ovulation: window.ovulation_day().signed_duration_since(today).num_days(),
        };
        debug!(%today, status = %summary.today_status, "computed cycle summary");
        Some(summary)
    }
}
