//! Per-day classification used to highlight a calendar month.

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{FertileWindow, ParseError, prelude::*};

/// How a calendar day relates to the current fertile window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayStatus {
    #[default]
    #[display(fmt = "outside")]
    Outside,
    #[display(fmt = "fertile")]
    Fertile,
    #[display(fmt = "ovulation")]
    Ovulation,
}

impl DayStatus {
    /// Whether the day should be drawn as part of the fertile window
    pub const fn is_highlighted(self) -> bool {
        !matches!(self, Self::Outside)
    }
}

/// One calendar month with every day classified against an optional window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthView {
    first_day: NaiveDate,
    last_day:  NaiveDate,
    window:    Option<FertileWindow>,
}

impl MonthView {
    /// Builds the view for `year`-`month`.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the month is not in `1..=12` or
    /// the month falls outside chrono's representable range.
    pub fn new(year: i32, month: u32, window: Option<FertileWindow>) -> Result<Self, ParseError> {
        let invalid = || ParseError::InvalidMonth { year, month };
        let first_day = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
        let last_day = first_day
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .ok_or_else(invalid)?;

        Ok(Self {
            first_day,
            last_day,
            window,
        })
    }

    /// The view for the month containing `date`.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` for the final month chrono can represent.
    pub fn containing(date: NaiveDate, window: Option<FertileWindow>) -> Result<Self, ParseError> {
        Self::new(date.year(), date.month(), window)
    }

    pub const fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    pub const fn last_day(&self) -> NaiveDate {
        self.last_day
    }

    pub const fn window(&self) -> Option<FertileWindow> {
        self.window
    }

    /// Every day of the month paired with its status
    pub fn days(&self) -> impl Iterator<Item = (NaiveDate, DayStatus)> + use<> {
        let last_day = self.last_day;
        let window = self.window;
        self.first_day
            .iter_days()
            .take_while(move |day| *day <= last_day)
            .map(move |day| (day, window.map_or(DayStatus::Outside, |w| w.status_of(day))))
    }

    /// Days that should be highlighted, in calendar order
    pub fn highlighted(&self) -> Vec<NaiveDate> {
        self.days()
            .filter(|(_, status)| status.is_highlighted())
            .map(|(day, _)| day)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute_fertile_window;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_month_bounds() {
        struct TestCase {
            year:  i32,
            month: u32,
            days:  usize,
        }

        let cases = [
            TestCase { year: 2024, month: 1, days: 31 },
            TestCase { year: 2024, month: 2, days: 29 },
            TestCase { year: 2023, month: 2, days: 28 },
            TestCase { year: 1900, month: 2, days: 28 },
            TestCase { year: 2024, month: 4, days: 30 },
            TestCase { year: 2024, month: 12, days: 31 },
        ];

        for case in &cases {
            let view = MonthView::new(case.year, case.month, None).unwrap();
            assert_eq!(view.first_day(), date(case.year, case.month, 1));
            assert_eq!(
                view.days().count(),
                case.days,
                "{}-{:02} should have {} days",
                case.year,
                case.month,
                case.days
            );
        }
    }

    #[test]
    fn test_invalid_month() {
        assert!(matches!(
            MonthView::new(2024, 0, None),
            Err(ParseError::InvalidMonth { year: 2024, month: 0 })
        ));
        assert!(matches!(
            MonthView::new(2024, 13, None),
            Err(ParseError::InvalidMonth { year: 2024, month: 13 })
        ));
    }

    #[test]
    fn test_no_window_has_no_highlights() {
        let view = MonthView::new(2024, 1, None).unwrap();
        assert!(view.highlighted().is_empty());
        assert!(view.days().all(|(_, status)| status == DayStatus::Outside));
    }

    #[test]
    fn test_highlights_within_month() {
        let window = compute_fertile_window(date(2024, 1, 1), 28);
        let view = MonthView::new(2024, 1, window).unwrap();

        let highlighted = view.highlighted();
        assert_eq!(highlighted.len(), 6);
        assert_eq!(highlighted.first(), Some(&date(2024, 1, 10)));
        assert_eq!(highlighted.last(), Some(&date(2024, 1, 15)));

        let ovulation: Vec<NaiveDate> = view
            .days()
            .filter(|(_, status)| *status == DayStatus::Ovulation)
            .map(|(day, _)| day)
            .collect();
        assert_eq!(ovulation, vec![date(2024, 1, 15)]);
    }

    #[test]
    fn test_window_split_across_months() {
        // Dec 29 .. Jan 3
        let window = compute_fertile_window(date(2023, 12, 20), 28);

        let december = MonthView::new(2023, 12, window).unwrap();
        assert_eq!(
            december.highlighted(),
            vec![date(2023, 12, 29), date(2023, 12, 30), date(2023, 12, 31)]
        );

        let january = MonthView::containing(date(2024, 1, 20), window).unwrap();
        assert_eq!(
            january.highlighted(),
            vec![date(2024, 1, 1), date(2024, 1, 2), date(2024, 1, 3)]
        );
    }

    #[test]
    fn test_status_display_and_serde() {
        assert_eq!(DayStatus::Ovulation.to_string(), "ovulation");
        assert_eq!(serde_json::to_string(&DayStatus::Fertile).unwrap(), r#""fertile""#);
        let parsed: DayStatus = serde_json::from_str(r#""outside""#).unwrap();
        assert_eq!(parsed, DayStatus::Outside);
        assert!(!DayStatus::default().is_highlighted());
    }
}
