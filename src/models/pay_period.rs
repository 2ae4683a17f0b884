//! Pay period model.
//!
//! This module contains the [`PayPeriod`] type: a fixed-length 14-day window
//! into which shifts are bucketed for income aggregation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Represents a pay period with its inclusive date range.
///
/// Pay periods are always 14 days long (`end_date = start_date + 13 days`)
/// and are anchored to the first Wednesday of a calendar month. A period
/// anchored late in a month can extend past month-end into the next month's
/// dates; the range is never trimmed.
///
/// # Example
///
/// ```
/// use income_engine::models::PayPeriod;
/// use chrono::NaiveDate;
///
/// let period = PayPeriod {
///     start_date: NaiveDate::from_ymd_opt(2025, 4, 2).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2025, 4, 15).unwrap(),
/// };
///
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2025, 4, 13).unwrap()));
/// assert_eq!(period.key(), "2025-04-02 - 2025-04-15");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The start date of the pay period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the pay period (inclusive).
    pub end_date: NaiveDate,
}

impl PayPeriod {
    /// Checks if a given date falls within this pay period.
    ///
    /// The check is inclusive of both start and end dates.
    ///
    /// # Example
    ///
    /// ```
    /// use income_engine::models::PayPeriod;
    /// use chrono::NaiveDate;
    ///
    /// let period = PayPeriod {
    ///     start_date: NaiveDate::from_ymd_opt(2025, 4, 2).unwrap(),
    ///     end_date: NaiveDate::from_ymd_opt(2025, 4, 15).unwrap(),
    /// };
    ///
    /// assert!(period.contains_date(NaiveDate::from_ymd_opt(2025, 4, 2).unwrap())); // start date
    /// assert!(period.contains_date(NaiveDate::from_ymd_opt(2025, 4, 10).unwrap())); // middle
    /// assert!(period.contains_date(NaiveDate::from_ymd_opt(2025, 4, 15).unwrap())); // end date
    /// assert!(!period.contains_date(NaiveDate::from_ymd_opt(2025, 4, 1).unwrap())); // before
    /// assert!(!period.contains_date(NaiveDate::from_ymd_opt(2025, 4, 16).unwrap())); // after
    /// ```
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Returns the stable key uniquely identifying this period.
    ///
    /// The key is derived from the period's date range and is used to group
    /// shifts belonging to the same period.
    pub fn key(&self) -> String {
        format!("{} - {}", self.start_date, self.end_date)
    }

    /// Returns the length of the period in days, counting both endpoints.
    pub fn length_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_pay_period() -> PayPeriod {
        PayPeriod {
            start_date: NaiveDate::from_ymd_opt(2025, 4, 2).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 4, 15).unwrap(),
        }
    }

    /// PP-001: contains_date within period
    #[test]
    fn test_contains_date_within_period() {
        let period = create_pay_period();
        let test_date = NaiveDate::from_ymd_opt(2025, 4, 10).unwrap();
        assert!(period.contains_date(test_date));
    }

    /// PP-002: contains_date outside period
    #[test]
    fn test_contains_date_outside_period() {
        let period = create_pay_period();
        let test_date = NaiveDate::from_ymd_opt(2025, 4, 16).unwrap();
        assert!(!period.contains_date(test_date));
    }

    #[test]
    fn test_contains_date_on_start_date() {
        let period = create_pay_period();
        assert!(period.contains_date(period.start_date));
    }

    #[test]
    fn test_contains_date_on_end_date() {
        let period = create_pay_period();
        assert!(period.contains_date(period.end_date));
    }

    #[test]
    fn test_contains_date_before_start() {
        let period = create_pay_period();
        let test_date = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
        assert!(!period.contains_date(test_date));
    }

    #[test]
    fn test_key_is_stable_date_range() {
        let period = create_pay_period();
        assert_eq!(period.key(), "2025-04-02 - 2025-04-15");
    }

    #[test]
    fn test_length_days_counts_both_endpoints() {
        let period = create_pay_period();
        assert_eq!(period.length_days(), 14);
    }

    #[test]
    fn test_period_spanning_month_boundary() {
        // A period anchored at the end of April runs into May untrimmed.
        let period = PayPeriod {
            start_date: NaiveDate::from_ymd_opt(2025, 4, 30).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 5, 13).unwrap(),
        };

        assert_eq!(period.length_days(), 14);
        assert!(period.contains_date(NaiveDate::from_ymd_opt(2025, 5, 1).unwrap()));
        assert!(period.contains_date(NaiveDate::from_ymd_opt(2025, 5, 13).unwrap()));
        assert!(!period.contains_date(NaiveDate::from_ymd_opt(2025, 5, 14).unwrap()));
    }

    #[test]
    fn test_serialize_pay_period() {
        let period = create_pay_period();
        let json = serde_json::to_string(&period).unwrap();
        assert!(json.contains("\"start_date\":\"2025-04-02\""));
        assert!(json.contains("\"end_date\":\"2025-04-15\""));
    }

    #[test]
    fn test_deserialize_pay_period() {
        let json = r#"{
            "start_date": "2025-04-02",
            "end_date": "2025-04-15"
        }"#;
        let period: PayPeriod = serde_json::from_str(json).unwrap();
        assert_eq!(
            period.start_date,
            NaiveDate::from_ymd_opt(2025, 4, 2).unwrap()
        );
        assert_eq!(
            period.end_date,
            NaiveDate::from_ymd_opt(2025, 4, 15).unwrap()
        );
    }
}
