//! Income summary models.
//!
//! This module contains the [`ShiftEarning`] and [`PeriodIncome`] types that
//! capture the output of pay period aggregation: per-shift earnings line
//! items nested under per-period totals, suitable for direct rendering by a
//! presentation layer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::PayPeriod;

/// A single earnings line item for one shift within a pay period.
///
/// The `hours_worked` field is rounded to 2 decimal places for display;
/// period totals are accumulated from the unrounded duration so rounding
/// error never compounds across shifts.
///
/// # Example
///
/// ```
/// use income_engine::models::ShiftEarning;
/// use chrono::NaiveDate;
///
/// let earning = ShiftEarning {
///     shift_id: "shift-1".to_string(),
///     date: NaiveDate::from_ymd_opt(2025, 4, 13).unwrap(),
///     hours_worked: 3.0,
///     earnings: 90.0,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftEarning {
    /// The identifier of the source shift.
    pub shift_id: String,
    /// The calendar date of the shift's start.
    pub date: NaiveDate,
    /// Hours worked, rounded to 2 decimal places (display value).
    pub hours_worked: f64,
    /// Earnings for the shift at full precision (unrounded hours x rate).
    pub earnings: f64,
}

/// The income summary for one pay period.
///
/// Contains the period's date range, the earnings line items for every shift
/// assigned to it (in chronological processing order), and running totals
/// accumulated at full precision.
///
/// # Example
///
/// ```
/// use income_engine::models::{PayPeriod, PeriodIncome};
/// use chrono::NaiveDate;
///
/// let income = PeriodIncome {
///     period: PayPeriod {
///         start_date: NaiveDate::from_ymd_opt(2025, 4, 2).unwrap(),
///         end_date: NaiveDate::from_ymd_opt(2025, 4, 15).unwrap(),
///     },
///     shifts: vec![],
///     total_hours: 0.0,
///     total_earnings: 0.0,
/// };
/// assert_eq!(income.period.key(), "2025-04-02 - 2025-04-15");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodIncome {
    /// The pay period this summary covers.
    pub period: PayPeriod,
    /// Earnings line items for the shifts assigned to this period.
    pub shifts: Vec<ShiftEarning>,
    /// Sum of the contained shifts' unrounded durations in hours.
    pub total_hours: f64,
    /// Sum of the contained shifts' earnings at full precision.
    pub total_earnings: f64,
}
