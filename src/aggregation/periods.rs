//! Per-month pay period generation.
//!
//! Generates the sequence of 14-day pay periods for a calendar month,
//! starting at the first-Wednesday anchor and repeating every 14 days while
//! the period start still falls within the month.

use chrono::{Datelike, Days};

use crate::models::PayPeriod;

use super::anchor::first_wednesday;

/// Days added to a period start to reach its inclusive end date.
const PERIOD_END_OFFSET: u64 = 13;

/// Days between consecutive period starts.
const PERIOD_STRIDE: u64 = 14;

/// Generates the ordered pay periods for the given month.
///
/// `month` is 1-indexed (January = 1). Each period is exactly 14 days,
/// inclusive on both ends (`end_date = start_date + 13 days`). Generation
/// starts at the month's first-Wednesday anchor and continues every 14 days
/// while the candidate start date is still within the month; the final
/// period's end date may extend into the following month and is not trimmed.
/// Any month yields at most 3 periods.
///
/// Returns an empty vector when `(year, month)` does not form a valid date.
///
/// # Examples
///
/// ```
/// use income_engine::aggregation::pay_periods_for_month;
/// use chrono::NaiveDate;
///
/// let periods = pay_periods_for_month(2025, 4);
/// assert_eq!(periods.len(), 3);
/// assert_eq!(periods[0].start_date, NaiveDate::from_ymd_opt(2025, 4, 2).unwrap());
/// assert_eq!(periods[0].end_date, NaiveDate::from_ymd_opt(2025, 4, 15).unwrap());
/// // The last period spills into May.
/// assert_eq!(periods[2].end_date, NaiveDate::from_ymd_opt(2025, 5, 13).unwrap());
/// ```
pub fn pay_periods_for_month(year: i32, month: u32) -> Vec<PayPeriod> {
    let Some(anchor) = first_wednesday(year, month) else {
        return Vec::new();
    };

    let mut periods = Vec::new();
    let mut start = anchor;

    while start.month() == month {
        let Some(end) = start.checked_add_days(Days::new(PERIOD_END_OFFSET)) else {
            break;
        };
        periods.push(PayPeriod {
            start_date: start,
            end_date: end,
        });

        match start.checked_add_days(Days::new(PERIOD_STRIDE)) {
            Some(next) => start = next,
            None => break,
        }
    }

    periods
}
