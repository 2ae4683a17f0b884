//! First-Wednesday anchor calculation.
//!
//! Pay periods are anchored to the first Wednesday on or after the 1st of
//! each calendar month. This module computes that anchor date.

use chrono::{Datelike, Days, NaiveDate};

/// Returns the first Wednesday on or after the 1st of the given month.
///
/// `month` is 1-indexed (January = 1), matching the chrono convention.
/// Weekday arithmetic uses the Sunday = 0 .. Saturday = 6 numbering: when
/// the 1st falls on Sunday through Wednesday the anchor is that week's
/// Wednesday, otherwise it is the following week's Wednesday. A month whose
/// 1st is itself a Wednesday anchors on the 1st.
///
/// Returns `None` when `(year, month)` does not form a valid date.
///
/// # Examples
///
/// ```
/// use income_engine::aggregation::first_wednesday;
/// use chrono::NaiveDate;
///
/// // April 1, 2025 is a Tuesday; the anchor is the next day.
/// assert_eq!(
///     first_wednesday(2025, 4),
///     Some(NaiveDate::from_ymd_opt(2025, 4, 2).unwrap())
/// );
///
/// // January 1, 2025 is a Wednesday; the anchor is the 1st itself.
/// assert_eq!(
///     first_wednesday(2025, 1),
///     Some(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap())
/// );
/// ```
pub fn first_wednesday(year: i32, month: u32) -> Option<NaiveDate> {
    let first_day = NaiveDate::from_ymd_opt(year, month, 1)?;
    let day_of_week = first_day.weekday().num_days_from_sunday();

    // Sunday(0) through Wednesday(3) land on this week's Wednesday;
    // Thursday(4) through Saturday(6) land on next week's.
    let offset = if day_of_week <= 3 {
        3 - day_of_week
    } else {
        10 - day_of_week
    };

    first_day.checked_add_days(Days::new(u64::from(offset)))
}
