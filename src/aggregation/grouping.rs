//! Shift-to-pay-period grouping.
//!
//! This module implements the aggregation pass: shifts are sorted
//! chronologically, matched against their month's generated pay periods, and
//! accumulated into per-period income summaries.

use std::collections::HashMap;

use chrono::Datelike;
use tracing::warn;

use crate::models::{PayPeriod, PeriodIncome, Shift, ShiftEarning};

use super::periods::pay_periods_for_month;

/// Rounds a value to 2 decimal places for display.
fn round_display(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// In-progress accumulator for one pay period.
struct PeriodAccumulator {
    period: PayPeriod,
    shifts: Vec<ShiftEarning>,
    total_hours: f64,
    total_earnings: f64,
}

impl PeriodAccumulator {
    fn new(period: PayPeriod) -> Self {
        Self {
            period,
            shifts: Vec::new(),
            total_hours: 0.0,
            total_earnings: 0.0,
        }
    }

    fn add(&mut self, shift: &Shift, hourly_rate: f64) {
        let hours = shift.duration_hours();
        let earnings = hours * hourly_rate;

        self.shifts.push(ShiftEarning {
            shift_id: shift.id.clone(),
            date: shift.start_date(),
            hours_worked: round_display(hours),
            earnings,
        });

        // Totals accumulate the unrounded values; rounding only the per-shift
        // display field keeps the totals free of compounded rounding error.
        self.total_hours += hours;
        self.total_earnings += earnings;
    }

    fn finish(self) -> PeriodIncome {
        PeriodIncome {
            period: self.period,
            shifts: self.shifts,
            total_hours: self.total_hours,
            total_earnings: self.total_earnings,
        }
    }
}

/// Groups shifts into pay periods and computes per-period income summaries.
///
/// Shifts are processed in ascending `start_time` order (ties keep their
/// input order). Each shift is assigned to the first generated period of its
/// start month whose inclusive date range contains the shift's start date.
/// Because shifts are pre-sorted, periods are discovered in ascending
/// chronological order and the returned summaries are sorted by period start.
///
/// The single `hourly_rate` applies uniformly to every shift; per-employee or
/// per-period rates would be introduced as an explicit lookup parameter here.
///
/// A shift whose start date precedes its month's first anchor falls outside
/// every generated period for that month. Such shifts are skipped with a
/// warning diagnostic; there is no lookback into the previous month's
/// trailing period. Degenerate shifts (zero or negative duration) are passed
/// through arithmetically rather than rejected — validating shift integrity
/// is the caller's responsibility, and this function never fails.
///
/// # Examples
///
/// ```
/// use income_engine::aggregation::group_by_pay_period;
/// use income_engine::models::Shift;
/// use chrono::NaiveDateTime;
///
/// let shift = Shift {
///     id: "shift-1".to_string(),
///     employee_id: None,
///     description: None,
///     start_time: NaiveDateTime::parse_from_str("2025-04-13 20:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     end_time: NaiveDateTime::parse_from_str("2025-04-13 23:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
/// };
///
/// let summaries = group_by_pay_period(&[shift], 30.0);
/// assert_eq!(summaries.len(), 1);
/// assert_eq!(summaries[0].total_hours, 3.0);
/// assert_eq!(summaries[0].total_earnings, 90.0);
/// ```
pub fn group_by_pay_period(shifts: &[Shift], hourly_rate: f64) -> Vec<PeriodIncome> {
    if shifts.is_empty() {
        return Vec::new();
    }

    let mut ordered: Vec<&Shift> = shifts.iter().collect();
    // Stable sort: shifts sharing a start time keep their input order.
    ordered.sort_by_key(|shift| shift.start_time);

    // Period generation is cheap and idempotent; the cache only avoids
    // regenerating the same month for consecutive shifts.
    let mut period_cache: HashMap<(i32, u32), Vec<PayPeriod>> = HashMap::new();
    let mut groups: Vec<PeriodAccumulator> = Vec::new();

    for shift in ordered {
        let start_date = shift.start_date();
        let year = start_date.year();
        let month = start_date.month();

        let periods = period_cache
            .entry((year, month))
            .or_insert_with(|| pay_periods_for_month(year, month));

        let Some(period) = periods.iter().find(|p| p.contains_date(start_date)) else {
            // A start date before the month's first anchor matches no
            // generated period. The shift is dropped, never misassigned.
            warn!(
                shift_id = %shift.id,
                date = %start_date,
                "shift falls outside every pay period of its month; skipping"
            );
            continue;
        };

        let index = match groups.iter().position(|g| g.period == *period) {
            Some(index) => index,
            None => {
                groups.push(PeriodAccumulator::new(period.clone()));
                groups.len() - 1
            }
        };
        groups[index].add(shift, hourly_rate);
    }

    groups.into_iter().map(PeriodAccumulator::finish).collect()
}
