//! Pay period aggregation logic.
//!
//! This module contains the calendar calculations and the grouping algorithm
//! that partition shifts into 14-day pay periods: the first-Wednesday anchor
//! calculation, per-month period generation, and the aggregation of shifts
//! into per-period income summaries.

mod anchor;
mod grouping;
mod periods;

pub use anchor::first_wednesday;
pub use grouping::group_by_pay_period;
pub use periods::pay_periods_for_month;
