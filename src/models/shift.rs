//! Shift model.
//!
//! This module defines the Shift struct representing a single time-stamped
//! work shift as supplied by the rostering data source.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Milliseconds in one hour, the divisor for duration arithmetic.
const MS_PER_HOUR: f64 = 3_600_000.0;

/// Represents a work shift with timing information.
///
/// Shifts are owned by the caller; the engine only requires an identifier
/// and the clock-in/clock-out instants. The invariant `end_time > start_time`
/// is the caller's responsibility — a degenerate (zero or negative duration)
/// shift is passed through arithmetically rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    /// Unique identifier for the shift.
    pub id: String,
    /// The employee the shift is rostered to, when known.
    #[serde(default)]
    pub employee_id: Option<String>,
    /// Free-form description of the shift (e.g., "Afternoon support duties").
    #[serde(default)]
    pub description: Option<String>,
    /// The clock-in instant of the shift.
    pub start_time: NaiveDateTime,
    /// The clock-out instant of the shift.
    pub end_time: NaiveDateTime,
}

impl Shift {
    /// Returns the shift duration in hours as a floating-point value.
    ///
    /// The duration is computed as `(end_time - start_time)` in milliseconds
    /// divided by 3,600,000. A shift whose `end_time` precedes its
    /// `start_time` yields a negative duration.
    ///
    /// # Examples
    ///
    /// ```
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
    /// assert_eq!(shift.duration_hours(), 3.0);
    /// ```
    pub fn duration_hours(&self) -> f64 {
        (self.end_time - self.start_time).num_milliseconds() as f64 / MS_PER_HOUR
    }

    /// Returns the calendar date of the shift's start.
    ///
    /// This is the date used for pay period assignment.
    pub fn start_date(&self) -> NaiveDate {
        self.start_time.date()
    }
}
