//! Core data models for the income aggregation engine.
//!
//! This module contains all the domain models used throughout the engine.

mod income;
mod pay_period;
mod shift;

pub use income::{PeriodIncome, ShiftEarning};
pub use pay_period::PayPeriod;
pub use shift::Shift;
