//! Pay Period Income Aggregation Engine
//!
//! This crate groups time-stamped work shifts into fixed-length 14-day pay
//! periods anchored to the first Wednesday of each calendar month, and
//! produces per-period income summaries (total hours, total earnings) with
//! per-shift earnings detail.

#![warn(missing_docs)]

pub mod aggregation;
pub mod config;
pub mod error;
pub mod models;
