//! Configuration loading and management for the income aggregation engine.
//!
//! This module provides functionality to load the payroll profile from a
//! YAML file: the profile name, currency, and the global hourly rate applied
//! uniformly to all shifts.
//!
//! # Example
//!
//! ```no_run
//! use income_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/payroll.yaml").unwrap();
//! println!("Hourly rate: {}", config.hourly_rate());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::PayrollProfile;
