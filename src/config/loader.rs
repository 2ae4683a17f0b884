//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the payroll
//! profile from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::PayrollProfile;

/// Loads and provides access to the payroll profile.
///
/// # Example
///
/// ```no_run
/// use income_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/payroll.yaml")?;
/// let rate = loader.hourly_rate();
/// # Ok::<(), income_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    profile: PayrollProfile,
}

impl ConfigLoader {
    /// Loads the payroll profile from the specified YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the profile file (e.g., "./config/payroll.yaml")
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, contains invalid YAML, or
    /// holds an unusable hourly rate.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let profile: PayrollProfile =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        profile.validate()?;

        Ok(Self { profile })
    }

    /// Returns the loaded payroll profile.
    pub fn profile(&self) -> &PayrollProfile {
        &self.profile
    }

    /// Returns the global hourly rate.
    pub fn hourly_rate(&self) -> f64 {
        self.profile.hourly_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_path() -> &'static str {
        "./config/payroll.yaml"
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.profile().name, "Standard workforce payroll");
        assert_eq!(loader.profile().currency, "USD");
        assert_eq!(loader.hourly_rate(), 30.0);
    }

    #[test]
    fn test_load_missing_file_returns_error() {
        let result = ConfigLoader::load("/nonexistent/payroll.yaml");
        assert!(result.is_err());

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("payroll.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_parse_error_reports_path_and_message() {
        // Cargo.toml exists but is not a payroll profile.
        let result = ConfigLoader::load("./Cargo.toml");
        assert!(result.is_err());

        match result {
            Err(EngineError::ConfigParseError { path, message }) => {
                assert!(path.contains("Cargo.toml"));
                assert!(!message.is_empty());
            }
            other => panic!("Expected ConfigParseError, got {:?}", other.err()),
        }
    }
}
