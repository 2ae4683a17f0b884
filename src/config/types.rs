//! Configuration type definitions.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The payroll profile applied during income aggregation.
///
/// Holds the single global hourly rate; rate differentiation per employee or
/// per period is out of scope for this profile and would be supplied to the
/// aggregator as an explicit lookup instead.
///
/// # Example
///
/// ```
/// use income_engine::config::PayrollProfile;
///
/// let profile = PayrollProfile {
///     name: "Standard workforce payroll".to_string(),
///     currency: "USD".to_string(),
///     hourly_rate: 30.0,
/// };
/// assert!(profile.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollProfile {
    /// Human-readable name of the profile.
    pub name: String,
    /// ISO currency code earnings are denominated in.
    pub currency: String,
    /// The hourly rate applied uniformly to all shifts.
    pub hourly_rate: f64,
}

impl PayrollProfile {
    /// Validates the profile, rejecting unusable hourly rates.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidHourlyRate`] when the rate is zero,
    /// negative, or not finite.
    pub fn validate(&self) -> EngineResult<()> {
        if !self.hourly_rate.is_finite() || self.hourly_rate <= 0.0 {
            return Err(EngineError::InvalidHourlyRate {
                rate: self.hourly_rate,
            });
        }
        Ok(())
    }
}
