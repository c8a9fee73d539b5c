//! Engine configuration.

use crate::domain::Location;

/// Error from validating an engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The vehicle cannot travel at all.
    #[error("autonomy must be at least one day")]
    ZeroAutonomy,

    /// Departure and arrival are the same location.
    #[error("departure and arrival are both {0}")]
    SameEndpoints(Location),
}

/// Fixed parameters of one engine instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Where the journey starts.
    pub departure: Location,

    /// Where the journey must end.
    pub arrival: Location,

    /// Maximum consecutive travel days before a refuel is mandatory.
    pub autonomy: u32,
}

impl EngineConfig {
    /// Create a validated configuration.
    pub fn new(departure: Location, arrival: Location, autonomy: u32) -> Result<Self, ConfigError> {
        if autonomy == 0 {
            return Err(ConfigError::ZeroAutonomy);
        }
        if departure == arrival {
            return Err(ConfigError::SameEndpoints(departure));
        }

        Ok(Self {
            departure,
            arrival,
            autonomy,
        })
    }
}
