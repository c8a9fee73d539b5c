//! Domain error types.
//!
//! These errors represent validation failures when assembling domain
//! values. They are distinct from store and IO errors.

use super::Location;

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Route path has no edges
    #[error("route path must have at least one edge")]
    EmptyPath,

    /// Consecutive edges don't share a location
    #[error("edges do not connect: {0} is not {1}")]
    EdgesNotConnected(Location, Location),

    /// A travel time outside the accepted range
    #[error("route {origin} -> {destination} has invalid travel time {travel_time}")]
    InvalidTravelTime {
        origin: Location,
        destination: Location,
        travel_time: i64,
    },

    /// The itinerary runs past the last representable day
    #[error("itinerary at {location} runs past day {day} by {days} days")]
    DayOverflow {
        location: Location,
        day: u32,
        days: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DomainError::EmptyPath;
        assert_eq!(err.to_string(), "route path must have at least one edge");

        let err = DomainError::EdgesNotConnected(Location::Hoth, Location::Dagobah);
        assert_eq!(err.to_string(), "edges do not connect: Hoth is not Dagobah");

        let err = DomainError::InvalidTravelTime {
            origin: Location::Tatooine,
            destination: Location::Hoth,
            travel_time: 0,
        };
        assert_eq!(
            err.to_string(),
            "route Tatooine -> Hoth has invalid travel time 0"
        );

        let err = DomainError::DayOverflow {
            location: Location::Hoth,
            day: 7,
            days: u32::MAX,
        };
        assert_eq!(
            err.to_string(),
            "itinerary at Hoth runs past day 7 by 4294967295 days"
        );
    }
}
