//! Location registry.

use std::fmt;
use std::str::FromStr;

/// Error returned when resolving a name outside the supported locations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("location \"{name}\" does not exist")]
pub struct UnknownLocation {
    name: String,
}

impl UnknownLocation {
    /// The name that failed to resolve.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A location in the route graph.
///
/// Locations form a small closed catalogue. Any `Location` value is valid by
/// construction; names coming from outside are validated by [`Location::parse`].
///
/// # Examples
///
/// ```
/// use odds_server::domain::Location;
///
/// let hoth = Location::parse("Hoth").unwrap();
/// assert_eq!(hoth, Location::Hoth);
/// assert_eq!(hoth.as_str(), "Hoth");
///
/// // Names are matched exactly
/// assert!(Location::parse("hoth").is_err());
/// assert!(Location::parse("Alderaan").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Location {
    Tatooine,
    Dagobah,
    Endor,
    Hoth,
}

impl Location {
    /// Every supported location, in catalogue order.
    pub const ALL: [Location; 4] = [
        Location::Tatooine,
        Location::Dagobah,
        Location::Endor,
        Location::Hoth,
    ];

    /// Number of supported locations.
    pub const COUNT: usize = Self::ALL.len();

    /// Resolve a location from its name.
    pub fn parse(name: &str) -> Result<Self, UnknownLocation> {
        Self::ALL
            .into_iter()
            .find(|location| location.as_str() == name)
            .ok_or_else(|| UnknownLocation {
                name: name.to_string(),
            })
    }

    /// Returns the location name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Location::Tatooine => "Tatooine",
            Location::Dagobah => "Dagobah",
            Location::Endor => "Endor",
            Location::Hoth => "Hoth",
        }
    }

    /// Dense index of this location, in `0..Location::COUNT`.
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl FromStr for Location {
    type Err = UnknownLocation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
