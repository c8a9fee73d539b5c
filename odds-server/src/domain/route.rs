//! Route edges and paths.
//!
//! A `RouteRecord` is a row as handed over by a route store, with plain
//! strings. A `RouteEdge` is the validated form, and a `RoutePath` is a
//! connected, non-empty sequence of edges.

use std::fmt;

use super::{DomainError, Location, UnknownLocation};

/// An unvalidated route as read from storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRecord {
    pub origin: String,
    pub destination: String,
    pub travel_time: i64,
}

impl RouteRecord {
    /// Create a record from its raw fields.
    pub fn new(origin: impl Into<String>, destination: impl Into<String>, travel_time: i64) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            travel_time,
        }
    }
}

/// Why a record could not become an edge.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EdgeError {
    #[error(transparent)]
    UnknownLocation(#[from] UnknownLocation),

    #[error(transparent)]
    Invalid(#[from] DomainError),
}

/// A directed route between two locations, taking `travel_time` days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RouteEdge {
    pub origin: Location,
    pub destination: Location,
    pub travel_time: u32,
}

impl RouteEdge {
    /// Create an edge. Travel time must be at least one day.
    pub fn new(
        origin: Location,
        destination: Location,
        travel_time: u32,
    ) -> Result<Self, DomainError> {
        if travel_time == 0 {
            return Err(DomainError::InvalidTravelTime {
                origin,
                destination,
                travel_time: 0,
            });
        }

        Ok(Self {
            origin,
            destination,
            travel_time,
        })
    }

    /// Validate a stored record.
    pub fn from_record(record: &RouteRecord) -> Result<Self, EdgeError> {
        let origin = Location::parse(&record.origin)?;
        let destination = Location::parse(&record.destination)?;
        let travel_time =
            u32::try_from(record.travel_time).map_err(|_| DomainError::InvalidTravelTime {
                origin,
                destination,
                travel_time: record.travel_time,
            })?;

        Ok(Self::new(origin, destination, travel_time)?)
    }
}

impl fmt::Display for RouteEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} ({}d)",
            self.origin, self.destination, self.travel_time
        )
    }
}

/// A connected sequence of route edges.
///
/// # Invariants
///
/// - At least one edge
/// - Consecutive edges connect (destination of one = origin of next)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePath {
    edges: Vec<RouteEdge>,
}

impl RoutePath {
    /// Constructs a path from edges.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the list is empty or consecutive edges don't connect.
    ///
    /// # Examples
    ///
    /// ```
    /// use odds_server::domain::{Location, RouteEdge, RoutePath};
    ///
    /// let path = RoutePath::new(vec![
    ///     RouteEdge::new(Location::Tatooine, Location::Hoth, 6).unwrap(),
    ///     RouteEdge::new(Location::Hoth, Location::Endor, 1).unwrap(),
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(path.origin(), Location::Tatooine);
    /// assert_eq!(path.destination(), Location::Endor);
    /// ```
    pub fn new(edges: Vec<RouteEdge>) -> Result<Self, DomainError> {
        if edges.is_empty() {
            return Err(DomainError::EmptyPath);
        }

        for window in edges.windows(2) {
            if window[0].destination != window[1].origin {
                return Err(DomainError::EdgesNotConnected(
                    window[0].destination,
                    window[1].origin,
                ));
            }
        }

        Ok(Self { edges })
    }

    /// The edges in travel order.
    pub fn edges(&self) -> &[RouteEdge] {
        &self.edges
    }

    /// Number of edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Always false: paths hold at least one edge.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Location the path starts from.
    pub fn origin(&self) -> Location {
        self.edges[0].origin
    }

    /// Location the path ends at.
    pub fn destination(&self) -> Location {
        self.edges[self.edges.len() - 1].destination
    }

    /// Every location along the path: the origin, then each edge's destination.
    pub fn locations(&self) -> impl Iterator<Item = Location> + '_ {
        std::iter::once(self.origin()).chain(self.edges.iter().map(|e| e.destination))
    }
}

impl fmt::Display for RoutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.locations().map(|l| l.as_str()).collect();
        f.write_str(&names.join(" -> "))
    }
}
