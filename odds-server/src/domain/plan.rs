//! Adversary plan: known sightings and the deadline.

use std::collections::HashSet;

use super::Location;

/// A known adversary presence at a location on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sighting {
    pub location: Location,
    pub day: u32,
}

impl Sighting {
    pub fn new(location: Location, day: u32) -> Self {
        Self { location, day }
    }
}

/// Set of sightings, queried by (location, day).
///
/// Duplicate sightings collapse: only presence matters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SightingSet {
    inner: HashSet<Sighting>,
}

impl SightingSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a sighting.
    pub fn insert(&mut self, sighting: Sighting) {
        self.inner.insert(sighting);
    }

    /// Whether an adversary is known to be at `location` on `day`.
    pub fn contains(&self, location: Location, day: u32) -> bool {
        self.inner.contains(&Sighting { location, day })
    }

    /// Number of distinct sightings.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if there are no sightings.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl FromIterator<Sighting> for SightingSet {
    fn from_iter<I: IntoIterator<Item = Sighting>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

/// The intercepted adversary plan for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmpirePlan {
    /// Last day on which arriving still counts.
    pub deadline: u32,

    /// Known sightings.
    pub sightings: SightingSet,
}

impl EmpirePlan {
    /// Create a plan from a deadline and sightings.
    pub fn new(deadline: u32, sightings: impl IntoIterator<Item = Sighting>) -> Self {
        Self {
            deadline,
            sightings: sightings.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_matches_location_and_day() {
        let plan = EmpirePlan::new(7, [Sighting::new(Location::Hoth, 6)]);

        assert!(plan.sightings.contains(Location::Hoth, 6));
        assert!(!plan.sightings.contains(Location::Hoth, 7));
        assert!(!plan.sightings.contains(Location::Endor, 6));
    }

    #[test]
    fn duplicates_collapse() {
        let set: SightingSet = [
            Sighting::new(Location::Hoth, 6),
            Sighting::new(Location::Hoth, 6),
            Sighting::new(Location::Hoth, 7),
        ]
        .into_iter()
        .collect();

        assert_eq!(set.len(), 2);
    }

    #[test]
    fn empty_plan() {
        let plan = EmpirePlan::new(0, []);
        assert!(plan.sightings.is_empty());
        assert_eq!(plan.deadline, 0);
    }
}
