//! Simulated itineraries and the report built from them.
//!
//! A `TravelEvaluation` is the outcome of walking one route path with one
//! wait strategy. It is assembled by an [`ItineraryBuilder`], which owns the
//! running clock so that positions can only move forward in time.

use std::fmt;

use super::{DomainError, Location, SightingSet, success_odds};

/// What happened at a travel position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StopKind {
    /// Departure or arrival after travelling an edge.
    Step,
    /// One-day stop to refill the tank.
    Refuel,
    /// Deliberate stop to let time pass.
    Wait,
}

/// A point in a simulated itinerary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TravelPosition {
    pub day: u32,
    pub location: Location,
    pub kind: StopKind,
    /// Whether the adversary is known to be here on this day.
    pub sighting: bool,
}

impl TravelPosition {
    pub fn is_refuel(&self) -> bool {
        self.kind == StopKind::Refuel
    }

    pub fn is_wait(&self) -> bool {
        self.kind == StopKind::Wait
    }
}

impl fmt::Display for TravelPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}", self.location, self.day)?;
        if self.sighting {
            f.write_str(":hunters")?;
        }
        match self.kind {
            StopKind::Step => {}
            StopKind::Refuel => f.write_str(":refuel")?,
            StopKind::Wait => f.write_str(":waiting")?,
        }
        f.write_str(")")
    }
}

/// One simulated itinerary along a route path.
///
/// # Invariants
///
/// - At least one position; the first is the departure at day 0
/// - Days never decrease from one position to the next
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TravelEvaluation {
    positions: Vec<TravelPosition>,
    deadline: u32,
}

impl TravelEvaluation {
    /// Positions in travel order.
    pub fn positions(&self) -> &[TravelPosition] {
        &self.positions
    }

    /// Day of the final position.
    pub fn total_days(&self) -> u32 {
        self.positions.last().map_or(0, |p| p.day)
    }

    /// Number of positions where the adversary is present.
    pub fn encounters(&self) -> usize {
        self.positions.iter().filter(|p| p.sighting).count()
    }

    /// Number of refuel stops.
    pub fn refuel_stops(&self) -> usize {
        self.positions.iter().filter(|p| p.is_refuel()).count()
    }

    /// Success odds as an integer percentage.
    pub fn odds(&self) -> u8 {
        success_odds(self.encounters(), self.total_days(), self.deadline)
    }
}

impl fmt::Display for TravelEvaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}% =>", self.odds())?;
        for (i, position) in self.positions.iter().enumerate() {
            if i > 0 {
                f.write_str(" ->")?;
            }
            write!(f, " {position}")?;
        }
        Ok(())
    }
}

/// Folds travel steps into a finished [`TravelEvaluation`].
///
/// The builder tracks the current day and location; each step appends a
/// position stamped with the sighting flag for that day and place. A step
/// that would push the day past `u32::MAX` fails and leaves the builder
/// unchanged.
#[derive(Debug)]
pub struct ItineraryBuilder<'a> {
    sightings: &'a SightingSet,
    deadline: u32,
    day: u32,
    location: Location,
    positions: Vec<TravelPosition>,
}

impl<'a> ItineraryBuilder<'a> {
    /// Start an itinerary at `departure` on day 0.
    pub fn depart(departure: Location, sightings: &'a SightingSet, deadline: u32) -> Self {
        let mut builder = Self {
            sightings,
            deadline,
            day: 0,
            location: departure,
            positions: Vec::new(),
        };
        builder.push(StopKind::Step);
        builder
    }

    /// Current location.
    pub fn location(&self) -> Location {
        self.location
    }

    /// Travel to `destination`, arriving `travel_time` days later.
    pub fn travel(&mut self, destination: Location, travel_time: u32) -> Result<(), DomainError> {
        self.day = self.advance(travel_time)?;
        self.location = destination;
        self.push(StopKind::Step);
        Ok(())
    }

    /// Spend one day refuelling at the current location.
    pub fn refuel(&mut self) -> Result<(), DomainError> {
        self.day = self.advance(1)?;
        self.push(StopKind::Refuel);
        Ok(())
    }

    /// Wait `extra_days` at the current location.
    pub fn wait(&mut self, extra_days: u32) -> Result<(), DomainError> {
        self.day = self.advance(extra_days)?;
        self.push(StopKind::Wait);
        Ok(())
    }

    /// Finish the itinerary.
    pub fn finish(self) -> TravelEvaluation {
        TravelEvaluation {
            positions: self.positions,
            deadline: self.deadline,
        }
    }

    fn advance(&self, days: u32) -> Result<u32, DomainError> {
        self.day
            .checked_add(days)
            .ok_or(DomainError::DayOverflow {
                location: self.location,
                day: self.day,
                days,
            })
    }

    fn push(&mut self, kind: StopKind) {
        self.positions.push(TravelPosition {
            day: self.day,
            location: self.location,
            kind,
            sighting: self.sightings.contains(self.location, self.day),
        });
    }
}

/// Aggregate over every evaluation of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TravelReport {
    /// Whether the best outcome arrives within the deadline.
    pub feasible: bool,

    /// Shortest itinerary, in days.
    pub min_days: u32,

    /// Longest itinerary, in days.
    pub max_days: u32,

    /// Longest itinerary among those with the best odds.
    pub best_days: u32,

    /// Highest odds over all evaluations.
    pub best_odds: u8,

    /// Evaluations at the best odds; `None` when infeasible.
    pub best_evaluations: Option<Vec<TravelEvaluation>>,

    /// Evaluations with non-zero odds below the best; `None` when infeasible.
    pub other_evaluations: Option<Vec<TravelEvaluation>>,

    /// Evaluations with zero odds, or every evaluation when infeasible.
    pub impossible_evaluations: Vec<TravelEvaluation>,
}
