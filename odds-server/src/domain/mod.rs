//! Domain types for the mission odds engine.
//!
//! This module contains the core domain model: locations, routes, the
//! adversary plan, and simulated itineraries. Types enforce their
//! invariants at construction time, so code that receives them can trust
//! their validity.

mod error;
mod evaluation;
mod location;
mod odds;
mod plan;
mod route;

pub use error::DomainError;
pub use evaluation::{ItineraryBuilder, StopKind, TravelEvaluation, TravelPosition, TravelReport};
pub use location::{Location, UnknownLocation};
pub use odds::{CAPTURE_PROBABILITY, success_odds};
pub use plan::{EmpirePlan, Sighting, SightingSet};
pub use route::{EdgeError, RouteEdge, RoutePath, RouteRecord};
