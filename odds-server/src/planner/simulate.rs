//! Itinerary simulation along a single route path.
//!
//! The vehicle leaves with a full tank of `autonomy` days. Before each
//! edge is committed the simulator decides whether the arrival must be
//! followed by a one-day refuel: either the tank is exactly empty on
//! arrival, or there is a next edge and the fuel left after both edges
//! would not be positive. Refuelling refills the tank completely.

use crate::domain::{
    DomainError, EmpirePlan, ItineraryBuilder, Location, RoutePath, TravelEvaluation,
};

use super::config::EngineConfig;

/// A single wait: stay `extra_days` at `location` when passing through it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitStrategy {
    pub location: Location,
    pub extra_days: u32,
}

impl WaitStrategy {
    pub fn new(location: Location, extra_days: u32) -> Self {
        Self {
            location,
            extra_days,
        }
    }
}

/// Walk `path` and produce its itinerary.
///
/// The wait strategy, if any, is applied after the departure position and
/// after each edge has been processed (including any refuel), whenever the
/// current location matches. Fails with [`DomainError::DayOverflow`] when
/// the itinerary would run past the last representable day.
pub fn simulate(
    path: &RoutePath,
    config: &EngineConfig,
    plan: &EmpirePlan,
    wait: Option<WaitStrategy>,
) -> Result<TravelEvaluation, DomainError> {
    let autonomy = i64::from(config.autonomy);
    let mut fuel = autonomy;
    let mut itinerary = ItineraryBuilder::depart(path.origin(), &plan.sightings, plan.deadline);

    apply_wait(&mut itinerary, wait)?;

    let edges = path.edges();
    for (i, edge) in edges.iter().enumerate() {
        let travel = i64::from(edge.travel_time);
        let must_refuel = fuel - travel == 0
            || edges
                .get(i + 1)
                .is_some_and(|next| fuel - travel - i64::from(next.travel_time) <= 0);

        itinerary.travel(edge.destination, edge.travel_time)?;

        if must_refuel {
            itinerary.refuel()?;
            fuel = autonomy;
        } else {
            fuel -= travel;
        }

        apply_wait(&mut itinerary, wait)?;
    }

    Ok(itinerary.finish())
}

fn apply_wait(
    itinerary: &mut ItineraryBuilder<'_>,
    wait: Option<WaitStrategy>,
) -> Result<(), DomainError> {
    match wait {
        Some(wait) if wait.location == itinerary.location() => itinerary.wait(wait.extra_days),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RouteEdge, Sighting};

    fn path(edges: &[(Location, Location, u32)]) -> RoutePath {
        RoutePath::new(
            edges
                .iter()
                .map(|(o, d, t)| RouteEdge::new(*o, *d, *t).unwrap())
                .collect(),
        )
        .unwrap()
    }

    fn config(autonomy: u32) -> EngineConfig {
        EngineConfig::new(Location::Tatooine, Location::Endor, autonomy).unwrap()
    }

    fn hoth_plan(deadline: u32) -> EmpirePlan {
        EmpirePlan::new(
            deadline,
            [6, 7, 8].map(|day| Sighting::new(Location::Hoth, day)),
        )
    }

    fn days(evaluation: &TravelEvaluation) -> Vec<(Location, u32)> {
        evaluation
            .positions()
            .iter()
            .map(|p| (p.location, p.day))
            .collect()
    }

    #[test]
    fn exact_fuel_exhaustion_forces_refuel() {
        let path = path(&[
            (Location::Tatooine, Location::Hoth, 6),
            (Location::Hoth, Location::Endor, 1),
        ]);

        let evaluation = simulate(&path, &config(6), &hoth_plan(8), None).unwrap();
        let positions = evaluation.positions();

        assert_eq!(
            days(&evaluation),
            vec![
                (Location::Tatooine, 0),
                (Location::Hoth, 6),
                (Location::Hoth, 7),
                (Location::Endor, 8),
            ]
        );
        assert!(positions[2].is_refuel());
        assert_eq!(evaluation.encounters(), 2);
        assert_eq!(evaluation.odds(), 81);
    }

    #[test]
    fn no_refuel_when_fuel_suffices() {
        let path = path(&[
            (Location::Tatooine, Location::Dagobah, 6),
            (Location::Dagobah, Location::Hoth, 1),
            (Location::Hoth, Location::Endor, 1),
        ]);

        let evaluation = simulate(&path, &config(6), &hoth_plan(9), None).unwrap();

        assert_eq!(
            days(&evaluation),
            vec![
                (Location::Tatooine, 0),
                (Location::Dagobah, 6),
                (Location::Dagobah, 7),
                (Location::Hoth, 8),
                (Location::Endor, 9),
            ]
        );
        assert_eq!(evaluation.refuel_stops(), 1);
        assert_eq!(evaluation.odds(), 90);
    }

    #[test]
    fn look_ahead_refuels_before_short_tank() {
        // 3 + 3 would land with an empty tank, so refuel after the first edge.
        let path = path(&[
            (Location::Tatooine, Location::Dagobah, 3),
            (Location::Dagobah, Location::Endor, 3),
        ]);

        let evaluation = simulate(&path, &config(6), &EmpirePlan::new(20, []), None).unwrap();

        assert_eq!(
            days(&evaluation),
            vec![
                (Location::Tatooine, 0),
                (Location::Dagobah, 3),
                (Location::Dagobah, 4),
                (Location::Endor, 7),
            ]
        );
        assert!(evaluation.positions()[2].is_refuel());
    }

    #[test]
    fn last_edge_with_spare_fuel_needs_no_refuel() {
        let path = path(&[(Location::Tatooine, Location::Endor, 4)]);

        let evaluation = simulate(&path, &config(6), &EmpirePlan::new(20, []), None).unwrap();

        assert_eq!(evaluation.refuel_stops(), 0);
        assert_eq!(evaluation.total_days(), 4);
    }

    #[test]
    fn wait_at_origin() {
        let path = path(&[
            (Location::Tatooine, Location::Hoth, 6),
            (Location::Hoth, Location::Endor, 1),
        ]);
        let wait = WaitStrategy::new(Location::Tatooine, 2);

        let evaluation = simulate(&path, &config(6), &hoth_plan(10), Some(wait)).unwrap();
        let positions = evaluation.positions();

        assert_eq!(
            days(&evaluation),
            vec![
                (Location::Tatooine, 0),
                (Location::Tatooine, 2),
                (Location::Hoth, 8),
                (Location::Hoth, 9),
                (Location::Endor, 10),
            ]
        );
        assert!(positions[1].is_wait());
        assert!(positions[3].is_refuel());
        assert_eq!(evaluation.encounters(), 1);
        assert_eq!(evaluation.odds(), 90);
    }

    #[test]
    fn wait_comes_after_refuel() {
        let path = path(&[
            (Location::Tatooine, Location::Dagobah, 6),
            (Location::Dagobah, Location::Hoth, 1),
            (Location::Hoth, Location::Endor, 1),
        ]);
        let wait = WaitStrategy::new(Location::Dagobah, 1);

        let evaluation = simulate(&path, &config(6), &hoth_plan(10), Some(wait)).unwrap();
        let positions = evaluation.positions();

        assert_eq!(positions.len(), 6);
        assert!(positions[2].is_refuel());
        assert!(positions[3].is_wait());
        assert_eq!(positions[3].day, 8);
        assert_eq!(evaluation.total_days(), 10);
        assert_eq!(evaluation.odds(), 100);
    }

    #[test]
    fn day_overflow_is_an_error() {
        let path = path(&[
            (Location::Tatooine, Location::Hoth, u32::MAX - 1),
            (Location::Hoth, Location::Endor, 1),
        ]);

        let err = simulate(&path, &config(6), &EmpirePlan::new(10, []), None).unwrap_err();

        assert!(matches!(
            err,
            DomainError::DayOverflow {
                location: Location::Hoth,
                ..
            }
        ));
    }

    #[test]
    fn wait_at_unvisited_location_is_ignored() {
        let path = path(&[(Location::Tatooine, Location::Endor, 4)]);
        let wait = WaitStrategy::new(Location::Hoth, 3);

        let with_wait = simulate(&path, &config(6), &EmpirePlan::new(20, []), Some(wait)).unwrap();
        let without = simulate(&path, &config(6), &EmpirePlan::new(20, []), None).unwrap();

        assert_eq!(with_wait, without);
    }
}
