//! Evaluation search.
//!
//! Runs the simulator over every route path to the arrival, crossed with
//! every single-location wait strategy that fits in the spare time before
//! the deadline, then ranks the results into a report.

use tracing::{debug, trace};

use crate::domain::{EmpirePlan, Location, RoutePath, RouteRecord, TravelEvaluation, TravelReport};
use crate::domain::{DomainError, EdgeError, UnknownLocation};

use super::config::EngineConfig;
use super::graph::RouteGraph;
use super::paths::enumerate_paths;
use super::rank::{assemble_report, rank_evaluations};
use super::simulate::{WaitStrategy, simulate};

/// Error from an evaluation run.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SearchError {
    /// A location name is not part of the catalogue
    #[error(transparent)]
    UnknownLocation(#[from] UnknownLocation),

    /// The graph cannot connect departure to arrival
    #[error("invalid route graph: {0}")]
    InvalidGraph(String),

    /// Paths were found, but none of them ends at the arrival
    #[error("no route path from {departure} ends at {arrival}")]
    EmptyCandidateSet {
        departure: Location,
        arrival: Location,
    },

    /// Failed to fetch routes
    #[error("failed to fetch routes: {0}")]
    RouteSource(String),
}

impl From<EdgeError> for SearchError {
    fn from(e: EdgeError) -> Self {
        match e {
            EdgeError::UnknownLocation(e) => SearchError::UnknownLocation(e),
            EdgeError::Invalid(e) => e.into(),
        }
    }
}

impl From<DomainError> for SearchError {
    fn from(e: DomainError) -> Self {
        SearchError::InvalidGraph(e.to_string())
    }
}

/// Trait for providing the route list.
///
/// This abstraction allows the planner to be tested with in-memory data.
pub trait RouteProvider: Send + Sync {
    /// Fetch every route. Called once per run.
    fn list(&self) -> Result<Vec<RouteRecord>, SearchError>;
}

/// Mission planner: fetches routes and evaluates a plan against them.
pub struct Planner<'a, P: RouteProvider + ?Sized> {
    provider: &'a P,
    config: &'a EngineConfig,
}

impl<'a, P: RouteProvider + ?Sized> Planner<'a, P> {
    /// Create a new planner.
    pub fn new(provider: &'a P, config: &'a EngineConfig) -> Self {
        Self { provider, config }
    }

    /// Evaluate the odds of reaching the arrival under `plan`.
    pub fn evaluate(&self, plan: &EmpirePlan) -> Result<TravelReport, SearchError> {
        let records = self.provider.list()?;
        let graph = RouteGraph::from_records(&records)?;

        evaluate_graph(&graph, self.config, plan)
    }
}

/// Evaluate `plan` over an already-built graph.
pub fn evaluate_graph(
    graph: &RouteGraph,
    config: &EngineConfig,
    plan: &EmpirePlan,
) -> Result<TravelReport, SearchError> {
    let paths = candidate_paths(graph, config)?;
    let evaluations = evaluate_paths(&paths, config, plan)?;

    debug!(
        paths = paths.len(),
        evaluations = evaluations.len(),
        deadline = plan.deadline,
        "evaluated route paths"
    );

    let ranked = rank_evaluations(evaluations);
    for evaluation in &ranked {
        trace!(%evaluation, "ranked evaluation");
    }

    let report = assemble_report(ranked, plan.deadline).ok_or(SearchError::EmptyCandidateSet {
        departure: config.departure,
        arrival: config.arrival,
    })?;
    debug!(
        feasible = report.feasible,
        best_odds = report.best_odds,
        best_days = report.best_days,
        "travel report assembled"
    );

    Ok(report)
}

/// Every enumerated path from the departure that ends at the arrival.
fn candidate_paths(
    graph: &RouteGraph,
    config: &EngineConfig,
) -> Result<Vec<RoutePath>, SearchError> {
    if graph.outgoing(config.departure).is_empty() {
        return Err(SearchError::InvalidGraph(format!(
            "no route leaves {}",
            config.departure
        )));
    }
    if !graph.is_reachable(config.arrival) {
        return Err(SearchError::InvalidGraph(format!(
            "no route leads to {}",
            config.arrival
        )));
    }

    let candidates: Vec<RoutePath> = enumerate_paths(graph, config.departure)
        .into_iter()
        .filter(|path| path.destination() == config.arrival)
        .collect();

    if candidates.is_empty() {
        return Err(SearchError::EmptyCandidateSet {
            departure: config.departure,
            arrival: config.arrival,
        });
    }

    Ok(candidates)
}

/// Simulate every (path, wait strategy) combination, in generation order.
///
/// For each path: the baseline without waiting, then, if the baseline
/// leaves spare days before the deadline, one wait of each size (largest
/// first) at each location along the path (origin first). Travel times too
/// large to count in days make the graph invalid.
pub fn evaluate_paths(
    paths: &[RoutePath],
    config: &EngineConfig,
    plan: &EmpirePlan,
) -> Result<Vec<TravelEvaluation>, SearchError> {
    let mut evaluations = Vec::new();

    for path in paths {
        let baseline = simulate(path, config, plan, None)?;
        let baseline_days = baseline.total_days();
        evaluations.push(baseline);

        if baseline_days >= plan.deadline {
            continue;
        }

        for spare_days in (1..=plan.deadline - baseline_days).rev() {
            for (i, edge) in path.edges().iter().enumerate() {
                if i == 0 {
                    let wait = WaitStrategy::new(edge.origin, spare_days);
                    evaluations.push(simulate(path, config, plan, Some(wait))?);
                }

                let wait = WaitStrategy::new(edge.destination, spare_days);
                evaluations.push(simulate(path, config, plan, Some(wait))?);
            }
        }
    }

    Ok(evaluations)
}
