//! Enumeration of simple route paths.
//!
//! Paths are expanded depth first from the start location. Each branch
//! carries the set of locations it already contains; edges leading back
//! into that set are not followed, so cyclic graphs terminate.

use tracing::trace;

use super::graph::RouteGraph;
use crate::domain::{Location, RouteEdge, RoutePath};

/// Locations already on the current branch.
#[derive(Debug, Clone, Copy, Default)]
struct Visited([bool; Location::COUNT]);

impl Visited {
    fn with(mut self, location: Location) -> Self {
        self.0[location.index()] = true;
        self
    }

    fn contains(&self, location: Location) -> bool {
        self.0[location.index()]
    }
}

/// Enumerate every maximal simple path leaving `start`.
///
/// A path is complete when its last location has no outgoing edge to a
/// location not already on the path. Paths come out in depth-first order,
/// following edges in the graph's input order. Returns an empty list when
/// `start` has no outgoing edge.
pub fn enumerate_paths(graph: &RouteGraph, start: Location) -> Vec<RoutePath> {
    let mut paths = Vec::new();
    let mut partial = Vec::new();

    extend(
        graph,
        start,
        Visited::default().with(start),
        &mut partial,
        &mut paths,
    );

    trace!(start = %start, paths = paths.len(), "enumerated route paths");
    paths
}

fn extend(
    graph: &RouteGraph,
    at: Location,
    visited: Visited,
    partial: &mut Vec<RouteEdge>,
    paths: &mut Vec<RoutePath>,
) {
    let mut extended = false;

    for edge in graph.outgoing(at) {
        if visited.contains(edge.destination) {
            continue;
        }
        extended = true;

        partial.push(*edge);
        extend(
            graph,
            edge.destination,
            visited.with(edge.destination),
            partial,
            paths,
        );
        partial.pop();
    }

    if !extended && !partial.is_empty() {
        // Edges were pushed by following the graph, so they always connect.
        if let Ok(path) = RoutePath::new(partial.clone()) {
            paths.push(path);
        }
    }
}
