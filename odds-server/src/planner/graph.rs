//! Route graph: outgoing edges grouped by origin.

use crate::domain::{EdgeError, Location, RouteEdge, RouteRecord};

/// Adjacency lists indexed by origin location.
///
/// Edges from the same origin keep the order in which they were supplied,
/// which fixes the order of path enumeration.
#[derive(Debug, Clone)]
pub struct RouteGraph {
    outgoing: [Vec<RouteEdge>; Location::COUNT],
    edge_count: usize,
}

impl RouteGraph {
    /// Build a graph from validated edges.
    pub fn new(edges: impl IntoIterator<Item = RouteEdge>) -> Self {
        let mut outgoing: [Vec<RouteEdge>; Location::COUNT] = std::array::from_fn(|_| Vec::new());
        let mut edge_count = 0;

        for edge in edges {
            outgoing[edge.origin.index()].push(edge);
            edge_count += 1;
        }

        Self {
            outgoing,
            edge_count,
        }
    }

    /// Build a graph from stored records, validating each one.
    pub fn from_records(records: &[RouteRecord]) -> Result<Self, EdgeError> {
        let edges = records
            .iter()
            .map(RouteEdge::from_record)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(edges))
    }

    /// All edges leaving `from`, in input order.
    pub fn outgoing(&self, from: Location) -> &[RouteEdge] {
        &self.outgoing[from.index()]
    }

    /// Whether any edge ends at `location`.
    pub fn is_reachable(&self, location: Location) -> bool {
        self.outgoing
            .iter()
            .flatten()
            .any(|edge| edge.destination == location)
    }

    /// Total number of edges.
    pub fn len(&self) -> usize {
        self.edge_count
    }

    /// Returns true if the graph has no edges.
    pub fn is_empty(&self) -> bool {
        self.edge_count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_by_origin_in_input_order() {
        let graph = RouteGraph::from_records(&[
            RouteRecord::new("Tatooine", "Dagobah", 6),
            RouteRecord::new("Dagobah", "Endor", 4),
            RouteRecord::new("Tatooine", "Hoth", 6),
        ])
        .unwrap();

        let from_tatooine: Vec<_> = graph
            .outgoing(Location::Tatooine)
            .iter()
            .map(|e| e.destination)
            .collect();
        assert_eq!(from_tatooine, vec![Location::Dagobah, Location::Hoth]);
        assert_eq!(graph.outgoing(Location::Dagobah).len(), 1);
        assert!(graph.outgoing(Location::Endor).is_empty());
        assert_eq!(graph.len(), 3);
    }

    #[test]
    fn reachability() {
        let graph = RouteGraph::from_records(&[RouteRecord::new("Tatooine", "Hoth", 6)]).unwrap();

        assert!(graph.is_reachable(Location::Hoth));
        assert!(!graph.is_reachable(Location::Tatooine));
        assert!(!graph.is_reachable(Location::Endor));
    }

    #[test]
    fn unknown_location_fails() {
        let err = RouteGraph::from_records(&[RouteRecord::new("Tatooine", "Coruscant", 2)])
            .unwrap_err();
        assert!(matches!(err, EdgeError::UnknownLocation(_)));
    }

    #[test]
    fn empty_graph() {
        let graph = RouteGraph::new(Vec::new());
        assert!(graph.is_empty());
    }
}
