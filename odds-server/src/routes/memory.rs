//! In-memory route provider.

use crate::domain::RouteRecord;
use crate::planner::{RouteProvider, SearchError};

/// Fixed list of routes held in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticRoutes {
    records: Vec<RouteRecord>,
}

impl StaticRoutes {
    pub fn new(records: Vec<RouteRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<RouteRecord> for StaticRoutes {
    fn from_iter<I: IntoIterator<Item = RouteRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl RouteProvider for StaticRoutes {
    fn list(&self) -> Result<Vec<RouteRecord>, SearchError> {
        Ok(self.records.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_what_it_was_given() {
        let routes: StaticRoutes = [
            RouteRecord::new("Tatooine", "Hoth", 6),
            RouteRecord::new("Hoth", "Endor", 1),
        ]
        .into_iter()
        .collect();

        assert_eq!(routes.len(), 2);
        assert_eq!(routes.list().unwrap()[1], RouteRecord::new("Hoth", "Endor", 1));
    }

    #[test]
    fn empty() {
        let routes = StaticRoutes::default();
        assert!(routes.is_empty());
        assert!(routes.list().unwrap().is_empty());
    }
}
