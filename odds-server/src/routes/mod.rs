//! Route graph providers.
//!
//! The planner reads routes through [`RouteProvider`](crate::planner::RouteProvider).
//! Routes normally come from a SQLite database; an in-memory provider is
//! available for tests and embedding.

mod error;
mod memory;
mod store;

pub use error::RouteStoreError;
pub use memory::StaticRoutes;
pub use store::SqliteRouteStore;
