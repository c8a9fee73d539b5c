//! Mission planner.
//!
//! This module answers: "given these routes and what the empire is doing,
//! what are the best odds of reaching the arrival before the deadline?"
//!
//! Every simple path from the departure to the arrival is simulated with a
//! fixed refuelling rule, once without waiting and once for each way of
//! spending spare days at a single location. The resulting itineraries are
//! ranked by odds and partitioned into a report.

mod config;
mod graph;
mod paths;
mod rank;
mod search;
mod simulate;


pub use config::{ConfigError, EngineConfig};
pub use graph::RouteGraph;
pub use paths::enumerate_paths;
pub use rank::{assemble_report, rank_evaluations};
pub use search::{Planner, RouteProvider, SearchError, evaluate_graph, evaluate_paths};
pub use simulate::{WaitStrategy, simulate};
