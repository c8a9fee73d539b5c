//! Web layer for the mission odds engine.
//!
//! Provides HTTP endpoints for evaluating an intercepted empire plan.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
