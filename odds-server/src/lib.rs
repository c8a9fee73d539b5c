//! Mission odds engine.
//!
//! Answers: "given the routes between planets, a ship that must stop to
//! refuel, and where the bounty hunters will be, what are the odds of
//! reaching the destination before the deadline?"

pub mod config;
pub mod domain;
pub mod logging;
pub mod planner;
pub mod routes;
pub mod web;
