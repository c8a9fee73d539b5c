//! Data transfer objects for web responses.
//!
//! Requests carry an [`EmpirePlanFile`](crate::config::EmpirePlanFile)
//! document; responses are built here from the domain report.

use serde::{Deserialize, Serialize};

use crate::domain::{TravelEvaluation, TravelPosition, TravelReport};

/// Response for an odds evaluation.
#[derive(Debug, Serialize, Deserialize)]
pub struct TravelReportResponse {
    /// Whether the best itinerary arrives in time
    pub feasible: bool,

    /// Best success odds, in percent
    pub best_odds: u8,

    pub min_days: u32,

    pub max_days: u32,

    pub best_days: u32,

    /// Itineraries at the best odds (absent when infeasible)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_evaluations: Option<Vec<TravelEvaluationResult>>,

    /// Itineraries with lower, non-zero odds (absent when infeasible)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_evaluations: Option<Vec<TravelEvaluationResult>>,

    /// Itineraries that cannot succeed
    pub impossible_evaluations: Vec<TravelEvaluationResult>,
}

/// One simulated itinerary.
#[derive(Debug, Serialize, Deserialize)]
pub struct TravelEvaluationResult {
    /// Day of arrival
    pub days: u32,

    /// Success odds, in percent
    pub odds: u8,

    pub positions: Vec<TravelPositionResult>,
}

/// A stop on an itinerary.
#[derive(Debug, Serialize, Deserialize)]
pub struct TravelPositionResult {
    pub day: u32,

    /// Location name
    pub location: String,

    /// Bounty hunters are here on this day
    pub sighting: bool,

    pub refuel: bool,

    pub waiting: bool,
}

/// Error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl TravelReportResponse {
    /// Create from a domain report.
    pub fn from_report(report: &TravelReport) -> Self {
        let convert = |evaluations: &[TravelEvaluation]| {
            evaluations
                .iter()
                .map(TravelEvaluationResult::from_evaluation)
                .collect::<Vec<_>>()
        };

        Self {
            feasible: report.feasible,
            best_odds: report.best_odds,
            min_days: report.min_days,
            max_days: report.max_days,
            best_days: report.best_days,
            best_evaluations: report.best_evaluations.as_deref().map(convert),
            other_evaluations: report.other_evaluations.as_deref().map(convert),
            impossible_evaluations: convert(&report.impossible_evaluations),
        }
    }
}

impl TravelEvaluationResult {
    /// Create from a domain evaluation.
    pub fn from_evaluation(evaluation: &TravelEvaluation) -> Self {
        Self {
            days: evaluation.total_days(),
            odds: evaluation.odds(),
            positions: evaluation
                .positions()
                .iter()
                .map(TravelPositionResult::from_position)
                .collect(),
        }
    }
}

impl TravelPositionResult {
    /// Create from a domain position.
    pub fn from_position(position: &TravelPosition) -> Self {
        Self {
            day: position.day,
            location: position.location.as_str().to_string(),
            sighting: position.sighting,
            refuel: position.is_refuel(),
            waiting: position.is_wait(),
        }
    }
}
