//! Evaluation ranking and report assembly.

use std::cmp::Reverse;

use crate::domain::{TravelEvaluation, TravelReport};

/// Rank evaluations by odds, best first.
///
/// The sort is stable: evaluations with equal odds keep the order in which
/// they were generated.
pub fn rank_evaluations(mut evaluations: Vec<TravelEvaluation>) -> Vec<TravelEvaluation> {
    evaluations.sort_by_key(|e| Reverse(e.odds()));
    evaluations
}

/// Fold ranked evaluations into a report.
///
/// Returns `None` when there is nothing to report. A feasible report whose
/// best odds are zero lists those itineraries as best only, not also as
/// impossible.
pub fn assemble_report(ranked: Vec<TravelEvaluation>, deadline: u32) -> Option<TravelReport> {
    let min_days = ranked.iter().map(TravelEvaluation::total_days).min()?;
    let max_days = ranked.iter().map(TravelEvaluation::total_days).max()?;
    let best_odds = ranked.iter().map(TravelEvaluation::odds).max()?;
    let best_days = ranked
        .iter()
        .filter(|e| e.odds() == best_odds)
        .map(TravelEvaluation::total_days)
        .max()?;

    let feasible = best_days <= deadline;

    if !feasible {
        return Some(TravelReport {
            feasible,
            min_days,
            max_days,
            best_days,
            best_odds,
            best_evaluations: None,
            other_evaluations: None,
            impossible_evaluations: ranked,
        });
    }

    let mut best = Vec::new();
    let mut other = Vec::new();
    let mut impossible = Vec::new();

    for evaluation in ranked {
        match evaluation.odds() {
            odds if odds == best_odds => best.push(evaluation),
            0 => impossible.push(evaluation),
            _ => other.push(evaluation),
        }
    }

    Some(TravelReport {
        feasible,
        min_days,
        max_days,
        best_days,
        best_odds,
        best_evaluations: Some(best),
        other_evaluations: Some(other),
        impossible_evaluations: impossible,
    })
}
