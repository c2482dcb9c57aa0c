use thiserror::Error;

use crate::model::ScoredRoute;

/// Errors surfaced by route selection.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The candidate list was empty; no route can be recommended silently.
    #[error("no candidate routes to select from")]
    NoCandidates,
}

/// Picks the candidate minimizing `objective_value`.
///
/// A challenger replaces the current best only when strictly smaller, so
/// exact ties resolve to the earliest candidate in input order.
pub fn select_recommended(candidates: &[ScoredRoute]) -> Result<&ScoredRoute, EngineError> {
    let (first, rest) = candidates.split_first().ok_or(EngineError::NoCandidates)?;
    let mut best = first;
    for challenger in rest {
        if challenger.objective_value < best.objective_value {
            best = challenger;
        }
    }
    Ok(best)
}

/// Minutes saved by the recommendation versus the second-best candidate.
///
/// The comparison route is the lowest `objective_value` among candidates
/// whose id differs from the recommendation, making the result independent
/// of catalog order. Negative differences and single-route catalogs report
/// zero.
#[must_use]
pub fn time_saved(candidates: &[ScoredRoute], recommended: &ScoredRoute) -> f64 {
    candidates
        .iter()
        .filter(|candidate| candidate.route.id != recommended.route.id)
        .min_by(|a, b| a.objective_value.total_cmp(&b.objective_value))
        .map_or(0.0, |second| {
            (second.estimated_time - recommended.estimated_time)
                .round()
                .max(0.0)
        })
}
