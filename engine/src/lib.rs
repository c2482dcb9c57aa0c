#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rust_2018_idioms,
    missing_docs
)]

//! MediSense engine – deterministic route risk scoring and selection.

/// Core transport and scoring data types.
#[path = "../model.rs"]
pub mod model;

/// Weighted-sum risk and priority scoring.
#[path = "../scoring.rs"]
pub mod scoring;

/// Recommended-route selection and time-saved computation.
#[path = "../selection.rs"]
pub mod selection;

pub use model::{PriorityInputs, PriorityTier, RiskInputs, Route, ScoredRoute};
pub use scoring::{delay_risk_score, medical_priority_score, round2, score_route, score_routes};
pub use selection::{select_recommended, time_saved, EngineError};
