#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rust_2018_idioms,
    missing_docs
)]

//! MediSense explanation module – turns computed risk assessments into
//! four-section markdown reports, via an external text-generation service
//! or a deterministic rule-based template.

/// Report input context shared by both generation branches.
#[path = "../context.rs"]
pub mod context;

/// External text-generation client and trait seam.
#[path = "../external.rs"]
pub mod external;

/// Deterministic rule-based report template.
#[path = "../fallback.rs"]
pub mod fallback;

/// Two-branch report generator.
#[path = "../generator.rs"]
pub mod generator;

/// Prompt construction for the external branch.
#[path = "../prompt.rs"]
pub mod prompt;

/// Structured logging handle for explanation events.
#[path = "../telemetry.rs"]
pub mod telemetry;

pub use context::{RecommendedRouteRef, ReportContext};
pub use external::{GenerationError, HttpTextGenerator, TextGenerator};
pub use fallback::render_fallback;
pub use generator::{ExplanationGenerator, ExplanationReport, GeneratorBranch};
pub use prompt::build_report_prompt;
pub use telemetry::{ExplanationTelemetry, ExplanationTelemetryBuilder};
