pub mod api; // HTTP shell: /api/labs/analyze
pub mod config;
pub mod intelligence; // Pattern detection + risk scoring
pub mod models;

pub use intelligence::{analyze, detect_all, score_risks, LabAnalysis, LabPattern, RiskScores};
pub use models::{LabValue, PatternType, RiskDomain, Severity};

use tracing_subscriber::EnvFilter;

/// Initialize tracing from `RUST_LOG`, falling back to the crate default.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();
}
