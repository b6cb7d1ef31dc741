//! Shared types for the HTTP layer.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::config::MAX_BATCH_SIZE;
use crate::intelligence::LabAnalysis;
use crate::models::LabValue;

// ═══════════════════════════════════════════════════════════
// API context: shared state for the router
// ═══════════════════════════════════════════════════════════

/// Shared context for all API routes. Read-only after construction.
#[derive(Debug, Clone)]
pub struct ApiContext {
    pub max_batch_size: usize,
    pub started_at: Instant,
}

impl ApiContext {
    pub fn new(max_batch_size: usize) -> Self {
        Self {
            max_batch_size,
            started_at: Instant::now(),
        }
    }
}

impl Default for ApiContext {
    fn default() -> Self {
        Self::new(MAX_BATCH_SIZE)
    }
}

// ═══════════════════════════════════════════════════════════
// Request / response bodies
// ═══════════════════════════════════════════════════════════

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub lab_values: Vec<LabValue>,
}

/// Analysis result plus a per-response envelope.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub analysis_id: String,
    pub analyzed_at: String,
    #[serde(flatten)]
    pub analysis: LabAnalysis,
}
