//! Lab analysis endpoints.
//!
//! `POST /api/labs/analyze`: detect patterns and score risks for a batch.
//! `GET /api/labs/patterns`: catalogue of patterns the rule engine emits.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::api::types::{AnalyzeRequest, AnalyzeResponse, ApiContext};
use crate::intelligence::detection::EMITTED_PATTERNS;
use crate::intelligence::messages::MessageTemplates;
use crate::intelligence::analyze as analyze_batch;
use crate::models::PatternType;

/// `POST /api/labs/analyze`
pub async fn analyze(
    State(ctx): State<ApiContext>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let Json(request) = payload?;

    let size = request.lab_values.len();
    if size > ctx.max_batch_size {
        return Err(ApiError::BatchTooLarge {
            size,
            limit: ctx.max_batch_size,
        });
    }

    let analysis = analyze_batch(&request.lab_values);
    let analysis_id = Uuid::new_v4().to_string();

    // Severity and domain names only: no values or scores in the logs.
    tracing::info!(
        analysis_id = %analysis_id,
        lab_values = size,
        patterns = analysis.patterns.len(),
        max_severity = analysis.max_severity().map(|s| s.as_str()),
        elevated_domains = ?analysis
            .risk_scores
            .elevated()
            .iter()
            .map(|(domain, _)| domain.as_str())
            .collect::<Vec<_>>(),
        "Lab batch analyzed"
    );

    Ok(Json(AnalyzeResponse {
        analysis_id,
        analyzed_at: chrono::Utc::now().to_rfc3339(),
        analysis,
    }))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternInfo {
    pub pattern_type: PatternType,
    pub label: &'static str,
    pub confidence: f64,
}

#[derive(Serialize)]
pub struct PatternCatalogue {
    pub patterns: Vec<PatternInfo>,
}

/// `GET /api/labs/patterns`
pub async fn patterns() -> Json<PatternCatalogue> {
    let patterns = EMITTED_PATTERNS
        .iter()
        .map(|(pattern_type, confidence)| PatternInfo {
            pattern_type: *pattern_type,
            label: MessageTemplates::label(*pattern_type),
            confidence: *confidence,
        })
        .collect();

    Json(PatternCatalogue { patterns })
}
