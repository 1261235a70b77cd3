//! HTTP API endpoints for the analysis service.
//!
//! # Endpoints
//!
//! - `POST /api/analyze` - Detect the problem, classify the code, and
//!   generate solution variants plus the AR scene
//! - `POST /api/evaluate` - Score the submission into an evaluation report
//! - `GET /api/video` - Recommended video for a concept and language
//! - `GET /api/ar` - AR scene payload for a problem family
//! - `GET /` - Health check
//!
//! # Example
//!
//! ```no_run
//! use learnflow_service::create_router;
//!
//! # async fn example() {
//! let router = create_router();
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8001").await.unwrap();
//! axum::serve(listener, router).await.unwrap();
//! # }
//! ```

use axum::{
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use learnflow_pipeline::model::{
    AnalysisOutcome, EvaluationReport, PatternAnalysis, SubmissionRequest, VideoResult,
};
use learnflow_player::ArPayload;
use serde::{Deserialize, Serialize};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

use crate::{catalog, detector, evaluator, scenes, videos};

// ============================================================================
// Request/Response Types
// ============================================================================

/// Query parameters for the video endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct VideoQuery {
    /// Language the viewer is working in.
    pub language: String,
    /// Concept to find a video for.
    #[serde(default = "default_concept")]
    pub concept: String,
}

fn default_concept() -> String {
    "algorithm".to_string()
}

/// Query parameters for the AR scene endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ArQuery {
    /// Problem family to build a scene for.
    pub problem: String,
}

/// Health check response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status message.
    pub status: String,
}

/// Error response body returned on failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Description of the error.
    pub error: String,
}

// ============================================================================
// API Error Type
// ============================================================================

/// Internal error type for API handlers.
#[derive(Debug)]
enum ApiError {
    /// The submitted code was empty after trimming.
    EmptyCode,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::EmptyCode => (
                StatusCode::BAD_REQUEST,
                "Submitted code must not be empty".to_string(),
            ),
        };

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

// ============================================================================
// Router Setup
// ============================================================================

/// Creates the HTTP router with all API endpoints.
///
/// All analysis routes live under `/api`; the root path answers health
/// checks. CORS is wide open for local development and a trace layer logs
/// every request.
pub fn create_router() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/analyze", post(handle_analyze))
        .route("/evaluate", post(handle_evaluate))
        .route("/video", get(handle_video))
        .route("/ar", get(handle_ar));

    Router::new()
        .route("/", get(handle_health))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

// ============================================================================
// Handlers
// ============================================================================

/// Handler for `GET /`.
async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "Backend running".to_string(),
    })
}

/// Handler for `POST /api/analyze`.
///
/// Runs the full detection pipeline over the submitted code. The language
/// field of the request is advisory; detection works from the code itself.
async fn handle_analyze(
    Json(request): Json<SubmissionRequest>,
) -> Result<Json<AnalysisOutcome>, ApiError> {
    if request.code.trim().is_empty() {
        return Err(ApiError::EmptyCode);
    }

    let detected_language = detector::detect_language(&request.code);
    let problem = detector::detect_problem(&request.code);
    let flags = detector::detect_patterns(&request.code);
    let classification = detector::classify(&flags);

    info!(
        %detected_language,
        %problem,
        solution_type = %classification.solution_type,
        "Analyzed submission"
    );

    let variants = catalog::solution_variants(&problem, &detected_language);
    let solutions = catalog::build_solutions(&problem, &variants, &classification);
    let ar_payload = scenes::payload_for(&problem);

    Ok(Json(AnalysisOutcome {
        detected_language,
        problem_detected: problem,
        analysis: PatternAnalysis {
            solution_type: classification.solution_type,
            time_complexity: classification.time_complexity.to_string(),
            score: classification.score,
            patterns_detected: flags,
        },
        solutions,
        ar_payload: Some(ar_payload),
    }))
}

/// Handler for `POST /api/evaluate`.
///
/// Re-runs detection over the code so the endpoint is self-contained and
/// callable without a prior analyze.
async fn handle_evaluate(
    Json(request): Json<SubmissionRequest>,
) -> Result<Json<EvaluationReport>, ApiError> {
    if request.code.trim().is_empty() {
        return Err(ApiError::EmptyCode);
    }

    let flags = detector::detect_patterns(&request.code);
    let classification = detector::classify(&flags);
    let report = evaluator::evaluate(&flags, &classification);

    info!(
        overall = report.overall_score,
        grade = %report.grade,
        "Evaluated submission"
    );
    Ok(Json(report))
}

/// Handler for `GET /api/ar`.
///
/// Unknown problems answer with the empty generic scene rather than 404,
/// matching the analyze handler's payload generation.
async fn handle_ar(Query(query): Query<ArQuery>) -> Json<ArPayload> {
    let payload = scenes::payload_for(&query.problem);
    info!(
        problem = %query.problem,
        scene = %payload.scene,
        "AR scene lookup"
    );
    Json(payload)
}

/// Handler for `GET /api/video`.
async fn handle_video(Query(query): Query<VideoQuery>) -> Json<VideoResult> {
    let result = videos::lookup(&query.language, &query.concept);
    info!(
        language = %query.language,
        concept = %query.concept,
        video = %result.youtube_id,
        "Video lookup"
    );
    Json(result)
}

// ============================================================================
// Tests
// ============================================================================
