//! End-to-end pipeline tests.
//!
//! Each test starts the real analysis service on an ephemeral port and
//! drives the orchestrator against it over HTTP.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::Arc;

use learnflow_pipeline::{
    HttpAnalysisService, Language, Orchestrator, PipelineConfig, PipelineError, PipelineStage,
    RejectReason, RemoteStage,
};
use learnflow_player::StepPlayer;

const PYTHON_LINEAR_SEARCH: &str =
    "def search(arr, x):\n    for i in range(len(arr)):\n        if arr[i] == x:\n            return i\n    return -1";

const PYTHON_BINARY_SEARCH: &str = "def bsearch(arr, x):\n    low, high = 0, len(arr)-1\n    while low <= high:\n        mid = (low+high)//2\n        if arr[mid] == x:\n            return mid\n        elif arr[mid] < x:\n            low = mid+1\n        else:\n            high = mid-1";

/// Starts the analysis service on an ephemeral port and returns its base URL.
async fn spawn_service() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, learnflow_service::create_router())
            .await
            .unwrap();
    });

    format!("http://{addr}/api")
}

fn orchestrator_for(base_url: &str) -> Orchestrator<HttpAnalysisService> {
    let config = PipelineConfig {
        service_url: base_url.to_string(),
        ..PipelineConfig::default()
    };
    let service = HttpAnalysisService::from_config(&config);
    Orchestrator::with_config(service, config)
}

#[tokio::test]
async fn test_full_pipeline_linear_search() {
    let base_url = spawn_service().await;
    let orchestrator = orchestrator_for(&base_url);

    orchestrator
        .submit(PYTHON_LINEAR_SEARCH, Language::Python)
        .await
        .unwrap();

    let state = orchestrator.snapshot().await;
    assert_eq!(state.stage, PipelineStage::Analyzed);
    assert!(state.last_error.is_none());

    let analysis = state.analysis.unwrap();
    assert_eq!(analysis.detected_language, "python");
    assert_eq!(analysis.problem_detected, "linear_search");
    assert_eq!(analysis.solutions.len(), 3);

    let evaluation = state.evaluation.unwrap();
    assert!(evaluation.overall_score > 0);
    assert_eq!(evaluation.metrics.len(), 4);

    // Video follows the detected problem, not the default concept.
    let video = state.video.unwrap();
    assert_eq!(video.youtube_id, "C3H1pXyXv7w");
}

#[tokio::test]
async fn test_ar_walkthrough_from_analysis() {
    let base_url = spawn_service().await;
    let orchestrator = orchestrator_for(&base_url);

    orchestrator
        .submit(PYTHON_LINEAR_SEARCH, Language::Python)
        .await
        .unwrap();

    let state = orchestrator.snapshot().await;
    let payload = state.analysis.unwrap().ar_payload.unwrap();

    let mut player = StepPlayer::new();
    player.load_payload(Arc::new(payload));

    assert_eq!(player.current_step(), 0);
    assert_eq!(player.active_node_id(), Some("arr[0]"));

    // Walk to the final step and confirm the clamp.
    for _ in 0..player.step_count() {
        player.next();
    }
    assert_eq!(player.current_step(), player.step_count() - 1);
    assert_eq!(player.active_node_id(), Some("arr[2]"));
}

#[tokio::test]
async fn test_binary_search_scene_has_no_active_node() {
    let base_url = spawn_service().await;
    let orchestrator = orchestrator_for(&base_url);

    orchestrator
        .submit(PYTHON_BINARY_SEARCH, Language::Python)
        .await
        .unwrap();

    let state = orchestrator.snapshot().await;
    let analysis = state.analysis.unwrap();
    assert_eq!(analysis.problem_detected, "binary_search");

    // Pointer-movement steps carry no target: the player degrades to
    // no-highlight instead of failing.
    let mut player = StepPlayer::new();
    player.load_payload(Arc::new(analysis.ar_payload.unwrap()));
    assert!(player.step_count() > 0);
    assert_eq!(player.active_node_id(), None);
    assert!(player.current_step_data().is_some());

    let video = state.video.unwrap();
    assert_eq!(video.youtube_id, "f6UU7V3szVw");
}

#[tokio::test]
async fn test_empty_submission_is_rejected() {
    let base_url = spawn_service().await;
    let orchestrator = orchestrator_for(&base_url);

    let err = orchestrator
        .submit("   \n ", Language::Python)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        PipelineError::SubmissionRejected {
            reason: RejectReason::EmptyCode
        }
    ));

    let state = orchestrator.snapshot().await;
    assert_eq!(state.stage, PipelineStage::Input);
    assert!(state.analysis.is_none());
}

#[tokio::test]
async fn test_unreachable_service_fails_at_analyze() {
    // Nothing is listening on this address.
    let orchestrator = orchestrator_for("http://127.0.0.1:1/api");

    let err = orchestrator
        .submit(PYTHON_LINEAR_SEARCH, Language::Python)
        .await
        .unwrap_err();
    assert_eq!(err.failed_stage(), Some(RemoteStage::Analyze));

    let state = orchestrator.snapshot().await;
    assert_eq!(state.stage, PipelineStage::Input);
    assert!(state.analysis.is_none());
    assert_eq!(state.last_error.unwrap().stage, RemoteStage::Analyze);
}

#[tokio::test]
async fn test_stage_navigation_after_success() {
    let base_url = spawn_service().await;
    let orchestrator = orchestrator_for(&base_url);

    orchestrator
        .submit(PYTHON_LINEAR_SEARCH, Language::Python)
        .await
        .unwrap();

    assert_eq!(
        orchestrator.select_stage(PipelineStage::Solutions).await,
        PipelineStage::Solutions
    );
    assert_eq!(
        orchestrator.select_stage(PipelineStage::Video).await,
        PipelineStage::Video
    );
    assert_eq!(
        orchestrator.select_stage(PipelineStage::Evaluation).await,
        PipelineStage::Evaluation
    );

    // Analyzing is reserved for the pipeline itself.
    assert_eq!(
        orchestrator.select_stage(PipelineStage::Analyzing).await,
        PipelineStage::Evaluation
    );
}

#[tokio::test]
async fn test_resubmission_replaces_previous_results() {
    let base_url = spawn_service().await;
    let orchestrator = orchestrator_for(&base_url);

    orchestrator
        .submit(PYTHON_LINEAR_SEARCH, Language::Python)
        .await
        .unwrap();
    let first = orchestrator.snapshot().await.analysis.unwrap();
    assert_eq!(first.problem_detected, "linear_search");

    orchestrator
        .submit(PYTHON_BINARY_SEARCH, Language::Python)
        .await
        .unwrap();
    let second = orchestrator.snapshot().await.analysis.unwrap();
    assert_eq!(second.problem_detected, "binary_search");
}
