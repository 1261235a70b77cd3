//! HTTP-level tests of the analysis service wire format.
//!
//! The orchestrator tests exercise the service through the typed client;
//! these check the raw JSON a browser-based client would see.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use serde_json::{json, Value};

/// Starts the analysis service on an ephemeral port and returns its root URL.
async fn spawn_service() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, learnflow_service::create_router())
            .await
            .unwrap();
    });

    format!("http://{addr}")
}

#[tokio::test]
async fn test_health_endpoint() {
    let root = spawn_service().await;

    let body: Value = reqwest::get(&root).await.unwrap().json().await.unwrap();
    assert_eq!(body["status"], "Backend running");
}

#[tokio::test]
async fn test_analyze_wire_format() {
    let root = spawn_service().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{root}/api/analyze"))
        .json(&json!({
            "code": "max_val = arr[0]\nfor v in arr:\n    if v > max_val:\n        max_val = v",
            "language": "python"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["problemDetected"], "array_max_min");
    assert_eq!(body["analysis"]["solutionType"], "better");
    assert_eq!(body["analysis"]["patternsDetected"]["single_loop"], true);

    let solutions = body["solutions"].as_array().unwrap();
    assert_eq!(solutions.len(), 3);
    assert_eq!(solutions[0]["type"], "brute-force");
    assert_eq!(solutions[2]["type"], "optimal");
    assert!(solutions[0]["timeComplexity"].is_string());
    assert!(solutions[0]["spaceComplexity"].is_string());

    assert!(body["arPayload"]["cameraPosition"].is_array());
    assert!(body["arPayload"]["animationSteps"].is_array());
}

#[tokio::test]
async fn test_analyze_empty_code_is_bad_request() {
    let root = spawn_service().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{root}/api/analyze"))
        .json(&json!({"code": "", "language": "python"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("empty"));
}

#[tokio::test]
async fn test_evaluate_wire_format() {
    let root = spawn_service().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{root}/api/evaluate"))
        .json(&json!({
            "code": "def f(arr):\n    for v in arr:\n        pass",
            "language": "python"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.unwrap();
    assert!(body["overallScore"].is_u64());
    assert!(body["grade"].is_string());
    assert_eq!(body["metrics"].as_array().unwrap().len(), 4);
    assert!(body["feedback"]["strengths"].is_array());
    assert!(body["graphAnalysis"]["astComplexity"].is_u64());
}

#[tokio::test]
async fn test_video_language_fallback() {
    let root = spawn_service().await;

    let body: Value = reqwest::get(format!(
        "{root}/api/video?language=javascript&concept=recursion"
    ))
    .await
    .unwrap()
    .json()
    .await
    .unwrap();

    assert_eq!(body["youtubeId"], "sJYl3w0U7sI");
    assert_eq!(
        body["description"],
        "Conceptual explanation of recursion in javascript"
    );
    assert_eq!(body["difficulty"], "beginner");
}

#[tokio::test]
async fn test_video_requires_language() {
    let root = spawn_service().await;

    let response = reqwest::get(format!("{root}/api/video")).await.unwrap();
    assert_eq!(response.status(), 400);
}
