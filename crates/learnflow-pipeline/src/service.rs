//! Analysis-service client.
//!
//! [`AnalysisService`] is the seam between the orchestrator and the remote
//! service: the orchestrator is generic over it, tests swap in a mock, and
//! [`HttpAnalysisService`] is the production implementation speaking the
//! service's JSON API.

use std::future::Future;
use std::time::Duration;

use tracing::debug;

use crate::config::PipelineConfig;
use crate::error::ServiceError;
use crate::model::{AnalysisOutcome, EvaluationReport, Language, SubmissionRequest, VideoResult};

/// The three remote calls a submission needs, in the order the pipeline
/// makes them.
pub trait AnalysisService {
    /// Analyzes a submission: detection, classification, and solution
    /// generation.
    fn analyze(
        &self,
        request: &SubmissionRequest,
    ) -> impl Future<Output = Result<AnalysisOutcome, ServiceError>> + Send;

    /// Evaluates a submission into a scored report.
    fn evaluate(
        &self,
        request: &SubmissionRequest,
    ) -> impl Future<Output = Result<EvaluationReport, ServiceError>> + Send;

    /// Looks up the recommended video for a concept in a language.
    fn fetch_video(
        &self,
        language: Language,
        concept: &str,
    ) -> impl Future<Output = Result<VideoResult, ServiceError>> + Send;
}

/// HTTP client for the analysis service.
#[derive(Debug, Clone)]
pub struct HttpAnalysisService {
    client: reqwest::Client,
    base_url: String,
    timeout: Option<Duration>,
}

impl HttpAnalysisService {
    /// Creates a client for the service at the given base URL, no timeout.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            timeout: None,
        }
    }

    /// Creates a client from pipeline configuration.
    #[must_use]
    pub fn from_config(config: &PipelineConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.service_url.clone(),
            timeout: config.request_timeout_secs.map(Duration::from_secs),
        }
    }

    /// Base URL this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Runs a request future under the configured timeout, if any.
    async fn run<T, F>(&self, fut: F) -> Result<T, ServiceError>
    where
        F: Future<Output = Result<T, ServiceError>> + Send,
    {
        match self.timeout {
            Some(timeout) => tokio::time::timeout(timeout, fut)
                .await
                .map_err(|_| ServiceError::Timeout {
                    timeout_secs: timeout.as_secs(),
                })?,
            None => fut.await,
        }
    }

    async fn decode<T>(response: reqwest::Response) -> Result<T, ServiceError>
    where
        T: serde::de::DeserializeOwned,
    {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ServiceError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.json().await?)
    }
}

impl AnalysisService for HttpAnalysisService {
    async fn analyze(&self, request: &SubmissionRequest) -> Result<AnalysisOutcome, ServiceError> {
        let url = format!("{}/analyze", self.base_url);
        debug!(%url, language = %request.language, "POST analyze");
        self.run(async {
            let response = self.client.post(&url).json(request).send().await?;
            Self::decode(response).await
        })
        .await
    }

    async fn evaluate(
        &self,
        request: &SubmissionRequest,
    ) -> Result<EvaluationReport, ServiceError> {
        let url = format!("{}/evaluate", self.base_url);
        debug!(%url, language = %request.language, "POST evaluate");
        self.run(async {
            let response = self.client.post(&url).json(request).send().await?;
            Self::decode(response).await
        })
        .await
    }

    async fn fetch_video(
        &self,
        language: Language,
        concept: &str,
    ) -> Result<VideoResult, ServiceError> {
        let url = format!("{}/video", self.base_url);
        debug!(%url, %language, concept, "GET video");
        self.run(async {
            let response = self.client
                .get(&url)
                .query(&[("language", language.to_string()), ("concept", concept.to_string())])
                .send()
                .await?;
            Self::decode(response).await
        })
        .await
    }
}
