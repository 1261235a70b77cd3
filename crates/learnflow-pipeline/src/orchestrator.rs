//! The pipeline orchestrator.
//!
//! Drives a submission through analyze, evaluate, and video lookup, strictly
//! in that order. The shared state acts as the single source of truth: the
//! `Analyzing` stage doubles as the mutual-exclusion lock, results are stored
//! as each call completes, and a failure at any stage abandons the rest of
//! the run while keeping everything stored so far.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::config::PipelineConfig;
use crate::error::{PipelineError, RejectReason, RemoteStage, Result, ServiceError};
use crate::events::{EventBroadcaster, PipelineEvent};
use crate::model::{Language, SolutionKind, SubmissionRequest};
use crate::service::AnalysisService;
use crate::stage::{PipelineStage, PipelineState};

/// Orchestrates one pipeline over an analysis service.
///
/// Cheap to share: clones see the same state and event stream.
#[derive(Debug)]
pub struct Orchestrator<S> {
    service: S,
    state: Arc<Mutex<PipelineState>>,
    events: EventBroadcaster,
    config: PipelineConfig,
}

impl<S: Clone> Clone for Orchestrator<S> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            state: Arc::clone(&self.state),
            events: self.events.clone(),
            config: self.config.clone(),
        }
    }
}

impl<S: AnalysisService> Orchestrator<S> {
    /// Creates an orchestrator with default configuration.
    #[must_use]
    pub fn new(service: S) -> Self {
        Self::with_config(service, PipelineConfig::default())
    }

    /// Creates an orchestrator with the given configuration.
    #[must_use]
    pub fn with_config(service: S, config: PipelineConfig) -> Self {
        Self {
            service,
            state: Arc::new(Mutex::new(PipelineState::new())),
            events: EventBroadcaster::default(),
            config,
        }
    }

    /// Handle to the shared pipeline state.
    #[must_use]
    pub fn state_handle(&self) -> Arc<Mutex<PipelineState>> {
        Arc::clone(&self.state)
    }

    /// A point-in-time copy of the pipeline state.
    pub async fn snapshot(&self) -> PipelineState {
        self.state.lock().await.clone()
    }

    /// Subscribes to pipeline events.
    #[must_use]
    pub fn subscribe(&self) -> tokio::sync::broadcast::Receiver<PipelineEvent> {
        self.events.subscribe()
    }

    /// Submits code for the full analyze, evaluate, video run.
    ///
    /// The three calls run strictly in sequence. On failure the pipeline
    /// returns to `Input` with the failure recorded, keeping every result
    /// stored before the failing call.
    ///
    /// # Errors
    ///
    /// Returns `SubmissionRejected` for empty code or when another submission
    /// is already in flight, or the stage-tagged error of the first remote
    /// call that failed.
    pub async fn submit(&self, code: &str, language: Language) -> Result<()> {
        let request = SubmissionRequest::new(code, language)?;

        {
            let mut state = self.state.lock().await;
            if state.stage == PipelineStage::Analyzing {
                // A run is in flight; reject without touching its state.
                return Err(PipelineError::rejected(RejectReason::AnalysisInFlight));
            }
            state.begin(request.clone());
        }

        info!(language = %language, "Starting analysis pipeline");
        self.events
            .send(PipelineEvent::AnalysisStarted { language });
        self.events.send(PipelineEvent::StageChanged {
            stage: PipelineStage::Analyzing,
        });

        let analysis = match self.service.analyze(&request).await {
            Ok(analysis) => analysis,
            Err(e) => return Err(self.fail(RemoteStage::Analyze, e).await),
        };

        let concept = if analysis.problem_detected == "unknown" {
            self.config.default_concept.clone()
        } else {
            analysis.problem_detected.clone()
        };

        info!(
            problem = %analysis.problem_detected,
            solutions = analysis.solutions.len(),
            "Analysis complete"
        );
        self.events.send(PipelineEvent::AnalysisComplete {
            problem: analysis.problem_detected.clone(),
            solutions: analysis.solutions.len(),
        });
        self.state.lock().await.store_analysis(analysis);

        match self.service.evaluate(&request).await {
            Ok(evaluation) => self.state.lock().await.store_evaluation(evaluation),
            Err(e) => return Err(self.fail(RemoteStage::Evaluate, e).await),
        }

        match self.service.fetch_video(language, &concept).await {
            Ok(video) => self.state.lock().await.store_video(video),
            Err(e) => return Err(self.fail(RemoteStage::Video, e).await),
        }

        self.state.lock().await.complete();
        self.events.send(PipelineEvent::StageChanged {
            stage: PipelineStage::Analyzed,
        });
        info!("Pipeline complete");
        Ok(())
    }

    /// Records a remote-call failure, returns the pipeline to `Input`, and
    /// emits the single `SubmissionFailed` event for this run.
    async fn fail(&self, stage: RemoteStage, source: ServiceError) -> PipelineError {
        let error = PipelineError::stage_failed(stage, source);
        let message = match &error {
            PipelineError::AnalyzeFailed { source }
            | PipelineError::EvaluateFailed { source }
            | PipelineError::VideoFailed { source } => source.to_string(),
            _ => error.to_string(),
        };

        warn!(stage = %stage, %message, "Pipeline stage failed");
        self.state.lock().await.fail(stage, message.clone());
        self.events
            .send(PipelineEvent::SubmissionFailed { stage, message });
        self.events.send(PipelineEvent::StageChanged {
            stage: PipelineStage::Input,
        });
        error
    }

    /// Navigates to the given stage if the guard allows it.
    ///
    /// Returns the stage the pipeline is on afterwards. Disallowed targets
    /// leave the stage untouched and emit nothing.
    pub async fn select_stage(&self, target: PipelineStage) -> PipelineStage {
        let mut state = self.state.lock().await;
        if state.select(target) {
            self.events
                .send(PipelineEvent::StageChanged { stage: target });
        }
        state.stage
    }

    /// Announces that the user wants to view a solution in AR.
    pub fn view_in_ar(&self, solution: SolutionKind) {
        self.events.send(PipelineEvent::ViewInAr { solution });
    }

    /// Announces a watch-explanation request and navigates to the video
    /// stage if a video is available.
    pub async fn watch_explanation(&self, solution: SolutionKind) -> PipelineStage {
        self.events
            .send(PipelineEvent::WatchExplanation { solution });
        self.select_stage(PipelineStage::Video).await
    }
}
