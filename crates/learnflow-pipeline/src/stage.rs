//! Pipeline stage machine and shared state.
//!
//! The pipeline walks a fixed set of stages. `submit` drives the automatic
//! transitions (Input through Analyzed); the user moves between the result
//! stages afterwards, gated by which results actually exist.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::RemoteStage;
use crate::model::{AnalysisOutcome, EvaluationReport, SubmissionRequest, VideoResult};

/// Where the pipeline currently is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStage {
    /// Waiting for a submission.
    #[default]
    Input,
    /// A submission is in flight; acts as the mutual-exclusion lock.
    Analyzing,
    /// The full pipeline completed for the current submission.
    Analyzed,
    /// Viewing the generated solution variants.
    Solutions,
    /// Viewing the evaluation report.
    Evaluation,
    /// Viewing the recommended video.
    Video,
}

impl PipelineStage {
    /// Whether the user may navigate to this stage at all.
    ///
    /// `Analyzing` is reserved for the pipeline itself.
    #[must_use]
    pub const fn is_user_selectable(&self) -> bool {
        !matches!(self, Self::Analyzing)
    }
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input => write!(f, "input"),
            Self::Analyzing => write!(f, "analyzing"),
            Self::Analyzed => write!(f, "analyzed"),
            Self::Solutions => write!(f, "solutions"),
            Self::Evaluation => write!(f, "evaluation"),
            Self::Video => write!(f, "video"),
        }
    }
}

/// A recorded stage failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageFailure {
    /// The remote call that failed.
    pub stage: RemoteStage,
    /// Human-readable failure message.
    pub message: String,
}

/// The whole observable state of one pipeline.
///
/// Results accumulate independently: a failure at a later stage clears
/// nothing that an earlier stage already stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineState {
    /// Current stage.
    pub stage: PipelineStage,

    /// The submission currently being (or last) processed.
    pub request: Option<SubmissionRequest>,

    /// Result of the analyze call, if it has completed.
    pub analysis: Option<AnalysisOutcome>,

    /// Result of the evaluate call, if it has completed.
    pub evaluation: Option<EvaluationReport>,

    /// Result of the video lookup, if it has completed.
    pub video: Option<VideoResult>,

    /// The most recent stage failure, cleared on the next successful run.
    pub last_error: Option<StageFailure>,

    /// When this pipeline was created.
    pub started_at: DateTime<Utc>,

    /// When this pipeline last changed.
    pub updated_at: DateTime<Utc>,
}

impl PipelineState {
    /// Creates a fresh pipeline at the `Input` stage.
    #[must_use]
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            stage: PipelineStage::Input,
            request: None,
            analysis: None,
            evaluation: None,
            video: None,
            last_error: None,
            started_at: now,
            updated_at: now,
        }
    }

    /// Begins a new submission: clears previous results and enters `Analyzing`.
    pub fn begin(&mut self, request: SubmissionRequest) {
        self.request = Some(request);
        self.analysis = None;
        self.evaluation = None;
        self.video = None;
        self.last_error = None;
        self.stage = PipelineStage::Analyzing;
        self.touch();
    }

    /// Stores the analyze result.
    pub fn store_analysis(&mut self, analysis: AnalysisOutcome) {
        self.analysis = Some(analysis);
        self.touch();
    }

    /// Stores the evaluate result.
    pub fn store_evaluation(&mut self, evaluation: EvaluationReport) {
        self.evaluation = Some(evaluation);
        self.touch();
    }

    /// Stores the video result.
    pub fn store_video(&mut self, video: VideoResult) {
        self.video = Some(video);
        self.touch();
    }

    /// Marks the pipeline as fully analyzed and clears any stale error.
    pub fn complete(&mut self) {
        self.stage = PipelineStage::Analyzed;
        self.last_error = None;
        self.touch();
    }

    /// Records a stage failure and returns the pipeline to `Input`.
    ///
    /// Results stored before the failure are deliberately kept.
    pub fn fail(&mut self, stage: RemoteStage, message: impl Into<String>) {
        self.last_error = Some(StageFailure {
            stage,
            message: message.into(),
        });
        self.stage = PipelineStage::Input;
        self.touch();
    }

    /// Whether the user may navigate to the given stage right now.
    ///
    /// While a run is in flight (`Analyzing`) no navigation is allowed at
    /// all: leaving the stage would release the in-flight lock and let a
    /// second submission interleave with the outstanding one. Otherwise
    /// result stages require their result to exist, `Analyzing` is never
    /// selectable, and the remaining stages are always reachable.
    #[must_use]
    pub const fn can_select(&self, target: PipelineStage) -> bool {
        if matches!(self.stage, PipelineStage::Analyzing) {
            return false;
        }
        match target {
            PipelineStage::Analyzing => false,
            PipelineStage::Solutions => self.analysis.is_some(),
            PipelineStage::Evaluation => self.evaluation.is_some(),
            PipelineStage::Video => self.video.is_some(),
            PipelineStage::Input | PipelineStage::Analyzed => true,
        }
    }

    /// Navigates to the given stage if permitted; no-op otherwise.
    ///
    /// Returns `true` when the stage actually changed.
    pub fn select(&mut self, target: PipelineStage) -> bool {
        if target == self.stage || !self.can_select(target) {
            return false;
        }
        self.stage = target;
        self.touch();
        true
    }

    /// Updates the `updated_at` timestamp to now.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Default for PipelineState {
    fn default() -> Self {
        Self::new()
    }
}
