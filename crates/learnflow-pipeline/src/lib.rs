//! LearnFlow pipeline orchestrator.
//!
//! Takes a code submission through the full learning pipeline: analyze the
//! code, evaluate its quality, and look up a recommended video, strictly in
//! that order against the analysis service. The orchestrator owns the stage
//! machine, partial-failure retention, and the event stream observers use to
//! follow a run.

pub mod config;
pub mod error;
pub mod events;
pub mod model;
pub mod orchestrator;
pub mod service;
pub mod stage;

pub use config::{PipelineConfig, CONFIG_FILE_NAME};
pub use error::{PipelineError, RejectReason, RemoteStage, Result, ServiceError};
pub use events::{EventBroadcaster, PipelineEvent};
pub use model::{
    AnalysisOutcome, Difficulty, EvaluationReport, Feedback, GraphAnalysis, Language, Metric,
    PatternAnalysis, PatternFlags, Solution, SolutionKind, SubmissionRequest, VideoResult,
};
pub use orchestrator::Orchestrator;
pub use service::{AnalysisService, HttpAnalysisService};
pub use stage::{PipelineStage, PipelineState, StageFailure};
