//! Error types for the LearnFlow pipeline.
//!
//! This module defines the error hierarchy for pipeline operations:
//! submission validation, the three remote analysis-service calls, and
//! configuration loading. Remote-call failures are caught at the submission
//! boundary and surfaced as a single stage-tagged error per submission.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A specialized `Result` type for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;

/// The remote pipeline stage a failure originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemoteStage {
    /// The analyze call (solution generation).
    Analyze,
    /// The evaluate call (quality scoring).
    Evaluate,
    /// The video-lookup call.
    Video,
}

impl std::fmt::Display for RemoteStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Analyze => write!(f, "analyze"),
            Self::Evaluate => write!(f, "evaluate"),
            Self::Video => write!(f, "video"),
        }
    }
}

/// Why a submission was rejected before any remote call was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The submitted code was empty after trimming.
    EmptyCode,
    /// Another submission is already in flight.
    AnalysisInFlight,
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyCode => write!(f, "submitted code is empty"),
            Self::AnalysisInFlight => write!(f, "an analysis is already in flight"),
        }
    }
}

/// Errors returned by the analysis-service client.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// The service answered with a non-success HTTP status.
    #[error("service returned HTTP {status}: {body}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// Response body, if one could be read.
        body: String,
    },

    /// The request could not be sent or the response could not be decoded.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The configured per-call timeout elapsed before a response arrived.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// The timeout that elapsed, in seconds.
        timeout_secs: u64,
    },
}

/// Errors that can occur while running the LearnFlow pipeline.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// The analyze call failed; no results are available for this run.
    #[error("Code analysis failed: {source}\n\nSuggestion: Check that the analysis service is reachable, then resubmit")]
    AnalyzeFailed {
        /// The underlying service failure.
        #[source]
        source: ServiceError,
    },

    /// The evaluate call failed; the analysis result is retained.
    #[error("Code evaluation failed: {source}\n\nSuggestion: Solutions from the completed analysis are still available; resubmit to retry the evaluation")]
    EvaluateFailed {
        /// The underlying service failure.
        #[source]
        source: ServiceError,
    },

    /// The video-lookup call failed; analysis and evaluation are retained.
    #[error("Video lookup failed: {source}\n\nSuggestion: Solutions and evaluation are still available; resubmit to retry the video lookup")]
    VideoFailed {
        /// The underlying service failure.
        #[source]
        source: ServiceError,
    },

    /// The submission was rejected before any remote call was made.
    #[error("Submission rejected: {reason}\n\nSuggestion: {suggestion}", suggestion = reason.suggestion())]
    SubmissionRejected {
        /// Why the submission was rejected.
        reason: RejectReason,
    },

    /// Invalid JSON syntax in the configuration file.
    #[error("Invalid JSON in config file '{path}': {message}\n\nSuggestion: Validate your learnflow.json with a JSON linter")]
    ConfigParseError {
        /// Path to the configuration file.
        path: PathBuf,
        /// Description of the parse error.
        message: String,
    },

    /// Configuration validation failed.
    #[error("Invalid configuration: {message}\n\nSuggestion: {suggestion}")]
    ConfigValidationError {
        /// Description of the validation failure.
        message: String,
        /// Actionable suggestion for the user.
        suggestion: String,
    },
}

impl RejectReason {
    /// Returns a suggestion message for this rejection.
    #[must_use]
    pub const fn suggestion(&self) -> &'static str {
        match self {
            Self::EmptyCode => "Paste some source code before submitting",
            Self::AnalysisInFlight => "Wait for the current analysis to finish, then resubmit",
        }
    }
}

impl PipelineError {
    /// Creates the stage-tagged error for a failed remote call.
    #[must_use]
    pub const fn stage_failed(stage: RemoteStage, source: ServiceError) -> Self {
        match stage {
            RemoteStage::Analyze => Self::AnalyzeFailed { source },
            RemoteStage::Evaluate => Self::EvaluateFailed { source },
            RemoteStage::Video => Self::VideoFailed { source },
        }
    }

    /// Creates a `SubmissionRejected` error.
    #[must_use]
    pub const fn rejected(reason: RejectReason) -> Self {
        Self::SubmissionRejected { reason }
    }

    /// Creates a new `ConfigParseError` with the given path and message.
    #[must_use]
    pub fn config_parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::ConfigParseError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a new `ConfigValidationError` with the given message and suggestion.
    #[must_use]
    pub fn config_validation(message: impl Into<String>, suggestion: impl Into<String>) -> Self {
        Self::ConfigValidationError {
            message: message.into(),
            suggestion: suggestion.into(),
        }
    }

    /// The remote stage this error originated from, if it is a stage failure.
    #[must_use]
    pub const fn failed_stage(&self) -> Option<RemoteStage> {
        match self {
            Self::AnalyzeFailed { .. } => Some(RemoteStage::Analyze),
            Self::EvaluateFailed { .. } => Some(RemoteStage::Evaluate),
            Self::VideoFailed { .. } => Some(RemoteStage::Video),
            _ => None,
        }
    }
}
