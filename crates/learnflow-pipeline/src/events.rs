//! Pipeline event broadcasting.
//!
//! Observers (the CLI progress display, the HTTP status surface) subscribe to
//! a broadcast channel and receive one event per pipeline transition. Events
//! are fire-and-forget: a send with no subscribers is not an error.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::debug;

use crate::error::RemoteStage;
use crate::model::{Language, SolutionKind};
use crate::stage::PipelineStage;

/// Events emitted by the orchestrator as a submission moves through the
/// pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "payload", rename_all = "snake_case")]
pub enum PipelineEvent {
    /// A submission passed validation and the pipeline entered `Analyzing`.
    AnalysisStarted {
        /// The language the submission claims.
        language: Language,
    },

    /// The pipeline stage changed.
    StageChanged {
        /// The stage just entered.
        stage: PipelineStage,
    },

    /// The analyze call succeeded.
    AnalysisComplete {
        /// The detected problem label.
        problem: String,
        /// How many solution variants were generated.
        solutions: usize,
    },

    /// A remote call failed and the submission was abandoned.
    ///
    /// Exactly one of these is emitted per failed submission.
    SubmissionFailed {
        /// The remote call that failed.
        stage: RemoteStage,
        /// Human-readable failure message.
        message: String,
    },

    /// The user asked to view a solution in AR.
    ViewInAr {
        /// Which solution variant to visualize.
        solution: SolutionKind,
    },

    /// The user asked to watch the explanation video for a solution.
    WatchExplanation {
        /// Which solution variant the explanation belongs to.
        solution: SolutionKind,
    },
}

impl PipelineEvent {
    /// The wire name of this event.
    #[must_use]
    pub const fn event_name(&self) -> &'static str {
        match self {
            Self::AnalysisStarted { .. } => "analysis_started",
            Self::StageChanged { .. } => "stage_changed",
            Self::AnalysisComplete { .. } => "analysis_complete",
            Self::SubmissionFailed { .. } => "submission_failed",
            Self::ViewInAr { .. } => "view_in_ar",
            Self::WatchExplanation { .. } => "watch_explanation",
        }
    }
}

/// Fans pipeline events out to any number of subscribers.
#[derive(Debug, Clone)]
pub struct EventBroadcaster {
    sender: broadcast::Sender<PipelineEvent>,
}

impl EventBroadcaster {
    /// Creates a broadcaster with the given channel capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribes to all future events.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<PipelineEvent> {
        self.sender.subscribe()
    }

    /// Broadcasts an event, returning how many subscribers received it.
    pub fn send(&self, event: PipelineEvent) -> usize {
        debug!(event = event.event_name(), "Broadcasting pipeline event");
        self.sender.send(event).unwrap_or(0)
    }

    /// Number of active subscribers.
    #[must_use]
    pub fn receiver_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBroadcaster {
    fn default() -> Self {
        Self::new(100)
    }
}
