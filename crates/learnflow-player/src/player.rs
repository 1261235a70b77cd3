//! The step player.
//!
//! Owns a single cursor into the animation steps of the payload it is
//! currently rendering. The cursor is clamped to `0..step_count()` and only
//! ever moves through [`StepPlayer::next`] and [`StepPlayer::previous`];
//! loading a payload resets it to zero unconditionally.

use std::sync::Arc;

use tracing::debug;

use crate::payload::{AnimationStep, ArPayload};

/// Scrubs through the animation steps of one AR payload.
///
/// The player is handed its payload, it does not own it: the payload's
/// lifetime is controlled by whichever pipeline stage (or static asset)
/// supplied it. Malformed steps — an empty step list, or a target that
/// resolves to no node — degrade to "no active node" rather than failing.
#[derive(Debug, Clone, Default)]
pub struct StepPlayer {
    payload: Option<Arc<ArPayload>>,
    cursor: usize,
}

impl StepPlayer {
    /// Creates a player with no payload loaded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the current payload and resets the cursor to step zero.
    ///
    /// The reset is unconditional, even when the new payload is the same one
    /// already loaded, so a scene always starts at its first step.
    pub fn load_payload(&mut self, payload: Arc<ArPayload>) {
        debug!(scene = %payload.scene, steps = payload.step_count(), "Loading AR payload");
        self.payload = Some(payload);
        self.cursor = 0;
    }

    /// Unloads the current payload and resets the cursor.
    pub fn clear(&mut self) {
        self.payload = None;
        self.cursor = 0;
    }

    /// The payload currently being rendered, if any.
    #[must_use]
    pub fn payload(&self) -> Option<&Arc<ArPayload>> {
        self.payload.as_ref()
    }

    /// The current step index.
    #[must_use]
    pub const fn current_step(&self) -> usize {
        self.cursor
    }

    /// Number of steps in the loaded payload, zero when nothing is loaded.
    #[must_use]
    pub fn step_count(&self) -> usize {
        self.payload.as_ref().map_or(0, |p| p.step_count())
    }

    /// Advances to the next step, clamped at the last step.
    pub fn next(&mut self) {
        if self.cursor + 1 < self.step_count() {
            self.cursor += 1;
        }
    }

    /// Moves back to the previous step, clamped at step zero.
    pub fn previous(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// The animation step under the cursor, if the payload is non-empty.
    #[must_use]
    pub fn current_step_data(&self) -> Option<&AnimationStep> {
        self.payload
            .as_deref()
            .and_then(|p| p.animation_steps.get(self.cursor))
    }

    /// Id of the node emphasized by the current step.
    ///
    /// Returns `None` when no payload is loaded, the payload has no steps,
    /// the current step has no target, or the target does not resolve to a
    /// node in the payload. Exactly zero or one node is active at a time.
    #[must_use]
    pub fn active_node_id(&self) -> Option<&str> {
        let payload = self.payload.as_deref()?;
        let step = payload.animation_steps.get(self.cursor)?;
        let target = step.target.as_deref()?;
        payload.has_node(target).then_some(target)
    }
}
