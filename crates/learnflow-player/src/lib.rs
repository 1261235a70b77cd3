//! LearnFlow AR Step Player
//!
//! Defines the AR scene payload exchanged with the analysis service and the
//! step player that scrubs through a payload's animation steps. The player
//! only decides *which* node is emphasized at the current step; drawing nodes
//! and highlights is the job of the host AR runtime.

pub mod payload;
pub mod player;

pub use payload::{AnimationStep, ArPayload, SceneEdge, SceneNode};
pub use player::StepPlayer;
