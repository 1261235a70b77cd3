//! AR scene payload types.
//!
//! A payload describes one self-contained AR scene: the nodes to place in
//! space and an ordered list of animation steps, each naming which node (if
//! any) should be emphasized while that step is shown. Payloads are immutable
//! once constructed; the step player never writes back into them.

use serde::{Deserialize, Serialize};

/// A node placed in the AR scene.
///
/// Node ids are assumed unique within a payload. Duplicate ids are a
/// payload-construction error and are not handled defensively here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneNode {
    /// Unique identifier, referenced by animation-step targets.
    pub id: String,

    /// Node kind hint for the renderer (e.g. `array_element`, `pointer`).
    #[serde(rename = "type")]
    pub kind: String,
}

impl SceneNode {
    /// Creates a new `SceneNode`.
    #[must_use]
    pub fn new(id: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
        }
    }
}

/// A directed edge between two scene nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneEdge {
    /// Id of the source node.
    pub from: String,
    /// Id of the destination node.
    pub to: String,
}

/// One discrete animation step within an AR scene.
///
/// A step without a `target`, or with a target that does not resolve to any
/// node in the payload, is not an error: the player simply reports no active
/// node for that step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationStep {
    /// 1-indexed step number as authored by the scene generator.
    pub step: u32,

    /// Action hint for the renderer (e.g. `highlight`, `swap`, `found`).
    pub action: String,

    /// Id of the node this step emphasizes, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,

    /// Per-step caption shown alongside the scene.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl AnimationStep {
    /// Creates a step that emphasizes the given node.
    #[must_use]
    pub fn targeting(
        step: u32,
        action: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            step,
            action: action.into(),
            target: Some(target.into()),
            description: None,
        }
    }

    /// Creates a step with no target node.
    #[must_use]
    pub fn untargeted(step: u32, action: impl Into<String>) -> Self {
        Self {
            step,
            action: action.into(),
            target: None,
            description: None,
        }
    }

    /// Attaches a caption to this step.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A complete AR scene description.
///
/// Produced by the analysis service as part of a successful analyze call, or
/// supplied as a static asset. The payload is handed to a [`crate::StepPlayer`]
/// which owns only its cursor, never the payload itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArPayload {
    /// Visualization family hint (e.g. `array_traversal`).
    pub visualization_type: String,

    /// Scene identifier understood by the host AR runtime.
    pub scene: String,

    /// Initial camera position as `[x, y, z]`.
    pub camera_position: [f32; 3],

    /// Nodes to place in the scene.
    pub nodes: Vec<SceneNode>,

    /// Edges between nodes.
    #[serde(default)]
    pub edges: Vec<SceneEdge>,

    /// Ordered animation steps.
    pub animation_steps: Vec<AnimationStep>,

    /// Scene-level explanation shown as an overlay.
    pub explanation_overlay: String,
}

impl ArPayload {
    /// Returns `true` if a node with the given id exists in this payload.
    #[must_use]
    pub fn has_node(&self, id: &str) -> bool {
        self.nodes.iter().any(|node| node.id == id)
    }

    /// Number of animation steps in this payload.
    #[must_use]
    pub fn step_count(&self) -> usize {
        self.animation_steps.len()
    }

    /// Returns `true` if the payload has no animation steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.animation_steps.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample_payload() -> ArPayload {
        ArPayload {
            visualization_type: "array_traversal".to_string(),
            scene: "LinearSearchScene".to_string(),
            camera_position: [0.0, 5.0, -10.0],
            nodes: vec![
                SceneNode::new("arr[0]", "array_element"),
                SceneNode::new("arr[1]", "array_element"),
            ],
            edges: Vec::new(),
            animation_steps: vec![
                AnimationStep::targeting(1, "highlight", "arr[0]"),
                AnimationStep::targeting(2, "found", "arr[1]")
                    .with_description("Match found"),
            ],
            explanation_overlay: "Linear search checks each element sequentially.".to_string(),
        }
    }

    #[test]
    fn test_has_node() {
        let payload = sample_payload();
        assert!(payload.has_node("arr[0]"));
        assert!(payload.has_node("arr[1]"));
        assert!(!payload.has_node("arr[2]"));
    }

    #[test]
    fn test_step_count_and_is_empty() {
        let payload = sample_payload();
        assert_eq!(payload.step_count(), 2);
        assert!(!payload.is_empty());

        let empty = ArPayload {
            animation_steps: Vec::new(),
            ..payload
        };
        assert_eq!(empty.step_count(), 0);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_payload_serialization_uses_wire_names() {
        let payload = sample_payload();
        let json = serde_json::to_string(&payload).unwrap();

        assert!(json.contains(r#""visualizationType":"array_traversal""#));
        assert!(json.contains(r#""scene":"LinearSearchScene""#));
        assert!(json.contains(r#""cameraPosition":[0.0,5.0,-10.0]"#));
        assert!(json.contains(r#""animationSteps""#));
        assert!(json.contains(r#""explanationOverlay""#));
        assert!(json.contains(r#""type":"array_element""#));
    }

    #[test]
    fn test_untargeted_step_omits_target() {
        let step = AnimationStep::untargeted(1, "move_mid");
        let json = serde_json::to_string(&step).unwrap();
        assert!(!json.contains("target"));

        let parsed: AnimationStep = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.target, None);
    }

    #[test]
    fn test_payload_deserialization_defaults_edges() {
        let json = r#"{
            "visualizationType": "divide_and_conquer",
            "scene": "BinarySearchScene",
            "cameraPosition": [0, 7, -12],
            "nodes": [{"id": "low", "type": "pointer"}],
            "animationSteps": [{"step": 1, "action": "move_mid"}],
            "explanationOverlay": "Binary search eliminates half of the array every step."
        }"#;

        let payload: ArPayload = serde_json::from_str(json).unwrap();
        assert!(payload.edges.is_empty());
        assert_eq!(payload.nodes[0].kind, "pointer");
        assert_eq!(payload.animation_steps[0].target, None);
    }

    #[test]
    fn test_payload_roundtrip() {
        let payload = sample_payload();
        let json = serde_json::to_string(&payload).unwrap();
        let restored: ArPayload = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, payload);
    }
}
