//! AR scene generation.
//!
//! One canned scene per detected problem family. Unknown problems get a
//! bare generic scene with no nodes or steps; the player treats that as a
//! valid, if silent, payload.

use learnflow_player::{AnimationStep, ArPayload, SceneNode};

fn linear_search() -> ArPayload {
    ArPayload {
        visualization_type: "array_traversal".to_string(),
        scene: "LinearSearchScene".to_string(),
        camera_position: [0.0, 5.0, -10.0],
        nodes: vec![
            SceneNode::new("arr[0]", "array_element"),
            SceneNode::new("arr[1]", "array_element"),
            SceneNode::new("arr[2]", "array_element"),
            SceneNode::new("arr[3]", "array_element"),
        ],
        edges: Vec::new(),
        animation_steps: vec![
            AnimationStep::targeting(1, "highlight", "arr[0]"),
            AnimationStep::targeting(2, "highlight", "arr[1]"),
            AnimationStep::targeting(3, "highlight", "arr[2]"),
            AnimationStep::targeting(4, "found", "arr[2]"),
        ],
        explanation_overlay: "Linear search checks each element sequentially.".to_string(),
    }
}

fn binary_search() -> ArPayload {
    ArPayload {
        visualization_type: "divide_and_conquer".to_string(),
        scene: "BinarySearchScene".to_string(),
        camera_position: [0.0, 7.0, -12.0],
        nodes: vec![
            SceneNode::new("low", "pointer"),
            SceneNode::new("mid", "pointer"),
            SceneNode::new("high", "pointer"),
        ],
        edges: Vec::new(),
        animation_steps: vec![
            AnimationStep::untargeted(1, "move_mid"),
            AnimationStep::untargeted(2, "eliminate_half"),
            AnimationStep::untargeted(3, "move_pointers"),
        ],
        explanation_overlay: "Binary search eliminates half of the array every step.".to_string(),
    }
}

fn sorting() -> ArPayload {
    ArPayload {
        visualization_type: "swap_animation".to_string(),
        scene: "SortingScene".to_string(),
        camera_position: [0.0, 6.0, -10.0],
        nodes: vec![
            SceneNode::new("arr[i]", "array_element"),
            SceneNode::new("arr[j]", "array_element"),
        ],
        edges: Vec::new(),
        animation_steps: vec![
            AnimationStep::untargeted(1, "compare"),
            AnimationStep::untargeted(2, "swap"),
            AnimationStep::untargeted(3, "reorder"),
        ],
        explanation_overlay: "Sorting algorithms compare and swap elements.".to_string(),
    }
}

fn array_max_min() -> ArPayload {
    ArPayload {
        visualization_type: "array_max".to_string(),
        scene: "ArrayMaxScene".to_string(),
        camera_position: [0.0, 5.0, -10.0],
        nodes: vec![
            SceneNode::new("arr[0]", "array_element"),
            SceneNode::new("arr[1]", "array_element"),
            SceneNode::new("arr[2]", "array_element"),
        ],
        edges: Vec::new(),
        animation_steps: vec![
            AnimationStep::targeting(1, "highlight", "arr[0]")
                .with_description("Start with first element"),
            AnimationStep::targeting(2, "highlight", "arr[2]")
                .with_description("New max found at index 2"),
        ],
        explanation_overlay: "We update maximum when larger value is found.".to_string(),
    }
}

fn generic() -> ArPayload {
    ArPayload {
        visualization_type: "generic_algorithm".to_string(),
        scene: "GenericScene".to_string(),
        camera_position: [0.0, 5.0, -10.0],
        nodes: Vec::new(),
        edges: Vec::new(),
        animation_steps: Vec::new(),
        explanation_overlay: "Generic algorithm visualization.".to_string(),
    }
}

/// Builds the AR scene for a detected problem.
///
/// The three sort families share one swap-animation scene.
#[must_use]
pub fn payload_for(problem: &str) -> ArPayload {
    match problem {
        "linear_search" => linear_search(),
        "binary_search" => binary_search(),
        "sorting" | "merge_sort" | "quick_sort" => sorting(),
        "array_max_min" => array_max_min(),
        _ => generic(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_search_targets_resolve() {
        let payload = payload_for("linear_search");
        assert_eq!(payload.scene, "LinearSearchScene");
        for step in &payload.animation_steps {
            let target = step.target.as_deref().unwrap();
            assert!(payload.has_node(target), "dangling target {target}");
        }
    }

    #[test]
    fn test_binary_search_steps_are_untargeted() {
        let payload = payload_for("binary_search");
        assert_eq!(payload.step_count(), 3);
        assert!(payload.animation_steps.iter().all(|s| s.target.is_none()));
        assert!(payload.has_node("mid"));
    }

    #[test]
    fn test_sort_families_share_the_swap_scene() {
        for problem in ["sorting", "merge_sort", "quick_sort"] {
            assert_eq!(payload_for(problem).scene, "SortingScene");
        }
    }

    #[test]
    fn test_unknown_problem_gets_empty_generic_scene() {
        let payload = payload_for("unknown");
        assert_eq!(payload.scene, "GenericScene");
        assert!(payload.is_empty());
        assert!(payload.nodes.is_empty());
    }

    #[test]
    fn test_array_max_steps_have_descriptions() {
        let payload = payload_for("array_max_min");
        assert!(payload
            .animation_steps
            .iter()
            .all(|s| s.description.is_some()));
    }
}
