//! Code quality evaluation.
//!
//! Scores four fixed dimensions out of 10 and folds them into an overall
//! score and letter grade. Efficiency is the only dimension driven by the
//! detected solution tier; the rest are flat baselines.

use learnflow_pipeline::model::{EvaluationReport, Feedback, GraphAnalysis, Metric};
use learnflow_pipeline::{PatternFlags, SolutionKind};

use crate::detector::Classification;

fn grade_for(overall: u8) -> &'static str {
    match overall {
        90..=u8::MAX => "A+",
        80..=89 => "A",
        70..=79 => "B+",
        60..=69 => "B",
        _ => "C",
    }
}

/// Produces the evaluation report for a classified submission.
#[must_use]
pub fn evaluate(flags: &PatternFlags, classification: &Classification) -> EvaluationReport {
    let solution_type = classification.solution_type;

    let mut correctness: i8 = 8;
    let mut efficiency: i8 = match solution_type {
        SolutionKind::Optimal => 9,
        SolutionKind::Better => 7,
        SolutionKind::BruteForce => 4,
    };
    let style: i8 = 7;
    let practices: i8 = 7;

    if flags.nested_loop {
        efficiency -= 2;
    }
    if flags.binary_search {
        correctness += 1;
    }
    efficiency = efficiency.clamp(3, 10);

    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    let overall =
        (f32::from(correctness + efficiency + style + practices) * 2.5) as u8;

    // All dimension scores are clamped non-negative by this point.
    #[allow(clippy::cast_sign_loss)]
    let (correctness, efficiency, style, practices) = (
        correctness as u8,
        efficiency as u8,
        style as u8,
        practices as u8,
    );

    EvaluationReport {
        overall_score: overall,
        grade: grade_for(overall).to_string(),
        metrics: vec![
            Metric {
                name: "Algorithm Correctness".to_string(),
                score: correctness,
                max_score: 10,
                description: "Correct logic for identified problem".to_string(),
                suggestions: vec!["Add edge case handling".to_string()],
            },
            Metric {
                name: "Code Efficiency".to_string(),
                score: efficiency,
                max_score: 10,
                description: format!("Efficiency based on {solution_type} approach"),
                suggestions: vec![
                    "Reduce loops".to_string(),
                    "Use optimized methods".to_string(),
                ],
            },
            Metric {
                name: "Code Style".to_string(),
                score: style,
                max_score: 10,
                description: "Readable and structured".to_string(),
                suggestions: vec!["Add comments".to_string()],
            },
            Metric {
                name: "Best Practices".to_string(),
                score: practices,
                max_score: 10,
                description: "Standard coding conventions followed".to_string(),
                suggestions: vec!["Input validation".to_string()],
            },
        ],
        feedback: Feedback {
            strengths: vec![
                format!("Detected {solution_type} solution"),
                "Readable implementation".to_string(),
            ],
            improvements: vec![
                "Handle corner cases".to_string(),
                "Improve modularity".to_string(),
            ],
            recommendations: vec![
                "Use helper functions".to_string(),
                "Add documentation".to_string(),
            ],
        },
        graph_analysis: GraphAnalysis {
            ast_complexity: if flags.nested_loop { 12 } else { 6 },
            cfg_complexity: 8,
            semantic_similarity: if solution_type == SolutionKind::BruteForce {
                60
            } else {
                85
            },
        },
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn classification(kind: SolutionKind) -> Classification {
        Classification {
            solution_type: kind,
            time_complexity: "O(n)",
            score: 70,
        }
    }

    #[test]
    fn test_optimal_binary_search_grades_highest() {
        let flags = PatternFlags {
            binary_search: true,
            while_loop: true,
            ..PatternFlags::default()
        };
        let report = evaluate(&flags, &classification(SolutionKind::Optimal));

        // correctness 9, efficiency 9, style 7, practices 7 -> 80, grade A.
        assert_eq!(report.overall_score, 80);
        assert_eq!(report.grade, "A");
        assert_eq!(report.metrics[0].score, 9);
        assert_eq!(report.graph_analysis.semantic_similarity, 85);
    }

    #[test]
    fn test_brute_force_with_nested_loops() {
        let flags = PatternFlags {
            nested_loop: true,
            ..PatternFlags::default()
        };
        let report = evaluate(&flags, &classification(SolutionKind::BruteForce));

        // efficiency 4 - 2 = 2, clamped to 3; 8+3+7+7 -> 62, grade B.
        assert_eq!(report.metrics[1].score, 3);
        assert_eq!(report.overall_score, 62);
        assert_eq!(report.grade, "B");
        assert_eq!(report.graph_analysis.ast_complexity, 12);
        assert_eq!(report.graph_analysis.semantic_similarity, 60);
    }

    #[test]
    fn test_better_tier_scores_mid() {
        let flags = PatternFlags {
            single_loop: true,
            ..PatternFlags::default()
        };
        let report = evaluate(&flags, &classification(SolutionKind::Better));

        // 8+7+7+7 -> 72, grade B+.
        assert_eq!(report.overall_score, 72);
        assert_eq!(report.grade, "B+");
        assert!(report.metrics[1].description.contains("better"));
        assert_eq!(report.graph_analysis.ast_complexity, 6);
    }

    #[test]
    fn test_grade_boundaries() {
        assert_eq!(grade_for(95), "A+");
        assert_eq!(grade_for(90), "A+");
        assert_eq!(grade_for(89), "A");
        assert_eq!(grade_for(70), "B+");
        assert_eq!(grade_for(60), "B");
        assert_eq!(grade_for(59), "C");
    }

    #[test]
    fn test_metrics_are_complete() {
        let report = evaluate(&PatternFlags::default(), &classification(SolutionKind::Better));
        assert_eq!(report.metrics.len(), 4);
        assert!(report.metrics.iter().all(|m| m.max_score == 10));
        assert_eq!(report.feedback.strengths.len(), 2);
    }
}
