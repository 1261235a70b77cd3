//! Wire types shared with the analysis service.
//!
//! Everything in this module crosses the HTTP boundary, so field names follow
//! the service's camelCase JSON convention. The structs are plain data; the
//! orchestrator decides when each piece is fetched and stored.

use learnflow_player::ArPayload;
use serde::{Deserialize, Serialize};

use crate::error::{PipelineError, RejectReason, Result};

// ============================================================================
// Language
// ============================================================================

/// Programming language a submission claims to be written in.
///
/// Serializes to its lowercase name and accepts any casing on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    /// JavaScript.
    Javascript,
    /// Python.
    Python,
    /// Java.
    Java,
    /// C++.
    Cpp,
    /// C#.
    Csharp,
}

impl Language {
    /// All supported languages.
    pub const ALL: [Self; 5] = [
        Self::Javascript,
        Self::Python,
        Self::Java,
        Self::Cpp,
        Self::Csharp,
    ];

    /// Parses a language name, case-insensitively.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "javascript" => Some(Self::Javascript),
            "python" => Some(Self::Python),
            "java" => Some(Self::Java),
            "cpp" => Some(Self::Cpp),
            "csharp" => Some(Self::Csharp),
            _ => None,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Javascript => write!(f, "javascript"),
            Self::Python => write!(f, "python"),
            Self::Java => write!(f, "java"),
            Self::Cpp => write!(f, "cpp"),
            Self::Csharp => write!(f, "csharp"),
        }
    }
}

impl Serialize for Language {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).ok_or_else(|| {
            serde::de::Error::custom(format!(
                "unknown language '{value}', expected one of: javascript, python, java, cpp, csharp"
            ))
        })
    }
}

// ============================================================================
// Submission
// ============================================================================

/// A validated code submission, as sent to the analyze and evaluate endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRequest {
    /// The source code under analysis. Never empty after trimming.
    pub code: String,
    /// The language the author claims the code is written in.
    pub language: Language,
}

impl SubmissionRequest {
    /// Validates and builds a submission.
    ///
    /// # Errors
    ///
    /// Returns `SubmissionRejected` when the code is empty or whitespace-only.
    pub fn new(code: impl Into<String>, language: Language) -> Result<Self> {
        let code = code.into();
        if code.trim().is_empty() {
            return Err(PipelineError::rejected(RejectReason::EmptyCode));
        }
        Ok(Self { code, language })
    }
}

// ============================================================================
// Analysis
// ============================================================================

/// Strategy tier of a generated solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolutionKind {
    /// The straightforward exhaustive approach.
    BruteForce,
    /// An improved but not optimal approach.
    Better,
    /// The best known approach for the detected problem.
    Optimal,
}

impl SolutionKind {
    /// Wire name of this kind, as used by the service.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BruteForce => "brute-force",
            Self::Better => "better",
            Self::Optimal => "optimal",
        }
    }

    /// Parses a wire name, case-insensitively.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "brute-force" => Some(Self::BruteForce),
            "better" => Some(Self::Better),
            "optimal" => Some(Self::Optimal),
            _ => None,
        }
    }
}

impl std::fmt::Display for SolutionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for SolutionKind {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SolutionKind {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).ok_or_else(|| {
            serde::de::Error::custom(format!(
                "unknown solution kind '{value}', expected one of: brute-force, better, optimal"
            ))
        })
    }
}

/// One generated solution variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Solution {
    /// Strategy tier.
    #[serde(rename = "type")]
    pub kind: SolutionKind,
    /// Human-readable title.
    pub title: String,
    /// One-line description.
    pub description: String,
    /// Big-O time complexity, e.g. `O(n log n)`.
    pub time_complexity: String,
    /// Big-O space complexity.
    pub space_complexity: String,
    /// Efficiency score, 0 to 100.
    pub efficiency: u8,
    /// The solution source code.
    pub code: String,
    /// Short explanation of the approach.
    pub explanation: String,
}

/// Structural pattern flags detected in the submitted code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternFlags {
    /// Two or more nested iteration constructs.
    pub nested_loop: bool,
    /// Exactly one `for` loop and no `while` loops.
    pub single_loop: bool,
    /// At least one `while` loop.
    pub while_loop: bool,
    /// The code appears to call itself.
    pub recursion: bool,
    /// Uses a built-in aggregate or sort routine.
    pub built_in: bool,
    /// Binary-search pointer vocabulary is present.
    pub binary_search: bool,
}

/// Classification of the submitted code itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternAnalysis {
    /// Which tier the submitted code falls into.
    pub solution_type: SolutionKind,
    /// Estimated time complexity of the submission.
    pub time_complexity: String,
    /// Quality score for the submission, 0 to 100.
    pub score: u8,
    /// Pattern flags that drove the classification.
    pub patterns_detected: PatternFlags,
}

/// Full response of a successful analyze call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisOutcome {
    /// Language the service detected from the code itself.
    pub detected_language: String,
    /// Label of the detected algorithmic problem, `unknown` if none matched.
    pub problem_detected: String,
    /// Classification of the submitted code.
    pub analysis: PatternAnalysis,
    /// Generated solution variants, ordered brute-force, better, optimal.
    pub solutions: Vec<Solution>,
    /// AR scene for the detected problem.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ar_payload: Option<ArPayload>,
}

// ============================================================================
// Evaluation
// ============================================================================

/// One scored quality dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metric {
    /// Dimension name, e.g. `Code Efficiency`.
    pub name: String,
    /// Awarded score.
    pub score: u8,
    /// Maximum awardable score.
    pub max_score: u8,
    /// What this dimension measured.
    pub description: String,
    /// Concrete suggestions for this dimension.
    pub suggestions: Vec<String>,
}

/// Narrative feedback sections of an evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    /// What the submission does well.
    pub strengths: Vec<String>,
    /// What to fix first.
    pub improvements: Vec<String>,
    /// Longer-term recommendations.
    pub recommendations: Vec<String>,
}

/// Structural metrics derived from program graphs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphAnalysis {
    /// Abstract-syntax-tree complexity estimate.
    pub ast_complexity: u32,
    /// Control-flow-graph complexity estimate.
    pub cfg_complexity: u32,
    /// Similarity to the optimal solution, 0 to 100.
    pub semantic_similarity: u8,
}

/// Full response of a successful evaluate call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationReport {
    /// Aggregate score, 0 to 100.
    pub overall_score: u8,
    /// Letter grade derived from the overall score.
    pub grade: String,
    /// Per-dimension scores.
    pub metrics: Vec<Metric>,
    /// Narrative feedback.
    pub feedback: Feedback,
    /// Graph-based structural metrics.
    pub graph_analysis: GraphAnalysis,
}

// ============================================================================
// Video
// ============================================================================

/// Audience level of a recommended video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Suitable for first exposure to the concept.
    Beginner,
    /// Assumes basic familiarity.
    Intermediate,
    /// In-depth treatment.
    Advanced,
}

/// Full response of a successful video lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoResult {
    /// Video title.
    pub title: String,
    /// One-line description.
    pub description: String,
    /// YouTube video id.
    pub youtube_id: String,
    /// Duration as `mm:ss`.
    pub duration: String,
    /// Audience level.
    pub difficulty: Difficulty,
    /// Covered topics.
    pub topics: Vec<String>,
}
