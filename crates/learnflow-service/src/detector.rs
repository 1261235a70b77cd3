//! Language, problem, and pattern detection.
//!
//! Everything here works on a lowercased view of the submitted code with
//! cheap keyword heuristics. The detectors never fail: code that matches
//! nothing is reported as `unknown` and classified by its loop structure
//! alone.

use std::sync::OnceLock;

use learnflow_pipeline::model::{PatternFlags, SolutionKind};
use regex::Regex;

/// Result of classifying the submitted code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    /// Which tier the submission falls into.
    pub solution_type: SolutionKind,
    /// Estimated time complexity.
    pub time_complexity: &'static str,
    /// Quality score, 0 to 100.
    pub score: u8,
}

static FOR_KEYWORD: OnceLock<Option<Regex>> = OnceLock::new();
static WHILE_KEYWORD: OnceLock<Option<Regex>> = OnceLock::new();

/// Counts whole-word occurrences of a keyword, compiling its pattern once.
fn keyword_count(cell: &'static OnceLock<Option<Regex>>, pattern: &str, code: &str) -> usize {
    cell.get_or_init(|| Regex::new(pattern).ok())
        .as_ref()
        .map_or(0, |re| re.find_iter(code).count())
}

/// Counts whole-word `for` loops. `forEach` does not count.
fn for_count(code: &str) -> usize {
    keyword_count(&FOR_KEYWORD, r"\bfor\b", code)
}

/// Counts whole-word `while` loops.
fn while_count(code: &str) -> usize {
    keyword_count(&WHILE_KEYWORD, r"\bwhile\b", code)
}

/// Guesses the language from the code itself, ignoring what the submission
/// claims.
#[must_use]
pub fn detect_language(code: &str) -> String {
    let code = code.to_lowercase();

    let language = if code.contains("def ") && code.contains(':') {
        "python"
    } else if code.contains("function") || code.contains("=>") || code.contains("let ") {
        "javascript"
    } else if code.contains("public static") || code.contains("system.out") {
        "java"
    } else if code.contains("console.writeline") || code.contains("using system") {
        "csharp"
    } else if code.contains("#include") && (code.contains("std::") || code.contains("cout")) {
        "cpp"
    } else {
        "unknown"
    };
    language.to_string()
}

/// Identifies which classic problem the code appears to solve.
///
/// Checks run in specificity order: binary search first, the generic
/// linear-search shape last, `unknown` when nothing matches.
#[must_use]
pub fn detect_problem(code: &str) -> String {
    let code = code.to_lowercase();
    let for_count = for_count(&code);

    let problem = if code.contains("low") && code.contains("high") && code.contains("mid") {
        "binary_search"
    } else if code.contains("merge")
        && (code.contains("mid") || code.contains("len(arr)//2"))
        && (code.contains("def") || code.contains("function"))
    {
        "merge_sort"
    } else if code.contains("pivot") && (code.contains("partition") || code.contains("i<j")) {
        "quick_sort"
    } else if for_count >= 2 && code.contains("arr[j]") && code.contains("arr[j+1]") {
        "sorting"
    } else if code.contains("max") || code.contains("min") || (code.contains("arr[i]") && code.contains('>')) {
        "array_max_min"
    } else if for_count >= 1 && code.contains("if") && code.contains("==") {
        "linear_search"
    } else {
        "unknown"
    };
    problem.to_string()
}

const BUILT_IN_MARKERS: [&str; 9] = [
    "max(",
    "min(",
    "sorted(",
    "math.max",
    ".sort(",
    "collections.max",
    "arrays.sort",
    "std::max",
    "max_element",
];

/// Extracts the structural pattern flags used for classification.
#[must_use]
pub fn detect_patterns(code: &str) -> PatternFlags {
    let code = code.to_lowercase();
    let for_count = for_count(&code);
    let while_count = while_count(&code);

    PatternFlags {
        nested_loop: for_count >= 2 || (for_count >= 1 && while_count >= 1),
        single_loop: for_count == 1 && while_count == 0,
        while_loop: while_count >= 1,
        recursion: (code.contains("def") || code.contains("void") || code.contains("int"))
            && code.matches('(').count() > 1,
        built_in: BUILT_IN_MARKERS.iter().any(|m| code.contains(m)),
        binary_search: code.contains("binary_search")
            || (code.contains("low") && code.contains("high") && code.contains("mid")),
    }
}

/// Classifies a submission from its pattern flags.
///
/// Nested loops dominate: a brute-force shape stays brute-force even when
/// binary-search vocabulary is present.
#[must_use]
pub const fn classify(flags: &PatternFlags) -> Classification {
    if flags.nested_loop {
        return Classification {
            solution_type: SolutionKind::BruteForce,
            time_complexity: "O(n²)",
            score: 40,
        };
    }
    if flags.binary_search {
        return Classification {
            solution_type: SolutionKind::Optimal,
            time_complexity: "O(log n)",
            score: 90,
        };
    }
    if flags.built_in {
        return Classification {
            solution_type: SolutionKind::Optimal,
            time_complexity: "O(n)",
            score: 85,
        };
    }
    if flags.single_loop {
        return Classification {
            solution_type: SolutionKind::Better,
            time_complexity: "O(n)",
            score: 70,
        };
    }
    Classification {
        solution_type: SolutionKind::BruteForce,
        time_complexity: "O(n²)",
        score: 45,
    }
}
