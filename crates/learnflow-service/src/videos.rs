//! Curated video recommendations.
//!
//! Lookup order: a curated entry for the exact concept, then a per-language
//! generic video, then the algorithm-fundamentals fallback. The lookup never
//! fails; an unrecognized concept in an unrecognized language still gets the
//! fallback entry.

use learnflow_pipeline::model::{Difficulty, VideoResult};

fn video(
    title: &str,
    description: &str,
    youtube_id: &str,
    duration: &str,
    difficulty: Difficulty,
    topics: &[&str],
) -> VideoResult {
    VideoResult {
        title: title.to_string(),
        description: description.to_string(),
        youtube_id: youtube_id.to_string(),
        duration: duration.to_string(),
        difficulty,
        topics: topics.iter().map(ToString::to_string).collect(),
    }
}

/// Curated entry for a known concept, if one exists.
fn curated(concept: &str) -> Option<VideoResult> {
    let entry = match concept {
        "linear_search" => video(
            "Linear Search – Striver DSA Series",
            "Detailed explanation of Linear Search with dry run and complexity analysis.",
            "C3H1pXyXv7w",
            "15:20",
            Difficulty::Beginner,
            &["Linear Search", "Time Complexity", "Brute Force Approach", "Array Traversal", "Edge Cases"],
        ),
        "binary_search" => video(
            "Binary Search – Striver DSA Series",
            "Complete binary search explanation with iterative and recursive methods.",
            "f6UU7V3szVw",
            "22:10",
            Difficulty::Intermediate,
            &["Binary Search", "Divide and Conquer", "Iterative Method", "Recursive Method", "Edge Conditions"],
        ),
        "sorting" => video(
            "Sorting Algorithms Overview – Aditya Verma",
            "Understanding Bubble, Selection and Insertion Sort with complexity analysis.",
            "kPRA0W1kECg",
            "18:45",
            Difficulty::Beginner,
            &["Bubble Sort", "Selection Sort", "Insertion Sort", "Time Complexity", "Stable Sorting"],
        ),
        "merge_sort" => video(
            "Merge Sort – Striver DSA Series",
            "Deep dive into merge sort using divide and conquer strategy.",
            "JSceec-wEyw",
            "24:30",
            Difficulty::Advanced,
            &["Merge Sort", "Recursion", "Divide and Conquer", "O(n log n)", "Stable Sorting"],
        ),
        "quick_sort" => video(
            "Quick Sort – Striver DSA Series",
            "Understanding partition logic and recursion in Quick Sort.",
            "Hoixgm4-P4M",
            "21:40",
            Difficulty::Advanced,
            &["Quick Sort", "Partitioning", "Recursion", "In-place Sorting", "Worst Case Analysis"],
        ),
        "array_max_min" => video(
            "Find Max & Min in Array – Striver",
            "Efficient approaches to find maximum and minimum elements.",
            "lXVy6YWFcRM",
            "14:10",
            Difficulty::Beginner,
            &["Array Traversal", "Single Pass Optimization", "Edge Cases", "Time Complexity"],
        ),
        _ => return None,
    };
    Some(entry)
}

/// Per-language generic video used when the concept has no curated entry.
fn by_language(language: &str, concept: &str) -> Option<VideoResult> {
    let description = format!("Conceptual explanation of {concept} in {language}");
    let entry = match language {
        "python" => video(
            "Python Algorithms Explained",
            &description,
            "pkYVOmU3MgA",
            "15:20",
            Difficulty::Beginner,
            &["Python", "Algorithms", "Time Complexity"],
        ),
        "javascript" => video(
            "JavaScript Algorithm Optimization",
            &description,
            "sJYl3w0U7sI",
            "12:45",
            Difficulty::Beginner,
            &["JavaScript", "Arrays", "Optimization"],
        ),
        "java" => video(
            "Java DSA Explained",
            &description,
            "AqxY4Rk1s1Y",
            "18:10",
            Difficulty::Intermediate,
            &["Java", "DSA", "Performance"],
        ),
        "cpp" => video(
            "C++ Algorithm Efficiency",
            &description,
            "8jLOx1hD3_o",
            "20:00",
            Difficulty::Intermediate,
            &["C++", "Algorithms", "STL"],
        ),
        _ => return None,
    };
    Some(entry)
}

fn fallback() -> VideoResult {
    video(
        "Algorithm Fundamentals – DSA Foundation",
        "Understanding algorithm thinking, complexity and optimization techniques.",
        "8hly31xKli0",
        "16:00",
        Difficulty::Beginner,
        &["Algorithms", "Big-O Notation", "Optimization", "Problem Solving Strategy"],
    )
}

/// Picks the recommended video for a concept in a language.
#[must_use]
pub fn lookup(language: &str, concept: &str) -> VideoResult {
    let language = language.to_lowercase();
    let concept = concept.to_lowercase();
    curated(&concept)
        .or_else(|| by_language(&language, &concept))
        .unwrap_or_else(fallback)
}
