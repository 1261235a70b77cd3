//! Solution variant catalog.
//!
//! Canned brute-force, better, and optimal snippets per detected problem and
//! language. Unknown problems fall back to generic loop-shaped variants;
//! unknown languages get empty snippets rather than an error.

use learnflow_pipeline::model::Solution;
use learnflow_pipeline::SolutionKind;

use crate::detector::Classification;

/// The three snippet tiers for one problem in one language.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Variants {
    /// Brute-force snippet.
    pub brute: String,
    /// Improved snippet.
    pub better: String,
    /// Best-known snippet.
    pub optimal: String,
}

impl Variants {
    fn new(brute: &str, better: &str, optimal: &str) -> Self {
        Self {
            brute: brute.to_string(),
            better: better.to_string(),
            optimal: optimal.to_string(),
        }
    }
}

fn linear_search(language: &str) -> Variants {
    match language {
        "python" => Variants::new(
            "for i in range(len(arr)):\n    if arr[i] == x:\n        return i\nreturn -1",
            "for idx, val in enumerate(arr):\n    if val == x:\n        return idx\nreturn -1",
            "# Linear search is already optimal\nfor i, v in enumerate(arr):\n    if v == x:\n        return i",
        ),
        "javascript" => Variants::new(
            "for(let i=0;i<arr.length;i++){ if(arr[i]===x) return i; }",
            "return arr.indexOf(x);",
            "return arr.indexOf(x);",
        ),
        "java" => Variants::new(
            "for(int i=0;i<arr.length;i++){\n    if(arr[i]==x) return i;\n}\nreturn -1;",
            "return IntStream.range(0, arr.length).filter(i -> arr[i]==x).findFirst().orElse(-1);",
            "return Arrays.asList(arr).indexOf(x);",
        ),
        "cpp" => Variants::new(
            "for(int i=0;i<n;i++){\n    if(arr[i]==x) return i;\n}\nreturn -1;",
            "auto it = find(arr.begin(), arr.end(), x);",
            "return find(arr.begin(), arr.end(), x) - arr.begin();",
        ),
        "csharp" => Variants::new(
            "for(int i=0;i<arr.Length;i++){\n    if(arr[i]==x) return i;\n}\nreturn -1;",
            "return Array.IndexOf(arr, x);",
            "return Array.IndexOf(arr, x);",
        ),
        _ => Variants::default(),
    }
}

fn array_max_min(language: &str) -> Variants {
    match language {
        "python" => Variants::new(
            "max_val = arr[0]\nfor i in range(len(arr)):\n    for j in range(len(arr)):\n        if arr[j] > max_val:\n            max_val = arr[j]",
            "max_val = arr[0]\nfor v in arr:\n    if v > max_val:\n        max_val = v",
            "max(arr)",
        ),
        "javascript" => Variants::new(
            "for(let i=0;i<arr.length;i++){ for(let j=0;j<arr.length;j++){} }",
            "let max=arr[0]; for(let v of arr){ if(v>max) max=v; }",
            "Math.max(...arr)",
        ),
        "java" => Variants::new(
            "int max=arr[0];\nfor(int i=0;i<arr.length;i++){\n  for(int j=0;j<arr.length;j++){\n    if(arr[j]>max) max=arr[j];\n  }\n}",
            "int max=arr[0];\nfor(int v:arr){ if(v>max) max=v; }",
            "Collections.max(list);",
        ),
        "cpp" => Variants::new(
            "/* nested loop max */",
            "int max=arr[0]; for(int v:arr) if(v>max) max=v;",
            "*max_element(arr.begin(), arr.end())",
        ),
        "csharp" => Variants::new(
            "int max=arr[0];\nfor(int i=0;i<arr.Length;i++){\n  for(int j=0;j<arr.Length;j++){\n    if(arr[j]>max) max=arr[j];\n  }\n}",
            "int max=arr[0];\nforeach(int v in arr){ if(v>max) max=v; }",
            "arr.Max()",
        ),
        _ => Variants::default(),
    }
}

fn binary_search(language: &str) -> Variants {
    match language {
        "python" => Variants::new(
            "for i in range(len(arr)):\n    if arr[i] == x:\n        return i",
            "for i, v in enumerate(arr):\n    if v == x:\n        return i",
            "low, high = 0, len(arr)-1\nwhile low <= high:\n    mid = (low+high)//2\n    if arr[mid] == x: return mid\n    elif arr[mid] < x: low = mid+1\n    else: high = mid-1",
        ),
        "javascript" => Variants::new(
            "for(let i=0;i<arr.length;i++){ if(arr[i]===x) return i; }",
            "return arr.indexOf(x);",
            "let lo=0, hi=arr.length-1;\nwhile(lo<=hi){\n  const mid=(lo+hi)>>1;\n  if(arr[mid]===x) return mid;\n  if(arr[mid]<x) lo=mid+1; else hi=mid-1;\n}",
        ),
        _ => Variants::default(),
    }
}

fn sorting(language: &str) -> Variants {
    match language {
        "python" => Variants::new(
            "for i in range(n):\n    for j in range(0, n-i-1):\n        if arr[j] > arr[j+1]:\n            arr[j], arr[j+1] = arr[j+1], arr[j]",
            "arr.sort()  # TimSort (optimized)",
            "sorted(arr)",
        ),
        "javascript" => Variants::new(
            "for(let i=0;i<n;i++){\n  for(let j=0;j<n-i-1;j++){\n    if(arr[j]>arr[j+1]){\n      [arr[j],arr[j+1]]=[arr[j+1],arr[j]];\n    }\n  }\n}",
            "arr.sort((a,b)=>a-b)",
            "arr.sort((a,b)=>a-b)",
        ),
        "java" => Variants::new(
            "for(int i=0;i<n;i++){\n  for(int j=0;j<n-i-1;j++){\n    if(arr[j]>arr[j+1]){\n      int t=arr[j]; arr[j]=arr[j+1]; arr[j+1]=t;\n    }\n  }\n}",
            "Arrays.sort(arr);",
            "Arrays.sort(arr);",
        ),
        _ => Variants::default(),
    }
}

fn merge_sort(language: &str) -> Variants {
    match language {
        "python" => Variants::new(
            "Use bubble sort (nested loops)",
            "Use merge sort with recursion",
            "sorted(arr)  # TimSort (O(n log n))",
        ),
        "javascript" => Variants::new(
            "Bubble sort using nested loops",
            "Recursive merge sort",
            "arr.sort((a,b)=>a-b)",
        ),
        "java" => Variants::new("Bubble sort", "Merge sort implementation", "Arrays.sort(arr)"),
        _ => Variants::default(),
    }
}

fn quick_sort(language: &str) -> Variants {
    match language {
        "python" => Variants::new("Bubble sort", "Quick sort with partition", "sorted(arr)"),
        "javascript" => Variants::new("Bubble sort", "Quick sort recursion", "arr.sort((a,b)=>a-b)"),
        "java" => Variants::new("Bubble sort", "Quick sort algorithm", "Arrays.sort(arr)"),
        _ => Variants::default(),
    }
}

fn generic(language: &str) -> Variants {
    match language {
        "python" => Variants::new(
            "for i in range(n):\n    for j in range(n):\n        pass",
            "for i in range(n):\n    pass",
            "max(arr)",
        ),
        "javascript" => Variants::new(
            "for(let i=0;i<n;i++){ for(let j=0;j<n;j++){} }",
            "for(let i=0;i<n;i++){}",
            "Math.max(...arr)",
        ),
        "java" => Variants::new(
            "for(int i=0;i<n;i++){ for(int j=0;j<n;j++){} }",
            "for(int i=0;i<n;i++){}",
            "Collections.max(list);",
        ),
        _ => Variants::default(),
    }
}

/// Looks up the snippet variants for a detected problem and language.
#[must_use]
pub fn solution_variants(problem: &str, language: &str) -> Variants {
    match problem {
        "linear_search" => linear_search(language),
        "array_max_min" => array_max_min(language),
        "binary_search" => binary_search(language),
        "sorting" => sorting(language),
        "merge_sort" => merge_sort(language),
        "quick_sort" => quick_sort(language),
        _ => generic(language),
    }
}

/// Builds the three-solution response list for an analyze call.
///
/// The optimal entry carries the classification's complexity and score, so
/// it reflects how close the submission already is to the best approach.
#[must_use]
pub fn build_solutions(
    problem: &str,
    variants: &Variants,
    classification: &Classification,
) -> Vec<Solution> {
    vec![
        Solution {
            kind: SolutionKind::BruteForce,
            title: "Brute Force Approach".to_string(),
            description: format!("Brute force solution for {problem}."),
            time_complexity: "O(n²)".to_string(),
            space_complexity: "O(1)".to_string(),
            efficiency: 40,
            code: variants.brute.clone(),
            explanation: "Checks all possible combinations.".to_string(),
        },
        Solution {
            kind: SolutionKind::Better,
            title: "Better Approach".to_string(),
            description: format!("Improved solution for {problem}."),
            time_complexity: "O(n)".to_string(),
            space_complexity: "O(1)".to_string(),
            efficiency: 70,
            code: variants.better.clone(),
            explanation: "Reduces unnecessary work.".to_string(),
        },
        Solution {
            kind: SolutionKind::Optimal,
            title: "Optimal Approach".to_string(),
            description: format!("Most efficient solution for {problem}."),
            time_complexity: classification.time_complexity.to_string(),
            space_complexity: "O(1)".to_string(),
            efficiency: classification.score,
            code: variants.optimal.clone(),
            explanation: "Best known approach.".to_string(),
        },
    ]
}
