// Sample questions, one bucket per topic

use serde::Serialize;
use serde_json::{json, Value};
use std::sync::LazyLock;

use super::Topic;

/// A worked sample question
#[derive(Debug, Clone, Serialize)]
pub struct Sample {
    pub id: &'static str,
    pub question: &'static str,
    /// Solver input for this question, same shape as `/solve` `data`
    pub data: Value,
    pub expected: &'static str,
}

// Indexed by `Topic::ALL` order
static SAMPLES: LazyLock<[Vec<Sample>; 4]> = LazyLock::new(|| {
    [
        vec![Sample {
            id: "prob-1",
            question: "A bag contains 3 red and 2 blue balls. What is P(red)?",
            data: json!({"red": 3, "blue": 2}),
            expected: "3/5",
        }],
        vec![Sample {
            id: "coord-1",
            question: "Find the distance between (1,2) and (4,6).",
            data: json!({"x1": 1, "y1": 2, "x2": 4, "y2": 6}),
            expected: "5",
        }],
        vec![Sample {
            id: "calc-1",
            question: "Differentiate f(x) = 2x^2 + 3x + 1.",
            data: json!({"a": 2, "b": 3, "c": 1}),
            expected: "f'(x) = 4x + 3",
        }],
        vec![Sample {
            id: "mat-1",
            question: "Compute A·B where A=[[1,2],[3,4]], B=[[2,0],[1,2]].",
            data: json!({"A": [[1, 2], [3, 4]], "B": [[2, 0], [1, 2]]}),
            expected: "[[4, 4], [10, 8]]",
        }],
    ]
});

pub fn samples_for(topic: Topic) -> &'static [Sample] {
    let index = Topic::ALL
        .iter()
        .position(|t| *t == topic)
        .unwrap_or_default();
    &SAMPLES[index]
}

/// Look up a sample by id within one topic
pub fn find_sample(topic: Topic, id: &str) -> Option<&'static Sample> {
    samples_for(topic).iter().find(|s| s.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_sample() {
        let sample = find_sample(Topic::Probability, "prob-1").unwrap();
        assert_eq!(sample.data["red"], 3);
        assert!(find_sample(Topic::Probability, "coord-1").is_none());
        assert!(find_sample(Topic::Matrices, "mat-2").is_none());
    }

    #[test]
    fn test_sample_ids_unique() {
        let mut ids: Vec<_> = Topic::ALL
            .iter()
            .flat_map(|t| samples_for(*t).iter().map(|s| s.id))
            .collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }
}
