//! Solver module
//!
//! One closed-form computation per topic. Each solver reads its inputs from the
//! request's `data` object and returns the result together with worked steps.

mod calculus;
mod error;
mod geometry;
mod matrices;
mod probability;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::catalog::{self, Topic};

pub use error::SolveError;

/// Body of `POST /solve`
#[derive(Debug, Deserialize)]
pub struct SolveRequest {
    pub topic: Topic,
    #[serde(default)]
    pub sample_id: Option<String>,
    #[serde(default)]
    pub data: Option<Value>,
}

/// Response of `POST /solve`
#[derive(Debug, Serialize, PartialEq)]
pub struct Solution {
    pub topic: Topic,
    pub result: Value,
    pub steps: Vec<String>,
}

/// Resolve the request's input data and run the topic's solver
///
/// Explicit `data` wins over `sample_id`; with neither, every field takes its default.
pub fn solve(req: &SolveRequest) -> Result<Solution, SolveError> {
    let data = match (&req.data, &req.sample_id) {
        (Some(data), _) => Some(data),
        (None, Some(id)) => Some(
            &catalog::find_sample(req.topic, id)
                .ok_or_else(|| SolveError::UnknownSample(id.clone()))?
                .data,
        ),
        (None, None) => None,
    };

    solve_topic(req.topic, data)
}

/// Run the solver for `topic` against a `data` value
pub fn solve_topic(topic: Topic, data: Option<&Value>) -> Result<Solution, SolveError> {
    let empty = Map::new();
    let fields = match data {
        Some(Value::Object(map)) => map,
        None | Some(Value::Null) => &empty,
        Some(_) => return Err(SolveError::DataNotObject),
    };

    let (result, steps) = match topic {
        Topic::Probability => probability::solve(fields)?,
        Topic::CoordinateGeometry => geometry::solve(fields)?,
        Topic::Calculus => calculus::solve(fields)?,
        Topic::Matrices => matrices::solve(fields)?,
    };

    Ok(Solution {
        topic,
        result,
        steps,
    })
}

/// Read a numeric field; absent or `null` reads as 0
fn number_field(fields: &Map<String, Value>, name: &str) -> Result<f64, SolveError> {
    match fields.get(name) {
        None | Some(Value::Null) => Ok(0.0),
        Some(value) => parse_number(value).ok_or_else(|| SolveError::InvalidField {
            field: name.to_string(),
            reason: "must be a number".to_string(),
        }),
    }
}

/// JSON numbers and numeric strings are accepted
fn parse_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|n| n.is_finite())
}

/// Magnitude from which step text switches to scientific notation
const SCIENTIFIC_FROM: f64 = 1e16;

/// Reject a computed value that overflowed; `what` names it in the error
fn ensure_finite(what: &str, n: f64) -> Result<f64, SolveError> {
    if n.is_finite() {
        Ok(n)
    } else {
        Err(SolveError::ResultOutOfRange(what.to_string()))
    }
}

/// Render a number the way a person would write it: `4` rather than `4.0`
fn display_number(n: f64) -> String {
    if n == 0.0 {
        // avoid "-0"
        "0".to_string()
    } else if n.abs() >= SCIENTIFIC_FROM {
        format!("{n:e}")
    } else {
        format!("{n}")
    }
}

/// Three decimals, or a three-decimal mantissa for large magnitudes
fn display_fixed(n: f64) -> String {
    if n.abs() >= SCIENTIFIC_FROM {
        format!("{n:.3e}")
    } else {
        format!("{n:.3}")
    }
}

/// 2^53, the largest integer an f64 holds exactly
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

/// Integral values become JSON integers, the rest stay floats
#[allow(clippy::cast_possible_truncation)]
fn number_value(n: f64) -> Value {
    if n.fract() == 0.0 && n.abs() < MAX_EXACT_INT {
        Value::from(n as i64)
    } else {
        Value::from(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(body: Value) -> SolveRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_request_rejects_unknown_topic() {
        let parsed: Result<SolveRequest, _> =
            serde_json::from_value(json!({"topic": "statistics"}));
        assert!(parsed.is_err());
    }

    #[test]
    fn test_explicit_data_wins_over_sample() {
        let req = request(json!({
            "topic": "probability",
            "sample_id": "prob-1",
            "data": {"red": 1, "blue": 3}
        }));
        let solution = solve(&req).unwrap();
        assert_eq!(solution.result, json!(0.25));
    }

    #[test]
    fn test_sample_data_used_when_data_missing() {
        let req = request(json!({"topic": "coordinate-geometry", "sample_id": "coord-1"}));
        let solution = solve(&req).unwrap();
        assert_eq!(solution.topic, Topic::CoordinateGeometry);
        assert_eq!(solution.result, json!(5.0));
    }

    #[test]
    fn test_unknown_sample() {
        let req = request(json!({"topic": "matrices", "sample_id": "prob-1"}));
        assert_eq!(
            solve(&req).unwrap_err(),
            SolveError::UnknownSample("prob-1".to_string())
        );
    }

    #[test]
    fn test_every_sample_solves() {
        for topic in Topic::ALL {
            for sample in catalog::samples_for(topic) {
                let solution = solve_topic(topic, Some(&sample.data)).unwrap();
                assert!(!solution.steps.is_empty());
            }
        }
    }

    #[test]
    fn test_data_must_be_object() {
        assert_eq!(
            solve_topic(Topic::Calculus, Some(&json!([1, 2]))).unwrap_err(),
            SolveError::DataNotObject
        );
    }

    #[test]
    fn test_number_field() {
        let fields = json!({"a": 2, "b": "3.5", "c": null, "d": "x", "e": true});
        let fields = fields.as_object().unwrap();
        assert_eq!(number_field(fields, "a").unwrap(), 2.0);
        assert_eq!(number_field(fields, "b").unwrap(), 3.5);
        assert_eq!(number_field(fields, "c").unwrap(), 0.0);
        assert_eq!(number_field(fields, "missing").unwrap(), 0.0);
        assert!(number_field(fields, "d").is_err());
        assert!(number_field(fields, "e").is_err());
    }

    #[test]
    fn test_display_number() {
        assert_eq!(display_number(4.0), "4");
        assert_eq!(display_number(-0.0), "0");
        assert_eq!(display_number(2.5), "2.5");
        assert_eq!(display_number(1e20), "1e20");
        assert_eq!(display_number(-2.5e300), "-2.5e300");
        assert_eq!(display_number(1e15), "1000000000000000");
    }

    #[test]
    fn test_display_fixed() {
        assert_eq!(display_fixed(9.0), "9.000");
        assert_eq!(display_fixed(1e200), "1.000e200");
    }

    #[test]
    fn test_overflowing_inputs_are_out_of_range() {
        let cases = [
            (Topic::CoordinateGeometry, json!({"x1": -1e308, "x2": 1e308})),
            (Topic::Calculus, json!({"a": 1e308})),
            (
                Topic::Matrices,
                json!({"A": [[1e200, 0], [0, 1]], "B": [[1e200, 0], [0, 1]]}),
            ),
        ];
        for (topic, data) in cases {
            let err = solve_topic(topic, Some(&data)).unwrap_err();
            assert!(
                matches!(err, SolveError::ResultOutOfRange(_)),
                "{topic}: {err}"
            );
            assert!(!err.is_not_found());
        }
    }

    #[test]
    fn test_number_value() {
        assert_eq!(number_value(10.0), json!(10));
        assert_eq!(number_value(-3.0), json!(-3));
        assert_eq!(number_value(0.5), json!(0.5));
    }
}
