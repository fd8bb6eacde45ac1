// Derivative of a quadratic a x^2 + b x + c

use serde_json::{Map, Value};

use super::{display_number as num, ensure_finite, number_field, SolveError};

pub fn solve(fields: &Map<String, Value>) -> Result<(Value, Vec<String>), SolveError> {
    let a = number_field(fields, "a")?;
    let b = number_field(fields, "b")?;
    // validated for shape only; the constant term vanishes
    number_field(fields, "c")?;

    let slope = ensure_finite("2a", 2.0 * a)?;
    let derivative = format!("f'(x) = {}", linear_term(slope, b));
    let steps = vec![
        "Differentiate ax^2 -> 2ax".to_string(),
        "Differentiate bx -> b".to_string(),
        "Sum results".to_string(),
        derivative.clone(),
    ];

    Ok((Value::from(derivative), steps))
}

/// `{m}x + {k}`, with a negative constant written as `- |k|`
fn linear_term(m: f64, k: f64) -> String {
    if k < 0.0 {
        format!("{}x - {}", num(m), num(-k))
    } else {
        format!("{}x + {}", num(m), num(k))
    }
}
