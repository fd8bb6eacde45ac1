// P(red) for a bag of red and blue balls

use serde_json::{Map, Value};

use super::{number_field, SolveError, MAX_EXACT_INT};

#[allow(clippy::cast_precision_loss)]
pub fn solve(fields: &Map<String, Value>) -> Result<(Value, Vec<String>), SolveError> {
    let red = count_field(fields, "red")?;
    let blue = count_field(fields, "blue")?;

    let total = red.checked_add(blue).ok_or_else(|| SolveError::InvalidField {
        field: "blue".to_string(),
        reason: "is too large".to_string(),
    })?;
    if total == 0 {
        return Err(SolveError::EmptyTotal);
    }

    let prob_red = red as f64 / total as f64;
    let steps = vec![
        "Identify total outcomes: total = red + blue".to_string(),
        format!("Compute total = {red} + {blue} = {total}"),
        "Probability of red = red / total".to_string(),
        format!("P(red) = {red}/{total} = {prob_red:.3}"),
    ];

    Ok((Value::from(prob_red), steps))
}

/// Ball counts are whole, non-negative and at most 2^53; fractional input truncates toward zero
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn count_field(fields: &Map<String, Value>, name: &str) -> Result<u64, SolveError> {
    let value = number_field(fields, name)?.trunc();
    if value < 0.0 {
        return Err(SolveError::InvalidField {
            field: name.to_string(),
            reason: "must not be negative".to_string(),
        });
    }
    if value > MAX_EXACT_INT {
        return Err(SolveError::InvalidField {
            field: name.to_string(),
            reason: "is too large".to_string(),
        });
    }
    Ok(value as u64)
}
