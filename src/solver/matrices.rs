// 2x2 matrix product C = A·B

use serde_json::{Map, Value};

use super::{display_number as num, ensure_finite, number_value, parse_number, SolveError};

type Matrix2 = [[f64; 2]; 2];

pub fn solve(fields: &Map<String, Value>) -> Result<(Value, Vec<String>), SolveError> {
    let (Some(Value::Array(a_rows)), Some(Value::Array(b_rows))) = (fields.get("A"), fields.get("B"))
    else {
        return Err(SolveError::MatricesNotLists);
    };
    let a = parse_matrix("A", a_rows)?;
    let b = parse_matrix("B", b_rows)?;

    let c = multiply(&a, &b);
    for (i, row) in c.iter().enumerate() {
        for (j, cell) in row.iter().enumerate() {
            ensure_finite(&format!("C[{i}][{j}]"), *cell)?;
        }
    }

    let mut steps = vec!["Compute C = A·B for 2x2 matrices".to_string()];
    for i in 0..2 {
        for j in 0..2 {
            steps.push(format!(
                "c{}{} = {}*{} + {}*{} = {}",
                i + 1,
                j + 1,
                num(a[i][0]),
                num(b[0][j]),
                num(a[i][1]),
                num(b[1][j]),
                num(c[i][j])
            ));
        }
    }

    let result = Value::Array(
        c.iter()
            .map(|row| Value::Array(row.iter().copied().map(number_value).collect()))
            .collect(),
    );

    Ok((result, steps))
}

fn multiply(a: &Matrix2, b: &Matrix2) -> Matrix2 {
    let mut c = [[0.0; 2]; 2];
    for (i, row) in c.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            *cell = a[i][0] * b[0][j] + a[i][1] * b[1][j];
        }
    }
    c
}

/// Exactly two rows of exactly two numeric entries
fn parse_matrix(name: &str, rows: &[Value]) -> Result<Matrix2, SolveError> {
    let shaped: Vec<&Vec<Value>> = rows
        .iter()
        .filter_map(|row| match row {
            Value::Array(cells) if cells.len() == 2 => Some(cells),
            _ => None,
        })
        .collect();
    if rows.len() != 2 || shaped.len() != 2 {
        return Err(SolveError::UnsupportedShape);
    }

    let mut m = [[0.0; 2]; 2];
    for (i, cells) in shaped.iter().enumerate() {
        for (j, cell) in cells.iter().enumerate() {
            m[i][j] = parse_number(cell).ok_or_else(|| SolveError::InvalidField {
                field: format!("{name}[{i}][{j}]"),
                reason: "must be a number".to_string(),
            })?;
        }
    }
    Ok(m)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn run(data: Value) -> Result<(Value, Vec<String>), SolveError> {
        solve(data.as_object().unwrap())
    }

    #[test]
    fn test_sample_product() {
        let (result, steps) = run(json!({"A": [[1, 2], [3, 4]], "B": [[2, 0], [1, 2]]})).unwrap();
        assert_eq!(result, json!([[4, 4], [10, 8]]));
        assert_eq!(steps.len(), 5);
        assert_eq!(steps[1], "c11 = 1*2 + 2*1 = 4");
        assert_eq!(steps[4], "c22 = 3*0 + 4*2 = 8");
    }

    #[test]
    fn test_identity() {
        let a = json!([[1.5, -2], [0.25, 7]]);
        let (result, _) = run(json!({"A": a, "B": [[1, 0], [0, 1]]})).unwrap();
        assert_eq!(result, json!([[1.5, -2], [0.25, 7]]));
    }

    #[test]
    fn test_not_lists() {
        assert_eq!(run(json!({})).unwrap_err(), SolveError::MatricesNotLists);
        assert_eq!(
            run(json!({"A": [[1, 0], [0, 1]], "B": "I"})).unwrap_err(),
            SolveError::MatricesNotLists
        );
    }

    #[test]
    fn test_wrong_shape() {
        let cases = [
            json!({"A": [[1, 0, 0], [0, 1, 0]], "B": [[1, 0], [0, 1]]}),
            json!({"A": [[1, 0]], "B": [[1, 0], [0, 1]]}),
            json!({"A": [[1, 0], [0, 1]], "B": [1, 2]}),
            json!({"A": [[1, 0], [0, 1], [0, 0]], "B": [[1, 0], [0, 1]]}),
        ];
        for data in cases {
            assert_eq!(run(data).unwrap_err(), SolveError::UnsupportedShape);
        }
    }

    #[test]
    fn test_overflowing_cell_is_out_of_range() {
        let big = json!([[1e200, 0], [0, 1]]);
        let err = run(json!({"A": big, "B": big})).unwrap_err();
        assert_eq!(err, SolveError::ResultOutOfRange("C[0][0]".to_string()));

        // inf - inf collapses to NaN
        let err = run(json!({"A": [[1e200, 1e200], [0, 1]], "B": [[1e200, 0], [-1e200, 1]]}))
            .unwrap_err();
        assert_eq!(err, SolveError::ResultOutOfRange("C[0][0]".to_string()));
    }

    #[test]
    fn test_non_numeric_entry() {
        let err = run(json!({"A": [[1, 0], [0, 1]], "B": [[1, null], [0, 1]]})).unwrap_err();
        assert_eq!(
            err,
            SolveError::InvalidField {
                field: "B[0][1]".to_string(),
                reason: "must be a number".to_string(),
            }
        );
    }
}
