// Distance between two points in the plane

use serde_json::{Map, Value};

use super::{
    display_fixed as fixed, display_number as num, ensure_finite, number_field, SolveError,
};

pub fn solve(fields: &Map<String, Value>) -> Result<(Value, Vec<String>), SolveError> {
    let x1 = number_field(fields, "x1")?;
    let y1 = number_field(fields, "y1")?;
    let x2 = number_field(fields, "x2")?;
    let y2 = number_field(fields, "y2")?;

    let dx = ensure_finite("dx", x2 - x1)?;
    let dy = ensure_finite("dy", y2 - y1)?;
    let dx2 = ensure_finite("dx^2", dx * dx)?;
    let dy2 = ensure_finite("dy^2", dy * dy)?;
    let distance = ensure_finite("d", (dx2 + dy2).sqrt())?;

    let steps = vec![
        "Use distance formula: d = sqrt((x2-x1)^2 + (y2-y1)^2)".to_string(),
        format!("dx = {} - {} = {}", num(x2), num(x1), num(dx)),
        format!("dy = {} - {} = {}", num(y2), num(y1), num(dy)),
        format!(
            "d = sqrt({} + {}) = {}",
            fixed(dx2),
            fixed(dy2),
            fixed(distance)
        ),
    ];

    Ok((Value::from(distance), steps))
}
