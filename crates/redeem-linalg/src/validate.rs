//! Shape checks run before a `Matrix` is constructed.
use serde_json::Value;

use crate::math::scalar::Scalar;

/// True when `grid` is an array of equally long arrays of numbers.
///
/// An empty array is a valid (zero-row) grid. Numbers are JSON numbers or
/// `{"re": .., "im": ..}` complex objects; booleans, strings and nulls are
/// rejected. Stops at the first violation.
pub fn is_well_formed(grid: &Value) -> bool {
    let Some(rows) = grid.as_array() else {
        return false;
    };
    let Some(first) = rows.first() else {
        return true;
    };
    let Some(width) = first.as_array().map(Vec::len) else {
        return false;
    };
    rows.iter().all(|row| match row.as_array() {
        Some(items) => {
            items.len() == width && items.iter().all(|item| Scalar::from_value(item).is_some())
        }
        None => false,
    })
}

/// True when every row of a typed grid has the same length.
pub fn is_rectangular(rows: &[Vec<Scalar>]) -> bool {
    match rows.first() {
        Some(first) => rows.iter().all(|row| row.len() == first.len()),
        None => true,
    }
}

pub fn is_square_size(shape: (usize, usize)) -> bool {
    shape.0 == shape.1
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_rectangular_numeric_grids() {
        assert!(is_well_formed(&json!([[1, 2], [3.5, {"re": 1, "im": 2}]])));
        assert!(is_well_formed(&json!([])));
        assert!(is_well_formed(&json!([[], []])));
    }

    #[test]
    fn rejects_non_grids() {
        assert!(!is_well_formed(&json!(5)));
        assert!(!is_well_formed(&json!([1, 2])));
        assert!(!is_well_formed(&json!([[1, 2], 3])));
        assert!(!is_well_formed(&json!({"rows": [[1]]})));
    }

    #[test]
    fn rejects_ragged_or_non_numeric_rows() {
        assert!(!is_well_formed(&json!([[1, 2], [3]])));
        assert!(!is_well_formed(&json!([[1, "2"]])));
        assert!(!is_well_formed(&json!([[true]])));
        assert!(!is_well_formed(&json!([[null, 1]])));
    }

    #[test]
    fn square_sizes() {
        assert!(is_square_size((3, 3)));
        assert!(!is_square_size((2, 3)));
    }
}
