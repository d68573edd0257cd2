//! Integration tests for Matrix construction, queries and structural edits.

use redeem_linalg::error::Axis;
use redeem_linalg::math::{Matrix, Scalar, Vector};
use redeem_linalg::MatrixError;
use serde_json::json;

fn ints(rows: Vec<Vec<i32>>) -> Matrix {
    Matrix::from_rows(rows).expect("failed to create matrix")
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

#[test]
fn well_formed_grid_round_trips() {
    let grid = vec![
        vec![Scalar::Int(1), Scalar::Real(2.5)],
        vec![Scalar::complex(0.0, 1.0), Scalar::Int(-4)],
    ];
    let m = Matrix::new(grid.clone()).unwrap();
    assert_eq!(m.to_nested_vec(), grid);
    assert_eq!(m.shape().unwrap(), (2, 2));
}

#[test]
fn ragged_grid_is_malformed() {
    let err = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5]]).unwrap_err();
    assert!(matches!(err, MatrixError::MalformedShape { .. }));
}

#[test]
fn json_grid_with_mixed_kinds() {
    let m = Matrix::from_value(&json!([[1, 2.5], [{"re": 0, "im": 1}, 4]])).unwrap();
    assert_eq!(m.get(0, 0).unwrap(), Scalar::Int(1));
    assert_eq!(m.get(0, 1).unwrap(), Scalar::Real(2.5));
    assert_eq!(m.get(1, 0).unwrap(), Scalar::complex(0.0, 1.0));
}

#[test]
fn json_non_numeric_grid_is_malformed() {
    for bad in [json!([[1, "x"]]), json!([[1], [2, 3]]), json!("matrix"), json!([1, 2])] {
        let err = Matrix::from_value(&bad).unwrap_err();
        assert!(
            matches!(err, MatrixError::MalformedShape { .. }),
            "expected MalformedShape for {}",
            bad
        );
    }
}

#[test]
fn empty_grid_is_a_zero_row_matrix() {
    let m = Matrix::from_value(&json!([])).unwrap();
    assert_eq!(m.nrows(), 0);
    assert_eq!(m.ncols(), Err(MatrixError::UndefinedColumnCount));
    assert_eq!(m.shape(), Err(MatrixError::UndefinedColumnCount));
    assert!(m.is_empty());
    assert_eq!(m.to_string(), "[]");
}

#[test]
fn from_shape_vec_checks_element_count() {
    let err = Matrix::from_shape_vec((2, 3), vec![Scalar::Int(1); 5]).unwrap_err();
    assert_eq!(
        err,
        MatrixError::ElementCountMismatch {
            count: 5,
            shape: (2, 3)
        }
    );
}

#[test]
fn from_shape_vec_rejects_overflowing_shape() {
    let shape = (usize::MAX, 2);
    assert_eq!(
        Matrix::from_shape_vec(shape, vec![]),
        Err(MatrixError::ElementCountMismatch { count: 0, shape })
    );
}

#[test]
fn serde_uses_nested_grid() {
    let m = ints(vec![vec![1, 2], vec![3, 4]]);
    let json = serde_json::to_string(&m).unwrap();
    assert_eq!(json, "[[1,2],[3,4]]");
    let back: Matrix = serde_json::from_str(&json).unwrap();
    assert_eq!(back, m);
    assert!(serde_json::from_str::<Matrix>("[[1,2],[3]]").is_err());
}

// ---------------------------------------------------------------------------
// Element access
// ---------------------------------------------------------------------------

#[test]
fn get_and_set_are_bounds_checked() {
    let mut m = ints(vec![vec![1, 2], vec![3, 4]]);
    m.set(1, 0, 9).unwrap();
    assert_eq!(m.get(1, 0).unwrap(), Scalar::Int(9));
    assert_eq!(m[(1, 0)], Scalar::Int(9));
    assert_eq!(
        m.get(2, 0),
        Err(MatrixError::IndexOutOfRange {
            axis: Axis::Row,
            index: 2,
            len: 2
        })
    );
    assert!(matches!(
        m.set(0, 2, 1.5),
        Err(MatrixError::IndexOutOfRange {
            axis: Axis::Column,
            ..
        })
    ));
}

#[test]
fn row_and_column_bounds_include_the_boundary() {
    let m = ints(vec![vec![1, 2, 3], vec![4, 5, 6]]);
    assert!(m.row(1).is_ok());
    assert!(matches!(m.row(2), Err(MatrixError::IndexOutOfRange { .. })));
    assert!(m.column(2).is_ok());
    assert!(matches!(m.column(3), Err(MatrixError::IndexOutOfRange { .. })));
}

#[test]
fn row_and_column_views_are_snapshots() {
    let m = ints(vec![vec![1, 2], vec![3, 4]]);
    let mut row = m.row(0).unwrap();
    row[0] = Scalar::Int(100);
    let mut col = m.column(1).unwrap();
    col[1] = Scalar::Int(200);
    assert_eq!(m, ints(vec![vec![1, 2], vec![3, 4]]));
    assert_eq!(m.column(1).unwrap().to_vec(), vec![Scalar::Int(2), Scalar::Int(4)]);
}

#[test]
fn rows_and_columns() {
    let m = ints(vec![vec![1, 2], vec![3, 4]]);
    let rows: Vec<Vec<Scalar>> = m.rows().into_iter().map(Vector::into_vec).collect();
    assert_eq!(rows, vec![vec![Scalar::Int(1), Scalar::Int(2)], vec![Scalar::Int(3), Scalar::Int(4)]]);
    assert_eq!(m.columns()[0].to_vec(), vec![Scalar::Int(1), Scalar::Int(3)]);
}

// ---------------------------------------------------------------------------
// Structural edits
// ---------------------------------------------------------------------------

#[test]
fn replace_row_checks_length_and_index() {
    let mut m = ints(vec![vec![1, 2], vec![3, 4]]);
    m.replace_row(0, vec![Scalar::Int(7), Scalar::Real(8.5)]).unwrap();
    assert_eq!(m.row(0).unwrap().to_vec(), vec![Scalar::Int(7), Scalar::Real(8.5)]);
    assert_eq!(
        m.replace_row(1, vec![Scalar::Int(1)]),
        Err(MatrixError::ShapeMismatch {
            expected: vec![2],
            found: vec![1]
        })
    );
    assert!(matches!(
        m.replace_row(2, vec![Scalar::Int(1), Scalar::Int(2)]),
        Err(MatrixError::IndexOutOfRange { .. })
    ));
}

#[test]
fn delete_row_and_column() {
    let mut m = ints(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]);
    m.delete_row(1).unwrap();
    assert_eq!(m, ints(vec![vec![1, 2, 3], vec![7, 8, 9]]));
    m.delete_column(0).unwrap();
    assert_eq!(m, ints(vec![vec![2, 3], vec![8, 9]]));
    assert!(matches!(m.delete_column(2), Err(MatrixError::IndexOutOfRange { .. })));
    assert!(matches!(m.delete_row(2), Err(MatrixError::IndexOutOfRange { .. })));
}

#[test]
fn deleting_every_column_keeps_rows_consistent() {
    let mut m = ints(vec![vec![1, 2], vec![3, 4], vec![5, 6]]);
    m.delete_column(1).unwrap();
    m.delete_column(0).unwrap();
    assert_eq!(m.nrows(), 3);
    assert_eq!(m.ncols().unwrap(), 0);
    assert!(m.rows().iter().all(Vector::is_empty));
}

#[test]
fn deleting_last_row_leaves_zero_row_matrix() {
    let mut m = ints(vec![vec![1, 2]]);
    m.delete_row(0).unwrap();
    assert_eq!(m.ncols(), Err(MatrixError::UndefinedColumnCount));
}

#[test]
fn swap_rows_in_place() {
    let mut m = ints(vec![vec![1, 2], vec![3, 4], vec![5, 6]]);
    m.swap_rows(0, 2).unwrap();
    assert_eq!(m, ints(vec![vec![5, 6], vec![3, 4], vec![1, 2]]));
    m.swap_rows(1, 1).unwrap();
    assert_eq!(m.row(1).unwrap().to_vec(), vec![Scalar::Int(3), Scalar::Int(4)]);
    assert!(matches!(m.swap_rows(0, 3), Err(MatrixError::IndexOutOfRange { .. })));
}

// ---------------------------------------------------------------------------
// Reductions
// ---------------------------------------------------------------------------

#[test]
fn sum_and_mean() {
    let m = ints(vec![vec![1, 2], vec![3, 4]]);
    assert_eq!(m.sum(), Scalar::Int(10));
    assert_eq!(m.mean().unwrap(), Scalar::Real(2.5));
    let mixed = Matrix::new(vec![vec![Scalar::Int(1), Scalar::complex(1.0, 2.0)]]).unwrap();
    assert_eq!(mixed.sum(), Scalar::complex(2.0, 2.0));
}

#[test]
fn mean_of_empty_matrix_fails() {
    let m = Matrix::new(vec![]).unwrap();
    assert_eq!(m.sum(), Scalar::Int(0));
    assert_eq!(m.mean(), Err(MatrixError::EmptyMatrix));
    assert_eq!(m.min(), Err(MatrixError::EmptyMatrix));
    assert_eq!(m.max(), Err(MatrixError::EmptyMatrix));
}

#[test]
fn min_and_max_over_mixed_reals() {
    let m = Matrix::from_value(&json!([[3, -1.5], [7, 2]])).unwrap();
    assert_eq!(m.min().unwrap(), Scalar::Real(-1.5));
    assert_eq!(m.max().unwrap(), Scalar::Int(7));
}

#[test]
fn min_skips_nan() {
    let m = Matrix::from_rows(vec![vec![f64::NAN, 2.0, 1.0]]).unwrap();
    assert_eq!(m.min().unwrap(), Scalar::Real(1.0));
    assert_eq!(m.max().unwrap(), Scalar::Real(2.0));
}

#[test]
fn min_with_complex_is_unordered() {
    let m = Matrix::new(vec![vec![Scalar::Int(1), Scalar::complex(0.0, 1.0)]]).unwrap();
    assert_eq!(m.min(), Err(MatrixError::UnorderedElementKind));
    assert_eq!(m.max(), Err(MatrixError::UnorderedElementKind));
}

// ---------------------------------------------------------------------------
// Sequences and rendering
// ---------------------------------------------------------------------------

#[test]
fn flatten_is_row_major_and_repeatable() {
    let m = ints(vec![vec![1, 2], vec![3, 4]]);
    let expected: Vec<Scalar> = (1..=4).map(Scalar::Int).collect();
    assert_eq!(m.flatten_to_vec(), expected);
    assert_eq!(m.iter().copied().collect::<Vec<_>>(), expected);
    assert_eq!(m.flatten_to_vec(), expected);
    assert_eq!(m.flatten_to_row().shape().unwrap(), (1, 4));
}

#[test]
fn display_is_row_per_line() {
    let m = ints(vec![vec![1, 2], vec![3, 4]]);
    assert_eq!(m.to_string(), "[[1, 2],\n [3, 4]]");
    let c = Matrix::new(vec![vec![Scalar::complex(1.0, -2.0), Scalar::Real(0.5)]]).unwrap();
    assert_eq!(c.to_string(), "[[1-2i, 0.5]]");
}
