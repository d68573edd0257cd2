//! Integration tests for the matrix product and the shape transforms.

use redeem_linalg::generators::{identity, randi_with};
use redeem_linalg::math::{Matrix, Scalar};
use redeem_linalg::product::dot;
use redeem_linalg::transform::{flatten, reshape, transpose};
use redeem_linalg::MatrixError;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn ints(rows: Vec<Vec<i32>>) -> Matrix {
    Matrix::from_rows(rows).expect("failed to create matrix")
}

// ---------------------------------------------------------------------------
// Dot product
// ---------------------------------------------------------------------------

#[test]
fn dot_of_two_by_three_and_three_by_two() {
    let a = ints(vec![vec![1, 2, 3], vec![4, 5, 6]]);
    let b = ints(vec![vec![7, 8], vec![9, 10], vec![11, 12]]);
    assert_eq!(dot(&a, &b).unwrap(), ints(vec![vec![58, 64], vec![139, 154]]));
    assert_eq!(a.dot(&b).unwrap().shape().unwrap(), (2, 2));
}

#[test]
fn dot_requires_matching_inner_dimension() {
    let a = ints(vec![vec![1, 2, 3], vec![4, 5, 6]]);
    assert_eq!(
        dot(&a, &a),
        Err(MatrixError::IncompatibleShapes {
            left: (2, 3),
            right: (2, 3)
        })
    );
}

#[test]
fn dot_with_zero_row_left_operand_has_no_column_count() {
    let a = Matrix::new(vec![]).unwrap();
    let b = ints(vec![vec![1]]);
    assert_eq!(dot(&a, &b), Err(MatrixError::UndefinedColumnCount));
}

#[test]
fn identity_is_neutral_for_dot() {
    let mut rng = StdRng::seed_from_u64(7);
    let m = randi_with((3, 4), -5, 5, &mut rng).unwrap();
    assert_eq!(dot(&identity((3, 3)), &m).unwrap(), m);
    assert_eq!(dot(&m, &identity((4, 4))).unwrap(), m);
}

#[test]
fn dot_mixes_element_kinds() {
    let a = Matrix::new(vec![vec![Scalar::Int(1), Scalar::complex(0.0, 1.0)]]).unwrap();
    let b = Matrix::new(vec![vec![Scalar::Real(2.0)], vec![Scalar::complex(0.0, 1.0)]]).unwrap();
    // 1 * 2.0 + i * i = 1
    assert_eq!(dot(&a, &b).unwrap().get(0, 0).unwrap(), Scalar::Int(1));
}

// ---------------------------------------------------------------------------
// Flatten / reshape
// ---------------------------------------------------------------------------

#[test]
fn reshape_two_by_two_into_column() {
    let a = ints(vec![vec![1, 2], vec![3, 4]]);
    assert_eq!(reshape(&a, (4, 1)).unwrap(), ints(vec![vec![1], vec![2], vec![3], vec![4]]));
    assert_eq!(
        reshape(&a, (1, 3)),
        Err(MatrixError::ElementCountMismatch {
            count: 4,
            shape: (1, 3)
        })
    );
}

#[test]
fn reshape_preserves_row_major_sequence() {
    let a = ints(vec![vec![1, 2, 3], vec![4, 5, 6]]);
    for shape in [(1, 6), (6, 1), (3, 2), (2, 3)] {
        let r = a.reshape(shape).unwrap();
        assert_eq!(r.shape().unwrap(), shape);
        assert_eq!(flatten(&r), flatten(&a));
    }
}

#[test]
fn reshape_does_not_touch_the_input() {
    let a = ints(vec![vec![1, 2], vec![3, 4]]);
    let _ = a.reshape((4, 1)).unwrap();
    assert_eq!(a.shape().unwrap(), (2, 2));
}

#[test]
fn reshape_rejects_overflowing_shapes() {
    let huge = usize::MAX / 2 + 1;
    let a = ints(vec![vec![1, 2], vec![3, 4]]);
    assert_eq!(
        reshape(&a, (huge, 4)),
        Err(MatrixError::ElementCountMismatch {
            count: 4,
            shape: (huge, 4)
        })
    );
    // wraps to zero without a checked product
    let empty = Matrix::new(vec![]).unwrap();
    assert_eq!(
        empty.reshape((huge, 2)),
        Err(MatrixError::ElementCountMismatch {
            count: 0,
            shape: (huge, 2)
        })
    );
}

#[test]
fn reshape_empty_matrix() {
    let a = Matrix::new(vec![]).unwrap();
    assert_eq!(a.reshape((0, 5)).unwrap(), a);
    assert!(a.reshape((1, 1)).is_err());
}

// ---------------------------------------------------------------------------
// Transpose
// ---------------------------------------------------------------------------

#[test]
fn transpose_swaps_rows_and_columns() {
    let a = ints(vec![vec![1, 2, 3], vec![4, 5, 6]]);
    let t = transpose(&a);
    assert_eq!(t, ints(vec![vec![1, 4], vec![2, 5], vec![3, 6]]));
    for i in 0..2 {
        for j in 0..3 {
            assert_eq!(t.get(j, i).unwrap(), a.get(i, j).unwrap());
        }
    }
}

#[test]
fn transpose_twice_is_identity() {
    let mut rng = StdRng::seed_from_u64(11);
    for shape in [(1, 1), (1, 5), (4, 2), (3, 3)] {
        let m = randi_with(shape, -100, 100, &mut rng).unwrap();
        assert_eq!(m.transpose().transpose(), m);
    }
}

#[test]
fn transpose_of_zero_width_matrix_has_no_rows() {
    let m = Matrix::new(vec![vec![], vec![]]).unwrap();
    assert_eq!(m.nrows(), 2);
    let t = transpose(&m);
    assert_eq!(t.nrows(), 0);
    assert_eq!(t, Matrix::new(vec![]).unwrap());
    // the column count of `m` cannot be recovered
    assert_eq!(t.transpose().nrows(), 0);
}
