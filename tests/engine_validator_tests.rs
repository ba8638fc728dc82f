use qr_stats::{
    Matrix, MatrixDefect, MatrixLabel, QrStatsError, ValidationResult, Validator,
};
use serde_json::{Value, json};

fn defect_of(candidate: Value) -> MatrixDefect {
    Validator::validate(&candidate)
        .defect()
        .expect("candidate should be invalid")
}

// ============================================================================
// Accepted Input
// ============================================================================

#[test]
fn test_valid_matrix() {
    let result = Validator::validate(&json!([[1, 2], [3, 4]]));
    assert_eq!(result, ValidationResult::Valid);
    assert!(result.is_valid());
    assert_eq!(result.reason(), None);
}

#[test]
fn test_parse_yields_matrix() {
    let m = Validator::parse(&json!([[1.5, -2], [0, 4e3]])).unwrap();
    assert_eq!(m.as_rows(), &[vec![1.5, -2.0], vec![0.0, 4000.0]][..]);
}

#[test]
fn test_single_cell_and_rectangular_are_valid() {
    assert!(Validator::validate(&json!([[7]])).is_valid());
    assert!(Validator::validate(&json!([[1, 2, 3]])).is_valid());
    assert!(Validator::validate(&json!([[1], [2], [3]])).is_valid());
}

// ============================================================================
// Individual Rules
// ============================================================================

#[test]
fn test_rule_absent() {
    let result = Validator::validate(&Value::Null);
    assert_eq!(result, ValidationResult::Invalid(MatrixDefect::Absent));
    assert_eq!(result.reason().unwrap(), "matrix must not be absent");
}

#[test]
fn test_rule_not_nested() {
    let outer = MatrixDefect::NotNested { row: None };
    assert_eq!(defect_of(json!(5)), outer);
    assert_eq!(defect_of(json!("matrix")), outer);
    assert_eq!(defect_of(json!({"rows": [[1]]})), outer);
    assert_eq!(
        Validator::validate(&json!(true)).reason().unwrap(),
        "matrix must be a sequence of sequences"
    );

    assert_eq!(
        defect_of(json!([1, 2, 3])),
        MatrixDefect::NotNested { row: Some(0) }
    );
    assert_eq!(
        defect_of(json!([[1, 2], 3])),
        MatrixDefect::NotNested { row: Some(1) }
    );
    assert_eq!(
        Validator::validate(&json!([[1, 2], [3, 4], "row"]))
            .reason()
            .unwrap(),
        "matrix must be a sequence of sequences (row 2 is not a sequence)"
    );
}

#[test]
fn test_rule_empty() {
    assert_eq!(defect_of(json!([])), MatrixDefect::Empty);
    assert_eq!(defect_of(json!([[]])), MatrixDefect::Empty);
    assert_eq!(defect_of(json!([[], [1]])), MatrixDefect::Empty);
}

#[test]
fn test_rule_ragged_rows() {
    let result = Validator::validate(&json!([[1, 2], [3, 4, 5]]));
    assert_eq!(
        result.defect(),
        Some(MatrixDefect::RaggedRows {
            row: 1,
            expected: 2,
            found: 3
        })
    );
    assert!(
        result
            .reason()
            .unwrap()
            .starts_with("all rows must have equal length")
    );
}

#[test]
fn test_rule_invalid_value() {
    let result = Validator::validate(&json!([[1, "a"], [3, 4]]));
    assert_eq!(
        result.defect(),
        Some(MatrixDefect::InvalidValue { row: 0, col: 1 })
    );
    assert_eq!(result.reason().unwrap(), "invalid value at position [0][1]");

    assert_eq!(
        defect_of(json!([[1, 2], [3, null]])),
        MatrixDefect::InvalidValue { row: 1, col: 1 }
    );
    assert_eq!(
        defect_of(json!([[true]])),
        MatrixDefect::InvalidValue { row: 0, col: 0 }
    );
    assert_eq!(
        defect_of(json!([[1], [[2]]])),
        MatrixDefect::InvalidValue { row: 1, col: 0 }
    );
}

// ============================================================================
// Rule Ordering
// ============================================================================

#[test]
fn test_earlier_rule_wins() {
    // An empty first row beats a later non-sequence row
    assert_eq!(defect_of(json!([[], 1])), MatrixDefect::Empty);
    assert_eq!(defect_of(json!([[], 5])), MatrixDefect::Empty);

    // A non-sequence first row is caught before emptiness
    assert_eq!(
        defect_of(json!([5, []])),
        MatrixDefect::NotNested { row: Some(0) }
    );

    // Ragged rows beat a bad cell appearing earlier in the scan
    assert_eq!(
        defect_of(json!([["x", 1], [2]])),
        MatrixDefect::RaggedRows {
            row: 1,
            expected: 2,
            found: 1
        }
    );
}

#[test]
fn test_rows_checked_in_order_for_nesting_and_length() {
    // The ragged row comes before the non-sequence row
    assert_eq!(
        defect_of(json!([[1, 2], [1, 2, 3], 5])),
        MatrixDefect::RaggedRows {
            row: 1,
            expected: 2,
            found: 3
        }
    );

    // The non-sequence row comes before the ragged row
    assert_eq!(
        defect_of(json!([[1, 2], 5, [1, 2, 3]])),
        MatrixDefect::NotNested { row: Some(1) }
    );

    // Both beat a bad cell in an earlier row
    assert_eq!(
        defect_of(json!([["x", 2], [1, 2], null])),
        MatrixDefect::NotNested { row: Some(2) }
    );
}

#[test]
fn test_first_invalid_cell_is_reported() {
    assert_eq!(
        defect_of(json!([[1, 2], ["a", "b"]])),
        MatrixDefect::InvalidValue { row: 1, col: 0 }
    );
}

#[test]
fn test_validation_is_deterministic() {
    let candidate = json!([[1, 2], [3]]);
    assert_eq!(
        Validator::validate(&candidate),
        Validator::validate(&candidate)
    );
}

// ============================================================================
// Typed Rows
// ============================================================================

#[test]
fn test_parse_rows_rejects_non_finite() {
    assert_eq!(
        Validator::parse_rows(vec![vec![0.0, f64::NEG_INFINITY]]),
        Err(MatrixDefect::InvalidValue { row: 0, col: 1 })
    );
}

// ============================================================================
// Attributed Errors
// ============================================================================

#[test]
fn test_validate_matrix_names_the_matrix() {
    let err = Validator::validate_matrix(MatrixLabel::R, &json!([[1], [2, 3]])).unwrap_err();
    assert_eq!(
        err,
        QrStatsError::InvalidMatrix {
            matrix: MatrixLabel::R,
            defect: MatrixDefect::RaggedRows {
                row: 1,
                expected: 1,
                found: 2
            },
        }
    );
}

#[test]
fn test_validate_qr_dimensions() {
    let q = Matrix::try_from(vec![vec![1.0, 0.0, 0.0], vec![0.0, 1.0, 0.0]]).unwrap();
    let r_ok = Matrix::try_from(vec![vec![1.0], vec![2.0], vec![3.0]]).unwrap();
    let r_bad = Matrix::try_from(vec![vec![1.0, 0.0], vec![0.0, 1.0]]).unwrap();

    assert!(Validator::validate_qr_dimensions(&q, &r_ok).is_ok());

    let err = Validator::validate_qr_dimensions(&q, &r_bad).unwrap_err();
    assert_eq!(
        err,
        QrStatsError::IncompatibleDimensions {
            q: q.dimensions(),
            r: r_bad.dimensions(),
        }
    );
}

#[test]
fn test_validate_size() {
    let m = Matrix::try_from(vec![vec![1.0, 2.0, 3.0]]).unwrap();
    assert!(Validator::validate_size(MatrixLabel::Q, &m, 3).is_ok());

    let err = Validator::validate_size(MatrixLabel::Q, &m, 2).unwrap_err();
    assert!(matches!(err, QrStatsError::MatrixTooLarge { max: 2, .. }));
}

#[test]
fn test_parameter_validation() {
    assert!(Validator::validate_max_matrix_size(1).is_ok());
    assert_eq!(
        Validator::validate_max_matrix_size(0),
        Err(QrStatsError::InvalidMaxMatrixSize(0))
    );
    assert!(Validator::validate_no_duplicates(None).is_ok());
    assert_eq!(
        Validator::validate_no_duplicates(Some("max_matrix_size")),
        Err(QrStatsError::DuplicateParameter {
            parameter: "max_matrix_size"
        })
    );
}
