use qr_stats::{Dimensions, ErrorKind, MatrixDefect, MatrixLabel, QrStatsError};

#[test]
fn test_qr_stats_error_display() {
    // MissingMatrix
    let err = QrStatsError::MissingMatrix {
        matrix: MatrixLabel::Q,
    };
    assert_eq!(format!("{}", err), "matrix Q is required");

    // InvalidMatrix
    let err = QrStatsError::InvalidMatrix {
        matrix: MatrixLabel::R,
        defect: MatrixDefect::InvalidValue { row: 1, col: 0 },
    };
    assert_eq!(
        format!("{}", err),
        "invalid matrix R: invalid value at position [1][0]"
    );

    // MatrixTooLarge
    let err = QrStatsError::MatrixTooLarge {
        matrix: MatrixLabel::Q,
        dimensions: Dimensions::new(5, 2),
        max: 4,
    };
    assert_eq!(
        format!("{}", err),
        "matrix Q is 5x2, matrices cannot exceed 4x4"
    );

    // IncompatibleDimensions
    let err = QrStatsError::IncompatibleDimensions {
        q: Dimensions::new(2, 3),
        r: Dimensions::new(2, 2),
    };
    assert_eq!(
        format!("{}", err),
        "incompatible dimensions for QR factorization: Q is 2x3, R is 2x2"
    );

    // InvalidRequest
    let err = QrStatsError::InvalidRequest("expected value".to_string());
    assert_eq!(format!("{}", err), "invalid request: expected value");

    // EmptyInput
    assert_eq!(
        format!("{}", QrStatsError::EmptyInput),
        "input values are empty"
    );

    // EmptyValueSet
    assert_eq!(
        format!("{}", QrStatsError::EmptyValueSet),
        "no valid values found in the matrices"
    );

    // InvalidMaxMatrixSize
    assert_eq!(
        format!("{}", QrStatsError::InvalidMaxMatrixSize(0)),
        "invalid max_matrix_size: 0 (must be at least 1)"
    );

    // InvalidEnvironment
    let err = QrStatsError::InvalidEnvironment {
        variable: "MAX_MATRIX_SIZE",
        value: "big".to_string(),
    };
    assert_eq!(
        format!("{}", err),
        "invalid value for MAX_MATRIX_SIZE: \"big\""
    );

    // DuplicateParameter
    let err = QrStatsError::DuplicateParameter { parameter: "foo" };
    assert_eq!(
        format!("{}", err),
        "Parameter 'foo' was set multiple times. Each parameter can only be configured once."
    );
}

#[test]
fn test_qr_stats_error_kind() {
    let validation = [
        QrStatsError::MissingMatrix {
            matrix: MatrixLabel::R,
        },
        QrStatsError::InvalidMatrix {
            matrix: MatrixLabel::Q,
            defect: MatrixDefect::Empty,
        },
        QrStatsError::IncompatibleDimensions {
            q: Dimensions::new(2, 3),
            r: Dimensions::new(2, 2),
        },
        QrStatsError::InvalidRequest("eof".to_string()),
    ];
    for err in &validation {
        assert_eq!(err.kind(), ErrorKind::Validation, "{}", err);
        assert!(err.is_validation());
    }

    assert_eq!(QrStatsError::EmptyValueSet.kind(), ErrorKind::Computation);
    assert_eq!(QrStatsError::EmptyInput.kind(), ErrorKind::Computation);
    assert!(!QrStatsError::EmptyValueSet.is_validation());

    assert_eq!(
        QrStatsError::InvalidMaxMatrixSize(0).kind(),
        ErrorKind::Configuration
    );
}

#[test]
fn test_qr_stats_error_field() {
    let err = QrStatsError::InvalidMatrix {
        matrix: MatrixLabel::Q,
        defect: MatrixDefect::NotNested { row: Some(1) },
    };
    assert_eq!(err.field(), Some("matrixQ"));

    let err = QrStatsError::MissingMatrix {
        matrix: MatrixLabel::R,
    };
    assert_eq!(err.field(), Some("matrixR"));

    let err = QrStatsError::IncompatibleDimensions {
        q: Dimensions::new(1, 2),
        r: Dimensions::new(3, 3),
    };
    assert_eq!(err.field(), Some("dimensions"));

    let err = QrStatsError::MatrixTooLarge {
        matrix: MatrixLabel::R,
        dimensions: Dimensions::new(9, 9),
        max: 3,
    };
    assert_eq!(err.field(), Some("size"));

    assert_eq!(QrStatsError::EmptyValueSet.field(), None);
}

#[test]
fn test_qr_stats_error_properties() {
    let err1 = QrStatsError::EmptyValueSet;
    let err2 = err1.clone();
    assert_eq!(err1, err2);
    assert_ne!(err1, QrStatsError::EmptyInput);
}

#[test]
fn test_qr_stats_error_is_std_error() {
    fn assert_error<T: std::error::Error + Send + Sync + 'static>() {}
    assert_error::<QrStatsError>();
}
