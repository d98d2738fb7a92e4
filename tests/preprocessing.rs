//! Integration tests for the preprocessing module (Scaler).

use ndarray::Array2;
use percept_classifiers::error::TrainError;
use percept_classifiers::preprocessing::Scaler;

// ---------------------------------------------------------------------------
// Scaler fit / transform
// ---------------------------------------------------------------------------

#[test]
fn fit_computes_mean_and_std() {
    let x = Array2::from_shape_vec(
        (4, 2),
        vec![
            1.0, 10.0,
            2.0, 20.0,
            3.0, 30.0,
            4.0, 40.0,
        ],
    )
    .unwrap();

    let sc = Scaler::fit(&x).unwrap();
    assert_eq!(sc.dim(), 2);
    assert!((sc.mean[0] - 2.5).abs() < 1e-9, "mean[0] = {}", sc.mean[0]);
    assert!((sc.mean[1] - 25.0).abs() < 1e-9, "mean[1] = {}", sc.mean[1]);
    assert!(sc.std[0] > 0.0);
    assert!(sc.std[1] > 0.0);
}

#[test]
fn transform_standardizes_training_matrix() {
    let x = Array2::from_shape_vec(
        (5, 2),
        vec![
            1.0, 100.0,
            2.0, 200.0,
            3.0, 300.0,
            4.0, 400.0,
            5.0, 500.0,
        ],
    )
    .unwrap();

    let (_, t) = Scaler::fit_transform(&x).unwrap();
    assert_eq!(t.dim(), (5, 2));

    // Round-trip property: each column should have mean ~0 and std ~1
    for c in 0..2 {
        let col: Vec<f64> = (0..5).map(|r| t[(r, c)]).collect();
        let mean: f64 = col.iter().sum::<f64>() / 5.0;
        assert!(mean.abs() < 1e-9, "col {} mean after transform = {}", c, mean);

        let var: f64 = col.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / 5.0;
        assert!(
            (var.sqrt() - 1.0).abs() < 1e-9,
            "col {} std after transform = {}",
            c,
            var.sqrt()
        );
    }
}

#[test]
fn constant_column_does_not_divide_by_zero() {
    let x = Array2::from_shape_vec(
        (3, 2),
        vec![
            7.0, 1.0,
            7.0, 2.0,
            7.0, 3.0,
        ],
    )
    .unwrap();

    let (sc, t) = Scaler::fit_transform(&x).unwrap();
    assert!(sc.std[0] > 0.0, "constant column std must be clamped");
    for r in 0..3 {
        assert!(t[(r, 0)].is_finite());
        assert!(t[(r, 0)].abs() < 1e-3, "constant column should map to ~0");
    }
}

#[test]
fn fit_empty_matrix_errors() {
    let x = Array2::<f64>::zeros((0, 3));
    let err = Scaler::fit(&x).unwrap_err();
    assert!(matches!(err, TrainError::EmptyDataset));
}

#[test]
fn transform_wrong_width_errors() {
    let x = Array2::from_shape_vec((2, 2), vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    let sc = Scaler::fit(&x).unwrap();
    let narrow = Array2::from_shape_vec((2, 1), vec![1.0, 2.0]).unwrap();
    let err = sc.transform(&narrow).unwrap_err();
    assert!(matches!(err, TrainError::DimensionMismatch { .. }));
}
