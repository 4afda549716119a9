//! Behavioural properties shared by the scalers.

use approx::assert_abs_diff_eq;
use feature_scaling::preprocessing::{
    DegeneratePolicy, MinMaxScaler, PreprocessingError, StandardScaler, Transformer,
};
use ndarray::{array, Array2, Axis};
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

fn arb_dataset() -> impl Strategy<Value = Array2<f64>> {
    (2usize..24, 1usize..6).prop_flat_map(|(rows, cols)| {
        prop::collection::vec(-1e3f64..1e3, rows * cols).prop_map(move |values| {
            Array2::from_shape_vec((rows, cols), values).expect("shape matches length")
        })
    })
}

/// A dataset with one column overwritten by a single value.
fn arb_dataset_with_constant_column() -> impl Strategy<Value = Array2<f64>> {
    (arb_dataset(), any::<prop::sample::Index>(), -1e3f64..1e3).prop_map(
        |(mut data, column, value)| {
            let j = column.index(data.ncols());
            data.column_mut(j).fill(value);
            data
        },
    )
}

fn to_nested(data: &Array2<f64>) -> Vec<Vec<f64>> {
    data.rows().into_iter().map(|row| row.to_vec()).collect()
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Outputs lie in [0, 1]; each column's min maps to 0 and max to 1.
    #[test]
    fn minmax_output_in_unit_range(data in arb_dataset()) {
        let mut scaler = MinMaxScaler::new();
        scaler.fit(&data).unwrap();
        let range = scaler.data_range().unwrap();
        prop_assume!(range.iter().all(|&r| r != 0.0));

        let out = scaler.transform(&data).unwrap();
        prop_assert!(out.iter().all(|&v| (0.0..=1.0).contains(&v)));

        let minimum = scaler.minimum().unwrap();
        let maximum = scaler.maximum().unwrap();
        for (j, column) in data.axis_iter(Axis(1)).enumerate() {
            for (i, &x) in column.iter().enumerate() {
                if x == minimum[j] {
                    prop_assert_eq!(out[[i, j]], 0.0);
                }
                if x == maximum[j] {
                    prop_assert_eq!(out[[i, j]], 1.0);
                }
            }
        }
    }

    /// Output columns have mean ~0 and population std ~1.
    #[test]
    fn standard_output_is_standardized(data in arb_dataset()) {
        let mut scaler = StandardScaler::new();
        scaler.fit(&data).unwrap();
        prop_assume!(scaler.std().unwrap().iter().all(|&s| s > 1.0));

        let out = scaler.transform(&data).unwrap();
        let mean = out.mean_axis(Axis(0)).unwrap();
        let std = out.std_axis(Axis(0), 0.0);
        for j in 0..out.ncols() {
            prop_assert!(mean[j].abs() < 1e-9, "column {} mean {}", j, mean[j]);
            prop_assert!((std[j] - 1.0).abs() < 1e-9, "column {} std {}", j, std[j]);
        }
    }

    /// Any constant column zeroes the whole MinMax output.
    #[test]
    fn minmax_constant_column_zeroes_output(data in arb_dataset_with_constant_column()) {
        let mut scaler = MinMaxScaler::new();
        let out = scaler.fit_transform(&data).unwrap();
        prop_assert_eq!(out.dim(), data.dim());
        prop_assert!(out.iter().all(|&v| v == 0.0));
    }

    /// Any constant column zeroes the whole Standard output.
    #[test]
    fn standard_constant_column_zeroes_output(data in arb_dataset_with_constant_column()) {
        let mut scaler = StandardScaler::new();
        let out = scaler.fit_transform(&data).unwrap();
        prop_assert_eq!(out.dim(), data.dim());
        prop_assert!(out.iter().all(|&v| v == 0.0));
    }

    /// `fit_transform(X)` equals `fit(X)` followed by `transform(X)`.
    #[test]
    fn fit_transform_matches_fit_then_transform(data in arb_dataset()) {
        let mut combined = MinMaxScaler::new();
        let mut separate = MinMaxScaler::new();
        separate.fit(&data).unwrap();
        prop_assert_eq!(combined.fit_transform(&data).unwrap(), separate.transform(&data).unwrap());

        let mut combined = StandardScaler::new();
        let mut separate = StandardScaler::new();
        separate.fit(&data).unwrap();
        prop_assert_eq!(combined.fit_transform(&data).unwrap(), separate.transform(&data).unwrap());
    }

    /// Nested `Vec`s give the same result as the equivalent array.
    #[test]
    fn nested_input_matches_array_input(data in arb_dataset()) {
        let nested = to_nested(&data);

        let from_array = MinMaxScaler::new().fit_transform(&data).unwrap();
        let from_nested = MinMaxScaler::new().fit_transform(&nested).unwrap();
        prop_assert_eq!(from_array, from_nested);

        let from_array = StandardScaler::new().fit_transform(&data).unwrap();
        let from_nested = StandardScaler::new().fit_transform(&nested).unwrap();
        prop_assert_eq!(from_array, from_nested);
    }

    /// With per-column handling only constant columns are replaced.
    #[test]
    fn per_column_policy_keeps_other_columns(data in arb_dataset_with_constant_column()) {
        let mut scaler = StandardScaler::new().with_degenerate_policy(DegeneratePolicy::PerColumn);
        let out = scaler.fit_transform(&data).unwrap();
        let std = scaler.std().unwrap();

        for j in 0..data.ncols() {
            if std[j] == 0.0 {
                prop_assert!(out.column(j).iter().all(|&v| v == 0.0));
            }
        }
        prop_assert!(out.iter().all(|v| v.is_finite()));
    }
}

// =============================================================================
// Concrete scenarios
// =============================================================================

#[test]
fn minmax_scenario_three_rows() {
    let mut scaler = MinMaxScaler::new();
    let out = scaler
        .fit_transform(&[[1.0, 2.0], [2.0, 4.0], [3.0, 6.0]])
        .unwrap();

    assert_eq!(scaler.minimum().unwrap(), array![1.0, 2.0]);
    assert_eq!(scaler.maximum().unwrap(), array![3.0, 6.0]);
    assert_eq!(scaler.data_range().unwrap(), array![2.0, 4.0]);
    assert_eq!(out, array![[0.0, 0.0], [0.5, 0.5], [1.0, 1.0]]);
}

#[test]
fn standard_scenario_single_column() {
    let mut scaler = StandardScaler::new();
    let out = scaler.fit_transform(&[[1], [2], [3]]).unwrap();

    assert_abs_diff_eq!(scaler.mean().unwrap()[0], 2.0, epsilon = 1e-12);
    assert_abs_diff_eq!(scaler.std().unwrap()[0], 0.8165, epsilon = 1e-4);
    assert_abs_diff_eq!(out, array![[-1.2247], [0.0], [1.2247]], epsilon = 1e-4);
}

#[test]
fn minmax_scenario_constant_column_zeroes_row() {
    let mut scaler = MinMaxScaler::new();
    scaler.fit(&[[1.0, 5.0], [1.0, 10.0]]).unwrap();

    assert_eq!(scaler.transform(&[[1.0, 7.0]]).unwrap(), array![[0.0, 0.0]]);
}

#[test]
fn list_input_matches_array_input() {
    let from_list = MinMaxScaler::new()
        .fit_transform(&vec![vec![1, 2], vec![3, 4]])
        .unwrap();
    let from_array = MinMaxScaler::new()
        .fit_transform(&array![[1.0, 2.0], [3.0, 4.0]])
        .unwrap();

    assert_eq!(from_list, from_array);
}

#[test]
fn one_dimensional_input_is_a_single_column() {
    let mut scaler = StandardScaler::new();
    let out = scaler.fit_transform(array![1.0, 2.0, 3.0]).unwrap();

    assert_eq!(out.dim(), (3, 1));
    assert_eq!(scaler.n_features_in(), Some(1));
}

#[test]
fn flat_list_is_a_single_column() {
    let mut scaler = MinMaxScaler::new();
    let out = scaler.fit_transform(&vec![2.0f64, 4.0, 6.0]).unwrap();

    assert_eq!(out, array![[0.0], [0.5], [1.0]]);
    assert_eq!(scaler.n_features_in(), Some(1));
    assert_eq!(scaler.transform(&[8i64]).unwrap(), array![[1.5]]);
}

#[test]
fn transform_before_fit_is_an_error() {
    let minmax = MinMaxScaler::new();
    let standard = StandardScaler::new();

    assert_eq!(
        minmax.transform(&[[1.0]]).unwrap_err(),
        PreprocessingError::NotFitted("MinMaxScaler")
    );
    assert_eq!(
        standard.transform(&[[1.0]]).unwrap_err(),
        PreprocessingError::NotFitted("StandardScaler")
    );
}

#[test]
fn invalid_input_is_rejected_by_every_entry_point() {
    let ragged = vec![vec![1.0, 2.0], vec![3.0]];
    let mut scaler = MinMaxScaler::new();

    assert!(matches!(
        scaler.fit(&ragged),
        Err(PreprocessingError::InvalidInput(_))
    ));
    assert!(matches!(
        scaler.fit_transform(&ragged),
        Err(PreprocessingError::InvalidInput(_))
    ));

    scaler.fit(&[[0.0, 0.0], [1.0, 1.0]]).unwrap();
    assert!(matches!(
        scaler.transform(&ragged),
        Err(PreprocessingError::InvalidInput(_))
    ));
    assert!(matches!(
        scaler.transform(&vec![vec!["1", "two"]]),
        Err(PreprocessingError::InvalidInput(_))
    ));
}

#[test]
fn fitted_scaler_is_shareable_across_threads() {
    let mut scaler = StandardScaler::new();
    scaler.fit(&[[1.0, 2.0], [3.0, 5.0]]).unwrap();
    let scaler = &scaler;

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|i| s.spawn(move || scaler.transform(&[[i as f64, 0.0]]).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap().dim(), (1, 2));
        }
    });
}
