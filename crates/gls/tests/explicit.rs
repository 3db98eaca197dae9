//! Integration tests for the explicit-correlation routines.

use approx::assert_relative_eq;
use peakweight_gls::{
    Advisory, Estimate, WeightConfig, WeightError, combine, weight2, weight3, weight4,
};

#[test]
fn weights_sum_to_one_for_two() {
    let res = weight2([40.46, 63.39], [0.554, 0.677], 0.658).unwrap();
    assert_relative_eq!(res.weights().iter().sum::<f64>(), 1.0, epsilon = 1e-12);
    assert_eq!(res.used(), &[0, 1]);
}

#[test]
fn two_estimate_closed_form() {
    let (x1, x2, s1, s2, r) = (40.46_f64, 63.39_f64, 0.554, 0.677, 0.658);
    let res = weight2([x1, x2], [s1, s2], r).unwrap();

    let s12 = r * s1 * s2;
    let denom = s1 * s1 + s2 * s2 - 2.0 * s12;
    let a1 = (s2 * s2 - s12) / denom;
    let z_log = a1 * x1.log10() + (1.0 - a1) * x2.log10();
    let sepz = ((s1 * s1 * s2 * s2 - s12 * s12) / denom).sqrt();

    assert_relative_eq!(res.z_log(), z_log, epsilon = 1e-12);
    assert_relative_eq!(res.sepz(), sepz, epsilon = 1e-12);
    assert_relative_eq!(res.ci(), 1.64 * sepz, epsilon = 1e-12);
    assert_relative_eq!(res.pil(), 10f64.powf(z_log - 1.64 * sepz), max_relative = 1e-12);
    assert_relative_eq!(res.piu(), 10f64.powf(z_log + 1.64 * sepz), max_relative = 1e-12);
    assert!(res.warning().is_none());
}

#[test]
fn strongly_correlated_pair_leaves_input_range() {
    let res = weight2([40.46, 63.39], [0.554, 0.677], 0.9).unwrap();
    assert!(res.z() < 40.46);
    assert_eq!(res.advisories(), &[Advisory::OutsideInputRange]);
    assert_eq!(
        res.warning().as_deref(),
        Some("Weighted value is outside the range of input values.")
    );
}

#[test]
fn independent_comparable_estimates_stay_in_range() {
    let res = weight2([40.46, 63.39], [0.554, 0.677], 0.0).unwrap();
    assert!(res.z() > 40.46 && res.z() < 63.39);
    assert!(res.warning().is_none());
}

#[test]
fn equal_values_round_trip_through_logs() {
    let res = weight3([316.23; 3], [0.2, 0.3, 0.4], [0.3, 0.2, 0.1]).unwrap();
    assert_relative_eq!(res.z(), 316.23, max_relative = 1e-12);
}

#[test]
fn three_estimate_weights_sum_to_one() {
    let res = weight3(
        [549.54, 281.84, 316.23],
        [0.234, 0.262, 0.283],
        [0.553, 0.518, 0.907],
    )
    .unwrap();
    assert_relative_eq!(res.weights().iter().sum::<f64>(), 1.0, epsilon = 1e-12);
    assert!(res.sepz() > 0.0);
}

#[test]
fn weight4_matches_weight3_after_dropping_largest_sep() {
    let four = weight4(
        [100.0, 120.0, 90.0, 110.0],
        [0.2, 0.25, 0.6, 0.3],
        [0.1, 0.2, 0.3, 0.4, 0.5, 0.6],
    )
    .unwrap();
    let three = weight3([100.0, 120.0, 110.0], [0.2, 0.25, 0.3], [0.1, 0.3, 0.5]).unwrap();

    assert_relative_eq!(four.z_log(), three.z_log(), epsilon = 1e-14);
    assert_relative_eq!(four.sepz(), three.sepz(), epsilon = 1e-14);
    assert_eq!(four.used(), &[0, 1, 3]);
    assert_eq!(
        four.advisories().last(),
        Some(&Advisory::ReducedToThree { dropped: 2 })
    );
    assert!(
        four.warning()
            .unwrap()
            .ends_with("the 3 estimation methods with lowest SEP values were weighted.")
    );
}

#[test]
fn weight4_drops_first_of_tied_largest() {
    let res = weight4(
        [100.0, 120.0, 90.0, 110.0],
        [0.3, 0.5, 0.5, 0.2],
        [0.0; 6],
    )
    .unwrap();
    assert_eq!(res.used(), &[0, 2, 3]);
}

#[test]
fn combine_with_confidence_level() {
    let estimates = [Estimate::new(40.46, 0.554), Estimate::new(63.39, 0.677)];
    let config = WeightConfig::new().with_confidence_level(0.95);
    let res = combine(&estimates, &[0.658], &config).unwrap();
    assert_relative_eq!(res.ci() / res.sepz(), 1.959_964, epsilon = 1e-5);
}

#[test]
fn error_invalid_sep() {
    let err = weight2([1.0, 1.0], [0.0, 0.5], 0.5).unwrap_err();
    assert!(matches!(err, WeightError::InvalidSep { index: 0, sep } if sep == 0.0));
}

#[test]
fn error_invalid_correlation() {
    let err = weight2([1.0, 1.0], [0.3, 0.5], 1.5).unwrap_err();
    assert!(matches!(
        err,
        WeightError::InvalidCorrelation {
            first: 0,
            second: 1,
            ..
        }
    ));
}

#[test]
fn error_non_positive_value() {
    let err = weight2([0.0, 10.0], [0.3, 0.5], 0.5).unwrap_err();
    assert!(matches!(err, WeightError::NonPositiveEstimate { index: 0, .. }));
    let err = weight3([10.0, f64::INFINITY, 5.0], [0.3; 3], [0.0; 3]).unwrap_err();
    assert!(matches!(err, WeightError::NonPositiveEstimate { index: 1, .. }));
}

#[test]
fn error_degenerate() {
    let err = weight2([10.0, 20.0], [0.4, 0.4], 1.0).unwrap_err();
    assert!(matches!(err, WeightError::DegenerateWeights));
}

#[test]
fn error_inconsistent_correlations() {
    let err = weight3([10.0, 20.0, 30.0], [0.3; 3], [-0.9; 3]).unwrap_err();
    assert!(matches!(err, WeightError::NegativeVariance { .. }));
}

#[test]
fn error_estimate_count() {
    let one = [Estimate::new(10.0, 0.3)];
    assert!(matches!(
        combine(&one, &[], &WeightConfig::default()),
        Err(WeightError::InsufficientEstimates { n: 1 })
    ));
    let five = [Estimate::new(10.0, 0.3); 5];
    assert!(matches!(
        combine(&five, &[0.0; 10], &WeightConfig::default()),
        Err(WeightError::TooManyEstimates { n: 5, max: 4 })
    ));
}

#[test]
fn result_is_send_and_sync() {
    fn assert_impl<T: Send + Sync>() {}
    assert_impl::<peakweight_gls::WeightedResult>();
}

#[test]
fn weight4_ignores_bad_inputs_on_dropped_estimate() {
    let three = weight3([100.0, 120.0, 110.0], [0.2, 0.25, 0.3], [0.1, 0.3, 0.5]).unwrap();

    let four = weight4(
        [100.0, 120.0, 90.0, 110.0],
        [0.2, 0.25, 0.6, 0.3],
        [0.1, 1.5, 0.3, 0.4, 0.5, f64::NAN],
    )
    .unwrap();
    assert_relative_eq!(four.z(), three.z(), max_relative = 1e-14);

    let four = weight4(
        [100.0, 120.0, -5.0, 110.0],
        [0.2, 0.25, 0.6, 0.3],
        [0.1, 0.2, 0.3, 0.4, 0.5, 0.6],
    )
    .unwrap();
    assert_relative_eq!(four.z(), three.z(), max_relative = 1e-14);
    assert_eq!(
        four.advisories().last(),
        Some(&Advisory::ReducedToThree { dropped: 2 })
    );
}
