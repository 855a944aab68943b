use approx::assert_relative_eq;
use scatter_rs::ScatterError;
use scatter_rs::core::{DensityEstimator, EpanechnikovKernel, EvaluationGrid, LinearScale};

#[test]
fn kernel_peaks_at_zero_and_vanishes_outside_bandwidth() {
    let kernel = EpanechnikovKernel::new(7.0).expect("kernel");
    assert_relative_eq!(kernel.evaluate(0.0), 0.75 / 7.0);
    assert_relative_eq!(kernel.evaluate(3.5), 0.75 * 0.75 / 7.0);
    assert_eq!(kernel.evaluate(7.0), 0.0);
    assert_eq!(kernel.evaluate(-7.5), 0.0);
}

#[test]
fn kernel_rejects_non_positive_bandwidth() {
    assert!(matches!(
        EpanechnikovKernel::new(0.0),
        Err(ScatterError::InvalidConfig(_))
    ));
    assert!(DensityEstimator::new(f64::NAN).is_err());
}

#[test]
fn single_sample_density_matches_kernel() {
    let estimator = DensityEstimator::default();
    assert_relative_eq!(estimator.density_at(&[20.0], 20.0), 0.75 / 7.0);
    assert_eq!(estimator.density_at(&[20.0], 27.5), 0.0);
    assert_eq!(estimator.density_at(&[20.0], 12.9), 0.0);
}

#[test]
fn density_is_mean_over_samples() {
    let estimator = DensityEstimator::default();
    let density = estimator.density_at(&[10.0, 40.0], 10.0);
    assert_relative_eq!(density, 0.75 / 7.0 / 2.0);
}

#[test]
fn empty_samples_yield_zero_curve_of_grid_length() {
    let estimator = DensityEstimator::default();
    let grid = EvaluationGrid::uniform(0.0, 100.0, 50).expect("grid");
    let curve = estimator.estimate(&[], &grid);
    assert_eq!(curve.len(), 50);
    assert!(curve.densities().iter().all(|density| *density == 0.0));
    assert_eq!(curve.max_density(), 0.0);
}

#[test]
fn uniform_grid_includes_both_domain_ends() {
    let scale = LinearScale::new(0.0, 100.0, 0.0, 460.0).expect("scale");
    let grid = EvaluationGrid::for_scale(scale, 50).expect("grid");
    assert_eq!(grid.len(), 50);
    assert_eq!(grid.values().first(), Some(&0.0));
    assert_eq!(grid.values().last(), Some(&100.0));
    assert!(EvaluationGrid::uniform(0.0, 1.0, 1).is_err());
}

#[test]
fn estimate_evaluates_on_explicit_positions() {
    let estimator = DensityEstimator::default();
    let grid = EvaluationGrid::from_values(vec![20.0, 35.0, 42.0]);
    let curve = estimator.estimate(&[35.0], &grid);
    let densities = curve.densities();
    assert_eq!(densities[0], 0.0);
    assert_relative_eq!(densities[1], 0.75 / 7.0);
    assert_eq!(densities[2], 0.0);
    assert_eq!(curve.samples()[1].x, 35.0);
}
