use scatter_rs::core::{
    ChartLayout, DensityEstimator, EvaluationGrid, LinearScale, MarginalAxis, MarginalSide,
    basis_spline,
};

fn temperature_scale() -> LinearScale {
    LinearScale::new(0.0, 100.0, 0.0, 460.0).expect("temperature scale")
}

fn curve_of(samples: &[f64]) -> scatter_rs::core::DensityCurve {
    let grid = EvaluationGrid::uniform(0.0, 100.0, 50).expect("grid");
    DensityEstimator::default().estimate(samples, &grid)
}

#[test]
fn strips_sit_in_top_and_right_margins() {
    let layout = ChartLayout::square(600.0);

    let top = MarginalAxis::top(layout);
    assert_eq!(top.side(), MarginalSide::Top);
    assert_eq!(top.origin(), (50.0, 0.0));
    assert_eq!(top.depth(), 90.0);
    assert_eq!(top.length(), 460.0);
    assert_eq!(top.baseline(), 90.0);

    let right = MarginalAxis::for_side(MarginalSide::Right, layout);
    assert_eq!(right.origin(), (510.0, 90.0));
    assert_eq!(right.depth(), 90.0);
    assert_eq!(right.length(), 460.0);
    assert_eq!(right.baseline(), 0.0);
}

#[test]
fn top_area_path_closes_on_its_baseline() {
    let axis = MarginalAxis::top(ChartLayout::square(600.0));
    let density = LinearScale::new(0.0, 0.03, 90.0, 0.0).expect("density scale");
    let curve = curve_of(&[20.0, 22.0, 60.0]);

    let path = axis.area_path(&curve, temperature_scale(), density, false);
    assert_eq!(path.len(), curve.len() + 3);
    assert_eq!(path.first(), path.last());

    let baseline_right = path[curve.len()];
    let baseline_left = path[curve.len() + 1];
    assert_eq!(baseline_right.y, 90.0);
    assert_eq!(baseline_left.y, 90.0);
    assert!((baseline_right.x - 460.0).abs() <= 1e-9);
    assert!(baseline_left.x.abs() <= 1e-9);
    assert!(path.iter().all(|vertex| vertex.y <= 90.0));
}

#[test]
fn right_area_path_grows_rightwards_from_zero() {
    let axis = MarginalAxis::right(ChartLayout::square(600.0));
    let value = LinearScale::new(0.0, 100.0, 460.0, 0.0).expect("value scale");
    let density = LinearScale::new(0.0, 0.03, 0.0, 90.0).expect("density scale");
    let curve = curve_of(&[35.0, 90.0]);

    let path = axis.area_path(&curve, value, density, true);
    assert_eq!(path.first(), path.last());
    assert!(path.iter().all(|vertex| vertex.x >= 0.0));
    let peak = path.iter().map(|vertex| vertex.x).fold(0.0, f64::max);
    assert!(peak > 0.0);
}

#[test]
fn empty_curve_yields_empty_path() {
    let axis = MarginalAxis::top(ChartLayout::square(600.0));
    let density = LinearScale::new(0.0, 0.03, 90.0, 0.0).expect("density scale");
    let grid = EvaluationGrid::from_values(Vec::new());
    let curve = DensityEstimator::default().estimate(&[20.0], &grid);

    assert!(axis.area_path(&curve, temperature_scale(), density, true).is_empty());
}

#[test]
fn marker_spans_strip_depth() {
    let layout = ChartLayout::square(600.0);
    let scale = temperature_scale();

    let top = MarginalAxis::top(layout).marker_rect(60.0, scale, 15.0);
    assert!((top.x - 276.0).abs() <= 1e-9);
    assert_eq!((top.y, top.width, top.height), (0.0, 15.0, 90.0));

    let right = MarginalAxis::right(layout).marker_rect(50.0, scale, 15.0);
    assert!((right.y - 230.0).abs() <= 1e-9);
    assert_eq!((right.x, right.width, right.height), (0.0, 90.0, 15.0));
}

#[test]
fn smoothing_stays_within_control_hull() {
    let controls: Vec<_> = (0..6)
        .map(|i| {
            let x = f64::from(i) * 10.0;
            scatter_rs::core::PathVertex::new(x, if i % 2 == 0 { 0.0 } else { 30.0 })
        })
        .collect();
    let curve = basis_spline(&controls, 8);
    assert!(curve.len() > controls.len());
    assert!(curve.iter().all(|vertex| (0.0..=30.0).contains(&vertex.y)));
    assert!(curve.windows(2).all(|pair| pair[0].x <= pair[1].x + 1e-9));
}
