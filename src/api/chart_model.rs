use tracing::debug;

use crate::core::{
    Dataset, DensityAxisSettings, DensityCurve, DensityEstimator, EvaluationGrid, LegendDateScale,
    LinearScale, MarginalAxis, MarginalSide, PathVertex, ScaleRegistry, Tessellation,
};
use crate::error::ScatterResult;
use crate::interaction::Selection;
use crate::render::MonthPalette;

use super::ScatterEngineConfig;

/// Legend tick months are placed by this scale's domain.
const LEGEND_MONTH_DOMAIN: (f64, f64) = (1.0, 12.0);

/// Everything derived once from the dataset and configuration.
///
/// The model never changes after construction; interaction only reads it.
#[derive(Debug, Clone)]
pub(super) struct ScatterModel {
    pub(super) config: ScatterEngineConfig,
    pub(super) dataset: Dataset,
    pub(super) scales: ScaleRegistry,
    pub(super) legend_scale: LegendDateScale,
    pub(super) legend_month_scale: LinearScale,
    pub(super) estimator: DensityEstimator,
    pub(super) top_grid: EvaluationGrid,
    pub(super) right_grid: EvaluationGrid,
    pub(super) global_top: DensityCurve,
    pub(super) global_right: DensityCurve,
    pub(super) tessellation: Tessellation,
    pub(super) palette: MonthPalette,
    pub(super) top_axis: MarginalAxis,
    pub(super) right_axis: MarginalAxis,
}

impl ScatterModel {
    pub(super) fn build(dataset: Dataset, config: ScatterEngineConfig) -> ScatterResult<Self> {
        let layout = config.layout;
        let scales = ScaleRegistry::from_dataset(
            &dataset,
            layout,
            DensityAxisSettings {
                domain_max: config.density_domain_max,
                brushed_extent_px: config.brushed_density_extent_px,
            },
        )?;

        let legend_scale = LegendDateScale::new(
            layout.legend.width,
            config.highlight_bar_width(),
            dataset.date_extent(),
            config.brush_window_days,
        )?;
        let legend_month_scale = LinearScale::new(
            LEGEND_MONTH_DOMAIN.0,
            LEGEND_MONTH_DOMAIN.1,
            0.0,
            layout.legend.width,
        )?;

        let estimator = DensityEstimator::new(config.bandwidth)?;
        let top_grid = EvaluationGrid::for_scale(scales.x(), config.grid_size)?;
        let right_grid = EvaluationGrid::for_scale(scales.y(), config.grid_size)?;
        let global_top = estimator.estimate(&dataset.min_temps(), &top_grid);
        let global_right = estimator.estimate(&dataset.max_temps(), &right_grid);

        let projected: Vec<PathVertex> = dataset
            .points()
            .iter()
            .map(|point| {
                PathVertex::new(
                    scales.x().forward(point.min_temp),
                    scales.y().forward(point.max_temp),
                )
            })
            .collect();
        let tessellation =
            Tessellation::build(&projected, layout.bounded_width(), layout.bounded_height())?;

        debug!(
            points = dataset.len(),
            grid = config.grid_size,
            bandwidth = config.bandwidth,
            top_peak = global_top.max_density(),
            right_peak = global_right.max_density(),
            "scatter model built"
        );

        Ok(Self {
            config,
            dataset,
            scales,
            legend_scale,
            legend_month_scale,
            estimator,
            top_grid,
            right_grid,
            global_top,
            global_right,
            tessellation,
            palette: MonthPalette::default(),
            top_axis: MarginalAxis::top(layout),
            right_axis: MarginalAxis::right(layout),
        })
    }

    pub(super) fn axis(&self, side: MarginalSide) -> MarginalAxis {
        match side {
            MarginalSide::Top => self.top_axis,
            MarginalSide::Right => self.right_axis,
        }
    }

    /// Scale placing temperatures along the strip of `side`.
    pub(super) fn value_scale(&self, side: MarginalSide) -> LinearScale {
        match side {
            MarginalSide::Top => self.scales.x(),
            MarginalSide::Right => self.scales.y(),
        }
    }

    pub(super) fn global_density_scale(&self, side: MarginalSide) -> LinearScale {
        match side {
            MarginalSide::Top => self.scales.top_density(),
            MarginalSide::Right => self.scales.right_density(),
        }
    }

    pub(super) fn brushed_density_scale(&self, side: MarginalSide) -> LinearScale {
        match side {
            MarginalSide::Top => self.scales.top_brushed_density(),
            MarginalSide::Right => self.scales.right_brushed_density(),
        }
    }

    pub(super) fn global_curve(&self, side: MarginalSide) -> &DensityCurve {
        match side {
            MarginalSide::Top => &self.global_top,
            MarginalSide::Right => &self.global_right,
        }
    }

    pub(super) fn projected(&self, index: usize) -> Option<PathVertex> {
        self.tessellation.projected(index)
    }

    /// Curves of the selected subset: minimum temperatures on the top grid,
    /// maximum temperatures on the right grid.
    pub(super) fn brushed_curves(&self, selection: &Selection) -> (DensityCurve, DensityCurve) {
        let points = self.dataset.points();
        let (mins, maxs): (Vec<f64>, Vec<f64>) = selection
            .selected_indices()
            .filter_map(|index| points.get(index))
            .map(|point| (point.min_temp, point.max_temp))
            .unzip();
        (
            self.estimator.estimate(&mins, &self.top_grid),
            self.estimator.estimate(&maxs, &self.right_grid),
        )
    }
}
