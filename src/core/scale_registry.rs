use tracing::warn;

use crate::core::{ChartLayout, Dataset, LinearScale};
use crate::error::{ScatterError, ScatterResult};

/// Temperature domains are rounded up to a multiple of this step.
pub const DOMAIN_ROUNDING_STEP: f64 = 100.0;

/// Density value mapped to the full depth of a marginal strip.
pub const DEFAULT_DENSITY_DOMAIN_MAX: f64 = 0.03;

/// Upper bound of a temperature axis domain: `ceil(max / 100) * 100`.
#[must_use]
pub fn rounded_domain_upper(max: f64) -> f64 {
    (max / DOMAIN_ROUNDING_STEP).ceil() * DOMAIN_ROUNDING_STEP
}

/// Settings for the density axes of both marginal strips.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DensityAxisSettings {
    pub domain_max: f64,
    /// Pixel depth given to brushed curves, measured from the strip baseline.
    pub brushed_extent_px: f64,
}

impl Default for DensityAxisSettings {
    fn default() -> Self {
        Self {
            domain_max: DEFAULT_DENSITY_DOMAIN_MAX,
            brushed_extent_px: 10.0,
        }
    }
}

/// All linear mappings used by the scatter scene, computed once at load.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleRegistry {
    x: LinearScale,
    y: LinearScale,
    top_density: LinearScale,
    right_density: LinearScale,
    top_brushed_density: LinearScale,
    right_brushed_density: LinearScale,
}

impl ScaleRegistry {
    pub fn from_dataset(
        dataset: &Dataset,
        layout: ChartLayout,
        density: DensityAxisSettings,
    ) -> ScatterResult<Self> {
        layout.validate()?;
        if dataset.is_empty() {
            return Err(ScatterError::EmptyDataset);
        }

        let x = temperature_scale(
            "x",
            dataset.max_min_temp(),
            (0.0, layout.bounded_width()),
        )?;
        let y = temperature_scale(
            "y",
            dataset.max_max_temp(),
            (layout.bounded_height(), 0.0),
        )?;

        let top = layout.margins.top;
        let right = layout.margins.right;
        let brushed = density.brushed_extent_px;
        Ok(Self {
            x,
            y,
            top_density: LinearScale::new(0.0, density.domain_max, top, 0.0)?,
            right_density: LinearScale::new(0.0, density.domain_max, 0.0, right)?,
            top_brushed_density: LinearScale::new(0.0, density.domain_max, top, top - brushed)?,
            right_brushed_density: LinearScale::new(0.0, density.domain_max, 0.0, brushed)?,
        })
    }

    /// Minimum temperature to horizontal plot pixel.
    #[must_use]
    pub fn x(&self) -> LinearScale {
        self.x
    }

    /// Maximum temperature to vertical plot pixel (inverted).
    #[must_use]
    pub fn y(&self) -> LinearScale {
        self.y
    }

    #[must_use]
    pub fn top_density(&self) -> LinearScale {
        self.top_density
    }

    #[must_use]
    pub fn right_density(&self) -> LinearScale {
        self.right_density
    }

    #[must_use]
    pub fn top_brushed_density(&self) -> LinearScale {
        self.top_brushed_density
    }

    #[must_use]
    pub fn right_brushed_density(&self) -> LinearScale {
        self.right_brushed_density
    }
}

fn temperature_scale(axis: &'static str, max: f64, range: (f64, f64)) -> ScatterResult<LinearScale> {
    let upper = rounded_domain_upper(max);
    match LinearScale::new(0.0, upper, range.0, range.1) {
        Err(ScatterError::DegenerateDomain { min, max: degenerate }) => {
            let widened = degenerate + DOMAIN_ROUNDING_STEP;
            warn!(
                axis,
                min,
                max = degenerate,
                widened,
                "degenerate temperature domain, widening upper bound"
            );
            LinearScale::new(0.0, widened, range.0, range.1)
        }
        other => other,
    }
}
