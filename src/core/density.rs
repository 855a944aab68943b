use serde::{Deserialize, Serialize};

use crate::core::LinearScale;
use crate::error::{ScatterError, ScatterResult};

pub const DEFAULT_BANDWIDTH: f64 = 7.0;
pub const DEFAULT_GRID_SIZE: usize = 50;

/// Epanechnikov kernel with a fixed bandwidth `k`:
/// `0.75 * (1 - (v/k)^2) / k` inside the support, zero outside.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EpanechnikovKernel {
    bandwidth: f64,
}

impl EpanechnikovKernel {
    pub fn new(bandwidth: f64) -> ScatterResult<Self> {
        if !bandwidth.is_finite() || bandwidth <= 0.0 {
            return Err(ScatterError::InvalidConfig(
                "kernel bandwidth must be finite and > 0".to_owned(),
            ));
        }
        Ok(Self { bandwidth })
    }

    #[must_use]
    pub fn bandwidth(self) -> f64 {
        self.bandwidth
    }

    #[must_use]
    pub fn evaluate(self, offset: f64) -> f64 {
        let u = offset / self.bandwidth;
        if u.abs() <= 1.0 {
            0.75 * (1.0 - u * u) / self.bandwidth
        } else {
            0.0
        }
    }
}

/// Evenly spaced evaluation positions, both domain ends included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationGrid {
    values: Vec<f64>,
}

impl EvaluationGrid {
    pub fn uniform(start: f64, end: f64, size: usize) -> ScatterResult<Self> {
        if size < 2 {
            return Err(ScatterError::InvalidConfig(
                "evaluation grid needs at least two points".to_owned(),
            ));
        }
        if !start.is_finite() || !end.is_finite() {
            return Err(ScatterError::InvalidData(
                "evaluation grid bounds must be finite".to_owned(),
            ));
        }

        let step = (end - start) / (size - 1) as f64;
        let mut values: Vec<f64> = (0..size).map(|i| start + step * i as f64).collect();
        // Land exactly on the domain end regardless of accumulated rounding.
        values[size - 1] = end;
        Ok(Self { values })
    }

    /// Grid spanning the domain of `scale`.
    pub fn for_scale(scale: LinearScale, size: usize) -> ScatterResult<Self> {
        let (start, end) = scale.domain();
        Self::uniform(start, end, size)
    }

    /// Wraps explicit positions; used when a caller needs exact sample points.
    #[must_use]
    pub fn from_values(values: Vec<f64>) -> Self {
        Self { values }
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DensitySample {
    pub x: f64,
    pub density: f64,
}

/// Kernel means over an evaluation grid. Not normalized to unit area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DensityCurve {
    samples: Vec<DensitySample>,
}

impl DensityCurve {
    #[must_use]
    pub fn samples(&self) -> &[DensitySample] {
        &self.samples
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[must_use]
    pub fn max_density(&self) -> f64 {
        self.samples
            .iter()
            .map(|sample| sample.density)
            .fold(0.0, f64::max)
    }

    #[must_use]
    pub fn densities(&self) -> Vec<f64> {
        self.samples.iter().map(|sample| sample.density).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DensityEstimator {
    kernel: EpanechnikovKernel,
}

impl DensityEstimator {
    pub fn new(bandwidth: f64) -> ScatterResult<Self> {
        Ok(Self {
            kernel: EpanechnikovKernel::new(bandwidth)?,
        })
    }

    #[must_use]
    pub fn kernel(&self) -> EpanechnikovKernel {
        self.kernel
    }

    /// Mean kernel contribution of `samples` at `x`; zero for no samples.
    #[must_use]
    pub fn density_at(&self, samples: &[f64], x: f64) -> f64 {
        if samples.is_empty() {
            return 0.0;
        }
        let sum: f64 = samples
            .iter()
            .map(|sample| self.kernel.evaluate(x - sample))
            .sum();
        sum / samples.len() as f64
    }

    /// Evaluates the density at every grid position. `O(grid * samples)`.
    #[must_use]
    pub fn estimate(&self, samples: &[f64], grid: &EvaluationGrid) -> DensityCurve {
        let samples = grid
            .values()
            .iter()
            .map(|&x| DensitySample {
                x,
                density: self.density_at(samples, x),
            })
            .collect();
        DensityCurve { samples }
    }
}

impl Default for DensityEstimator {
    fn default() -> Self {
        Self {
            kernel: EpanechnikovKernel {
                bandwidth: DEFAULT_BANDWIDTH,
            },
        }
    }
}
