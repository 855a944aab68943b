pub mod dataset;
pub mod date_scale;
pub mod delaunay;
pub mod density;
pub mod marginal;
pub mod scale;
pub mod scale_registry;
pub mod types;
pub mod voronoi;

pub use dataset::{Dataset, RECORD_DATE_FORMAT, TemperatureRecord};
pub use date_scale::{BrushRange, DEFAULT_BRUSH_WINDOW_DAYS, LegendDateScale};
pub use delaunay::Triangulation;
pub use density::{
    DEFAULT_BANDWIDTH, DEFAULT_GRID_SIZE, DensityCurve, DensityEstimator, DensitySample,
    EpanechnikovKernel, EvaluationGrid,
};
pub use marginal::{MarginalAxis, MarginalSide, StripRect, basis_spline};
pub use scale::LinearScale;
pub use scale_registry::{DensityAxisSettings, ScaleRegistry, rounded_domain_upper};
pub use types::{ChartLayout, DataPoint, LegendLayout, Margins, PathVertex};
pub use voronoi::Tessellation;
