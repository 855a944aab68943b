use thiserror::Error;

pub type ScatterResult<T> = Result<T, ScatterError>;

#[derive(Debug, Error)]
pub enum ScatterError {
    #[error("dataset is empty")]
    EmptyDataset,

    #[error("record {index} is missing required field `{field}`")]
    MissingField { index: usize, field: &'static str },

    #[error("record {index} has an invalid date: {value:?}")]
    InvalidDate { index: usize, value: String },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("failed to parse dataset json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("degenerate scale domain: min={min}, max={max}")]
    DegenerateDomain { min: f64, max: f64 },

    #[error("invalid layout: bounded width={width}, bounded height={height}")]
    InvalidLayout { width: f64, height: f64 },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("unknown point index {index} (dataset has {len} points)")]
    UnknownPoint { index: usize, len: usize },
}
