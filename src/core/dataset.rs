use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::DataPoint;
use crate::error::{ScatterError, ScatterResult};

pub const RECORD_DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw weather record as delivered by the data source.
///
/// Fields are optional so that a missing field surfaces as a
/// [`ScatterError::MissingField`] naming the offending record instead of an
/// opaque deserialization failure. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemperatureRecord {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub temperature_min: Option<f64>,
    #[serde(default)]
    pub temperature_max: Option<f64>,
}

impl TemperatureRecord {
    #[must_use]
    pub fn new(date: impl Into<String>, temperature_min: f64, temperature_max: f64) -> Self {
        Self {
            date: Some(date.into()),
            temperature_min: Some(temperature_min),
            temperature_max: Some(temperature_max),
        }
    }

    fn into_point(self, index: usize) -> ScatterResult<DataPoint> {
        let raw_date = self.date.ok_or(ScatterError::MissingField {
            index,
            field: "date",
        })?;
        let min_temp = self.temperature_min.ok_or(ScatterError::MissingField {
            index,
            field: "temperatureMin",
        })?;
        let max_temp = self.temperature_max.ok_or(ScatterError::MissingField {
            index,
            field: "temperatureMax",
        })?;

        let date = NaiveDate::parse_from_str(raw_date.trim(), RECORD_DATE_FORMAT).map_err(|_| {
            ScatterError::InvalidDate {
                index,
                value: raw_date.clone(),
            }
        })?;

        Ok(DataPoint::new(date, min_temp, max_temp))
    }
}

/// Frozen, ordered sequence of daily records.
///
/// The position of a point is its identity for hit regions, Voronoi cells
/// and brush classification, so the order is never changed after load.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    points: Vec<DataPoint>,
    first_date: NaiveDate,
    last_date: NaiveDate,
    max_min_temp: f64,
    max_max_temp: f64,
}

impl Dataset {
    pub fn new(points: Vec<DataPoint>) -> ScatterResult<Self> {
        let first = points.first().ok_or(ScatterError::EmptyDataset)?;
        let mut first_date = first.date;
        let mut last_date = first.date;
        let mut max_min_temp = f64::NEG_INFINITY;
        let mut max_max_temp = f64::NEG_INFINITY;

        for (index, point) in points.iter().enumerate() {
            if !point.min_temp.is_finite() || !point.max_temp.is_finite() {
                return Err(ScatterError::InvalidData(format!(
                    "record {index} has non-finite temperatures"
                )));
            }
            first_date = first_date.min(point.date);
            last_date = last_date.max(point.date);
            max_min_temp = max_min_temp.max(point.min_temp);
            max_max_temp = max_max_temp.max(point.max_temp);
        }

        debug!(
            count = points.len(),
            %first_date,
            %last_date,
            max_min_temp,
            max_max_temp,
            "dataset loaded"
        );

        Ok(Self {
            points,
            first_date,
            last_date,
            max_min_temp,
            max_max_temp,
        })
    }

    pub fn from_records(records: Vec<TemperatureRecord>) -> ScatterResult<Self> {
        let points = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| record.into_point(index))
            .collect::<ScatterResult<Vec<_>>>()?;
        Self::new(points)
    }

    /// Parses a JSON array of `{date, temperatureMin, temperatureMax}` records.
    pub fn from_json_str(json: &str) -> ScatterResult<Self> {
        let records: Vec<TemperatureRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`: an empty dataset is rejected at construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    pub fn get(&self, index: usize) -> ScatterResult<&DataPoint> {
        self.points.get(index).ok_or(ScatterError::UnknownPoint {
            index,
            len: self.points.len(),
        })
    }

    #[must_use]
    pub fn date_extent(&self) -> (NaiveDate, NaiveDate) {
        (self.first_date, self.last_date)
    }

    #[must_use]
    pub fn max_min_temp(&self) -> f64 {
        self.max_min_temp
    }

    #[must_use]
    pub fn max_max_temp(&self) -> f64 {
        self.max_max_temp
    }

    #[must_use]
    pub fn min_temps(&self) -> Vec<f64> {
        self.points.iter().map(|point| point.min_temp).collect()
    }

    #[must_use]
    pub fn max_temps(&self) -> Vec<f64> {
        self.points.iter().map(|point| point.max_temp).collect()
    }
}
