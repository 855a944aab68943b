use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::core::LinearScale;
use crate::error::{ScatterError, ScatterResult};

pub const DEFAULT_BRUSH_WINDOW_DAYS: i64 = 30;
pub const LEGEND_LABEL_FORMAT: &str = "%B %d";

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Half-open date window `[start, start + width)` selected by the brush.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrushRange {
    start: NaiveDateTime,
    width: Duration,
}

impl BrushRange {
    #[must_use]
    pub fn new(start: NaiveDateTime, width: Duration) -> Self {
        Self { start, width }
    }

    #[must_use]
    pub fn start(self) -> NaiveDateTime {
        self.start
    }

    #[must_use]
    pub fn end(self) -> NaiveDateTime {
        self.start + self.width
    }

    #[must_use]
    pub fn width(self) -> Duration {
        self.width
    }

    /// Days are compared at midnight.
    #[must_use]
    pub fn contains(self, date: NaiveDate) -> bool {
        let at = date.and_time(NaiveTime::MIN);
        at >= self.start && at < self.end()
    }

    /// Legend caption, e.g. `"January 01 – January 31"`.
    #[must_use]
    pub fn label(self) -> String {
        format!(
            "{} – {}",
            self.start.format(LEGEND_LABEL_FORMAT),
            self.end().format(LEGEND_LABEL_FORMAT)
        )
    }
}

/// Maps a pointer position on the legend strip to the start of a brush window.
///
/// The active pixel range excludes half of the highlight bar on both edges so
/// the bar never overflows the strip; positions outside it are clamped.
/// Its image is `[first_date, last_date - window]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegendDateScale {
    pixels_to_days: LinearScale,
    origin: NaiveDateTime,
    window: Duration,
    active_start: f64,
    active_end: f64,
}

impl LegendDateScale {
    pub fn new(
        legend_width: f64,
        bar_width: f64,
        date_extent: (NaiveDate, NaiveDate),
        window_days: i64,
    ) -> ScatterResult<Self> {
        if window_days <= 0 {
            return Err(ScatterError::InvalidConfig(
                "brush window must span at least one day".to_owned(),
            ));
        }
        if !bar_width.is_finite() || bar_width < 0.0 || bar_width >= legend_width {
            return Err(ScatterError::InvalidConfig(
                "legend highlight bar must be narrower than the legend".to_owned(),
            ));
        }

        let (first_date, last_date) = date_extent;
        let window = Duration::days(window_days);
        let origin = first_date.and_time(NaiveTime::MIN);
        let last_start = last_date.and_time(NaiveTime::MIN) - window;
        let span_days = (last_start - origin).num_milliseconds() as f64 / MILLIS_PER_DAY;

        let active_start = bar_width / 2.0;
        let active_end = legend_width - bar_width / 2.0;
        let pixels_to_days = LinearScale::new(active_start, active_end, 0.0, span_days)?;

        Ok(Self {
            pixels_to_days,
            origin,
            window,
            active_start,
            active_end,
        })
    }

    #[must_use]
    pub fn active_extent(&self) -> (f64, f64) {
        (self.active_start, self.active_end)
    }

    /// Clamps a raw pointer position into the active sub-range.
    #[must_use]
    pub fn clamp_position(&self, x: f64) -> f64 {
        if x.is_nan() {
            return self.active_start;
        }
        x.clamp(self.active_start, self.active_end)
    }

    #[must_use]
    pub fn date_at(&self, x: f64) -> NaiveDateTime {
        let days = self.pixels_to_days.forward(self.clamp_position(x));
        let millis = (days * MILLIS_PER_DAY).round() as i64;
        self.origin + Duration::milliseconds(millis)
    }

    #[must_use]
    pub fn range_at(&self, x: f64) -> BrushRange {
        BrushRange::new(self.date_at(x), self.window)
    }
}
