use crate::error::{ScatterError, ScatterResult};

/// Invertible linear mapping between a value domain and a pixel range.
///
/// Mapping is never clamped: values outside the domain extrapolate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(
        domain_start: f64,
        domain_end: f64,
        range_start: f64,
        range_end: f64,
    ) -> ScatterResult<Self> {
        if !domain_start.is_finite()
            || !domain_end.is_finite()
            || !range_start.is_finite()
            || !range_end.is_finite()
        {
            return Err(ScatterError::InvalidData(
                "scale domain and range must be finite".to_owned(),
            ));
        }
        if domain_start == domain_end {
            return Err(ScatterError::DegenerateDomain {
                min: domain_start,
                max: domain_end,
            });
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn forward(self, value: f64) -> f64 {
        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    /// Maps a pixel back into the domain.
    ///
    /// A collapsed range has no inverse; the domain midpoint is returned.
    #[must_use]
    pub fn inverse(self, pixel: f64) -> f64 {
        let range_span = self.range_end - self.range_start;
        if range_span == 0.0 {
            return (self.domain_start + self.domain_end) / 2.0;
        }
        let normalized = (pixel - self.range_start) / range_span;
        self.domain_start + normalized * (self.domain_end - self.domain_start)
    }

    /// Human-friendly tick values (1, 2 or 5 times a power of ten) covering
    /// the domain, in domain order.
    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<f64> {
        let reversed = self.domain_end < self.domain_start;
        let (lo, hi) = if reversed {
            (self.domain_end, self.domain_start)
        } else {
            (self.domain_start, self.domain_end)
        };
        let step = tick_step(lo, hi, count.max(1));
        if !step.is_finite() || step <= 0.0 {
            return Vec::new();
        }

        let first = (lo / step).ceil() as i64;
        let last = (hi / step).floor() as i64;
        let mut ticks: Vec<f64> = (first..=last).map(|i| i as f64 * step).collect();
        if reversed {
            ticks.reverse();
        }
        ticks
    }
}

fn tick_step(lo: f64, hi: f64, count: usize) -> f64 {
    let raw = (hi - lo) / count as f64;
    let power = raw.log10().floor();
    let magnitude = 10f64.powf(power);
    let error = raw / magnitude;
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    factor * magnitude
}
