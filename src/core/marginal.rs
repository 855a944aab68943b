use serde::{Deserialize, Serialize};

use crate::core::{ChartLayout, DensityCurve, LinearScale, PathVertex};

/// Bezier segments of a smoothed curve are flattened into this many steps.
pub const BASIS_SEGMENT_STEPS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarginalSide {
    /// Minimum-temperature strip above the plot; density grows upwards.
    Top,
    /// Maximum-temperature strip right of the plot; density grows rightwards.
    Right,
}

/// Axis-aligned rectangle in strip-local pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StripRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// One marginal density strip. Both strips share this code and differ only
/// in which screen axis carries the temperature and where the baseline is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarginalAxis {
    side: MarginalSide,
    origin: (f64, f64),
    /// Strip extent along the density direction.
    depth: f64,
    /// Strip extent along the temperature direction.
    length: f64,
}

impl MarginalAxis {
    #[must_use]
    pub fn top(layout: ChartLayout) -> Self {
        Self {
            side: MarginalSide::Top,
            origin: (layout.margins.left, 0.0),
            depth: layout.margins.top,
            length: layout.bounded_width(),
        }
    }

    #[must_use]
    pub fn right(layout: ChartLayout) -> Self {
        Self {
            side: MarginalSide::Right,
            origin: (layout.margins.left + layout.bounded_width(), layout.margins.top),
            depth: layout.margins.right,
            length: layout.bounded_height(),
        }
    }

    #[must_use]
    pub fn for_side(side: MarginalSide, layout: ChartLayout) -> Self {
        match side {
            MarginalSide::Top => Self::top(layout),
            MarginalSide::Right => Self::right(layout),
        }
    }

    #[must_use]
    pub fn side(&self) -> MarginalSide {
        self.side
    }

    /// Translation of the strip relative to the chart's top-left corner.
    #[must_use]
    pub fn origin(&self) -> (f64, f64) {
        self.origin
    }

    #[must_use]
    pub fn depth(&self) -> f64 {
        self.depth
    }

    /// Baseline coordinate along the density direction.
    #[must_use]
    pub fn baseline(&self) -> f64 {
        match self.side {
            MarginalSide::Top => self.depth,
            MarginalSide::Right => 0.0,
        }
    }

    fn vertex(&self, along: f64, across: f64) -> PathVertex {
        match self.side {
            MarginalSide::Top => PathVertex::new(along, across),
            MarginalSide::Right => PathVertex::new(across, along),
        }
    }

    /// Closed area polygon between the curve and the strip baseline.
    ///
    /// `value_scale` places temperatures along the strip and `density_scale`
    /// maps densities across it. The first vertex is repeated at the end.
    #[must_use]
    pub fn area_path(
        &self,
        curve: &DensityCurve,
        value_scale: LinearScale,
        density_scale: LinearScale,
        smooth: bool,
    ) -> Vec<PathVertex> {
        if curve.is_empty() {
            return Vec::new();
        }

        let outline: Vec<PathVertex> = curve
            .samples()
            .iter()
            .map(|sample| {
                self.vertex(
                    value_scale.forward(sample.x),
                    density_scale.forward(sample.density),
                )
            })
            .collect();
        let outline = if smooth {
            basis_spline(&outline, BASIS_SEGMENT_STEPS)
        } else {
            outline
        };

        let baseline = self.baseline();
        let first_along = curve.samples()[0].x;
        let last_along = curve.samples()[curve.len() - 1].x;
        let mut path = Vec::with_capacity(outline.len() + 3);
        path.extend(outline.iter().copied());
        path.push(self.vertex(value_scale.forward(last_along), baseline));
        path.push(self.vertex(value_scale.forward(first_along), baseline));
        path.push(outline[0]);
        path
    }

    /// Positional hover marker: a bar `thickness` wide spanning the strip depth.
    #[must_use]
    pub fn marker_rect(&self, value: f64, value_scale: LinearScale, thickness: f64) -> StripRect {
        let along = value_scale.forward(value);
        match self.side {
            MarginalSide::Top => StripRect {
                x: along,
                y: 0.0,
                width: thickness,
                height: self.depth,
            },
            MarginalSide::Right => StripRect {
                x: 0.0,
                y: along,
                width: self.depth,
                height: thickness,
            },
        }
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }
}

/// Uniform cubic B-spline through the control polygon, flattened to vertices.
///
/// The curve starts at the first and ends at the last control point and is
/// pulled towards the interior ones, matching the usual "basis" interpolation
/// of plotting libraries.
#[must_use]
pub fn basis_spline(controls: &[PathVertex], steps: usize) -> Vec<PathVertex> {
    if controls.len() < 3 {
        return controls.to_vec();
    }
    let steps = steps.max(1);

    let mut out = Vec::with_capacity(controls.len() * steps + 2);
    let (mut p0, mut p1) = (controls[0], controls[1]);
    out.push(p0);
    let mut pen = PathVertex::new((5.0 * p0.x + p1.x) / 6.0, (5.0 * p0.y + p1.y) / 6.0);
    out.push(pen);

    let mut segment = |pen: &mut PathVertex, p0: PathVertex, p1: PathVertex, p: PathVertex| {
        let c1 = PathVertex::new((2.0 * p0.x + p1.x) / 3.0, (2.0 * p0.y + p1.y) / 3.0);
        let c2 = PathVertex::new((p0.x + 2.0 * p1.x) / 3.0, (p0.y + 2.0 * p1.y) / 3.0);
        let end = PathVertex::new(
            (p0.x + 4.0 * p1.x + p.x) / 6.0,
            (p0.y + 4.0 * p1.y + p.y) / 6.0,
        );
        for step in 1..=steps {
            let t = step as f64 / steps as f64;
            out.push(cubic_bezier(*pen, c1, c2, end, t));
        }
        *pen = end;
    };

    for &p in &controls[2..] {
        segment(&mut pen, p0, p1, p);
        p0 = p1;
        p1 = p;
    }
    segment(&mut pen, p0, p1, p1);
    out.push(p1);
    out
}

fn cubic_bezier(a: PathVertex, b: PathVertex, c: PathVertex, d: PathVertex, t: f64) -> PathVertex {
    let u = 1.0 - t;
    let w0 = u * u * u;
    let w1 = 3.0 * u * u * t;
    let w2 = 3.0 * u * t * t;
    let w3 = t * t * t;
    PathVertex::new(
        w0 * a.x + w1 * b.x + w2 * c.x + w3 * d.x,
        w0 * a.y + w1 * b.y + w2 * c.y + w3 * d.y,
    )
}

#[cfg(test)]
mod tests {
    use super::basis_spline;
    use crate::core::PathVertex;

    #[test]
    fn basis_spline_keeps_endpoints() {
        let controls = [
            PathVertex::new(0.0, 0.0),
            PathVertex::new(10.0, 10.0),
            PathVertex::new(20.0, 0.0),
            PathVertex::new(30.0, 10.0),
        ];
        let curve = basis_spline(&controls, 4);
        assert_eq!(curve.first(), Some(&controls[0]));
        assert_eq!(curve.last(), Some(&controls[3]));
        assert!(curve.iter().all(|v| v.y >= 0.0 && v.y <= 10.0));
    }

    #[test]
    fn short_inputs_pass_through() {
        let controls = [PathVertex::new(1.0, 2.0), PathVertex::new(3.0, 4.0)];
        assert_eq!(basis_spline(&controls, 8), controls.to_vec());
    }
}
