use ordered_float::OrderedFloat;
use smallvec::SmallVec;
use tracing::debug;

use crate::core::{PathVertex, Triangulation};
use crate::error::{ScatterError, ScatterResult};

/// Voronoi tessellation of projected points, clipped to the plot bounds.
///
/// Cells are derived from the Delaunay triangulation: each one is the bounds
/// rectangle cut by the bisectors between its seed and the seed's neighbours.
/// Cells are indexed by dataset position; duplicates of an earlier point and
/// points whose cell falls outside the bounds have no cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Tessellation {
    points: Vec<PathVertex>,
    triangulation: Triangulation,
    cells: Vec<Option<Vec<PathVertex>>>,
    bounds_width: f64,
    bounds_height: f64,
}

impl Tessellation {
    pub fn build(
        points: &[PathVertex],
        bounds_width: f64,
        bounds_height: f64,
    ) -> ScatterResult<Self> {
        if !bounds_width.is_finite()
            || !bounds_height.is_finite()
            || bounds_width <= 0.0
            || bounds_height <= 0.0
        {
            return Err(ScatterError::InvalidLayout {
                width: bounds_width,
                height: bounds_height,
            });
        }

        let triangulation = Triangulation::build(points);
        let bounds = vec![
            PathVertex::new(0.0, 0.0),
            PathVertex::new(bounds_width, 0.0),
            PathVertex::new(bounds_width, bounds_height),
            PathVertex::new(0.0, bounds_height),
        ];
        let cells: Vec<Option<Vec<PathVertex>>> = (0..points.len())
            .map(|index| {
                if triangulation.is_canonical(index) {
                    clip_cell(index, points, &triangulation, &bounds)
                } else {
                    None
                }
            })
            .collect();

        debug!(
            points = points.len(),
            cells = cells.iter().flatten().count(),
            triangles = triangulation.triangles().len(),
            "voronoi tessellation built"
        );

        Ok(Self {
            points: points.to_vec(),
            triangulation,
            cells,
            bounds_width,
            bounds_height,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn bounds(&self) -> (f64, f64) {
        (self.bounds_width, self.bounds_height)
    }

    #[must_use]
    pub fn triangulation(&self) -> &Triangulation {
        &self.triangulation
    }

    #[must_use]
    pub fn projected(&self, index: usize) -> Option<PathVertex> {
        self.points.get(index).copied()
    }

    /// Closed boundary path of a cell; the first vertex is repeated at the end.
    #[must_use]
    pub fn cell_boundary(&self, index: usize) -> Option<&[PathVertex]> {
        self.cells.get(index)?.as_deref()
    }

    /// Nearest point to `cursor`, found by walking Delaunay edges downhill.
    ///
    /// Equal distances resolve to the lowest index, and duplicates resolve to
    /// the point that owns their cell.
    #[must_use]
    pub fn nearest_point(&self, cursor: PathVertex) -> Option<usize> {
        if !cursor.is_finite() {
            return None;
        }
        let mut current = self.triangulation.canonical_points().next()?;
        let mut current_distance = self.points[current].distance_squared(cursor);

        loop {
            let mut next = current;
            let mut next_distance = current_distance;
            for &neighbor in self.triangulation.neighbors(current) {
                let distance = self.points[neighbor].distance_squared(cursor);
                if distance < next_distance || (distance == next_distance && neighbor < next) {
                    next = neighbor;
                    next_distance = distance;
                }
            }
            if next == current {
                break;
            }
            current = next;
            current_distance = next_distance;
        }

        // The walk ends in the cell owning the cursor; anything else (cursor
        // outside the bounds, on a cell edge, or a sliver left by collinear
        // input) falls back to a full scan.
        if self.cells[current]
            .as_deref()
            .is_some_and(|path| polygon_contains(path, cursor))
        {
            return Some(current);
        }
        self.triangulation
            .canonical_points()
            .map(|index| (OrderedFloat(self.points[index].distance_squared(cursor)), index))
            .min()
            .map(|(_, index)| index)
    }

    /// Cell containing `cursor`, as a pointer-event region would report it.
    #[must_use]
    pub fn cell_at(&self, cursor: PathVertex) -> Option<usize> {
        if !cursor.is_finite() {
            return None;
        }
        self.cells.iter().enumerate().find_map(|(index, cell)| {
            cell.as_deref()
                .filter(|path| polygon_contains(path, cursor))
                .map(|_| index)
        })
    }
}

fn clip_cell(
    index: usize,
    points: &[PathVertex],
    triangulation: &Triangulation,
    bounds: &[PathVertex],
) -> Option<Vec<PathVertex>> {
    let seed = points[index];
    let neighbors = triangulation.neighbors(index);
    let mut polygon = bounds.to_vec();
    for &neighbor in neighbors {
        polygon = clip_half_plane(&polygon, seed, points[neighbor]);
        if polygon.len() < 3 {
            return None;
        }
    }

    // Any other seed closer than twice the cell radius could still cut the
    // cell; sweeping them keeps cells exact on co-circular input.
    let reach = polygon
        .iter()
        .map(|vertex| vertex.distance_squared(seed))
        .fold(0.0, f64::max);
    let extra: SmallVec<[usize; 16]> = triangulation
        .canonical_points()
        .filter(|&other| other != index && neighbors.binary_search(&other).is_err())
        .filter(|&other| points[other].distance_squared(seed) < 4.0 * reach)
        .collect();
    for other in extra {
        polygon = clip_half_plane(&polygon, seed, points[other]);
        if polygon.len() < 3 {
            return None;
        }
    }

    let first = polygon[0];
    polygon.push(first);
    Some(polygon)
}

/// Keeps the part of `polygon` closer to `seed` than to `other`.
fn clip_half_plane(polygon: &[PathVertex], seed: PathVertex, other: PathVertex) -> Vec<PathVertex> {
    let nx = other.x - seed.x;
    let ny = other.y - seed.y;
    let offset = nx * (seed.x + other.x) / 2.0 + ny * (seed.y + other.y) / 2.0;
    let side = |vertex: PathVertex| nx * vertex.x + ny * vertex.y - offset;

    let mut clipped = Vec::with_capacity(polygon.len() + 1);
    for (i, &current) in polygon.iter().enumerate() {
        let next = polygon[(i + 1) % polygon.len()];
        let current_side = side(current);
        let next_side = side(next);
        let current_inside = current_side <= 0.0;
        if current_inside {
            clipped.push(current);
        }
        if current_inside != (next_side <= 0.0) {
            let t = current_side / (current_side - next_side);
            clipped.push(PathVertex::new(
                current.x + t * (next.x - current.x),
                current.y + t * (next.y - current.y),
            ));
        }
    }
    clipped
}

/// Even-odd containment test on a closed path.
fn polygon_contains(path: &[PathVertex], point: PathVertex) -> bool {
    let mut inside = false;
    for edge in path.windows(2) {
        let (a, b) = (edge[0], edge[1]);
        if (a.y > point.y) != (b.y > point.y) {
            let x_cross = a.x + (point.y - a.y) / (b.y - a.y) * (b.x - a.x);
            if point.x < x_cross {
                inside = !inside;
            }
        }
    }
    inside
}
