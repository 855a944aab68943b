//! Bowyer–Watson Delaunay triangulation over projected points.
//!
//! Points sharing identical coordinates are collapsed onto the lowest dataset
//! index; only that canonical point takes part in the triangulation. Points
//! with non-finite coordinates are left out entirely.

use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use smallvec::SmallVec;

use crate::core::PathVertex;

/// Neighbour lists rarely exceed a handful of entries for scattered data.
pub type NeighborList = SmallVec<[usize; 8]>;

/// Super-triangle vertices are placed this many extents away from the data.
const SUPER_TRIANGLE_SCALE: f64 = 64.0;

#[derive(Debug, Clone, Copy)]
struct Triangle {
    vertices: [usize; 3],
    center: PathVertex,
    radius_squared: f64,
}

impl Triangle {
    fn new(vertices: [usize; 3], points: &[PathVertex]) -> Self {
        let (center, radius_squared) = circumcircle(
            points[vertices[0]],
            points[vertices[1]],
            points[vertices[2]],
        );
        Self {
            vertices,
            center,
            radius_squared,
        }
    }

    fn circumcircle_contains(&self, point: PathVertex) -> bool {
        point.distance_squared(self.center) < self.radius_squared
    }

    fn edges(&self) -> [(usize, usize); 3] {
        let [a, b, c] = self.vertices;
        [ordered_edge(a, b), ordered_edge(b, c), ordered_edge(c, a)]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Triangulation {
    triangles: Vec<[usize; 3]>,
    neighbors: Vec<NeighborList>,
    canonical: Vec<Option<usize>>,
}

impl Triangulation {
    #[must_use]
    pub fn build(points: &[PathVertex]) -> Self {
        let mut canonical = vec![None; points.len()];
        let mut first_at: IndexMap<(OrderedFloat<f64>, OrderedFloat<f64>), usize> =
            IndexMap::new();
        for (index, point) in points.iter().enumerate() {
            if !point.is_finite() {
                continue;
            }
            let key = (OrderedFloat(point.x), OrderedFloat(point.y));
            canonical[index] = Some(*first_at.entry(key).or_insert(index));
        }

        let unique: Vec<usize> = first_at.values().copied().collect();
        let mut neighbors = vec![NeighborList::new(); points.len()];
        let mut triangles = Vec::new();

        if unique.len() >= 2 {
            let local: Vec<PathVertex> = unique.iter().map(|&index| points[index]).collect();
            for triangle in bowyer_watson(&local) {
                let real_count = triangle.vertices.iter().filter(|&&v| v < local.len()).count();
                for (a, b) in triangle.edges() {
                    if a < local.len() && b < local.len() {
                        link(&mut neighbors, unique[a], unique[b]);
                    }
                }
                if real_count == 3 {
                    triangles.push(triangle.vertices.map(|v| unique[v]));
                }
            }
        }

        for list in &mut neighbors {
            list.sort_unstable();
        }

        Self {
            triangles,
            neighbors,
            canonical,
        }
    }

    /// Triangles whose three corners are data points, as dataset indices.
    #[must_use]
    pub fn triangles(&self) -> &[[usize; 3]] {
        &self.triangles
    }

    /// Delaunay neighbours of a canonical point, sorted by index.
    #[must_use]
    pub fn neighbors(&self, index: usize) -> &[usize] {
        self.neighbors.get(index).map_or(&[][..], |list| list.as_slice())
    }

    /// Lowest index sharing this point's coordinates, or `None` when the
    /// point could not be projected.
    #[must_use]
    pub fn canonical_index(&self, index: usize) -> Option<usize> {
        self.canonical.get(index).copied().flatten()
    }

    #[must_use]
    pub fn is_canonical(&self, index: usize) -> bool {
        self.canonical_index(index) == Some(index)
    }

    pub fn canonical_points(&self) -> impl Iterator<Item = usize> + '_ {
        self.canonical
            .iter()
            .enumerate()
            .filter(|(index, canonical)| **canonical == Some(*index))
            .map(|(index, _)| index)
    }
}

fn bowyer_watson(points: &[PathVertex]) -> Vec<Triangle> {
    let (mut min_x, mut min_y) = (f64::INFINITY, f64::INFINITY);
    let (mut max_x, mut max_y) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
    for point in points {
        min_x = min_x.min(point.x);
        min_y = min_y.min(point.y);
        max_x = max_x.max(point.x);
        max_y = max_y.max(point.y);
    }
    let extent = (max_x - min_x).max(max_y - min_y).max(1.0) * SUPER_TRIANGLE_SCALE;
    let mid_x = (min_x + max_x) / 2.0;
    let mid_y = (min_y + max_y) / 2.0;

    let mut vertices = points.to_vec();
    let s0 = vertices.len();
    vertices.push(PathVertex::new(mid_x - 2.0 * extent, mid_y - extent));
    vertices.push(PathVertex::new(mid_x, mid_y + 2.0 * extent));
    vertices.push(PathVertex::new(mid_x + 2.0 * extent, mid_y - extent));

    let mut triangles = vec![Triangle::new([s0, s0 + 1, s0 + 2], &vertices)];

    for (index, point) in points.iter().enumerate() {
        let (bad, good): (Vec<Triangle>, Vec<Triangle>) = triangles
            .into_iter()
            .partition(|triangle| triangle.circumcircle_contains(*point));
        triangles = good;

        let mut edge_counts: IndexMap<(usize, usize), usize> = IndexMap::new();
        for triangle in &bad {
            for edge in triangle.edges() {
                *edge_counts.entry(edge).or_insert(0) += 1;
            }
        }

        for ((a, b), count) in edge_counts {
            if count == 1 {
                triangles.push(Triangle::new([a, b, index], &vertices));
            }
        }
    }

    triangles
}

/// Circumcentre and squared radius. Collinear corners get an unbounded circle
/// so the sliver is always replaced by the next insertion.
fn circumcircle(a: PathVertex, b: PathVertex, c: PathVertex) -> (PathVertex, f64) {
    let bx = b.x - a.x;
    let by = b.y - a.y;
    let cx = c.x - a.x;
    let cy = c.y - a.y;
    let d = 2.0 * (bx * cy - by * cx);
    if d.abs() <= f64::EPSILON * (bx.abs() + by.abs() + cx.abs() + cy.abs()).max(1.0) {
        let center = PathVertex::new((a.x + b.x + c.x) / 3.0, (a.y + b.y + c.y) / 3.0);
        return (center, f64::INFINITY);
    }

    let b2 = bx * bx + by * by;
    let c2 = cx * cx + cy * cy;
    let ux = (cy * b2 - by * c2) / d;
    let uy = (bx * c2 - cx * b2) / d;
    (PathVertex::new(a.x + ux, a.y + uy), ux * ux + uy * uy)
}

fn ordered_edge(a: usize, b: usize) -> (usize, usize) {
    if a < b { (a, b) } else { (b, a) }
}

fn link(neighbors: &mut [NeighborList], a: usize, b: usize) {
    if !neighbors[a].contains(&b) {
        neighbors[a].push(b);
    }
    if !neighbors[b].contains(&a) {
        neighbors[b].push(a);
    }
}

#[cfg(test)]
mod tests {
    use super::Triangulation;
    use crate::core::PathVertex;

    #[test]
    fn square_corners_form_two_triangles() {
        let points = [
            PathVertex::new(0.0, 0.0),
            PathVertex::new(10.0, 0.0),
            PathVertex::new(10.0, 10.0),
            PathVertex::new(0.0, 11.0),
        ];
        let triangulation = Triangulation::build(&points);
        assert_eq!(triangulation.triangles().len(), 2);
        assert!(triangulation.neighbors(0).contains(&1));
        assert!(triangulation.neighbors(0).contains(&3));
    }

    #[test]
    fn duplicates_collapse_to_lowest_index() {
        let points = [
            PathVertex::new(5.0, 5.0),
            PathVertex::new(1.0, 2.0),
            PathVertex::new(5.0, 5.0),
        ];
        let triangulation = Triangulation::build(&points);
        assert_eq!(triangulation.canonical_index(2), Some(0));
        assert!(!triangulation.is_canonical(2));
        assert!(triangulation.neighbors(2).is_empty());
        assert_eq!(triangulation.neighbors(0), &[1]);
    }

    #[test]
    fn collinear_points_link_consecutive_neighbours() {
        let points = [
            PathVertex::new(0.0, 0.0),
            PathVertex::new(20.0, 0.0),
            PathVertex::new(10.0, 0.0),
        ];
        let triangulation = Triangulation::build(&points);
        assert!(triangulation.triangles().is_empty());
        assert!(triangulation.neighbors(2).contains(&0));
        assert!(triangulation.neighbors(2).contains(&1));
    }
}
