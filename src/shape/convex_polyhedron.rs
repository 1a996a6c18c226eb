//! Support mapping based convex polyhedron.

use crate::math::{Point, Real, Vector};
use crate::shape::SupportMap;

/// A convex polyhedron given by the set of its vertices.
///
/// The vertices are assumed to describe a convex set; no convexity check nor
/// hull computation is performed.
#[derive(PartialEq, Debug, Clone)]
pub struct ConvexPolyhedron {
    points: Vec<Point<Real>>,
}

impl ConvexPolyhedron {
    /// Creates a convex polyhedron from its vertices.
    ///
    /// Returns `None` if `points` is empty.
    pub fn from_convex_points(points: Vec<Point<Real>>) -> Option<ConvexPolyhedron> {
        if points.is_empty() {
            None
        } else {
            Some(ConvexPolyhedron { points })
        }
    }

    /// The vertices of this convex polyhedron.
    pub fn points(&self) -> &[Point<Real>] {
        &self.points
    }
}

impl SupportMap for ConvexPolyhedron {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        let mut best = self.points[0];
        let mut best_dot = best.coords.dot(dir);

        for pt in &self.points[1..] {
            let dot = pt.coords.dot(dir);
            if dot > best_dot {
                best = *pt;
                best_dot = dot;
            }
        }

        best
    }
}
