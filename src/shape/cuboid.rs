//! Support mapping based Cuboid shape.

use crate::math::{Point, Real, Vector, DIM};
use crate::shape::SupportMap;

/// A cuboid shape centered at its local origin, with its sides parallel to
/// the coordinate axes.
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Cuboid {
    /// The half-extents of the cuboid along each coordinate axis.
    pub half_extents: Vector<Real>,
}

impl Cuboid {
    /// Creates a new cuboid from its half-extents.
    pub fn new(half_extents: Vector<Real>) -> Cuboid {
        Cuboid { half_extents }
    }
}

impl SupportMap for Cuboid {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        let mut res = self.half_extents;

        for i in 0..DIM {
            res[i] = res[i].copysign(dir[i]);
        }

        Point::from(res)
    }
}
