//! Support mapping based Ellipsoid shape.

use crate::math::{Point, Real, Vector};
use crate::shape::SupportMap;
use num::Zero;

/// An ellipsoid shape centered at its local origin, with its principal axes
/// aligned with the coordinate axes.
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Ellipsoid {
    /// The radii of the ellipsoid along each coordinate axis.
    pub radii: Vector<Real>,
}

impl Ellipsoid {
    /// Creates a new ellipsoid from its radii along each coordinate axis.
    pub fn new(radii: Vector<Real>) -> Ellipsoid {
        Ellipsoid { radii }
    }
}

impl SupportMap for Ellipsoid {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        let scaled_dir = self.radii.component_mul(dir);
        let norm = scaled_dir.norm();

        if norm.is_zero() {
            Point::new(0.0, self.radii[1], 0.0)
        } else {
            Point::from(self.radii.component_mul(&scaled_dir) / norm)
        }
    }
}
