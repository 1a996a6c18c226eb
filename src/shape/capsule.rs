//! Support mapping based Capsule shape.

use crate::math::{Point, Real, Vector};
use crate::shape::SupportMap;
use na::Unit;

/// A capsule shape: a segment along the `y` axis, dilated by a radius.
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Capsule {
    /// The half-height of the capsule's inner segment along the `y` axis.
    pub half_height: Real,
    /// The radius of the capsule.
    pub radius: Real,
}

impl Capsule {
    /// Creates a new capsule.
    ///
    /// # Arguments:
    /// * `half_height` - the half length of the capsule's inner segment along
    ///   the `y` axis.
    /// * `radius` - the radius added around the segment.
    pub fn new(half_height: Real, radius: Real) -> Capsule {
        Capsule {
            half_height,
            radius,
        }
    }

    /// The center of the capsule's upper spherical cap.
    pub fn cap_a(&self) -> Point<Real> {
        Point::new(0.0, self.half_height, 0.0)
    }

    /// The center of the capsule's lower spherical cap.
    pub fn cap_b(&self) -> Point<Real> {
        Point::new(0.0, -self.half_height, 0.0)
    }
}

impl SupportMap for Capsule {
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        let dir = Unit::try_new(*dir, 0.0).unwrap_or(Vector::y_axis());
        self.local_support_point_toward(&dir)
    }

    fn local_support_point_toward(&self, dir: &Unit<Vector<Real>>) -> Point<Real> {
        if dir[1] >= 0.0 {
            self.cap_a() + **dir * self.radius
        } else {
            self.cap_b() + **dir * self.radius
        }
    }
}
