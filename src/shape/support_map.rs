//! Traits for support mapping based shapes.

use crate::math::{Isometry, Point, Real, Vector};
use na::Unit;

/// Traits of convex shapes representable by a support mapping function.
///
/// A support mapping is a function that returns, for a given direction, the
/// point of the shape that is extremal along that direction.
pub trait SupportMap {
    /// The support point of this shape, in its local-space, toward the (not
    /// necessarily unit) direction `dir`.
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real>;

    /// Same as [`SupportMap::local_support_point`] but the direction is
    /// normalized.
    fn local_support_point_toward(&self, dir: &Unit<Vector<Real>>) -> Point<Real> {
        self.local_support_point(dir)
    }

    /// The support point of this shape transformed by `transform`, toward the
    /// direction `dir`.
    fn support_point(&self, transform: &Isometry<Real>, dir: &Vector<Real>) -> Point<Real> {
        let local_dir = transform.inverse_transform_vector(dir);
        transform * self.local_support_point(&local_dir)
    }

    /// Same as [`SupportMap::support_point`] but the direction is normalized.
    fn support_point_toward(
        &self,
        transform: &Isometry<Real>,
        dir: &Unit<Vector<Real>>,
    ) -> Point<Real> {
        let local_dir = Unit::new_unchecked(transform.inverse_transform_vector(dir));
        transform * self.local_support_point_toward(&local_dir)
    }
}
