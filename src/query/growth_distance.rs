use crate::math::{Isometry, Point, Real, Vector};
use crate::query::{compute_closest_points, QueryStatus, SimplexError};
use crate::shape::SupportMap;
use na::Unit;

/// A support map scaled uniformly about its local origin.
struct ScaledShape<'a, G: ?Sized> {
    shape: &'a G,
    scale: Real,
}

impl<'a, G: SupportMap + ?Sized> SupportMap for ScaledShape<'a, G> {
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        self.shape.local_support_point(dir) * self.scale
    }

    fn local_support_point_toward(&self, dir: &Unit<Vector<Real>>) -> Point<Real> {
        self.shape.local_support_point_toward(dir) * self.scale
    }
}

/// The result of a growth-distance query between two convex shapes.
#[derive(Copy, Clone, Debug)]
pub struct GrowthDistance {
    /// Did the solver find the contact scale?
    pub success: bool,
    /// The contact point on the scaled first shape, in world space.
    pub point_a: Point<Real>,
    /// The contact point on the scaled second shape, in world space.
    pub point_b: Point<Real>,
    /// The uniform scale at which the two shapes come into contact.
    ///
    /// A scale below 1 means the shapes overlap at their original size; a
    /// scale above 1 means they are separated.
    pub scale: Real,
    /// The number of scale updates performed.
    pub iterations: usize,
}

/// Computes the growth distance of two convex shapes with an epsilon of
/// `1.0e-6` and at most 100 iterations.
pub fn growth_distance<G1, G2>(
    pos_a: &Isometry<Real>,
    g_a: &G1,
    pos_b: &Isometry<Real>,
    g_b: &G2,
) -> Result<GrowthDistance, SimplexError>
where
    G1: SupportMap + ?Sized,
    G2: SupportMap + ?Sized,
{
    growth_distance_with(pos_a, g_a, pos_b, g_b, 1.0e-6, 100)
}

/// Computes the uniform scale, applied to both shapes about their local
/// origins, at which they come into contact.
///
/// Each iteration measures the gap between the scaled shapes. A positive gap
/// yields a Newton step on the scale along the contact normal; contact is
/// accepted only when it was reached by such a step, so an overshoot into
/// overlap backtracks by halving the scale instead of reporting a touching
/// configuration that is not one. When the contact normal makes the Newton
/// step infeasible, the scale is doubled to bracket the contact instead.
///
/// Fails to converge (with `success == false`) only when the iteration limit
/// is reached.
pub fn growth_distance_with<G1, G2>(
    pos_a: &Isometry<Real>,
    g_a: &G1,
    pos_b: &Isometry<Real>,
    g_b: &G2,
    epsilon: Real,
    max_iterations: usize,
) -> Result<GrowthDistance, SimplexError>
where
    G1: SupportMap + ?Sized,
    G2: SupportMap + ?Sized,
{
    let mut result = GrowthDistance {
        success: false,
        point_a: Point::origin(),
        point_b: Point::origin(),
        scale: 1.0,
        iterations: 0,
    };

    let mut stepped = false;

    while result.iterations < max_iterations {
        result.iterations += 1;

        let scaled_a = ScaledShape {
            shape: g_a,
            scale: result.scale,
        };
        let scaled_b = ScaledShape {
            shape: g_b,
            scale: result.scale,
        };

        let closest = compute_closest_points(pos_a, &scaled_a, pos_b, &scaled_b)?;
        let gap = closest.distance;
        result.point_a = closest.point_a;
        result.point_b = closest.point_b;

        if closest.status == QueryStatus::Intersection || gap <= epsilon {
            if stepped {
                result.success = true;
                return Ok(result);
            }

            // Contact was not reached by a Newton step, so this may be a deep
            // overlap rather than a touching configuration. Backtrack.
            result.scale *= 0.5;
            stepped = false;
            continue;
        }

        let normal = (closest.point_b - closest.point_a) / gap;
        let origin_extent = normal.dot(&(pos_b.translation.vector - pos_a.translation.vector));
        let support_extent = origin_extent - gap;

        if support_extent <= 0.0 {
            // The contact normal is tilted so far from the line between the
            // shape origins that the Newton step is infeasible. The shapes
            // are still separated, so grow geometrically until a usable
            // normal appears or the scaled shapes overlap.
            result.scale *= 2.0;
            stepped = false;
            continue;
        }

        result.scale *= origin_extent / support_extent;
        stepped = true;
    }

    log::debug!(
        "growth-distance query failed to converge after {} iterations",
        result.iterations
    );

    Ok(result)
}
