use std::fmt;

use crate::math::{Isometry, Point, Real, Vector, DEFAULT_EPSILON};
use crate::query::gjk::{reduce_simplex, Simplex};
use crate::query::SimplexError;
use crate::shape::SupportMap;

/// The termination reason of a closest-points query.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum QueryStatus {
    /// The distance estimate fell below the absolute tolerance.
    AbsoluteConvergence,
    /// The iteration limit was reached before any convergence test passed.
    ExceededMaxIterations,
    /// The simplex reached dimension 4, so the shapes intersect.
    Intersection,
    /// The query is still running. Never returned by a completed query.
    Iterating,
    /// The lower error bound on the distance fell below the absolute
    /// tolerance.
    LowerErrorBoundConvergence,
    /// The distance estimate increased between two iterations.
    NonDescendDirection,
    /// The duality gap fell below the relative tolerance.
    RelativeConvergence,
    /// The distance estimate stopped decreasing, or the new support point was
    /// already part of the simplex.
    Stagnation,
    /// The new support point was affinely dependent on the simplex vertices.
    SimplexExpansionFailed,
}

impl fmt::Display for QueryStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let msg = match self {
            QueryStatus::AbsoluteConvergence => "Absolute convergence test passed",
            QueryStatus::ExceededMaxIterations => "Maximum iteration limit was exceeded",
            QueryStatus::Intersection => "Intersection was found",
            QueryStatus::Iterating => "Unexpected termination while iterating",
            QueryStatus::LowerErrorBoundConvergence => "Lower error bound convergence test passed",
            QueryStatus::NonDescendDirection => "Non descent direction was encountered",
            QueryStatus::RelativeConvergence => "Relative convergence test passed",
            QueryStatus::Stagnation => "Stagnation test passed",
            QueryStatus::SimplexExpansionFailed => "Simplex expansion failure",
        };
        f.write_str(msg)
    }
}

/// Tolerances and iteration limit of the closest-points solver.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ToleranceConfig {
    /// Distances below this are treated as zero.
    pub absolute_tolerance: Real,
    /// Bound on the duality gap, relative to the squared distance estimate.
    pub relative_tolerance: Real,
    /// Minimum relative progress required between two iterations.
    pub stagnation_tolerance: Real,
    /// Maximum number of simplex expansions.
    pub max_iterations: usize,
}

impl Default for ToleranceConfig {
    fn default() -> Self {
        ToleranceConfig {
            absolute_tolerance: 1.0e-6,
            relative_tolerance: 1.0e-10,
            stagnation_tolerance: 0.0,
            max_iterations: 100,
        }
    }
}

/// The result of a closest-points query between two convex shapes.
#[derive(Copy, Clone, Debug)]
pub struct ClosestPoints {
    /// The closest point found on the first shape, in world space.
    pub point_a: Point<Real>,
    /// The closest point found on the second shape, in world space.
    pub point_b: Point<Real>,
    /// The distance between the two shapes. Zero if they intersect.
    pub distance: Real,
    /// The number of iterations performed.
    pub iterations: usize,
    /// The reason the query terminated.
    pub status: QueryStatus,
}

/// Computes the closest points between two convex shapes with the default
/// [`ToleranceConfig`].
pub fn compute_closest_points<G1, G2>(
    pos_a: &Isometry<Real>,
    g_a: &G1,
    pos_b: &Isometry<Real>,
    g_b: &G2,
) -> Result<ClosestPoints, SimplexError>
where
    G1: SupportMap + ?Sized,
    G2: SupportMap + ?Sized,
{
    compute_closest_points_with(pos_a, g_a, pos_b, g_b, &ToleranceConfig::default())
}

/// Computes the closest points between two convex shapes using the
/// Gilbert-Johnson-Keerthi algorithm on their Minkowski difference.
///
/// Each iteration reduces the simplex to the feature closest to the origin,
/// then expands it with a support point of the Minkowski difference in the
/// direction opposite the current distance vector. The returned status tells
/// which termination test fired; the witness points and distance are valid
/// for every status except [`QueryStatus::Iterating`].
pub fn compute_closest_points_with<G1, G2>(
    pos_a: &Isometry<Real>,
    g_a: &G1,
    pos_b: &Isometry<Real>,
    g_b: &G2,
    tolerances: &ToleranceConfig,
) -> Result<ClosestPoints, SimplexError>
where
    G1: SupportMap + ?Sized,
    G2: SupportMap + ?Sized,
{
    let origin = Vector::zeros();
    let mut simplex = Simplex::new();

    let mut dir = pos_b.translation.vector - pos_a.translation.vector;
    if dir.norm_squared() < DEFAULT_EPSILON {
        dir = Vector::x();
    }

    let sa = g_a.support_point(pos_a, &dir);
    let sb = g_b.support_point(pos_b, &-dir);
    simplex.add_point(sa.coords - sb.coords, sa, sb)?;

    let mut iterations = 0;
    let mut prev_dist = Real::MAX;
    let mut point_a;
    let mut point_b;
    let mut distance;

    let status = loop {
        iterations += 1;

        reduce_simplex(&origin, &mut simplex)?;
        let (v, pa, pb) = simplex.closest();
        point_a = pa;
        point_b = pb;

        let dist = v.norm();
        distance = dist;

        if simplex.is_full() {
            break QueryStatus::Intersection;
        }

        if dist <= tolerances.absolute_tolerance {
            break QueryStatus::AbsoluteConvergence;
        }

        if dist - prev_dist > tolerances.absolute_tolerance {
            break QueryStatus::NonDescendDirection;
        }

        let d = -v;
        let sa = g_a.support_point(pos_a, &d);
        let sb = g_b.support_point(pos_b, &-d);
        let w = sa.coords - sb.coords;

        if simplex.contains_point(&w) {
            break QueryStatus::Stagnation;
        }

        if simplex.is_degenerate_point(&w) {
            break QueryStatus::SimplexExpansionFailed;
        }

        let vw = v.dot(&w);

        if dist * dist - vw <= tolerances.relative_tolerance * dist * dist {
            break QueryStatus::RelativeConvergence;
        }

        if dist - vw / dist <= tolerances.absolute_tolerance {
            break QueryStatus::LowerErrorBoundConvergence;
        }

        if prev_dist - dist <= tolerances.stagnation_tolerance * prev_dist {
            break QueryStatus::Stagnation;
        }

        prev_dist = dist;
        simplex.add_point(w, sa, sb)?;

        if iterations >= tolerances.max_iterations {
            log::trace!(
                "closest-points query exceeded {} iterations",
                tolerances.max_iterations
            );
            break QueryStatus::ExceededMaxIterations;
        }
    };

    if status == QueryStatus::Intersection {
        distance = 0.0;
    }

    Ok(ClosestPoints {
        point_a,
        point_b,
        distance,
        iterations,
        status,
    })
}
