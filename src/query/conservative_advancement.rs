use crate::math::{Isometry, Point, Real};
use crate::query::{compute_closest_points, RigidMotion, SimplexError};
use crate::shape::SupportMap;

/// The result of a time-of-impact query between two moving convex shapes.
#[derive(Copy, Clone, Debug)]
pub struct TimeOfImpact {
    /// Do the shapes come into contact within the horizon?
    pub impact: bool,
    /// The closest point on the first shape at the reported time.
    pub point_a: Point<Real>,
    /// The closest point on the second shape at the reported time.
    pub point_b: Point<Real>,
    /// The earliest time at which the shapes are within `epsilon` of each
    /// other, if `impact` is set. Otherwise the time the advancement stopped.
    pub toi: Real,
    /// The number of advancement steps performed.
    pub iterations: usize,
}

/// Computes the time of impact of two moving convex shapes by conservative
/// advancement.
///
/// Starting at time zero, each step measures the gap between the shapes at
/// the current time and advances by the largest time step guaranteed not to
/// skip over a contact: the gap divided by an upper bound on the closing
/// velocity. The angular contribution to that bound uses `r_max_a` and
/// `r_max_b`, the radii of the smallest origin-centered balls enclosing each
/// shape.
///
/// The query reports no impact when the upper-bounded closing velocity is not
/// positive, when the advancement passes `horizon`, or when `max_iterations`
/// steps were not enough to reach a gap of `epsilon`.
pub fn conservative_advancement<G1, G2>(
    motion_a: &RigidMotion,
    g_a: &G1,
    r_max_a: Real,
    motion_b: &RigidMotion,
    g_b: &G2,
    r_max_b: Real,
    horizon: Real,
    epsilon: Real,
    max_iterations: usize,
) -> Result<TimeOfImpact, SimplexError>
where
    G1: SupportMap + ?Sized,
    G2: SupportMap + ?Sized,
{
    let mut result = TimeOfImpact {
        impact: false,
        point_a: Point::origin(),
        point_b: Point::origin(),
        toi: 0.0,
        iterations: 0,
    };

    let angular_bound = r_max_a * motion_a.angvel.norm() + r_max_b * motion_b.angvel.norm();

    while result.iterations < max_iterations {
        result.iterations += 1;

        let pos_a = motion_a.position_at_time(result.toi);
        let pos_b = motion_b.position_at_time(result.toi);

        let closest = compute_closest_points(&pos_a, g_a, &pos_b, g_b)?;
        result.point_a = closest.point_a;
        result.point_b = closest.point_b;

        let gap = closest.distance;
        if gap <= epsilon {
            result.impact = true;
            return Ok(result);
        }

        let normal = (closest.point_b - closest.point_a) / gap;
        let closing_velocity = (motion_a.linvel - motion_b.linvel).dot(&normal) + angular_bound;

        if closing_velocity <= 0.0 {
            return Ok(result);
        }

        result.toi += gap / closing_velocity;
        if result.toi > horizon {
            return Ok(result);
        }
    }

    log::debug!(
        "time-of-impact query did not converge after {} iterations",
        result.iterations
    );

    Ok(result)
}

/// Computes the time of impact of two shapes moving between two sampled
/// poses.
///
/// The motion of each shape is the constant-velocity interpolation from its
/// start pose to its end pose over the unit time interval, so the returned
/// time of impact is a fraction of that interval.
pub fn motion_interpolation<G1, G2>(
    start_a: &Isometry<Real>,
    end_a: &Isometry<Real>,
    g_a: &G1,
    r_max_a: Real,
    start_b: &Isometry<Real>,
    end_b: &Isometry<Real>,
    g_b: &G2,
    r_max_b: Real,
    epsilon: Real,
    max_iterations: usize,
) -> Result<TimeOfImpact, SimplexError>
where
    G1: SupportMap + ?Sized,
    G2: SupportMap + ?Sized,
{
    let motion_a = RigidMotion::interpolating(start_a, end_a, 1.0);
    let motion_b = RigidMotion::interpolating(start_b, end_b, 1.0);

    conservative_advancement(
        &motion_a,
        g_a,
        r_max_a,
        &motion_b,
        g_b,
        r_max_b,
        1.0,
        epsilon,
        max_iterations,
    )
}
