use approx::assert_relative_eq;
use gjk3d::math::{Isometry, Point, Real, Vector};
use gjk3d::query::{compute_closest_points, compute_closest_points_with, QueryStatus, ToleranceConfig};
use gjk3d::shape::{Ball, Cuboid};
use rand::{Rng, SeedableRng};

fn is_converged(status: QueryStatus) -> bool {
    matches!(
        status,
        QueryStatus::AbsoluteConvergence
            | QueryStatus::RelativeConvergence
            | QueryStatus::LowerErrorBoundConvergence
            | QueryStatus::Stagnation
            | QueryStatus::SimplexExpansionFailed
    )
}

#[test]
fn touching_spheres() {
    let ball = Ball { radius: 1.0 };
    let pos_a = Isometry::identity();
    let pos_b = Isometry::translation(0.0, 2.0, 0.0);

    let res = compute_closest_points(&pos_a, &ball, &pos_b, &ball).unwrap();

    assert_eq!(res.status, QueryStatus::AbsoluteConvergence);
    assert_eq!(res.iterations, 1);
    assert_eq!(res.distance, 0.0);
    assert_relative_eq!(res.point_a, Point::new(0.0, 1.0, 0.0), epsilon = 1.0e-12);
    assert_relative_eq!(res.point_b, Point::new(0.0, 1.0, 0.0), epsilon = 1.0e-12);
}

#[test]
fn separated_spheres() {
    let ball = Ball { radius: 1.0 };
    let pos_a = Isometry::translation(-2.0, 0.0, 0.0);
    let pos_b = Isometry::translation(2.5, 0.0, 0.0);

    let res = compute_closest_points(&pos_a, &ball, &pos_b, &ball).unwrap();

    assert!(is_converged(res.status), "status: {}", res.status);
    assert_ne!(res.status, QueryStatus::AbsoluteConvergence);
    assert_ne!(res.status, QueryStatus::Intersection);
    assert_relative_eq!(res.distance, 2.5, epsilon = 1.0e-9);
    assert_relative_eq!(res.point_a, Point::new(-1.0, 0.0, 0.0), epsilon = 1.0e-9);
    assert_relative_eq!(res.point_b, Point::new(1.5, 0.0, 0.0), epsilon = 1.0e-9);
}

#[test]
fn query_is_symmetric() {
    let small = Ball { radius: 0.5 };
    let big = Ball { radius: 2.0 };
    let pos_a = Isometry::translation(-1.0, 2.0, 0.5);
    let pos_b = Isometry::translation(3.0, -1.0, 1.0);

    let ab = compute_closest_points(&pos_a, &small, &pos_b, &big).unwrap();
    let ba = compute_closest_points(&pos_b, &big, &pos_a, &small).unwrap();

    assert_relative_eq!(ab.distance, ba.distance, epsilon = 1.0e-9);
    assert_relative_eq!(ab.point_a, ba.point_b, epsilon = 1.0e-9);
    assert_relative_eq!(ab.point_b, ba.point_a, epsilon = 1.0e-9);
}

#[test]
fn overlapping_spheres_report_zero_distance() {
    let ball = Ball { radius: 1.0 };
    let pos_a = Isometry::identity();
    let pos_b = Isometry::translation(0.5, 0.0, 0.0);

    let res = compute_closest_points(&pos_a, &ball, &pos_b, &ball).unwrap();

    assert_eq!(res.distance, 0.0);
    assert!(
        res.status == QueryStatus::AbsoluteConvergence || res.status == QueryStatus::Intersection,
        "status: {}",
        res.status
    );
}

#[test]
fn cuboid_and_ball() {
    let cuboid = Cuboid {
        half_extents: Vector::new(1.0, 1.0, 1.0),
    };
    let ball = Ball { radius: 1.0 };
    let pos_a = Isometry::identity();
    let pos_b = Isometry::translation(4.0, 0.0, 0.0);

    let res = compute_closest_points(&pos_a, &cuboid, &pos_b, &ball).unwrap();

    assert!(is_converged(res.status), "status: {}", res.status);
    assert_relative_eq!(res.distance, 2.0, epsilon = 1.0e-6);
    assert_relative_eq!(res.point_a, Point::new(1.0, 0.0, 0.0), epsilon = 1.0e-3);
    assert_relative_eq!(res.point_b, Point::new(3.0, 0.0, 0.0), epsilon = 1.0e-3);
}

#[test]
fn tighter_tolerances_are_honored() {
    let ball = Ball { radius: 1.0 };
    let pos_a = Isometry::identity();
    let pos_b = Isometry::translation(0.0, 2.0 + 1.0e-8, 0.0);

    // The gap is below the default absolute tolerance but not below a
    // tightened one.
    let res = compute_closest_points(&pos_a, &ball, &pos_b, &ball).unwrap();
    assert_eq!(res.status, QueryStatus::AbsoluteConvergence);

    let tight = ToleranceConfig {
        absolute_tolerance: 1.0e-12,
        ..ToleranceConfig::default()
    };
    let res = compute_closest_points_with(&pos_a, &ball, &pos_b, &ball, &tight).unwrap();
    assert_ne!(res.status, QueryStatus::AbsoluteConvergence);
    assert_relative_eq!(res.distance, 1.0e-8, epsilon = 1.0e-12);
}

#[test]
fn random_separated_spheres_match_the_analytic_distance() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);

    for _ in 0..200 {
        let r_a = rng.gen_range(0.1..2.0);
        let r_b = rng.gen_range(0.1..2.0);
        let gap: Real = rng.gen_range(0.01..5.0);

        let dir = Vector::new(
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
        );
        if dir.norm_squared() < 1.0e-6 {
            continue;
        }
        let dir = dir.normalize();

        let center_a = Vector::new(
            rng.gen_range(-3.0..3.0),
            rng.gen_range(-3.0..3.0),
            rng.gen_range(-3.0..3.0),
        );
        let center_b = center_a + dir * (r_a + r_b + gap);

        let pos_a = Isometry::translation(center_a.x, center_a.y, center_a.z);
        let pos_b = Isometry::translation(center_b.x, center_b.y, center_b.z);

        let res = compute_closest_points(
            &pos_a,
            &Ball { radius: r_a },
            &pos_b,
            &Ball { radius: r_b },
        )
        .unwrap();

        assert!(is_converged(res.status), "status: {}", res.status);
        assert_relative_eq!(res.distance, gap, epsilon = 1.0e-6);
        assert_relative_eq!(
            (res.point_b - res.point_a).norm(),
            gap,
            epsilon = 1.0e-6
        );
    }
}

#[test]
fn status_messages() {
    assert_eq!(
        QueryStatus::AbsoluteConvergence.to_string(),
        "Absolute convergence test passed"
    );
    assert_eq!(
        QueryStatus::ExceededMaxIterations.to_string(),
        "Maximum iteration limit was exceeded"
    );
    assert_eq!(QueryStatus::Intersection.to_string(), "Intersection was found");
    assert_eq!(
        QueryStatus::Iterating.to_string(),
        "Unexpected termination while iterating"
    );
    assert_eq!(
        QueryStatus::LowerErrorBoundConvergence.to_string(),
        "Lower error bound convergence test passed"
    );
    assert_eq!(
        QueryStatus::NonDescendDirection.to_string(),
        "Non descent direction was encountered"
    );
    assert_eq!(
        QueryStatus::RelativeConvergence.to_string(),
        "Relative convergence test passed"
    );
    assert_eq!(QueryStatus::Stagnation.to_string(), "Stagnation test passed");
    assert_eq!(
        QueryStatus::SimplexExpansionFailed.to_string(),
        "Simplex expansion failure"
    );
}
