use approx::assert_relative_eq;
use gjk3d::math::{Isometry, Point, Vector};
use gjk3d::query::{conservative_advancement, motion_interpolation, RigidMotion};
use gjk3d::shape::{Ball, Cylinder};
use std::f64::consts::PI;

#[test]
fn central_impact_of_two_spheres() {
    let ball = Ball { radius: 1.0 };
    let motion_a = RigidMotion::new(
        Isometry::translation(-2.0, 0.0, 0.0),
        Vector::new(2.0, 0.0, 0.0),
        Vector::new(0.0, 0.0, 1.0),
    );
    let motion_b = RigidMotion::new(
        Isometry::translation(2.0, 0.0, 0.0),
        Vector::new(-2.0, 0.0, 0.0),
        Vector::new(0.0, 0.0, -1.0),
    );

    let res =
        conservative_advancement(&motion_a, &ball, 1.0, &motion_b, &ball, 1.0, 1.0, 0.01, 100)
            .unwrap();

    assert!(res.impact);
    assert_relative_eq!(res.toi, 0.5, epsilon = 0.01);
    assert!(res.point_a.coords.norm() < 0.02);
    assert!(res.point_b.coords.norm() < 0.02);
}

#[test]
fn interpolated_central_impact() {
    let ball = Ball { radius: 1.0 };
    let start_a = Isometry::translation(-2.0, 0.0, 0.0);
    let end_a = Isometry::new(Vector::zeros(), Vector::new(0.0, 0.0, 1.0));
    let start_b = Isometry::translation(2.0, 0.0, 0.0);
    let end_b = Isometry::new(Vector::zeros(), Vector::new(0.0, 1.0, 0.0));

    let res = motion_interpolation(
        &start_a, &end_a, &ball, 1.0, &start_b, &end_b, &ball, 1.0, 0.01, 100,
    )
    .unwrap();

    assert!(res.impact);
    assert_relative_eq!(res.toi, 0.5, epsilon = 0.01);
}

#[test]
fn separating_spheres_never_impact() {
    let ball = Ball { radius: 1.0 };
    let motion_a = RigidMotion::new(
        Isometry::translation(-2.0, 0.0, 0.0),
        Vector::new(-1.0, 0.0, 0.0),
        Vector::zeros(),
    );
    let motion_b = RigidMotion::new(
        Isometry::translation(2.0, 0.0, 0.0),
        Vector::new(1.0, 0.0, 0.0),
        Vector::zeros(),
    );

    let res =
        conservative_advancement(&motion_a, &ball, 1.0, &motion_b, &ball, 1.0, 1.0, 0.01, 100)
            .unwrap();

    assert!(!res.impact);
    assert_eq!(res.iterations, 1);
}

#[test]
fn near_miss_reports_no_impact() {
    let ball = Ball { radius: 1.0 };
    let motion_a = RigidMotion::new(
        Isometry::translation(-2.0, 1.01, 0.0),
        Vector::new(2.0, 0.0, 0.0),
        Vector::zeros(),
    );
    let motion_b = RigidMotion::new(
        Isometry::translation(2.0, -1.01, 0.0),
        Vector::new(-2.0, 0.0, 0.0),
        Vector::zeros(),
    );

    let res =
        conservative_advancement(&motion_a, &ball, 1.0, &motion_b, &ball, 1.0, 1.0, 0.01, 100)
            .unwrap();

    assert!(!res.impact);
}

#[test]
fn rotating_cylinder_sweeps_into_a_sphere() {
    let cylinder = Cylinder {
        half_height: 10.0,
        radius: 1.0,
    };
    let ball = Ball { radius: 1.0 };

    // The cylinder spins about the world x axis; at a quarter turn its upper
    // cap rim grazes the sphere resting at (0, 0, 10).
    let motion_a = RigidMotion::new(
        Isometry::translation(0.0, 2.0, 0.0),
        Vector::zeros(),
        Vector::new(PI, 0.0, 0.0),
    );
    let motion_b = RigidMotion::constant_position(Isometry::translation(0.0, 0.0, 10.0));

    let r_max_a = (10.0f64 * 10.0 + 1.0).sqrt();

    let res = conservative_advancement(
        &motion_a, &cylinder, r_max_a, &motion_b, &ball, 1.0, 1.0, 0.01, 100,
    )
    .unwrap();

    assert!(res.impact);
    assert_relative_eq!(res.toi, 0.5, epsilon = 0.005);
    assert!((res.point_b - res.point_a).norm() <= 0.011);
    assert_relative_eq!(res.point_a, Point::new(0.0, 1.0, 10.0), epsilon = 0.1);
}
