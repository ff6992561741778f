use super::unit_cube;
use tricoll3d::math::{Isometry, Real};
use tricoll3d::query::{self, DistanceRequest};

// The exact gap between the two cubes in every test below.
const GAP: Real = 2.0;

fn setup() -> (Isometry<Real>, Isometry<Real>) {
    (Isometry::identity(), Isometry::translation(3.0, 0.0, 0.0))
}

#[test]
fn zero_tolerances_give_the_exact_distance() {
    let cube_a = unit_cube();
    let cube_b = unit_cube();
    let (pos_a, pos_b) = setup();

    let request = DistanceRequest {
        nearest_points: false,
        relative_error: 0.0,
        absolute_error: 0.0,
    };
    let result = query::distance_with_request(&pos_a, &cube_a, &pos_b, &cube_b, &request);

    assert_relative_eq!(result.distance, GAP, epsilon = 1.0e-5);
    assert!(result.nearest_points.is_none());
}

#[test]
fn absolute_tolerance_bounds_the_error() {
    let cube_a = unit_cube();
    let cube_b = unit_cube();
    let (pos_a, pos_b) = setup();

    let request = DistanceRequest {
        nearest_points: true,
        relative_error: 0.0,
        absolute_error: 0.5,
    };
    let result = query::distance_with_request(&pos_a, &cube_a, &pos_b, &cube_b, &request);

    // The reported distance is always realized by an actual pair of triangles, so
    // it can overestimate the minimum only by the requested tolerance.
    assert!(result.distance >= GAP - 1.0e-5);
    assert!(result.distance <= GAP + 0.5 + 1.0e-5);
}

#[test]
fn relative_tolerance_bounds_the_error() {
    let cube_a = unit_cube();
    let cube_b = unit_cube();
    let (pos_a, pos_b) = setup();

    let request = DistanceRequest {
        nearest_points: true,
        relative_error: 0.25,
        absolute_error: 0.0,
    };
    let result = query::distance_with_request(&pos_a, &cube_a, &pos_b, &cube_b, &request);

    assert!(result.distance >= GAP - 1.0e-5);
    assert!(result.distance <= GAP * 1.25 + 1.0e-5);
}

#[test]
fn tolerances_still_bound_the_error_when_intersecting() {
    let cube_a = unit_cube();
    let cube_b = unit_cube();
    let pos_a = Isometry::identity();
    let pos_b = Isometry::translation(0.25, 0.0, 0.0);

    let request = DistanceRequest {
        nearest_points: true,
        relative_error: 0.0,
        absolute_error: 0.5,
    };
    let result = query::distance_with_request(&pos_a, &cube_a, &pos_b, &cube_b, &request);

    // The true distance is zero; the early exit may stop at any candidate within
    // the absolute tolerance.
    assert!(result.distance >= 0.0);
    assert!(result.distance <= 0.5 + 1.0e-5);

    // With tolerances disabled the same query is exactly zero.
    let exact = query::distance(&pos_a, &cube_a, &pos_b, &cube_b);
    assert_eq!(exact, 0.0);
}
