use super::unit_cube;
use tricoll3d::math::{Isometry, Real, Rotation, Translation, Vector};
use tricoll3d::query::{self, DistanceRequest};

fn translation(x: Real, y: Real, z: Real) -> Isometry<Real> {
    Isometry::translation(x, y, z)
}

#[test]
fn separated_cubes_distance_and_witness_points() {
    let cube_a = unit_cube();
    let cube_b = unit_cube();

    let pos_a = Isometry::identity();
    let pos_b = translation(3.0, 0.0, 0.0);

    assert!(!query::intersection_test(&pos_a, &cube_a, &pos_b, &cube_b));

    let result = query::distance_with_request(
        &pos_a,
        &cube_a,
        &pos_b,
        &cube_b,
        &DistanceRequest::default(),
    );
    assert_relative_eq!(result.distance, 2.0, epsilon = 1.0e-5);

    // The witness points lie on the two facing faces.
    let (point_a, point_b) = result.nearest_points.unwrap();
    assert_relative_eq!(point_a.x, 0.5, epsilon = 1.0e-5);
    assert_relative_eq!(point_b.x, 2.5, epsilon = 1.0e-5);
    assert_relative_eq!(na::distance(&point_a, &point_b), result.distance, epsilon = 1.0e-5);
    assert!(point_a.y.abs() <= 0.5 && point_a.z.abs() <= 0.5);
    assert!(point_b.y.abs() <= 0.5 && point_b.z.abs() <= 0.5);
}

#[test]
fn overlapping_cubes_collide() {
    let cube_a = unit_cube();
    let cube_b = unit_cube();

    let pos_a = Isometry::identity();
    // Overlap by 0.5 along x.
    let pos_b = translation(0.5, 0.0, 0.0);

    assert!(query::intersection_test(&pos_a, &cube_a, &pos_b, &cube_b));
    assert_eq!(query::distance(&pos_a, &cube_a, &pos_b, &cube_b), 0.0);
}

#[test]
fn touching_cubes_collide() {
    let cube_a = unit_cube();
    let cube_b = unit_cube();

    let pos_a = Isometry::identity();
    // The x = 0.5 faces exactly coincide.
    let pos_b = translation(1.0, 0.0, 0.0);

    assert!(query::intersection_test(&pos_a, &cube_a, &pos_b, &cube_b));
    assert_eq!(query::distance(&pos_a, &cube_a, &pos_b, &cube_b), 0.0);
}

#[test]
fn identical_placement_reproduces_self_relationship() {
    let cube_a = unit_cube();
    let cube_b = unit_cube();
    let pos = Isometry::identity();

    assert!(query::intersection_test(&pos, &cube_a, &pos, &cube_b));
    assert_eq!(query::distance(&pos, &cube_a, &pos, &cube_b), 0.0);

    // Overlapping meshes have no meaningful witness pair.
    let result = query::distance_with_request(
        &pos,
        &cube_a,
        &pos,
        &cube_b,
        &DistanceRequest::default(),
    );
    assert!(result.nearest_points.is_none());
}

#[test]
fn distance_matches_the_gap_on_every_axis() {
    let cube_a = unit_cube();
    let cube_b = unit_cube();
    let pos_a = Isometry::identity();

    for d in [1.5, 2.0, 4.0, 10.0] {
        for axis in 0..3 {
            let mut shift = Vector::zeros();
            shift[axis] = d;
            let pos_b = Isometry::from_parts(Translation::from(shift), Rotation::identity());

            assert!(!query::intersection_test(&pos_a, &cube_a, &pos_b, &cube_b));
            assert_relative_eq!(
                query::distance(&pos_a, &cube_a, &pos_b, &cube_b),
                d - 1.0,
                epsilon = 1.0e-5
            );
        }
    }
}

#[test]
fn distance_is_monotone_under_separating_translation() {
    let cube_a = unit_cube();
    let cube_b = unit_cube();
    let pos_a = Isometry::identity();

    let mut previous = 0.0;
    for d in [1.25, 1.5, 2.0, 3.0, 5.0, 9.0] {
        let distance = query::distance(&pos_a, &cube_a, &translation(d, 0.0, 0.0), &cube_b);
        assert!(distance > previous);
        previous = distance;
    }
}

#[test]
fn rotated_cube_distance() {
    let cube_a = unit_cube();
    let cube_b = unit_cube();

    let pos_a = Isometry::identity();
    // Cube B spun 45° around z: its closest feature becomes an edge at
    // x = 3 - sqrt(2) / 2.
    let pos_b = Isometry::from_parts(
        Translation::new(3.0, 0.0, 0.0),
        Rotation::from_axis_angle(&Vector::z_axis(), std::f64::consts::FRAC_PI_4 as Real),
    );

    let expected = 2.5 - (0.5 as Real) * (2.0 as Real).sqrt();
    assert_relative_eq!(
        query::distance(&pos_a, &cube_a, &pos_b, &cube_b),
        expected,
        epsilon = 1.0e-4
    );
}
