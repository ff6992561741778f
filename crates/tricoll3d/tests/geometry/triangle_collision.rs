use tricoll3d::math::{Isometry, Point, Real, Rotation, Translation};
use tricoll3d::query;
use tricoll3d::shape::TriMesh;

fn make_mesh(coords: &[Point<Real>]) -> TriMesh {
    let mut builder = TriMesh::builder();
    for triangle in coords.chunks(3) {
        builder
            .add_triangle(triangle[0], triangle[1], triangle[2])
            .unwrap();
    }
    builder.build().unwrap()
}

fn rotation_z(angle: Real) -> Isometry<Real> {
    Isometry::from_parts(
        Translation::identity(),
        Rotation::from_euler_angles(0.0, 0.0, angle),
    )
}

#[test]
fn trivial_collision() {
    let mesh_a = make_mesh(&[
        Point::new(10.0, 0.0, 0.0),
        Point::new(0.0, 0.0, 1.0),
        Point::new(0.0, 0.0, -1.0),
    ]);
    let mesh_b = make_mesh(&[
        Point::new(5.0, -10.0, -10.0),
        Point::new(5.0, -10.0, 10.0),
        Point::new(5.0, 10.0, 0.0),
    ]);

    let identity = Isometry::identity();

    assert!(query::intersection_test(
        &identity, &mesh_a, &identity, &mesh_b
    ));

    // Rotated out of the way, the spike no longer reaches the wall.
    assert!(!query::intersection_test(
        &rotation_z(std::f32::consts::PI as Real / 2.0),
        &mesh_a,
        &identity,
        &mesh_b
    ));
}

#[test]
fn rotation_orientates_correctly() {
    let mesh_a = make_mesh(&[
        Point::new(10.0, 0.0, 0.0),
        Point::new(0.0, 0.0, 1.0),
        Point::new(0.0, 0.0, -1.0),
    ]);
    let mesh_b = make_mesh(&[
        Point::new(5.0, 1.0, -10.0),
        Point::new(5.0, 1.0, 10.0),
        Point::new(5.0, 10.0, 0.0),
    ]);

    let identity = Isometry::identity();

    assert!(!query::intersection_test(
        &identity, &mesh_a, &identity, &mesh_b
    ));

    // Tilting the spike upward makes it hit the wall; downward misses it.
    assert!(query::intersection_test(
        &rotation_z(std::f32::consts::PI as Real / 6.0),
        &mesh_a,
        &identity,
        &mesh_b
    ));
    assert!(!query::intersection_test(
        &rotation_z(-std::f32::consts::PI as Real / 6.0),
        &mesh_a,
        &identity,
        &mesh_b
    ));
}

#[test]
fn single_triangle_distance() {
    let mesh_a = make_mesh(&[
        Point::new(0.0, 0.0, 0.0),
        Point::new(1.0, 0.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
    ]);
    let mesh_b = make_mesh(&[
        Point::new(0.0, 0.0, 4.0),
        Point::new(1.0, 0.0, 4.0),
        Point::new(0.0, 1.0, 4.0),
    ]);

    let identity = Isometry::identity();
    assert_relative_eq!(
        query::distance(&identity, &mesh_a, &identity, &mesh_b),
        4.0,
        epsilon = 1.0e-5
    );
}
