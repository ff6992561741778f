mod cube_cube_queries;
mod distance_tolerances;
mod random_placements;
mod triangle_collision;

use tricoll3d::math::{Point, Real};
use tricoll3d::shape::TriMesh;

/// An axis-aligned box centered at the origin, triangulated into 12 triangles.
pub fn cuboid(hx: Real, hy: Real, hz: Real) -> TriMesh {
    let v = [
        Point::new(-hx, -hy, -hz),
        Point::new(hx, -hy, -hz),
        Point::new(hx, hy, -hz),
        Point::new(-hx, hy, -hz),
        Point::new(-hx, -hy, hz),
        Point::new(hx, -hy, hz),
        Point::new(hx, hy, hz),
        Point::new(-hx, hy, hz),
    ];
    let faces = [
        [0, 2, 1],
        [0, 3, 2],
        [4, 5, 6],
        [4, 6, 7],
        [0, 1, 5],
        [0, 5, 4],
        [3, 6, 2],
        [3, 7, 6],
        [0, 4, 7],
        [0, 7, 3],
        [1, 2, 6],
        [1, 6, 5],
    ];

    let mut builder = TriMesh::builder();
    for [i, j, k] in faces {
        builder.add_triangle(v[i], v[j], v[k]).unwrap();
    }
    builder.build().unwrap()
}

/// A unit cube centered at the origin.
pub fn unit_cube() -> TriMesh {
    cuboid(0.5, 0.5, 0.5)
}
