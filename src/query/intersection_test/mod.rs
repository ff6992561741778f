//! Implementation details of the `intersection_test` function.

pub use self::intersection_test::intersection_test;
pub use self::intersection_test_triangle_triangle::intersection_test_triangle_triangle;
pub use self::intersection_test_trimesh_trimesh::intersection_test_trimesh_trimesh;

mod intersection_test_triangle_triangle;
mod intersection_test_trimesh_trimesh;
