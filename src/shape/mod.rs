//! Shapes supported by tricoll.

pub use self::segment::Segment;
pub use self::triangle::Triangle;
pub use self::trimesh::{MeshBuildError, TriMesh, TriMeshBuilder};

mod segment;
mod triangle;
mod trimesh;
