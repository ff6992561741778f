use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Point, Real};
use crate::partitioning::Bvh;
use crate::shape::Triangle;

/// Indicates an inconsistency while building a triangle mesh.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum MeshBuildError {
    /// A triangle mesh must contain at least one triangle.
    #[error("a triangle mesh must contain at least one triangle")]
    EmptyMesh,
    /// A triangle with a NaN or infinite vertex coordinate was pushed to the mesh.
    #[error("the triangle {0} has a non-finite vertex coordinate")]
    NonFiniteVertex(u32),
}

/// An append-only builder for [`TriMesh`].
///
/// The builder is the *Building* state of a mesh: triangles may be pushed one by one,
/// in the order they should be stored (duplicates are allowed and preserved). Calling
/// [`TriMeshBuilder::build`] consumes the builder and compiles the acceleration
/// structure, after which the mesh is immutable.
#[derive(Clone, Debug, Default)]
pub struct TriMeshBuilder {
    triangles: Vec<Triangle>,
}

impl TriMeshBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of triangles pushed so far.
    pub fn num_triangles(&self) -> usize {
        self.triangles.len()
    }

    /// Appends one triangle to the mesh being built.
    ///
    /// Non-finite coordinates are rejected eagerly so they cannot leak into the
    /// geometric computations as silent NaNs.
    pub fn add_triangle(
        &mut self,
        a: Point<Real>,
        b: Point<Real>,
        c: Point<Real>,
    ) -> Result<(), MeshBuildError> {
        let triangle = Triangle::new(a, b, c);

        if !triangle.is_finite() {
            return Err(MeshBuildError::NonFiniteVertex(self.triangles.len() as u32));
        }

        self.triangles.push(triangle);
        Ok(())
    }

    /// Compiles the mesh, transitioning it to its immutable, queryable state.
    ///
    /// Fails with [`MeshBuildError::EmptyMesh`] if no triangle was pushed.
    pub fn build(self) -> Result<TriMesh, MeshBuildError> {
        TriMesh::new(self.triangles)
    }
}

/// A triangle mesh paired with the bounding-volume hierarchy compiled over it.
///
/// A `TriMesh` is immutable: once built it can be shared (read-only) across any number
/// of concurrent queries, each combining it with its own rigid placement. The triangle
/// sequence is stored exactly as supplied to the builder, insertion order preserved.
#[derive(Clone, Debug)]
pub struct TriMesh {
    triangles: Vec<Triangle>,
    bvh: Bvh,
}

impl TriMesh {
    /// Builds a mesh from a triangle soup.
    ///
    /// Fails if `triangles` is empty or contains a non-finite vertex coordinate.
    pub fn new(triangles: Vec<Triangle>) -> Result<Self, MeshBuildError> {
        if triangles.is_empty() {
            return Err(MeshBuildError::EmptyMesh);
        }

        for (id, triangle) in triangles.iter().enumerate() {
            if !triangle.is_finite() {
                return Err(MeshBuildError::NonFiniteVertex(id as u32));
            }
        }

        let leaf_aabbs: Vec<Aabb> = triangles.iter().map(|tri| tri.local_aabb()).collect();
        let bvh = Bvh::from_leaf_aabbs(&leaf_aabbs);

        Ok(Self { triangles, bvh })
    }

    /// An empty builder, i.e. a mesh in its *Building* state.
    pub fn builder() -> TriMeshBuilder {
        TriMeshBuilder::new()
    }

    /// The triangles of this mesh, in insertion order.
    #[inline]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// The triangle with the given index.
    #[inline]
    pub fn triangle(&self, id: u32) -> Triangle {
        self.triangles[id as usize]
    }

    /// The number of triangles of this mesh.
    #[inline]
    pub fn num_triangles(&self) -> usize {
        self.triangles.len()
    }

    /// The bounding-volume hierarchy compiled over this mesh.
    #[inline]
    pub fn bvh(&self) -> &Bvh {
        &self.bvh
    }

    /// The local-space bounding box of this mesh.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        self.bvh.root_aabb()
    }

    /// The bounding box of this mesh, transformed by `pos`.
    #[inline]
    pub fn aabb(&self, pos: &Isometry<Real>) -> Aabb {
        self.local_aabb().transform_by(pos)
    }
}
