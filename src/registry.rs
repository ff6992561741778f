//! Process-wide registry of meshes addressed by opaque handles.
//!
//! This module is the boundary contract of the library when meshes cannot be owned
//! directly (typically behind a foreign-function layer): meshes are created in a
//! *Building* state, filled one triangle at a time, compiled by [`MeshRegistry::end`]
//! and queried until destroyed. Every operation on an unknown or already destroyed
//! handle fails loudly with [`RegistryError::InvalidHandle`] instead of corrupting
//! memory, and builder operations performed out of sequence fail with
//! [`RegistryError::InvalidState`].
//!
//! Rotations cross this boundary as 9 scalars in **row-major** order, on every call
//! path. Translations are 3 scalars.

use crate::math::{Isometry, Matrix, Point, Real, Rotation, Translation};
use crate::query::{self, DistanceRequest};
use crate::shape::{MeshBuildError, TriMesh, TriMeshBuilder};
use slab::Slab;
use std::mem;
use std::sync::Arc;

/// An opaque handle identifying one mesh of a [`MeshRegistry`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct MeshHandle(usize);

/// Error produced by registry operations.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum RegistryError {
    /// The handle does not identify a live mesh of this registry.
    #[error("operation on an unknown or already destroyed mesh handle")]
    InvalidHandle,
    /// A builder or query method was called out of sequence.
    #[error("method called out of sequence: {0}")]
    InvalidState(&'static str),
    /// The mesh being finalized or filled is malformed.
    #[error(transparent)]
    Build(#[from] MeshBuildError),
}

/// Result of a distance query ran through the registry boundary.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DistanceOutput {
    /// `true` iff the reported distance is strictly positive, i.e. the meshes are
    /// separated. Touching or overlapping meshes report `false`.
    pub success: bool,
    /// The minimum distance between the two meshes.
    pub distance: Real,
    /// The nearest point on the first mesh, in world space. Zero when the meshes
    /// overlap or when nearest points were not requested.
    pub nearest_point_a: Point<Real>,
    /// The nearest point on the second mesh, in world space. Zero when the meshes
    /// overlap or when nearest points were not requested.
    pub nearest_point_b: Point<Real>,
}

enum MeshSlot {
    Building(TriMeshBuilder),
    Ready(Arc<TriMesh>),
}

/// A table of meshes with an explicit lifecycle: insert on create, remove on
/// destroy, reject on use-after-destroy.
///
/// Queries take `&self` and share the finalized meshes read-only, so they can run
/// concurrently from multiple threads. Builder methods take `&mut self`; a mesh
/// under construction is therefore never observable by a concurrent query.
#[derive(Default)]
pub struct MeshRegistry {
    meshes: Slab<MeshSlot>,
}

impl MeshRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of live (building or finalized) meshes.
    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    /// Is this registry empty?
    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }

    /// Allocates an empty mesh in its *Building* state.
    pub fn create_mesh(&mut self) -> MeshHandle {
        MeshHandle(self.meshes.insert(MeshSlot::Building(TriMeshBuilder::new())))
    }

    /// Releases every resource owned by the mesh.
    ///
    /// The handle becomes invalid: destroying it a second time, or using it in any
    /// other operation, is rejected with [`RegistryError::InvalidHandle`].
    pub fn destroy_mesh(&mut self, handle: MeshHandle) -> Result<(), RegistryError> {
        match self.meshes.try_remove(handle.0) {
            Some(_) => Ok(()),
            None => Err(RegistryError::InvalidHandle),
        }
    }

    /// Resets the mesh to an empty *Building* state.
    ///
    /// Calling this on an already finalized mesh discards its triangles and compiled
    /// hierarchy and starts over; queries already running against the old mesh keep
    /// their own shared reference and are unaffected.
    pub fn begin(&mut self, handle: MeshHandle) -> Result<(), RegistryError> {
        let slot = self.slot_mut(handle)?;

        if let MeshSlot::Ready(_) = slot {
            log::debug!("begin() on a finalized mesh discards its compiled index");
        }

        *slot = MeshSlot::Building(TriMeshBuilder::new());
        Ok(())
    }

    /// Appends one triangle to a mesh in its *Building* state.
    pub fn add_triangle(
        &mut self,
        handle: MeshHandle,
        p0: Point<Real>,
        p1: Point<Real>,
        p2: Point<Real>,
    ) -> Result<(), RegistryError> {
        match self.slot_mut(handle)? {
            MeshSlot::Building(builder) => Ok(builder.add_triangle(p0, p1, p2)?),
            MeshSlot::Ready(_) => Err(RegistryError::InvalidState(
                "add_triangle on a finalized mesh",
            )),
        }
    }

    /// Compiles the mesh, transitioning it from *Building* to its finalized,
    /// queryable state.
    pub fn end(&mut self, handle: MeshHandle) -> Result<(), RegistryError> {
        let slot = self.slot_mut(handle)?;

        match slot {
            MeshSlot::Building(builder) => {
                let mesh = mem::take(builder).build()?;
                *slot = MeshSlot::Ready(Arc::new(mesh));
                Ok(())
            }
            MeshSlot::Ready(_) => Err(RegistryError::InvalidState("end on a finalized mesh")),
        }
    }

    /// A shared reference to a finalized mesh.
    pub fn get(&self, handle: MeshHandle) -> Result<&Arc<TriMesh>, RegistryError> {
        match self.meshes.get(handle.0) {
            Some(MeshSlot::Ready(mesh)) => Ok(mesh),
            Some(MeshSlot::Building(_)) => Err(RegistryError::InvalidState(
                "query on a mesh still being built",
            )),
            None => Err(RegistryError::InvalidHandle),
        }
    }

    /// Tests whether two placed meshes are intersecting.
    ///
    /// `rotation_*` are row-major 3×3 matrices; orthonormality is the caller's
    /// responsibility.
    pub fn collide(
        &self,
        handle_a: MeshHandle,
        rotation_a: &[Real; 9],
        translation_a: &[Real; 3],
        handle_b: MeshHandle,
        rotation_b: &[Real; 9],
        translation_b: &[Real; 3],
    ) -> Result<bool, RegistryError> {
        let mesh_a = self.get(handle_a)?;
        let mesh_b = self.get(handle_b)?;
        let pos_a = placement(rotation_a, translation_a);
        let pos_b = placement(rotation_b, translation_b);

        Ok(query::intersection_test(&pos_a, mesh_a, &pos_b, mesh_b))
    }

    /// Computes the minimum distance between two placed meshes.
    ///
    /// `rotation_*` follow the same row-major convention as [`MeshRegistry::collide`].
    pub fn distance(
        &self,
        handle_a: MeshHandle,
        rotation_a: &[Real; 9],
        translation_a: &[Real; 3],
        handle_b: MeshHandle,
        rotation_b: &[Real; 9],
        translation_b: &[Real; 3],
        request: &DistanceRequest,
    ) -> Result<DistanceOutput, RegistryError> {
        let mesh_a = self.get(handle_a)?;
        let mesh_b = self.get(handle_b)?;
        let pos_a = placement(rotation_a, translation_a);
        let pos_b = placement(rotation_b, translation_b);

        let result = query::distance_with_request(&pos_a, mesh_a, &pos_b, mesh_b, request);
        let (nearest_point_a, nearest_point_b) = result
            .nearest_points
            .unwrap_or((Point::origin(), Point::origin()));

        Ok(DistanceOutput {
            success: result.distance > 0.0,
            distance: result.distance,
            nearest_point_a,
            nearest_point_b,
        })
    }

    fn slot_mut(&mut self, handle: MeshHandle) -> Result<&mut MeshSlot, RegistryError> {
        self.meshes
            .get_mut(handle.0)
            .ok_or(RegistryError::InvalidHandle)
    }
}

/// Builds a rigid placement from a row-major rotation matrix and a translation.
pub fn placement(rotation: &[Real; 9], translation: &[Real; 3]) -> Isometry<Real> {
    let rotation = Rotation::from_matrix_unchecked(Matrix::from_row_slice(rotation));
    let translation = Translation::new(translation[0], translation[1], translation[2]);
    Isometry::from_parts(translation, rotation)
}
