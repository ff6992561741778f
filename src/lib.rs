/*!
tricoll
========

**tricoll** is a 3-dimensional collision-detection and distance-query
library for rigid triangle-mesh solids, written with the rust programming
language.

A mesh is built once through [`shape::TriMeshBuilder`], which compiles an
immutable bounding-volume hierarchy over the triangle soup. Queries then
combine the prebuilt hierarchy with a per-query rigid placement
([`math::Isometry`]) without ever mutating the shared geometry:

* [`query::intersection_test`] decides whether two placed meshes overlap.
* [`query::distance`] computes the minimum distance between two placed
  meshes, optionally with the pair of nearest points realizing it.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)]

#[macro_use]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod partitioning;
pub mod query;
pub mod registry;
pub mod shape;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Aliases for the mathematical types used throughout this crate.
pub mod math {
    pub use super::real::*;
    pub use na::{IsometryMatrix3, Matrix3, Point3, Rotation3, Translation3, UnitVector3, Vector3};

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The unit vector type.
    pub use UnitVector3 as UnitVector;

    /// The matrix type.
    pub use Matrix3 as Matrix;

    /// The rotation type.
    ///
    /// A matrix-backed rotation: orthonormality is the responsibility of
    /// whoever constructs it (see [`Rotation3::from_matrix_unchecked`]).
    pub use Rotation3 as Rotation;

    /// The rigid placement type: a rotation followed by a translation.
    pub use IsometryMatrix3 as Isometry;

    /// The translation type.
    pub use Translation3 as Translation;
}
