//! Implementation details of the `distance` function.

pub use self::distance::{distance, distance_with_request};
pub use self::distance_trimesh_trimesh::{
    distance_trimesh_trimesh, DistanceRequest, DistanceResult,
};

mod distance;
mod distance_trimesh_trimesh;
