//! Spatial partitioning tools.

pub use self::bvh::{Bvh, BvhNode, LeafPairs};

mod bvh;
