pub use bvh_traverse::LeafPairs;
pub use bvh_tree::{Bvh, BvhNode};

mod bvh_build;
mod bvh_traverse;
mod bvh_tree;
