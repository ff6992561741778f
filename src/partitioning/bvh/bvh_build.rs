use super::{Bvh, BvhNode};
use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::math::{Point, Real};
use ordered_float::OrderedFloat;

impl Bvh {
    /// Builds a tree over the given leaf bounding volumes.
    ///
    /// The leaf associated to `leaves[i]` stores the index `i`. The build is a
    /// top-down recursive partition: each node splits its leaf set at the median
    /// center along the axis where the centers spread the most. Ties are broken by
    /// leaf index so the resulting tree is fully deterministic, and both halves of a
    /// split are always non-empty.
    pub fn from_leaf_aabbs(leaves: &[Aabb]) -> Self {
        if leaves.is_empty() {
            return Self { nodes: Vec::new() };
        }

        let centers: Vec<Point<Real>> = leaves.iter().map(|aabb| aabb.center()).collect();
        let mut indices: Vec<u32> = (0..leaves.len() as u32).collect();

        let mut nodes = Vec::with_capacity(leaves.len() * 2 - 1);
        nodes.push(BvhNode::zeros());
        Self::build_node(&mut nodes, 0, &mut indices, leaves, &centers);

        Self { nodes }
    }

    fn build_node(
        nodes: &mut Vec<BvhNode>,
        id: usize,
        indices: &mut [u32],
        leaves: &[Aabb],
        centers: &[Point<Real>],
    ) {
        if indices.len() == 1 {
            let leaf = indices[0];
            nodes[id] = BvhNode::leaf(leaves[leaf as usize], leaf);
            return;
        }

        // Split along the axis where the leaf centers spread the most.
        let mut centers_aabb = Aabb::new_invalid();
        for i in indices.iter() {
            centers_aabb.take_point(centers[*i as usize]);
        }
        let axis = centers_aabb.extents().imax();

        if centers_aabb.extents()[axis] == 0.0 {
            // Every center coincides; the sorted median below degenerates into a
            // balanced half-split by leaf index.
            log::debug!(
                "bvh build: {} leaves share the same center, splitting by index",
                indices.len()
            );
        }

        indices.sort_unstable_by_key(|&i| (OrderedFloat(centers[i as usize][axis]), i));
        let mid = indices.len() / 2;
        let (left_indices, right_indices) = indices.split_at_mut(mid);

        let left_id = nodes.len();
        nodes.push(BvhNode::zeros());
        nodes.push(BvhNode::zeros());

        Self::build_node(nodes, left_id, left_indices, leaves, centers);
        Self::build_node(nodes, left_id + 1, right_indices, leaves, centers);

        let left = nodes[left_id];
        let right = nodes[left_id + 1];
        nodes[id] = BvhNode {
            aabb: left.aabb.merged(&right.aabb),
            children: left_id as u32,
            leaf_count: left.leaf_count + right.leaf_count,
        };
    }
}
