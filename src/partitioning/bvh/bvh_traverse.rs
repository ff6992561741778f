use super::{Bvh, BvhNode};
use smallvec::SmallVec;

const TRAVERSAL_STACK_SIZE: usize = 32;

impl Bvh {
    /// Performs a simultaneous traversal of the trees `self` and `other`, and yields
    /// the pairs of leaves it reached.
    ///
    /// Any node pair failing the given `check` is pruned, together with the whole
    /// pair of subtrees below it. When both nodes of a surviving pair are internal,
    /// the one with the larger bounding volume is expanded into its two children.
    pub fn leaf_pairs<'a, F: Fn(&BvhNode, &BvhNode) -> bool>(
        &'a self,
        other: &'a Self,
        check: F,
    ) -> LeafPairs<'a, F> {
        let next = match (self.root(), other.root()) {
            (Some(root1), Some(root2)) if check(root1, root2) => Some((root1, root2)),
            _ => None,
        };

        LeafPairs {
            tree1: self,
            tree2: other,
            next,
            stack: SmallVec::new(),
            check,
        }
    }
}

/// Iterator yielded by [`Bvh::leaf_pairs`].
pub struct LeafPairs<'a, Check: Fn(&BvhNode, &BvhNode) -> bool> {
    tree1: &'a Bvh,
    tree2: &'a Bvh,
    next: Option<(&'a BvhNode, &'a BvhNode)>,
    stack: SmallVec<[(&'a BvhNode, &'a BvhNode); TRAVERSAL_STACK_SIZE]>,
    check: Check,
}

impl<'a, Check: Fn(&BvhNode, &BvhNode) -> bool> LeafPairs<'a, Check> {
    fn push_pair(&mut self, node1: &'a BvhNode, node2: &'a BvhNode) {
        if (self.check)(node1, node2) {
            if self.next.is_none() {
                self.next = Some((node1, node2));
            } else {
                self.stack.push((node1, node2));
            }
        }
    }
}

impl<'a, Check: Fn(&BvhNode, &BvhNode) -> bool> Iterator for LeafPairs<'a, Check> {
    type Item = (u32, u32);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.next.is_none() {
                self.next = self.stack.pop();
            }

            let (node1, node2) = self.next.take()?;

            if node1.is_leaf() && node2.is_leaf() {
                return Some((node1.leaf_data(), node2.leaf_data()));
            }

            // Expand the internal node with the larger volume. Ties go to the first
            // tree.
            if !node1.is_leaf()
                && (node2.is_leaf() || node1.aabb().volume() >= node2.aabb().volume())
            {
                let (left, right) = self.tree1.children(node1);
                self.push_pair(left, node2);
                self.push_pair(right, node2);
            } else {
                let (left, right) = self.tree2.children(node2);
                self.push_pair(node1, left);
                self.push_pair(node1, right);
            }
        }
    }
}
