//! Unbalanced binary search tree of districts, keyed by district id.
//!
//! Nothing here recurses per level: entering districts in ascending order gives a chain
//! as deep as the number of districts, and every operation has to survive that.

use crate::models::district::District;
use crate::models::person::DistrictId;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A node owns its district and both child subtrees.
#[derive(Serialize, Deserialize)]
pub struct TreeNode {
    district: District,
    left: Option<Box<TreeNode>>,
    right: Option<Box<TreeNode>>,
}

impl TreeNode {
    fn new(district: District) -> Self {
        Self {
            district,
            left: None,
            right: None,
        }
    }

    pub fn district(&self) -> &District {
        &self.district
    }

    /// Subtree of districts with smaller ids.
    pub fn left(&self) -> Option<&TreeNode> {
        self.left.as_deref()
    }

    /// Subtree of districts with larger ids.
    pub fn right(&self) -> Option<&TreeNode> {
        self.right.as_deref()
    }
}

impl std::fmt::Debug for TreeNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TreeNode")
            .field("district", &self.district)
            .field("left", &self.left().map(|n| n.district.id()))
            .field("right", &self.right().map(|n| n.district.id()))
            .finish()
    }
}

/// The districts still in the game.
#[derive(Default, Serialize, Deserialize)]
pub struct DistrictTree {
    root: Option<Box<TreeNode>>,
}

impl DistrictTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(&self) -> Option<&TreeNode> {
        self.root.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn len(&self) -> usize {
        self.preorder().count()
    }

    /// Insert a district as a new leaf. Returns false (and drops nothing from the tree)
    /// if a district with the same id is already present.
    pub fn insert(&mut self, district: District) -> bool {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            match district.id().cmp(&node.district.id()) {
                Ordering::Less => slot = &mut node.left,
                Ordering::Greater => slot = &mut node.right,
                Ordering::Equal => return false,
            }
        }
        *slot = Some(Box::new(TreeNode::new(district)));
        true
    }

    pub fn find(&self, id: DistrictId) -> Option<&District> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            match id.cmp(&node.district.id()) {
                Ordering::Equal => return Some(&node.district),
                Ordering::Less => current = node.left.as_deref(),
                Ordering::Greater => current = node.right.as_deref(),
            }
        }
        None
    }

    pub fn find_mut(&mut self, id: DistrictId) -> Option<&mut District> {
        let mut current = self.root.as_deref_mut();
        while let Some(node) = current {
            match id.cmp(&node.district.id()) {
                Ordering::Equal => return Some(&mut node.district),
                Ordering::Less => current = node.left.as_deref_mut(),
                Ordering::Greater => current = node.right.as_deref_mut(),
            }
        }
        None
    }

    pub fn contains(&self, id: DistrictId) -> bool {
        self.find(id).is_some()
    }

    /// Remove the district with `id`, returning it. Absent ids leave the tree untouched.
    ///
    /// A node with two children keeps its position in the tree: it takes over the
    /// district of its in-order successor, which is unlinked instead.
    pub fn remove(&mut self, id: DistrictId) -> Option<District> {
        let mut slot = &mut self.root;
        loop {
            let current = slot.as_deref()?.district.id();
            match id.cmp(&current) {
                Ordering::Equal => break,
                Ordering::Less => slot = &mut slot.as_mut()?.left,
                Ordering::Greater => slot = &mut slot.as_mut()?.right,
            }
        }

        let node = slot.as_deref_mut()?;
        if node.left.is_some() && node.right.is_some() {
            // Successor: leftmost node of the right subtree. Its right child takes its place.
            let mut successor_slot = &mut node.right;
            while successor_slot.as_ref().is_some_and(|n| n.left.is_some()) {
                successor_slot = &mut successor_slot.as_mut()?.left;
            }
            let successor = successor_slot.take()?;
            let TreeNode {
                district, right, ..
            } = *successor;
            *successor_slot = right;
            return Some(std::mem::replace(&mut node.district, district));
        }

        // Leaf or single child: the child (if any) takes the node's place.
        let target = slot.take()?;
        let TreeNode {
            district,
            left,
            right,
        } = *target;
        *slot = left.or(right);
        Some(district)
    }

    /// Stack-based pre-order walk: node, then left subtree, then right subtree.
    pub fn preorder(&self) -> Preorder<'_> {
        Preorder {
            stack: self.root.as_deref().into_iter().collect(),
        }
    }

    /// Districts in pre-order (the order duel selection visits them).
    pub fn districts(&self) -> impl Iterator<Item = &District> {
        self.preorder().map(TreeNode::district)
    }

    /// All ids in ascending (in-order) order.
    pub fn ids(&self) -> Vec<DistrictId> {
        let mut ids = Vec::new();
        let mut stack: Vec<&TreeNode> = Vec::new();
        let mut current = self.root();
        loop {
            while let Some(node) = current {
                stack.push(node);
                current = node.left();
            }
            let Some(node) = stack.pop() else {
                break;
            };
            ids.push(node.district.id());
            current = node.right();
        }
        ids
    }
}

impl Drop for DistrictTree {
    fn drop(&mut self) {
        // Detach children before each node is freed so no drop recurses down a long chain.
        let mut pending: Vec<Box<TreeNode>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl Clone for DistrictTree {
    fn clone(&self) -> Self {
        // Node, right, left order lists every parent before its children. Walking it
        // backwards builds children first, leaving the right clone on top of the left one.
        let mut order = Vec::new();
        let mut stack: Vec<&TreeNode> = self.root().into_iter().collect();
        while let Some(node) = stack.pop() {
            order.push(node);
            stack.extend(node.left());
            stack.extend(node.right());
        }

        let mut built: Vec<Box<TreeNode>> = Vec::new();
        for node in order.into_iter().rev() {
            let right = node.right.as_ref().and_then(|_| built.pop());
            let left = node.left.as_ref().and_then(|_| built.pop());
            built.push(Box::new(TreeNode {
                district: node.district.clone(),
                left,
                right,
            }));
        }
        Self { root: built.pop() }
    }
}

/// Ids are unique, so equal pre-order district sequences mean equal tree shapes.
impl PartialEq for DistrictTree {
    fn eq(&self, other: &Self) -> bool {
        self.districts().eq(other.districts())
    }
}

impl Eq for DistrictTree {}

impl std::fmt::Debug for DistrictTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.preorder()).finish()
    }
}

/// Iterator returned by [`DistrictTree::preorder`].
pub struct Preorder<'a> {
    stack: Vec<&'a TreeNode>,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes on the stack first so the left subtree is visited first.
        if let Some(right) = node.right.as_deref() {
            self.stack.push(right);
        }
        if let Some(left) = node.left.as_deref() {
            self.stack.push(left);
        }
        Some(node)
    }
}
