//! Pure traversal producers over an already-built tree.
//!
//! Every call recomputes a fresh sequence, so a consumer can restart an
//! animation at any time. Nothing here mutates the arena.

use std::collections::VecDeque;

use crate::arena::{NodeId, TreeArena};

/// Visit order for [`walk`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Traversal {
    /// Left, self, right. Ascending value order for BST/AVL trees.
    InOrder,
    /// Self, left, right.
    PreOrder,
    /// Left, right, self.
    PostOrder,
    /// Breadth-first, via a FIFO queue seeded with the root.
    LevelOrder,
}

impl Traversal {
    /// Human-readable name, used in step-sequence headers.
    pub fn label(self) -> &'static str {
        match self {
            Traversal::InOrder => "In-order",
            Traversal::PreOrder => "Pre-order",
            Traversal::PostOrder => "Post-order",
            Traversal::LevelOrder => "Level-order",
        }
    }
}

/// Node ids in `order`, root-reachable nodes only. Empty for an empty tree.
pub fn walk<V>(arena: &TreeArena<V>, order: Traversal) -> Vec<NodeId> {
    let mut out = Vec::with_capacity(arena.len());
    let Some(root) = arena.root() else {
        return out;
    };
    match order {
        Traversal::InOrder => in_order(arena, Some(root), &mut out),
        Traversal::PreOrder => pre_order(arena, Some(root), &mut out),
        Traversal::PostOrder => post_order(arena, Some(root), &mut out),
        Traversal::LevelOrder => level_order(arena, root, &mut out),
    }
    out
}

fn in_order<V>(arena: &TreeArena<V>, link: Option<NodeId>, out: &mut Vec<NodeId>) {
    let Some(id) = link else { return };
    in_order(arena, arena[id].left, out);
    out.push(id);
    in_order(arena, arena[id].right, out);
}

fn pre_order<V>(arena: &TreeArena<V>, link: Option<NodeId>, out: &mut Vec<NodeId>) {
    let Some(id) = link else { return };
    out.push(id);
    pre_order(arena, arena[id].left, out);
    pre_order(arena, arena[id].right, out);
}

fn post_order<V>(arena: &TreeArena<V>, link: Option<NodeId>, out: &mut Vec<NodeId>) {
    let Some(id) = link else { return };
    post_order(arena, arena[id].left, out);
    post_order(arena, arena[id].right, out);
    out.push(id);
}

fn level_order<V>(arena: &TreeArena<V>, root: NodeId, out: &mut Vec<NodeId>) {
    let mut queue = VecDeque::from([root]);
    while let Some(id) = queue.pop_front() {
        out.push(id);
        if let Some(left) = arena[id].left {
            queue.push_back(left);
        }
        if let Some(right) = arena[id].right {
            queue.push_back(right);
        }
    }
}
