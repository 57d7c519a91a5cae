//! Ordered binary-search-tree operations, no balancing.
//!
//! For every node, all values in the left subtree are strictly less and all
//! values in the right subtree strictly greater. Duplicate inserts are
//! rejected so that invariant holds on both sides of every node.

use core::cmp::Ordering;

use crate::arena::{NodeId, TreeArena};
use crate::TreeValue;

/// Inserts `value`, keeping the ordering invariant.
///
/// Returns `false` (and leaves the tree untouched) when the value is already
/// present.
pub fn insert<V: TreeValue>(arena: &mut TreeArena<V>, value: V) -> bool {
    let root = arena.root();
    let (new_root, inserted) = insert_at(arena, root, value);
    arena.set_root(Some(new_root));
    inserted
}

fn insert_at<V: TreeValue>(
    arena: &mut TreeArena<V>,
    link: Option<NodeId>,
    value: V,
) -> (NodeId, bool) {
    let Some(id) = link else {
        return (arena.alloc(value), true);
    };
    match value.cmp(&arena[id].value) {
        Ordering::Less => {
            let (child, inserted) = insert_at(arena, arena[id].left, value);
            arena[id].left = Some(child);
            (id, inserted)
        }
        Ordering::Greater => {
            let (child, inserted) = insert_at(arena, arena[id].right, value);
            arena[id].right = Some(child);
            (id, inserted)
        }
        Ordering::Equal => (id, false),
    }
}

/// Removes `value` if present; returns whether it was found.
///
/// A node with two children is removed by overwriting its value with the
/// minimum of its right subtree (the in-order successor) and deleting that
/// minimum from the right subtree. The node itself keeps its identity.
pub fn delete<V: TreeValue>(arena: &mut TreeArena<V>, value: V) -> bool {
    let root = arena.root();
    let (new_root, found) = delete_at(arena, root, value);
    arena.set_root(new_root);
    found
}

fn delete_at<V: TreeValue>(
    arena: &mut TreeArena<V>,
    link: Option<NodeId>,
    value: V,
) -> (Option<NodeId>, bool) {
    let Some(id) = link else {
        return (None, false);
    };
    match value.cmp(&arena[id].value) {
        Ordering::Less => {
            let (child, found) = delete_at(arena, arena[id].left, value);
            arena[id].left = child;
            (Some(id), found)
        }
        Ordering::Greater => {
            let (child, found) = delete_at(arena, arena[id].right, value);
            arena[id].right = child;
            (Some(id), found)
        }
        Ordering::Equal => {
            let node = arena[id];
            match (node.left, node.right) {
                (Some(_), Some(right)) => {
                    let successor = min_value(arena, right);
                    arena[id].value = successor;
                    let (child, _) = delete_at(arena, Some(right), successor);
                    arena[id].right = child;
                    (Some(id), true)
                }
                (None, other) | (other, None) => {
                    arena.free(id);
                    (other, true)
                }
            }
        }
    }
}

/// Minimum value in the subtree rooted at `id` (its leftmost node).
pub(crate) fn min_value<V: TreeValue>(arena: &TreeArena<V>, id: NodeId) -> V {
    let mut cur = id;
    while let Some(left) = arena[cur].left {
        cur = left;
    }
    arena[cur].value
}

/// The ordered comparison path from the root to `value`'s node, or to the
/// leaf where an insert would attach it. Mirrors the descent that
/// [`insert`]/[`delete`] take, so it can drive their animations.
pub fn search_path<V: TreeValue>(arena: &TreeArena<V>, value: V) -> Vec<NodeId> {
    let mut path = Vec::new();
    let mut cur = arena.root();
    while let Some(id) = cur {
        path.push(id);
        cur = match value.cmp(&arena[id].value) {
            Ordering::Less => arena[id].left,
            Ordering::Greater => arena[id].right,
            Ordering::Equal => break,
        };
    }
    path
}
