//! Self-balancing (AVL) operations.
//!
//! Same comparison discipline as [`crate::bst`], plus height bookkeeping and
//! rotation-based rebalancing on the way back up after every mutation.
//! Heights are recomputed child-first, parent-second, so a parent never
//! reads a stale child height.

use core::cmp::Ordering;

use crate::arena::{NodeId, TreeArena};
use crate::TreeValue;

/// Height of an optional subtree link: 0 when absent, else the stored height.
pub fn height<V: TreeValue>(arena: &TreeArena<V>, link: Option<NodeId>) -> u32 {
    link.map_or(0, |id| arena[id].height)
}

/// `height(left) - height(right)`. In a consistent AVL tree this is always
/// in `[-1, 1]` between mutations.
pub fn balance_factor<V: TreeValue>(arena: &TreeArena<V>, id: NodeId) -> i32 {
    let node = &arena[id];
    height(arena, node.left) as i32 - height(arena, node.right) as i32
}

fn update_height<V: TreeValue>(arena: &mut TreeArena<V>, id: NodeId) {
    let (left, right) = (arena[id].left, arena[id].right);
    arena[id].height = 1 + height(arena, left).max(height(arena, right));
}

/// Right rotation around `y`: `y.left` becomes the subtree root.
fn rotate_right<V: TreeValue>(arena: &mut TreeArena<V>, y: NodeId) -> NodeId {
    let Some(x) = arena[y].left else {
        debug_assert!(false, "rotate_right on a node without a left child");
        return y;
    };
    arena[y].left = arena[x].right;
    arena[x].right = Some(y);
    update_height(arena, y);
    update_height(arena, x);
    x
}

/// Left rotation around `x`: `x.right` becomes the subtree root.
fn rotate_left<V: TreeValue>(arena: &mut TreeArena<V>, x: NodeId) -> NodeId {
    let Some(y) = arena[x].right else {
        debug_assert!(false, "rotate_left on a node without a right child");
        return x;
    };
    arena[x].right = arena[y].left;
    arena[y].left = Some(x);
    update_height(arena, x);
    update_height(arena, y);
    y
}

/// The single rebalancing decision table, applied once per ancestor after a
/// mutation. Returns the (possibly new) subtree root.
///
/// A left-heavy node whose left child leans right gets a left-right double
/// rotation; mirrored for the right-heavy case; otherwise one rotation, or
/// none when the factor is already within `[-1, 1]`.
fn rebalance<V: TreeValue>(arena: &mut TreeArena<V>, id: NodeId) -> NodeId {
    let bf = balance_factor(arena, id);
    if bf > 1 {
        if let Some(left) = arena[id].left {
            if balance_factor(arena, left) < 0 {
                arena[id].left = Some(rotate_left(arena, left));
            }
        }
        return rotate_right(arena, id);
    }
    if bf < -1 {
        if let Some(right) = arena[id].right {
            if balance_factor(arena, right) > 0 {
                arena[id].right = Some(rotate_right(arena, right));
            }
        }
        return rotate_left(arena, id);
    }
    id
}

/// BST insert plus bottom-up rebalancing along the descent path.
///
/// Duplicate values are a no-op: returns `false` and the tree is unchanged.
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
    let inserted = match value.cmp(&arena[id].value) {
        Ordering::Less => {
            let (child, inserted) = insert_at(arena, arena[id].left, value);
            arena[id].left = Some(child);
            inserted
        }
        Ordering::Greater => {
            let (child, inserted) = insert_at(arena, arena[id].right, value);
            arena[id].right = Some(child);
            inserted
        }
        Ordering::Equal => return (id, false),
    };
    if !inserted {
        // Nothing below changed; heights are already consistent.
        return (id, false);
    }
    update_height(arena, id);
    (rebalance(arena, id), true)
}

/// BST successor-copy deletion plus bottom-up rebalancing along the path of
/// nodes actually mutated. Returns whether the value was present.
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
    let found = match value.cmp(&arena[id].value) {
        Ordering::Less => {
            let (child, found) = delete_at(arena, arena[id].left, value);
            arena[id].left = child;
            found
        }
        Ordering::Greater => {
            let (child, found) = delete_at(arena, arena[id].right, value);
            arena[id].right = child;
            found
        }
        Ordering::Equal => {
            let node = arena[id];
            match (node.left, node.right) {
                (Some(_), Some(right)) => {
                    let successor = crate::bst::min_value(arena, right);
                    arena[id].value = successor;
                    let (child, _) = delete_at(arena, Some(right), successor);
                    arena[id].right = child;
                    true
                }
                (None, other) | (other, None) => {
                    // The replacement subtree is untouched; ancestors still
                    // rebalance on the way up.
                    arena.free(id);
                    return (other, true);
                }
            }
        }
    };
    if !found {
        return (Some(id), false);
    }
    update_height(arena, id);
    (Some(rebalance(arena, id)), true)
}
