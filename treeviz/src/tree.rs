use crate::arena::{NodeId, TreeArena};
use crate::step::{Pace, Step, StepSequence, TreeOp};
use crate::traversal::Traversal;
use crate::types::TreeKind;
use crate::{avl, binary, bst, traversal, NodeValue, TreeValue};

/// A headless tree visualization engine.
///
/// This type is intentionally UI-agnostic:
/// - It holds only the logical tree (an arena plus a [`TreeKind`] tag).
/// - Mutations go through the kind's algorithm set; the kind is caller
///   configuration, not something derivable from the structure.
/// - Animated operations are exposed as pure step producers: they read the
///   tree, never mutate it, and return a [`StepSequence`] for a driver to
///   replay (see the `treeviz-driver` crate).
///
/// The engine is single-threaded and non-suspending. Callers must not start
/// a new operation while a previously produced sequence is still being
/// applied; that guard belongs to the driving layer.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tree<V = NodeValue> {
    arena: TreeArena<V>,
    kind: TreeKind,
}

impl<V: TreeValue> Tree<V> {
    pub fn new(kind: TreeKind) -> Self {
        Self {
            arena: TreeArena::new(),
            kind,
        }
    }

    pub fn kind(&self) -> TreeKind {
        self.kind
    }

    /// Switches the operation set. This clears the tree: a shape built under
    /// one discipline is generally invalid under another.
    pub fn set_kind(&mut self, kind: TreeKind) {
        if self.kind == kind {
            return;
        }
        tdebug!(?kind, "set_kind");
        self.kind = kind;
        self.arena.clear();
    }

    /// Discards every node.
    pub fn clear(&mut self) {
        self.arena.clear();
    }

    pub fn arena(&self) -> &TreeArena<V> {
        &self.arena
    }

    pub fn root(&self) -> Option<NodeId> {
        self.arena.root()
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn value(&self, id: NodeId) -> Option<V> {
        self.arena.get(id).map(|n| n.value)
    }

    pub fn left(&self, id: NodeId) -> Option<NodeId> {
        self.arena.get(id).and_then(|n| n.left)
    }

    pub fn right(&self, id: NodeId) -> Option<NodeId> {
        self.arena.get(id).and_then(|n| n.right)
    }

    /// Stored height of `id`, 0 for a stale id. Only meaningful in AVL mode.
    pub fn height(&self, id: NodeId) -> u32 {
        self.arena.get(id).map_or(0, |n| n.height)
    }

    /// `height(left) - height(right)` for `id`; the `bf=` badge renderers
    /// show next to AVL nodes.
    pub fn balance_factor(&self, id: NodeId) -> i32 {
        if self.arena.get(id).is_none() {
            return 0;
        }
        avl::balance_factor(&self.arena, id)
    }

    pub fn contains(&self, value: V) -> bool {
        match self.kind {
            // No ordering to exploit; scan.
            TreeKind::Binary => self.arena.ids().any(|id| self.arena[id].value == value),
            TreeKind::Bst | TreeKind::Avl => {
                let path = bst::search_path(&self.arena, value);
                path.last().is_some_and(|&id| self.arena[id].value == value)
            }
        }
    }

    /// Inserts immediately, without producing animation steps.
    ///
    /// Returns `true` when a node was created. Under BST/AVL a duplicate is
    /// rejected; under plain-binary insertion always succeeds.
    pub fn insert_now(&mut self, value: V) -> bool {
        tdebug!(value = %value, kind = ?self.kind, "insert");
        match self.kind {
            TreeKind::Binary => {
                binary::insert(&mut self.arena, value);
                true
            }
            TreeKind::Bst => bst::insert(&mut self.arena, value),
            TreeKind::Avl => avl::insert(&mut self.arena, value),
        }
    }

    /// Deletes immediately, without producing animation steps.
    ///
    /// Returns whether a matching value was found and removed. Plain-binary
    /// trees do not support deletion; the call reports `false` and leaves
    /// the tree untouched.
    pub fn delete_now(&mut self, value: V) -> bool {
        tdebug!(value = %value, kind = ?self.kind, "delete");
        match self.kind {
            TreeKind::Binary => false,
            TreeKind::Bst => bst::delete(&mut self.arena, value),
            TreeKind::Avl => avl::delete(&mut self.arena, value),
        }
    }

    /// Applies a [`TreeOp`] produced by a step sequence.
    ///
    /// Returns `true` when the tree changed.
    pub fn apply(&mut self, op: &TreeOp<V>) -> bool {
        match op {
            TreeOp::Insert(value) => self.insert_now(*value),
            TreeOp::Delete(value) => self.delete_now(*value),
            TreeOp::Clear => {
                let changed = !self.is_empty();
                self.clear();
                changed
            }
        }
    }

    /// The comparison path an insert or delete of `value` would walk, from
    /// the root to the match or the insertion point.
    ///
    /// Plain-binary insertion compares nothing, so its path is just the root.
    pub fn search_path(&self, value: V) -> Vec<NodeId> {
        match self.kind {
            TreeKind::Binary => self.root().into_iter().collect(),
            TreeKind::Bst | TreeKind::Avl => bst::search_path(&self.arena, value),
        }
    }

    /// Node ids in traversal order. Recomputed fresh on every call.
    pub fn traversal(&self, order: Traversal) -> Vec<NodeId> {
        traversal::walk(&self.arena, order)
    }

    /// All values, in in-order sequence (ascending for BST/AVL).
    pub fn values_in_order(&self) -> Vec<V> {
        self.traversal(Traversal::InOrder)
            .into_iter()
            .map(|id| self.arena[id].value)
            .collect()
    }

    /// Builds the animated insert sequence: a quick sweep down the
    /// comparison path, then the pending mutation (or a log line when the
    /// value is already present and the insert would be a no-op).
    pub fn insert_steps(&self, value: V) -> StepSequence<V> {
        let mut steps = StepSequence::new();
        let path = self.search_path(value);
        let duplicate = self.kind != TreeKind::Binary
            && path.last().is_some_and(|&id| self.arena[id].value == value);
        for id in path {
            steps.push(Step::Visit {
                node: id,
                pace: Pace::Quick,
            });
        }
        if duplicate {
            steps.push(Step::Log {
                message: format!("Value {value} is already in the tree"),
            });
            return steps;
        }
        steps.push(Step::Apply {
            op: TreeOp::Insert(value),
            message: format!("Inserted {value}"),
        });
        steps
    }

    /// Builds the animated delete sequence: the comparison path, then the
    /// pending deletion, or a "not found" log line.
    pub fn delete_steps(&self, value: V) -> StepSequence<V> {
        let mut steps = StepSequence::new();
        if self.kind == TreeKind::Binary {
            steps.push(Step::Log {
                message: "Binary tree delete is not supported".to_owned(),
            });
            return steps;
        }
        let path = bst::search_path(&self.arena, value);
        let found = path.last().is_some_and(|&id| self.arena[id].value == value);
        for id in path {
            steps.push(Step::Visit {
                node: id,
                pace: Pace::Quick,
            });
        }
        if found {
            steps.push(Step::Apply {
                op: TreeOp::Delete(value),
                message: format!("Deleted {value}"),
            });
        } else {
            steps.push(Step::Log {
                message: format!("Value {value} not found"),
            });
        }
        steps
    }

    /// Builds the animated search sequence: the comparison path, then a
    /// found / not-found log line. No mutation.
    pub fn search_steps(&self, value: V) -> StepSequence<V> {
        let mut steps = StepSequence::new();
        let path = self.search_path(value);
        let found = self.kind != TreeKind::Binary
            && path.last().is_some_and(|&id| self.arena[id].value == value);
        for id in path {
            steps.push(Step::Visit {
                node: id,
                pace: Pace::Quick,
            });
        }
        steps.push(Step::Log {
            message: if found {
                format!("Found {value}")
            } else {
                format!("Value {value} not found")
            },
        });
        steps
    }

    /// Builds the animated traversal sequence: a header line, then one log
    /// line plus one highlight per visited node.
    ///
    /// The log line precedes its visit so a driver that chains zero-dwell
    /// steps shows both on the same frame. An empty tree yields an empty
    /// sequence.
    pub fn traverse_steps(&self, order: Traversal) -> StepSequence<V> {
        let mut steps = StepSequence::new();
        if self.is_empty() {
            return steps;
        }
        steps.push(Step::Log {
            message: format!("{} traversal:", order.label()),
        });
        for id in self.traversal(order) {
            steps.push(Step::Log {
                message: self.arena[id].value.to_string(),
            });
            steps.push(Step::Visit {
                node: id,
                pace: Pace::Normal,
            });
        }
        steps
    }
}
