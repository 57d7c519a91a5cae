//! Geometric layout: tree shape to 2D node coordinates.
//!
//! Layout is a pure function of the arena contents and the options; it holds
//! no state between calls and is recomputed from scratch whenever the tree
//! mutates. Tree semantics (binary/BST/AVL) are irrelevant here; only the
//! left/right shape matters.

use std::collections::HashMap;

use crate::arena::{NodeId, TreeArena};
use crate::types::{Bounds, Point};

/// Tunables for [`compute`].
///
/// The defaults spread siblings wide enough to avoid overlap on shallow
/// trees while the per-level decay keeps deep trees from growing without
/// bound.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutOptions {
    /// Horizontal offset between a node and its children at the root level,
    /// before spread scaling.
    pub base_gap: f32,
    /// Floor for the per-level gap decay.
    pub min_gap: f32,
    /// Vertical distance between consecutive levels.
    pub level_height: f32,
    /// y coordinate of the root node.
    pub root_y: f32,
    /// Margin added around the tight bounds to produce the canvas box.
    pub padding: f32,
    /// Per-level multiplier applied to the gap on the way down.
    pub gap_decay: f32,
    /// Divisor for the `sqrt(node_count)` spread scale.
    pub spread_divisor: f32,
    /// Upper clamp for the spread scale.
    pub max_spread: f32,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            base_gap: 200.0,
            min_gap: 90.0,
            level_height: 110.0,
            root_y: 40.0,
            padding: 120.0,
            gap_decay: 0.6,
            spread_divisor: 1.5,
            max_spread: 2.5,
        }
    }
}

impl LayoutOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_gap(mut self, base_gap: f32) -> Self {
        self.base_gap = base_gap;
        self
    }

    pub fn with_min_gap(mut self, min_gap: f32) -> Self {
        self.min_gap = min_gap;
        self
    }

    pub fn with_level_height(mut self, level_height: f32) -> Self {
        self.level_height = level_height;
        self
    }

    pub fn with_root_y(mut self, root_y: f32) -> Self {
        self.root_y = root_y;
        self
    }

    pub fn with_padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_gap_decay(mut self, gap_decay: f32) -> Self {
        self.gap_decay = gap_decay;
        self
    }

    pub fn with_spread(mut self, spread_divisor: f32, max_spread: f32) -> Self {
        self.spread_divisor = spread_divisor;
        self.max_spread = max_spread;
        self
    }
}

/// Computed positions for every reachable node, plus bounding boxes.
#[derive(Clone, Debug, Default)]
pub struct Layout {
    positions: HashMap<NodeId, Point>,
    bounds: Bounds,
    canvas: Bounds,
}

impl Layout {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn position(&self, id: NodeId) -> Option<Point> {
        self.positions.get(&id).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, Point)> + '_ {
        self.positions.iter().map(|(&id, &p)| (id, p))
    }

    /// Tight bounds over node centers. Horizontal midpoint is 0 after
    /// centering.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Tight bounds expanded by the configured padding: the extents a
    /// renderer should size its canvas/viewBox to.
    pub fn canvas(&self) -> Bounds {
        self.canvas
    }
}

/// Assigns coordinates to every node reachable from the root.
///
/// The root starts at `x = 0`; children are offset by a per-level gap that
/// decays geometrically with a floor. The starting gap is the base gap
/// scaled by `min(sqrt(node_count) / spread_divisor, max_spread)`. After
/// placement the whole tree is shifted so the horizontal midpoint of its
/// bounding box sits at `x = 0`.
pub fn compute<V>(arena: &TreeArena<V>, options: &LayoutOptions) -> Layout {
    let mut layout = Layout::default();
    let Some(root) = arena.root() else {
        return layout;
    };

    let spread = ((arena.len() as f32).sqrt() / options.spread_divisor).min(options.max_spread);
    ttrace!(nodes = arena.len(), spread, "layout");
    assign(
        arena,
        Some(root),
        0.0,
        options.root_y,
        options.base_gap * spread,
        options,
        &mut layout.positions,
    );

    let placed = bounds_over(layout.positions.values());
    let dx = -placed.center_x();
    for p in layout.positions.values_mut() {
        p.x += dx;
    }

    layout.bounds = bounds_over(layout.positions.values());
    layout.canvas = layout.bounds.expanded(options.padding);
    layout
}

fn assign<V>(
    arena: &TreeArena<V>,
    link: Option<NodeId>,
    x: f32,
    y: f32,
    gap: f32,
    options: &LayoutOptions,
    out: &mut HashMap<NodeId, Point>,
) {
    let Some(id) = link else { return };
    out.insert(id, Point { x, y });

    let next_gap = (gap * options.gap_decay).max(options.min_gap);
    let next_y = y + options.level_height;
    assign(arena, arena[id].left, x - next_gap, next_y, next_gap, options, out);
    assign(arena, arena[id].right, x + next_gap, next_y, next_gap, options, out);
}

fn bounds_over<'a>(points: impl Iterator<Item = &'a Point>) -> Bounds {
    let mut bounds: Option<Bounds> = None;
    for p in points {
        let b = bounds.get_or_insert(Bounds {
            min_x: p.x,
            max_x: p.x,
            min_y: p.y,
            max_y: p.y,
        });
        b.min_x = b.min_x.min(p.x);
        b.max_x = b.max_x.max(p.x);
        b.min_y = b.min_y.min(p.y);
        b.max_y = b.max_y.max(p.y);
    }
    bounds.unwrap_or_default()
}
