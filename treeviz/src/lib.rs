//! A headless engine for step-by-step tree visualizations.
//!
//! For playback utilities (step timing, transcripts), see the `treeviz-driver` crate.
//!
//! This crate focuses on the core state and algorithms behind classic tree
//! visualizers: plain binary / BST / AVL insertion and deletion, traversal
//! orders, a geometric layout pass, and a replayable step protocol describing
//! each observable change as it happens.
//!
//! It is UI-agnostic. A renderer layer is expected to provide:
//! - drawing (SVG/canvas/TUI) from a computed [`Layout`]
//! - input validation (the engine only ever sees well-formed values)
//! - timing (step sequences are inert data; a driver replays them against a
//!   caller-provided clock)
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod arena;
mod step;
mod tree;
mod types;

pub mod avl;
pub mod binary;
pub mod bst;
pub mod layout;
pub mod traversal;


pub use arena::{Node, NodeId, TreeArena};
pub use layout::{Layout, LayoutOptions};
pub use step::{Pace, Step, StepSequence, TreeOp};
pub use traversal::Traversal;
pub use tree::Tree;
pub use types::{Bounds, NodeValue, Point, TreeKind, TreeValue};
