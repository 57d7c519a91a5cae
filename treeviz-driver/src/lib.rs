//! Playback utilities for the `treeviz` crate.
//!
//! The `treeviz` crate is UI-agnostic and focuses on the core tree state,
//! algorithms, and step production. This crate provides the small,
//! framework-neutral pieces a rendering adapter needs to animate them:
//!
//! - [`Player`]: owns a tree plus an in-flight step sequence and advances it
//!   from `tick(now_ms)` calls on the caller's clock
//! - [`replay`]: applies a whole sequence immediately (no pauses) for tests
//!   and "skip animation" paths
//!
//! This crate is intentionally framework-agnostic (no DOM/TUI bindings) and
//! never sleeps: all suspension lives in the caller's frame loop or timer.
#![forbid(unsafe_code)]

mod player;
mod replay;

#[cfg(test)]
mod tests;

pub use player::Player;
pub use replay::replay;
