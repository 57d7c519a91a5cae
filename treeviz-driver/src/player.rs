use std::collections::VecDeque;

use treeviz::{NodeId, NodeValue, Pace, Step, StepSequence, Traversal, Tree, TreeValue};

/// A framework-neutral playback driver for step sequences.
///
/// The player owns a [`Tree`] and at most one in-flight sequence. Adapters
/// drive it by calling:
/// - an operation entry point ([`Player::insert`], [`Player::delete`], ...)
///   when the user asks for one
/// - [`Player::tick`] each frame/timer tick with the current clock
///
/// The player never sleeps; it only compares the caller-provided `now_ms`
/// against the due time of the next step. Between ticks the tree sits in
/// whatever state the last applied step produced; each step is atomic.
///
/// Starting an operation while another is in flight is refused (the
/// "operation requested while animation in progress" guard lives here, not
/// in the core).
#[derive(Clone, Debug)]
pub struct Player<V = NodeValue> {
    tree: Tree<V>,
    queue: VecDeque<Step<V>>,
    delay_ms: u64,
    next_due_ms: u64,
    active: Option<NodeId>,
    transcript: Vec<String>,
}

impl<V: TreeValue> Player<V> {
    /// Default base delay between steps.
    pub const DEFAULT_DELAY_MS: u64 = 400;

    pub fn new(tree: Tree<V>) -> Self {
        Self {
            tree,
            queue: VecDeque::new(),
            delay_ms: Self::DEFAULT_DELAY_MS,
            next_due_ms: 0,
            active: None,
            transcript: Vec::new(),
        }
    }

    pub fn with_delay_ms(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn tree(&self) -> &Tree<V> {
        &self.tree
    }

    /// Mutable access to the tree.
    ///
    /// Mutating mid-animation invalidates the in-flight sequence's node ids;
    /// only do this while [`Player::is_animating`] is `false`.
    pub fn tree_mut(&mut self) -> &mut Tree<V> {
        &mut self.tree
    }

    pub fn into_tree(self) -> Tree<V> {
        self.tree
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// Adjusts the base delay. Takes effect from the next applied step, so a
    /// speed slider works mid-animation.
    pub fn set_delay_ms(&mut self, delay_ms: u64) {
        self.delay_ms = delay_ms;
    }

    pub fn is_animating(&self) -> bool {
        !self.queue.is_empty()
    }

    /// The currently highlighted node, for render emphasis. Cleared when a
    /// sequence finishes or is canceled.
    pub fn active(&self) -> Option<NodeId> {
        self.active
    }

    /// Log lines emitted so far (the explanation-panel model).
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    pub fn clear_transcript(&mut self) {
        self.transcript.clear();
    }

    /// Abandons the rest of the in-flight sequence. Already-applied steps
    /// stay applied; there is no rollback.
    pub fn cancel(&mut self) {
        self.queue.clear();
        self.active = None;
    }

    /// Starts playing `steps`. The first step is due immediately (on the
    /// next [`Player::tick`] at or after `now_ms`).
    ///
    /// Returns `false`, ignoring the request, if a sequence is in flight.
    pub fn play(&mut self, steps: StepSequence<V>, now_ms: u64) -> bool {
        if self.is_animating() {
            return false;
        }
        self.queue = steps.into_steps().into();
        self.active = None;
        self.next_due_ms = now_ms;
        true
    }

    /// Builds and starts the insert animation for `value`.
    pub fn insert(&mut self, value: V, now_ms: u64) -> bool {
        if self.is_animating() {
            return false;
        }
        let steps = self.tree.insert_steps(value);
        self.play(steps, now_ms)
    }

    /// Builds and starts the delete animation for `value`.
    pub fn delete(&mut self, value: V, now_ms: u64) -> bool {
        if self.is_animating() {
            return false;
        }
        let steps = self.tree.delete_steps(value);
        self.play(steps, now_ms)
    }

    /// Builds and starts the search animation for `value`.
    pub fn search(&mut self, value: V, now_ms: u64) -> bool {
        if self.is_animating() {
            return false;
        }
        let steps = self.tree.search_steps(value);
        self.play(steps, now_ms)
    }

    /// Builds and starts a traversal animation.
    pub fn traverse(&mut self, order: Traversal, now_ms: u64) -> bool {
        if self.is_animating() {
            return false;
        }
        let steps = self.tree.traverse_steps(order);
        self.play(steps, now_ms)
    }

    /// Clears the tree and the transcript. Refused while animating.
    pub fn clear(&mut self) -> bool {
        if self.is_animating() {
            return false;
        }
        self.tree.clear();
        self.transcript.clear();
        self.active = None;
        true
    }

    /// Applies every step due at `now_ms` and returns how many were applied,
    /// so the caller knows whether to re-render.
    ///
    /// Zero-dwell steps (log lines) chain into the following step within a
    /// single tick; steps with a dwell stop the tick and set the next due
    /// time.
    pub fn tick(&mut self, now_ms: u64) -> usize {
        let mut applied = 0;
        while !self.queue.is_empty() && now_ms >= self.next_due_ms {
            let Some(step) = self.queue.pop_front() else {
                break;
            };
            let dwell = self.dwell_ms(&step);
            self.apply_step(step);
            applied += 1;
            self.next_due_ms = now_ms.saturating_add(dwell);
        }
        if applied > 0 && self.queue.is_empty() {
            // Sequence finished: the final render shows no highlight.
            self.active = None;
        }
        applied
    }

    fn dwell_ms(&self, step: &Step<V>) -> u64 {
        match step {
            Step::Log { .. } => 0,
            Step::Visit {
                pace: Pace::Quick, ..
            } => self.delay_ms / 2,
            Step::Visit {
                pace: Pace::Normal, ..
            } => self.delay_ms,
            Step::Apply { .. } => self.delay_ms,
        }
    }

    fn apply_step(&mut self, step: Step<V>) {
        match step {
            Step::Log { message } => self.transcript.push(message),
            Step::Visit { node, .. } => self.active = Some(node),
            Step::Apply { op, message } => {
                self.tree.apply(&op);
                self.transcript.push(message);
            }
        }
    }
}
