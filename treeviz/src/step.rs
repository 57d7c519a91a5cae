use crate::arena::NodeId;
use crate::NodeValue;

/// Dwell hint for a [`Step::Visit`].
///
/// Path-descent visits (insert/delete/search) use [`Pace::Quick`] so the
/// comparison walk reads as a sweep; traversal visits use [`Pace::Normal`].
/// The driver decides what each pace means in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Pace {
    Quick,
    Normal,
}

/// A pending structural change, described as data.
///
/// Ops are applied by the consumer via [`crate::Tree::apply`] at its own
/// pace; the producer never mutates the tree itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TreeOp<V = NodeValue> {
    Insert(V),
    Delete(V),
    Clear,
}

/// One observable change in an animated operation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Step<V = NodeValue> {
    /// A human-readable explanation line.
    Log { message: String },
    /// Marks `node` as the active one for render emphasis. No structural
    /// change.
    Visit { node: NodeId, pace: Pace },
    /// A pending mutation plus the log line to show once it is applied.
    Apply { op: TreeOp<V>, message: String },
}

impl<V> Step<V> {
    /// `true` for steps that change the tree when applied.
    pub fn is_mutation(&self) -> bool {
        matches!(self, Step::Apply { .. })
    }
}

/// An ordered, finite sequence of steps describing one operation.
///
/// Sequences are inert data: producing one never mutates the tree, and a
/// consumer replays it strictly in order. Producing a fresh sequence is how
/// an animation restarts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepSequence<V = NodeValue> {
    steps: Vec<Step<V>>,
}

impl<V> StepSequence<V> {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    pub(crate) fn push(&mut self, step: Step<V>) {
        self.steps.push(step);
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &[Step<V>] {
        &self.steps
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Step<V>> {
        self.steps.iter()
    }

    pub fn into_steps(self) -> Vec<Step<V>> {
        self.steps
    }
}

impl<V> IntoIterator for StepSequence<V> {
    type Item = Step<V>;
    type IntoIter = std::vec::IntoIter<Step<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

impl<'a, V> IntoIterator for &'a StepSequence<V> {
    type Item = &'a Step<V>;
    type IntoIter = core::slice::Iter<'a, Step<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
