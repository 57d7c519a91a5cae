use treeviz::{Step, StepSequence, Tree, TreeValue};

/// Applies an entire step sequence immediately, with no pauses.
///
/// Visits are skipped (there is nothing to highlight without a frame in
/// between); mutations are applied in order; the returned transcript holds
/// every log line, including the mutation messages. Useful for tests and
/// for "skip animation" paths in adapters.
pub fn replay<V: TreeValue>(tree: &mut Tree<V>, steps: StepSequence<V>) -> Vec<String> {
    let mut transcript = Vec::new();
    for step in steps {
        match step {
            Step::Log { message } => transcript.push(message),
            Step::Visit { .. } => {}
            Step::Apply { op, message } => {
                tree.apply(&op);
                transcript.push(message);
            }
        }
    }
    transcript
}
