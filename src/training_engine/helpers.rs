//! Shared builders used by both exercise modes.
//!
//! Every mode assembles the same pieces: pick candidate deltas, project the
//! chosen chain onto column deltas, and replay the chain into a value trace.
//! These helpers centralise that work so the mode files hold only the
//! pedagogical rules.

use rand::Rng;

use crate::training_engine::models::{ChainStep, ColumnDelta, Constraints, DisplayHint, Task};

/// Generator exercises run on a single column; the compiler can still fan
/// the projected deltas out over wider frames.
pub const PRIMARY_COLUMN: usize = 0;

/// Hard ceiling on random-walk attempts before the deterministic fallback.
pub const MAX_ATTEMPTS: u32 = 5000;

/// Lower-bead magnitudes available to a single chain step.
pub const LOWER_STEPS: [i32; 4] = [1, 2, 3, 4];

/// Uniform pick from a non-empty slice.
pub fn random_item<R: Rng, T: Copy>(rng: &mut R, items: &[T]) -> T {
    items[rng.gen_range(0..items.len())]
}

/// Project a chain onto the compiler's input: one signed delta per step,
/// all aimed at `column`.
pub fn steps_to_operations(chain: &[ChainStep], column: usize) -> Vec<ColumnDelta> {
    chain
        .iter()
        .map(|step| ColumnDelta { column, delta: step.delta() })
        .collect()
}

/// Cumulative value trace: `start`, then one entry per chain step.
pub fn build_trace(start: i32, chain: &[ChainStep]) -> Vec<i32> {
    let mut trace = Vec::with_capacity(chain.len() + 1);
    let mut current = start;
    trace.push(current);
    for step in chain {
        current += step.delta();
        trace.push(current);
    }
    trace
}

/// Bundle a finished chain into a [`Task`], attaching the operations
/// projection. The last call in every mode generator.
pub fn assemble_task(
    start: i32,
    chain: Vec<ChainStep>,
    answer: i32,
    constraints: Constraints,
    display: DisplayHint,
) -> Task {
    let operations = steps_to_operations(&chain, PRIMARY_COLUMN);
    Task { start, chain, answer, constraints, display, operations }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::training_engine::models::StepOrigin;

    #[test]
    fn trace_accumulates_signed_deltas() {
        let chain = vec![
            ChainStep::from_delta(3, StepOrigin::Lower),
            ChainStep::from_delta(-2, StepOrigin::Lower),
            ChainStep::from_delta(5, StepOrigin::Upper),
        ];
        assert_eq!(build_trace(1, &chain), vec![1, 4, 2, 7]);
    }

    #[test]
    fn operations_mirror_the_chain_on_the_primary_column() {
        let chain = vec![
            ChainStep::from_delta(-4, StepOrigin::Lower),
            ChainStep::from_delta(5, StepOrigin::Upper),
        ];
        let ops = steps_to_operations(&chain, PRIMARY_COLUMN);
        assert_eq!(ops.len(), 2);
        assert!(ops.iter().all(|op| op.column == PRIMARY_COLUMN));
        assert_eq!(ops[0].delta, -4);
        assert_eq!(ops[1].delta, 5);
    }
}
