use thiserror::Error;

use crate::training_engine::models::StepKind;

/// Errors surfaced by the bead model and the step compiler.
///
/// `DigitOutOfRange` and `UnknownColumn` are caller bugs (invariant
/// violations). `IllegalMove` is a physical bead constraint refusing a step:
/// fatal in the compiler, where it means the delta sequence contradicts
/// itself, but inside the generator's random search the same refusal is an
/// expected pruning signal and never escapes. Search exhaustion is not an
/// error at all — the generator recovers with a deterministic fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("digit value {0} out of range 0..=9")]
    DigitOutOfRange(i32),

    #[error("unknown column {column} (abacus has {columns})")]
    UnknownColumn { column: usize, columns: usize },

    #[error("illegal move {kind} at column {column}")]
    IllegalMove { kind: StepKind, column: usize },
}
