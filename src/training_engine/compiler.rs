//! Compile arithmetic column deltas into atomic soroban bead moves.
//!
//! Each signed delta is decomposed greedily: five-bead toggles while the
//! remaining magnitude allows them, then unit moves for the rest. Every
//! emitted move is validated against a private [`Abacus`] so a malformed or
//! self-contradictory delta sequence fails fast instead of producing an
//! unplayable trace.

use crate::training_engine::abacus::Abacus;
use crate::training_engine::error::EngineError;
use crate::training_engine::models::{AtomicStep, ColumnDelta, CompiledStep, StepKind};

/// Expand `ops` into the full ordered atomic step sequence with post-states.
///
/// The run starts from a cleared frame of `columns` digits. Fails with
/// `UnknownColumn` for a delta aimed outside the frame and `IllegalMove` the
/// moment a decomposed step is physically impossible against the running
/// state — both indicate a caller bug, not a recoverable condition.
pub fn build_steps(
    ops: &[ColumnDelta],
    columns: usize,
) -> Result<Vec<CompiledStep>, EngineError> {
    fn push(
        model: &mut Abacus,
        steps: &mut Vec<CompiledStep>,
        column: usize,
        kind: StepKind,
    ) -> Result<(), EngineError> {
        let after = model.apply_step(AtomicStep { column, kind })?;
        steps.push(CompiledStep { column, kind, after });
        Ok(())
    }

    let mut model = Abacus::new(columns);
    let mut steps = Vec::new();

    for op in ops {
        let mut rest = op.delta.unsigned_abs();
        let positive = op.delta >= 0;

        while rest >= 5 {
            let kind = if positive { StepKind::RaiseUpper } else { StepKind::LowerUpper };
            push(&mut model, &mut steps, op.column, kind)?;
            rest -= 5;
        }
        while rest > 0 {
            let kind = if positive { StepKind::RaiseLower } else { StepKind::LowerLower };
            push(&mut model, &mut steps, op.column, kind)?;
            rest -= 1;
        }
    }

    Ok(steps)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn op(delta: i32) -> ColumnDelta {
        ColumnDelta { column: 0, delta }
    }

    #[test]
    fn plus_five_is_a_single_upper_toggle() {
        let steps = build_steps(&[op(5)], 1).unwrap();
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].kind, StepKind::RaiseUpper);
        assert!(steps[0].after.upper);
        assert_eq!(steps[0].after.lower, 0);
    }

    #[test]
    fn minus_nine_from_nine_is_one_upper_and_four_lower_moves() {
        let steps = build_steps(&[op(9), op(-9)], 1).unwrap();
        // 9 = U+ and four L+, then the mirror back down.
        let down: Vec<StepKind> = steps[5..].iter().map(|s| s.kind).collect();
        assert_eq!(steps.len(), 10);
        assert_eq!(
            down,
            vec![
                StepKind::LowerUpper,
                StepKind::LowerLower,
                StepKind::LowerLower,
                StepKind::LowerLower,
                StepKind::LowerLower,
            ]
        );
        assert_eq!(steps.last().unwrap().after.value(), 0);
    }

    #[test]
    fn replaying_emitted_steps_reproduces_the_net_value() {
        let ops = [op(1), op(4), op(-3)];
        let steps = build_steps(&ops, 1).unwrap();
        assert_eq!(steps.len(), 8, "one L+, four L+ (promoting at 4), three L-");

        let mut playback = Abacus::new(1);
        for step in &steps {
            let after = playback
                .apply_step(AtomicStep { column: step.column, kind: step.kind })
                .unwrap();
            assert_eq!(after, step.after, "recorded post-state must match replay");
        }
        assert_eq!(playback.value(), 2);
    }

    #[test]
    fn contradictory_deltas_fail_with_illegal_move() {
        let err = build_steps(&[op(-1)], 1).unwrap_err();
        assert_eq!(err, EngineError::IllegalMove { kind: StepKind::LowerLower, column: 0 });

        // +5 twice in a row: the five-bead is already engaged.
        let err = build_steps(&[op(5), op(5)], 1).unwrap_err();
        assert_eq!(err, EngineError::IllegalMove { kind: StepKind::RaiseUpper, column: 0 });
    }

    #[test]
    fn deltas_outside_the_frame_fail_with_unknown_column() {
        let err = build_steps(&[ColumnDelta { column: 2, delta: 1 }], 2).unwrap_err();
        assert_eq!(err, EngineError::UnknownColumn { column: 2, columns: 2 });
    }

    #[test]
    fn multi_column_deltas_keep_their_order_and_targets() {
        let ops = [
            ColumnDelta { column: 0, delta: 7 },
            ColumnDelta { column: 1, delta: 3 },
        ];
        let steps = build_steps(&ops, 2).unwrap();
        assert_eq!(steps.len(), 6);
        assert!(steps[..3].iter().all(|s| s.column == 0));
        assert!(steps[3..].iter().all(|s| s.column == 1));

        let mut playback = Abacus::new(2);
        for step in &steps {
            playback
                .apply_step(AtomicStep { column: step.column, kind: step.kind })
                .unwrap();
        }
        assert_eq!(playback.value(), 73);
    }
}
