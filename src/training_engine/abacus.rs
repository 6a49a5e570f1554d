use crate::training_engine::error::EngineError;
use crate::training_engine::models::{AtomicStep, BeadState, StepKind};

/// One soroban column: a single five-bead above the bar and four unit beads
/// below it, holding `value = 5*upper + lower` with `lower` in 0..=4.
///
/// Every atomic operation either succeeds and mutates the state, or fails and
/// leaves it untouched. The `bool`-returning operations model the physical
/// legality of a bead move; only `set` can reject a value outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Digit {
    upper: bool,
    lower: u8,
}

impl Digit {
    /// A column holding `value`. Fails for values outside 0..=9.
    pub fn new(value: u8) -> Result<Self, EngineError> {
        let mut digit = Digit { upper: false, lower: 0 };
        digit.set(value)?;
        Ok(digit)
    }

    /// A cleared column (value 0).
    pub fn zero() -> Self {
        Digit { upper: false, lower: 0 }
    }

    pub fn value(&self) -> u8 {
        self.bead_state().value()
    }

    pub fn bead_state(&self) -> BeadState {
        BeadState { upper: self.upper, lower: self.lower }
    }

    /// Set the column to `value`, engaging the five-bead for values >= 5.
    pub fn set(&mut self, value: u8) -> Result<(), EngineError> {
        if value > 9 {
            return Err(EngineError::DigitOutOfRange(i32::from(value)));
        }
        self.upper = value >= 5;
        self.lower = value % 5;
        Ok(())
    }

    /// Raise one lower bead. At `lower == 4` the move promotes through the
    /// five-bead (4 -> 5). Fails only at 9.
    pub fn increment_one(&mut self) -> bool {
        if self.lower < 4 {
            self.lower += 1;
            return true;
        }
        if !self.upper {
            self.upper = true;
            self.lower = 0;
            return true;
        }
        false
    }

    /// Lower one lower bead. At `lower == 0` the move demotes through the
    /// five-bead (5 -> 4). Fails only at 0.
    pub fn decrement_one(&mut self) -> bool {
        if self.lower > 0 {
            self.lower -= 1;
            return true;
        }
        if self.upper {
            self.upper = false;
            self.lower = 4;
            return true;
        }
        false
    }

    /// Engage the five-bead. The bead moves as a whole, so this is legal only
    /// while it is disengaged.
    pub fn increment_five(&mut self) -> bool {
        if self.upper {
            return false;
        }
        self.upper = true;
        true
    }

    /// Release the five-bead. Legal only while it is engaged.
    pub fn decrement_five(&mut self) -> bool {
        if !self.upper {
            return false;
        }
        self.upper = false;
        true
    }

    /// Apply `increment_one` `n` times, stopping at the first refused step.
    /// On failure the digit keeps whatever intermediate state was reached;
    /// callers needing atomicity must snapshot first (`Digit` is `Copy`).
    pub fn increment_by(&mut self, n: u8) -> bool {
        for _ in 0..n {
            if !self.increment_one() {
                return false;
            }
        }
        true
    }

    /// Mirror of [`Digit::increment_by`].
    pub fn decrement_by(&mut self, n: u8) -> bool {
        for _ in 0..n {
            if !self.decrement_one() {
                return false;
            }
        }
        true
    }
}

/// An ordered row of [`Digit`] columns, index 0 most significant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Abacus {
    columns: Vec<Digit>,
}

impl Abacus {
    /// A frame of `columns` cleared digits.
    pub fn new(columns: usize) -> Self {
        Abacus { columns: vec![Digit::zero(); columns] }
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn digit(&self, column: usize) -> Option<&Digit> {
        self.columns.get(column)
    }

    /// Read the whole frame as a number by positional weighting.
    pub fn value(&self) -> u64 {
        self.columns
            .iter()
            .fold(0u64, |acc, digit| acc * 10 + u64::from(digit.value()))
    }

    /// Apply one atomic step, returning the targeted column's post-state.
    ///
    /// `UnknownColumn` for an out-of-range index, `IllegalMove` when the
    /// underlying bead operation refuses (the frame is left unchanged).
    pub fn apply_step(&mut self, step: AtomicStep) -> Result<BeadState, EngineError> {
        let columns = self.columns.len();
        let digit = self
            .columns
            .get_mut(step.column)
            .ok_or(EngineError::UnknownColumn { column: step.column, columns })?;

        let ok = match step.kind {
            StepKind::RaiseUpper => digit.increment_five(),
            StepKind::LowerUpper => digit.decrement_five(),
            StepKind::RaiseLower => digit.increment_one(),
            StepKind::LowerLower => digit.decrement_one(),
        };
        if !ok {
            return Err(EngineError::IllegalMove { kind: step.kind, column: step.column });
        }
        Ok(digit.bead_state())
    }
}
