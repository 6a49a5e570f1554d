use std::fmt;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Atomic bead primitives
// ---------------------------------------------------------------------------

/// The four legal atomic bead transitions on one column.
///
/// `Display` prints the two-character wire codes (`U+`, `U-`, `L+`, `L-`)
/// used by the playback layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepKind {
    /// Engage the five-bead (+5). Legal only while it is disengaged.
    RaiseUpper,
    /// Release the five-bead (-5). Legal only while it is engaged.
    LowerUpper,
    /// Raise one lower bead (+1), promoting through the five-bead at 4.
    RaiseLower,
    /// Lower one lower bead (-1), demoting through the five-bead at 5.
    LowerLower,
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            StepKind::RaiseUpper => "U+",
            StepKind::LowerUpper => "U-",
            StepKind::RaiseLower => "L+",
            StepKind::LowerLower => "L-",
        };
        write!(f, "{}", code)
    }
}

/// One column's bead configuration: `value = 5*upper + lower`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeadState {
    pub upper: bool,
    /// Lower beads raised toward the bar, 0..=4.
    pub lower: u8,
}

impl BeadState {
    pub fn value(self) -> u8 {
        if self.upper { 5 + self.lower } else { self.lower }
    }
}

/// An atomic move aimed at one column. Carries no magnitude beyond its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtomicStep {
    pub column: usize,
    pub kind: StepKind,
}

/// An atomic step together with the bead state it produced — one frame of a
/// hardware-level animation trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompiledStep {
    pub column: usize,
    pub kind: StepKind,
    pub after: BeadState,
}

// ---------------------------------------------------------------------------
// Chain-level step types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sign {
    Plus,
    Minus,
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sign::Plus => write!(f, "+"),
            Sign::Minus => write!(f, "-"),
        }
    }
}

/// Which bead family a chain step moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepOrigin {
    /// Lower-bead move, magnitude 1..=4.
    Lower,
    /// Five-bead toggle, magnitude exactly 5.
    Upper,
}

/// One signed move in an exercise's instructional sequence.
///
/// Distinct from [`AtomicStep`]: a single chain step may expand into several
/// atomic bead moves when compiled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainStep {
    pub sign: Sign,
    pub magnitude: u8,
    pub origin: StepOrigin,
}

impl ChainStep {
    /// Build a step from a signed delta, tagging it with its bead origin.
    pub fn from_delta(delta: i32, origin: StepOrigin) -> Self {
        ChainStep {
            sign: if delta >= 0 { Sign::Plus } else { Sign::Minus },
            magnitude: delta.unsigned_abs() as u8,
            origin,
        }
    }

    pub fn delta(self) -> i32 {
        let magnitude = i32::from(self.magnitude);
        match self.sign {
            Sign::Plus => magnitude,
            Sign::Minus => -magnitude,
        }
    }

    /// Does this step move the five-bead?
    pub fn uses_upper_bead(self) -> bool {
        self.origin == StepOrigin::Upper || self.magnitude == 5
    }
}

impl fmt::Display for ChainStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.sign, self.magnitude)
    }
}

/// A signed delta aimed at one column — the compiler's input unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDelta {
    pub column: usize,
    pub delta: i32,
}

// ---------------------------------------------------------------------------
// Task request / response types
// ---------------------------------------------------------------------------

/// The two pedagogical exercise families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskMode {
    /// Lower beads only; every value stays in [0,4].
    Simple,
    /// Lower beads plus the five-bead toggle; answers stay in [0,5] while
    /// intermediate values may reach 9.
    SimpleWithFive,
}

impl fmt::Display for TaskMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskMode::Simple => write!(f, "simple"),
            TaskMode::SimpleWithFive => write!(f, "simple-with-five"),
        }
    }
}

/// How the surrounding UI should lay the chain out. Pure presentation hint;
/// carried through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayHint {
    /// Vertical list, one step per line.
    Column,
    /// Single inline expression ("3 +1 -2 = ?").
    Inline,
}

/// Inclusive value range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: i32,
    pub max: i32,
}

impl ValueRange {
    pub const fn new(min: i32, max: i32) -> Self {
        ValueRange { min, max }
    }

    pub fn contains(self, value: i32) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Per-mode constraint record. A tagged union so the toggle budget can never
/// leak into a lower-bead-only task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode")]
pub enum Constraints {
    #[serde(rename = "simple")]
    Simple { range: ValueRange },
    #[serde(rename = "simple-with-five")]
    WithFive {
        range: ValueRange,
        /// Maximum five-bead toggles across the whole chain.
        toggle_limit: u8,
    },
}

impl Constraints {
    pub fn range(self) -> ValueRange {
        match self {
            Constraints::Simple { range } => range,
            Constraints::WithFive { range, .. } => range,
        }
    }

    pub fn allows_upper(self) -> bool {
        matches!(self, Constraints::WithFive { .. })
    }

    /// Must the five-bead be toggled at least once during the chain?
    pub fn requires_upper_use(self) -> bool {
        matches!(self, Constraints::WithFive { .. })
    }

    pub fn toggle_limit(self) -> Option<u8> {
        match self {
            Constraints::Simple { .. } => None,
            Constraints::WithFive { toggle_limit, .. } => Some(toggle_limit),
        }
    }
}

/// A complete exercise. Immutable once produced; consumers do not re-validate
/// it, so the generator alone is responsible for the replay invariant
/// (replaying `chain` from `start` reaches exactly `answer` with every
/// intermediate value inside the mode's constraint).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub start: i32,
    pub chain: Vec<ChainStep>,
    pub answer: i32,
    pub constraints: Constraints,
    pub display: DisplayHint,
    /// Column-delta projection of `chain` (one delta per chain step, all
    /// aimed at the primary column). Ready to feed to the step compiler.
    pub operations: Vec<ColumnDelta>,
}

impl Task {
    pub fn mode(&self) -> TaskMode {
        match self.constraints {
            Constraints::Simple { .. } => TaskMode::Simple,
            Constraints::WithFive { .. } => TaskMode::SimpleWithFive,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskRequest {
    pub mode: TaskMode,
    /// Number of chain steps. Values below 1 are coerced up to 1.
    pub chain_length: usize,
    pub display: DisplayHint,
    /// Seed for reproducible generation; `None` draws from entropy.
    pub rng_seed: Option<u64>,
}

impl TaskRequest {
    /// Minimal constructor: one step, column layout, entropy RNG.
    pub fn new(mode: TaskMode) -> Self {
        TaskRequest {
            mode,
            chain_length: 1,
            display: DisplayHint::Column,
            rng_seed: None,
        }
    }
}
