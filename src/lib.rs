//! # soroban_drill_gen
//!
//! A fully offline, deterministic soroban (abacus) training engine.
//!
//! This library models the bead state of a column-based counting frame and
//! generates bounded, pedagogically-constrained exercises: a starting value,
//! a chain of signed moves a learner tracks mentally, and the final answer.
//!
//! ## How it works
//!
//! 1. Create a [`TaskRequest`] with a mode, chain length, display hint, and
//!    optional RNG seed.
//! 2. Call [`generate_task`] — the engine runs a constrained random walk
//!    over the legal bead-move space of the requested mode, retrying up to a
//!    fixed attempt ceiling and falling back to a known-good deterministic
//!    chain, so it always returns a valid [`Task`].
//! 3. Replay the task with [`replay_task`] for the value trace, compile its
//!    operations with [`build_steps`] for a bead-level animation trace, and
//!    build a multiple-choice set with [`generate_answer_options`].
//!
//! ## Key features
//!
//! - **Deterministic**: pass `rng_seed: Some(u64)` to reproduce the exact
//!   same exercise every time — useful for tests and progress tracking.
//! - **Two modes**: [`TaskMode::Simple`] keeps every value in [0,4] using
//!   lower beads only; [`TaskMode::SimpleWithFive`] requires the five-bead
//!   at least once and keeps answers in [0,5].
//! - **Total generation**: `generate_task` never fails — search exhaustion
//!   is recovered internally via the deterministic fallback.
//!
//! ## Quick start
//!
//! ```rust
//! use soroban_drill_gen::{
//!     build_steps, generate_task, replay_task, ColumnDelta, DisplayHint, StepKind,
//!     TaskMode, TaskRequest,
//! };
//!
//! // Minimal — only the mode is required (defaults: 1 step, column, entropy):
//! let task = generate_task(TaskRequest::new(TaskMode::Simple));
//! println!("start {} answer {}", task.start, task.answer);
//!
//! // Full control — set every field:
//! let task = generate_task(TaskRequest {
//!     mode: TaskMode::SimpleWithFive,
//!     chain_length: 4,
//!     display: DisplayHint::Inline,
//!     rng_seed: Some(42),
//! });
//!
//! // Value trace for UI playback (length chain + 1):
//! let trace = replay_task(&task);
//! assert_eq!(trace.len(), task.chain.len() + 1);
//!
//! // Bead-level animation trace: +5 from a cleared column is one U+ toggle.
//! let steps = build_steps(&[ColumnDelta { column: 0, delta: 5 }], 1).unwrap();
//! assert_eq!(steps.len(), 1);
//! assert_eq!(steps[0].kind, StepKind::RaiseUpper);
//! ```

pub mod training_engine;
pub mod view_adapter;

// Convenience re-exports so callers can use `soroban_drill_gen::generate_task`
// directly without reaching into `training_engine::`.
pub use training_engine::{
    build_steps, generate_answer_options, generate_answer_options_with, generate_task,
    generate_task_with, replay_task, Abacus, AnswerRecord, AtomicStep, BeadState, ChainStep,
    ColumnDelta, CompiledStep, Constraints, Digit, DisplayHint, EngineError, SessionSummary,
    SessionTracker, Sign, StepKind, StepOrigin, Task, TaskMode, TaskRequest, ValueRange,
};
pub use view_adapter::to_view_playback;
