//! Core training engine — bead state machine, step compiler, and the
//! constrained exercise generator.
//!
//! ## Module overview
//!
//! | Module     | Purpose |
//! |------------|---------|
//! | `models`   | All shared types: steps, constraints, request/task structs |
//! | `error`    | `EngineError` — invariant violations and illegal bead moves |
//! | `abacus`   | `Digit` and `Abacus`: legality-checked bead transitions |
//! | `compiler` | `build_steps()` — column deltas to an atomic move trace |
//! | `helpers`  | Shared chain/trace/operations builders used by both modes |
//! | `generator`| Single entry point `generate_task()` plus `replay_task()` |
//! | `modes`    | The two exercise families (lower-only, with-five) |
//! | `options`  | Multiple-choice answer-option synthesis |
//! | `session`  | Per-answer records and session scoring |

pub mod abacus;
pub mod compiler;
pub mod error;
pub mod generator;
pub mod helpers;
pub mod models;
pub mod modes;
pub mod options;
pub mod session;

// Re-export the public API surface so callers can use
// `training_engine::generate_task` without reaching into sub-modules.
pub use abacus::{Abacus, Digit};
pub use compiler::build_steps;
pub use error::EngineError;
pub use generator::{generate_task, generate_task_with, replay_task};
pub use models::{
    AtomicStep, BeadState, ChainStep, ColumnDelta, CompiledStep, Constraints,
    DisplayHint, Sign, StepKind, StepOrigin, Task, TaskMode, TaskRequest, ValueRange,
};
pub use options::{generate_answer_options, generate_answer_options_with};
pub use session::{AnswerRecord, SessionSummary, SessionTracker};
