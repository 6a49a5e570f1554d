//! The two exercise families, each built as a bounded-retry constrained
//! random walk with a deterministic fallback.
//!
//! Both modules expose the same two-phase shape:
//!
//! ```ignore
//! fn try_random<R: Rng>(rng: &mut R, length: usize, display: DisplayHint) -> Option<Task>;
//! fn fallback(length: usize, display: DisplayHint) -> Task;
//! ```
//!
//! composed by a public `generate` that therefore never fails to return a
//! task. The generator dispatches to these via `generator.rs`.

/// Lower beads only, values pinned to [0,4].
pub mod simple;
/// Lower beads plus the five-bead toggle, answers pinned to [0,5].
pub mod with_five;
