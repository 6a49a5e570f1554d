use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::training_engine::helpers::build_trace;
use crate::training_engine::models::{DisplayHint, Task, TaskMode, TaskRequest};
use crate::training_engine::modes;

/// Generate one exercise. Total: the bounded random search is backed by a
/// deterministic fallback in both modes, so every request that reaches this
/// function produces a valid [`Task`].
pub fn generate_task(request: TaskRequest) -> Task {
    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    generate_task_with(&mut rng, request.mode, request.chain_length, request.display)
}

/// Core dispatch with a caller-supplied RNG — the substitution point for
/// deterministic tests.
pub fn generate_task_with<R: Rng>(
    rng: &mut R,
    mode: TaskMode,
    chain_length: usize,
    display: DisplayHint,
) -> Task {
    let length = chain_length.max(1);
    match mode {
        TaskMode::Simple => modes::simple::generate(rng, length, display),
        TaskMode::SimpleWithFive => modes::with_five::generate(rng, length, display),
    }
}

/// Recompute the full value trace of a task by cumulative summation:
/// `start`, then one entry per chain step. Length is always
/// `task.chain.len() + 1`. No legality re-derivation — the generator already
/// guaranteed it.
pub fn replay_task(task: &Task) -> Vec<i32> {
    build_trace(task.start, &task.chain)
}
