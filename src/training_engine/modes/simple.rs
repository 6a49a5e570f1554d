//! Lower-bead-only exercises: every intermediate value stays in [0,4], so a
//! learner never touches the five-bead.

use rand::Rng;

use crate::training_engine::helpers::{
    assemble_task, build_trace, random_item, LOWER_STEPS, MAX_ATTEMPTS,
};
use crate::training_engine::models::{
    ChainStep, Constraints, DisplayHint, StepOrigin, Task, ValueRange,
};

fn constraints() -> Constraints {
    Constraints::Simple { range: ValueRange::new(0, 4) }
}

/// Generate a lower-bead-only task of exactly `chain_length` steps.
/// Random search first, deterministic fallback if the attempt budget runs
/// out — this function is total.
pub fn generate<R: Rng>(rng: &mut R, chain_length: usize, display: DisplayHint) -> Task {
    try_random(rng, chain_length, display).unwrap_or_else(|| fallback(chain_length, display))
}

/// Bounded random walk: pick a start in [0,4], then at each step choose
/// uniformly among the signed magnitudes {±1..±4} that keep the running value
/// inside [0,4]. A step with no candidates aborts the attempt.
fn try_random<R: Rng>(rng: &mut R, chain_length: usize, display: DisplayHint) -> Option<Task> {
    for _ in 0..MAX_ATTEMPTS {
        let start = rng.gen_range(0..=4);
        let mut chain = Vec::with_capacity(chain_length);
        let mut state = start;

        for _ in 0..chain_length {
            let mut candidates = Vec::new();
            for magnitude in LOWER_STEPS {
                if state + magnitude <= 4 {
                    candidates.push(magnitude);
                }
                if state - magnitude >= 0 {
                    candidates.push(-magnitude);
                }
            }
            if candidates.is_empty() {
                break;
            }

            let delta = random_item(rng, &candidates);
            chain.push(ChainStep::from_delta(delta, StepOrigin::Lower));
            state += delta;
        }

        if chain.len() != chain_length {
            continue;
        }

        return Some(assemble_task(start, chain, state, constraints(), display));
    }

    None
}

/// Alternating +1/-1 from 0 — legal at every step for any length.
fn fallback(chain_length: usize, display: DisplayHint) -> Task {
    let chain: Vec<ChainStep> = (0..chain_length)
        .map(|index| {
            let delta = if index % 2 == 0 { 1 } else { -1 };
            ChainStep::from_delta(delta, StepOrigin::Lower)
        })
        .collect();
    let trace = build_trace(0, &chain);
    let answer = trace[trace.len() - 1];

    assemble_task(0, chain, answer, constraints(), display)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn fallback_is_legal_for_every_small_length() {
        for length in 1..=6 {
            let task = fallback(length, DisplayHint::Column);
            assert_eq!(task.chain.len(), length);
            assert_eq!(task.start, 0);
            let trace = build_trace(task.start, &task.chain);
            assert!(trace.iter().all(|v| (0..=4).contains(v)), "length {length}: {trace:?}");
            assert_eq!(*trace.last().unwrap(), task.answer);
        }
    }

    #[test]
    fn random_walk_never_leaves_the_lower_band() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let task = generate(&mut rng, 5, DisplayHint::Column);
            let trace = build_trace(task.start, &task.chain);
            assert!(trace.iter().all(|v| (0..=4).contains(v)), "{trace:?}");
            assert!(task.chain.iter().all(|s| s.magnitude <= 4 && s.origin == StepOrigin::Lower));
        }
    }
}
