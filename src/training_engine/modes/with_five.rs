//! Mixed exercises: lower-bead moves plus the five-bead toggle. The chain
//! must engage the five-bead at least once, toggle use is capped, and the
//! final answer lands back in [0,5] even though intermediate values may
//! reach 9.

use rand::Rng;

use crate::training_engine::helpers::{
    assemble_task, random_item, LOWER_STEPS, MAX_ATTEMPTS,
};
use crate::training_engine::models::{
    ChainStep, Constraints, DisplayHint, StepOrigin, Task, ValueRange,
};

/// Default cap on five-bead toggles per chain.
pub const DEFAULT_TOGGLE_LIMIT: u8 = 2;

fn constraints(toggle_limit: u8) -> Constraints {
    Constraints::WithFive { range: ValueRange::new(0, 5), toggle_limit }
}

#[derive(Clone, Copy)]
struct Candidate {
    delta: i32,
    origin: StepOrigin,
}

/// Generate a mixed task of exactly `chain_length` steps with the default
/// toggle budget.
pub fn generate<R: Rng>(rng: &mut R, chain_length: usize, display: DisplayHint) -> Task {
    generate_with_limit(rng, chain_length, display, DEFAULT_TOGGLE_LIMIT)
}

/// As [`generate`], with an explicit toggle budget (floored at 1 — a chain
/// that may never toggle could not satisfy the five-bead requirement).
pub fn generate_with_limit<R: Rng>(
    rng: &mut R,
    chain_length: usize,
    display: DisplayHint,
    toggle_limit: u8,
) -> Task {
    let toggle_cap = toggle_limit.max(1);
    try_random(rng, chain_length, display, toggle_cap)
        .unwrap_or_else(|| fallback(chain_length, display, toggle_cap))
}

/// Lower-bead deltas legal from `state`, relative to whether the five-bead is
/// engaged. With the bead down the walk lives in [0,4]; with it up the lower
/// beads move the value within [5,9] only — crossing 5 requires a toggle.
fn enumerate_lower_deltas(state: i32, has_upper: bool) -> Vec<i32> {
    let mut deltas = Vec::new();
    for magnitude in LOWER_STEPS {
        let up = state + magnitude;
        let down = state - magnitude;

        if !has_upper {
            if up <= 4 {
                deltas.push(magnitude);
            }
        } else if up <= 9 {
            deltas.push(magnitude);
        }

        if !has_upper {
            if down >= 0 {
                deltas.push(-magnitude);
            }
        } else if state - 5 >= magnitude {
            deltas.push(-magnitude);
        }
    }
    deltas
}

/// Bounded random walk over mixed candidates.
///
/// Each step gathers the legal lower deltas plus the toggle moves still
/// inside the budget, then applies the last-step rules: the final value may
/// not exceed 5, and if the five-bead is still unused the candidate set is
/// forced to toggles only (an empty forced set aborts the attempt — for
/// `chain_length == 1` this makes the single step always a toggle).
fn try_random<R: Rng>(
    rng: &mut R,
    chain_length: usize,
    display: DisplayHint,
    toggle_cap: u8,
) -> Option<Task> {
    for _ in 0..MAX_ATTEMPTS {
        let start = rng.gen_range(0..=5);
        let mut state = start;
        let mut chain = Vec::with_capacity(chain_length);
        let mut toggles = 0u8;
        let mut used_upper = false;

        for index in 0..chain_length {
            let is_last = index == chain_length - 1;
            let has_upper = state >= 5;

            let mut candidates: Vec<Candidate> = enumerate_lower_deltas(state, has_upper)
                .into_iter()
                .map(|delta| Candidate { delta, origin: StepOrigin::Lower })
                .collect();
            if state <= 4 && toggles < toggle_cap {
                candidates.push(Candidate { delta: 5, origin: StepOrigin::Upper });
            }
            if state >= 5 && toggles < toggle_cap {
                candidates.push(Candidate { delta: -5, origin: StepOrigin::Upper });
            }

            let mut pool: Vec<Candidate> = candidates
                .into_iter()
                .filter(|c| {
                    let target = state + c.delta;
                    if c.origin == StepOrigin::Upper {
                        if c.delta == 5 && state > 4 {
                            return false;
                        }
                        if c.delta == -5 && state < 5 {
                            return false;
                        }
                        return !(is_last && target > 5);
                    }

                    if !has_upper {
                        if !(0..=4).contains(&target) {
                            return false;
                        }
                    } else if !(5..=9).contains(&target) {
                        return false;
                    }

                    !(is_last && target > 5)
                })
                .collect();

            if is_last && !used_upper {
                pool.retain(|c| c.origin == StepOrigin::Upper);
            }
            if pool.is_empty() {
                break;
            }

            let choice = random_item(rng, &pool);
            chain.push(ChainStep::from_delta(choice.delta, choice.origin));
            state += choice.delta;
            if choice.origin == StepOrigin::Upper {
                toggles += 1;
                used_upper = true;
            }

            if !(0..=9).contains(&state) {
                break;
            }
        }

        if chain.len() != chain_length {
            continue;
        }
        if !(0..=5).contains(&state) {
            continue;
        }
        if !used_upper {
            continue;
        }

        return Some(assemble_task(start, chain, state, constraints(toggle_cap), display));
    }

    None
}

/// Toggle up, toggle back down, then alternate +1/bounded -1 — engages the
/// five-bead by construction and never leaves the advertised ranges.
fn fallback(chain_length: usize, display: DisplayHint, toggle_cap: u8) -> Task {
    let mut chain = Vec::with_capacity(chain_length);
    let mut current = 0;

    for index in 0..chain_length {
        if index == 0 {
            chain.push(ChainStep::from_delta(5, StepOrigin::Upper));
            current = 5;
        } else if index == 1 {
            chain.push(ChainStep::from_delta(-5, StepOrigin::Upper));
            current = 0;
        } else if current == 0 {
            chain.push(ChainStep::from_delta(1, StepOrigin::Lower));
            current = 1;
        } else {
            chain.push(ChainStep::from_delta(-1, StepOrigin::Lower));
            current -= 1;
        }
    }
    let answer = current.clamp(0, 5);

    assemble_task(0, chain, answer, constraints(toggle_cap), display)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::training_engine::helpers::build_trace;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn lower_deltas_respect_the_engagement_band() {
        // Five-bead down: plain [0,4] walk.
        assert_eq!(enumerate_lower_deltas(0, false), vec![1, 2, 3, 4]);
        assert_eq!(enumerate_lower_deltas(4, false), vec![-1, -2, -3, -4]);
        assert_eq!(enumerate_lower_deltas(2, false), vec![1, -1, 2, -2]);

        // Five-bead up: value moves within [5,9] only.
        assert_eq!(enumerate_lower_deltas(5, true), vec![1, 2, 3, 4]);
        assert_eq!(enumerate_lower_deltas(9, true), vec![-1, -2, -3, -4]);
        assert_eq!(enumerate_lower_deltas(7, true), vec![1, -1, 2, -2]);
    }

    #[test]
    fn fallback_always_engages_the_five_bead() {
        for length in 1..=6 {
            let task = fallback(length, DisplayHint::Column, DEFAULT_TOGGLE_LIMIT);
            assert_eq!(task.chain.len(), length);
            assert!(task.chain.iter().any(|s| s.origin == StepOrigin::Upper));
            assert!((0..=5).contains(&task.answer), "length {length}");

            let trace = build_trace(task.start, &task.chain);
            assert_eq!(*trace.last().unwrap(), task.answer);
            assert!(trace.iter().all(|v| (0..=9).contains(v)));
        }
    }

    #[test]
    fn single_step_chains_are_always_a_toggle() {
        // With one step the "five-bead unused" rule forces the toggle, so
        // every single-step task is start ±5.
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..100 {
            let task = generate(&mut rng, 1, DisplayHint::Column);
            assert_eq!(task.chain.len(), 1);
            assert_eq!(task.chain[0].origin, StepOrigin::Upper);
            assert_eq!(task.chain[0].magnitude, 5);
            assert!((0..=5).contains(&task.answer));
        }
    }

    #[test]
    fn toggle_budget_is_never_exceeded() {
        let mut rng = StdRng::seed_from_u64(23);
        for _ in 0..200 {
            let task = generate(&mut rng, 6, DisplayHint::Column);
            let toggles = task.chain.iter().filter(|s| s.origin == StepOrigin::Upper).count();
            assert!(toggles >= 1, "five-bead must be used");
            assert!(
                toggles <= usize::from(DEFAULT_TOGGLE_LIMIT),
                "{toggles} toggles exceeds the cap"
            );
        }
    }
}
