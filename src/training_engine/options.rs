//! Multiple-choice answer-option synthesis.
//!
//! Builds a unique option set around the true answer: near-miss distractors
//! first (small offsets in increasing magnitude, clipped to the range), then
//! uniform random top-up, then a shuffle so the correct answer's position
//! carries no signal.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Signed offsets tried in order for distractors close to the answer.
const OFFSETS: [i32; 18] = [
    1, -1, 2, -2, 3, -3, 4, -4, 5, -5, 6, -6, 7, -7, 8, -8, 9, -9,
];

/// Entropy-seeded convenience wrapper around
/// [`generate_answer_options_with`].
pub fn generate_answer_options(answer: i32, count: usize, range: (i32, i32)) -> Vec<i32> {
    let mut rng = StdRng::from_entropy();
    generate_answer_options_with(&mut rng, answer, count, range)
}

/// Build `count` unique values within the inclusive `range`, always
/// containing `answer`. `count` is floored at 2 (an answer needs at least one
/// distractor). The range must hold at least that many distinct integers or
/// the top-up loop cannot terminate.
pub fn generate_answer_options_with<R: Rng>(
    rng: &mut R,
    answer: i32,
    count: usize,
    range: (i32, i32),
) -> Vec<i32> {
    let size = count.max(2);
    let (min, max) = range;

    let mut options = vec![answer];
    for offset in OFFSETS {
        if options.len() >= size {
            break;
        }
        let candidate = answer + offset;
        if candidate < min || candidate > max {
            continue;
        }
        if !options.contains(&candidate) {
            options.push(candidate);
        }
    }

    while options.len() < size {
        let candidate = rng.gen_range(min..=max);
        if candidate == answer || options.contains(&candidate) {
            continue;
        }
        options.push(candidate);
    }

    // Fisher-Yates shuffle
    for i in (1..options.len()).rev() {
        let j = rng.gen_range(0..=i);
        options.swap(i, j);
    }

    options.truncate(size);
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn options_are_unique_in_range_and_contain_the_answer() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let options = generate_answer_options_with(&mut rng, 7, 4, (0, 9));
            assert_eq!(options.len(), 4);
            assert!(options.contains(&7));
            assert!(options.iter().all(|v| (0..=9).contains(v)));
            let unique: HashSet<i32> = options.iter().copied().collect();
            assert_eq!(unique.len(), 4);
        }
    }

    #[test]
    fn count_is_floored_at_two() {
        let mut rng = StdRng::seed_from_u64(5);
        let options = generate_answer_options_with(&mut rng, 3, 0, (0, 5));
        assert_eq!(options.len(), 2);
        assert!(options.contains(&3));
    }

    #[test]
    fn tight_ranges_still_fill_from_offsets() {
        // [0,2] holds exactly three values; offsets alone must cover them.
        let mut rng = StdRng::seed_from_u64(9);
        let mut options = generate_answer_options_with(&mut rng, 1, 3, (0, 2));
        options.sort_unstable();
        assert_eq!(options, vec![0, 1, 2]);
    }

    #[test]
    fn answer_position_varies_across_draws() {
        let mut rng = StdRng::seed_from_u64(17);
        let mut positions = HashSet::new();
        for _ in 0..100 {
            let options = generate_answer_options_with(&mut rng, 4, 3, (0, 9));
            positions.insert(options.iter().position(|&v| v == 4).unwrap());
        }
        assert!(positions.len() > 1, "shuffle must move the correct answer around");
    }
}
