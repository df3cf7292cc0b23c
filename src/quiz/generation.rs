//! Question and distractor generation.
//!
//! Distractors are drawn by rejection sampling from three strategies that
//! produce plausible wrong answers: values near the answer, products from a
//! neighbouring row of the times table, and arbitrary single-digit products.

use super::types::Question;
use crate::core::constants::*;
use rand::seq::SliceRandom;
use rand::Rng;

/// How a distractor candidate is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistractorStrategy {
    /// `answer + d`, d in [-2, 2]
    NearAnswer,
    /// `(a + d) * b`, d in [-1, 1]
    NeighborRow,
    /// `x * y`, x and y in [1, 9]
    RandomProduct,
}

impl DistractorStrategy {
    /// Map a uniform roll in [0, 1) to a strategy (30% / 30% / 40%).
    pub fn from_roll(roll: f64) -> Self {
        if roll < NEAR_ANSWER_CHANCE {
            Self::NearAnswer
        } else if roll < NEAR_ANSWER_CHANCE + NEIGHBOR_ROW_CHANCE {
            Self::NeighborRow
        } else {
            Self::RandomProduct
        }
    }

    /// Draw one candidate. May be zero, negative, or equal to the answer.
    pub fn candidate<R: Rng>(self, a: u32, b: u32, rng: &mut R) -> i64 {
        let (a, b) = (a as i64, b as i64);
        match self {
            Self::NearAnswer => a * b + rng.gen_range(-NEAR_ANSWER_SPREAD..=NEAR_ANSWER_SPREAD),
            Self::NeighborRow => {
                (a + rng.gen_range(-NEIGHBOR_ROW_SPREAD..=NEIGHBOR_ROW_SPREAD)) * b
            }
            Self::RandomProduct => {
                rng.gen_range(1..=RANDOM_FACTOR_MAX) * rng.gen_range(1..=RANDOM_FACTOR_MAX)
            }
        }
    }
}

/// Generate a random question with operands in [2, 9].
pub fn generate_question<R: Rng>(rng: &mut R) -> Question {
    let a = rng.gen_range(MIN_OPERAND..=MAX_OPERAND);
    let b = rng.gen_range(MIN_OPERAND..=MAX_OPERAND);
    build_question(a, b, rng)
}

/// Build the option set for fixed operands.
pub fn build_question<R: Rng>(a: u32, b: u32, rng: &mut R) -> Question {
    let answer = a * b;
    let mut options = [answer; OPTION_COUNT];
    let mut filled = 1;
    let mut attempts = 0;

    while filled < OPTION_COUNT && attempts < MAX_DISTRACTOR_ATTEMPTS {
        attempts += 1;
        let strategy = DistractorStrategy::from_roll(rng.gen::<f64>());
        let candidate = strategy.candidate(a, b, rng);
        if let Some(value) = accept(candidate, &options[..filled]) {
            options[filled] = value;
            filled += 1;
        }
    }

    if filled < OPTION_COUNT {
        log::warn!(
            "distractor sampling for {}x{} gave up after {} attempts, using fallback",
            a,
            b,
            attempts
        );
        fill_sequential(answer, &mut options, filled);
    }

    options.shuffle(rng);

    Question {
        a,
        b,
        answer,
        options,
    }
}

/// Accept a candidate if it is positive and not already taken.
fn accept(candidate: i64, taken: &[u32]) -> Option<u32> {
    let value = u32::try_from(candidate).ok().filter(|&v| v > 0)?;
    (!taken.contains(&value)).then_some(value)
}

/// Fill remaining slots with answer+1, answer-1, answer+2, answer-2, ...
fn fill_sequential(answer: u32, options: &mut [u32; OPTION_COUNT], mut filled: usize) {
    let answer = answer as i64;
    let mut offset = 1;
    while filled < OPTION_COUNT {
        for candidate in [answer + offset, answer - offset] {
            if filled == OPTION_COUNT {
                break;
            }
            if let Some(value) = accept(candidate, &options[..filled]) {
                options[filled] = value;
                filled += 1;
            }
        }
        offset += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{RngCore, SeedableRng};
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    /// An RNG that only ever yields zero bits.
    struct StuckRng;

    impl RngCore for StuckRng {
        fn next_u32(&mut self) -> u32 {
            0
        }
        fn next_u64(&mut self) -> u64 {
            0
        }
        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(0);
        }
        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            dest.fill(0);
            Ok(())
        }
    }

    fn assert_valid(q: &Question) {
        let unique: HashSet<u32> = q.options.iter().copied().collect();
        assert_eq!(unique.len(), OPTION_COUNT, "options not distinct: {:?}", q);
        assert!(q.options.iter().all(|&o| o > 0), "non-positive option: {:?}", q);
        assert_eq!(
            q.options.iter().filter(|&&o| o == q.answer).count(),
            1,
            "answer missing or duplicated: {:?}",
            q
        );
    }

    #[test]
    fn test_strategy_from_roll() {
        assert_eq!(DistractorStrategy::from_roll(0.0), DistractorStrategy::NearAnswer);
        assert_eq!(DistractorStrategy::from_roll(0.29), DistractorStrategy::NearAnswer);
        assert_eq!(DistractorStrategy::from_roll(0.3), DistractorStrategy::NeighborRow);
        assert_eq!(DistractorStrategy::from_roll(0.59), DistractorStrategy::NeighborRow);
        assert_eq!(DistractorStrategy::from_roll(0.6), DistractorStrategy::RandomProduct);
        assert_eq!(DistractorStrategy::from_roll(0.99), DistractorStrategy::RandomProduct);
    }

    #[test]
    fn test_strategy_candidate_ranges() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..500 {
            let near = DistractorStrategy::NearAnswer.candidate(6, 7, &mut rng);
            assert!((40..=44).contains(&near));

            let row = DistractorStrategy::NeighborRow.candidate(6, 7, &mut rng);
            assert!([35, 42, 49].contains(&row));

            let product = DistractorStrategy::RandomProduct.candidate(6, 7, &mut rng);
            assert!((1..=81).contains(&product));
        }
    }

    #[test]
    fn test_generated_questions_are_valid() {
        let mut rng = ChaCha8Rng::seed_from_u64(12345);
        for _ in 0..2000 {
            let q = generate_question(&mut rng);
            assert!((MIN_OPERAND..=MAX_OPERAND).contains(&q.a));
            assert!((MIN_OPERAND..=MAX_OPERAND).contains(&q.b));
            assert_eq!(q.answer, q.a * q.b);
            assert!((4..=81).contains(&q.answer));
            assert_valid(&q);
        }
    }

    #[test]
    fn test_build_question_every_operand_pair() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        for a in MIN_OPERAND..=MAX_OPERAND {
            for b in MIN_OPERAND..=MAX_OPERAND {
                let q = build_question(a, b, &mut rng);
                assert_eq!(q.answer, a * b);
                assert_valid(&q);
            }
        }
    }

    #[test]
    fn test_build_question_four_times_five() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let q = build_question(4, 5, &mut rng);
        assert_eq!(q.answer, 20);
        assert!(q.options.contains(&20));
        assert_valid(&q);
    }

    #[test]
    fn test_same_seed_same_question() {
        let mut rng1 = ChaCha8Rng::seed_from_u64(2024);
        let mut rng2 = ChaCha8Rng::seed_from_u64(2024);
        assert_eq!(generate_question(&mut rng1), generate_question(&mut rng2));
    }

    #[test]
    fn test_answer_position_varies() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let slots: HashSet<usize> = (0..200)
            .filter_map(|_| generate_question(&mut rng).answer_slot())
            .collect();
        assert_eq!(slots.len(), OPTION_COUNT);
    }

    #[test]
    fn test_degenerate_rng_falls_back() {
        // Every draw yields the same candidate, so sampling can never fill
        // the set and the sequential filler must take over.
        let mut rng = StuckRng;
        let q = generate_question(&mut rng);
        assert_eq!(q.answer, q.a * q.b);
        assert_valid(&q);
    }

    #[test]
    fn test_fill_sequential_skips_taken_and_non_positive() {
        let mut options = [4, 3, 0, 0];
        fill_sequential(4, &mut options, 2);
        assert_eq!(options, [4, 3, 5, 6]);

        let mut options = [1, 0, 0, 0];
        fill_sequential(1, &mut options, 1);
        assert_eq!(options, [1, 2, 3, 4]);
    }

    #[test]
    fn test_accept() {
        assert_eq!(accept(12, &[10]), Some(12));
        assert_eq!(accept(10, &[10]), None);
        assert_eq!(accept(0, &[10]), None);
        assert_eq!(accept(-3, &[10]), None);
    }
}
