//! Multiple-choice option generation.
//!
//! A question that carries authored distractors is always shown with all of
//! them. A question without any borrows answers from other questions in the
//! pool instead.

use rand::Rng;

use super::shuffle::shuffle;
use crate::models::Question;

/// Distractors sampled from the pool when a question has none of its own.
pub const POOL_DISTRACTORS: usize = 3;

/// Build the shuffled choice set for `current`, sampling up to
/// [`POOL_DISTRACTORS`] pool answers when needed.
pub fn generate_quiz_options<R: Rng + ?Sized>(
    rng: &mut R,
    current: &Question,
    pool: &[Question],
) -> Vec<String> {
    generate_quiz_options_with(rng, current, pool, POOL_DISTRACTORS)
}

/// Same as [`generate_quiz_options`] with an explicit pool sample size.
///
/// A pool with fewer than `pool_distractors` other questions yields a smaller
/// choice set. Sampled answers are not compared against the correct answer,
/// so identical answer text in two records can produce duplicate choices.
pub fn generate_quiz_options_with<R: Rng + ?Sized>(
    rng: &mut R,
    current: &Question,
    pool: &[Question],
    pool_distractors: usize,
) -> Vec<String> {
    let distractors: Vec<String> = if current.has_distractors() {
        current.distractors.clone()
    } else {
        let other_answers: Vec<&str> = pool
            .iter()
            .filter(|q| q.id != current.id)
            .map(|q| q.answer.as_str())
            .collect();

        shuffle(rng, &other_answers)
            .into_iter()
            .take(pool_distractors)
            .map(str::to_string)
            .collect()
    };

    let mut choices = Vec::with_capacity(distractors.len() + 1);
    choices.push(current.answer.clone());
    choices.extend(distractors);

    shuffle(rng, &choices)
}
