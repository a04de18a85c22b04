//! Fill-in-the-blank challenges built from a question's answer.

use std::collections::HashSet;

use rand::Rng;

use super::shuffle::shuffle;

const MAX_BLANKS: usize = 2;
const MIN_HIDDEN_LEN: usize = 6;

/// One word of a fill-in-the-blank answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlankWord {
    pub text: String,
    pub hidden: bool,
    /// Form a typed guess is compared against.
    pub clean: String,
}

/// Split `answer` into words and hide up to two of the longer ones.
pub fn generate_fill_blank<R: Rng + ?Sized>(rng: &mut R, answer: &str) -> Vec<BlankWord> {
    let words: Vec<&str> = answer.split(' ').collect();

    let candidates: Vec<usize> = words
        .iter()
        .enumerate()
        .filter(|(_, word)| is_blank_candidate(word))
        .map(|(index, _)| index)
        .collect();

    let hidden: HashSet<usize> = shuffle(rng, &candidates)
        .into_iter()
        .take(MAX_BLANKS)
        .collect();

    words
        .iter()
        .enumerate()
        .map(|(index, word)| BlankWord {
            text: word.to_string(),
            hidden: hidden.contains(&index),
            clean: clean_word(word),
        })
        .collect()
}

/// Whether `answer` has at least one word that could be hidden.
pub fn has_blank_candidates(answer: &str) -> bool {
    answer.split(' ').any(is_blank_candidate)
}

// Length ignores only `.` and `,`, but a word must keep letters once every
// stripped character is gone, or no guess could ever match it.
fn is_blank_candidate(word: &str) -> bool {
    word.replace(['.', ','], "").chars().count() >= MIN_HIDDEN_LEN && !clean_word(word).is_empty()
}

fn clean_word(word: &str) -> String {
    word.replace(['.', ',', ':', ';', '(', ')'], "")
}

/// Check typed words against the hidden words, in order, ignoring case.
pub fn check_blanks(words: &[BlankWord], guess: &str) -> bool {
    let mut guesses = guess.split_whitespace();
    let all_match = words
        .iter()
        .filter(|word| word.hidden)
        .all(|word| {
            guesses
                .next()
                .is_some_and(|g| g.to_lowercase() == word.clean.to_lowercase())
        });

    all_match && guesses.next().is_none()
}
