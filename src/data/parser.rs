//! Text-to-records ingestion.
//!
//! The source corpus is a flat text file where every question starts with a
//! question marker and every answer variant starts with a variant marker:
//!
//! ```text
//! <question>What is 2+2?<variant>4.<variant>3<variant>5
//! ```
//!
//! The first variant is the correct answer, the remaining ones are
//! distractors.

use tracing::debug;

use crate::models::Question;

pub const DEFAULT_QUESTION_MARKER: &str = "<question>";
pub const DEFAULT_VARIANT_MARKER: &str = "<variant>";
pub const DEFAULT_TICKET_SIZE: usize = 20;

/// Output of a parse run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedBank {
    pub questions: Vec<Question>,
    /// Blocks that had no non-empty variant and were dropped.
    pub discarded: usize,
}

/// Splits raw corpus text into question records.
#[derive(Debug, Clone)]
pub struct QuestionParser {
    question_marker: String,
    variant_marker: String,
    ticket_size: usize,
}

impl Default for QuestionParser {
    fn default() -> Self {
        Self {
            question_marker: DEFAULT_QUESTION_MARKER.to_string(),
            variant_marker: DEFAULT_VARIANT_MARKER.to_string(),
            ticket_size: DEFAULT_TICKET_SIZE,
        }
    }
}

impl QuestionParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_markers(mut self, question: impl Into<String>, variant: impl Into<String>) -> Self {
        self.question_marker = question.into();
        self.variant_marker = variant.into();
        self
    }

    /// Sets the ticket size. Zero is treated as one.
    pub fn with_ticket_size(mut self, ticket_size: usize) -> Self {
        self.ticket_size = ticket_size.max(1);
        self
    }

    pub fn ticket_size(&self) -> usize {
        self.ticket_size
    }

    /// Parse the corpus. Malformed blocks are skipped, never reported as errors.
    pub fn parse(&self, input: &str) -> ParsedBank {
        let mut bank = ParsedBank::default();

        // Anything before the first question marker is preamble.
        for block in input.split(self.question_marker.as_str()).skip(1) {
            match self.parse_block(block) {
                Some((question, answer, distractors)) => {
                    let position = bank.questions.len();
                    bank.questions.push(Question {
                        id: format!("q_{}", position + 1),
                        ticket_number: ticket_number(position, self.ticket_size),
                        question,
                        answer,
                        distractors,
                    });
                }
                None => {
                    bank.discarded += 1;
                    debug!(block = %block.trim(), "discarding block without variants");
                }
            }
        }

        bank
    }

    fn parse_block(&self, block: &str) -> Option<(String, String, Vec<String>)> {
        let mut parts = block.split(self.variant_marker.as_str());
        let question = parts.next().unwrap_or_default().trim().to_string();

        let mut variants = parts
            .map(str::trim)
            .filter(|variant| !variant.is_empty())
            .map(str::to_string);

        let answer = strip_trailing_period(&variants.next()?).to_string();
        let distractors = variants.collect();

        Some((question, answer, distractors))
    }

    pub fn ticket_count(&self, questions: usize) -> usize {
        questions.div_ceil(self.ticket_size)
    }
}

/// Parse with the default markers and ticket size.
pub fn parse_questions(input: &str) -> Vec<Question> {
    QuestionParser::default().parse(input).questions
}

/// Ticket for the record at zero-based survivor `position`.
pub fn ticket_number(position: usize, ticket_size: usize) -> usize {
    position / ticket_size.max(1) + 1
}

/// Removes at most one trailing period.
pub fn strip_trailing_period(answer: &str) -> &str {
    answer.strip_suffix('.').unwrap_or(answer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn block(question: &str, variants: &[&str]) -> String {
        let mut text = format!("<question>{}", question);
        for variant in variants {
            text.push_str("<variant>");
            text.push_str(variant);
        }
        text
    }

    #[test]
    fn parses_single_question() {
        let questions = parse_questions("<question>What is 2+2?<variant>4.<variant>3<variant>5");

        assert_eq!(questions.len(), 1);
        let q = &questions[0];
        assert_eq!(q.id, "q_1");
        assert_eq!(q.ticket_number, 1);
        assert_eq!(q.question, "What is 2+2?");
        assert_eq!(q.answer, "4");
        assert_eq!(q.distractors, vec!["3", "5"]);
    }

    #[test]
    fn trims_whitespace_around_every_part() {
        let input = "<question>\n  Capital of France?\n<variant>  Paris.  \n<variant>\n Lyon \n";
        let questions = parse_questions(input);

        assert_eq!(questions[0].question, "Capital of France?");
        assert_eq!(questions[0].answer, "Paris");
        assert_eq!(questions[0].distractors, vec!["Lyon"]);
    }

    #[test]
    fn strips_only_one_trailing_period() {
        assert_eq!(strip_trailing_period("Paris."), "Paris");
        assert_eq!(strip_trailing_period("Paris"), "Paris");
        assert_eq!(strip_trailing_period("Paris.."), "Paris.");
    }

    #[test]
    fn distractors_keep_their_periods() {
        let questions = parse_questions(&block("Q", &["A.", "B.", "C."]));

        assert_eq!(questions[0].answer, "A");
        assert_eq!(questions[0].distractors, vec!["B.", "C."]);
    }

    #[test]
    fn empty_variants_are_dropped() {
        let questions = parse_questions(&block("Q", &["  ", "A", "", "B"]));

        assert_eq!(questions[0].answer, "A");
        assert_eq!(questions[0].distractors, vec!["B"]);
    }

    #[test]
    fn no_markers_yields_nothing() {
        assert!(parse_questions("").is_empty());
        assert!(parse_questions("just some text\nwithout markers").is_empty());
        assert!(parse_questions("<variant>orphan answer").is_empty());
    }

    #[test]
    fn preamble_before_first_marker_is_ignored() {
        let input = format!("Exam 2024\n{}", block("Q", &["A"]));
        let questions = parse_questions(&input);

        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].question, "Q");
    }

    #[test]
    fn blocks_without_variants_leave_no_gap_in_numbering() {
        let input = [
            block("first", &["a"]),
            block("no variants", &[]),
            block("blank variants", &["   ", ""]),
            block("second", &["b"]),
        ]
        .concat();

        let bank = QuestionParser::default().parse(&input);

        assert_eq!(bank.discarded, 2);
        let ids: Vec<_> = bank.questions.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids, vec!["q_1", "q_2"]);
        assert_eq!(bank.questions[1].question, "second");
    }

    #[test]
    fn ticket_boundary_uses_survivor_positions() {
        let mut input = block("dropped", &[]);
        for i in 0..21 {
            input.push_str(&block(&format!("Q{}", i), &["A"]));
        }

        let questions = parse_questions(&input);

        assert_eq!(questions.len(), 21);
        assert_eq!(questions[19].ticket_number, 1);
        assert_eq!(questions[20].ticket_number, 2);
        assert_eq!(questions[20].id, "q_21");
    }

    #[test]
    fn custom_markers_and_ticket_size() {
        let parser = QuestionParser::new()
            .with_markers("##", "--")
            .with_ticket_size(2);
        let bank = parser.parse("##one--1##two--2##three--3");

        let tickets: Vec<_> = bank.questions.iter().map(|q| q.ticket_number).collect();
        assert_eq!(tickets, vec![1, 1, 2]);
        assert_eq!(parser.ticket_count(bank.questions.len()), 2);
    }

    #[test]
    fn ticket_count_rounds_up() {
        let parser = QuestionParser::default();

        assert_eq!(parser.ticket_count(0), 0);
        assert_eq!(parser.ticket_count(20), 1);
        assert_eq!(parser.ticket_count(21), 2);
    }

    proptest! {
        #[test]
        fn ticket_number_matches_formula(position in 0usize..10_000) {
            prop_assert_eq!(ticket_number(position, 20), position / 20 + 1);
        }

        #[test]
        fn every_block_with_a_variant_survives(
            answers in proptest::collection::vec("[a-z]{1,8}", 0..40)
        ) {
            let input: String = answers.iter().map(|a| block("Q", &[a.as_str()])).collect();
            let questions = parse_questions(&input);

            prop_assert_eq!(questions.len(), answers.len());
            for (index, question) in questions.iter().enumerate() {
                prop_assert_eq!(&question.id, &format!("q_{}", index + 1));
                prop_assert_eq!(&question.answer, &answers[index]);
            }
        }
    }
}
