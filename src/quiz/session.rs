//! A single run through a working subset of the question bank.

use rand::Rng;
use tracing::{info, warn};

use super::blank::{BlankWord, check_blanks, generate_fill_blank, has_blank_candidates};
use super::options::generate_quiz_options_with;
use super::shuffle::shuffle;
use crate::models::{Question, QuizMode};

pub const DEFAULT_SESSION_SIZE: usize = 25;
pub const DEFAULT_PASS_PERCENTAGE: u8 = 60;

/// How a session picks its questions from the bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionPlan {
    pub mode: QuizMode,
    /// Restrict to one ticket.
    pub ticket: Option<usize>,
    /// Maximum number of questions; `0` means no limit.
    pub size: usize,
    pub pass_percentage: u8,
    pub pool_distractors: usize,
}

impl Default for SessionPlan {
    fn default() -> Self {
        Self {
            mode: QuizMode::Choice,
            ticket: None,
            size: DEFAULT_SESSION_SIZE,
            pass_percentage: DEFAULT_PASS_PERCENTAGE,
            pool_distractors: super::options::POOL_DISTRACTORS,
        }
    }
}

/// Prompt for the question currently on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt {
    Choices(Vec<String>),
    Blanks(Vec<BlankWord>),
}

/// Outcome of one answered question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    pub question_index: usize,
    pub given: String,
    pub correct: bool,
}

pub struct QuizSession {
    plan: SessionPlan,
    questions: Vec<Question>,
    current: usize,
    prompt: Option<Prompt>,
    answers: Vec<AnswerRecord>,
}

impl QuizSession {
    /// Pick a shuffled working subset from `bank`. The bank itself is untouched.
    pub fn start<R: Rng + ?Sized>(rng: &mut R, bank: &[Question], plan: SessionPlan) -> Self {
        let eligible: Vec<Question> = bank
            .iter()
            .filter(|q| plan.ticket.is_none_or(|ticket| q.ticket_number == ticket))
            .filter(|q| plan.mode != QuizMode::Blank || has_blank_candidates(&q.answer))
            .cloned()
            .collect();

        let mut questions = shuffle(rng, &eligible);
        if plan.size > 0 {
            questions.truncate(plan.size);
        }

        info!(
            mode = plan.mode.label(),
            ticket = ?plan.ticket,
            questions = questions.len(),
            eligible = eligible.len(),
            "starting quiz session"
        );

        if questions.is_empty() {
            warn!(ticket = ?plan.ticket, "no questions match the session plan");
        }

        let mut session = Self {
            plan,
            questions,
            current: 0,
            prompt: None,
            answers: Vec::new(),
        };
        session.prepare_prompt(rng);
        session
    }

    fn prepare_prompt<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.prompt = self.questions.get(self.current).map(|question| match self.plan.mode {
            QuizMode::Choice => Prompt::Choices(generate_quiz_options_with(
                rng,
                question,
                &self.questions,
                self.plan.pool_distractors,
            )),
            QuizMode::Blank => Prompt::Blanks(generate_fill_blank(rng, &question.answer)),
        });
    }

    pub fn plan(&self) -> &SessionPlan {
        &self.plan
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    pub fn prompt(&self) -> Option<&Prompt> {
        self.prompt.as_ref()
    }

    /// Whether the current question already has an answer recorded.
    pub fn is_answered(&self) -> bool {
        self.answers
            .last()
            .is_some_and(|record| record.question_index == self.current)
    }

    pub fn is_finished(&self) -> bool {
        self.current >= self.questions.len()
    }

    /// Record `given` for the current question and return whether it was right.
    ///
    /// Returns `None` when there is no current question or it was already
    /// answered.
    pub fn submit(&mut self, given: &str) -> Option<bool> {
        if self.is_answered() {
            return None;
        }
        let question = self.current_question()?;

        let correct = match &self.prompt {
            Some(Prompt::Blanks(words)) => check_blanks(words, given),
            _ => given == question.answer,
        };

        self.answers.push(AnswerRecord {
            question_index: self.current,
            given: given.to_string(),
            correct,
        });
        Some(correct)
    }

    /// Move past the current question. Returns `true` once the session is over.
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if !self.is_finished() {
            self.current += 1;
            self.prepare_prompt(rng);
        }
        self.is_finished()
    }

    pub fn score(&self) -> usize {
        self.answers.iter().filter(|a| a.correct).count()
    }

    pub fn percentage(&self) -> f64 {
        percentage(self.score(), self.total())
    }

    pub fn is_passed(&self) -> bool {
        self.percentage() >= f64::from(self.plan.pass_percentage)
    }

    /// Answer given for the question at `index`, if any.
    pub fn answer_for(&self, index: usize) -> Option<&AnswerRecord> {
        self.answers.iter().find(|a| a.question_index == index)
    }
}

pub fn percentage(score: usize, total: usize) -> f64 {
    if total > 0 {
        (score as f64 / total as f64) * 100.0
    } else {
        0.0
    }
}
