//! Quiz logic independent of the terminal UI.

mod blank;
mod options;
mod session;
mod shuffle;

pub use blank::{BlankWord, check_blanks, generate_fill_blank, has_blank_candidates};
pub use options::{POOL_DISTRACTORS, generate_quiz_options, generate_quiz_options_with};
pub use session::{
    AnswerRecord, DEFAULT_PASS_PERCENTAGE, DEFAULT_SESSION_SIZE, Prompt, QuizSession,
    SessionPlan, percentage,
};
pub use shuffle::shuffle;
