mod question;

pub use question::Question;

/// Screen the interactive quiz is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Menu,
    Quiz,
    Results,
}

/// How questions are asked during a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum QuizMode {
    /// Pick the correct answer from a shuffled list of choices.
    #[default]
    Choice,
    /// Type the words hidden from the correct answer.
    Blank,
}

impl QuizMode {
    pub fn toggle(self) -> Self {
        match self {
            QuizMode::Choice => QuizMode::Blank,
            QuizMode::Blank => QuizMode::Choice,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            QuizMode::Choice => "Multiple choice",
            QuizMode::Blank => "Fill in the blank",
        }
    }
}
