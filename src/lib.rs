//! # ticket-quiz
//!
//! A terminal quiz trainer for marked-up question banks.
//!
//! Question banks start life as a flat text file:
//!
//! ```text
//! <question>What is 2+2?<variant>4.<variant>3<variant>5
//! ```
//!
//! [`data::convert_file`] turns that into a JSON bank grouped into tickets of
//! 20 questions, and [`Quiz`] runs a multiple-choice or fill-in-the-blank
//! session over it.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ticket_quiz::{Config, Quiz, QuizError, QuizMode};
//!
//! fn main() -> Result<(), QuizError> {
//!     let config = Config::default();
//!     let quiz = Quiz::from_json("questions.json", &config, QuizMode::Choice, None)?;
//!     quiz.run()?;
//!     Ok(())
//! }
//! ```

mod app;
pub mod config;
pub mod data;
pub mod logging;
mod models;
pub mod quiz;
pub mod terminal;
mod ui;

use std::io;
use std::path::Path;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use thiserror::Error;
use tracing::info;

use crate::terminal::{QuizTerminal, TerminalSession};

pub use app::App;
pub use config::{Config, ConfigError};
pub use data::{LoadError, load_questions_from_json};
pub use models::{AppState, Question, QuizMode};

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("Failed to load questions: {0}")]
    Load(#[from] LoadError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// A quiz instance that can be run in the terminal.
pub struct Quiz {
    app: App,
}

impl Quiz {
    /// Create a quiz over `questions` using the session settings in `config`.
    pub fn new(
        questions: Vec<Question>,
        config: &Config,
        mode: QuizMode,
        ticket: Option<usize>,
    ) -> Self {
        let plan = config.session_plan(mode, ticket);
        let app = match config.seed {
            Some(seed) => App::with_seed(questions, plan, seed),
            None => App::with_questions(questions, plan),
        };
        Self { app }
    }

    /// Load a quiz from a JSON question bank.
    pub fn from_json<P: AsRef<Path>>(
        path: P,
        config: &Config,
        mode: QuizMode,
        ticket: Option<usize>,
    ) -> Result<Self, QuizError> {
        let questions = load_questions_from_json(&path)?;
        info!(
            path = %path.as_ref().display(),
            questions = questions.len(),
            "loaded question bank"
        );
        Ok(Self::new(questions, config, mode, ticket))
    }

    /// Run the quiz in the terminal until the user quits.
    pub fn run(mut self) -> Result<(), QuizError> {
        let mut session = TerminalSession::enter()?;
        let result = run_event_loop(session.terminal(), &mut self.app);
        session.leave()?;
        result
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(terminal: &mut QuizTerminal, app: &mut App) -> Result<(), QuizError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code) {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    match app.state {
        AppState::Menu => handle_menu_input(app, key),
        AppState::Quiz => match app.mode() {
            QuizMode::Choice => handle_choice_input(app, key),
            QuizMode::Blank => handle_blank_input(app, key),
        },
        AppState::Results => handle_result_input(app, key),
    }
}

fn handle_menu_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Enter => {
            app.start_quiz();
            false
        }
        KeyCode::Char('m') | KeyCode::Char('M') => {
            app.toggle_mode();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        _ => false,
    }
}

fn handle_choice_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.select_previous_option();
            false
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.select_next_option();
            false
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.submit_answer();
            false
        }
        KeyCode::Esc => {
            app.back_to_menu();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

// Letters are answer text here, so quitting goes through the menu.
fn handle_blank_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Enter => app.submit_answer(),
        KeyCode::Backspace => app.pop_char(),
        KeyCode::Char(c) => app.push_char(c),
        KeyCode::Esc => app.back_to_menu(),
        _ => {}
    }
    false
}

fn handle_result_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Down | KeyCode::Char('j') => {
            app.scroll_results_down();
            false
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.scroll_results_up();
            false
        }
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Esc => {
            app.back_to_menu();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}
