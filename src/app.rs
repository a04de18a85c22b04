use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::models::{AppState, Question, QuizMode};
use crate::quiz::{Prompt, QuizSession, SessionPlan};

pub struct App {
    pub state: AppState,
    bank: Vec<Question>,
    plan: SessionPlan,
    session: Option<QuizSession>,
    selected_option: usize,
    blank_input: String,
    feedback: Option<bool>,
    result_scroll: usize,
    rng: StdRng,
}

impl App {
    pub fn with_questions(bank: Vec<Question>, plan: SessionPlan) -> Self {
        Self::with_rng(bank, plan, StdRng::from_os_rng())
    }

    pub fn with_seed(bank: Vec<Question>, plan: SessionPlan, seed: u64) -> Self {
        Self::with_rng(bank, plan, StdRng::seed_from_u64(seed))
    }

    fn with_rng(bank: Vec<Question>, plan: SessionPlan, rng: StdRng) -> Self {
        Self {
            state: AppState::Menu,
            bank,
            plan,
            session: None,
            selected_option: 0,
            blank_input: String::new(),
            feedback: None,
            result_scroll: 0,
            rng,
        }
    }

    pub fn bank(&self) -> &[Question] {
        &self.bank
    }

    pub fn plan(&self) -> &SessionPlan {
        &self.plan
    }

    pub fn mode(&self) -> QuizMode {
        self.plan.mode
    }

    pub fn session(&self) -> Option<&QuizSession> {
        self.session.as_ref()
    }

    pub fn selected_option(&self) -> usize {
        self.selected_option
    }

    pub fn blank_input(&self) -> &str {
        &self.blank_input
    }

    /// `Some(correct)` once the current question has been answered.
    pub fn feedback(&self) -> Option<bool> {
        self.feedback
    }

    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    pub fn toggle_mode(&mut self) {
        if self.state == AppState::Menu {
            self.plan.mode = self.plan.mode.toggle();
        }
    }

    pub fn start_quiz(&mut self) {
        let session = QuizSession::start(&mut self.rng, &self.bank, self.plan);
        self.reset_question_state();
        self.result_scroll = 0;
        self.state = if session.is_empty() {
            AppState::Results
        } else {
            AppState::Quiz
        };
        self.session = Some(session);
    }

    fn option_count(&self) -> usize {
        match self.session.as_ref().and_then(QuizSession::prompt) {
            Some(Prompt::Choices(choices)) => choices.len(),
            _ => 0,
        }
    }

    pub fn select_next_option(&mut self) {
        let count = self.option_count();
        if count > 0 && self.feedback.is_none() {
            self.selected_option = (self.selected_option + 1) % count;
        }
    }

    pub fn select_previous_option(&mut self) {
        let count = self.option_count();
        if count > 0 && self.feedback.is_none() {
            self.selected_option = (self.selected_option + count - 1) % count;
        }
    }

    pub fn push_char(&mut self, c: char) {
        if self.feedback.is_none() {
            self.blank_input.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        if self.feedback.is_none() {
            self.blank_input.pop();
        }
    }

    /// First press answers the question, the next one moves on.
    pub fn submit_answer(&mut self) {
        if self.feedback.is_some() {
            self.next_question();
            return;
        }

        let Some(session) = self.session.as_mut() else {
            return;
        };
        let given = match session.prompt() {
            Some(Prompt::Choices(choices)) => match choices.get(self.selected_option) {
                Some(choice) => choice.clone(),
                None => return,
            },
            Some(Prompt::Blanks(_)) => self.blank_input.trim().to_string(),
            None => return,
        };

        self.feedback = session.submit(&given);
    }

    fn next_question(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let finished = session.advance(&mut self.rng);
        self.reset_question_state();

        if finished {
            self.state = AppState::Results;
        }
    }

    fn reset_question_state(&mut self) {
        self.selected_option = 0;
        self.blank_input.clear();
        self.feedback = None;
    }

    pub fn scroll_results_down(&mut self) {
        let total = self.session.as_ref().map_or(0, QuizSession::total);
        if self.result_scroll + 1 < total {
            self.result_scroll += 1;
        }
    }

    pub fn scroll_results_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }

    /// Abandon the current session and go back to the menu.
    pub fn back_to_menu(&mut self) {
        self.state = AppState::Menu;
        self.session = None;
        self.reset_question_state();
        self.result_scroll = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bank(count: usize) -> Vec<Question> {
        (0..count)
            .map(|i| Question {
                id: format!("q_{}", i + 1),
                ticket_number: 1,
                question: format!("Question {}", i + 1),
                answer: format!("Correct answer {}", i + 1),
                distractors: Vec::new(),
            })
            .collect()
    }

    fn select_correct(app: &mut App) {
        let session = app.session().unwrap();
        let answer = session.current_question().unwrap().answer.clone();
        let Some(Prompt::Choices(choices)) = session.prompt() else {
            panic!("expected choices");
        };
        let position = choices.iter().position(|c| *c == answer).unwrap();
        while app.selected_option() != position {
            app.select_next_option();
        }
    }

    #[test]
    fn full_choice_round() {
        let mut app = App::with_seed(bank(5), SessionPlan::default(), 1);
        app.start_quiz();
        assert_eq!(app.state, AppState::Quiz);

        for _ in 0..5 {
            select_correct(&mut app);
            app.submit_answer();
            assert_eq!(app.feedback(), Some(true));
            app.submit_answer();
        }

        assert_eq!(app.state, AppState::Results);
        let session = app.session().unwrap();
        assert_eq!(session.score(), 5);
        assert!(session.is_passed());
    }

    #[test]
    fn selection_wraps_around_choice_count() {
        let mut app = App::with_seed(bank(5), SessionPlan::default(), 2);
        app.start_quiz();

        app.select_previous_option();
        assert_eq!(app.selected_option(), 3);
        app.select_next_option();
        assert_eq!(app.selected_option(), 0);
    }

    #[test]
    fn selection_is_locked_after_answering() {
        let mut app = App::with_seed(bank(5), SessionPlan::default(), 3);
        app.start_quiz();
        app.submit_answer();

        app.select_next_option();
        assert_eq!(app.selected_option(), 0);
    }

    #[test]
    fn blank_mode_uses_typed_input() {
        let plan = SessionPlan {
            mode: QuizMode::Blank,
            ..SessionPlan::default()
        };
        let mut app = App::with_seed(bank(1), plan, 4);
        app.start_quiz();

        let Some(Prompt::Blanks(words)) = app.session().unwrap().prompt().cloned() else {
            panic!("expected blanks");
        };
        let guess: Vec<_> = words.iter().filter(|w| w.hidden).map(|w| w.clean.clone()).collect();
        for c in guess.join(" ").chars() {
            app.push_char(c);
        }
        app.push_char('x');
        app.pop_char();
        app.submit_answer();

        assert_eq!(app.feedback(), Some(true));
        app.submit_answer();
        assert_eq!(app.state, AppState::Results);
    }

    #[test]
    fn empty_bank_goes_straight_to_results() {
        let mut app = App::with_seed(Vec::new(), SessionPlan::default(), 5);
        app.start_quiz();

        assert_eq!(app.state, AppState::Results);
        assert!(!app.session().unwrap().is_passed());
    }

    #[test]
    fn back_to_menu_keeps_bank_and_allows_restart() {
        let mut app = App::with_seed(bank(30), SessionPlan::default(), 6);
        app.start_quiz();
        app.submit_answer();
        app.back_to_menu();

        assert_eq!(app.state, AppState::Menu);
        assert!(app.session().is_none());
        assert_eq!(app.bank().len(), 30);

        app.toggle_mode();
        assert_eq!(app.mode(), QuizMode::Blank);
        app.start_quiz();
        assert_eq!(app.session().unwrap().total(), 25);
    }
}
