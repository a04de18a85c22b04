use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::quiz::{BlankWord, Prompt, QuizSession};

const BLANK_FILL: &str = "_____";

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(session) = app.session() else {
        return;
    };
    let Some(question) = session.current_question() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(2),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_progress(frame, chunks[0], session);
    render_question_text(frame, chunks[1], &question.question);

    match session.prompt() {
        Some(Prompt::Choices(choices)) => render_options(
            frame,
            chunks[2],
            choices,
            &question.answer,
            app.selected_option(),
            app.feedback().is_some(),
        ),
        Some(Prompt::Blanks(words)) => render_blanks(
            frame,
            chunks[2],
            words,
            app.blank_input(),
            app.feedback().is_some(),
        ),
        None => {}
    }

    render_feedback(frame, chunks[3], app.feedback(), &question.answer);
    render_controls(frame, chunks[4], app);
}

fn render_progress(frame: &mut Frame, area: Rect, session: &QuizSession) {
    let line = Line::from(vec![
        Span::styled(
            format!("Ticket {}", session.current_question().map_or(0, |q| q.ticket_number)),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw("  ·  "),
        Span::styled(
            format!("Score: {}", session.score()),
            Style::default().fg(Color::Green),
        ),
        Span::raw("  ·  "),
        Span::styled(
            format!("{}/{}", session.current_index() + 1, session.total()),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Right), area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn option_label(index: usize) -> String {
    match u8::try_from(index) {
        Ok(i) if i < 26 => char::from(b'A' + i).to_string(),
        _ => (index + 1).to_string(),
    }
}

fn render_options(
    frame: &mut Frame,
    area: Rect,
    choices: &[String],
    answer: &str,
    selected: usize,
    revealed: bool,
) {
    let mut lines: Vec<Line> = Vec::with_capacity(choices.len() * 2);

    for (index, choice) in choices.iter().enumerate() {
        let is_selected = index == selected;
        let style = if revealed && choice == answer {
            Style::default().fg(Color::Green).bold()
        } else if revealed && is_selected {
            Style::default().fg(Color::Red).bold()
        } else if is_selected {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_selected { ">" } else { " " };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", option_label(index)), style),
            Span::styled(choice.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn render_blanks(frame: &mut Frame, area: Rect, words: &[BlankWord], input: &str, revealed: bool) {
    let mut spans = Vec::with_capacity(words.len() * 2);
    for word in words {
        let span = match (word.hidden, revealed) {
            (true, true) => Span::styled(
                word.text.as_str(),
                Style::default().fg(Color::Yellow).bold(),
            ),
            (true, false) => Span::styled(BLANK_FILL, Style::default().fg(Color::Yellow)),
            (false, _) => Span::styled(word.text.as_str(), Style::default().fg(Color::Gray)),
        };
        spans.push(span);
        spans.push(Span::raw(" "));
    }

    let blanks = words.iter().filter(|w| w.hidden).count();
    let content = vec![
        Line::from(spans),
        Line::from(""),
        Line::from(Span::styled(
            format!("Missing words ({}):", blanks),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(vec![
            Span::styled(" > ", Style::default().fg(Color::Cyan).bold()),
            Span::styled(input, Style::default().fg(Color::Cyan)),
        ]),
    ];

    let widget = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::NONE).padding(Padding::horizontal(1)));
    frame.render_widget(widget, area);
}

fn render_feedback(frame: &mut Frame, area: Rect, feedback: Option<bool>, answer: &str) {
    let line = match feedback {
        Some(true) => Line::from(Span::styled(
            "Correct!",
            Style::default().fg(Color::Green).bold(),
        )),
        Some(false) => Line::from(vec![
            Span::styled("Incorrect", Style::default().fg(Color::Red).bold()),
            Span::styled(
                format!("  ·  answer: {}", answer),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        None => Line::from(""),
    };
    frame.render_widget(
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn render_controls(frame: &mut Frame, area: Rect, app: &App) {
    let text = match (app.feedback(), app.session().and_then(QuizSession::prompt)) {
        (Some(_), _) => "enter next question  ·  esc menu  ·  q quit",
        (None, Some(Prompt::Blanks(_))) => "type the missing words  ·  enter submit  ·  esc menu",
        _ => "j/k navigate  ·  enter select  ·  esc menu  ·  q quit",
    };
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
